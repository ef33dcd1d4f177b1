//! PDF rendering for tiled pages
//!
//! Each planned page gets its tile cut out of the (optionally rotated)
//! source image and drawn unscaled at the top-left corner of the page.

use crate::constants::{DOCUMENT_TITLE, px_to_mm, px_to_pt};
use crate::layout::{PageInstruction, PageSize, PixelRect};
use crate::loader::SourceImage;
use crate::types::{Result, TileError};
use ::image::{DynamicImage, ImageFormat};
use log::debug;
use printpdf::*;
use std::collections::HashMap;
use std::io::Cursor;

use super::io::log_size;

/// Render planned pages into PDF bytes.
///
/// # Arguments
/// * `images` - Source images, indexed by `PageInstruction::image_index`
/// * `pages` - Pages in output order
/// * `page` - Printable page size in pixels
/// * `dpi` - Resolution mapping pixels to points
pub(crate) fn render_document(
    images: &[SourceImage],
    pages: &[PageInstruction],
    page: PageSize,
    dpi: u32,
) -> Result<Vec<u8>> {
    let mut doc = PdfDocument::new(DOCUMENT_TITLE);

    let page_width_mm = px_to_mm(page.width, dpi);
    let page_height_mm = px_to_mm(page.height, dpi);
    let page_height_pt = px_to_pt(page.height, dpi);

    let mut rotated: HashMap<usize, DynamicImage> = HashMap::new();

    for instruction in pages {
        let source = images.get(instruction.image_index).ok_or_else(|| {
            TileError::Config(format!(
                "Page refers to missing image {}",
                instruction.image_index
            ))
        })?;

        // Rotated copies are only needed while their pair is being drawn
        let pair = instruction.image_index / 2;
        rotated.retain(|index, _| index / 2 == pair);

        let oriented = if instruction.rotation_degrees == 90 {
            &*rotated
                .entry(instruction.image_index)
                .or_insert_with(|| source.image.rotate270())
        } else {
            &source.image
        };

        let rect = instruction.tile.source;
        let tile_image = crop_tile(oriented, rect);
        log_size("Image piece size", rect.width, rect.height, dpi);

        let raw = encode_tile(&tile_image)?;
        let image_id = doc.add_image(&raw);

        // Anchor to the top-left corner, PDF origin is bottom-left
        let tile_height_pt = px_to_pt(rect.height, dpi);
        let ops = vec![Op::UseXobject {
            id: image_id,
            transform: XObjectTransform {
                translate_x: Some(Pt(0.0)),
                translate_y: Some(Pt(page_height_pt - tile_height_pt)),
                dpi: Some(dpi as f32),
                ..Default::default()
            },
        }];

        doc.pages
            .push(PdfPage::new(Mm(page_width_mm), Mm(page_height_mm), ops));
    }

    debug!("Rendered {} pages", doc.pages.len());

    let mut warnings = Vec::new();
    let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);

    Ok(bytes)
}

/// Cut a tile out of an already oriented image
pub(crate) fn crop_tile(image: &DynamicImage, rect: PixelRect) -> DynamicImage {
    image.crop_imm(rect.x, rect.y, rect.width, rect.height)
}

/// Encode a tile as PNG and hand it to printpdf
fn encode_tile(tile: &DynamicImage) -> Result<RawImage> {
    let mut png = Vec::new();
    DynamicImage::ImageRgb8(tile.to_rgb8())
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|e| TileError::Pdf(format!("Failed to encode tile: {}", e)))?;

    let mut warnings = Vec::new();
    RawImage::decode_from_bytes(&png, &mut warnings)
        .map_err(|e| TileError::Pdf(format!("Failed to embed tile: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::image::{GenericImageView, Rgb, RgbImage};

    fn gradient(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            Rgb([x as u8, y as u8, 0])
        }))
    }

    #[test]
    fn test_crop_tile_takes_source_region() {
        let image = gradient(250, 150);
        let tile = crop_tile(&image, PixelRect::new(200, 100, 50, 50));

        assert_eq!(tile.dimensions(), (50, 50));
        assert_eq!(tile.get_pixel(0, 0).0[..3], [200, 100, 0]);
    }

    #[test]
    fn test_rotated_source_is_counter_clockwise() {
        // Top-right pixel of a landscape image ends up top-left once turned
        let image = gradient(30, 10);
        let turned = image.rotate270();

        assert_eq!(turned.dimensions(), (10, 30));
        assert_eq!(turned.get_pixel(0, 0).0[..3], [29, 0, 0]);
    }
}
