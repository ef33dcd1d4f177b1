//! Tiled PDF generation
//!
//! This module orchestrates a run:
//! 1. Check the image count and load the images
//! 2. Plan tile grids and the interleaved page order
//! 3. Render every planned page to PDF

mod io;
mod render;

pub use io::{load_image, load_images, save_pdf};

use crate::layout::{ImageDims, check_image_count, plan_pages};
use crate::loader::SourceImage;
use crate::options::TileOptions;
use crate::types::*;
use io::log_size;
use log::info;
use render::render_document;

/// Tile the images into a double-sided PDF and return its bytes.
///
/// Images are taken in pairs: the first of each pair fills the fronts and the
/// second the backs. Nothing is written; pass the bytes to [`save_pdf`].
pub async fn tile_images(images: Vec<SourceImage>, options: &TileOptions) -> Result<Vec<u8>> {
    check_image_count(images.len())?;
    if images.is_empty() {
        return Err(TileError::Config("No input files specified".to_string()));
    }

    let options = options.clone();

    tokio::task::spawn_blocking(move || tile_images_sync(&images, &options)).await?
}

fn tile_images_sync(images: &[SourceImage], options: &TileOptions) -> Result<Vec<u8>> {
    let page = options.page_size();
    log_size("Printable paper size", page.width, page.height, options.dpi);

    let dims: Vec<ImageDims> = images.iter().map(SourceImage::dims).collect();
    if let Some(first) = dims.first() {
        log_size("Image size", first.width, first.height, options.dpi);
    }

    let pages = plan_pages(&dims, page)?;
    info!(
        "Tiling {} image pairs onto {} pages",
        images.len() / 2,
        pages.len()
    );

    render_document(images, &pages, page, options.dpi)
}
