use crate::layout::{ImageDims, check_image_count, pair_grids};
use crate::options::TileOptions;
use crate::types::*;

/// Calculate statistics for a tiling run
pub fn calculate_statistics(
    images: &[ImageDims],
    options: &TileOptions,
) -> Result<TilingStatistics> {
    check_image_count(images.len())?;
    let page = options.page_size();

    let mut stats = TilingStatistics {
        source_images: images.len(),
        pairs: 0,
        rows: 0,
        cols: 0,
        tiles: 0,
        output_pages: 0,
        output_sheets: 0,
        rotated_images: 0,
    };

    for (pair, dims) in images.chunks_exact(2).enumerate() {
        let (front, back) = pair_grids(pair, dims[0], dims[1], page)?;

        stats.pairs += 1;
        stats.rows = stats.rows.max(front.rows);
        stats.cols = stats.cols.max(front.cols);
        stats.tiles += front.tile_count() + back.tile_count();
        stats.rotated_images += front.rotated as usize + back.rotated as usize;
    }

    // One page per tile, front and back of each sheet
    stats.output_pages = stats.tiles;
    stats.output_sheets = stats.output_pages / 2;

    Ok(stats)
}
