//! Page planning for a whole run
//!
//! Groups images into sheet pairs, tiles each one and concatenates the
//! interleaved pages. Pure: works on dimensions only.

use crate::types::{Result, TileError};

use super::{ImageDims, PageInstruction, PageSize, TileGrid, interleave, tile_grid};

/// Fail with `OddImageCount` unless `count` is even
pub fn check_image_count(count: usize) -> Result<()> {
    if count % 2 != 0 {
        return Err(TileError::OddImageCount { count });
    }
    Ok(())
}

/// Tile both images of a pair and check they produce the same grid.
///
/// Each image makes its own rotation decision; after rotation the two must
/// have identical dimensions.
pub fn pair_grids(
    pair: usize,
    first: ImageDims,
    second: ImageDims,
    page: PageSize,
) -> Result<(TileGrid, TileGrid)> {
    let front = tile_grid(first, page)?;
    let back = tile_grid(second, page)?;

    if front.image != back.image {
        return Err(TileError::MismatchedPairDimensions {
            pair,
            first: front.image,
            second: back.image,
        });
    }

    Ok((front, back))
}

/// Compute the ordered output pages for a list of images.
///
/// Consecutive images form pairs: image `2n` is printed on the fronts and
/// image `2n + 1` on the backs.
pub fn plan_pages(images: &[ImageDims], page: PageSize) -> Result<Vec<PageInstruction>> {
    check_image_count(images.len())?;

    let mut pages = Vec::new();
    for (pair, dims) in images.chunks_exact(2).enumerate() {
        let (front, back) = pair_grids(pair, dims[0], dims[1], page)?;
        pages.extend(interleave(&front, &back, pair * 2));
    }

    Ok(pages)
}
