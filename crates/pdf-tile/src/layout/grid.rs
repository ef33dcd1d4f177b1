//! Tile grid calculation
//!
//! This module decides whether an image is turned to match the page and
//! how many page-sized tiles it is cut into.

use crate::types::{Result, TileError};

use super::{ImageDims, PageSize, TileGrid};

// =============================================================================
// Rotation
// =============================================================================

/// Whether an image should be turned 90 degrees before tiling.
///
/// An image is turned when its orientation (portrait/landscape) differs from
/// the page's, so that its aspect ratio matches the rotated page better.
/// Square images and square pages are never turned.
pub fn needs_rotation(image: ImageDims, page: PageSize) -> bool {
    if image.is_square() || page.is_square() {
        return false;
    }
    image.is_landscape() != page.is_landscape()
}

// =============================================================================
// Grid Creation
// =============================================================================

/// Create the tile grid for one image.
///
/// # Arguments
/// * `image` - Source image dimensions in pixels, before any rotation
/// * `page` - Printable page size in pixels
///
/// # Errors
/// `IncompatibleDimensions` if the image or the page has a zero dimension.
pub fn tile_grid(image: ImageDims, page: PageSize) -> Result<TileGrid> {
    if image.width == 0 || image.height == 0 || page.width == 0 || page.height == 0 {
        return Err(TileError::IncompatibleDimensions { image, page });
    }

    let rotated = needs_rotation(image, page);
    let effective = if rotated { image.rotated() } else { image };

    let cols = effective.width.div_ceil(page.width) as usize;
    let rows = effective.height.div_ceil(page.height) as usize;

    Ok(TileGrid {
        rows,
        cols,
        rotated,
        image: effective,
        page,
    })
}

// =============================================================================
// Tests
// =============================================================================
