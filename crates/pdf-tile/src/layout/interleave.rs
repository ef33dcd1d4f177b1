//! Front/back page ordering for duplex printing
//!
//! Flipping a printed sheet mirrors it horizontally, so the tile printed on
//! the back of column `c` must come from column `cols - 1 - c` of the back
//! image for both sides to line up.

use super::{GridPosition, PageInstruction, PairMember, SheetSide, TileGrid};

/// Column on the back of the sheet behind `col` on the front
pub fn mirrored_col(cols: usize, col: usize) -> usize {
    cols - 1 - col
}

/// Interleave the tiles of a sheet pair.
///
/// Both grids must have the same rows and columns. For each tile position in
/// row-major order, emits the front tile of image A followed by the
/// mirrored back tile of image B.
///
/// # Arguments
/// * `front` - Grid of image A
/// * `back` - Grid of image B
/// * `front_index` - Input index of image A (image B is assumed to follow it)
pub fn interleave(front: &TileGrid, back: &TileGrid, front_index: usize) -> Vec<PageInstruction> {
    debug_assert_eq!((front.rows, front.cols), (back.rows, back.cols));

    let mut pages = Vec::with_capacity(front.tile_count() * 2);

    for row in 0..front.rows {
        for col in 0..front.cols {
            pages.push(PageInstruction {
                image_index: front_index,
                member: PairMember::A,
                side: SheetSide::Front,
                tile: front.tile(GridPosition::new(row, col)),
                rotation_degrees: front.rotation_degrees(),
            });
            pages.push(PageInstruction {
                image_index: front_index + 1,
                member: PairMember::B,
                side: SheetSide::Back,
                tile: back.tile(GridPosition::new(row, mirrored_col(back.cols, col))),
                rotation_degrees: back.rotation_degrees(),
            });
        }
    }

    pages
}
