use pdf_tile::layout::*;
use pdf_tile::TileError;
use proptest::prelude::*;

fn member_positions(pages: &[PageInstruction]) -> Vec<(PairMember, usize, usize)> {
    pages
        .iter()
        .map(|p| (p.member, p.tile.position.row, p.tile.position.col))
        .collect()
}

#[test]
fn test_plan_two_column_pair() {
    let images = vec![ImageDims::new(200, 100), ImageDims::new(200, 100)];
    let pages = plan_pages(&images, PageSize::new(100, 100)).unwrap();

    assert_eq!(
        member_positions(&pages),
        vec![
            (PairMember::A, 0, 0),
            (PairMember::B, 0, 1),
            (PairMember::A, 0, 1),
            (PairMember::B, 0, 0),
        ]
    );
}

#[test]
fn test_plan_partial_tiles_keep_source_rects() {
    let images = vec![ImageDims::new(250, 150), ImageDims::new(250, 150)];
    let pages = plan_pages(&images, PageSize::new(100, 100)).unwrap();

    assert_eq!(pages.len(), 12);

    // Front of the first sheet is a full tile, its back is the narrow edge tile
    assert_eq!(pages[0].tile.source, PixelRect::new(0, 0, 100, 100));
    assert_eq!(pages[1].tile.source, PixelRect::new(200, 0, 50, 100));

    // Last sheet: bottom-right corner on the front, bottom-left on the back
    assert_eq!(pages[10].tile.source, PixelRect::new(200, 100, 50, 50));
    assert_eq!(pages[11].tile.source, PixelRect::new(0, 100, 100, 50));
}

#[test]
fn test_plan_rotated_pair_reports_rotation() {
    let images = vec![ImageDims::new(400, 200), ImageDims::new(200, 400)];
    let pages = plan_pages(&images, PageSize::new(200, 300)).unwrap();

    // Both images tile as 200x400 portrait: 1 column, 2 rows
    assert_eq!(pages.len(), 4);
    assert_eq!(pages[0].rotation_degrees, 90);
    assert_eq!(pages[1].rotation_degrees, 0);
}

#[test]
fn test_plan_incompatible_image() {
    let images = vec![ImageDims::new(0, 100), ImageDims::new(0, 100)];
    let result = plan_pages(&images, PageSize::new(100, 100));
    assert!(matches!(
        result,
        Err(TileError::IncompatibleDimensions { .. })
    ));
}

#[test]
fn test_plan_mismatch_beyond_rotation() {
    let images = vec![ImageDims::new(200, 100), ImageDims::new(100, 300)];
    let result = plan_pages(&images, PageSize::new(100, 150));
    assert!(matches!(
        result,
        Err(TileError::MismatchedPairDimensions { pair: 0, .. })
    ));
}

proptest! {
    #[test]
    fn tiles_cover_image_exactly(
        width in 1u32..2000,
        height in 1u32..2000,
        page_width in 20u32..500,
        page_height in 20u32..500,
    ) {
        let grid = tile_grid(ImageDims::new(width, height), PageSize::new(page_width, page_height))?;
        let tiles = grid.tiles();

        prop_assert_eq!(tiles.len(), grid.rows * grid.cols);

        let area: u64 = tiles.iter().map(|t| t.source.area()).sum();
        prop_assert_eq!(area, grid.image.width as u64 * grid.image.height as u64);

        for tile in &tiles {
            prop_assert!(tile.source.width > 0 && tile.source.height > 0);
            prop_assert!(tile.source.right() <= grid.image.width);
            prop_assert!(tile.source.bottom() <= grid.image.height);

            // Only the last column and row may be partial
            if tile.position.col + 1 < grid.cols {
                prop_assert_eq!(tile.source.width, page_width);
            }
            if tile.position.row + 1 < grid.rows {
                prop_assert_eq!(tile.source.height, page_height);
            }
        }

        // Neighbouring tiles abut without gaps
        for pair in tiles.windows(2) {
            if pair[0].position.row == pair[1].position.row {
                prop_assert_eq!(pair[0].source.right(), pair[1].source.x);
            }
        }
    }

    #[test]
    fn interleave_alternates_and_mirrors(
        cols in 1u32..=4,
        rows in 1u32..=4,
    ) {
        let dims = ImageDims::new(cols * 100, rows * 100);
        let pages = plan_pages(&[dims, dims], PageSize::new(100, 100))?;

        prop_assert_eq!(pages.len(), 2 * (rows * cols) as usize);

        for (i, page) in pages.iter().enumerate() {
            let expected = if i % 2 == 0 { PairMember::A } else { PairMember::B };
            prop_assert_eq!(page.member, expected);
        }

        for sheet in pages.chunks(2) {
            let (front, back) = (sheet[0].tile.position, sheet[1].tile.position);
            prop_assert_eq!(back.row, front.row);
            prop_assert_eq!(back.col, cols as usize - 1 - front.col);
        }
    }
}
