use pdf_tile::constants::{mm_to_px, px_to_pt};
use pdf_tile::*;
use std::path::PathBuf;

#[test]
fn test_paper_size_dimensions() {
    assert_eq!(PaperSize::A4.dimensions_mm(), (210.0, 297.0));
    assert_eq!(PaperSize::A3.dimensions_mm(), (297.0, 420.0));
    assert_eq!(PaperSize::A5.dimensions_mm(), (148.0, 210.0));
    assert_eq!(PaperSize::Letter.dimensions_mm(), (215.9, 279.4));
    assert_eq!(PaperSize::Legal.dimensions_mm(), (215.9, 355.6));
    assert_eq!(PaperSize::Tabloid.dimensions_mm(), (279.4, 431.8));

    let custom = PaperSize::Custom {
        width_mm: 100.0,
        height_mm: 200.0,
    };
    assert_eq!(custom.dimensions_mm(), (100.0, 200.0));
}

#[test]
fn test_dimensions_with_orientation() {
    assert_eq!(
        PaperSize::A4.dimensions_with_orientation(Orientation::Portrait),
        (210.0, 297.0)
    );
    assert_eq!(
        PaperSize::A4.dimensions_with_orientation(Orientation::Landscape),
        (297.0, 210.0)
    );

    // A custom size given landscape is still normalised by orientation
    let wide = PaperSize::Custom {
        width_mm: 300.0,
        height_mm: 100.0,
    };
    assert_eq!(
        wide.dimensions_with_orientation(Orientation::Portrait),
        (100.0, 300.0)
    );
}

#[test]
fn test_unit_conversion() {
    assert_eq!(mm_to_px(50.8, 100), 200);
    assert_eq!(px_to_pt(600, 300), 144.0);
}

#[test]
fn test_exit_codes() {
    let odd = TileError::OddImageCount { count: 3 };
    assert_eq!(odd.exit_code(), 1);

    let mismatched = TileError::MismatchedPairDimensions {
        pair: 0,
        first: ImageDims::new(1, 2),
        second: ImageDims::new(3, 4),
    };
    assert_eq!(mismatched.exit_code(), 2);

    let incompatible = TileError::IncompatibleDimensions {
        image: ImageDims::new(0, 2),
        page: PageSize::new(1, 1),
    };
    assert_eq!(incompatible.exit_code(), 3);

    let io = TileError::Io {
        path: PathBuf::from("missing.png"),
        source: std::io::Error::from(std::io::ErrorKind::NotFound),
    };
    assert_eq!(io.exit_code(), 4);
}

#[test]
fn test_error_messages_name_the_problem() {
    let odd = TileError::OddImageCount { count: 3 };
    assert_eq!(odd.to_string(), "Expected an even number of images, got 3");

    let io = TileError::Io {
        path: PathBuf::from("missing.png"),
        source: std::io::Error::from(std::io::ErrorKind::NotFound),
    };
    assert!(io.to_string().contains("missing.png"));

    let mismatched = TileError::MismatchedPairDimensions {
        pair: 2,
        first: ImageDims::new(100, 200),
        second: ImageDims::new(100, 300),
    };
    assert!(mismatched.to_string().contains("100x200 and 100x300"));
}
