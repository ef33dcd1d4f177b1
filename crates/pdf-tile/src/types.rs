use crate::layout::{ImageDims, PageSize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TileError {
    #[error("Expected an even number of images, got {count}")]
    OddImageCount { count: usize },
    #[error(
        "Images in pair {pair} have different dimensions: {}x{} and {}x{}",
        .first.width, .first.height, .second.width, .second.height
    )]
    MismatchedPairDimensions {
        pair: usize,
        first: ImageDims,
        second: ImageDims,
    },
    #[error(
        "Image of {}x{} px cannot be tiled onto pages of {}x{} px",
        .image.width, .image.height, .page.width, .page.height
    )]
    IncompatibleDimensions { image: ImageDims, page: PageSize },
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Image error in {}: {source}", .path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Unsupported image format: {}", .path.display())]
    UnsupportedFormat { path: PathBuf },
    #[error("PDF error: {0}")]
    Pdf(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

impl TileError {
    pub(crate) fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        TileError::Io {
            path: path.as_ref().to_owned(),
            source,
        }
    }

    pub(crate) fn image(path: impl AsRef<Path>, source: image::ImageError) -> Self {
        TileError::Image {
            path: path.as_ref().to_owned(),
            source,
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            TileError::OddImageCount { .. } => 1,
            TileError::MismatchedPairDimensions { .. } => 2,
            TileError::IncompatibleDimensions { .. } => 3,
            TileError::Io { .. } | TileError::Image { .. } | TileError::UnsupportedFormat { .. } => 4,
            TileError::Pdf(_) | TileError::Config(_) | TileError::TaskJoin(_) => 5,
        }
    }
}

pub type Result<T> = std::result::Result<T, TileError>;

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height > width (default for most paper sizes)
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

/// Standard paper sizes
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaperSize {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
    Custom { width_mm: f32, height_mm: f32 },
}

impl PaperSize {
    /// Get base dimensions (always portrait: width < height for standard sizes)
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A5 => (148.0, 210.0),
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Legal => (215.9, 355.6),
            PaperSize::Tabloid => (279.4, 431.8),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }

    /// Get dimensions with orientation applied
    pub fn dimensions_with_orientation(self, orientation: Orientation) -> (f32, f32) {
        let (w, h) = self.dimensions_mm();
        let (short, long) = if w <= h { (w, h) } else { (h, w) };
        match orientation {
            Orientation::Portrait => (short, long),
            Orientation::Landscape => (long, short),
        }
    }
}

/// Summary of a tiling run
#[derive(Debug, Clone, PartialEq)]
pub struct TilingStatistics {
    /// Number of input images
    pub source_images: usize,
    /// Number of image pairs (front/back)
    pub pairs: usize,
    /// Tile rows per image (largest across pairs)
    pub rows: usize,
    /// Tile columns per image (largest across pairs)
    pub cols: usize,
    /// Total tiles cut from all images
    pub tiles: usize,
    /// Output page count
    pub output_pages: usize,
    /// Physical sheets when printed duplex
    pub output_sheets: usize,
    /// Images turned 90 degrees to match the page orientation
    pub rotated_images: usize,
}
