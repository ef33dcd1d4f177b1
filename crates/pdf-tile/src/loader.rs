//! Raster image loading
//!
//! Each supported file format is one `ImageLoader` variant. The loader is
//! picked from the file extension and decodes with the `image` crate.

use crate::layout::ImageDims;
use crate::types::{Result, TileError};
use image::{DynamicImage, ImageFormat};
use std::path::{Path, PathBuf};

/// Decoder for one supported image format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageLoader {
    Png,
    Jpeg,
    Gif,
    Bmp,
    Tiff,
    WebP,
}

impl ImageLoader {
    /// All supported loaders
    pub const ALL: [ImageLoader; 6] = [
        ImageLoader::Png,
        ImageLoader::Jpeg,
        ImageLoader::Gif,
        ImageLoader::Bmp,
        ImageLoader::Tiff,
        ImageLoader::WebP,
    ];

    /// File extensions handled by this loader (lowercase)
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            ImageLoader::Png => &["png"],
            ImageLoader::Jpeg => &["jpg", "jpeg"],
            ImageLoader::Gif => &["gif"],
            ImageLoader::Bmp => &["bmp"],
            ImageLoader::Tiff => &["tif", "tiff"],
            ImageLoader::WebP => &["webp"],
        }
    }

    /// Pick the loader for a path by its extension
    pub fn for_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .ok_or_else(|| TileError::UnsupportedFormat {
                path: path.to_owned(),
            })?;

        Self::ALL
            .into_iter()
            .find(|loader| loader.extensions().contains(&ext.as_str()))
            .ok_or_else(|| TileError::UnsupportedFormat {
                path: path.to_owned(),
            })
    }

    fn format(self) -> ImageFormat {
        match self {
            ImageLoader::Png => ImageFormat::Png,
            ImageLoader::Jpeg => ImageFormat::Jpeg,
            ImageLoader::Gif => ImageFormat::Gif,
            ImageLoader::Bmp => ImageFormat::Bmp,
            ImageLoader::Tiff => ImageFormat::Tiff,
            ImageLoader::WebP => ImageFormat::WebP,
        }
    }

    /// Decode image bytes read from `path`
    pub fn decode(self, path: impl AsRef<Path>, bytes: &[u8]) -> Result<SourceImage> {
        let path = path.as_ref();
        let image = image::load_from_memory_with_format(bytes, self.format())
            .map_err(|e| TileError::image(path, e))?;

        Ok(SourceImage::new(path, image))
    }
}

/// A decoded source image
#[derive(Debug, Clone)]
pub struct SourceImage {
    /// File the image was read from
    pub path: PathBuf,
    /// Decoded pixels
    pub image: DynamicImage,
}

impl SourceImage {
    pub fn new(path: impl Into<PathBuf>, image: DynamicImage) -> Self {
        Self {
            path: path.into(),
            image,
        }
    }

    /// Pixel dimensions
    pub fn dims(&self) -> ImageDims {
        ImageDims::new(self.image.width(), self.image.height())
    }
}
