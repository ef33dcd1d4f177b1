use crate::constants::{DEFAULT_DPI, DEFAULT_PRINT_HEIGHT_MM, DEFAULT_PRINT_WIDTH_MM, mm_to_px};
use crate::layout::{PageSize, check_image_count};
use crate::types::*;
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tiling configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TileOptions {
    // Input
    pub input_files: Vec<PathBuf>,

    // Output page
    pub paper_size: PaperSize,
    pub orientation: Orientation,

    /// Resolution the images are printed at
    pub dpi: u32,
}

impl Default for TileOptions {
    fn default() -> Self {
        Self {
            input_files: Vec::new(),
            paper_size: PaperSize::Custom {
                width_mm: DEFAULT_PRINT_WIDTH_MM,
                height_mm: DEFAULT_PRINT_HEIGHT_MM,
            },
            orientation: Orientation::Portrait,
            dpi: DEFAULT_DPI,
        }
    }
}

impl TileOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| TileError::io(path, e))?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| TileError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| TileError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json)
            .await
            .map_err(|e| TileError::io(path, e))?;
        Ok(())
    }

    /// Paper dimensions in millimetres with orientation applied
    pub fn paper_mm(&self) -> (f32, f32) {
        self.paper_size.dimensions_with_orientation(self.orientation)
    }

    /// Printable page size in pixels at the configured DPI
    pub fn page_size(&self) -> PageSize {
        let (width_mm, height_mm) = self.paper_mm();
        PageSize::new(mm_to_px(width_mm, self.dpi), mm_to_px(height_mm, self.dpi))
    }

    /// Validate the options.
    ///
    /// The image count is checked first so an odd count is reported before
    /// anything else is looked at.
    pub fn validate(&self) -> Result<()> {
        check_image_count(self.input_files.len())?;

        if self.input_files.is_empty() {
            return Err(TileError::Config("No input files specified".to_string()));
        }

        if self.dpi == 0 {
            return Err(TileError::Config("DPI must be greater than zero".to_string()));
        }

        let (width_mm, height_mm) = self.paper_mm();
        if !(width_mm.is_finite() && height_mm.is_finite()) {
            return Err(TileError::Config("Paper size must be finite".to_string()));
        }

        let page = self.page_size();
        if page.width == 0 || page.height == 0 {
            return Err(TileError::Config(format!(
                "Paper size {}x{}mm is smaller than one pixel at {} dpi",
                width_mm, height_mm, self.dpi
            )));
        }

        Ok(())
    }
}
