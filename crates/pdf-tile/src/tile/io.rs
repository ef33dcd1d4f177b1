//! Image and document I/O

use crate::constants::px_to_pt;
use crate::layout::check_image_count;
use crate::loader::{ImageLoader, SourceImage};
use crate::types::*;
use log::debug;
use std::path::Path;

/// Load and decode a single image
pub async fn load_image(path: impl AsRef<Path>) -> Result<SourceImage> {
    let path = path.as_ref().to_owned();
    let loader = ImageLoader::for_path(&path)?;
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| TileError::io(&path, e))?;
    let image = tokio::task::spawn_blocking(move || loader.decode(&path, &bytes)).await??;

    let dims = image.dims();
    debug!(
        "Loaded {} ({}x{} px)",
        image.path.display(),
        dims.width,
        dims.height
    );
    Ok(image)
}

/// Load images in order.
///
/// Fails with `OddImageCount` before any file is read.
pub async fn load_images(paths: &[impl AsRef<Path>]) -> Result<Vec<SourceImage>> {
    check_image_count(paths.len())?;

    let mut images = Vec::with_capacity(paths.len());
    for path in paths {
        images.push(load_image(path).await?);
    }
    Ok(images)
}

/// Write the finished PDF
pub async fn save_pdf(bytes: Vec<u8>, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    tokio::fs::write(path, bytes)
        .await
        .map_err(|e| TileError::io(path, e))?;
    Ok(())
}

/// Log an image or page size in pixels and points
pub(crate) fn log_size(label: &str, width: u32, height: u32, dpi: u32) {
    debug!("{} (width x height):", label);
    debug!("Pixels: {} x {}", width, height);
    debug!(
        "Points: {} x {}",
        px_to_pt(width, dpi),
        px_to_pt(height, dpi)
    );
}
