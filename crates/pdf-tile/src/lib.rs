pub mod constants;
pub mod layout;
mod loader;
mod options;
mod stats;
pub mod tile;
mod types;

pub use layout::{ImageDims, PageInstruction, PageSize, plan_pages};
pub use loader::{ImageLoader, SourceImage};
pub use options::*;
pub use stats::calculate_statistics;
pub use tile::{load_image, load_images, save_pdf, tile_images};
pub use types::*;
