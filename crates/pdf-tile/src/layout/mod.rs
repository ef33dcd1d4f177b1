//! Layout calculation modules for tiling
//!
//! This module handles all the geometric calculations:
//! - Tile grids (rotation, rows and columns, source rectangles)
//! - Front/back interleaving for duplex printing
//! - Page planning across image pairs

mod grid;
mod interleave;
mod plan;
mod types;

pub use grid::*;
pub use interleave::*;
pub use plan::*;
pub use types::*;
