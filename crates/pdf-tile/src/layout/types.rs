//! Layout data types for tiling
//!
//! These types represent the intermediate layout calculations between
//! image loading and PDF rendering. All geometry is in pixels.

/// Printable page area in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageSize {
    pub width: u32,
    pub height: u32,
}

impl PageSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}

/// Image dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageDims {
    pub width: u32,
    pub height: u32,
}

impl ImageDims {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// Dimensions after a quarter turn
    pub fn rotated(&self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }
}

/// A rectangular region of an image in pixels, origin at the top-left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (exclusive)
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive)
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// Position within the tile grid (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPosition {
    /// Row index (0 = top row)
    pub row: usize,
    /// Column index (0 = leftmost column)
    pub col: usize,
}

impl GridPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A page-sized crop of a source image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// Where this tile sits in the image's grid
    pub position: GridPosition,
    /// Source region, clipped to the image bounds
    pub source: PixelRect,
}

/// How one image is cut into page tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    /// Number of tile rows
    pub rows: usize,
    /// Number of tile columns
    pub cols: usize,
    /// Whether the image is turned 90 degrees before cutting
    pub rotated: bool,
    /// Image dimensions after rotation
    pub image: ImageDims,
    /// Page the tiles are cut to
    pub page: PageSize,
}

impl TileGrid {
    /// Total number of tiles
    pub fn tile_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Tile at a grid position.
    ///
    /// Tiles on the right and bottom edges are clipped to the image.
    pub fn tile(&self, position: GridPosition) -> Tile {
        let x = position.col as u32 * self.page.width;
        let y = position.row as u32 * self.page.height;
        let width = self.page.width.min(self.image.width.saturating_sub(x));
        let height = self.page.height.min(self.image.height.saturating_sub(y));

        Tile {
            position,
            source: PixelRect::new(x, y, width, height),
        }
    }

    /// All tiles in row-major order (top-to-bottom, left-to-right)
    pub fn tiles(&self) -> Vec<Tile> {
        let mut tiles = Vec::with_capacity(self.tile_count());
        for row in 0..self.rows {
            for col in 0..self.cols {
                tiles.push(self.tile(GridPosition::new(row, col)));
            }
        }
        tiles
    }

    /// Rotation applied to the source image in degrees
    pub fn rotation_degrees(&self) -> i32 {
        if self.rotated { 90 } else { 0 }
    }
}

/// Which physical side of the printed sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetSide {
    /// Front of the sheet (printed first in duplex)
    Front,
    /// Back of the sheet (printed second in duplex)
    Back,
}

/// Which image of a sheet pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairMember {
    /// First image, printed on the fronts
    A,
    /// Second image, printed on the backs
    B,
}

/// One output page: which image, which tile, and how to draw it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInstruction {
    /// Index of the source image in the input list
    pub image_index: usize,
    /// Which image of its pair
    pub member: PairMember,
    /// Which side of the sheet this page lands on
    pub side: SheetSide,
    /// The tile to draw
    pub tile: Tile,
    /// Rotation applied to the source image before cropping (0 or 90)
    pub rotation_degrees: i32,
}
