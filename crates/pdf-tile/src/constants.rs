//! Shared constants for image tiling
//!
//! Unit conversions between millimetres, pixels and PDF points, plus the
//! defaults used when no paper size is given.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Millimetres per inch
pub const MM_PER_INCH: f32 = 25.4;

/// PDF points per inch
pub const POINTS_PER_INCH: f32 = 72.0;

/// Convert millimetres to whole pixels at the given resolution (rounded down)
#[inline]
pub fn mm_to_px(mm: f32, dpi: u32) -> u32 {
    (mm / MM_PER_INCH * dpi as f32).floor() as u32
}

/// Convert pixels to points at the given resolution
#[inline]
pub fn px_to_pt(px: u32, dpi: u32) -> f32 {
    px as f32 * POINTS_PER_INCH / dpi as f32
}

/// Convert pixels to millimetres at the given resolution
#[inline]
pub fn px_to_mm(px: u32, dpi: u32) -> f32 {
    px as f32 * MM_PER_INCH / dpi as f32
}

// =============================================================================
// Defaults
// =============================================================================

/// Default image resolution
pub const DEFAULT_DPI: u32 = 300;

/// Default printable width in millimetres
pub const DEFAULT_PRINT_WIDTH_MM: f32 = 312.0;

/// Default printable height in millimetres
pub const DEFAULT_PRINT_HEIGHT_MM: f32 = 440.0;

/// Title written into the output document
pub const DOCUMENT_TITLE: &str = "Tiled images";
