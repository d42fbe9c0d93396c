// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (surface size, margins, font sizes).

/// Default surface width in pixels.
pub const WIDTH: u32 = 800;
/// Default surface height in pixels.
pub const HEIGHT: u32 = 500;

pub const TITLE_FONT_SIZE: f64 = 16.0;
pub const AXIS_TITLE_FONT_SIZE: f64 = 14.0;
pub const LABEL_FONT_SIZE: f64 = 12.0;

/// Font fallback list shared by every backend so exported and rasterized text match.
pub const FONT_FAMILIES: &[&str] = &["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"];

/// Screen margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Insets {
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(80.0, 80.0, 40.0, 60.0)
    }
}

/// Rough advance width of `text` at `font_size`. Layout only needs a stable
/// estimate; backends align text with real metrics when painting.
pub fn estimate_text_width(text: &str, font_size: f64) -> f64 {
    text.chars().count() as f64 * font_size * 0.6
}
