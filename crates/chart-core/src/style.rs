// File: crates/chart-core/src/style.rs
// Summary: Per-column visual styles (color, dash, marker) and the fixed series palette.

use std::fmt;
use std::str::FromStr;

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// 8-bit RGBA color. Serialized as `#rrggbb` (alpha is always opaque in configs).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#rrggbb` or `rrggbb`.
    pub fn from_hex(s: &str) -> Result<Self, ChartError> {
        let parsed: Srgb<u8> = Srgb::from_str(s.trim()).map_err(|_| ChartError::InvalidColor(s.to_string()))?;
        Ok(Self::rgb(parsed.red, parsed.green, parsed.blue))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Alpha as a 0..=1 fraction.
    pub fn opacity(&self) -> f64 {
        self.a as f64 / 255.0
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgba {
    type Err = ChartError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Rgba {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Series palette. Default styles cycle through it in order.
pub const PALETTE: [Rgba; 12] = [
    Rgba::rgb(0x25, 0x63, 0xEB), // blue
    Rgba::rgb(0x0D, 0x94, 0x88), // teal
    Rgba::rgb(0x7C, 0x3A, 0xED), // purple
    Rgba::rgb(0x10, 0xB9, 0x81), // green
    Rgba::rgb(0xF5, 0x9E, 0x0B), // amber
    Rgba::rgb(0xDC, 0x26, 0x26), // red
    Rgba::rgb(0x63, 0x66, 0xF1), // indigo
    Rgba::rgb(0xEC, 0x48, 0x99), // pink
    Rgba::rgb(0x8B, 0x5C, 0xF6), // violet
    Rgba::rgb(0x14, 0xB8, 0xA6), // light teal
    Rgba::rgb(0xF9, 0x73, 0x16), // orange
    Rgba::rgb(0x06, 0xB6, 0xD4), // cyan
];

/// Palette color for the `index`-th series or column, wrapping around.
pub fn palette_color(index: usize) -> Rgba {
    PALETTE[index % PALETTE.len()]
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl LineStyle {
    /// Stroke dash intervals (on, off) in pixels; `None` for a continuous stroke.
    pub fn dash_pattern(self) -> Option<[f64; 2]> {
        match self {
            LineStyle::Solid => None,
            LineStyle::Dashed => Some([5.0, 5.0]),
            LineStyle::Dotted => Some([2.0, 2.0]),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointStyle {
    #[default]
    Circle,
    Square,
    Triangle,
    None,
}

impl PointStyle {
    /// Marker area in square pixels, or `None` when no marker is drawn.
    pub fn marker_area(self) -> Option<f64> {
        match self {
            PointStyle::Circle => Some(60.0),
            PointStyle::Square => Some(60.0),
            PointStyle::Triangle => Some(80.0),
            PointStyle::None => None,
        }
    }
}

/// Style of one plotted column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnStyle {
    pub color: Rgba,
    pub line_style: LineStyle,
    pub point_style: PointStyle,
    pub show_points: bool,
    pub show_line: bool,
}

impl ColumnStyle {
    /// Solid line with circle markers in `color`.
    pub fn with_color(color: Rgba) -> Self {
        Self {
            color,
            line_style: LineStyle::Solid,
            point_style: PointStyle::Circle,
            show_points: true,
            show_line: true,
        }
    }

    /// Whether any markers are drawn for this style.
    pub fn draws_markers(&self) -> bool {
        self.show_points && self.point_style != PointStyle::None
    }
}
