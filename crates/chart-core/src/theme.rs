// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for chart chrome (background, grid, axes, text).

use crate::style::Rgba;

/// Colors for everything that is not a series. Series colors come from column styles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub grid: Rgba,
    pub grid_opacity: f64,
    pub axis_line: Rgba,
    pub tick: Rgba,
    pub axis_label: Rgba,
    pub title: Rgba,
    pub legend_text: Rgba,
    pub highlight_outline: Rgba,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::WHITE,
            grid: Rgba::rgb(0xe0, 0xe0, 0xe0),
            grid_opacity: 0.7,
            axis_line: Rgba::BLACK,
            tick: Rgba::BLACK,
            axis_label: Rgba::BLACK,
            title: Rgba::rgb(20, 20, 30),
            legend_text: Rgba::rgb(20, 20, 30),
            highlight_outline: Rgba::WHITE,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::rgb(18, 18, 20),
            grid: Rgba::rgb(40, 40, 45),
            grid_opacity: 1.0,
            axis_line: Rgba::rgb(180, 180, 190),
            tick: Rgba::rgb(150, 150, 160),
            axis_label: Rgba::rgb(235, 235, 245),
            title: Rgba::rgb(235, 235, 245),
            legend_text: Rgba::rgb(210, 210, 220),
            highlight_outline: Rgba::rgb(18, 18, 20),
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: Rgba::rgb(0xfd, 0xf6, 0xe3), // base3
            grid: Rgba::rgb(0xee, 0xe8, 0xd5),       // base2
            grid_opacity: 1.0,
            axis_line: Rgba::rgb(0x65, 0x7b, 0x83),  // base00
            tick: Rgba::rgb(0x58, 0x6e, 0x75),       // base01
            axis_label: Rgba::rgb(0x00, 0x2b, 0x36), // base03
            title: Rgba::rgb(0x00, 0x2b, 0x36),
            legend_text: Rgba::rgb(0x58, 0x6e, 0x75),
            highlight_outline: Rgba::rgb(0xfd, 0xf6, 0xe3),
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark",
            background: Rgba::rgb(0x00, 0x2b, 0x36), // base03
            grid: Rgba::rgb(0x07, 0x36, 0x42),       // base02
            grid_opacity: 1.0,
            axis_line: Rgba::rgb(0x93, 0xa1, 0xa1),  // base1
            tick: Rgba::rgb(0x83, 0x94, 0x96),       // base0
            axis_label: Rgba::rgb(0xee, 0xe8, 0xd5), // base2
            title: Rgba::rgb(0xee, 0xe8, 0xd5),
            legend_text: Rgba::rgb(0x93, 0xa1, 0xa1),
            highlight_outline: Rgba::rgb(0x00, 0x2b, 0x36),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Rgba::BLACK,
            grid: Rgba::rgb(0x22, 0x22, 0x22),
            grid_opacity: 1.0,
            axis_line: Rgba::WHITE,
            tick: Rgba::rgb(0xcc, 0xcc, 0xcc),
            axis_label: Rgba::WHITE,
            title: Rgba::WHITE,
            legend_text: Rgba::WHITE,
            highlight_outline: Rgba::BLACK,
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::light(),
        Theme::dark(),
        Theme::solarized_light(),
        Theme::solarized_dark(),
        Theme::high_contrast_dark(),
    ]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::light)
}
