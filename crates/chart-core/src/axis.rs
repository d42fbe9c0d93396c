// File: crates/chart-core/src/axis.rs
// Summary: Axis configuration and chart-level options (titles, legend/grid toggles, manual bounds).

use serde::{Deserialize, Serialize};

/// Which axis a configuration or scale refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisKind {
    X,
    Y,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisConfig {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    pub auto_scale: bool,
}

impl AxisConfig {
    pub fn auto(title: impl Into<String>) -> Self {
        Self { title: title.into(), min: None, max: None, auto_scale: true }
    }

    pub fn manual(title: impl Into<String>, min: f64, max: f64) -> Self {
        Self { title: title.into(), min: Some(min), max: Some(max), auto_scale: false }
    }

    pub fn default_x() -> Self {
        Self::auto("X Axis")
    }

    pub fn default_y() -> Self {
        Self::auto("Y Axis")
    }

    /// Manual bounds that are usable as a domain: auto-scale off, both present,
    /// finite and strictly increasing.
    pub fn manual_bounds(&self) -> Option<(f64, f64)> {
        if self.auto_scale {
            return None;
        }
        match (self.min, self.max) {
            (Some(lo), Some(hi)) if lo.is_finite() && hi.is_finite() && lo < hi => Some((lo, hi)),
            _ => None,
        }
    }

    pub fn apply(&mut self, patch: &AxisPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(min) = patch.min {
            self.min = min;
        }
        if let Some(max) = patch.max {
            self.max = max;
        }
        if let Some(auto) = patch.auto_scale {
            self.auto_scale = auto;
        }
    }
}

/// Partial axis update. `min`/`max` are doubly optional so a bound can be cleared
/// (`Some(None)`) as well as left untouched (`None`).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisPatch {
    pub title: Option<String>,
    pub min: Option<Option<f64>>,
    pub max: Option<Option<f64>>,
    pub auto_scale: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisPair {
    pub x: AxisConfig,
    pub y: AxisConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub title: String,
    pub show_legend: bool,
    pub show_grid: bool,
    pub axis_config: AxisPair,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            title: "CSV Visualization".to_string(),
            show_legend: true,
            show_grid: true,
            axis_config: AxisPair { x: AxisConfig::default_x(), y: AxisConfig::default_y() },
        }
    }
}

impl ChartOptions {
    pub fn axis(&self, which: AxisKind) -> &AxisConfig {
        match which {
            AxisKind::X => &self.axis_config.x,
            AxisKind::Y => &self.axis_config.y,
        }
    }

    pub fn axis_mut(&mut self, which: AxisKind) -> &mut AxisConfig {
        match which {
            AxisKind::X => &mut self.axis_config.x,
            AxisKind::Y => &mut self.axis_config.y,
        }
    }

    pub fn update_axis(&mut self, which: AxisKind, patch: &AxisPatch) {
        self.axis_mut(which).apply(patch);
    }
}
