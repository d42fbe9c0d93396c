// File: crates/chart-core/src/series.rs
// Summary: Plotted series model (x-sorted points + style) and the chart data collection.
// Notes:
// - A Series is only ever produced by the dataset builder, which guarantees it is
//   non-empty and sorted ascending by x. Fields are private to keep that invariant.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::style::ColumnStyle;

/// A finite (x, y) pair in data space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Identity of a series: the source file plus the y column it plots.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeriesId {
    pub file_id: String,
    pub column: String,
}

impl SeriesId {
    pub fn new(file_id: impl Into<String>, column: impl Into<String>) -> Self {
        Self { file_id: file_id.into(), column: column.into() }
    }

    /// Collision-free string form (the file id is length-prefixed).
    pub fn key(&self) -> String {
        format!("{}:{}/{}", self.file_id.len(), self.file_id, self.column)
    }
}

impl fmt::Display for SeriesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.file_id, self.column)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    id: SeriesId,
    file_name: String,
    x_column: String,
    label: String,
    points: Vec<DataPoint>,
    style: ColumnStyle,
}

impl Series {
    /// Crate-internal: callers must pass a non-empty, x-sorted point list.
    pub(crate) fn from_sorted(
        id: SeriesId,
        file_name: String,
        x_column: String,
        points: Vec<DataPoint>,
        style: ColumnStyle,
    ) -> Self {
        debug_assert!(!points.is_empty());
        debug_assert!(points.windows(2).all(|w| w[0].x <= w[1].x));
        let label = id.column.clone();
        Self { id, file_name, x_column, label, points, style }
    }

    pub fn id(&self) -> &SeriesId {
        &self.id
    }
    pub fn file_id(&self) -> &str {
        &self.id.file_id
    }
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
    pub fn x_column(&self) -> &str {
        &self.x_column
    }
    pub fn y_column(&self) -> &str {
        &self.id.column
    }
    /// Legend / tooltip label.
    pub fn label(&self) -> &str {
        &self.label
    }
    /// Points sorted ascending by x; never empty.
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }
    pub fn style(&self) -> &ColumnStyle {
        &self.style
    }
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// (min, max) of x and y over this series.
    pub fn extent(&self) -> Extent {
        let mut e = Extent::EMPTY;
        for p in &self.points {
            e.include(*p);
        }
        e
    }
}

/// Running min/max over points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Extent {
    pub const EMPTY: Extent = Extent {
        x_min: f64::INFINITY,
        x_max: f64::NEG_INFINITY,
        y_min: f64::INFINITY,
        y_max: f64::NEG_INFINITY,
    };

    pub fn include(&mut self, p: DataPoint) {
        self.x_min = self.x_min.min(p.x);
        self.x_max = self.x_max.max(p.x);
        self.y_min = self.y_min.min(p.y);
        self.y_max = self.y_max.max(p.y);
    }

    pub fn union(mut self, other: Extent) -> Extent {
        self.x_min = self.x_min.min(other.x_min);
        self.x_max = self.x_max.max(other.x_max);
        self.y_min = self.y_min.min(other.y_min);
        self.y_max = self.y_max.max(other.y_max);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.x_min > self.x_max
    }
}

/// Ordered collection of plotted series. Replaced wholesale on every rebuild.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartData {
    series: Vec<Series>,
}

impl ChartData {
    pub fn new(series: Vec<Series>) -> Self {
        Self { series }
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn get(&self, id: &SeriesId) -> Option<&Series> {
        self.series.iter().find(|s| s.id() == id)
    }

    pub fn total_points(&self) -> usize {
        self.series.iter().map(Series::len).sum()
    }

    /// Combined extent over every series; `Extent::EMPTY` when there is no data.
    pub fn extent(&self) -> Extent {
        self.series.iter().map(Series::extent).fold(Extent::EMPTY, Extent::union)
    }
}
