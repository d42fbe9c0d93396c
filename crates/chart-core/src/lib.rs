// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; dataset building, scale resolution, scene rendering and pointer queries.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod theme;
pub mod error;
pub mod style;
pub mod record;
pub mod source;
pub mod dataset;
pub mod curve;
pub mod marker;
pub mod scene;
pub mod svg;
pub mod proximity;
pub mod pointer;
pub mod session;

pub use chart::{render, render_frame, Chart, PlotFrame, RenderOptions};
pub use series::{ChartData, DataPoint, Extent, Series, SeriesId};
pub use axis::{AxisConfig, AxisKind, AxisPatch, ChartOptions};
pub use scale::{resolve_axis, resolve_domain, LinearScale};
pub use theme::Theme;
pub use error::ChartError;
pub use style::{ColumnStyle, LineStyle, PointStyle, Rgba};
pub use record::Record;
pub use source::{ColumnSelection, SourceFile};
pub use dataset::{build_datasets, parse_numeric};
pub use scene::{Layer, Scene, SceneItem, Shape};
pub use proximity::{query_nearest, query_nearest_linear, Nearest, DEFAULT_THRESHOLD_FRACTION};
pub use pointer::{clear_overlay, highlight, PointerProbe, Tooltip, TooltipRow};
pub use session::{FileMeta, SessionSnapshot};
