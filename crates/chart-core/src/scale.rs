// File: crates/chart-core/src/scale.rs
// Summary: Axis domain resolution (auto vs manual) and the linear domain <-> pixel mapping.

use crate::axis::{AxisConfig, AxisKind};
use crate::geometry::RectF;
use crate::grid::{nice_ticks, tick_precision, tick_step};
use crate::series::ChartData;

/// Domain used when there is no data to inspect.
pub const EMPTY_DOMAIN: (f64, f64) = (0.0, 100.0);
/// Fraction of the data span added to each end of an auto-scaled domain.
pub const AUTO_PADDING: f64 = 0.05;
/// Half-width substituted when every value on an axis is identical.
pub const DEGENERATE_HALF_WIDTH: f64 = 0.5;

/// Resolved linear scale for one axis.
///
/// `range` is (start, end) in pixels for (min, max). The x axis maps min to the
/// left edge; the y axis maps min to the bottom edge, so larger values sit higher
/// on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub min: f64,
    pub max: f64,
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { min: domain.0, max: domain.1, range }
    }

    /// Scale for `which` axis over `plot`, honoring the screen-y inversion.
    pub fn for_axis(which: AxisKind, domain: (f64, f64), plot: RectF) -> Self {
        let range = match which {
            AxisKind::X => (plot.left, plot.right),
            AxisKind::Y => (plot.bottom, plot.top),
        };
        Self::new(domain, range)
    }

    /// Saturates at `f64::MAX` for domains wider than a finite f64 can hold.
    pub fn domain_width(&self) -> f64 {
        (self.max - self.min).min(f64::MAX)
    }

    /// Domain value -> pixel coordinate. Values outside the domain extrapolate.
    ///
    /// Differences are taken on halved values so domains spanning most of the
    /// f64 range stay finite.
    #[inline]
    pub fn to_range(&self, v: f64) -> f64 {
        let (r0, r1) = self.range;
        let t = (v * 0.5 - self.min * 0.5) / (self.max * 0.5 - self.min * 0.5);
        r0 + t * (r1 - r0)
    }

    /// Pixel coordinate -> domain value; inverse of `to_range`.
    #[inline]
    pub fn to_domain(&self, px: f64) -> f64 {
        let (r0, r1) = self.range;
        let t = (px - r0) / (r1 - r0);
        let half = self.max * 0.5 - self.min * 0.5;
        self.min + t * half + t * half
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.min, self.max, count)
    }

    /// Decimal places for tick labels at `count` ticks.
    pub fn tick_precision(&self, count: usize) -> usize {
        tick_precision(tick_step(self.min, self.max, count))
    }
}

/// Domain for one axis: manual bounds verbatim when usable, else data extent
/// padded by 5% per side.
///
/// Unusable manual settings (only one bound, non-finite, or `min >= max`) fall
/// back to auto-scaling. Auto-scaled ends are clamped to the finite f64 range.
pub fn resolve_domain(data: &ChartData, config: &AxisConfig, which: AxisKind) -> (f64, f64) {
    if let Some(bounds) = config.manual_bounds() {
        return bounds;
    }
    if !config.auto_scale {
        log::warn!(
            "axis {:?} '{}': manual bounds {:?}..{:?} unusable, auto-scaling instead",
            which, config.title, config.min, config.max
        );
    }

    let extent = data.extent();
    if extent.is_empty() {
        return EMPTY_DOMAIN;
    }
    let (lo, hi) = match which {
        AxisKind::X => (extent.x_min, extent.x_max),
        AxisKind::Y => (extent.y_min, extent.y_max),
    };
    let span = hi - lo;
    if span <= 0.0 {
        // Keep the half-width above the value's ulp so huge magnitudes still widen.
        let half = DEGENERATE_HALF_WIDTH.max(lo.abs() * f64::EPSILON * 4.0);
        return clamp_finite(lo - half, hi + half);
    }
    let pad = if span.is_finite() {
        span * AUTO_PADDING
    } else {
        (hi * 0.5 - lo * 0.5) * (2.0 * AUTO_PADDING)
    };
    clamp_finite(lo - pad, hi + pad)
}

fn clamp_finite(lo: f64, hi: f64) -> (f64, f64) {
    (lo.max(f64::MIN), hi.min(f64::MAX))
}

/// Resolves `which` axis of `data` against `config` and maps it onto `plot`.
pub fn resolve_axis(data: &ChartData, config: &AxisConfig, which: AxisKind, plot: RectF) -> LinearScale {
    LinearScale::for_axis(which, resolve_domain(data, config, which), plot)
}
