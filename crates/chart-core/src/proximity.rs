// File: crates/chart-core/src/proximity.rs
// Summary: Nearest-point lookup per series for a pointer x position (tooltip content).

use std::cmp::Ordering;

use crate::series::{ChartData, DataPoint, Series};

/// Default proximity threshold as a fraction of the visible x domain width.
pub const DEFAULT_THRESHOLD_FRACTION: f64 = 0.05;

/// One series' nearest point to the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Nearest<'a> {
    pub series: &'a Series,
    /// Position of `series` in the chart data.
    pub series_index: usize,
    pub point: DataPoint,
    /// |point.x - pointer_x| in domain units.
    pub distance: f64,
}

/// Nearest point of every series whose distance is strictly below
/// `threshold_fraction * x_domain_width`, closest first (ties keep series order).
/// Within a series, equidistant points resolve to the later one.
///
/// Uses a binary search per series, relying on points being sorted by x.
/// An empty result means nothing is near the pointer.
pub fn query_nearest(
    pointer_x: f64,
    data: &ChartData,
    x_domain_width: f64,
    threshold_fraction: f64,
) -> Vec<Nearest<'_>> {
    collect(pointer_x, data, x_domain_width, threshold_fraction, nearest_sorted)
}

/// Same result as [`query_nearest`], scanning every point. Simpler but O(n) per
/// series; kept as a reference implementation and for benchmarks.
pub fn query_nearest_linear(
    pointer_x: f64,
    data: &ChartData,
    x_domain_width: f64,
    threshold_fraction: f64,
) -> Vec<Nearest<'_>> {
    collect(pointer_x, data, x_domain_width, threshold_fraction, nearest_linear)
}

fn collect<'a>(
    pointer_x: f64,
    data: &'a ChartData,
    x_domain_width: f64,
    threshold_fraction: f64,
    find: fn(&[DataPoint], f64) -> Option<DataPoint>,
) -> Vec<Nearest<'a>> {
    if !pointer_x.is_finite() {
        return Vec::new();
    }
    let threshold = threshold_fraction * x_domain_width.abs();
    let mut hits: Vec<Nearest<'a>> = data
        .series()
        .iter()
        .enumerate()
        .filter_map(|(series_index, series)| {
            let point = find(series.points(), pointer_x)?;
            let distance = (point.x - pointer_x).abs();
            (distance < threshold).then_some(Nearest { series, series_index, point, distance })
        })
        .collect();
    // Stable sort: equal distances stay in series order.
    hits.sort_by(|a, b| a.distance.partial_cmp(&b.distance).unwrap_or(Ordering::Equal));
    hits
}

/// Closest point by x in an x-sorted slice; on equal distance the later
/// point wins.
fn nearest_sorted(points: &[DataPoint], x: f64) -> Option<DataPoint> {
    let i = points.partition_point(|p| p.x < x);
    // `i - 1` is already the last of its x run.
    let before = i.checked_sub(1).and_then(|j| points.get(j));
    // Among duplicate x values take the last, matching a front-to-back scan.
    let after = points
        .get(i)
        .and_then(|a| points.get(points.partition_point(|p| p.x <= a.x) - 1));
    match (before, after) {
        (Some(b), Some(a)) => Some(if (x - b.x) < (a.x - x) { *b } else { *a }),
        (Some(b), None) => Some(*b),
        (None, Some(a)) => Some(*a),
        (None, None) => None,
    }
}

fn nearest_linear(points: &[DataPoint], x: f64) -> Option<DataPoint> {
    let mut best: Option<(DataPoint, f64)> = None;
    for p in points {
        let d = (p.x - x).abs();
        if best.map_or(true, |(_, bd)| d <= bd) {
            best = Some((*p, d));
        }
    }
    best.map(|(p, _)| p)
}
