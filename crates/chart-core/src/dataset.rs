// File: crates/chart-core/src/dataset.rs
// Summary: Dataset builder: raw rows + column selections + styles -> numeric, x-sorted series.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::series::{ChartData, DataPoint, Series, SeriesId};
use crate::source::SourceFile;
use crate::style::{palette_color, ColumnStyle};

/// Coerce a raw cell to a finite f64. Missing, empty, non-numeric and non-finite
/// values all yield `None`.
pub fn parse_numeric(raw: &str) -> Option<f64> {
    let v = raw.trim().parse::<f64>().ok()?;
    v.is_finite().then_some(v)
}

/// Builds one series per (file, selected y column) pair, in file order then
/// selection order. Pairs with no valid rows produce no series.
pub fn build_datasets(files: &[SourceFile]) -> ChartData {
    let mut series = Vec::new();
    let mut seen: HashSet<SeriesId> = HashSet::new();

    for file in files {
        let sel = &file.selection;
        if !sel.is_plottable() {
            log::debug!("skipping '{}': no x/y selection", file.name);
            continue;
        }
        for y_col in &sel.y_axes {
            let id = SeriesId::new(file.id.clone(), y_col.clone());
            if seen.contains(&id) {
                if sel.y_axes.iter().filter(|c| *c == y_col).count() < 2 {
                    log::warn!("series id '{}' collides with an earlier file; skipping", id);
                }
                continue;
            }

            let points = collect_points(file, &sel.x_axis, y_col);
            let dropped = file.rows.len() - points.len();
            if dropped > 0 {
                log::debug!("'{}' / '{}': dropped {} of {} rows", file.name, y_col, dropped, file.rows.len());
            }
            if points.is_empty() {
                continue;
            }

            let style = file
                .styles
                .get(y_col)
                .cloned()
                .unwrap_or_else(|| ColumnStyle::with_color(palette_color(series.len())));
            seen.insert(id.clone());
            series.push(Series::from_sorted(id, file.name.clone(), sel.x_axis.clone(), points, style));
        }
    }

    ChartData::new(series)
}

fn collect_points(file: &SourceFile, x_col: &str, y_col: &str) -> Vec<DataPoint> {
    let mut points: Vec<DataPoint> = file
        .rows
        .iter()
        .filter_map(|row| {
            let x = parse_numeric(row.get(x_col)?)?;
            let y = parse_numeric(row.get(y_col)?)?;
            Some(DataPoint::new(x, y))
        })
        .collect();
    // Stable: rows with equal x keep their file order.
    points.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal));
    points
}
