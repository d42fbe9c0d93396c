// File: crates/chart-core/tests/common/mod.rs
// Purpose: Shared fixtures for building source files from literal tables.

#![allow(dead_code)]

use chart_core::{Record, SourceFile};

/// Builds a file whose first column is x and whose remaining columns are all selected as y.
pub fn table(id: &str, columns: &[&str], rows: &[&[&str]]) -> SourceFile {
    let columns: Vec<String> = columns.iter().map(|c| c.to_string()).collect();
    let rows = rows
        .iter()
        .map(|r| columns.iter().map(String::as_str).zip(r.iter().copied()).collect::<Record>())
        .collect();
    let mut file = SourceFile::new(id, format!("{id}.csv"), columns.clone(), rows);
    file.selection.y_axes = columns[1..].to_vec();
    file
}

/// Single y-column file from (x, y) pairs.
pub fn xy(id: &str, points: &[(f64, f64)]) -> SourceFile {
    let rows: Vec<[String; 2]> = points.iter().map(|(x, y)| [x.to_string(), y.to_string()]).collect();
    let refs: Vec<Vec<&str>> = rows.iter().map(|r| r.iter().map(String::as_str).collect()).collect();
    let slices: Vec<&[&str]> = refs.iter().map(Vec::as_slice).collect();
    table(id, &["x", id], &slices)
}
