// File: crates/chart-core/src/source.rs
// Summary: Source file model: rows, column selection and the per-column style registry.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};
use crate::record::Record;
use crate::style::{palette_color, ColumnStyle, LineStyle, PointStyle, Rgba};

/// Which columns of a file are plotted. `y_axes` order is legend/render order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSelection {
    pub x_axis: String,
    pub y_axes: Vec<String>,
}

impl ColumnSelection {
    pub fn new(x_axis: impl Into<String>, y_axes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self { x_axis: x_axis.into(), y_axes: y_axes.into_iter().map(Into::into).collect() }
    }

    /// A selection is plottable once it names an x column and at least one y column.
    pub fn is_plottable(&self) -> bool {
        !self.x_axis.is_empty() && !self.y_axes.is_empty()
    }
}

pub type StyleMap = BTreeMap<String, ColumnStyle>;

/// One uploaded table with its selection and style registry.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceFile {
    pub id: String,
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Record>,
    pub selection: ColumnSelection,
    pub styles: StyleMap,
}

impl SourceFile {
    /// Creates a file with the default selection (first column as x, second as y)
    /// and one palette-cycled default style per column.
    pub fn new(id: impl Into<String>, name: impl Into<String>, columns: Vec<String>, rows: Vec<Record>) -> Self {
        let selection = ColumnSelection {
            x_axis: columns.first().cloned().unwrap_or_default(),
            y_axes: columns.get(1).cloned().into_iter().collect(),
        };
        let styles = columns
            .iter()
            .enumerate()
            .map(|(i, c)| (c.clone(), ColumnStyle::with_color(palette_color(i))))
            .collect();
        Self { id: id.into(), name: name.into(), columns, rows, selection, styles }
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    fn unknown(&self, column: &str) -> ChartError {
        ChartError::UnknownColumn { file: self.name.clone(), column: column.to_string() }
    }

    pub fn set_selection(&mut self, x_axis: &str, y_axes: &[String]) -> Result<()> {
        if let Some(bad) = std::iter::once(x_axis).chain(y_axes.iter().map(String::as_str)).find(|c| !self.has_column(c)) {
            return Err(self.unknown(bad));
        }
        self.selection = ColumnSelection { x_axis: x_axis.to_string(), y_axes: y_axes.to_vec() };
        Ok(())
    }

    pub fn set_line_style(&mut self, column: &str, line_style: LineStyle) {
        if let Some(s) = self.styles.get_mut(column) {
            s.line_style = line_style;
        }
    }

    pub fn set_point_style(&mut self, column: &str, point_style: PointStyle) {
        if let Some(s) = self.styles.get_mut(column) {
            s.point_style = point_style;
        }
    }

    pub fn set_color(&mut self, column: &str, color: Rgba) {
        if let Some(s) = self.styles.get_mut(column) {
            s.color = color;
        }
    }

    pub fn set_visibility(&mut self, column: &str, show_line: bool, show_points: bool) {
        if let Some(s) = self.styles.get_mut(column) {
            s.show_line = show_line;
            s.show_points = show_points;
        }
    }

    /// Renames a column everywhere it is referenced: column list, selection,
    /// style registry and every row key.
    pub fn rename_column(&mut self, from: &str, to: &str) -> Result<()> {
        if !self.has_column(from) {
            return Err(self.unknown(from));
        }
        if from == to {
            return Ok(());
        }
        if self.has_column(to) {
            return Err(ChartError::DuplicateColumn { file: self.name.clone(), column: to.to_string() });
        }

        for c in self.columns.iter_mut().filter(|c| *c == from) {
            *c = to.to_string();
        }
        if self.selection.x_axis == from {
            self.selection.x_axis = to.to_string();
        }
        for y in self.selection.y_axes.iter_mut().filter(|y| *y == from) {
            *y = to.to_string();
        }
        if let Some(style) = self.styles.remove(from) {
            self.styles.insert(to.to_string(), style);
        }
        for row in &mut self.rows {
            row.rename(from, to);
        }
        log::debug!("renamed column '{}' -> '{}' in '{}' ({} rows)", from, to, self.name, self.rows.len());
        Ok(())
    }
}
