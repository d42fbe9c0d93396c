// File: crates/chart-core/src/session.rs
// Summary: Serializable session snapshot (file metadata + chart options) for explicit load/save.

use serde::{Deserialize, Serialize};

use crate::axis::ChartOptions;
use crate::source::{ColumnSelection, SourceFile, StyleMap};

/// A source file without its rows; row data is never persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMeta {
    pub id: String,
    pub name: String,
    pub columns: Vec<String>,
    pub selected: ColumnSelection,
    pub column_styles: StyleMap,
}

impl From<&SourceFile> for FileMeta {
    fn from(f: &SourceFile) -> Self {
        Self {
            id: f.id.clone(),
            name: f.name.clone(),
            columns: f.columns.clone(),
            selected: f.selection.clone(),
            column_styles: f.styles.clone(),
        }
    }
}

impl From<FileMeta> for SourceFile {
    fn from(m: FileMeta) -> Self {
        SourceFile {
            id: m.id,
            name: m.name,
            columns: m.columns,
            rows: Vec::new(),
            selection: m.selected,
            styles: m.column_styles,
        }
    }
}

/// Everything the configuration collaborator persists between runs.
/// The core only converts to and from this value; storage is the caller's job.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    #[serde(default)]
    pub files: Vec<FileMeta>,
    #[serde(default)]
    pub chart_options: ChartOptions,
}

impl SessionSnapshot {
    pub fn capture(files: &[SourceFile], options: &ChartOptions) -> Self {
        Self { files: files.iter().map(FileMeta::from).collect(), chart_options: options.clone() }
    }

    /// Files come back with empty rows; callers re-supply data before building datasets.
    pub fn restore(self) -> (Vec<SourceFile>, ChartOptions) {
        (self.files.into_iter().map(SourceFile::from).collect(), self.chart_options)
    }

    /// Saved metadata for a file name, if any.
    pub fn file_named(&self, name: &str) -> Option<&FileMeta> {
        self.files.iter().find(|f| f.name == name)
    }
}
