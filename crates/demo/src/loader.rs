// File: crates/demo/src/loader.rs
// Summary: CSV intake: header row + string cells -> chart-core SourceFile (no numeric coercion here).

use anyhow::{bail, Context, Result};
use chart_core::{Record, SourceFile};
use std::path::{Path, PathBuf};

/// Load a CSV with a header row. Blank lines are skipped and cells trimmed;
/// every value stays a string for the dataset builder to coerce.
pub fn load_csv(path: &Path, id: &str) -> Result<SourceFile> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let columns = rdr
        .headers()?
        .iter()
        .map(str::to_string)
        .collect::<Vec<_>>();
    if columns.is_empty() {
        bail!("{}: no header row", path.display());
    }
    log::debug!("{}: headers {:?}", path.display(), columns);

    let mut rows = Vec::new();
    for rec in rdr.records() {
        let rec = rec.with_context(|| format!("reading {}", path.display()))?;
        if rec.iter().all(str::is_empty) {
            continue;
        }
        // Short rows simply lack the trailing cells.
        let row: Record = columns.iter().zip(rec.iter()).map(|(c, v)| (c.as_str(), v)).collect();
        rows.push(row);
    }

    let name = path.file_name().and_then(|s| s.to_str()).unwrap_or("data.csv").to_string();
    log::info!("loaded {} ({} columns, {} rows)", name, columns.len(), rows.len());
    Ok(SourceFile::new(id, name, columns, rows))
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
pub fn resolve_path(raw: &Path) -> Result<(PathBuf, bool)> {
    if raw.exists() {
        return Ok((raw.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(raw) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    bail!("file not found: {}", raw.display());
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => alt.set_extension("csv"),
        "csv" => alt.set_extension("cvs"),
        _ => return None,
    };
    Some(alt)
}
