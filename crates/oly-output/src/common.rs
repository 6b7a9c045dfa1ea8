use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;

/// Creates the parent directory of `path` if it does not exist.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    Ok(())
}

/// Writes a header row followed by `rows` as CSV.
pub fn write_csv(path: &Path, headers: &[String], rows: &[Vec<String>]) -> Result<()> {
    ensure_parent_dir(path)?;
    let mut writer = WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("create {}", path.display()))?;
    writer
        .write_record(headers)
        .with_context(|| format!("write header to {}", path.display()))?;
    for row in rows {
        writer
            .write_record(row)
            .with_context(|| format!("write row to {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    Ok(())
}
