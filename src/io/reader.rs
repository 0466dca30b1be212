use std::fs::File;
use std::path::Path;

use anyhow::{bail, Context, Result};
use log::debug;

/// Read the first column of the export, header row skipped.
///
/// The export is `;`-delimited on the outside; each first-column cell holds
/// the whole `Title,"Date"` text, which the row parser dissects later. Only
/// resource-level problems abort: an unopenable file or a header with no
/// columns. Ragged rows are tolerated, and fully blank lines are skipped by
/// the CSV reader rather than producing empty records.
pub fn read_title_column(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open input file {}", path.display()))?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers = reader
        .headers()
        .with_context(|| format!("Failed to read header row of {}", path.display()))?;
    if headers.is_empty() {
        bail!("Input file {} has no columns", path.display());
    }
    debug!("columns found: {:?}", headers.iter().collect::<Vec<_>>());

    let mut rows = Vec::new();
    for result in reader.records() {
        let record =
            result.with_context(|| format!("Failed to read a row of {}", path.display()))?;
        rows.push(record.get(0).unwrap_or("").to_string());
    }

    Ok(rows)
}
