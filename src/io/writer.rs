use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::classify::ClassifiedRecord;
use crate::parser::KeywordFlag;

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";
const DATE_FORMAT: &str = "%m/%d/%y";

/// Derive the two output paths from the input: `watched.csv` becomes
/// `watched_films.csv` and `watched_series.csv`, in `output_dir` if given,
/// otherwise next to the input.
pub fn output_paths(input: &Path, output_dir: Option<&Path>) -> (PathBuf, PathBuf) {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = input
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    let dir = output_dir
        .map(Path::to_path_buf)
        .or_else(|| input.parent().map(Path::to_path_buf))
        .unwrap_or_default();

    (
        dir.join(format!("{}_films{}", stem, ext)),
        dir.join(format!("{}_series{}", stem, ext)),
    )
}

/// Write one partition as a `;`-delimited CSV with a header row, prefixed
/// with a UTF-8 BOM so spreadsheet tools pick the right encoding.
pub fn write_partition(path: &Path, records: &[ClassifiedRecord]) -> Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;
    file.write_all(UTF8_BOM)
        .with_context(|| format!("Failed to write to {}", path.display()))?;

    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(file);

    writer
        .write_record(["title", "date", "keyword_flag", "category"])
        .with_context(|| format!("Failed to write header to {}", path.display()))?;

    for record in records {
        let date = record
            .date
            .map(|d| d.format(DATE_FORMAT).to_string())
            .unwrap_or_default();
        let flag = match record.keyword_flag {
            KeywordFlag::Series => "series",
            KeywordFlag::None => "",
        };
        writer
            .write_record([
                record.title.as_str(),
                date.as_str(),
                flag,
                record.category.as_str(),
            ])
            .with_context(|| format!("Failed to write a row to {}", path.display()))?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to flush {}", path.display()))?;
    Ok(())
}
