use std::collections::HashMap;

use crate::parser::ParsedRecord;

/// Grouping key for series detection: the text before the first `:` in a
/// title, or the whole title when there is no colon. Always trimmed.
pub fn series_prefix(title: &str) -> &str {
    match title.split_once(':') {
        Some((prefix, _)) => prefix.trim(),
        None => title.trim(),
    }
}

/// How many input rows share each title prefix. Built once over the whole
/// batch before classification and read-only afterwards.
#[derive(Debug, Default)]
pub struct PrefixCounts {
    counts: HashMap<String, usize>,
}

impl PrefixCounts {
    pub fn build(records: &[ParsedRecord]) -> Self {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for record in records {
            *counts.entry(series_prefix(&record.title).to_string()).or_insert(0) += 1;
        }
        Self { counts }
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.counts.get(prefix).copied().unwrap_or(0)
    }

    /// Number of distinct prefixes observed.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all counts; equals the number of input records.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}
