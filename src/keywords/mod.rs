use std::path::Path;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use serde::Deserialize;

/// Marker substrings that flag a title as a series on their own.
///
/// The defaults cover the Portuguese export format this tool was written for
/// plus the English equivalents. Matching is case-insensitive substring
/// matching with no word boundaries, so a film whose title merely contains
/// one of these fragments will be flagged too; that is accepted behavior.
static DEFAULT_MARKERS: Lazy<Vec<String>> = Lazy::new(|| {
    ["temporada", "capítulo", "episódio", "season", "chapter", "episode"]
        .iter()
        .map(|s| s.to_string())
        .collect()
});

#[derive(Debug, Clone, Deserialize)]
pub struct KeywordSet {
    #[serde(rename = "keywords")]
    markers: Vec<String>,
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self {
            markers: DEFAULT_MARKERS.clone(),
        }
    }
}

impl KeywordSet {
    /// Load a keyword set from a TOML file of the form `keywords = ["..."]`.
    /// The file replaces the default set entirely.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read keyword file {}", path.display()))?;
        let mut set: KeywordSet = toml::from_str(&content)
            .with_context(|| format!("Failed to parse keyword file {}", path.display()))?;
        set.normalize();
        Ok(set)
    }

    /// Append extra markers (e.g. from repeated `--keyword` flags).
    pub fn extend<I: IntoIterator<Item = String>>(&mut self, extra: I) {
        self.markers.extend(extra);
        self.normalize();
    }

    /// True if the title contains any marker, case-insensitively.
    pub fn matches(&self, title: &str) -> bool {
        let lower = title.to_lowercase();
        self.markers.iter().any(|m| lower.contains(m.as_str()))
    }

    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    fn normalize(&mut self) {
        for m in &mut self.markers {
            *m = m.trim().to_lowercase();
        }
        self.markers.retain(|m| !m.is_empty());
    }
}
