use std::path::PathBuf;

use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Select};
use log::debug;

/// Source of the input path, kept behind a trait so the pipeline can be
/// driven from tests without any terminal interaction.
pub trait PathProvider {
    /// `Ok(None)` means the user declined to pick anything; the run then
    /// ends quietly without touching any files.
    fn input_path(&self) -> Result<Option<PathBuf>>;
}

/// A path already supplied on the command line.
pub struct FixedPath(pub PathBuf);

impl PathProvider for FixedPath {
    fn input_path(&self) -> Result<Option<PathBuf>> {
        Ok(Some(self.0.clone()))
    }
}

/// Interactive fallback: offer the CSV files in the current directory.
pub struct InteractivePicker;

impl PathProvider for InteractivePicker {
    fn input_path(&self) -> Result<Option<PathBuf>> {
        let candidates: Vec<PathBuf> = glob::glob("*.csv")
            .context("Failed to scan the current directory for CSV files")?
            .filter_map(|entry| entry.ok())
            .collect();

        if candidates.is_empty() {
            debug!("no CSV files in the current directory");
            return Ok(None);
        }

        let labels: Vec<String> = candidates
            .iter()
            .map(|p| p.display().to_string())
            .collect();

        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select a CSV file")
            .items(&labels)
            .default(0)
            .interact_opt()
            .context("File selection prompt failed")?;

        Ok(choice.map(|i| candidates[i].clone()))
    }
}
