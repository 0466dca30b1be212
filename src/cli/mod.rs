use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use log::info;

use crate::classify::{classify_all, partition, ClassifiedRecord};
use crate::io::{output_paths, read_title_column, write_partition};
use crate::keywords::KeywordSet;
use crate::parser::parse_row;
use crate::ui::{FixedPath, InteractivePicker, PathProvider};

#[derive(Parser, Debug)]
#[command(name = "reelsplit")]
#[command(version, about = "Split a watch-history CSV export into films and series", long_about = None)]
pub struct Args {
    /// Input CSV export (prompts interactively when omitted)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Directory for the two output files (default: next to the input)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// TOML file with a `keywords = [...]` list replacing the default set
    #[arg(long, value_name = "FILE")]
    pub keywords: Option<PathBuf>,

    /// Extra series-marker substring (repeatable)
    #[arg(short = 'k', long = "keyword", value_name = "WORD")]
    pub extra_keywords: Vec<String>,

    /// Classify and report counts without writing output files
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (suppress output)
    #[arg(short, long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Classify exports and print a summary without writing anything
    Check {
        /// Exports to check
        files: Vec<PathBuf>,
    },
}

/// Counts reported after a split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub films: usize,
    pub series: usize,
    pub bad_dates: usize,
    pub films_path: PathBuf,
    pub series_path: PathBuf,
}

pub fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Commands::Check { ref files }) => {
            let keywords = load_keywords(&args)?;
            check_files(files, &keywords, args.quiet)
        }
        None => split(&args),
    }
}

fn split(args: &Args) -> Result<()> {
    let provider: Box<dyn PathProvider> = match &args.input {
        Some(path) => Box::new(FixedPath(path.clone())),
        None => Box::new(InteractivePicker),
    };

    let Some(input) = provider.input_path()? else {
        // Not an error: the user simply picked nothing.
        if !args.quiet {
            println!("No input file selected.");
        }
        info!("no input selected; nothing to do");
        return Ok(());
    };

    let keywords = load_keywords(args)?;

    if args.dry_run {
        let records = classify_file(&input, &keywords)?;
        let bad_dates = count_bad_dates(&records);
        let (films, series) = partition(records);
        if !args.quiet {
            println!(
                "{} {} films, {} series, {} unparseable dates (dry run, nothing written)",
                "✓".green(),
                films.len(),
                series.len(),
                bad_dates
            );
        }
        return Ok(());
    }

    let summary = split_file(&input, &keywords, args.output_dir.as_deref())?;

    if !args.quiet {
        println!(
            "{} {} films → {}",
            "✓".green(),
            summary.films,
            summary.films_path.display()
        );
        println!(
            "{} {} series → {}",
            "✓".green(),
            summary.series,
            summary.series_path.display()
        );
        if summary.bad_dates > 0 {
            println!(
                "{} {} rows had unparseable dates (kept with a blank date)",
                "!".yellow(),
                summary.bad_dates
            );
        }
    }

    Ok(())
}

/// Read, classify and write one export. The whole pipeline in one call so
/// integration tests can drive it without the terminal surface.
pub fn split_file(
    input: &Path,
    keywords: &KeywordSet,
    output_dir: Option<&Path>,
) -> Result<Summary> {
    let records = classify_file(input, keywords)?;
    let bad_dates = count_bad_dates(&records);
    let (films, series) = partition(records);

    let (films_path, series_path) = output_paths(input, output_dir);
    write_partition(&films_path, &films)
        .with_context(|| format!("Failed to write films output for {}", input.display()))?;
    write_partition(&series_path, &series)
        .with_context(|| format!("Failed to write series output for {}", input.display()))?;

    info!(
        "split {}: {} films, {} series",
        input.display(),
        films.len(),
        series.len()
    );

    Ok(Summary {
        films: films.len(),
        series: series.len(),
        bad_dates,
        films_path,
        series_path,
    })
}

/// Read and classify one export without writing anything.
pub fn classify_file(input: &Path, keywords: &KeywordSet) -> Result<Vec<ClassifiedRecord>> {
    let rows = read_title_column(input)?;
    info!("read {} rows from {}", rows.len(), input.display());
    let parsed = rows.iter().map(|row| parse_row(row, keywords)).collect();
    Ok(classify_all(parsed))
}

fn check_files(files: &[PathBuf], keywords: &KeywordSet, quiet: bool) -> Result<()> {
    for file in files {
        match classify_file(file, keywords) {
            Ok(records) => {
                let bad_dates = count_bad_dates(&records);
                let (films, series) = partition(records);
                if !quiet {
                    println!(
                        "{} {} - {} films, {} series, {} unparseable dates",
                        "✓".green(),
                        file.display(),
                        films.len(),
                        series.len(),
                        bad_dates
                    );
                }
            }
            Err(e) => {
                println!("{} {} - {}", "✗".red(), file.display(), e);
            }
        }
    }
    Ok(())
}

fn load_keywords(args: &Args) -> Result<KeywordSet> {
    let mut keywords = match &args.keywords {
        Some(path) => KeywordSet::from_toml_file(path)?,
        None => KeywordSet::default(),
    };
    keywords.extend(args.extra_keywords.iter().cloned());
    Ok(keywords)
}

fn count_bad_dates(records: &[ClassifiedRecord]) -> usize {
    records.iter().filter(|r| r.date.is_none()).count()
}
