use anyhow::Result;
use clap::Parser;
use log::info;
use reelsplit::cli;

fn main() -> Result<()> {
    let args = cli::Args::parse();

    let level = if args.verbose && !args.quiet {
        "debug"
    } else if !args.quiet {
        "info"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    info!("Starting reelsplit v{}", env!("CARGO_PKG_VERSION"));

    cli::run(args)
}
