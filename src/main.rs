use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use tfacclint::analyzer::Analyzer;
use tfacclint::output::OutputFormatter;
use tfacclint::{cli, logging};

fn main() -> Result<()> {
    let args = cli::Args::parse();
    args.validate().context("Invalid arguments")?;
    logging::init(logging::Verbosity::from_flags(args.verbose, args.quiet));

    let analyzer = Analyzer::new();
    let report = analyzer
        .check_path(&args.path)
        .with_context(|| format!("Failed to analyze {}", args.path.display()))?;

    let rendered = OutputFormatter::format(&report, args.format)?;
    if !rendered.is_empty() {
        println!("{rendered}");
    }

    if !report.findings.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}
