//! Quotes command - normalize quote characters in component attributes

use clap::ValueEnum;
use color_eyre::eyre::{Result, WrapErr};
use mdxmend_core::Config;
use mdxmend_fix::{QuoteFix, QuoteStrategy, Report, Runner, find_articles};

use super::print_report;

/// Which quote repair to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Single-quoted attributes become double-quoted
    Normalize,
    /// Only single-quoted attributes containing an apostrophe
    Apostrophes,
    /// Stray double quotes inside double-quoted values become single quotes
    Repair,
    /// `'word"` closes with a single quote
    Mismatched,
}

impl From<Strategy> for QuoteStrategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Normalize => Self::Normalize,
            Strategy::Apostrophes => Self::Apostrophes,
            Strategy::Repair => Self::Repair,
            Strategy::Mismatched => Self::Mismatched,
        }
    }
}

/// Run the quotes command over every article under the articles directory.
pub fn run(config: &Config, strategy: Strategy, dry_run: bool) -> Result<Report> {
    let articles_dir = &config.paths.articles_dir;
    tracing::info!(?articles_dir, ?strategy, dry_run, "Fixing attribute quotes");

    let files = find_articles(articles_dir).wrap_err("Failed to list articles")?;
    println!("Found {} MDX files", files.len());

    let report = Runner::new()
        .dry_run(dry_run)
        .run(&QuoteFix::new(strategy.into()), &files);
    print_report(&report, dry_run);

    Ok(report)
}
