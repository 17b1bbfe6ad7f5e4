//! Compliments command - rewrite titles, descriptions, and CTAs of compliments articles

use std::path::PathBuf;

use clap::ValueEnum;
use color_eyre::eyre::{Result, WrapErr};
use mdxmend_core::Config;
use mdxmend_fix::{DescriptionFix, Fix, Report, Runner, SeoFix, TitleFix, read_list};

use super::print_report;

/// Which compliments job to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ComplimentsJob {
    /// Localized titles
    Titles,
    /// Localized descriptions
    Descriptions,
    /// Endonym title, description, and CTA together
    Seo,
}

/// Run a compliments job.
///
/// Files come from `lists` and `paths`; when both are empty the configured
/// compliments list is read instead.
pub fn run(
    config: &Config,
    job: ComplimentsJob,
    lists: &[PathBuf],
    paths: &[PathBuf],
    dry_run: bool,
) -> Result<Report> {
    tracing::info!(?job, ?lists, paths = paths.len(), dry_run, "Rewriting compliments articles");

    let files = collect_files(config, lists, paths)?;
    println!("Processing {} compliments articles", files.len());

    let seo = &config.seo;
    let fix: Box<dyn Fix> = match job {
        ComplimentsJob::Titles => Box::new(TitleFix::new(seo)),
        ComplimentsJob::Descriptions => Box::new(DescriptionFix::new(seo)),
        ComplimentsJob::Seo => Box::new(SeoFix::new(seo)),
    };

    let report = Runner::new().dry_run(dry_run).run(fix.as_ref(), &files);
    print_report(&report, dry_run);

    Ok(report)
}

fn collect_files(config: &Config, lists: &[PathBuf], paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    if lists.is_empty() && paths.is_empty() {
        let list = &config.paths.compliments_list;
        return read_list(list)
            .wrap_err_with(|| format!("Failed to read article list {}", list.display()));
    }

    let mut files = Vec::new();
    for list in lists {
        files.extend(
            read_list(list)
                .wrap_err_with(|| format!("Failed to read article list {}", list.display()))?,
        );
    }
    files.extend(paths.iter().cloned());
    Ok(files)
}
