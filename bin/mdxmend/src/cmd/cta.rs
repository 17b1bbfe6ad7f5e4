//! CTA command - fill empty call-to-action blocks and rewrite romantic ones

use color_eyre::eyre::{Result, WrapErr};
use mdxmend_core::Config;
use mdxmend_fix::{
    EmptyCtaFix, Report, RomanticCtaFix, Runner, empty_cta_targets, find_articles,
    find_in_language_dirs,
};

use super::print_report;

/// Run the empty-CTA job.
///
/// Visits the known list of affected articles, or every article with `scan`.
pub fn run_empty(config: &Config, scan: bool, dry_run: bool) -> Result<Report> {
    let articles_dir = &config.paths.articles_dir;
    tracing::info!(?articles_dir, scan, dry_run, "Filling empty CTA blocks");

    let files = if scan {
        find_articles(articles_dir).wrap_err("Failed to list articles")?
    } else {
        empty_cta_targets(articles_dir)
    };

    let report = Runner::new().dry_run(dry_run).run(&EmptyCtaFix, &files);
    print_report(&report, dry_run);

    Ok(report)
}

/// Run the romantic CTA job over `<native>/<target>/*romantic*.mdx`.
pub fn run_romantic(config: &Config, dry_run: bool) -> Result<Report> {
    let articles_dir = &config.paths.articles_dir;
    tracing::info!(?articles_dir, dry_run, "Rewriting romantic CTA blocks");

    let files =
        find_in_language_dirs(articles_dir, "romantic").wrap_err("Failed to list articles")?;
    println!("Found {} romantic phrases articles", files.len());

    let report = Runner::new().dry_run(dry_run).run(&RomanticCtaFix, &files);
    print_report(&report, dry_run);

    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use super::*;

    fn config_for(dir: &Path) -> Config {
        let mut config = Config::default();
        config.paths.articles_dir = dir.to_path_buf();
        config
    }

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
        fs::write(path, content).expect("write");
    }

    #[test]
    fn test_run_empty_scan_visits_every_article() {
        let dir = tempfile::tempdir().expect("tempdir");
        let article = dir.path().join("de/fr/french-words.mdx");
        write(&article, "Text\n\n<CTA />\n");
        let unknown = dir.path().join("ja/fr/french-words.mdx");
        write(&unknown, "<CTA />\n");

        let report = run_empty(&config_for(dir.path()), true, false).expect("run");

        assert_eq!(report.updated, vec![article.clone()]);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].1, "no template for ja");
        assert!(fs::read_to_string(article).expect("read").contains("<CTA\n  text=\""));
    }

    #[test]
    fn test_run_romantic_dry_run_keeps_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let article = dir.path().join("en/it/romantic-italian-phrases.mdx");
        let original = "<CTA text=\"old\" buttonText=\"old\" />\n";
        write(&article, original);

        let report = run_romantic(&config_for(dir.path()), true).expect("run");

        assert_eq!(report.updated, vec![article.clone()]);
        assert_eq!(fs::read_to_string(article).expect("read"), original);
    }
}
