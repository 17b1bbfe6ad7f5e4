//! Generate command - write Greek-native articles from the phrase tables

use std::path::Path;

use chrono::{Local, NaiveDate};
use clap::ValueEnum;
use color_eyre::eyre::{Result, WrapErr};
use mdxmend_core::Config;
use mdxmend_generator::{
    GeneratedArticle, OutputFormat, TARGETS, Topic, generate_all, write_json, write_mdx,
};

/// Output format for generated articles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One JSON array of records
    Json,
    /// One MDX file per article
    Mdx,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => Self::Json,
            Format::Mdx => Self::Mdx,
        }
    }
}

/// Run the generate command, dating articles today.
pub fn run(
    config: &Config,
    format: Format,
    output: Option<&Path>,
    force: bool,
    dry_run: bool,
) -> Result<Vec<GeneratedArticle>> {
    run_on(config, format, output, force, dry_run, Local::now().date_naive())
}

/// Run the generate command with a fixed publication date.
pub fn run_on(
    config: &Config,
    format: Format,
    output: Option<&Path>,
    force: bool,
    dry_run: bool,
    date: NaiveDate,
) -> Result<Vec<GeneratedArticle>> {
    tracing::info!(?format, ?output, force, dry_run, %date, "Generating articles");

    let articles = generate_all(date);

    let destination = match OutputFormat::from(format) {
        OutputFormat::Json => {
            let path = output.unwrap_or(&config.paths.generated_output);
            if !dry_run {
                write_json(&articles, path).wrap_err("Failed to write generated articles")?;
            }
            path.display().to_string()
        }
        OutputFormat::Mdx => {
            let root = output.unwrap_or(&config.paths.articles_dir);
            if !dry_run {
                let report =
                    write_mdx(&articles, root, force).wrap_err("Failed to write MDX articles")?;
                println!("  Written:  {}", report.written.len());
                println!("  Existing: {}", report.existing.len());
            }
            root.display().to_string()
        }
    };

    println!();
    println!("  Generated {} articles for Greek speakers", articles.len());
    println!("  Target languages:    {}", TARGETS.len());
    println!("  Topics per language: {}", Topic::ALL.len());
    if dry_run {
        println!("  Dry run, nothing saved ({destination})");
    } else {
        println!("  Saved to: {destination}");
    }
    println!();

    Ok(articles)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).expect("valid date")
    }

    #[test]
    fn test_json_output_override() {
        let dir = tempfile::tempdir().expect("tempdir");
        let output = dir.path().join("out/articles.json");

        let articles =
            run_on(&Config::default(), Format::Json, Some(&output), false, false, date())
                .expect("run");

        assert_eq!(articles.len(), 85);
        let content = fs::read_to_string(output).expect("read");
        assert!(content.contains("\"date\": \"2025-01-15\""));
    }

    #[test]
    fn test_mdx_to_configured_articles_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut config = Config::default();
        config.paths.articles_dir = dir.path().to_path_buf();

        run_on(&config, Format::Mdx, None, false, false, date()).expect("run");

        assert!(
            dir.path()
                .join("el/es/spanish-greetings-and-farewells.mdx")
                .is_file()
        );
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let output = dir.path().join("articles.json");

        run_on(&Config::default(), Format::Json, Some(&output), false, true, date()).expect("run");

        assert!(!output.exists());
    }
}
