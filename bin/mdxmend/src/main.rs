//! mdxmend CLI
//!
//! Maintenance jobs for multilingual MDX blog content.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use mdxmend::cmd::{compliments::ComplimentsJob, generate::Format, quotes::Strategy};
use mdxmend_core::Config;

/// Command-line interface for mdxmend.
#[derive(Parser)]
#[command(
    name = "mdxmend",
    version,
    about = "Patch and generate MDX articles for a multilingual blog"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "mdxmend.toml")]
    config: PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Override the articles directory
    #[arg(long, global = true)]
    articles_dir: Option<PathBuf>,

    /// Report what would change without writing files
    #[arg(long, global = true)]
    dry_run: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Fix quote characters in component attributes
    Quotes {
        /// Which repair to run
        #[arg(short, long, value_enum, default_value_t = Strategy::Normalize)]
        strategy: Strategy,
    },
    /// Fill or rewrite call-to-action blocks
    Cta {
        #[command(subcommand)]
        job: CtaJob,
    },
    /// Rewrite compliments article titles, descriptions, and CTAs
    Compliments {
        /// Which fields to rewrite
        #[arg(value_enum)]
        job: ComplimentsJob,
        /// File listing article paths, one per line (repeatable)
        #[arg(short, long = "list")]
        lists: Vec<PathBuf>,
        /// Article paths to process
        paths: Vec<PathBuf>,
    },
    /// Generate Greek-native articles from phrase tables
    Generate {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,
        /// Output file (json) or articles root (mdx)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Overwrite existing MDX files
        #[arg(long)]
        force: bool,
    },
    /// Validate article frontmatter and markup
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
    /// Print the effective configuration
    Config,
}

/// Call-to-action jobs.
#[derive(clap::Subcommand)]
enum CtaJob {
    /// Replace empty `<CTA />` blocks with the romantic CTA
    Empty {
        /// Process every article instead of the known list
        #[arg(long)]
        scan: bool,
    },
    /// Rewrite CTA blocks in romantic-phrases articles
    Romantic,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    mdxmend::init_tracing(cli.verbose);

    let mut config = Config::load_with_env(&cli.config)
        .wrap_err_with(|| format!("failed to load configuration from {}", cli.config.display()))?;
    if let Some(dir) = cli.articles_dir {
        config.paths.articles_dir = dir;
    }
    let dry_run = cli.dry_run;

    match cli.command {
        Commands::Quotes { strategy } => {
            mdxmend::cmd::quotes::run(&config, strategy, dry_run)?;
        }
        Commands::Cta { job } => {
            match job {
                CtaJob::Empty { scan } => mdxmend::cmd::cta::run_empty(&config, scan, dry_run)?,
                CtaJob::Romantic => mdxmend::cmd::cta::run_romantic(&config, dry_run)?,
            };
        }
        Commands::Compliments { job, lists, paths } => {
            mdxmend::cmd::compliments::run(&config, job, &lists, &paths, dry_run)?;
        }
        Commands::Generate {
            format,
            output,
            force,
        } => {
            mdxmend::cmd::generate::run(&config, format, output.as_deref(), force, dry_run)?;
        }
        Commands::Check { strict } => {
            mdxmend::cmd::check::run(&config, strict)?;
        }
        Commands::Config => {
            mdxmend::cmd::config::run(&cli.config, &config)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_quotes_default_strategy() {
        let args = ["mdxmend", "quotes"];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.config, PathBuf::from("mdxmend.toml"));
        assert_eq!(cli.verbose, 0);
        assert!(!cli.dry_run);

        match cli.command {
            Commands::Quotes { strategy } => assert_eq!(strategy, Strategy::Normalize),
            _ => panic!("Expected Quotes command"),
        }
    }

    #[test]
    fn test_cli_quotes_strategy() {
        let args = ["mdxmend", "quotes", "--strategy", "mismatched"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Quotes { strategy } => assert_eq!(strategy, Strategy::Mismatched),
            _ => panic!("Expected Quotes command"),
        }
    }

    #[test]
    fn test_cli_cta_jobs() {
        let cli = Cli::parse_from(["mdxmend", "cta", "empty", "--scan"]);
        match cli.command {
            Commands::Cta {
                job: CtaJob::Empty { scan },
            } => assert!(scan),
            _ => panic!("Expected cta empty"),
        }

        let cli = Cli::parse_from(["mdxmend", "cta", "romantic"]);
        assert!(matches!(
            cli.command,
            Commands::Cta {
                job: CtaJob::Romantic
            }
        ));
    }

    #[test]
    fn test_cli_compliments_with_lists_and_paths() {
        let args = [
            "mdxmend",
            "compliments",
            "seo",
            "--list",
            "a.txt",
            "--list",
            "b.txt",
            "en/de/x.mdx",
        ];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Compliments { job, lists, paths } => {
                assert_eq!(job, ComplimentsJob::Seo);
                assert_eq!(lists, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
                assert_eq!(paths, vec![PathBuf::from("en/de/x.mdx")]);
            }
            _ => panic!("Expected Compliments command"),
        }
    }

    #[test]
    fn test_cli_generate_defaults() {
        let cli = Cli::parse_from(["mdxmend", "generate"]);

        match cli.command {
            Commands::Generate {
                format,
                output,
                force,
            } => {
                assert_eq!(format, Format::Json);
                assert!(output.is_none());
                assert!(!force);
            }
            _ => panic!("Expected Generate command"),
        }
    }

    #[test]
    fn test_cli_generate_mdx_force() {
        let cli = Cli::parse_from(["mdxmend", "generate", "--format", "mdx", "--force"]);

        match cli.command {
            Commands::Generate { format, force, .. } => {
                assert_eq!(format, Format::Mdx);
                assert!(force);
            }
            _ => panic!("Expected Generate command"),
        }
    }

    #[test]
    fn test_cli_check_command_parsing() {
        let cli = Cli::parse_from(["mdxmend", "check", "--strict"]);

        match cli.command {
            Commands::Check { strict } => assert!(strict),
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let args = ["mdxmend", "-vv", "quotes", "--dry-run", "--articles-dir", "blog/articles"];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.verbose, 2);
        assert!(cli.dry_run);
        assert_eq!(cli.articles_dir, Some(PathBuf::from("blog/articles")));
    }

    #[test]
    fn test_cli_custom_config_path() {
        let cli = Cli::parse_from(["mdxmend", "--config", "blog.toml", "config"]);
        assert_eq!(cli.config, PathBuf::from("blog.toml"));
        assert!(matches!(cli.command, Commands::Config));
    }

    #[test]
    fn test_cli_rejects_unknown_strategy() {
        assert!(Cli::try_parse_from(["mdxmend", "quotes", "--strategy", "nope"]).is_err());
    }
}
