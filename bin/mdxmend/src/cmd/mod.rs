//! Subcommand implementations.

pub mod check;
pub mod compliments;
pub mod config;
pub mod cta;
pub mod generate;
pub mod quotes;

use std::fmt::Write as _;

use mdxmend_fix::Report;

/// Human summary of a fix run.
pub fn summary(report: &Report, dry_run: bool) -> String {
    let mut out = String::new();
    let updated = if dry_run { "Would update" } else { "Updated" };

    let _ = writeln!(out);
    let _ = writeln!(out, "  {updated}: {}", report.updated.len());
    let _ = writeln!(out, "  Unchanged: {}", report.unchanged.len());
    let _ = writeln!(out, "  Skipped:   {}", report.skipped.len());
    let _ = writeln!(out, "  Failed:    {}", report.failed.len());
    let _ = writeln!(out, "  Total:     {}", report.total());

    if !report.skipped.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Skipped:");
        for (path, reason) in &report.skipped {
            let _ = writeln!(out, "  ⚠ {}: {reason}", path.display());
        }
    }

    if !report.failed.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Failed:");
        for (path, error) in &report.failed {
            let _ = writeln!(out, "  ✗ {}: {error}", path.display());
        }
    }

    out
}

/// Print the summary of a fix run to stdout.
pub fn print_report(report: &Report, dry_run: bool) {
    print!("{}", summary(report, dry_run));
}
