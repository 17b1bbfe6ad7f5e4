//! Writing generated articles to disk.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::{
    article::GeneratedArticle,
    error::{GeneratorError, Result},
};

/// Output format for generated articles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One JSON array of records.
    #[default]
    Json,
    /// One MDX file per article under the articles directory.
    Mdx,
}

/// Files written and left alone by an MDX emit.
#[derive(Debug, Default)]
pub struct EmitReport {
    pub written: Vec<PathBuf>,
    pub existing: Vec<PathBuf>,
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| GeneratorError::write(parent, e))?;
    }
    Ok(())
}

/// Write all records as one pretty-printed JSON array.
pub fn write_json(articles: &[GeneratedArticle], output: &Path) -> Result<()> {
    ensure_parent(output)?;
    let json = serde_json::to_string_pretty(articles)?;
    fs::write(output, json).map_err(|e| GeneratorError::write(output, e))?;
    info!(path = %output.display(), count = articles.len(), "wrote article records");
    Ok(())
}

/// Write one MDX file per record under `articles_dir`.
///
/// Existing files are kept unless `force` is set.
pub fn write_mdx(
    articles: &[GeneratedArticle],
    articles_dir: &Path,
    force: bool,
) -> Result<EmitReport> {
    let mut report = EmitReport::default();

    for article in articles {
        let path = articles_dir.join(article.location().relative_path());
        if path.exists() && !force {
            debug!(path = %path.display(), "article exists, skipping");
            report.existing.push(path);
            continue;
        }

        ensure_parent(&path)?;
        fs::write(&path, article.to_mdx()?).map_err(|e| GeneratorError::write(&path, e))?;
        debug!(path = %path.display(), "wrote article");
        report.written.push(path);
    }

    info!(
        written = report.written.len(),
        existing = report.existing.len(),
        "wrote MDX articles"
    );
    Ok(report)
}
