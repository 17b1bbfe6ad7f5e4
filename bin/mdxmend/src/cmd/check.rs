//! Check command - validate article frontmatter and markup

use std::path::Path;

use color_eyre::eyre::{Result, bail};
use mdxmend_core::{ArticleLocation, Config, Document};
use mdxmend_fix::{cta::EMPTY_CTA, find_articles, quotes::convert_apostrophe_attributes};

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Validates every article under the articles directory.
pub fn run(config: &Config, strict: bool) -> Result<()> {
    tracing::info!(articles_dir = ?config.paths.articles_dir, strict, "Checking articles");

    println!("Checking articles...");
    let result = validate(config);

    // Print summary
    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Validate every article under the configured articles directory.
pub fn validate(config: &Config) -> ValidationResult {
    let mut result = ValidationResult::default();
    let articles_dir = &config.paths.articles_dir;

    let files = match find_articles(articles_dir) {
        Ok(files) => files,
        Err(e) => {
            result.add_error(e.to_string());
            return result;
        }
    };

    let before = result.errors.len();
    for path in &files {
        validate_article(path, articles_dir, config, &mut result);
    }

    let failed = result.errors.len() - before;
    if failed == 0 {
        println!("  ✓ All {} articles readable", files.len());
    } else {
        println!("  ✗ {failed} error(s) in {} articles", files.len());
    }

    result
}

fn validate_article(
    path: &Path,
    articles_dir: &Path,
    config: &Config,
    result: &mut ValidationResult,
) {
    let display = path.display();

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            result.add_error(format!("{display}: Failed to read file: {e}"));
            return;
        }
    };

    let relative = path.strip_prefix(articles_dir).unwrap_or(path);
    if ArticleLocation::from_path(relative).is_none() {
        result.add_warning(format!("{display}: not under <native>/<target>/"));
    }

    if content.contains(EMPTY_CTA) {
        result.add_warning(format!("{display}: empty {EMPTY_CTA} block"));
    }

    for (number, line) in content.lines().enumerate() {
        if convert_apostrophe_attributes(line) != line {
            result.add_warning(format!(
                "{display}:{}: single-quoted attribute contains an apostrophe",
                number + 1
            ));
        }
    }

    let Some(doc) = Document::parse(&content) else {
        result.add_error(format!("{display}: missing frontmatter"));
        return;
    };

    let meta = match doc.meta(path) {
        Ok(meta) => meta,
        Err(e) => {
            result.add_error(e.to_string());
            return;
        }
    };

    let title = meta.title.as_deref().unwrap_or_default();
    if title.trim().is_empty() {
        result.add_error(format!("{display}: missing title"));
    } else {
        let chars = title.chars().count();
        if chars > config.seo.max_title_chars {
            result.add_warning(format!(
                "{display}: title is {chars} characters (max {})",
                config.seo.max_title_chars
            ));
        }
    }

    if let Some(description) = &meta.description {
        let chars = description.chars().count();
        if chars > config.seo.max_description_chars {
            result.add_warning(format!(
                "{display}: description is {chars} characters (max {})",
                config.seo.max_description_chars
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn config_for(dir: &Path) -> Config {
        let mut config = Config::default();
        config.paths.articles_dir = dir.to_path_buf();
        config
    }

    fn write(dir: &Path, rel: &str, content: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
        fs::write(path, content).expect("write");
    }

    #[test]
    fn test_clean_tree_passes() {
        let dir = tempfile::tempdir().expect("tempdir");
        write(
            dir.path(),
            "en/de/german-words.mdx",
            "---\ntitle: \"German Words\"\ndescription: \"Short\"\n---\n\n<VocabCard word=\"Hallo\" />\n",
        );

        let result = validate(&config_for(dir.path()));
        assert!(result.errors.is_empty(), "{:?}", result.errors);
        assert!(result.warnings.is_empty(), "{:?}", result.warnings);
        assert!(run(&config_for(dir.path()), true).is_ok());
    }

    #[test]
    fn test_crlf_article_passes() {
        let dir = tempfile::tempdir().expect("tempdir");
        write(
            dir.path(),
            "en/de/german-compliments.mdx",
            "---\r\ntitle: \"25 German Compliments\"\r\nnativeLanguage: en\r\n---\r\n\r\nBody\r\n",
        );

        let result = validate(&config_for(dir.path()));
        assert!(result.errors.is_empty(), "{:?}", result.errors);
        assert!(result.warnings.is_empty(), "{:?}", result.warnings);
    }

    #[test]
    fn test_errors_for_missing_frontmatter_and_title() {
        let dir = tempfile::tempdir().expect("tempdir");
        write(dir.path(), "en/de/a.mdx", "no frontmatter\n");
        write(dir.path(), "en/de/b.mdx", "---\ndescription: x\n---\nbody\n");
        write(dir.path(), "en/de/c.mdx", "---\ntitle: [unclosed\n---\nbody\n");

        let result = validate(&config_for(dir.path()));
        assert_eq!(result.errors.len(), 3, "{:?}", result.errors);
        assert!(result.errors[0].ends_with("a.mdx: missing frontmatter"));
        assert!(result.errors[1].ends_with("b.mdx: missing title"));
        assert!(result.errors[2].starts_with("Frontmatter error in "));
        assert_eq!(result.errors[2].matches("c.mdx").count(), 1);
        assert!(run(&config_for(dir.path()), false).is_err());
    }

    #[test]
    fn test_warnings_and_strict_mode() {
        let dir = tempfile::tempdir().expect("tempdir");
        let long_title = "A".repeat(61);
        write(
            dir.path(),
            "de/loose.mdx",
            &format!(
                "---\ntitle: \"{long_title}\"\n---\n\n<VocabCard example='It's fine' />\n\n<CTA />\n"
            ),
        );

        let result = validate(&config_for(dir.path()));
        assert!(result.errors.is_empty(), "{:?}", result.errors);
        assert_eq!(result.warnings.len(), 4, "{:?}", result.warnings);
        assert!(result.warnings[0].ends_with("not under <native>/<target>/"));
        assert!(result.warnings[1].ends_with("empty <CTA /> block"));
        assert!(result.warnings[2].ends_with(":5: single-quoted attribute contains an apostrophe"));
        assert!(result.warnings[3].contains("title is 61 characters (max 60)"));

        assert!(run(&config_for(dir.path()), false).is_ok());
        assert!(run(&config_for(dir.path()), true).is_err());
    }

    #[test]
    fn test_missing_articles_dir_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = validate(&config_for(&dir.path().join("missing")));
        assert_eq!(result.errors.len(), 1);
    }
}
