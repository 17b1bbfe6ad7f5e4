//! Article locations within the `<native>/<target>/<slug>.mdx` tree.

use std::path::{Path, PathBuf};

/// File extension of article sources.
pub const MDX_EXTENSION: &str = "mdx";

/// Whether `path` names an MDX article.
pub fn is_mdx(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(MDX_EXTENSION))
}

/// The target language of an article: the name of its parent directory.
pub fn target_language(path: &Path) -> Option<&str> {
    path.parent()?.file_name()?.to_str()
}

/// Parsed article path with native and target language extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleLocation {
    /// Reader's language (grandparent directory).
    pub native: String,

    /// Language being learned (parent directory).
    pub target: String,

    /// File stem.
    pub slug: String,
}

impl ArticleLocation {
    /// Parse an article path.
    ///
    /// - `articles/en/de/german-pet-names.mdx` → native: "en", target: "de", slug: "german-pet-names"
    /// - `de/german-pet-names.mdx` → `None` (no native directory)
    pub fn from_path(path: &Path) -> Option<Self> {
        let slug = path.file_stem()?.to_str()?;
        let target_dir = path.parent()?;
        let target = target_dir.file_name()?.to_str()?;
        let native = target_dir.parent()?.file_name()?.to_str()?;

        Some(Self {
            native: native.to_string(),
            target: target.to_string(),
            slug: slug.to_string(),
        })
    }

    /// Path relative to the articles directory.
    pub fn relative_path(&self) -> PathBuf {
        Path::new(&self.native)
            .join(&self.target)
            .join(format!("{}.{MDX_EXTENSION}", self.slug))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_from_full_path() {
        let path = Path::new("src/content/articles/uk/pl/romantic-polish-phrases-for-couples.mdx");
        let loc = ArticleLocation::from_path(path).expect("location");
        assert_eq!(loc.native, "uk");
        assert_eq!(loc.target, "pl");
        assert_eq!(loc.slug, "romantic-polish-phrases-for-couples");
        assert_eq!(
            loc.relative_path(),
            PathBuf::from("uk/pl/romantic-polish-phrases-for-couples.mdx")
        );
    }

    #[test]
    fn test_location_needs_two_directories() {
        assert!(ArticleLocation::from_path(Path::new("pl/post.mdx")).is_none());
        assert!(ArticleLocation::from_path(Path::new("post.mdx")).is_none());
    }

    #[test]
    fn test_target_language() {
        assert_eq!(target_language(Path::new("en/de/post.mdx")), Some("de"));
        assert_eq!(target_language(Path::new("de/post.mdx")), Some("de"));
        assert_eq!(target_language(Path::new("post.mdx")), None);
    }

    #[test]
    fn test_is_mdx() {
        assert!(is_mdx(Path::new("en/de/post.mdx")));
        assert!(is_mdx(Path::new("en/de/POST.MDX")));
        assert!(!is_mdx(Path::new("en/de/post.md")));
        assert!(!is_mdx(Path::new("en/de")));
    }
}
