//! Article discovery.
//!
//! Walks the articles directory, or reads a scratch file listing paths.
//! Results are sorted so every run visits files in the same order.

use std::{
    fs,
    path::{Path, PathBuf},
};

use mdxmend_core::is_mdx;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{FixError, Result};

/// Every `.mdx` file under `dir`, at any depth.
pub fn find_articles(dir: &Path) -> Result<Vec<PathBuf>> {
    walk(dir, 1, usize::MAX, |_| true)
}

/// Articles at exactly `<dir>/<native>/<target>/` whose file name contains `needle`.
pub fn find_in_language_dirs(dir: &Path, needle: &str) -> Result<Vec<PathBuf>> {
    walk(dir, 3, 3, |name| name.contains(needle) && !name.starts_with('.'))
}

fn walk(
    dir: &Path,
    min_depth: usize,
    max_depth: usize,
    keep: impl Fn(&str) -> bool,
) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(FixError::MissingDir(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(min_depth)
        .max_depth(max_depth)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "skipping unreadable entry");
                continue;
            }
        };

        let wanted = entry.file_type().is_file()
            && is_mdx(entry.path())
            && keep(&entry.file_name().to_string_lossy());
        if wanted {
            files.push(entry.into_path());
        }
    }

    debug!(dir = %dir.display(), count = files.len(), "found articles");
    Ok(files)
}

/// Read a scratch file listing one article path per line.
///
/// Lines are trimmed; blank lines are ignored.
pub fn read_list(path: &Path) -> Result<Vec<PathBuf>> {
    let content = fs::read_to_string(path).map_err(|e| FixError::read(path, e))?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
        fs::write(path, "---\ntitle: x\n---\n").expect("write");
    }

    #[test]
    fn test_find_articles_recursive_and_sorted() {
        let dir = tempfile::tempdir().expect("tempdir");
        touch(dir.path(), "en/de/b.mdx");
        touch(dir.path(), "en/de/a.mdx");
        touch(dir.path(), "en/de/notes.md");
        touch(dir.path(), "top.mdx");

        let files = find_articles(dir.path()).expect("find");
        let rel: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).expect("prefix").to_path_buf())
            .collect();
        assert_eq!(
            rel,
            vec![
                PathBuf::from("en/de/a.mdx"),
                PathBuf::from("en/de/b.mdx"),
                PathBuf::from("top.mdx"),
            ]
        );
    }

    #[test]
    fn test_find_in_language_dirs_exact_depth() {
        let dir = tempfile::tempdir().expect("tempdir");
        touch(dir.path(), "en/nl/dutch-romantic-phrases-every-occasion.mdx");
        touch(dir.path(), "uk/pl/romantic-polish-phrases-for-couples.mdx");
        touch(dir.path(), "uk/pl/polish-pet-names.mdx");
        touch(dir.path(), "uk/romantic-at-wrong-depth.mdx");
        touch(dir.path(), "uk/pl/extra/romantic-too-deep.mdx");

        let files = find_in_language_dirs(dir.path(), "romantic").expect("find");
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("en/nl/dutch-romantic-phrases-every-occasion.mdx"));
        assert!(files[1].ends_with("uk/pl/romantic-polish-phrases-for-couples.mdx"));
    }

    #[test]
    fn test_missing_dir_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = find_articles(&dir.path().join("nope")).unwrap_err();
        assert!(err.to_string().contains("articles directory not found"));
    }

    #[test]
    fn test_read_list_skips_blank_lines() {
        let dir = tempfile::tempdir().expect("tempdir");
        let list = dir.path().join("compliments_files.txt");
        fs::write(&list, "a/en/de/x.mdx\n\n  a/en/fr/y.mdx  \n").expect("write");

        let paths = read_list(&list).expect("read");
        assert_eq!(
            paths,
            vec![PathBuf::from("a/en/de/x.mdx"), PathBuf::from("a/en/fr/y.mdx")]
        );
    }
}
