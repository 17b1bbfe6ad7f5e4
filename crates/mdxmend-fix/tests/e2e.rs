//! End-to-end tests for the fix jobs.
//!
//! Each test builds a small article tree in a temporary directory and runs
//! a job over it the way the CLI does.

use std::{
    fs,
    path::{Path, PathBuf},
};

use mdxmend_core::config::SeoConfig;
use mdxmend_fix::{
    EmptyCtaFix, QuoteFix, QuoteStrategy, Runner, SeoFix, TitleFix, empty_cta_targets,
    find_articles, find_in_language_dirs, read_list,
};

fn write_article(root: &Path, rel: &str, content: &str) -> PathBuf {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
    fs::write(&path, content).expect("write");
    path
}

#[test]
fn test_quotes_over_article_tree() {
    let dir = tempfile::tempdir().expect("tempdir");
    let broken = write_article(
        dir.path(),
        "en/de/german-pet-names.mdx",
        "---\ntitle: Pet names\n---\n\n<VocabCard word='Schatz' example='It's sweet' />\n",
    );
    let clean = write_article(
        dir.path(),
        "en/fr/french-pet-names.mdx",
        "---\ntitle: Pet names\n---\n\n<VocabCard word=\"Chéri\" />\n",
    );

    let files = find_articles(dir.path()).expect("find");
    let report = Runner::new().run(&QuoteFix::new(QuoteStrategy::Normalize), &files);

    assert_eq!(report.updated, vec![broken.clone()]);
    assert_eq!(report.unchanged, vec![clean]);
    assert_eq!(
        fs::read_to_string(broken).expect("read"),
        "---\ntitle: Pet names\n---\n\n<VocabCard word=\"Schatz\" example=\"It's sweet\" />\n"
    );
}

#[test]
fn test_empty_cta_known_targets() {
    let dir = tempfile::tempdir().expect("tempdir");
    let article = write_article(
        dir.path(),
        "uk/pl/romantic-polish-phrases-for-couples.mdx",
        "---\ntitle: x\n---\n\n<CTA />\n",
    );

    let targets = empty_cta_targets(dir.path());
    let report = Runner::new().run(&EmptyCtaFix, &targets);

    assert_eq!(report.updated, vec![article.clone()]);
    // The other known targets do not exist in this tree.
    assert_eq!(report.failed.len(), targets.len() - 1);
    let content = fs::read_to_string(article).expect("read");
    assert!(content.contains("text=\"Готові опанувати польську з партнером?"));
}

#[test]
fn test_romantic_discovery_depth() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_article(dir.path(), "de/it/romantic-italian.mdx", "x");
    write_article(dir.path(), "de/it/pet-names.mdx", "x");
    write_article(dir.path(), "de/romantic-top.mdx", "x");

    let files = find_in_language_dirs(dir.path(), "romantic").expect("find");
    assert_eq!(files, vec![dir.path().join("de/it/romantic-italian.mdx")]);
}

#[test]
fn test_compliments_from_list_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let article = write_article(
        dir.path(),
        "articles/en/de/german-compliments.mdx",
        "---\ntitle: \"100 Ways to Flatter\"\ndescription: \"old\"\nnativeLanguage: en\n---\n\n<CTA text=\"a\" buttonText=\"b\" />\n",
    );
    let no_frontmatter = write_article(dir.path(), "articles/en/fr/french.mdx", "plain text");
    let list = dir.path().join("compliments_files.txt");
    fs::write(
        &list,
        format!("{}\n\n{}\n", article.display(), no_frontmatter.display()),
    )
    .expect("write list");

    let files = read_list(&list).expect("list");
    let seo = SeoConfig::default();

    let dry = Runner::new().dry_run(true).run(&SeoFix::new(&seo), &files);
    assert_eq!(dry.updated.len(), 1);
    assert_eq!(dry.skipped.len(), 1);
    assert!(
        fs::read_to_string(&article)
            .expect("read")
            .contains("100 Ways to Flatter")
    );

    let report = Runner::new().run(&SeoFix::new(&seo), &files);
    assert_eq!(report.updated, vec![article.clone()]);
    assert_eq!(report.skipped[0].1, "no frontmatter found");

    let content = fs::read_to_string(&article).expect("read");
    assert!(content.starts_with("---\ntitle: \"100 Deutsch Compliments for Your Partner\"\n"));
    assert!(content.contains("buttonText=\"Start Learning Deutsch\""));

    // The localized title job rewrites the English title once, then settles.
    let again = Runner::new().run(&TitleFix::new(&seo), &[article.clone()]);
    assert_eq!(again.updated.len(), 1);
    let again = Runner::new().run(&TitleFix::new(&seo), &[article]);
    assert_eq!(again.unchanged.len(), 1);
}
