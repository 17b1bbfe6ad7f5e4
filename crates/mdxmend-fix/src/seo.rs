//! Compliments article SEO: titles, meta descriptions, and the combined pass.
//!
//! All three jobs read the reader's language from the frontmatter and the
//! target language from the article's parent directory. Lengths are
//! counted in characters, not bytes.

use std::{path::Path, sync::LazyLock};

use mdxmend_core::{
    Document, Fields,
    config::SeoConfig,
    lang::{description_name, endonym, lookup, title_name},
    target_language,
};
use regex::{NoExpand, Regex};

use crate::{
    cta::{compliments_cta, replace_cta_blocks},
    phrases::{DESCRIPTION_TEMPLATES, GENDERED_PHRASES, PLAIN_PHRASES, TITLE_TEMPLATES, fill, localized},
    runner::{Edit, Fix},
};

/// Used when the current title carries no number.
pub const DEFAULT_COUNT: &str = "50";

static TITLE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^title:[ \t]*(.*)$").expect("valid regex"));
static DESCRIPTION_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"description:\s*"[^"]*""#).expect("valid regex"));
static NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").expect("valid regex"));

/// The first run of digits in `title`, or [`DEFAULT_COUNT`].
pub fn first_number(title: &str) -> &str {
    NUMBER.find(title).map_or(DEFAULT_COUNT, |m| m.as_str())
}

/// Strip one matching pair of outer quotes.
fn unquote(value: &str) -> &str {
    let value = value.trim();
    ['"', '\'']
        .into_iter()
        .find_map(|quote| value.strip_prefix(quote)?.strip_suffix(quote))
        .unwrap_or(value)
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn collapse_spaces(s: &str) -> String {
    s.replace("  ", " ")
}

/// Localized compliments title.
///
/// Drops the number when the result would exceed `max_chars`.
pub fn compliments_title(native: &str, target: &str, number: &str, max_chars: usize) -> String {
    let template = localized(TITLE_TEMPLATES, native);
    let upper = target.to_uppercase();
    let lang = title_name(native, target).unwrap_or(&upper);

    let title = fill(template, &[("num", number), ("lang", lang)]);
    if char_len(&title) <= max_chars {
        return title;
    }
    collapse_spaces(&fill(template, &[("num", ""), ("lang", lang)]))
        .trim()
        .to_string()
}

/// Localized compliments meta description.
///
/// Over `max_chars`, English switches to a shorter sentence and other
/// languages drop the count.
pub fn compliments_description(
    native: &str,
    target: &str,
    number: &str,
    max_chars: usize,
) -> String {
    let template = localized(DESCRIPTION_TEMPLATES, native);
    let phrase = lookup(GENDERED_PHRASES, target).unwrap_or("compliment");
    let lang = description_name(native, target).unwrap_or(target);

    let description = fill(template, &[("phrase", phrase), ("count", number), ("lang", lang)]);
    if char_len(&description) <= max_chars {
        return description;
    }
    if native == "en" {
        format!("Learn {lang} compliments with '{phrase}'. Pronunciation guide included.")
    } else {
        collapse_spaces(&fill(template, &[("phrase", phrase), ("count", ""), ("lang", lang)]))
    }
}

/// English SEO title naming the target by its endonym.
pub fn seo_title(target: &str, number: &str, max_chars: usize) -> String {
    let lang = endonym_or_upper(target);
    let title = format!("{number} {lang} Compliments for Your Partner");
    if char_len(&title) <= max_chars {
        title
    } else {
        format!("{lang} Compliments for Your Partner")
    }
}

/// English SEO description quoting a compliment in the target language.
pub fn seo_description(target: &str, max_chars: usize) -> String {
    let lang = endonym_or_upper(target);
    let phrase = lookup(PLAIN_PHRASES, target).unwrap_or("amazing");
    let description = format!(
        "Master '{phrase}' and more {lang} compliments. Pronunciation guide for authentic delivery."
    );
    if char_len(&description) <= max_chars {
        description
    } else {
        format!("Learn {lang} compliments with '{phrase}'. Pronunciation guide included.")
    }
}

fn endonym_or_upper(target: &str) -> String {
    endonym(target).map_or_else(|| target.to_uppercase(), str::to_string)
}

/// What every compliments job needs before editing.
struct Article<'a> {
    doc: Document,
    fields: Fields,
    target: &'a str,
}

impl<'a> Article<'a> {
    fn load(path: &'a Path, content: &str) -> Result<Self, Edit> {
        let doc = Document::parse(content)
            .filter(|doc| !doc.frontmatter().is_empty())
            .ok_or_else(|| Edit::skip("no frontmatter found"))?;
        let target =
            target_language(path).ok_or_else(|| Edit::skip("no target language directory"))?;
        let fields = doc.fields();
        Ok(Self {
            doc,
            fields,
            target,
        })
    }

    fn native(&self) -> &str {
        self.fields.native_language()
    }
}

/// Rewrites compliments titles from the localized template.
#[derive(Debug, Clone, Copy)]
pub struct TitleFix {
    max_chars: usize,
}

impl TitleFix {
    pub fn new(seo: &SeoConfig) -> Self {
        Self {
            max_chars: seo.max_title_chars,
        }
    }
}

impl Fix for TitleFix {
    fn name(&self) -> &'static str {
        "compliments-titles"
    }

    fn apply(&self, path: &Path, content: &str) -> Edit {
        let mut article = match Article::load(path, content) {
            Ok(article) => article,
            Err(skip) => return skip,
        };

        let frontmatter = article.doc.frontmatter();
        let Some(caps) = TITLE_LINE.captures(frontmatter) else {
            return Edit::skip("no title found");
        };
        let (Some(line), Some(old)) = (caps.get(0), caps.get(1)) else {
            return Edit::skip("no title found");
        };
        let old = unquote(old.as_str());
        if old.is_empty() {
            return Edit::skip("no title found");
        }

        let title = compliments_title(
            article.native(),
            article.target,
            first_number(old),
            self.max_chars,
        );
        let updated = format!(
            "{}title: \"{title}\"{}",
            &frontmatter[..line.start()],
            &frontmatter[line.end()..]
        );
        article.doc.set_frontmatter(updated);
        Edit::Rewrite(article.doc.render())
    }
}

/// Rewrites the first double-quoted compliments description.
#[derive(Debug, Clone, Copy)]
pub struct DescriptionFix {
    max_chars: usize,
}

impl DescriptionFix {
    pub fn new(seo: &SeoConfig) -> Self {
        Self {
            max_chars: seo.max_description_chars,
        }
    }
}

impl Fix for DescriptionFix {
    fn name(&self) -> &'static str {
        "compliments-descriptions"
    }

    fn apply(&self, path: &Path, content: &str) -> Edit {
        let mut article = match Article::load(path, content) {
            Ok(article) => article,
            Err(skip) => return skip,
        };

        let number = first_number(article.fields.get("title").unwrap_or_default());
        let description =
            compliments_description(article.native(), article.target, number, self.max_chars);
        let line = format!("description: \"{description}\"");
        let updated = DESCRIPTION_FIELD
            .replacen(article.doc.frontmatter(), 1, NoExpand(&line))
            .into_owned();
        article.doc.set_frontmatter(updated);
        Edit::Rewrite(article.doc.render())
    }
}

/// Title, description, and CTA in one pass.
#[derive(Debug, Clone, Copy)]
pub struct SeoFix {
    max_title_chars: usize,
    max_description_chars: usize,
}

impl SeoFix {
    pub fn new(seo: &SeoConfig) -> Self {
        Self {
            max_title_chars: seo.max_title_chars,
            max_description_chars: seo.max_description_chars,
        }
    }
}

impl Fix for SeoFix {
    fn name(&self) -> &'static str {
        "compliments-seo"
    }

    fn apply(&self, path: &Path, content: &str) -> Edit {
        let mut article = match Article::load(path, content) {
            Ok(article) => article,
            Err(skip) => return skip,
        };

        let number = first_number(article.fields.get("title").unwrap_or_default());
        let title = seo_title(article.target, number, self.max_title_chars);
        let description = seo_description(article.target, self.max_description_chars);
        let cta = compliments_cta(article.native(), article.target);

        article.doc.replace_field("title", &title);
        article.doc.replace_field("description", &description);
        let body = replace_cta_blocks(article.doc.body(), &cta);
        article.doc.set_body(body);
        Edit::Rewrite(article.doc.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seo() -> SeoConfig {
        SeoConfig::default()
    }

    fn rewrite(edit: Edit) -> String {
        match edit {
            Edit::Rewrite(out) => out,
            Edit::Skip(reason) => panic!("unexpected skip: {reason}"),
        }
    }

    const EN_DE: &str = "---\ntitle: \"25 German Compliments to Make Them Smile\"\ndescription: \"Old description\"\nnativeLanguage: en\n---\n\nBody\n\n<CTA\n  text=\"Old\"\n  buttonText=\"Old\"\n/>\n";

    #[test]
    fn test_first_number() {
        assert_eq!(first_number("25 German Compliments"), "25");
        assert_eq!(first_number("Top 100 and 5 more"), "100");
        assert_eq!(first_number("German Compliments"), "50");
    }

    #[test]
    fn test_title_from_template() {
        assert_eq!(
            compliments_title("en", "de", "25", 60),
            "25 German Compliments for Your Partner"
        );
        assert_eq!(
            compliments_title("es", "en", "30", 60),
            "30 Cumplidos en Inglés para Tu Pareja"
        );
    }

    #[test]
    fn test_title_drops_number_when_too_long() {
        assert_eq!(
            compliments_title("en", "de", "25", 30),
            "German Compliments for Your Partner"
        );
        let title = compliments_title("tr", "de", "25", 10);
        assert!(title.starts_with("Partneriniz için "));
        assert!(!title.contains("  "));
        assert!(!title.contains("25"));
    }

    #[test]
    fn test_title_unknown_target_uses_upper_code() {
        assert_eq!(
            compliments_title("en", "ja", "10", 60),
            "10 JA Compliments for Your Partner"
        );
    }

    #[test]
    fn test_title_fix_rewrites_title_line_only() {
        let out = rewrite(TitleFix::new(&seo()).apply(Path::new("a/en/de/x.mdx"), EN_DE));
        assert!(out.starts_with("---\ntitle: \"25 German Compliments for Your Partner\"\n"));
        assert!(out.contains("description: \"Old description\""));
        assert!(out.ends_with("buttonText=\"Old\"\n/>\n"));
    }

    #[test]
    fn test_title_fix_reads_native_from_language_field() {
        let content = "---\ntitle: Komplimente\nlanguage: de\n---\nBody";
        let out = rewrite(TitleFix::new(&seo()).apply(Path::new("a/de/fr/x.mdx"), content));
        assert_eq!(
            out,
            "---\ntitle: \"50 Französisch Komplimente für Deinen Partner\"\nlanguage: de\n---\nBody"
        );
    }

    #[test]
    fn test_title_fix_skips() {
        let fix = TitleFix::new(&seo());
        let path = Path::new("a/en/de/x.mdx");
        assert_eq!(
            fix.apply(path, "no frontmatter"),
            Edit::Skip("no frontmatter found".to_string())
        );
        assert_eq!(
            fix.apply(path, "---\ndescription: x\n---\n"),
            Edit::Skip("no title found".to_string())
        );
        assert_eq!(
            fix.apply(path, "---\ntitle: \"\"\n---\n"),
            Edit::Skip("no title found".to_string())
        );
    }

    #[test]
    fn test_title_fix_replaces_whole_line_with_apostrophe() {
        let content = "---\ntitle: \"Les compliments d'amour\"\nnativeLanguage: fr\n---\nBody";
        let out = rewrite(TitleFix::new(&seo()).apply(Path::new("a/fr/de/c.mdx"), content));
        assert_eq!(
            out,
            "---\ntitle: \"50 Compliments en Allemand pour Votre Partenaire\"\nnativeLanguage: fr\n---\nBody"
        );
        let doc = Document::parse(&out).expect("frontmatter");
        assert!(doc.meta(Path::new("a/fr/de/c.mdx")).is_ok());
    }

    #[test]
    fn test_unquote() {
        assert_eq!(unquote("\"It's 12\""), "It's 12");
        assert_eq!(unquote("'Plain'"), "Plain");
        assert_eq!(unquote("  bare words "), "bare words");
        assert_eq!(unquote("\"mismatched'"), "\"mismatched'");
    }

    #[test]
    fn test_title_fix_handles_crlf_articles() {
        let content =
            "---\r\ntitle: \"25 German Compliments\"\r\nnativeLanguage: en\r\n---\r\n\r\nBody\r\n";
        let out = rewrite(TitleFix::new(&seo()).apply(Path::new("a/en/de/c.mdx"), content));
        assert_eq!(
            out,
            "---\ntitle: \"25 German Compliments for Your Partner\"\nnativeLanguage: en\n---\n\nBody\n"
        );
    }

    #[test]
    fn test_description_from_template() {
        assert_eq!(
            compliments_description("en", "de", "25", 155),
            "Master 'Du bist wunderschön' and 25+ German compliments. Pronunciation guide included."
        );
    }

    #[test]
    fn test_description_shortened_when_too_long() {
        assert_eq!(
            compliments_description("en", "de", "25", 40),
            "Learn German compliments with 'Du bist wunderschön'. Pronunciation guide included."
        );
        let pl = compliments_description("pl", "de", "25", 20);
        assert!(pl.contains(" i + komplementów po niemiecku."));
        assert!(!pl.contains("25"));
    }

    #[test]
    fn test_description_fallbacks() {
        let description = compliments_description("en", "ja", "10", 155);
        assert_eq!(
            description,
            "Master 'compliment' and 10+ ja compliments. Pronunciation guide included."
        );
    }

    #[test]
    fn test_description_fix_uses_title_number() {
        let out = rewrite(DescriptionFix::new(&seo()).apply(Path::new("a/en/de/x.mdx"), EN_DE));
        assert!(out.contains(
            "description: \"Master 'Du bist wunderschön' and 25+ German compliments. Pronunciation guide included.\"\n"
        ));
        assert!(out.contains("title: \"25 German Compliments to Make Them Smile\""));
    }

    #[test]
    fn test_description_fix_ignores_unquoted_description() {
        let content = "---\ntitle: x\ndescription: bare\n---\n";
        let out = rewrite(DescriptionFix::new(&seo()).apply(Path::new("a/en/de/x.mdx"), content));
        assert_eq!(out, content);
    }

    #[test]
    fn test_seo_title_and_description() {
        assert_eq!(seo_title("de", "25", 60), "25 Deutsch Compliments for Your Partner");
        assert_eq!(seo_title("de", "25", 20), "Deutsch Compliments for Your Partner");
        assert_eq!(
            seo_description("fr", 155),
            "Master 'Tu es belle' and more Français compliments. Pronunciation guide for authentic delivery."
        );
        assert_eq!(
            seo_description("zz", 30),
            "Learn ZZ compliments with 'amazing'. Pronunciation guide included."
        );
    }

    #[test]
    fn test_seo_fix_rewrites_fields_and_cta() {
        let out = rewrite(SeoFix::new(&seo()).apply(Path::new("a/en/de/x.mdx"), EN_DE));
        assert!(out.starts_with("---\ntitle: \"25 Deutsch Compliments for Your Partner\"\n"));
        assert!(out.contains(
            "description: \"Master 'Du bist wunderschön' and more Deutsch compliments. Pronunciation guide for authentic delivery.\""
        ));
        assert!(out.contains("buttonText=\"Start Learning Deutsch\""));
        assert!(!out.contains("text=\"Old\""));
    }

    #[test]
    fn test_seo_fix_keeps_single_quote_style() {
        let content = "---\ntitle: ''\ndescription: 'x'\nnativeLanguage: pl\n---\n";
        let out = rewrite(SeoFix::new(&seo()).apply(Path::new("a/pl/de/x.mdx"), content));
        assert_eq!(
            out,
            "---\ntitle: '50 Deutsch Compliments for Your Partner'\ndescription: 'Master ''Du bist wunderschön'' and more Deutsch compliments. Pronunciation guide for authentic delivery.'\nnativeLanguage: pl\n---\n"
        );

        let doc = Document::parse(&out).expect("frontmatter");
        let meta = doc.meta(Path::new("a/pl/de/x.mdx")).expect("valid yaml");
        assert_eq!(
            meta.description.as_deref(),
            Some(
                "Master 'Du bist wunderschön' and more Deutsch compliments. Pronunciation guide for authentic delivery."
            )
        );
    }
}
