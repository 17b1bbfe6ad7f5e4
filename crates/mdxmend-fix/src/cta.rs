//! Call-to-action fixers.
//!
//! Every CTA written here has the same multi-line shape (see [`render_cta`]),
//! so later runs can find and replace it again.

use std::{
    path::{Path, PathBuf},
    sync::LazyLock,
};

use mdxmend_core::{
    ArticleLocation,
    lang::{cta_name, endonym, lookup},
};
use regex::{NoExpand, Regex};

use crate::{
    phrases::{COMPLIMENTS_BUTTON, COMPLIMENTS_CTA, ROMANTIC_CTA, fill, localized},
    runner::{Edit, Fix},
};

/// A CTA with no attributes, left behind by an earlier generator.
pub const EMPTY_CTA: &str = "<CTA />";

/// Natives whose compliments button also names the target language.
const NAMED_BUTTON_NATIVES: &[&str] = &["en", "es", "fr", "de", "it", "pt"];

/// Articles known to ship with an empty CTA, relative to the articles dir.
pub const EMPTY_CTA_TARGETS: &[&str] = &[
    "uk/pl/romantic-polish-phrases-for-couples.mdx",
    "uk/sv/romantic-swedish-phrases-for-couples.mdx",
    "uk/da/romantic-danish-phrases-for-couples.mdx",
    "uk/no/romantic-norwegian-phrases-for-couples.mdx",
    "uk/it/romantic-italian-phrases-for-couples.mdx",
    "uk/ro/romantic-romanian-phrases-for-couples.mdx",
    "uk/pt/romantic-portuguese-phrases-for-couples.mdx",
    "uk/nl/romantic-dutch-phrases-for-couples.mdx",
    "en/cs/czech-romantic-phrases-every-occasion.mdx",
    "en/ro/romanian-romantic-phrases-every-occasion.mdx",
    "en/uk/ukrainian-romantic-phrases-every-occasion.mdx",
    "en/hu/hungarian-romantic-phrases-every-occasion.mdx",
    "en/nl/dutch-romantic-phrases-every-occasion.mdx",
    "en/tr/turkish-romantic-phrases-every-occasion.mdx",
];

static CTA_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<CTA\s+text="[^"]*"\s+buttonText="[^"]*"\s*/>"#).expect("valid regex")
});

/// The known empty-CTA articles under `articles_dir`.
pub fn empty_cta_targets(articles_dir: &Path) -> Vec<PathBuf> {
    EMPTY_CTA_TARGETS
        .iter()
        .map(|rel| articles_dir.join(rel))
        .collect()
}

/// Render a CTA block.
pub fn render_cta(text: &str, button: &str) -> String {
    format!("<CTA\n  text=\"{text}\"\n  buttonText=\"{button}\"\n/>")
}

/// The romantic-phrases CTA for a reader of `native` learning `target`.
///
/// `None` when there is no template for `native`.
pub fn romantic_cta(native: &str, target: &str) -> Option<String> {
    let (text, button) = lookup(ROMANTIC_CTA, native)?;
    let name = cta_name(native, target).map_or_else(|| target.to_uppercase(), str::to_string);
    Some(render_cta(&fill(text, &[("lang", &name)]), button))
}

/// The compliments CTA for a reader of `native` learning `target`.
///
/// Falls back to English for unknown natives.
pub fn compliments_cta(native: &str, target: &str) -> String {
    let text = localized(COMPLIMENTS_CTA, native);
    let mut button = localized(COMPLIMENTS_BUTTON, native).to_string();
    if NAMED_BUTTON_NATIVES.contains(&native) {
        button.push(' ');
        match endonym(target) {
            Some(name) => button.push_str(name),
            None => button.push_str(&target.to_uppercase()),
        }
    }
    render_cta(text, &button)
}

/// Replace every complete CTA block in `content` with `cta`.
pub fn replace_cta_blocks(content: &str, cta: &str) -> String {
    CTA_BLOCK.replace_all(content, NoExpand(cta)).into_owned()
}

fn locate(path: &Path) -> Result<ArticleLocation, Edit> {
    ArticleLocation::from_path(path).ok_or_else(|| Edit::skip("not under <native>/<target>/"))
}

/// Fills empty `<CTA />` blocks with the romantic CTA.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyCtaFix;

impl Fix for EmptyCtaFix {
    fn name(&self) -> &'static str {
        "cta-empty"
    }

    fn apply(&self, path: &Path, content: &str) -> Edit {
        let loc = match locate(path) {
            Ok(loc) => loc,
            Err(skip) => return skip,
        };
        match romantic_cta(&loc.native, &loc.target) {
            Some(cta) => Edit::Rewrite(content.replace(EMPTY_CTA, &cta)),
            None => Edit::skip(format!("no template for {}", loc.native)),
        }
    }
}

/// Rewrites existing CTA blocks in romantic-phrases articles.
#[derive(Debug, Clone, Copy, Default)]
pub struct RomanticCtaFix;

impl Fix for RomanticCtaFix {
    fn name(&self) -> &'static str {
        "cta-romantic"
    }

    fn apply(&self, path: &Path, content: &str) -> Edit {
        let loc = match locate(path) {
            Ok(loc) => loc,
            Err(skip) => return skip,
        };
        match romantic_cta(&loc.native, &loc.target) {
            Some(cta) => Edit::Rewrite(replace_cta_blocks(content, &cta)),
            None => Edit::skip(format!("unknown native language {}", loc.native)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OLD_CTA: &str = "Intro\n\n<CTA\n  text=\"Old text\"\n  buttonText=\"Go\"\n/>\n";

    #[test]
    fn test_render_cta_shape() {
        assert_eq!(
            render_cta("Hi", "Go"),
            "<CTA\n  text=\"Hi\"\n  buttonText=\"Go\"\n/>"
        );
    }

    #[test]
    fn test_romantic_cta_uses_native_language_name() {
        let cta = romantic_cta("uk", "pl").expect("template");
        assert!(cta.contains("Готові опанувати польську з партнером?"));
        assert!(cta.contains("buttonText=\"Почати Зараз\""));
    }

    #[test]
    fn test_romantic_cta_falls_back_to_upper_code() {
        let cta = romantic_cta("uk", "uk").expect("template");
        assert!(cta.contains("Готові опанувати UK з партнером?"));
        assert!(romantic_cta("xx", "de").is_none());
    }

    #[test]
    fn test_empty_cta_filled() {
        let path = Path::new("articles/en/cs/czech-romantic-phrases-every-occasion.mdx");
        let edit = EmptyCtaFix.apply(path, "Text\n\n<CTA />\n\nMore <CTA />\n");
        let Edit::Rewrite(out) = edit else {
            panic!("expected rewrite, got {edit:?}");
        };
        assert!(!out.contains(EMPTY_CTA));
        assert_eq!(out.matches("Ready to master Czech with your partner?").count(), 2);
    }

    #[test]
    fn test_empty_cta_unknown_native_skipped() {
        let path = Path::new("articles/sv/de/romantic.mdx");
        assert_eq!(
            EmptyCtaFix.apply(path, "<CTA />"),
            Edit::Skip("no template for sv".to_string())
        );
    }

    #[test]
    fn test_romantic_replaces_existing_block() {
        let path = Path::new("articles/de/fr/romantic-french-phrases.mdx");
        let Edit::Rewrite(out) = RomanticCtaFix.apply(path, OLD_CTA) else {
            panic!("expected rewrite");
        };
        assert!(out.starts_with("Intro\n\n<CTA\n  text=\"Bereit, Französisch mit deinem Partner"));
        assert!(out.ends_with("buttonText=\"Jetzt Starten\"\n/>\n"));
    }

    #[test]
    fn test_romantic_without_block_is_unchanged() {
        let path = Path::new("articles/en/de/romantic.mdx");
        assert_eq!(
            RomanticCtaFix.apply(path, "no cta here"),
            Edit::Rewrite("no cta here".to_string())
        );
    }

    #[test]
    fn test_romantic_needs_location() {
        assert!(matches!(
            RomanticCtaFix.apply(Path::new("romantic.mdx"), OLD_CTA),
            Edit::Skip(_)
        ));
    }

    #[test]
    fn test_compliments_cta_button_names_target() {
        let cta = compliments_cta("en", "de");
        assert!(cta.contains("buttonText=\"Start Learning Deutsch\""));

        let cta = compliments_cta("de", "zz");
        assert!(cta.contains("buttonText=\"Jetzt Lernen ZZ\""));
    }

    #[test]
    fn test_compliments_cta_plain_button_for_other_natives() {
        let cta = compliments_cta("pl", "de");
        assert!(cta.contains("buttonText=\"Rozpocznij Naukę\""));
    }

    #[test]
    fn test_compliments_cta_unknown_native_uses_english() {
        let cta = compliments_cta("xx", "de");
        assert!(cta.contains("text=\"Ready to"));
        assert!(cta.contains("buttonText=\"Start Learning\""));
    }

    #[test]
    fn test_replacement_is_literal() {
        let out = replace_cta_blocks(OLD_CTA, &render_cta("Costs $5", "Buy"));
        assert!(out.contains("text=\"Costs $5\""));
    }

    #[test]
    fn test_empty_cta_targets_join_articles_dir() {
        let targets = empty_cta_targets(Path::new("blog/articles"));
        assert_eq!(targets.len(), 14);
        assert_eq!(
            targets[0],
            PathBuf::from("blog/articles/uk/pl/romantic-polish-phrases-for-couples.mdx")
        );
    }
}
