//! Attribute quote normalizers.
//!
//! Component attributes in article bodies are written by hand and by
//! generators, and end up with every combination of broken quoting. Each
//! strategy here fixes one shape of breakage, line by line.

use std::{path::Path, sync::LazyLock};

use regex::Regex;

use crate::runner::{Edit, Fix};

static SINGLE_OPENER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+)='").expect("valid regex"));
static DOUBLE_OPENER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^(\w+)=""#).expect("valid regex"));
static NEXT_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\w+=").expect("valid regex"));
static SPACED_NEXT_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s+\w+=").expect("valid regex"));
static COMPONENT_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[A-Z]").expect("valid regex"));
static MISMATCHED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"'(\w+)""#).expect("valid regex"));

/// Which quote repair to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteStrategy {
    /// Every single-quoted attribute becomes double-quoted.
    #[default]
    Normalize,
    /// Only single-quoted attributes containing an apostrophe.
    Apostrophes,
    /// Stray double quotes inside double-quoted values become `'`.
    Repair,
    /// `'word"` becomes `'word'`.
    Mismatched,
}

impl QuoteStrategy {
    /// Run this strategy over a whole document.
    pub fn apply(self, content: &str) -> String {
        match self {
            Self::Normalize => per_line(content, normalize_single_quotes),
            Self::Apostrophes => per_line(content, convert_apostrophe_attributes),
            Self::Repair => per_line(content, repair_broken_attributes),
            Self::Mismatched => close_mismatched_quotes(content),
        }
    }

    /// Short name for logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::Normalize => "quotes-normalize",
            Self::Apostrophes => "quotes-apostrophes",
            Self::Repair => "quotes-repair",
            Self::Mismatched => "quotes-mismatched",
        }
    }
}

/// Applies a [`QuoteStrategy`] to every file.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuoteFix {
    strategy: QuoteStrategy,
}

impl QuoteFix {
    pub fn new(strategy: QuoteStrategy) -> Self {
        Self { strategy }
    }
}

impl Fix for QuoteFix {
    fn name(&self) -> &'static str {
        self.strategy.name()
    }

    fn apply(&self, _path: &Path, content: &str) -> Edit {
        Edit::Rewrite(self.strategy.apply(content))
    }
}

fn per_line(content: &str, fix: fn(&str) -> String) -> String {
    content.split('\n').map(fix).collect::<Vec<_>>().join("\n")
}

/// Rewrite `name='value'` as `name="value"`, escaping inner double quotes.
///
/// The value closes at the first `'` followed by end of line, whitespace,
/// `/` or `>`. Attributes with no such quote are left as they are.
pub fn normalize_single_quotes(line: &str) -> String {
    if !line.contains('=') || !line.contains('\'') {
        return line.to_string();
    }

    rewrite_attributes(line, &SINGLE_OPENER, |name, rest| {
        let end = rest
            .match_indices('\'')
            .map(|(j, _)| j)
            .find(|&j| closes_value(&rest[j + 1..]))?;
        Some((double_quoted(name, &rest[..end]), end + 1))
    })
}

/// Like [`normalize_single_quotes`], but only for values containing `'`.
///
/// A quote followed by another `word=` also closes the value, so
/// attributes written without separating whitespace are still found.
pub fn convert_apostrophe_attributes(line: &str) -> String {
    if !line.contains('=') || !line.contains('\'') {
        return line.to_string();
    }

    rewrite_attributes(line, &SINGLE_OPENER, |name, rest| {
        let end = rest.match_indices('\'').map(|(j, _)| j).find(|&j| {
            let after = &rest[j + 1..];
            closes_value(after) || NEXT_ATTR.is_match(char_window(after, 19))
        })?;
        let value = &rest[..end];
        let text = if value.contains('\'') {
            double_quoted(name, value)
        } else {
            format!("{name}='{value}'")
        };
        Some((text, end + 1))
    })
}

/// Fix double-quoted values on component lines that contain stray `"`.
///
/// The value closes at the first `"` followed by end of line, whitespace,
/// `/>`, `>` or another attribute. Earlier double quotes inside the value
/// become single quotes.
pub fn repair_broken_attributes(line: &str) -> String {
    if !COMPONENT_TAG.is_match(line) {
        return line.to_string();
    }

    rewrite_attributes(line, &DOUBLE_OPENER, |name, rest| {
        let end = rest.match_indices('"').map(|(j, _)| j).find(|&j| {
            let after = &rest[j + 1..];
            after.chars().next().is_none_or(char::is_whitespace)
                || after.starts_with("/>")
                || after.starts_with('>')
                || SPACED_NEXT_ATTR.is_match(char_window(after, 29))
        })?;
        let value = rest[..end].replace('"', "'");
        Some((format!("{name}=\"{value}\""), end + 1))
    })
}

/// Close `'word"` with a single quote.
pub fn close_mismatched_quotes(content: &str) -> String {
    MISMATCHED.replace_all(content, "'${1}'").into_owned()
}

/// Scan `line` for attribute openers, letting `rewrite` replace each one.
///
/// `rewrite` receives the attribute name and the text after the opening
/// quote, and returns the replacement plus how many bytes of that text it
/// consumed. When it declines, the scan copies one character and moves on.
fn rewrite_attributes(
    line: &str,
    opener: &Regex,
    mut rewrite: impl FnMut(&str, &str) -> Option<(String, usize)>,
) -> String {
    let mut out = String::with_capacity(line.len());
    let mut i = 0;

    while i < line.len() {
        let tail = &line[i..];
        if let Some(caps) = opener.captures(tail) {
            let opened = caps.get(0).map_or(0, |m| m.end());
            let name = caps.get(1).map_or("", |m| m.as_str());
            if let Some((text, used)) = rewrite(name, &tail[opened..]) {
                out.push_str(&text);
                i += opened + used;
                continue;
            }
        }

        let Some(ch) = tail.chars().next() else {
            break;
        };
        out.push(ch);
        i += ch.len_utf8();
    }

    out
}

fn closes_value(after: &str) -> bool {
    after
        .chars()
        .next()
        .is_none_or(|c| c.is_whitespace() || c == '/' || c == '>')
}

fn double_quoted(name: &str, value: &str) -> String {
    format!("{name}=\"{}\"", value.replace('"', "\\\""))
}

/// The first `chars` characters of `s`.
fn char_window(s: &str, chars: usize) -> &str {
    s.char_indices().nth(chars).map_or(s, |(idx, _)| &s[..idx])
}
