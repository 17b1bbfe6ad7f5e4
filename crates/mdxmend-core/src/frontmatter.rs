//! Frontmatter splitting, tolerant field parsing, and in-place field edits.
//!
//! Editing never round-trips through a YAML serializer: a document is split
//! into its raw frontmatter text and body, edited as text, and re-joined, so
//! untouched bytes stay exactly as they were.

use std::{
    borrow::Cow,
    collections::{BTreeMap, HashMap},
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

const OPENING: &str = "---\n";
const CLOSING: &str = "\n---\n";
const OPENING_CRLF: &str = "---\r\n";
const CLOSING_CRLF: &str = "\r\n---\r\n";

/// Split content into raw frontmatter and body.
///
/// The file must start with `---\n`; the first later `\n---\n` closes the
/// block. A file opening with `---\r\n` closes at `\r\n---\r\n` instead.
/// Returns `None` when either delimiter is missing.
pub fn split_frontmatter(content: &str) -> Option<(&str, &str)> {
    let (after_open, closing) = match content.strip_prefix(OPENING) {
        Some(rest) => (rest, CLOSING),
        None => (content.strip_prefix(OPENING_CRLF)?, CLOSING_CRLF),
    };
    let closing_pos = after_open.find(closing)?;
    let frontmatter = &after_open[..closing_pos];
    let body = &after_open[closing_pos + closing.len()..];
    Some((frontmatter, body))
}

/// An MDX document split into frontmatter text and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    frontmatter: String,
    body: String,
}

impl Document {
    /// Split `content` into a document, or `None` without a frontmatter block.
    ///
    /// CRLF line endings are read as LF, and [`Document::render`] writes LF.
    pub fn parse(content: &str) -> Option<Self> {
        let content = if content.contains('\r') {
            Cow::Owned(content.replace("\r\n", "\n"))
        } else {
            Cow::Borrowed(content)
        };
        let (frontmatter, body) = split_frontmatter(&content)?;
        Some(Self {
            frontmatter: frontmatter.to_string(),
            body: body.to_string(),
        })
    }

    /// Raw frontmatter text, without delimiters.
    pub fn frontmatter(&self) -> &str {
        &self.frontmatter
    }

    /// Body text following the closing delimiter.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Replace the raw frontmatter text.
    pub fn set_frontmatter(&mut self, frontmatter: impl Into<String>) {
        self.frontmatter = frontmatter.into();
    }

    /// Replace the body text.
    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }

    /// Tolerant key/value view of the frontmatter.
    pub fn fields(&self) -> Fields {
        Fields::parse(&self.frontmatter)
    }

    /// Rewrite the first `key:` line with a new value.
    ///
    /// A single-quoted value stays single-quoted; anything else becomes
    /// double-quoted. The value is escaped for the chosen quote style.
    /// Returns `false` when the key is absent.
    pub fn replace_field(&mut self, key: &str, value: &str) -> bool {
        let prefix = format!("{key}:");
        let mut replaced = false;

        let lines: Vec<String> = self
            .frontmatter
            .split('\n')
            .map(|line| {
                if replaced || !line.starts_with(&prefix) {
                    return line.to_string();
                }
                replaced = true;
                let old = line[prefix.len()..].trim();
                if old.starts_with('\'') {
                    format!("{key}: '{}'", value.replace('\'', "''"))
                } else {
                    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
                    format!("{key}: \"{escaped}\"")
                }
            })
            .collect();

        if replaced {
            self.frontmatter = lines.join("\n");
        }
        replaced
    }

    /// Strict YAML view of the frontmatter.
    pub fn meta(&self, path: &Path) -> Result<ArticleMeta> {
        serde_yaml::from_str(&self.frontmatter)
            .map_err(|e| CoreError::frontmatter(path, e.to_string()))
    }

    /// Join frontmatter and body back into file content.
    pub fn render(&self) -> String {
        format!("{OPENING}{}{CLOSING}{}", self.frontmatter, self.body)
    }
}

/// Frontmatter fields parsed line by line.
///
/// Every line containing `:` is split at the first colon; values lose
/// surrounding whitespace and any leading or trailing quote characters.
/// Malformed YAML never fails this parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields {
    values: BTreeMap<String, String>,
}

impl Fields {
    /// Parse raw frontmatter text.
    pub fn parse(frontmatter: &str) -> Self {
        let mut values = BTreeMap::new();
        for line in frontmatter.split('\n') {
            if let Some((key, value)) = line.split_once(':') {
                let value = value.trim().trim_matches(|c| c == '"' || c == '\'');
                values.insert(key.trim().to_string(), value.to_string());
            }
        }
        Self { values }
    }

    /// Look up a field value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// The reader's language: `nativeLanguage`, then `language`, then `en`.
    pub fn native_language(&self) -> &str {
        self.get("nativeLanguage")
            .or_else(|| self.get("language"))
            .unwrap_or("en")
    }
}

/// Article frontmatter as the blog reads it.
///
/// Field order is the order frontmatter is written in generated articles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleMeta {
    /// Page title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Meta description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Content category (e.g. `vocabulary`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Reader level (e.g. `beginner`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,

    /// Estimated reading time in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_time: Option<u32>,

    /// Publication date (`YYYY-MM-DD`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Hero image path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Tags for the page.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Reader's language code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub native_language: Option<String>,

    /// Language being learned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Any other fields.
    #[serde(default, flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl ArticleMeta {
    /// Render as a frontmatter block, delimiters included.
    pub fn to_frontmatter(&self) -> Result<String> {
        let yaml = serde_yaml::to_string(self)?;
        Ok(format!("{OPENING}{yaml}---\n"))
    }
}
