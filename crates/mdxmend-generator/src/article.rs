//! Generated article records.

use chrono::NaiveDate;
use mdxmend_core::{ArticleLocation, ArticleMeta, Result};
use serde::{Deserialize, Serialize};

use crate::{
    tables::{TARGETS, TargetLanguage},
    topic::Topic,
};

/// Reader language of every generated article.
pub const NATIVE_LANGUAGE: &str = "el";

/// One generated article, as written to the JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedArticle {
    pub slug: String,
    pub native_lang: String,
    pub target_lang: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub difficulty: String,
    pub read_time: u32,
    pub image: String,
    pub tags: Vec<String>,
    pub content: String,
    pub published: bool,
    /// ISO date (`YYYY-MM-DD`).
    pub date: String,
}

impl GeneratedArticle {
    /// Build the article for one language and topic.
    pub fn new(lang: &TargetLanguage, topic: Topic, date: NaiveDate) -> Self {
        Self {
            slug: topic.slug(lang),
            native_lang: NATIVE_LANGUAGE.to_string(),
            target_lang: lang.code.to_string(),
            title: topic.title(lang),
            description: topic.description(lang),
            category: "vocabulary".to_string(),
            difficulty: "beginner".to_string(),
            read_time: topic.read_time(),
            image: format!("/images/blog/{}-vocabulary.jpg", lang.code),
            tags: topic.tags(lang),
            content: topic.content(lang),
            published: true,
            date: date.format("%Y-%m-%d").to_string(),
        }
    }

    /// Where the article lives under an articles directory.
    pub fn location(&self) -> ArticleLocation {
        ArticleLocation {
            native: self.native_lang.clone(),
            target: self.target_lang.clone(),
            slug: self.slug.clone(),
        }
    }

    /// Frontmatter fields for the MDX file.
    pub fn meta(&self) -> ArticleMeta {
        ArticleMeta {
            title: Some(self.title.clone()),
            description: Some(self.description.clone()),
            category: Some(self.category.clone()),
            difficulty: Some(self.difficulty.clone()),
            read_time: Some(self.read_time),
            date: Some(self.date.clone()),
            image: Some(self.image.clone()),
            tags: self.tags.clone(),
            native_language: Some(self.native_lang.clone()),
            language: Some(self.target_lang.clone()),
            ..Default::default()
        }
    }

    /// Full MDX document: frontmatter, blank line, body.
    pub fn to_mdx(&self) -> Result<String> {
        Ok(format!("{}\n{}", self.meta().to_frontmatter()?, self.content))
    }
}

/// Every article for every target language, five topics each, in table order.
pub fn generate_all(date: NaiveDate) -> Vec<GeneratedArticle> {
    TARGETS
        .iter()
        .flat_map(|lang| {
            Topic::ALL
                .into_iter()
                .map(move |topic| GeneratedArticle::new(lang, topic, date))
        })
        .collect()
}
