//! mdxmend Core Library
//!
//! Core types, configuration, and error handling shared by the mdxmend
//! maintenance jobs: frontmatter splitting and editing, article locations,
//! and the per-language name tables.

pub mod article;
pub mod config;
pub mod error;
pub mod frontmatter;
pub mod lang;

pub use article::{ArticleLocation, is_mdx, target_language};
pub use config::Config;
pub use error::{CoreError, Result};
pub use frontmatter::{ArticleMeta, Document, Fields};
