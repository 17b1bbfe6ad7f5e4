//! mdxmend Generator Library
//!
//! Templated article generation for Greek readers.
//!
//! # Modules
//!
//! - [`tables`] - Target languages and phrase lists
//! - [`topic`] - The five article topics and their templates
//! - [`article`] - Generated article records
//! - [`emit`] - JSON and MDX output

pub mod article;
pub mod emit;
pub mod error;
pub mod tables;
pub mod topic;

pub use article::{GeneratedArticle, NATIVE_LANGUAGE, generate_all};
pub use emit::{EmitReport, OutputFormat, write_json, write_mdx};
pub use error::{GeneratorError, Result};
pub use tables::{TARGETS, TargetLanguage, Term};
pub use topic::Topic;
