//! mdxmend Fix Library
//!
//! Maintenance jobs that patch article text in place.
//!
//! # Modules
//!
//! - [`collect`] - Article discovery and list files
//! - [`runner`] - The [`Fix`] trait and the per-file runner
//! - [`quotes`] - Attribute quote normalizers
//! - [`cta`] - Call-to-action fixers
//! - [`seo`] - Compliments titles and descriptions
//! - [`phrases`] - Per-language templates and phrases

pub mod collect;
pub mod cta;
pub mod error;
pub mod phrases;
pub mod quotes;
pub mod runner;
pub mod seo;

pub use collect::{find_articles, find_in_language_dirs, read_list};
pub use cta::{EmptyCtaFix, RomanticCtaFix, empty_cta_targets};
pub use error::{FixError, Result};
pub use quotes::{QuoteFix, QuoteStrategy};
pub use runner::{Edit, Fix, Outcome, Report, Runner};
pub use seo::{DescriptionFix, SeoFix, TitleFix};
