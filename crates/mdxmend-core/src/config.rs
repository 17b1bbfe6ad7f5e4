//! Tool configuration management.
//!
//! Every setting has a default matching the blog repository layout, so a
//! missing configuration file is not an error.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Main configuration structure for mdxmend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// File and directory locations.
    #[serde(default)]
    pub paths: PathsConfig,

    /// SEO length limits.
    #[serde(default)]
    pub seo: SeoConfig,
}

/// File and directory locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Root of the article tree (`<native>/<target>/<slug>.mdx`).
    #[serde(default = "default_articles_dir")]
    pub articles_dir: PathBuf,

    /// Scratch file listing compliments articles, one path per line.
    #[serde(default = "default_compliments_list")]
    pub compliments_list: PathBuf,

    /// Output file for generated article records.
    #[serde(default = "default_generated_output")]
    pub generated_output: PathBuf,
}

/// SEO length limits, counted in characters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeoConfig {
    /// Longest acceptable title.
    #[serde(default = "default_max_title_chars")]
    pub max_title_chars: usize,

    /// Longest acceptable meta description.
    #[serde(default = "default_max_description_chars")]
    pub max_description_chars: usize,
}

// Default value functions
fn default_articles_dir() -> PathBuf {
    PathBuf::from("src/content/articles")
}

fn default_compliments_list() -> PathBuf {
    PathBuf::from("/tmp/compliments_files.txt")
}

fn default_generated_output() -> PathBuf {
    PathBuf::from("generated/el_articles.json")
}

fn default_max_title_chars() -> usize {
    60
}

fn default_max_description_chars() -> usize {
    155
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            articles_dir: default_articles_dir(),
            compliments_list: default_compliments_list(),
            generated_output: default_generated_output(),
        }
    }
}

impl Default for SeoConfig {
    fn default() -> Self {
        Self {
            max_title_chars: default_max_title_chars(),
            max_description_chars: default_max_description_chars(),
        }
    }
}

impl Config {
    /// Load configuration from an optional TOML file layered with
    /// `MDXMEND__SECTION__KEY` environment variables.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        Self::load_layered(path, None)
    }

    /// Like [`Config::load_with_env`], reading variables from `env` instead
    /// of the process environment when given.
    fn load_layered(path: &Path, env: Option<config::Map<String, String>>) -> Result<Self> {
        if path.exists() {
            tracing::debug!(path = %path.display(), "loading configuration file");
        } else {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
        }

        let settings = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .add_source(
                config::Environment::with_prefix("MDXMEND")
                    .separator("__")
                    .source(env),
            )
            .build()?;

        let config: Config = settings.try_deserialize().map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.paths.articles_dir.as_os_str().is_empty() {
            return Err(CoreError::config("paths.articles_dir cannot be empty"));
        }

        if self.paths.compliments_list.as_os_str().is_empty() {
            return Err(CoreError::config("paths.compliments_list cannot be empty"));
        }

        if self.paths.generated_output.as_os_str().is_empty() {
            return Err(CoreError::config("paths.generated_output cannot be empty"));
        }

        if self.seo.max_title_chars == 0 || self.seo.max_description_chars == 0 {
            return Err(CoreError::config("seo limits must be greater than zero"));
        }

        Ok(())
    }
}
