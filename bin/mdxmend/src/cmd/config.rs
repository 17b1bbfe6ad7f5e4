//! Config command - show the effective configuration

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use mdxmend_core::Config;

/// Print the effective configuration as TOML.
pub fn run(config_path: &Path, config: &Config) -> Result<()> {
    println!("Config file: {}", config_path.display());
    let exists = if config_path.exists() {
        "yes"
    } else {
        "no (using defaults)"
    };
    println!("File exists: {exists}");
    println!();

    let toml = config.to_toml().wrap_err("Failed to render configuration")?;
    print!("{toml}");

    println!();
    println!("Priority: CLI args > ENV vars (MDXMEND__*) > Config file > Defaults");

    Ok(())
}
