//! mdxmend CLI Library
//!
//! Command implementations for the `mdxmend` binary. Each subcommand lives
//! in its own module under [`cmd`] and takes the loaded [`Config`].
//!
//! # Example
//!
//! ```no_run
//! use mdxmend::{Config, cmd};
//!
//! let config = Config::default();
//! cmd::quotes::run(&config, cmd::quotes::Strategy::Normalize, true).unwrap();
//! ```

pub mod cmd;

pub use mdxmend_core::Config;
pub use mdxmend_fix::{Report, Runner};

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
