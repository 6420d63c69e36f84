//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

use crate::constants::{input, remix};
use crate::error::{Error, Result};
use crate::validation::LengthLimits;

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Accepted lyric length bounds
    pub limits: LengthLimits,
    /// How many remix variants to generate per request
    pub remix_count: usize,
    /// Fixed RNG seed for reproducible remixes
    pub remix_seed: Option<u64>,
    /// Directory downloads are written to
    pub output_dir: PathBuf,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            limits: LengthLimits::new(input::DEFAULT_MIN_CHARS, input::DEFAULT_MAX_CHARS),
            remix_count: remix::DEFAULT_VARIANT_COUNT,
            remix_seed: None,
            output_dir: default_output_dir(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// Unset variables keep their defaults; malformed ones are an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(min) = lookup("LYRICSMITH_MIN_CHARS") {
            config.limits.min_chars = parse_number("LYRICSMITH_MIN_CHARS", &min)?;
        }

        if let Some(max) = lookup("LYRICSMITH_MAX_CHARS") {
            config.limits.max_chars = parse_number("LYRICSMITH_MAX_CHARS", &max)?;
        }

        if config.limits.min_chars > config.limits.max_chars {
            return Err(Error::config(
                format!(
                    "minimum length {} exceeds maximum length {}",
                    config.limits.min_chars, config.limits.max_chars
                ),
                "Set LYRICSMITH_MIN_CHARS below LYRICSMITH_MAX_CHARS",
            ));
        }

        if let Some(count) = lookup("LYRICSMITH_REMIX_COUNT") {
            let count: usize = parse_number("LYRICSMITH_REMIX_COUNT", &count)?;
            if count > remix::MAX_VARIANT_COUNT {
                tracing::warn!(
                    "LYRICSMITH_REMIX_COUNT={count} capped at {}",
                    remix::MAX_VARIANT_COUNT
                );
            }
            config.remix_count = count.min(remix::MAX_VARIANT_COUNT);
        }

        if let Some(seed) = lookup("LYRICSMITH_REMIX_SEED") {
            config.remix_seed = Some(parse_number("LYRICSMITH_REMIX_SEED", &seed)?);
        }

        // Output directory: env var override, or the platform downloads folder
        if let Some(dir) = lookup("LYRICSMITH_OUTPUT_DIR") {
            config.output_dir = PathBuf::from(shellexpand::tilde(&dir).to_string());
        }

        Ok(config)
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value.trim().parse::<T>().map_err(|_| {
        Error::config(
            format!("{key} must be a non-negative whole number, got {value:?}"),
            "Fix or remove the value in your environment or .env file",
        )
    })
}

/// Downloads folder when the platform has one, otherwise the working directory.
fn default_output_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}
