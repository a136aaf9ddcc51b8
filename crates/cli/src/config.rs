//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional. Command-line flags take precedence.
//!
//! - `OM_LOG_FORMAT` - `text` or `json` (default: text)
//! - `OM_BENCH_ITERATIONS` - Measured bench iterations (default: 10000)
//! - `OM_BENCH_WARMUP` - Warmup bench iterations (default: 1000)
//! - `OM_BENCH_WORKERS` - Blocking worker tasks for `bench` (default: 1)
//!
//! Log filtering uses the standard `RUST_LOG` variable.

use std::str::FromStr;

use thiserror::Error;

const DEFAULT_BENCH_ITERATIONS: u64 = 10_000;
const DEFAULT_BENCH_WARMUP: u64 = 1_000;
const DEFAULT_BENCH_WORKERS: usize = 1;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// One JSON object per event, for log shipping.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("expected `text` or `json`, got `{s}`")),
        }
    }
}

/// Defaults for the `bench` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchDefaults {
    pub iterations: u64,
    pub warmup: u64,
    pub workers: usize,
}

/// CLI configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CliConfig {
    pub log_format: LogFormat,
    pub bench: BenchDefaults,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let log_format = parse_or_default(&lookup, "OM_LOG_FORMAT", LogFormat::Text)?;
        let iterations =
            parse_or_default(&lookup, "OM_BENCH_ITERATIONS", DEFAULT_BENCH_ITERATIONS)?;
        let warmup = parse_or_default(&lookup, "OM_BENCH_WARMUP", DEFAULT_BENCH_WARMUP)?;
        let workers = parse_or_default(&lookup, "OM_BENCH_WORKERS", DEFAULT_BENCH_WORKERS)?;

        Ok(Self {
            log_format,
            bench: BenchDefaults {
                iterations,
                warmup,
                workers,
            },
        })
    }
}

/// Parse an optional variable, falling back to `default` when unset.
fn parse_or_default<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key).map_or(Ok(default), |raw| {
        raw.trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
    })
}
