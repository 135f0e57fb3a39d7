use anyhow::{Context, Result};

use crate::keywords::DEFAULT_SUGGESTION_LIMIT;

pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 15 * 1024 * 1024;
pub const DEFAULT_MIN_OCCURRENCES: usize = 1;

/// Runtime configuration loaded from environment variables.
/// Every variable is optional; an unset backend URL means local analysis only.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub backend_url: Option<String>,
    pub max_upload_bytes: u64,
    pub min_occurrences: usize,
    pub suggestion_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: None,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            min_occurrences: DEFAULT_MIN_OCCURRENCES,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. `from_env` passes the
    /// process environment; tests pass a fixed table.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend_url = lookup("ATS_BACKEND_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());

        let max_upload_bytes = parse_or(&lookup, "ATS_MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?;
        let min_occurrences =
            parse_or(&lookup, "ATS_MIN_OCCURRENCES", DEFAULT_MIN_OCCURRENCES)?.max(1);
        let suggestion_limit =
            parse_or(&lookup, "ATS_SUGGESTION_LIMIT", DEFAULT_SUGGESTION_LIMIT)?;

        Ok(Config {
            backend_url,
            max_upload_bytes,
            min_occurrences,
            suggestion_limit,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a non-negative integer, got '{raw}'")),
        None => Ok(default),
    }
}
