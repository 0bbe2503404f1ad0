//! Application configuration
//!
//! Collects everything the provider needs — API token, cache directory, TTL,
//! request timeout — into an explicit `Config` value built once at startup.
//! The token is resolved from the `API_KEY` environment variable, falling
//! back to a `.env` file in the working directory.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration as StdDuration;

use chrono::Duration;
use directories::ProjectDirs;
use thiserror::Error;

/// Environment variable holding the football-data.org API token
const TOKEN_ENV_VAR: &str = "API_KEY";

/// Maximum age of a cached snapshot before it is refetched
const CACHE_TTL_MINUTES: i64 = 90;

/// Timeout applied to the standings HTTP request
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Errors that can occur while building the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No API token in the environment or a .env file
    #[error("API_KEY not set. Export it or add it to a .env file")]
    MissingToken,

    /// The cache directory could not be determined
    #[error("Could not determine a cache directory for this platform")]
    NoCacheDir,
}

/// Configuration for a single run
#[derive(Debug, Clone)]
pub struct Config {
    /// football-data.org API token, sent as the X-Auth-Token header
    pub api_token: String,
    /// Directory where cached standings files are stored
    pub cache_dir: PathBuf,
    /// Maximum age of a cached snapshot before it is considered stale
    pub ttl: Duration,
    /// Timeout for the standings HTTP request
    pub request_timeout: StdDuration,
}

impl Config {
    /// Builds the configuration from the process environment
    ///
    /// The API token is read from `API_KEY`, falling back to a `.env` file
    /// in the current directory. The cache directory is the XDG-compliant
    /// cache path for this application (`~/.cache/tabela/` on Linux).
    ///
    /// # Returns
    /// * `Ok(Config)` when a token and cache directory are available
    /// * `Err(ConfigError)` when either is missing
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_token = resolve_token(Path::new(".env")).ok_or(ConfigError::MissingToken)?;

        let project_dirs = ProjectDirs::from("", "", "tabela").ok_or(ConfigError::NoCacheDir)?;
        let cache_dir = project_dirs.cache_dir().to_path_buf();

        Ok(Self {
            api_token,
            cache_dir,
            ttl: Duration::minutes(CACHE_TTL_MINUTES),
            request_timeout: StdDuration::from_secs(REQUEST_TIMEOUT_SECS),
        })
    }

    /// Builds a configuration with explicit values
    ///
    /// Useful for testing without mutating the process environment.
    pub fn with_values(api_token: impl Into<String>, cache_dir: PathBuf) -> Self {
        Self {
            api_token: api_token.into(),
            cache_dir,
            ttl: Duration::minutes(CACHE_TTL_MINUTES),
            request_timeout: StdDuration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

/// Resolves the API token from the environment, then from a .env file
fn resolve_token(dotenv_path: &Path) -> Option<String> {
    if let Ok(token) = env::var(TOKEN_ENV_VAR) {
        if !token.trim().is_empty() {
            return Some(token);
        }
    }

    read_dotenv_var(dotenv_path, TOKEN_ENV_VAR)
}

/// Reads one variable from a KEY=VALUE style .env file
///
/// Lines starting with `#` are comments. Values may be wrapped in single or
/// double quotes. Returns `None` if the file is missing or the key is absent.
fn read_dotenv_var(path: &Path, key: &str) -> Option<String> {
    let content = fs::read_to_string(path).ok()?;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (name, value) = line.split_once('=')?;
        if name.trim() != key {
            continue;
        }

        let value = value.trim().trim_matches('"').trim_matches('\'');
        if value.is_empty() {
            return None;
        }
        return Some(value.to_string());
    }

    None
}
