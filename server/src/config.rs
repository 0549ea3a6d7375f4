//! Application configuration
//!
//! Central location for resource limits, validation boundaries, and the
//! runtime settings read from the environment at startup.

use std::path::PathBuf;

// ===== Store Limits =====

/// Maximum number of thoughts kept in the store.
/// Older entries are dropped from the front once this is exceeded.
pub const MAX_ITEMS: usize = 200;

/// Maximum accepted request body size in bytes
pub const MAX_BODY_BYTES: usize = 1_000_000;

// ===== Submission Limits =====

/// Maximum length of a display name in characters (longer names are truncated)
pub const MAX_NAME_CHARS: usize = 80;

/// Minimum length of a thought's text in characters
pub const MIN_TEXT_CHARS: usize = 10;

/// Maximum length of a thought's text in characters
pub const MAX_TEXT_CHARS: usize = 600;

/// Run of uppercase letters that counts as shouting
pub const SHOUTY_CAPS_RUN: usize = 10;

/// Run of one repeated character that counts as spam
pub const REPEATED_CHAR_RUN: usize = 8;

/// Terms rejected as promotional language (matched case-insensitively)
pub const PROMO_TERMS: &[&str] = &[
    "free money",
    "buy now",
    "click here",
    "visit my profile",
    "crypto pump",
    "casino",
    "loan",
    "viagra",
    "adult",
];

// ===== Server Defaults =====

/// Route serving the thought collection
pub const THOUGHTS_PATH: &str = "/api/thoughts";

pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_DATA_PATH: &str = "data/thoughts.json";

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "thoughtboard=debug,tower_http=info,info";

pub const PORT_ENV: &str = "THOUGHT_PORT";
pub const HOST_ENV: &str = "THOUGHT_HOST";
pub const DATA_PATH_ENV: &str = "THOUGHT_DATA_PATH";

/// Runtime settings for the HTTP server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// JSON file backing the thought store
    pub data_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
        }
    }
}

impl ServerConfig {
    /// Read settings from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup.
    ///
    /// Empty values count as unset. An unparseable port falls back to
    /// [`DEFAULT_PORT`] with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let port = match get(PORT_ENV) {
            Some(raw) => raw.parse::<u16>().unwrap_or_else(|e| {
                tracing::warn!(
                    "Ignoring invalid {}={:?} ({}), using {}",
                    PORT_ENV,
                    raw,
                    e,
                    DEFAULT_PORT
                );
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Self {
            host: get(HOST_ENV).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            data_path: get(DATA_PATH_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH)),
        }
    }

    /// Socket address string suitable for `TcpListener::bind`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
