//! Server configuration from environment variables.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `HOST` | `0.0.0.0` |
//! | `PORT` | `3000` |
//! | `SETTINGS_FILE` | `settings.json` |
//! | `CLASSIFICATIONS_FILE` | `classifications.json` |
//! | `TRAINING_DIR` | `../data/training` |
//! | `STATIC_DIR` | `apps` |
//! | `MAX_BODY_BYTES` | `1048576` |
//! | `LOG_FORMAT` | `text` (`json` for structured output) |
//! | `LOG_FILE` | unset (stdout only) |
//! | `LOG_ANSI` | auto-detected |
//!
//! Unparsable numeric values fall back to their defaults with a warning.

use std::path::PathBuf;

use tasklabel_core::defaults;
use tasklabel_store::StorePaths;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Text => "text",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub format: LogFormat,
    pub file: Option<PathBuf>,
    /// `None` lets the formatter decide.
    pub ansi: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub paths: StorePaths,
    pub static_dir: PathBuf,
    pub max_body_bytes: usize,
    pub log: LogConfig,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let string_or = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let port = parse_or(&lookup, "PORT", defaults::PORT);
        let max_body_bytes = parse_or(&lookup, "MAX_BODY_BYTES", defaults::MAX_BODY_BYTES);

        let format = match lookup("LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Self {
            host: string_or("HOST", defaults::HOST),
            port,
            paths: StorePaths {
                settings_file: string_or("SETTINGS_FILE", defaults::SETTINGS_FILE).into(),
                classifications_file: string_or(
                    "CLASSIFICATIONS_FILE",
                    defaults::CLASSIFICATIONS_FILE,
                )
                .into(),
                training_dir: string_or("TRAINING_DIR", defaults::TRAINING_DIR).into(),
            },
            static_dir: string_or("STATIC_DIR", defaults::STATIC_DIR).into(),
            max_body_bytes,
            log: LogConfig {
                format,
                file: lookup("LOG_FILE")
                    .filter(|v| !v.trim().is_empty())
                    .map(PathBuf::from),
                ansi: lookup("LOG_ANSI").map(|v| v == "true" || v == "1"),
            },
        }
    }

    /// `host:port` string for binding.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + Copy + std::fmt::Display,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid {} '{}', using default {}", key, raw, default);
            default
        }),
    }
}
