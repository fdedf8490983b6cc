use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const DEFAULT_LOG_DIR: &str = "logs";

#[derive(Debug, Clone)]
pub struct Config {
    pub backend: BackendConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL; `/search/` and `/` are resolved against it
    pub url: String,
    /// Per-request timeout. `None` waits forever.
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendConfig {
                url: DEFAULT_BACKEND_URL.to_string(),
                timeout: None,
            },
            logging: LoggingConfig {
                dir: PathBuf::from(DEFAULT_LOG_DIR),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            backend: BackendConfig {
                url: env::var("SEARCH_BACKEND_URL")
                    .unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string()),
                timeout: parse_timeout(env::var("SEARCH_TIMEOUT_SECS").ok().as_deref())?,
            },
            logging: LoggingConfig {
                dir: env::var("KGSEARCH_LOG_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from(DEFAULT_LOG_DIR)),
            },
        })
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_overrides(mut self, backend_url: Option<String>, timeout_secs: Option<u64>) -> Self {
        if let Some(url) = backend_url {
            self.backend.url = url;
        }
        if let Some(secs) = timeout_secs {
            self.backend.timeout = timeout_from_secs(secs);
        }
        self
    }
}

fn parse_timeout(raw: Option<&str>) -> Result<Option<Duration>> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => {
            let secs: u64 = s
                .parse()
                .with_context(|| format!("SEARCH_TIMEOUT_SECS must be a whole number of seconds, got {s:?}"))?;
            Ok(timeout_from_secs(secs))
        }
    }
}

// 0 means no timeout
fn timeout_from_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}
