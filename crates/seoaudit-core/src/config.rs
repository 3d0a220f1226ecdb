//! Analyzer configuration.
//!
//! Every field has a default, so an empty TOML file (or no file at all)
//! yields the stock thresholds.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::{AuditError, AuditResult};

/// Tokens with this many characters or fewer are left out of the ranking.
pub const SHORT_TOKEN_MAX_CHARS: usize = 3;

/// Number of keywords returned by a density analysis.
pub const MAX_KEYWORDS: usize = 20;

/// Default upstream fetch timeout, in seconds.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "SEOAUDIT_CONFIG";

/// Tunables for fetching and ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub short_token_max_chars: usize,
    pub max_keywords: usize,
    pub fetch_timeout_secs: u64,
    pub user_agent: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            short_token_max_chars: SHORT_TOKEN_MAX_CHARS,
            max_keywords: MAX_KEYWORDS,
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            user_agent: default_user_agent(),
        }
    }
}

impl AnalyzerConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str) -> AuditResult<Self> {
        let config: Self = toml::from_str(text).map_err(|e| AuditError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk.
    pub fn load(path: &Path) -> AuditResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            AuditError::config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&text)
    }

    /// Load from `path` when given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> AuditResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> AuditResult<()> {
        if self.max_keywords == 0 {
            return Err(AuditError::config("max_keywords must be at least 1"));
        }
        if self.fetch_timeout_secs == 0 {
            return Err(AuditError::config("fetch_timeout_secs must be at least 1"));
        }
        Ok(())
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

fn default_user_agent() -> String {
    format!("seoaudit/{}", env!("CARGO_PKG_VERSION"))
}
