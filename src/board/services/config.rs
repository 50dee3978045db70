//! Drag engine configuration.
//!
//! # Examples
//!
//! ```
//! use kanboard::board::services::DragConfig;
//!
//! let config = DragConfig::from_toml_str(
//!     r#"
//!     live_same_column_reorder = true
//!
//!     [commit]
//!     max_retries = 2
//!     "#,
//! )
//! .expect("valid configuration");
//! assert!(config.live_same_column_reorder);
//! assert_eq!(config.commit.attempts(), 3);
//! assert_eq!(config.commit.timeout_ms, 5_000);
//! ```

use crate::board::domain::SessionOptions;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Retry and timeout policy for persisting committed moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitPolicy {
    /// Automatic retries after the first failed attempt.
    pub max_retries: u32,
    /// Per-attempt timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for CommitPolicy {
    fn default() -> Self {
        Self {
            max_retries: 1,
            timeout_ms: 5_000,
        }
    }
}

impl CommitPolicy {
    /// Returns the total number of attempts, first try included.
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Returns the per-attempt timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Configuration for the drag engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    /// Reorder within a column while hovering rather than on release.
    pub live_same_column_reorder: bool,
    /// Persistence policy.
    pub commit: CommitPolicy,
}

impl DragConfig {
    /// Parses configuration from TOML. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the document is not valid TOML or
    /// a value has the wrong type.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Returns the reducer options derived from this configuration.
    #[must_use]
    pub const fn session_options(&self) -> SessionOptions {
        SessionOptions {
            live_same_column_reorder: self.live_same_column_reorder,
        }
    }
}

/// Errors returned while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML document could not be parsed.
    #[error("invalid drag configuration: {0}")]
    Parse(#[from] toml::de::Error),
}
