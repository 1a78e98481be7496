/// Engine configuration: reserved redirect words and playback policies.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// What happens to the conversation stack when a redirect names a
/// conversation that no store defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MissingRedirect {
    /// Clear the stack, so an idle engine never holds stale frames.
    #[default]
    ClearStack,
    /// Go idle but leave the stack untouched. The next
    /// `start_conversation` clears it anyway.
    KeepStack,
}

/// Tunables for a `DialogEngine`. Every field has a default, so a RON file
/// only needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Redirect word that returns to the calling conversation.
    pub return_keyword: String,
    /// Redirect word that ends playback entirely.
    pub exit_keyword: String,
    pub missing_redirect: MissingRedirect,
    /// Most entries dispatched by a single `execute` call before it yields.
    pub max_dispatch_steps: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            return_keyword: "RETURN".to_string(),
            exit_keyword: "EXIT".to_string(),
            missing_redirect: MissingRedirect::ClearStack,
            max_dispatch_steps: 10_000,
        }
    }
}

impl EngineConfig {
    pub fn parse_ron(input: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that would stall playback.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_dispatch_steps < 1 {
            return Err(ConfigError::Invalid(
                "max_dispatch_steps must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn load_from_ron(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }
}
