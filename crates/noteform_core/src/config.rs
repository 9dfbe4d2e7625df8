//! Form behavior configuration.
//!
//! # Responsibility
//! - Hold the tunable constants of the editing surface.
//! - Validate host-provided overrides before a view is activated.
//!
//! # Invariants
//! - `FormConfig::default()` always validates.
//! - Missing fields in deserialized input fall back to defaults.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Scroll offset at which the toolbar starts following the viewport.
pub const DEFAULT_STICKY_THRESHOLD: i64 = 260;
/// Pixels subtracted from the scroll offset while the toolbar is stuck.
pub const DEFAULT_STICKY_ADJUST: i64 = 2;
/// Title substituted when the title field is blank.
pub const DEFAULT_UNTITLED_TITLE: &str = "Unnamed";
/// Container the preview is rendered into.
pub const DEFAULT_PREVIEW_TARGET: &str = "wmd-preview";

/// Tunables for one note form view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub sticky_threshold: i64,
    pub sticky_adjust: i64,
    pub untitled_title: String,
    pub preview_target: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            sticky_threshold: DEFAULT_STICKY_THRESHOLD,
            sticky_adjust: DEFAULT_STICKY_ADJUST,
            untitled_title: DEFAULT_UNTITLED_TITLE.to_string(),
            preview_target: DEFAULT_PREVIEW_TARGET.to_string(),
        }
    }
}

impl FormConfig {
    /// Checks invariants that the controllers rely on.
    ///
    /// # Errors
    /// - Returns an error when thresholds are negative.
    /// - Returns an error when the untitled sentinel or preview target is blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sticky_threshold < 0 {
            return Err(ConfigError::NegativeValue {
                field: "sticky_threshold",
                value: self.sticky_threshold,
            });
        }
        if self.sticky_adjust < 0 {
            return Err(ConfigError::NegativeValue {
                field: "sticky_adjust",
                value: self.sticky_adjust,
            });
        }
        if self.untitled_title.trim().is_empty() {
            return Err(ConfigError::BlankValue("untitled_title"));
        }
        if self.preview_target.trim().is_empty() {
            return Err(ConfigError::BlankValue("preview_target"));
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    NegativeValue { field: &'static str, value: i64 },
    BlankValue(&'static str),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeValue { field, value } => {
                write!(f, "config field `{field}` must not be negative, got {value}")
            }
            Self::BlankValue(field) => write!(f, "config field `{field}` must not be blank"),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::{ConfigError, FormConfig};

    #[test]
    fn default_config_is_valid() {
        let config = FormConfig::default();
        assert_eq!(config.sticky_threshold, 260);
        assert_eq!(config.untitled_title, "Unnamed");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn blank_sentinel_is_rejected() {
        let config = FormConfig {
            untitled_title: "  ".to_string(),
            ..FormConfig::default()
        };
        assert_eq!(
            config.validate().unwrap_err(),
            ConfigError::BlankValue("untitled_title")
        );
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: FormConfig =
            serde_json::from_str(r#"{"sticky_threshold": 120}"#).expect("valid config json");
        assert_eq!(config.sticky_threshold, 120);
        assert_eq!(config.sticky_adjust, 2);
        assert_eq!(config.preview_target, "wmd-preview");
    }
}
