//! Shell configuration
//!
//! Settings ship as a built-in TOML document. A document that fails to parse
//! or validate is logged and replaced by [`ShellConfig::default`], so the
//! shell always boots.

use serde::{Deserialize, Serialize};

use crate::geometry::Offset;

const BUILTIN_SHELL_CONFIG_TOML: &str = include_str!("../assets/shell.toml");

/// Where a window lands when it leaves fullscreen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FullScreenExitPolicy {
    /// Back to the default anchor; any drag offset is forgotten
    #[default]
    ResetToAnchor,
    /// Back to the offset the window had when it entered fullscreen
    RestorePrevious,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Menu-bar title
    pub title: String,
    /// Offset every window takes when (re)opened
    pub default_anchor: Offset,
    /// Boot screen duration before the desktop appears
    pub boot_duration_ms: u32,
    /// Menu-bar clock refresh interval
    pub clock_refresh_secs: u32,
    /// Draw & Guess round length
    pub countdown_secs: u32,
    pub fullscreen_exit: FullScreenExitPolicy,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            title: "团建游戏系统".to_string(),
            default_anchor: Offset::ORIGIN,
            boot_duration_ms: 2000,
            clock_refresh_secs: 60,
            countdown_secs: 60,
            fullscreen_exit: FullScreenExitPolicy::ResetToAnchor,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse shell config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid shell config: {0}")]
    Invalid(String),
}

impl ShellConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ShellConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.countdown_secs == 0 {
            return Err(ConfigError::Invalid(
                "countdown_secs must be greater than zero".to_string(),
            ));
        }
        if self.clock_refresh_secs == 0 {
            return Err(ConfigError::Invalid(
                "clock_refresh_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Load the built-in shell config, falling back to defaults.
pub fn load_shell_config() -> ShellConfig {
    ShellConfig::from_toml_str(BUILTIN_SHELL_CONFIG_TOML).unwrap_or_else(|err| {
        tracing::error!(error = %err, "Failed to load built-in shell config; using defaults");
        ShellConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_config_matches_defaults() {
        let config = ShellConfig::from_toml_str(BUILTIN_SHELL_CONFIG_TOML).unwrap();
        assert_eq!(config, ShellConfig::default());
        assert_eq!(load_shell_config(), config);
    }

    #[test]
    fn partial_document_fills_in_defaults() {
        let config = ShellConfig::from_toml_str(
            r#"
            countdown_secs = 90
            fullscreen_exit = "restore_previous"
            "#,
        )
        .unwrap();

        assert_eq!(config.countdown_secs, 90);
        assert_eq!(config.fullscreen_exit, FullScreenExitPolicy::RestorePrevious);
        assert_eq!(config.clock_refresh_secs, 60);
        assert_eq!(config.default_anchor, Offset::ORIGIN);
    }

    #[test]
    fn zero_countdown_is_rejected() {
        let err = ShellConfig::from_toml_str("countdown_secs = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = ShellConfig::from_toml_str("countdown_secs = \"soon\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("Failed to parse shell config"));
    }
}
