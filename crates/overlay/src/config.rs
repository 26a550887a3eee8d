//! Toolbar configuration.
//!
//! Settings come from `scrivener.toml` when present, with environment
//! variables taking precedence for quick overrides.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default configuration file, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "scrivener.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ToolbarConfig {
    pub placement: PlacementConfig,
    pub selection: SelectionConfig,
    pub toolbar: ToolbarSizeConfig,
}

/// Distances used by the positioner, in CSS px.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Minimum distance between the toolbar and any viewport edge.
    pub margin: f32,
    /// Space between the selected line and the toolbar.
    pub gap: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Non-whitespace characters a selection needs before the toolbar shows.
    pub min_selection_chars: usize,
    /// How long the toolbar survives after the input loses focus.
    pub blur_grace_ms: u64,
}

/// Toolbar size assumed until the toolbar has been measured once.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolbarSizeConfig {
    pub estimated_width: f32,
    pub estimated_height: f32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            margin: 8.0,
            gap: 8.0,
        }
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            min_selection_chars: 3,
            blur_grace_ms: 150,
        }
    }
}

impl Default for ToolbarSizeConfig {
    fn default() -> Self {
        Self {
            estimated_width: 180.0,
            estimated_height: 32.0,
        }
    }
}

impl SelectionConfig {
    pub fn blur_grace(&self) -> Duration {
        Duration::from_millis(self.blur_grace_ms)
    }
}

impl ToolbarConfig {
    /// Load configuration from a TOML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load `scrivener.toml` from the working directory, or defaults if it is
    /// missing or broken.
    pub fn load_or_default() -> Self {
        match Self::load_from_file(DEFAULT_CONFIG_FILE) {
            Ok(config) => config,
            Err(ConfigError::Io { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                Self::default()
            }
            Err(err) => {
                log::warn!(target: "overlay.config", "using default config: {err}");
                Self::default()
            }
        }
    }

    /// Apply `SCRIVENER_*` environment overrides.
    pub fn merge_with_env(&mut self) {
        self.merge_with_vars(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key/value source. Unparsable values are
    /// skipped with a warning.
    pub fn merge_with_vars(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(v) = override_value(&lookup, "SCRIVENER_MARGIN") {
            self.placement.margin = v;
        }
        if let Some(v) = override_value(&lookup, "SCRIVENER_GAP") {
            self.placement.gap = v;
        }
        if let Some(v) = override_value(&lookup, "SCRIVENER_MIN_CHARS") {
            self.selection.min_selection_chars = v;
        }
        if let Some(v) = override_value(&lookup, "SCRIVENER_BLUR_GRACE_MS") {
            self.selection.blur_grace_ms = v;
        }
    }

    /// Load from the default file, then apply environment overrides.
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}

fn override_value<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            let err = ConfigError::InvalidValue { key, value: raw };
            log::warn!(target: "overlay.config", "{err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = ToolbarConfig::default();
        assert_eq!(config.placement.margin, 8.0);
        assert_eq!(config.placement.gap, 8.0);
        assert_eq!(config.selection.min_selection_chars, 3);
        assert_eq!(config.selection.blur_grace(), Duration::from_millis(150));
        assert_eq!(config.toolbar.estimated_width, 180.0);
        assert_eq!(config.toolbar.estimated_height, 32.0);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = ToolbarConfig::from_toml_str(
            r#"
            [placement]
            margin = 12.0

            [selection]
            blur_grace_ms = 0
            "#,
        )
        .unwrap();
        assert_eq!(config.placement.margin, 12.0);
        assert_eq!(config.placement.gap, 8.0);
        assert_eq!(config.selection.blur_grace_ms, 0);
        assert_eq!(config.selection.min_selection_chars, 3);
    }

    #[test]
    fn toml_round_trip() {
        let config = ToolbarConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed = ToolbarConfig::from_toml_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = ToolbarConfig::from_toml_str("[placement\nmargin = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = ToolbarConfig::load_from_file("/nonexistent/scrivener.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn load_from_file_reads_toml() {
        let path = std::env::temp_dir().join(format!(
            "scrivener-config-test-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "[toolbar]\nestimated_width = 240.0\n").unwrap();
        let config = ToolbarConfig::load_from_file(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(config.toolbar.estimated_width, 240.0);
    }

    #[test]
    fn overrides_take_precedence_and_bad_values_are_skipped() {
        let mut config = ToolbarConfig::default();
        config.merge_with_vars(|key| match key {
            "SCRIVENER_MARGIN" => Some("4".to_string()),
            "SCRIVENER_GAP" => Some("wide".to_string()),
            "SCRIVENER_MIN_CHARS" => Some(" 5 ".to_string()),
            _ => None,
        });
        assert_eq!(config.placement.margin, 4.0);
        assert_eq!(config.placement.gap, 8.0);
        assert_eq!(config.selection.min_selection_chars, 5);
        assert_eq!(config.selection.blur_grace_ms, 150);
    }
}
