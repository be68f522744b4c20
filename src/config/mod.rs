// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read from a
//! `settings.toml` file at startup. The file is never written by the app:
//! style edits made in the playground live only for the session.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[styled]` - Initial values of the style form
//! - `[toasts]` - Toast surface limits
//! - `[diagnostics]` - Event buffer capacity
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. Pass `--config-dir` or set `ICED_TOASTER_CONFIG_DIR`
//! 3. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_toaster::config;
//!
//! // Missing or broken files yield defaults plus an optional warning key
//! let (config, _warning) = config::load();
//! let (style, _style_warning) = config.styled.resolve();
//! println!("initial background: {}", style.background);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::error::InputError;
use crate::domain::limits::{BufferCapacity, MaxVisible};
use crate::domain::style::{DurationMs, HexColor, Position, StyleConfiguration};
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning key shown when the config file exists but cannot be read or parsed.
pub const WARNING_LOAD_ERROR: &str = "notification-config-load-error";

/// Warning key shown when a `[styled]` value is invalid and the default is used.
pub const WARNING_INVALID_STYLE: &str = "notification-config-invalid-style";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Initial values of the style form.
///
/// Values are kept as raw text and validated by [`StyledConfig::resolve`], so
/// one bad entry does not discard the whole file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StyledConfig {
    /// Background color, `#rgb` or `#rrggbb`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,

    /// Text color, `#rgb` or `#rrggbb`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Toast lifetime in milliseconds, an integer or a numeric string.
    ///
    /// Kept untyped so a bad value only invalidates this field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<toml::Value>,

    /// One of `top-left`, `top-center`, `top-right`, `bottom-left`,
    /// `bottom-center`, `bottom-right`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

impl StyledConfig {
    /// Builds the initial style configuration.
    ///
    /// Missing values use the built-in defaults. Invalid values also use the
    /// defaults and produce [`WARNING_INVALID_STYLE`].
    #[must_use]
    pub fn resolve(&self) -> (StyleConfiguration, Option<String>) {
        let mut style = StyleConfiguration::default();
        let mut invalid = false;

        if let Some(raw) = &self.background {
            match HexColor::parse(raw) {
                Ok(color) => style.background = color,
                Err(_) => invalid = true,
            }
        }
        if let Some(raw) = &self.color {
            match HexColor::parse(raw) {
                Ok(color) => style.color = color,
                Err(_) => invalid = true,
            }
        }
        if let Some(raw) = &self.duration_ms {
            match parse_duration(raw) {
                Ok(duration) => style.duration = duration,
                Err(_) => invalid = true,
            }
        }
        if let Some(raw) = &self.position {
            match raw.parse::<Position>() {
                Ok(position) => style.position = position,
                Err(_) => invalid = true,
            }
        }

        let warning = invalid.then(|| WARNING_INVALID_STYLE.to_string());
        (style, warning)
    }
}

fn parse_duration(raw: &toml::Value) -> std::result::Result<DurationMs, InputError> {
    match raw {
        toml::Value::Integer(millis) => DurationMs::parse(&millis.to_string()),
        toml::Value::String(text) => DurationMs::parse(text),
        _ => Err(InputError::NotANumber),
    }
}

/// Toast surface settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToastsConfig {
    /// Number of toasts visible at once; extra toasts wait in a queue.
    #[serde(
        default = "default_max_visible",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_visible: Option<usize>,
}

impl Default for ToastsConfig {
    fn default() -> Self {
        Self {
            max_visible: default_max_visible(),
        }
    }
}

impl ToastsConfig {
    #[must_use]
    pub fn max_visible(&self) -> MaxVisible {
        self.max_visible.map(MaxVisible::new).unwrap_or_default()
    }
}

/// Diagnostics settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DiagnosticsConfig {
    /// Number of events kept in memory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer_capacity: Option<usize>,
}

impl DiagnosticsConfig {
    #[must_use]
    pub fn buffer_capacity(&self) -> BufferCapacity {
        self.buffer_capacity
            .map(BufferCapacity::new)
            .unwrap_or_default()
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub styled: StyledConfig,

    #[serde(default)]
    pub toasts: ToastsConfig,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_max_visible() -> Option<usize> {
    Some(DEFAULT_MAX_VISIBLE)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Load Functions
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). A missing file is not an
/// error. If loading fails, returns the default config with
/// [`WARNING_LOAD_ERROR`].
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            return match load_from_path(&path) {
                Ok(config) => (config, None),
                Err(_) => (Config::default(), Some(WARNING_LOAD_ERROR.to_string())),
            };
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join(CONFIG_FILE);
        fs::write(&path, content).expect("failed to write config");
        path
    }

    #[test]
    fn default_config_has_expected_sections() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.toasts.max_visible, Some(DEFAULT_MAX_VISIBLE));
        assert_eq!(config.styled, StyledConfig::default());
    }

    #[test]
    fn load_from_path_reads_all_sections() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_config(
            temp_dir.path(),
            r##"
[general]
language = "fr"
theme_mode = "Dark"

[styled]
background = "#112233"
color = "#000"
duration_ms = 1500
position = "bottom-left"

[toasts]
max_visible = 3

[diagnostics]
buffer_capacity = 200
"##,
        );

        let config = load_from_path(&path).expect("failed to load config");
        assert_eq!(config.general.language.as_deref(), Some("fr"));
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
        assert_eq!(config.toasts.max_visible().value(), 3);
        assert_eq!(config.diagnostics.buffer_capacity().value(), 200);

        let (style, warning) = config.styled.resolve();
        assert!(warning.is_none());
        assert_eq!(style.background.to_string(), "#112233");
        assert_eq!(style.color.to_string(), "#000000");
        assert_eq!(style.duration, DurationMs::new(1500));
        assert_eq!(style.position, Position::BottomLeft);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_config(temp_dir.path(), "not = valid = toml");

        match load_from_path(&path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_broken_file_warns() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        write_config(temp_dir.path(), "[general]\ntheme_mode = \"sepia\"\n");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(WARNING_LOAD_ERROR));
    }

    #[test]
    fn invalid_style_values_fall_back_individually() {
        let styled = StyledConfig {
            background: Some("grey".to_string()),
            color: Some("#abcdef".to_string()),
            duration_ms: None,
            position: Some("middle".to_string()),
        };

        let (style, warning) = styled.resolve();
        assert_eq!(style.background, DEFAULT_BACKGROUND);
        assert_eq!(style.color.to_string(), "#abcdef");
        assert_eq!(style.duration, DEFAULT_DURATION);
        assert_eq!(style.position, DEFAULT_POSITION);
        assert_eq!(warning.as_deref(), Some(WARNING_INVALID_STYLE));
    }

    #[test]
    fn bad_duration_keeps_the_rest_of_the_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        write_config(
            temp_dir.path(),
            r##"
[general]
language = "fr"
theme_mode = "dark"

[styled]
background = "#112233"
duration_ms = -5

[toasts]
max_visible = 2
"##,
        );

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(config.general.language.as_deref(), Some("fr"));
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
        assert_eq!(config.toasts.max_visible().value(), 2);

        let (style, style_warning) = config.styled.resolve();
        assert_eq!(style.background.to_string(), "#112233");
        assert_eq!(style.duration, DEFAULT_DURATION);
        assert_eq!(style_warning.as_deref(), Some(WARNING_INVALID_STYLE));
    }

    #[test]
    fn duration_accepts_integer_or_numeric_string() {
        for (raw, expected) in [
            (toml::Value::Integer(2500), Some(2500)),
            (toml::Value::String("1200".to_string()), Some(1200)),
            (toml::Value::String("abc".to_string()), None),
            (toml::Value::Integer(i64::from(u32::MAX) + 1), None),
            (toml::Value::Boolean(true), None),
        ] {
            let styled = StyledConfig {
                duration_ms: Some(raw),
                ..StyledConfig::default()
            };
            let (style, warning) = styled.resolve();
            match expected {
                Some(millis) => {
                    assert_eq!(style.duration, DurationMs::new(millis));
                    assert!(warning.is_none());
                }
                None => {
                    assert_eq!(style.duration, DEFAULT_DURATION);
                    assert_eq!(warning.as_deref(), Some(WARNING_INVALID_STYLE));
                }
            }
        }
    }

    #[test]
    fn out_of_range_limits_are_clamped() {
        let toasts = ToastsConfig {
            max_visible: Some(0),
        };
        assert_eq!(toasts.max_visible().value(), MIN_MAX_VISIBLE);

        let diagnostics = DiagnosticsConfig {
            buffer_capacity: Some(1),
        };
        assert_eq!(
            diagnostics.buffer_capacity(),
            BufferCapacity::new(crate::domain::limits::buffer_capacity_bounds::MIN)
        );
    }
}
