//! Medic Configuration
//!
//! Output preferences and knowledge-base location.
//! Config file: ~/.config/medic/config.toml or /etc/medic/config.toml

use crate::error::MedicError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "MEDIC_CONFIG";

/// Number of diagnoses shown by default
pub const DEFAULT_MAX_RESULTS: usize = 3;

/// Color display mode.
///
/// The config file and `--color` accept the same words, both through `FromStr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ColorMode {
    /// Color only on a capable terminal
    #[default]
    Auto,
    /// Always emit ANSI colors
    Always,
    /// Plain text
    Never,
}

impl std::str::FromStr for ColorMode {
    type Err = MedicError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" | "on" | "yes" | "true" => Ok(ColorMode::Always),
            "never" | "off" | "no" | "false" | "none" => Ok(ColorMode::Never),
            other => Err(MedicError::InvalidConfig(format!(
                "Invalid color mode: '{}'. Valid values: auto, always, never",
                other
            ))),
        }
    }
}

impl TryFrom<String> for ColorMode {
    type Error = MedicError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ColorMode> for String {
    fn from(mode: ColorMode) -> Self {
        mode.to_string()
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorMode::Auto => write!(f, "auto"),
            ColorMode::Always => write!(f, "always"),
            ColorMode::Never => write!(f, "never"),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Color display mode
    #[serde(default)]
    pub color: ColorMode,

    /// Diagnoses shown per query (0 = all)
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

/// Knowledge base source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeConfig {
    /// TOML file replacing the built-in disease table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Main Medic configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicConfig {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub knowledge: KnowledgeConfig,
}

impl MedicConfig {
    /// User config path: ~/.config/medic/config.toml
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("medic").join("config.toml"))
    }

    /// System config path: /etc/medic/config.toml
    pub fn system_config_path() -> PathBuf {
        PathBuf::from("/etc/medic/config.toml")
    }

    /// Load configuration
    ///
    /// Priority:
    /// 1. `explicit` path (must exist)
    /// 2. $MEDIC_CONFIG (must exist)
    /// 3. User config (~/.config/medic/config.toml)
    /// 4. System config (/etc/medic/config.toml)
    /// 5. Defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            if !path.is_empty() {
                return Self::load_from(Path::new(&path));
            }
        }

        if let Some(user_path) = Self::user_config_path() {
            if user_path.exists() {
                return Self::load_from(&user_path);
            }
        }

        let system_path = Self::system_config_path();
        if system_path.exists() {
            return Self::load_from(&system_path);
        }

        Ok(Self::default())
    }

    /// Load from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = toml::from_str::<MedicConfig>(&contents)
            .map_err(MedicError::from)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MedicConfig::default();
        assert_eq!(config.output.color, ColorMode::Auto);
        assert_eq!(config.output.max_results, DEFAULT_MAX_RESULTS);
        assert!(config.knowledge.path.is_none());
    }

    #[test]
    fn test_color_mode_parsing() {
        assert_eq!("always".parse::<ColorMode>().unwrap(), ColorMode::Always);
        assert_eq!("OFF".parse::<ColorMode>().unwrap(), ColorMode::Never);
        assert_eq!(" auto ".parse::<ColorMode>().unwrap(), ColorMode::Auto);
        assert!(matches!(
            "rainbow".parse::<ColorMode>(),
            Err(MedicError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_color_aliases_in_toml() {
        for (word, mode) in [
            ("off", ColorMode::Never),
            ("none", ColorMode::Never),
            ("on", ColorMode::Always),
            ("Yes", ColorMode::Always),
            ("auto", ColorMode::Auto),
        ] {
            let config: MedicConfig =
                toml::from_str(&format!("[output]\ncolor = \"{}\"\n", word)).unwrap();
            assert_eq!(config.output.color, mode, "color = {:?}", word);
        }
    }

    #[test]
    fn test_color_mode_serializes_canonical_word() {
        let config = MedicConfig {
            output: OutputConfig {
                color: "off".parse().unwrap(),
                max_results: 1,
            },
            ..MedicConfig::default()
        };
        let text = toml::to_string(&config).unwrap();
        assert!(text.contains("color = \"never\""));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: MedicConfig = toml::from_str("[output]\ncolor = \"never\"\n").unwrap();
        assert_eq!(config.output.color, ColorMode::Never);
        assert_eq!(config.output.max_results, DEFAULT_MAX_RESULTS);
    }

    #[test]
    fn test_unknown_color_mode_rejected() {
        let parsed: std::result::Result<MedicConfig, _> =
            toml::from_str("[output]\ncolor = \"sepia\"\n");
        let err = parsed.unwrap_err();
        assert!(err.to_string().contains("Invalid color mode"));
    }

    #[test]
    fn test_toml_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let original = MedicConfig {
            output: OutputConfig {
                color: ColorMode::Never,
                max_results: 5,
            },
            knowledge: KnowledgeConfig {
                path: Some(PathBuf::from("/opt/medic/kb.toml")),
            },
        };
        fs::write(&path, toml::to_string_pretty(&original).unwrap()).unwrap();

        let loaded = MedicConfig::load(Some(path.as_path())).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let err = MedicConfig::load(Some(Path::new("/nonexistent/medic.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
