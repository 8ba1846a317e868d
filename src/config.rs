use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::catalog::{Catalog, GameVersion, Language};
use crate::filter::{category_options, CategoryFilter};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown language '{0}' (expected en, ru or auto)")]
    UnknownLanguage(String),
    #[error("unknown game version '{0}' (expected CS2, CS:GO or CS 1.6)")]
    UnknownVersion(String),
    #[error("unknown category '{0}'")]
    UnknownCategory(String),
    #[error("unknown tui mode '{0}' (expected interactive or simple)")]
    UnknownTuiMode(String),
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub defaults: DefaultsConfig,
    pub clipboard: ClipboardConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    // "en", "ru" or "auto" (derived from LANG)
    pub language: String,
    // TUI mode: "interactive" or "simple"
    pub tui_mode: String,
    // Whether to use terminal alternate screen in interactive mode
    pub alt_screen: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            language: "ru".to_string(),
            tui_mode: "interactive".to_string(),
            alt_screen: true,
        }
    }
}

/// Initial selection when the browser opens.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DefaultsConfig {
    pub version: String,
    pub category: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            version: GameVersion::Cs2.label().to_string(),
            category: CategoryFilter::All.label().to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ClipboardConfig {
    /// Prepended to the description when copying with description.
    pub comment_prefix: String,
    /// Program (plus arguments) that receives the text on stdin instead of
    /// the native clipboard.
    pub command: Option<String>,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            comment_prefix: "// ".to_string(),
            command: None,
        }
    }
}

impl Config {
    /// Reads the config file if there is one; a missing file means defaults.
    pub fn new() -> Result<Self> {
        Self::load_from(&Self::get_config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    fn get_config_path() -> PathBuf {
        if let Ok(path) = std::env::var("CCH_CONFIG") {
            return PathBuf::from(path);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".cch")
            .join("config.toml")
    }

    pub fn get_effective_language(&self) -> Result<Language, ConfigError> {
        resolve_language(&self.display.language, std::env::var("LANG").ok().as_deref())
    }

    pub fn default_version(&self) -> Result<GameVersion, ConfigError> {
        self.defaults.version.parse()
    }

    pub fn default_category(&self, catalog: &Catalog) -> Result<CategoryFilter, ConfigError> {
        resolve_category(&self.defaults.category, catalog)
    }

    /// Interactive unless config or `CCH_TUI` asks for simple mode (env wins).
    pub fn tui_simple(&self) -> Result<bool, ConfigError> {
        if let Ok(v) = std::env::var("CCH_TUI") {
            let v = v.to_lowercase();
            return Ok(v == "0" || v == "false" || v == "simple");
        }
        match self.display.tui_mode.to_lowercase().as_str() {
            "simple" => Ok(true),
            "interactive" => Ok(false),
            other => Err(ConfigError::UnknownTuiMode(other.to_string())),
        }
    }

    pub fn use_alt_screen(&self) -> bool {
        std::env::var("CCH_ALT_SCREEN")
            .ok()
            .map(|v| {
                let v = v.to_lowercase();
                !(v == "0" || v == "false")
            })
            .unwrap_or(self.display.alt_screen)
    }
}

/// `auto` follows the `LANG` locale (Russian locales pick `ru`, everything else `en`).
pub fn resolve_language(value: &str, lang_env: Option<&str>) -> Result<Language, ConfigError> {
    if value.trim().eq_ignore_ascii_case("auto") {
        let locale = lang_env.unwrap_or("en_US").to_lowercase();
        let code = locale.split(['.', '_', '-']).next().unwrap_or("en");
        return Ok(if code == "ru" { Language::Ru } else { Language::En });
    }
    value.parse()
}

/// Category names must be `All` or one of the catalog's labels (case-insensitive).
pub fn resolve_category(value: &str, catalog: &Catalog) -> Result<CategoryFilter, ConfigError> {
    category_options(catalog)
        .into_iter()
        .find(|option| option.label().eq_ignore_ascii_case(value.trim()))
        .ok_or_else(|| ConfigError::UnknownCategory(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.display.language, "ru");
        assert_eq!(config.defaults.version, "CS2");
        assert_eq!(config.clipboard.comment_prefix, "// ");
        assert!(config.clipboard.command.is_none());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[display]\nlanguage = \"en\"\n\n[defaults]\nversion = \"CS:GO\"").unwrap();
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.display.language, "en");
        assert_eq!(config.display.tui_mode, "interactive");
        assert_eq!(config.default_version().unwrap(), GameVersion::CsGo);
        assert_eq!(config.defaults.category, "All");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[display\nlanguage = ").unwrap();
        assert!(Config::load_from(file.path()).is_err());
    }

    #[test]
    fn language_resolution() {
        assert_eq!(resolve_language("en", None).unwrap(), Language::En);
        assert_eq!(resolve_language("auto", Some("ru_RU.UTF-8")).unwrap(), Language::Ru);
        assert_eq!(resolve_language("auto", Some("de_DE.UTF-8")).unwrap(), Language::En);
        assert_eq!(resolve_language("auto", None).unwrap(), Language::En);
        assert_eq!(
            resolve_language("fr", None).unwrap_err(),
            ConfigError::UnknownLanguage("fr".to_string())
        );
    }

    #[test]
    fn category_resolution() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(resolve_category("All", &catalog).unwrap(), CategoryFilter::All);
        assert_eq!(
            resolve_category("bots", &catalog).unwrap(),
            CategoryFilter::Only("Bots".to_string())
        );
        assert!(resolve_category("Grenades", &catalog).is_err());
    }

    #[test]
    fn unknown_version_is_rejected() {
        let mut config = Config::default();
        config.defaults.version = "CS:Source".to_string();
        assert_eq!(
            config.default_version().unwrap_err(),
            ConfigError::UnknownVersion("CS:Source".to_string())
        );
    }
}
