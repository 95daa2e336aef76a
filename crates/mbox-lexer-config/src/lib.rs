use mbox_lexer_engine::Style;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Archive opened when the viewer is started without a file argument.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archive: Option<PathBuf>,
    #[serde(default)]
    pub theme: Theme,
}

/// Color name for each style tag.
///
/// Names are whatever the viewer's color parser accepts (`cyan`,
/// `lightgreen`, `#ff8800`, ...). Missing entries fall back to the
/// built-in palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub default: String,
    pub from: String,
    pub from_value: String,
    pub date: String,
    pub date_value: String,
    pub subject: String,
    pub subject_value: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            default: "reset".into(),
            from: "cyan".into(),
            from_value: "lightcyan".into(),
            date: "yellow".into(),
            date_value: "lightyellow".into(),
            subject: "green".into(),
            subject_value: "lightgreen".into(),
        }
    }
}

impl Theme {
    pub fn color_name(&self, style: Style) -> &str {
        match style {
            Style::Default => &self.default,
            Style::From => &self.from,
            Style::FromValue => &self.from_value,
            Style::Date => &self.date,
            Style::DateValue => &self.date_value,
            Style::Subject => &self.subject,
            Style::SubjectValue => &self.subject_value,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        config.archive = config
            .archive
            .map(|path| Self::expand_path(&path).unwrap_or(path));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/mbox-lexer");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        shellexpand::full(&path_str)
            .ok()
            .map(|expanded| PathBuf::from(expanded.as_ref()))
    }
}
