//! Global timeblock configuration.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::conversation::DEFAULT_MODEL;
use crate::error::{ScheduleError, ScheduleResult};
use crate::schedule::ScheduleSettings;
use crate::view::ViewMode;

static DEFAULT_DATA_FILE: &str = "~/.local/share/timeblock/schedule.json";
static DEFAULT_DURATION: &str = "1h";
static DEFAULT_ACCEPTED_COLOR: &str = "indigo";

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_duration() -> String {
    DEFAULT_DURATION.to_string()
}

fn default_accepted_color() -> Option<String> {
    Some(DEFAULT_ACCEPTED_COLOR.to_string())
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

/// Configuration at ~/.config/timeblock/config.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TimeblockConfig {
    /// Where the host keeps the schedule snapshot
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    #[serde(default)]
    pub default_view: ViewMode,

    #[serde(default)]
    pub show_suggestions: bool,

    /// Length of events added without an end, e.g. "1h" or "45m"
    #[serde(default = "default_duration")]
    pub default_duration: String,

    #[serde(default = "default_accepted_color")]
    pub accepted_color: Option<String>,

    /// Chat-completion model name
    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for TimeblockConfig {
    fn default() -> Self {
        TimeblockConfig {
            data_file: default_data_file(),
            default_view: ViewMode::default(),
            show_suggestions: false,
            default_duration: default_duration(),
            accepted_color: default_accepted_color(),
            model: default_model(),
        }
    }
}

impl TimeblockConfig {
    pub fn config_path() -> ScheduleResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ScheduleError::Config("Could not determine config directory".into()))?
            .join("timeblock");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, creating a commented-out config file
    /// on first run.
    pub fn load() -> ScheduleResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> ScheduleResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .build()
            .map_err(|e| ScheduleError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| ScheduleError::Config(e.to_string()))
    }

    /// Write this config to `path`, replacing the commented template.
    pub fn save_to(&self, path: &Path) -> ScheduleResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ScheduleError::Serialization(e.to_string()))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> ScheduleResult<()> {
        let contents = format!(
            "\
# timeblock configuration

# Where your events and suggestions are stored:
# data_file = \"{}\"

# Initial view, \"day\" or \"week\":
# default_view = \"day\"

# Show AI suggestions without passing --suggestions:
# show_suggestions = false

# Length of new events when no end time is given:
# default_duration = \"{}\"

# Color for events created from accepted suggestions:
# accepted_color = \"{}\"

# Chat-completion model:
# model = \"{}\"
",
            DEFAULT_DATA_FILE, DEFAULT_DURATION, DEFAULT_ACCEPTED_COLOR, DEFAULT_MODEL
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, contents)?;

        Ok(())
    }

    /// Snapshot file path with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_file.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    pub fn settings(&self) -> ScheduleResult<ScheduleSettings> {
        let std_duration = humantime::parse_duration(&self.default_duration).map_err(|e| {
            ScheduleError::Config(format!(
                "Invalid default_duration '{}': {}",
                self.default_duration, e
            ))
        })?;
        let default_duration = chrono::Duration::from_std(std_duration)
            .map_err(|_| ScheduleError::Config("default_duration is too large".into()))?;

        if default_duration <= chrono::Duration::zero() {
            return Err(ScheduleError::Config(
                "default_duration must be positive".into(),
            ));
        }

        Ok(ScheduleSettings {
            default_duration,
            accepted_color: self.accepted_color.clone(),
            show_suggestions: self.show_suggestions,
            default_view: self.default_view,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = TimeblockConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, TimeblockConfig::default());
    }

    #[test]
    fn commented_default_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        TimeblockConfig::create_default_config(&path).unwrap();

        let config = TimeblockConfig::load_from(&path).unwrap();
        assert_eq!(config, TimeblockConfig::default());
    }

    #[test]
    fn reads_values_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "data_file = \"/tmp/schedule.json\"\n\
             default_view = \"week\"\n\
             show_suggestions = true\n\
             default_duration = \"45m\"\n",
        )
        .unwrap();

        let config = TimeblockConfig::load_from(&path).unwrap();
        assert_eq!(config.data_path(), PathBuf::from("/tmp/schedule.json"));
        assert_eq!(config.default_view, ViewMode::Week);

        let settings = config.settings().unwrap();
        assert_eq!(settings.default_duration, chrono::Duration::minutes(45));
        assert!(settings.show_suggestions);
        assert_eq!(settings.accepted_color.as_deref(), Some("indigo"));
    }

    #[test]
    fn saved_config_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = TimeblockConfig {
            default_view: ViewMode::Week,
            accepted_color: Some("green".into()),
            default_duration: "30m".into(),
            ..Default::default()
        };

        config.save_to(&path).unwrap();
        let loaded = TimeblockConfig::load_from(&path).unwrap();
        assert_eq!(loaded.default_view, ViewMode::Week);
        assert_eq!(loaded.default_duration, "30m");
        assert_eq!(loaded, config);
    }

    #[test]
    fn unwritable_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("config.toml");
        let err = TimeblockConfig::default().save_to(&path).unwrap_err();
        assert!(matches!(err, ScheduleError::Io(_)));
    }

    #[test]
    fn invalid_duration_is_config_error() {
        let config = TimeblockConfig {
            default_duration: "soon".into(),
            ..Default::default()
        };
        assert!(matches!(config.settings(), Err(ScheduleError::Config(_))));
    }
}
