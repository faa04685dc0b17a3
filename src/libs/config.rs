//! Application configuration.
//!
//! Stored as pretty-printed JSON in the platform data directory:
//! - **Windows**: `%LOCALAPPDATA%\taskdesk\config.json`
//! - **macOS**: `~/Library/Application Support/taskdesk/config.json`
//! - **Linux**: `~/.local/share/taskdesk/config.json`
//!
//! A missing file yields [`Config::default`]; a malformed one is an error.

use super::data_storage::DataStorage;
use super::formatter::{is_valid_date_format, DEFAULT_DATE_FORMAT};
use super::messages::Message;
use crate::msg_print;
use anyhow::{bail, Result};
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DB_FILE_NAME: &str = "taskdesk.db";
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Database file location. Defaults to `taskdesk.db` in the data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,

    /// Shortest password accepted at registration.
    pub min_password_length: usize,

    /// `chrono` format string used to display due dates.
    pub date_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database: None,
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl Config {
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        if !is_valid_date_format(&config.date_format) {
            bail!(Message::InvalidDateFormat(config.date_format));
        }
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Resolved database path: the configured override or the data directory default.
    pub fn database_path(&self) -> Result<PathBuf> {
        match &self.database {
            Some(path) => Ok(path.clone()),
            None => DataStorage::new().get_path(DB_FILE_NAME),
        }
    }

    /// Interactive setup wizard, pre-filled with the current values.
    pub fn init() -> Result<Self> {
        let current = Self::read().unwrap_or_default();
        let default_db = current.database_path()?;

        msg_print!(Message::ConfigHeader, true);

        let database: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDatabasePath.to_string())
            .default(default_db.display().to_string())
            .interact_text()?;

        let min_password_length: usize = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptMinPasswordLength.to_string())
            .default(current.min_password_length)
            .validate_with(|value: &usize| if *value > 0 { Ok(()) } else { Err(Message::MinPasswordLengthPositive.to_string()) })
            .interact_text()?;

        let date_format: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDateFormat.to_string())
            .default(current.date_format.clone())
            .validate_with(|value: &String| {
                if is_valid_date_format(value) {
                    Ok(())
                } else {
                    Err(Message::InvalidDateFormat(value.clone()).to_string())
                }
            })
            .interact_text()?;

        Ok(Config {
            database: Some(PathBuf::from(database)),
            min_password_length,
            date_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, r#"{ "min_password_length": 10 }"#).unwrap();

        let config = Config::read_from(&path).unwrap();
        assert_eq!(config.min_password_length, 10);
        assert_eq!(config.date_format, DEFAULT_DATE_FORMAT);
        assert!(config.database.is_none());
    }

    #[test]
    fn unknown_date_specifier_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, r#"{ "date_format": "%Y-%Q" }"#).unwrap();

        let err = Config::read_from(&path).unwrap_err();
        assert!(err.to_string().contains("%Y-%Q"));
    }
}
