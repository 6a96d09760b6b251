//! Application configuration.
//!
//! Settings live in a `config.json` under the platform application-data
//! directory. Only presentation and export preferences are stored here;
//! the employee directory and the attendance ledger are process-lifetime
//! state and are deliberately not persisted.

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Organization name shown in report headers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    /// Directory exported reports are written into. Defaults to the
    /// current working directory when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
}

impl Config {
    /// Reads the stored configuration, falling back to defaults when no
    /// file exists yet.
    pub fn read() -> Result<Self> {
        let path = Self::file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let file = File::open(&path).map_err(|_| msg_error_anyhow!(Message::ConfigFileNotFound))?;
        let config = serde_json::from_reader(file).map_err(|_| msg_error_anyhow!(Message::ConfigParseError))?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::file_path()?;
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json).map_err(|_| msg_error_anyhow!(Message::ConfigSaveError))?;
        Ok(())
    }

    /// Removes the stored configuration file if one exists.
    pub fn delete() -> Result<()> {
        let path = Self::file_path()?;
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    /// Interactive wizard: prompts for each setting with the current
    /// value as the default. Blank answers leave a setting unset.
    pub fn init() -> Result<Self> {
        let current = Self::read().unwrap_or_default();

        let organization: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptOrganizationName.to_string())
            .default(current.organization.clone().unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;

        let export_dir: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptExportDir.to_string())
            .default(
                current
                    .export_dir
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            )
            .allow_empty(true)
            .interact_text()?;

        Ok(Self {
            organization: (!organization.trim().is_empty()).then(|| organization.trim().to_string()),
            export_dir: (!export_dir.trim().is_empty()).then(|| PathBuf::from(export_dir.trim())),
        })
    }

    fn file_path() -> Result<PathBuf> {
        DataStorage::new().get_path(CONFIG_FILE_NAME)
    }
}
