//! Configuration management for tasktime.
//!
//! Settings live in `config.json` in the platform data directory (see
//! [`DataStorage`]). Every section is optional; a missing file or section
//! means defaults. `tasktime init` runs an interactive wizard built on
//! `dialoguer` to fill the sections in.
//!
//! ## Configuration Structure
//!
//! - **Celebration**: whether the stop animation plays, its frame count and cadence
//! - **Export**: default spreadsheet format and file name
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use tasktime::libs::config::Config;
//!
//! let config = Config::read()?;
//! let celebration = config.celebration.unwrap_or_default();
//! println!("{} frames every {} ms", celebration.ticks, celebration.interval_ms);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::export::ExportFormat;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// A section offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Settings for the animation played when a session stops.
///
/// The default of 4 frames every 250 ms keeps the effect to about one second.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CelebrationConfig {
    /// Whether `tasktime stop` plays the animation at all.
    pub enabled: bool,
    /// Number of frames before the animation ends on its own.
    pub ticks: u32,
    /// Delay between frames in milliseconds.
    pub interval_ms: u64,
}

/// Defaults for `tasktime export` when no flags are given.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExportConfig {
    pub format: ExportFormat,
    /// File name without extension; the extension follows the format.
    pub file_name: String,
}

/// Root configuration object.
///
/// Unset sections are omitted from the JSON file.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub celebration: Option<CelebrationConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub export: Option<ExportConfig>,
}

impl Default for CelebrationConfig {
    fn default() -> Self {
        CelebrationConfig {
            enabled: true,
            ticks: 4,
            interval_ms: 250,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            format: ExportFormat::Excel,
            file_name: "time_logs".to_string(),
        }
    }
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        Ok(DataStorage::new().get_path(CONFIG_FILE_NAME)?)
    }

    /// Loads `config.json`, or the default configuration when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = Self::path()?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON, replacing any existing file.
    pub fn save(&self) -> Result<()> {
        let config_file = File::create(Self::path()?)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes `config.json`. Returns `false` when there was nothing to remove.
    pub fn delete() -> Result<bool> {
        let config_file_path = Self::path()?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// Runs the interactive setup wizard.
    ///
    /// Starts from the current configuration so existing values are offered
    /// as defaults, lets the user pick which sections to edit and prompts for
    /// each of their fields.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "celebration".to_string(),
                name: Message::ConfigModuleCelebration.to_string(),
            },
            ConfigModule {
                key: "export".to_string(),
                name: Message::ConfigModuleExport.to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "celebration" => {
                    let default = config.celebration.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleCelebration);
                    config.celebration = Some(CelebrationConfig {
                        enabled: Confirm::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptCelebrationEnabled.to_string())
                            .default(default.enabled)
                            .interact()?,
                        ticks: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptCelebrationTicks.to_string())
                            .default(default.ticks)
                            .interact_text()?,
                        interval_ms: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptCelebrationInterval.to_string())
                            .default(default.interval_ms)
                            .interact_text()?,
                    });
                }
                "export" => {
                    let default = config.export.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleExport);
                    let formats = ExportFormat::ALL;
                    let current = formats.iter().position(|f| *f == default.format).unwrap_or(0);
                    let format = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptExportFormat.to_string())
                        .items(&formats.iter().map(|f| f.to_string()).collect::<Vec<_>>())
                        .default(current)
                        .interact()?;
                    config.export = Some(ExportConfig {
                        format: formats[format],
                        file_name: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptExportFileName.to_string())
                            .default(default.file_name)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
