//! TOML configuration file.
//!
//! Every section is optional; missing values take the subsystem defaults.
//!
//! ```toml
//! data_dir = "/var/lib/reveil-forms"
//! origin_page = "https://reveil.example/contact.html"
//!
//! [logging]
//! log_level = "debug"
//!
//! [contact]
//! backend = "remote"
//!
//! [contact.remote]
//! endpoint = "https://forms.example/submit"
//!
//! [order.simulated]
//! delay_ms = 0
//! ```

use clap::ValueEnum;
use rf_03_submission_pipeline::{
    MailtoConfig, PipelineConfig, RemoteBackendConfig, SimulatedBackendConfig,
};
use rf_04_notifier::NotifierConfig;
use rf_telemetry::TelemetryConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Parse(String),
}

/// Which backend the contact form uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum BackendKind {
    #[default]
    Simulated,
    LocalEcho,
    Remote,
    Mailto,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSection {
    pub backend: BackendKind,
    pub pipeline: PipelineConfig,
    pub simulated: SimulatedBackendConfig,
    pub remote: RemoteBackendConfig,
    pub mailto: MailtoConfig,
}

impl Default for ContactSection {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            pipeline: PipelineConfig::contact(),
            simulated: SimulatedBackendConfig::contact(),
            remote: RemoteBackendConfig::default(),
            mailto: MailtoConfig::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderSection {
    pub pipeline: PipelineConfig,
    pub simulated: SimulatedBackendConfig,
    /// Site root the confirmation page is resolved against
    pub confirmation_base: String,
}

impl Default for OrderSection {
    fn default() -> Self {
        Self {
            pipeline: PipelineConfig::order(),
            simulated: SimulatedBackendConfig::order(),
            confirmation_base: "http://localhost:8000/".to_string(),
        }
    }
}

/// Whole-application configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory of the file-backed store
    pub data_dir: PathBuf,
    /// Recorded as the origin page of every snapshot
    pub origin_page: String,
    pub logging: TelemetryConfig,
    pub notifier: NotifierConfig,
    pub contact: ContactSection,
    pub order: OrderSection,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".reveil-forms"),
            origin_page: "rf-cli".to_string(),
            logging: TelemetryConfig::default(),
            notifier: NotifierConfig::default(),
            contact: ContactSection::default(),
            order: OrderSection::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text.
    ///
    /// Values are layered over `AppConfig::default()` table by table, so a
    /// partial `[order.simulated]` keeps the order presets for the keys it
    /// does not set.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let overrides: toml::Value =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        let mut merged =
            toml::Value::try_from(Self::default()).map_err(|e| ConfigError::Parse(e.to_string()))?;
        overlay(&mut merged, overrides);
        merged
            .try_into()
            .map_err(|e: toml::de::Error| ConfigError::Parse(e.to_string()))
    }
}

fn overlay(base: &mut toml::Value, overrides: toml::Value) {
    match (base, overrides) {
        (toml::Value::Table(base), toml::Value::Table(overrides)) => {
            for (key, value) in overrides {
                match base.get_mut(&key) {
                    Some(slot) => overlay(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}
