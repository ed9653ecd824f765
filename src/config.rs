//! Configuration management for the ATS scanner

use crate::error::{AtsScannerError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub scanning: ScanConfig,
    pub output: OutputConfig,
}

/// Engine constants. The defaults reproduce the reference scoring behavior;
/// changing them changes scoring outcomes, so they are surfaced in the
/// config file rather than buried in the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Maximum number of classified job-description keywords scored per run.
    pub keyword_cap: usize,
    /// Weight for keywords matching the core tech stack.
    pub core_weight: i64,
    /// Weight for keywords matching soft skills (also the fallback weight).
    pub soft_weight: i64,
    /// CVs shorter than this (normalized characters) take the length penalty.
    pub min_cv_chars: usize,
    /// Weight subtracted from the earned total for a short CV.
    pub short_cv_penalty: i64,
    /// Hard score ceiling applied when a knock-out rule fires.
    pub knock_out_cap: u8,
    /// Scores at or above this band as an excellent match.
    pub excellent_threshold: u8,
    /// Scores at or above this (below excellent) band as good potential.
    pub good_threshold: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            keyword_cap: 20,
            core_weight: 25,
            soft_weight: 10,
            min_cv_chars: 600,
            short_cv_penalty: 20,
            knock_out_cap: 45,
            excellent_threshold: 85,
            good_threshold: 60,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scanning: ScanConfig::default(),
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                AtsScannerError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            AtsScannerError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("ats-scanner")
            .join("config.toml")
    }
}
