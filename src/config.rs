//! Configuration handling for the journey client

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Default lead-intake endpoint
pub const DEFAULT_INTAKE_URL: &str = "http://127.0.0.1:8080/api/leads";

const DEFAULT_TIMEOUT_SECS: u64 = 15;
const MIN_TIMEOUT_SECS: u64 = 1;
const MAX_TIMEOUT_SECS: u64 = 120;

const INTAKE_URL_ENV: &str = "JOURNEY_INTAKE_URL";
const ANALYTICS_URL_ENV: &str = "JOURNEY_ANALYTICS_URL";

/// User configuration for the journey client
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct JourneyConfig {
    /// Lead-intake endpoint
    pub intake_url: Option<String>,
    /// Analytics collector endpoint. Events are only logged when unset.
    pub analytics_url: Option<String>,
    /// Bound on one submission, in seconds
    pub submit_timeout_secs: Option<u64>,
}

impl JourneyConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "mpexpert", "journey-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_file()?;
        config.apply_overrides(
            std::env::var(INTAKE_URL_ENV).ok(),
            std::env::var(ANALYTICS_URL_ENV).ok(),
        );
        Ok(config)
    }

    fn load_file() -> Result<Self> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: JourneyConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    fn apply_overrides(&mut self, intake_url: Option<String>, analytics_url: Option<String>) {
        if let Some(url) = intake_url.filter(|u| !u.trim().is_empty()) {
            self.intake_url = Some(url);
        }
        if let Some(url) = analytics_url.filter(|u| !u.trim().is_empty()) {
            self.analytics_url = Some(url);
        }
    }

    pub fn intake_url(&self) -> &str {
        self.intake_url.as_deref().unwrap_or(DEFAULT_INTAKE_URL)
    }

    pub fn analytics_url(&self) -> Option<&str> {
        self.analytics_url.as_deref()
    }

    /// Submission timeout, clamped to a sane range
    pub fn submit_timeout(&self) -> Duration {
        let secs = self
            .submit_timeout_secs
            .unwrap_or(DEFAULT_TIMEOUT_SECS)
            .clamp(MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }
}
