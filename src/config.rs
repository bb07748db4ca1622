use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::{
    DEFAULT_APPLICATION_DELAY_MS, DEFAULT_ISSUE_DELAY_MS, DEFAULT_LOG_FILE, DEFAULT_TOAST_MS,
    DEFAULT_UPDATE_DELAY_MS,
};
use crate::models::FormKind;

const CONFIG_FILE: &str = "config.yaml";

/// Simulated network latency per form
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionDelays {
    pub issue_ms: u64,
    pub update_ms: u64,
    pub application_ms: u64,
}

impl Default for SubmissionDelays {
    fn default() -> Self {
        SubmissionDelays {
            issue_ms: DEFAULT_ISSUE_DELAY_MS,
            update_ms: DEFAULT_UPDATE_DELAY_MS,
            application_ms: DEFAULT_APPLICATION_DELAY_MS,
        }
    }
}

impl SubmissionDelays {
    pub fn for_form(&self, form: FormKind) -> Duration {
        let ms = match form {
            FormKind::Issue => self.issue_ms,
            FormKind::Update => self.update_ms,
            FormKind::Application => self.application_ms,
        };
        Duration::from_millis(ms)
    }
}

/// User settings, read from `~/.courier-leasing/config.yaml`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub submission: SubmissionDelays,
    /// How long a toast stays visible
    pub toast_ms: u64,
    /// Allow clipboard writes through the terminal
    pub clipboard: bool,
    pub log_file: String,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            submission: SubmissionDelays::default(),
            toast_ms: DEFAULT_TOAST_MS,
            clipboard: true,
            log_file: String::from(DEFAULT_LOG_FILE),
            log_level: String::from("info"),
        }
    }
}

impl Settings {
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".courier-leasing")
    }

    /// Load from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_dir().join(CONFIG_FILE))
    }

    /// Load from a file; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Settings::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        if content.trim().is_empty() {
            return Ok(Settings::default());
        }
        let settings = serde_yaml::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(settings)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_ms)
    }
}
