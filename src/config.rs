use serde::Deserialize;
use std::path::Path;

use crate::error::Result;
use crate::{sink, verbose};

/// Runtime settings, read from `BELT_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub log_prefix: Option<String>,
    #[serde(default = "default_log_timestamps")]
    pub log_timestamps: bool,
}

fn default_log_timestamps() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            log_prefix: None,
            log_timestamps: default_log_timestamps(),
        }
    }
}

impl Config {
    pub const ENV_PREFIX: &'static str = "BELT_";

    pub fn from_env() -> Result<Self> {
        Ok(envy::prefixed(Self::ENV_PREFIX).from_env::<Config>()?)
    }

    /// Load `dotenv_path` if it exists, then read the environment.
    ///
    /// Variables already set in the environment take precedence over the file.
    pub fn load_with_env(dotenv_path: &Path) -> Result<Self> {
        if dotenv_path.exists() {
            dotenvy::from_path(dotenv_path)?;
            tracing::debug!("Loaded environment from {}", dotenv_path.display());
        }

        Self::from_env()
    }

    /// Push these settings into the verbose flag and the log sink.
    pub fn apply(&self) {
        verbose::set_verbose(self.verbose);
        sink::set_prefix(self.log_prefix.clone().unwrap_or_default());
        sink::set_timestamps(self.log_timestamps);
        tracing::debug!("Applied config: {:?}", self);
    }
}

/// Set the verbose flag at program start.
pub fn init(verbose: bool) {
    verbose::set_verbose(verbose);
}
