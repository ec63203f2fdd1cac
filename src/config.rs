//! Configuration System
//!
//! Optional per-tool settings layered from defaults, a TOML settings file, and
//! `<TOOL>_*` environment variables. Nothing here is required: with no file and no
//! environment the tool keeps its registry at `~/<registry file>` and runs `ssh`.

use crate::error::CliError;
use crate::logging::LoggingConfig;
use crate::profile::Profile;
use config::{Config, Environment, File};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root settings structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Registry file location (defaults to the profile's file in the home directory)
    pub registry_path: Option<PathBuf>,

    /// Executable used to open sessions
    pub ssh_program: String,

    /// Logging configuration
    pub logging: LoggingConfig,
}

fn default_ssh_program() -> String {
    "ssh".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            registry_path: None,
            ssh_program: default_ssh_program(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Settings {
    /// Registry file this run reads and writes
    pub fn registry_path(&self, profile: &Profile) -> Result<PathBuf, CliError> {
        match self.registry_path {
            Some(ref path) => Ok(path.clone()),
            None => Ok(home_dir()?.join(profile.registry_file_name)),
        }
    }
}

/// Loads [`Settings`] for a profile
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load from the default settings file if present, then the environment
    pub fn load(profile: &Profile) -> Result<Settings, CliError> {
        let file = settings_path(profile).map(|path| (path, false));
        Self::build(profile, file)
    }

    /// Load from an explicit settings file (must exist), then the environment
    pub fn load_from_file(profile: &Profile, path: &Path) -> Result<Settings, CliError> {
        if !path.exists() {
            return Err(CliError::Config(format!(
                "Settings file not found: {}",
                path.display()
            )));
        }
        Self::build(profile, Some((path.to_path_buf(), true)))
    }

    fn build(profile: &Profile, file: Option<(PathBuf, bool)>) -> Result<Settings, CliError> {
        let mut builder = Config::builder();
        if let Some((path, required)) = file {
            if path.exists() {
                tracing::debug!(path = %path.display(), "Loading settings file");
            }
            builder = builder.add_source(File::from(path).required(required));
        }
        builder = builder.add_source(
            Environment::with_prefix(&profile.env_prefix())
                .prefix_separator("_")
                .separator("__"),
        );
        let settings: Settings = builder.build()?.try_deserialize()?;
        Ok(settings)
    }
}

/// `$XDG_CONFIG_HOME/<tool>/config.toml` (platform config dir elsewhere)
pub fn settings_path(profile: &Profile) -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| {
        dirs.config_dir()
            .join(profile.tool_name)
            .join("config.toml")
    })
}

/// `$XDG_DATA_HOME/<tool>/<tool>.log`
pub fn default_log_file(profile: &Profile) -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| {
        dirs.data_dir()
            .join(profile.tool_name)
            .join(format!("{}.log", profile.tool_name))
    })
}

fn home_dir() -> Result<PathBuf, CliError> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or_else(|| CliError::Config("Could not determine home directory".to_string()))
}
