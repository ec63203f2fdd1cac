//! Error types for the server registry CLI.

use std::path::PathBuf;
use thiserror::Error;

/// Registry persistence errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read registry {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write registry {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed registry {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize registry: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Errors raised while launching an ssh session
#[derive(Debug, Error)]
pub enum ConnectError {
    #[error("Sorry, this tool requires {0}")]
    MissingProgram(String),

    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to wait for {program}: {source}")]
    Wait {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Top-level CLI errors. Every variant ends the process with status 1.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Connect(#[from] ConnectError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid command: {0}\nSee --help for a list of available commands.")]
    InvalidCommand(String),
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::Config(err.to_string())
    }
}
