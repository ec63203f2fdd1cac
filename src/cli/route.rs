//! CLI route: single route table and run context. Dispatches to the server command service
//! and presentation.

use crate::cli::help::{command_kind, command_name, typed_name};
use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_add_outcome, format_connect_not_found, format_list_result_json,
    format_list_result_text, format_remove_outcome,
};
use crate::config::Settings;
use crate::connector::{Launcher, SshLauncher};
use crate::error::CliError;
use crate::profile::Profile;
use crate::server::{ConnectOutcome, ServerCommandService, ServerRegistry};
use crate::store::{JsonFileStore, RegistryStore};
use parking_lot::RwLock;
use std::sync::Arc;

/// Runtime context for CLI execution: profile, loaded registry, and session launcher.
pub struct RunContext {
    profile: Profile,
    registry: RwLock<ServerRegistry>,
    launcher: Box<dyn Launcher>,
}

impl RunContext {
    /// Build from settings: JSON registry file and the configured ssh program.
    pub fn new(profile: Profile, settings: &Settings) -> Result<Self, CliError> {
        let path = settings.registry_path(&profile)?;
        tracing::debug!(registry = %path.display(), "Using registry file");
        let store = Arc::new(JsonFileStore::new(path));
        let launcher = Box::new(SshLauncher::new(settings.ssh_program.clone()));
        Self::with_parts(profile, store, launcher)
    }

    /// Build from explicit parts; loads the registry from `store` now.
    pub fn with_parts(
        profile: Profile,
        store: Arc<dyn RegistryStore>,
        launcher: Box<dyn Launcher>,
    ) -> Result<Self, CliError> {
        let registry = ServerRegistry::load(store)?;
        Ok(Self {
            profile,
            registry: RwLock::new(registry),
            launcher,
        })
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Execute a CLI command via the single route table.
    /// Returns the text to print; an empty string prints nothing.
    pub fn execute(&self, command: &Commands) -> Result<String, CliError> {
        let name = command_name(command);
        let enabled = command_kind(command)
            .map(|kind| self.profile.supports(kind))
            .unwrap_or(false);
        if !enabled {
            tracing::warn!(command = %name, tool = self.profile.tool_name, "Invalid command");
            return Err(CliError::InvalidCommand(typed_name(command)));
        }

        tracing::debug!(command = %name, "Executing command");
        let result = self.execute_inner(command);
        if let Err(ref e) = result {
            tracing::error!(command = %name, error = %e, "Command failed");
        }
        result
    }

    fn execute_inner(&self, command: &Commands) -> Result<String, CliError> {
        match command {
            Commands::Add { name, ip, user } => {
                let mut registry = self.registry.write();
                let outcome = ServerCommandService::add(&mut registry, name, ip, user)?;
                Ok(format_add_outcome(&outcome))
            }
            Commands::Remove { name } => {
                let mut registry = self.registry.write();
                let outcome = ServerCommandService::remove(&mut registry, name)?;
                Ok(format_remove_outcome(&outcome))
            }
            Commands::Ssh { name } => self.handle_ssh(name),
            Commands::List { format } => {
                let registry = self.registry.read();
                let result = ServerCommandService::list(&registry);
                // clap only admits "text" and "json"
                match format.as_str() {
                    "json" => Ok(format_list_result_json(&result)?),
                    _ => Ok(format_list_result_text(&result)),
                }
            }
            Commands::External(_) => Err(CliError::InvalidCommand(typed_name(command))),
        }
    }

    /// Launch, then hold the terminal until the session ends.
    /// The session's exit status is logged, never propagated.
    fn handle_ssh(&self, name: &str) -> Result<String, CliError> {
        let outcome = {
            let registry = self.registry.read();
            ServerCommandService::connect(&registry, self.launcher.as_ref(), name)?
        };
        match outcome {
            ConnectOutcome::NotFound(name) => Ok(format_connect_not_found(&name)),
            ConnectOutcome::Launched(session) => {
                let destination = session.destination().to_string();
                let status = session.wait()?;
                tracing::info!(
                    destination = %destination,
                    status = ?status,
                    "Session ended"
                );
                Ok(String::new())
            }
        }
    }
}
