//! Server command service: single entry point per server CLI command variant.
//!
//! Owns the registry workflow; the CLI parses, calls one method per variant, and formats output.
//! Lookups that miss and duplicate names are outcomes, not errors.

use crate::connector::{Launcher, Session};
use crate::error::{ConnectError, StoreError};
use crate::server::{ServerRecord, ServerRegistry};

pub struct ServerCommandService;

/// Result of add command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Created(ServerRecord),
    AlreadyExists(String),
}

/// Result of remove command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed(ServerRecord),
    NotFound(String),
}

/// Result of ssh command.
#[derive(Debug)]
pub enum ConnectOutcome {
    Launched(Session),
    NotFound(String),
}

/// Result of list command, already ordered by name.
#[derive(Debug, Clone)]
pub struct ListResult {
    pub servers: Vec<ServerRecord>,
}

impl ServerCommandService {
    /// Add a server and persist, unless the name is already registered.
    pub fn add(
        registry: &mut ServerRegistry,
        name: &str,
        ip: &str,
        user: &str,
    ) -> Result<AddOutcome, StoreError> {
        let record = ServerRecord::new(name, ip, user);
        if !registry.insert(record.clone()) {
            tracing::info!(name, "Server name already registered");
            return Ok(AddOutcome::AlreadyExists(name.to_string()));
        }
        registry.persist()?;
        tracing::info!(name, ip, "Server added");
        Ok(AddOutcome::Created(record))
    }

    /// Remove a server by name and persist.
    pub fn remove(registry: &mut ServerRegistry, name: &str) -> Result<RemoveOutcome, StoreError> {
        match registry.remove(name) {
            Some(record) => {
                registry.persist()?;
                tracing::info!(name, "Server removed");
                Ok(RemoveOutcome::Removed(record))
            }
            None => {
                tracing::info!(name, "Server not found for removal");
                Ok(RemoveOutcome::NotFound(name.to_string()))
            }
        }
    }

    /// Look up a server and launch a session to it. Never launches for unknown names.
    pub fn connect(
        registry: &ServerRegistry,
        launcher: &dyn Launcher,
        name: &str,
    ) -> Result<ConnectOutcome, ConnectError> {
        let Some(record) = registry.find(name) else {
            tracing::info!(name, "Server not found for ssh");
            return Ok(ConnectOutcome::NotFound(name.to_string()));
        };
        let session = launcher.launch(record)?;
        tracing::info!(name, destination = %record.destination(), "Session launched");
        Ok(ConnectOutcome::Launched(session))
    }

    /// List servers sorted by name.
    pub fn list(registry: &ServerRegistry) -> ListResult {
        ListResult {
            servers: registry.sorted().into_iter().cloned().collect(),
        }
    }
}
