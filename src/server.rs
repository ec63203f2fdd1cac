//! Server records and the registry that owns them.

mod commands;
mod registry;

pub use commands::{AddOutcome, ConnectOutcome, ListResult, RemoveOutcome, ServerCommandService};
pub use registry::ServerRegistry;

use serde::{Deserialize, Serialize};

/// One named server entry. `name` is the registry key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerRecord {
    pub name: String,
    pub ip: String,
    pub user: String,
}

impl ServerRecord {
    pub fn new(name: impl Into<String>, ip: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ip: ip.into(),
            user: user.into(),
        }
    }

    /// `user@ip`, the destination argument handed to ssh
    pub fn destination(&self) -> String {
        format!("{}@{}", self.user, self.ip)
    }
}
