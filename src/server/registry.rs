//! Server registry: in-memory aggregate of loaded servers.

use crate::error::StoreError;
use crate::server::ServerRecord;
use crate::store::RegistryStore;
use std::sync::Arc;

/// Registry of server records
///
/// Holds the full list in insertion order and delegates persistence to the storage port.
/// Every mutation is written back in full by `persist`.
pub struct ServerRegistry {
    servers: Vec<ServerRecord>,
    store: Arc<dyn RegistryStore>,
}

impl ServerRegistry {
    /// Load the whole registry from the store
    pub fn load(store: Arc<dyn RegistryStore>) -> Result<Self, StoreError> {
        let servers = store.load()?;
        tracing::debug!(
            location = %store.location(),
            count = servers.len(),
            "Registry loaded"
        );
        Ok(Self { servers, store })
    }

    /// Find a server by exact name
    pub fn find(&self, name: &str) -> Option<&ServerRecord> {
        self.servers.iter().find(|s| s.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Append a server. Returns false and leaves the registry untouched when the name is taken.
    pub fn insert(&mut self, record: ServerRecord) -> bool {
        if self.contains(&record.name) {
            return false;
        }
        self.servers.push(record);
        true
    }

    /// Remove the first server with this name
    pub fn remove(&mut self, name: &str) -> Option<ServerRecord> {
        let index = self.servers.iter().position(|s| s.name == name)?;
        Some(self.servers.remove(index))
    }

    /// All servers in insertion order
    pub fn list_all(&self) -> &[ServerRecord] {
        &self.servers
    }

    /// Servers ordered by name (byte-wise, so uppercase sorts before lowercase).
    /// Equal names keep insertion order.
    pub fn sorted(&self) -> Vec<&ServerRecord> {
        let mut servers: Vec<&ServerRecord> = self.servers.iter().collect();
        servers.sort_by(|a, b| a.name.cmp(&b.name));
        servers
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }

    /// Write the full registry back to the store
    pub fn persist(&self) -> Result<(), StoreError> {
        self.store.save(&self.servers)?;
        tracing::debug!(
            location = %self.store.location(),
            count = self.servers.len(),
            "Registry saved"
        );
        Ok(())
    }
}
