//! Registry Store
//!
//! Storage port for the server registry. The registry is always read and written whole:
//! no incremental writes and no locking.

pub mod persistence;

pub use persistence::JsonFileStore;

use crate::error::StoreError;
use crate::server::ServerRecord;
use parking_lot::Mutex;

/// Registry store interface
pub trait RegistryStore: Send + Sync {
    /// Load every record. A store that has never been written yields an empty list.
    fn load(&self) -> Result<Vec<ServerRecord>, StoreError>;

    /// Replace the stored registry with `servers`.
    fn save(&self, servers: &[ServerRecord]) -> Result<(), StoreError>;

    /// Human-readable location for log lines
    fn location(&self) -> String;
}

/// In-memory store for exercising command handlers without touching disk
#[derive(Debug, Default)]
pub struct MemoryStore {
    servers: Mutex<Vec<ServerRecord>>,
    saves: Mutex<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_servers(servers: Vec<ServerRecord>) -> Self {
        Self {
            servers: Mutex::new(servers),
            saves: Mutex::new(0),
        }
    }

    /// Current stored contents
    pub fn snapshot(&self) -> Vec<ServerRecord> {
        self.servers.lock().clone()
    }

    /// Number of `save` calls so far
    pub fn save_count(&self) -> usize {
        *self.saves.lock()
    }
}

impl RegistryStore for MemoryStore {
    fn load(&self) -> Result<Vec<ServerRecord>, StoreError> {
        Ok(self.snapshot())
    }

    fn save(&self, servers: &[ServerRecord]) -> Result<(), StoreError> {
        *self.servers.lock() = servers.to_vec();
        *self.saves.lock() += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
