//! Persistence layer for the registry: a pretty-printed JSON array on disk.

use crate::error::StoreError;
use crate::server::ServerRecord;
use crate::store::RegistryStore;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::{Path, PathBuf};

const INDENT: &[u8] = b"    ";

/// JSON-file implementation of RegistryStore
///
/// Writes replace the whole file in place. A crash mid-write can leave a truncated file,
/// which the next `load` reports as malformed.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Serialize records as a JSON array indented with four spaces
pub fn to_pretty_json(servers: &[ServerRecord]) -> Result<Vec<u8>, StoreError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    servers
        .serialize(&mut serializer)
        .map_err(StoreError::Serialize)?;
    Ok(buf)
}

impl RegistryStore for JsonFileStore {
    fn load(&self) -> Result<Vec<ServerRecord>, StoreError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "Registry file absent, starting empty");
            return Ok(Vec::new());
        }
        let content = std::fs::read(&self.path).map_err(|e| StoreError::Read {
            path: self.path.clone(),
            source: e,
        })?;
        serde_json::from_slice(&content).map_err(|e| StoreError::Parse {
            path: self.path.clone(),
            source: e,
        })
    }

    fn save(&self, servers: &[ServerRecord]) -> Result<(), StoreError> {
        let content = to_pretty_json(servers)?;
        std::fs::write(&self.path, content).map_err(|e| StoreError::Write {
            path: self.path.clone(),
            source: e,
        })
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
