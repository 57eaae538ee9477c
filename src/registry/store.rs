use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::RegistryError;

/// A JSON Schema document stored under its (type, version) key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaEntry {
    pub id: u64,
    #[serde(rename = "type")]
    pub schema_type: String,
    pub version: String,
    pub schema_content: String,
    pub fingerprint: String,
}

/// A schema document about to be stored; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSchema {
    pub schema_type: String,
    pub version: String,
    pub schema_content: String,
    pub fingerprint: String,
}

/// Key-value storage for schema documents, unique per (type, version).
pub trait SchemaStore {
    fn exists(&self, schema_type: &str, version: &str) -> bool {
        self.find(schema_type, version).is_some()
    }

    fn find(&self, schema_type: &str, version: &str) -> Option<&SchemaEntry>;

    /// Store a new document. Fails with [`RegistryError::AlreadyExists`]
    /// when the key is taken.
    fn insert(&mut self, schema: NewSchema) -> Result<SchemaEntry, RegistryError>;

    /// All entries in insertion order.
    fn entries(&self) -> &[SchemaEntry];
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryStore {
    next_id: u64,
    entries: Vec<SchemaEntry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SchemaStore for MemoryStore {
    fn find(&self, schema_type: &str, version: &str) -> Option<&SchemaEntry> {
        self.entries
            .iter()
            .find(|e| e.schema_type == schema_type && e.version == version)
    }

    fn insert(&mut self, schema: NewSchema) -> Result<SchemaEntry, RegistryError> {
        if self.exists(&schema.schema_type, &schema.version) {
            return Err(RegistryError::AlreadyExists {
                schema_type: schema.schema_type,
                version: schema.version,
            });
        }

        self.next_id += 1;
        let entry = SchemaEntry {
            id: self.next_id,
            schema_type: schema.schema_type,
            version: schema.version,
            schema_content: schema.schema_content,
            fingerprint: schema.fingerprint,
        };
        self.entries.push(entry.clone());
        Ok(entry)
    }

    fn entries(&self) -> &[SchemaEntry] {
        &self.entries
    }
}

/// A [`MemoryStore`] persisted as one pretty-printed JSON file, rewritten
/// after every insert.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    inner: MemoryStore,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref().to_path_buf();
        let inner = if path.exists() {
            let text = fs::read_to_string(&path)
                .map_err(|e| RegistryError::Storage(format!("failed to read {path:?}: {e}")))?;
            serde_json::from_str::<MemoryStore>(&text)
                .map_err(|e| RegistryError::Storage(format!("corrupt store {path:?}: {e}")))?
        } else {
            MemoryStore::new()
        };
        tracing::debug!(?path, entries = inner.entries.len(), "opened schema store");
        Ok(Self { path, inner })
    }

    fn flush(&self, state: &MemoryStore) -> Result<(), RegistryError> {
        let text = serde_json::to_string_pretty(state)
            .map_err(|e| RegistryError::Storage(e.to_string()))?;
        fs::write(&self.path, text)
            .map_err(|e| RegistryError::Storage(format!("failed to write {:?}: {e}", self.path)))
    }
}

impl SchemaStore for JsonFileStore {
    fn find(&self, schema_type: &str, version: &str) -> Option<&SchemaEntry> {
        self.inner.find(schema_type, version)
    }

    fn insert(&mut self, schema: NewSchema) -> Result<SchemaEntry, RegistryError> {
        // Commit in memory only once the file holds the new entry.
        let mut staged = self.inner.clone();
        let entry = staged.insert(schema)?;
        self.flush(&staged)?;
        self.inner = staged;
        Ok(entry)
    }

    fn entries(&self) -> &[SchemaEntry] {
        self.inner.entries()
    }
}
