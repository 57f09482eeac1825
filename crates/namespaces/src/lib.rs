//! Prefix -> namespace URI registry persisted as a single JSON document.
//! - `file::namespace_store` holds the write-through store.
//! - `storage` reads and writes the JSON map and reports failures as values.
//! - `NamespaceService` is the interface hosts program against.

pub mod errors;
pub mod storage;
pub mod file;
pub mod namespace_service;

/// Ordered `prefix -> namespace` mapping; document order is kept on disk.
pub type Namespaces = indexmap::IndexMap<String, String>;

pub use errors::{NamespaceError, StorageError};
pub use file::defaults::{bundled_defaults, DefaultSource};
pub use file::namespace_store::NamespaceStore;
pub use namespace_service::NamespaceService;
