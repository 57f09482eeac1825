use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::NamespaceError;
use crate::Namespaces;

/// Trait abstraction for prefix -> namespace resolution consumed by hosts.
/// Implementations can be file-backed, database-backed, or remote KV.
#[async_trait]
pub trait NamespaceService: Send + Sync {
    /// Read-only snapshot of every known mapping.
    fn namespaces(&self) -> Arc<Namespaces>;
    /// Exact-match lookup of a single prefix.
    fn namespace(&self, prefix: &str) -> Option<String>;
    /// Insert or replace one mapping.
    async fn set_namespace(&self, prefix: &str, namespace: &str) -> Result<(), NamespaceError>;
}
