use std::path::{Path, PathBuf};
use std::sync::Arc;

use arc_swap::ArcSwap;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use crate::errors::NamespaceError;
use crate::file::defaults::{load_defaults, DefaultSource};
use crate::namespace_service::NamespaceService;
use crate::storage::json_map_store::{read_string_map, write_string_map};
use crate::Namespaces;

/// File-backed namespace store.
///
/// Keeps a map of `prefix -> namespace` in memory and rewrites the whole
/// JSON file on every update. Storage failures are logged and never
/// returned: a failed load behaves like an empty file and a failed write
/// still leaves the update visible in memory.
pub struct NamespaceStore {
    current: Arc<ArcSwap<Namespaces>>,
    // serializes writers so the file always follows call order
    writer: Arc<Mutex<()>>,
    file_path: PathBuf,
}

impl NamespaceStore {
    /// Open the store at `path`, seeding an empty store from the bundled defaults.
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, NamespaceError> {
        Self::open_with(path, DefaultSource::Bundled).await
    }

    /// Open the store at `path`, seeding an empty store from `defaults`.
    ///
    /// The seed is consulted only when the file is missing, unreadable or
    /// holds no string entries; a non-empty seed is written back at once.
    pub async fn open_with<P: Into<PathBuf>>(path: P, defaults: DefaultSource) -> Result<Arc<Self>, NamespaceError> {
        let file_path = path.into();
        if file_path.as_os_str().is_empty() {
            return Err(NamespaceError::empty("file path"));
        }

        let mut data = load(&file_path).await;
        if data.is_empty() {
            data.extend(load_defaults(&defaults).await);
            if !data.is_empty() {
                persist(&file_path, &data).await;
                info!(
                    event = "namespaces_seeded",
                    path = %file_path.display(),
                    entries = data.len(),
                    "seeded namespace store from defaults"
                );
            }
        }

        Ok(Arc::new(Self {
            current: Arc::new(ArcSwap::from_pointee(data)),
            writer: Arc::new(Mutex::new(())),
            file_path,
        }))
    }

    /// Open the store described by the host configuration.
    pub async fn from_config(cfg: &configs::NamespacesConfig) -> Result<Arc<Self>, NamespaceError> {
        let defaults = match (&cfg.defaults_path, cfg.seed_defaults) {
            (Some(path), _) => DefaultSource::File(path.clone()),
            (None, true) => DefaultSource::Bundled,
            (None, false) => DefaultSource::Empty,
        };
        Self::open_with(cfg.path.clone(), defaults).await
    }

    /// Backing file of this store.
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Snapshot of all mappings; later updates do not alter it.
    pub fn namespaces(&self) -> Arc<Namespaces> {
        self.current.load_full()
    }

    /// Namespace bound to `prefix`, matched exactly.
    pub fn namespace(&self, prefix: &str) -> Option<String> {
        self.current.load().get(prefix).cloned()
    }

    pub fn len(&self) -> usize {
        self.current.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.load().is_empty()
    }

    /// Upsert one mapping and write the full map back to disk before returning.
    ///
    /// Any string is accepted, including the empty default prefix. The write
    /// and the publish of the new snapshot run on a spawned task, so a caller
    /// that stops polling (a timeout, a losing `select!` arm) cannot leave
    /// the file ahead of memory: once the write starts, both complete.
    pub async fn set_namespace(&self, prefix: &str, namespace: &str) -> Result<(), NamespaceError> {
        let guard = Arc::clone(&self.writer).lock_owned().await;
        let mut next = Namespaces::clone(&self.current.load());
        next.insert(prefix.to_owned(), namespace.to_owned());

        let current = Arc::clone(&self.current);
        let file_path = self.file_path.clone();
        let commit = tokio::spawn(async move {
            persist(&file_path, &next).await;
            current.store(Arc::new(next));
            drop(guard);
        });
        if let Err(e) = commit.await {
            error!(event = "namespace_commit_failed", path = %self.file_path.display(), error = %e, "namespace update did not complete");
        }
        debug!(event = "namespace_set", %prefix, %namespace, "namespace updated");
        Ok(())
    }
}

#[async_trait::async_trait]
impl NamespaceService for NamespaceStore {
    fn namespaces(&self) -> Arc<Namespaces> { self.namespaces() }
    fn namespace(&self, prefix: &str) -> Option<String> { self.namespace(prefix) }
    async fn set_namespace(&self, prefix: &str, namespace: &str) -> Result<(), NamespaceError> { self.set_namespace(prefix, namespace).await }
}

async fn load(path: &Path) -> Namespaces {
    match read_string_map(path).await {
        Ok(Some(map)) => map,
        // absence is the normal first run, not a failure worth an error
        Ok(None) => {
            debug!(event = "namespaces_missing", path = %path.display(), "namespace file not found; starting empty");
            Namespaces::new()
        }
        Err(e) => {
            error!(event = "namespaces_read_failed", path = %path.display(), error = %e, "error reading namespaces from JSON");
            Namespaces::new()
        }
    }
}

async fn persist(path: &Path, map: &Namespaces) {
    if let Err(e) = write_string_map(path, map).await {
        error!(event = "namespaces_write_failed", path = %path.display(), error = %e, "error writing namespaces to JSON");
    }
}
