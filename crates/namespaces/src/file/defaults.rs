use std::path::PathBuf;

use once_cell::sync::Lazy;
use tracing::{debug, error};

use crate::storage::json_map_store::{parse_string_map, read_string_map};
use crate::Namespaces;

const BUNDLED_JSON: &str = include_str!("../../resources/default_namespaces.json");

static BUNDLED: Lazy<Namespaces> = Lazy::new(|| match parse_string_map(BUNDLED_JSON.as_bytes()) {
    Ok(map) => map,
    Err(e) => {
        error!(event = "bundled_defaults_invalid", error = %e, "bundled default namespaces are unreadable");
        Namespaces::new()
    }
});

/// Where a brand-new (or empty) store takes its initial entries from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DefaultSource {
    /// The default set compiled into this crate.
    #[default]
    Bundled,
    /// A host-supplied JSON document of the same shape.
    File(PathBuf),
    /// Start empty; nothing is written until the first update.
    Empty,
}

/// The default namespace set shipped with the crate.
pub fn bundled_defaults() -> &'static Namespaces {
    &BUNDLED
}

/// Resolve a seed source to an owned map. Unreadable seeds are logged and
/// yield an empty map.
pub async fn load_defaults(source: &DefaultSource) -> Namespaces {
    match source {
        DefaultSource::Bundled => bundled_defaults().clone(),
        DefaultSource::Empty => Namespaces::new(),
        DefaultSource::File(path) => match read_string_map(path).await {
            Ok(Some(map)) => map,
            Ok(None) => {
                debug!(event = "defaults_missing", path = %path.display(), "default namespaces file not found");
                Namespaces::new()
            }
            Err(e) => {
                error!(event = "defaults_read_failed", path = %path.display(), error = %e, "error reading default namespaces");
                Namespaces::new()
            }
        },
    }
}
