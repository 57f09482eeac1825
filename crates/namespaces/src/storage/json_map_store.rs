use std::path::Path;

use serde_json::Value;
use tokio::fs;

use crate::errors::StorageError;
use crate::Namespaces;

/// Tolerant parse of a `{ "prefix": "uri", ... }` document.
///
/// Fields whose value is not a JSON string are skipped. An empty or
/// whitespace-only document is an empty map, not an error.
pub fn parse_string_map(bytes: &[u8]) -> Result<Namespaces, StorageError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Namespaces::new());
    }
    let root: Value = serde_json::from_slice(bytes).map_err(StorageError::Parse)?;
    match root {
        Value::Object(fields) => Ok(fields
            .into_iter()
            .filter_map(|(prefix, value)| match value {
                Value::String(uri) => Some((prefix, uri)),
                _ => None,
            })
            .collect()),
        other => Err(StorageError::NotAnObject(json_kind(&other))),
    }
}

/// Read and parse the map stored at `path`.
///
/// `Ok(None)` means the file does not exist yet.
pub async fn read_string_map(path: &Path) -> Result<Option<Namespaces>, StorageError> {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(StorageError::io(path, e)),
    };
    parse_string_map(&bytes).map(Some)
}

/// Serialize the whole map to `path`, pretty-printed, replacing the file.
///
/// Missing parent directories are created first.
pub async fn write_string_map(path: &Path, map: &Namespaces) -> Result<(), StorageError> {
    common::env::ensure_parent_dir(path)
        .await
        .map_err(|e| StorageError::io(path, e))?;
    let mut data = serde_json::to_vec_pretty(map).map_err(StorageError::Serialize)?;
    data.push(b'\n');
    fs::write(path, data).await.map_err(|e| StorageError::io(path, e))?;
    Ok(())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
