use std::path::Path;

use serde_json::Value;
use tracing::warn;

use crate::errors::CostscopeError;

/// Parse a report file as JSON.
///
/// Not-found and malformed content stay distinct errors here; HTTP callers
/// collapse both into "document absent" after logging.
pub fn load_json(path: &Path) -> Result<Value, CostscopeError> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Load a document, collapsing any failure to `None` with a log line.
pub fn load_json_soft(path: &Path) -> Option<Value> {
    match load_json(path) {
        Ok(doc) => Some(doc),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to load report document");
            None
        }
    }
}
