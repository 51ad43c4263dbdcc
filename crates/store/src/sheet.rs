//! Whole-file JSON sheet I/O plus tolerant legacy-column helpers.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StoreError;

// ---------------------------------------------------------------------------
// Sheet I/O
// ---------------------------------------------------------------------------

/// Load all rows of a sheet. A missing file is an empty sheet, not an
/// error, so a fresh data directory needs no seeding step.
pub fn load_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "sheet missing, starting empty");
        return Ok(Vec::new());
    }
    let raw = fs::read_to_string(path)?;
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(&raw)?)
}

/// Persist the full row list, replacing the previous file contents.
pub fn store_rows<T: Serialize>(path: &Path, rows: &[T]) -> Result<(), StoreError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string_pretty(rows)?;
    fs::write(path, json)?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "sheet written");
    Ok(())
}

// ---------------------------------------------------------------------------
// Legacy column helpers
// ---------------------------------------------------------------------------

/// Split a legacy free-text list column on any of the separators the
/// old sheets accumulated over time (`;`, `,`, `/`, `|`).
pub fn split_list(column: &str) -> Vec<String> {
    static SEPARATORS: OnceLock<Regex> = OnceLock::new();
    let re = SEPARATORS
        .get_or_init(|| Regex::new(r"[;,/|]+").expect("separator pattern is a fixed literal"));
    re.split(column)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
