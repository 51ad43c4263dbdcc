//! Spreadsheet-file persistence for the production tracker.
//!
//! Data lives in three JSON "sheet" files under a data directory —
//! `proiecte.json`, `personal.json`, `oferte.json` — each holding the
//! full row list for one entity. Reads and writes go through whole-file
//! repositories behind traits so the HTTP layer never touches the files
//! directly. Concurrent writers are serialized per sheet; the last write
//! wins, matching the single-workshop deployment this replaces.

pub mod error;
pub mod models;
pub mod repositories;
pub mod sheet;

pub use error::StoreError;
