//! Repository traits and their sheet-file implementations.
//!
//! The HTTP layer holds `Arc<dyn …Repository>` handles, so the backing
//! store can be swapped (in tests or later migrations) without touching
//! handlers. The sheet implementations keep the full row list in memory
//! behind an `RwLock` and rewrite the whole file on every mutation.

mod offer_repo;
mod person_repo;
mod project_repo;

pub use offer_repo::{OfferRepository, SheetOfferRepo};
pub use person_repo::{PersonRepository, SheetPersonRepo};
pub use project_repo::{ProjectRepository, SheetProjectRepo};

use std::path::PathBuf;
use std::sync::RwLock;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StoreError;
use crate::sheet;

/// One in-memory sheet plus its backing file.
pub(crate) struct Sheet<T> {
    path: PathBuf,
    rows: RwLock<Vec<T>>,
}

impl<T> Sheet<T>
where
    T: Clone + Serialize + DeserializeOwned,
{
    /// Open a sheet, loading existing rows (missing file means empty).
    pub(crate) fn open(path: PathBuf) -> Result<Self, StoreError> {
        let rows = sheet::load_rows(&path)?;
        Ok(Self {
            path,
            rows: RwLock::new(rows),
        })
    }

    pub(crate) fn snapshot(&self) -> Result<Vec<T>, StoreError> {
        let rows = self.rows.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(rows.clone())
    }

    pub(crate) fn find<P>(&self, pred: P) -> Result<Option<T>, StoreError>
    where
        P: Fn(&T) -> bool,
    {
        let rows = self.rows.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(rows.iter().find(|r| pred(r)).cloned())
    }

    /// Append one row and rewrite the file while holding the write lock.
    pub(crate) fn append(&self, row: T) -> Result<(), StoreError> {
        let mut rows = self.rows.write().map_err(|_| StoreError::LockPoisoned)?;
        rows.push(row);
        sheet::store_rows(&self.path, &rows)
    }

    /// Replace the first row matching the predicate and rewrite the
    /// file. Returns whether a row matched.
    pub(crate) fn replace<P>(&self, pred: P, row: T) -> Result<bool, StoreError>
    where
        P: Fn(&T) -> bool,
    {
        let mut rows = self.rows.write().map_err(|_| StoreError::LockPoisoned)?;
        match rows.iter_mut().find(|r| pred(r)) {
            Some(slot) => *slot = row,
            None => return Ok(false),
        }
        sheet::store_rows(&self.path, &rows)?;
        Ok(true)
    }
}
