//! Repository for the `proiecte.json` sheet.

use std::path::Path;

use crate::error::StoreError;
use crate::models::project::ProjectRecord;
use crate::repositories::Sheet;

pub const PROJECTS_SHEET: &str = "proiecte.json";

/// Read/write access to project rows, keyed by project id.
pub trait ProjectRepository: Send + Sync {
    fn list(&self) -> Result<Vec<ProjectRecord>, StoreError>;
    fn get(&self, id: &str) -> Result<ProjectRecord, StoreError>;
    fn append(&self, record: ProjectRecord) -> Result<(), StoreError>;
    /// Overwrite the row with the same id. Last write wins.
    fn replace(&self, record: ProjectRecord) -> Result<ProjectRecord, StoreError>;
}

pub struct SheetProjectRepo {
    sheet: Sheet<ProjectRecord>,
}

impl SheetProjectRepo {
    pub fn open(data_dir: &Path) -> Result<Self, StoreError> {
        Ok(Self {
            sheet: Sheet::open(data_dir.join(PROJECTS_SHEET))?,
        })
    }
}

impl ProjectRepository for SheetProjectRepo {
    fn list(&self) -> Result<Vec<ProjectRecord>, StoreError> {
        self.sheet.snapshot()
    }

    fn get(&self, id: &str) -> Result<ProjectRecord, StoreError> {
        self.sheet
            .find(|r| r.id == id)?
            .ok_or_else(|| StoreError::NotFound {
                entity: "project",
                id: id.to_string(),
            })
    }

    fn append(&self, record: ProjectRecord) -> Result<(), StoreError> {
        self.sheet.append(record)
    }

    fn replace(&self, record: ProjectRecord) -> Result<ProjectRecord, StoreError> {
        let id = record.id.clone();
        if !self.sheet.replace(|r| r.id == id, record.clone())? {
            return Err(StoreError::NotFound {
                entity: "project",
                id,
            });
        }
        Ok(record)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
