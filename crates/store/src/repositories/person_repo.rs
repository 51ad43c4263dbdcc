//! Repository for the `personal.json` sheet.

use std::path::Path;

use crate::error::StoreError;
use crate::models::person::PersonRecord;
use crate::repositories::Sheet;

pub const PERSONNEL_SHEET: &str = "personal.json";

/// Read/write access to personnel rows, keyed by name.
pub trait PersonRepository: Send + Sync {
    fn list(&self) -> Result<Vec<PersonRecord>, StoreError>;
    fn append(&self, record: PersonRecord) -> Result<(), StoreError>;
    fn replace(&self, record: PersonRecord) -> Result<PersonRecord, StoreError>;
}

pub struct SheetPersonRepo {
    sheet: Sheet<PersonRecord>,
}

impl SheetPersonRepo {
    pub fn open(data_dir: &Path) -> Result<Self, StoreError> {
        Ok(Self {
            sheet: Sheet::open(data_dir.join(PERSONNEL_SHEET))?,
        })
    }
}

impl PersonRepository for SheetPersonRepo {
    fn list(&self) -> Result<Vec<PersonRecord>, StoreError> {
        self.sheet.snapshot()
    }

    fn append(&self, record: PersonRecord) -> Result<(), StoreError> {
        self.sheet.append(record)
    }

    fn replace(&self, record: PersonRecord) -> Result<PersonRecord, StoreError> {
        let name = record.name.clone();
        if !self.sheet.replace(|r| r.name == name, record.clone())? {
            return Err(StoreError::NotFound {
                entity: "person",
                id: name,
            });
        }
        Ok(record)
    }
}
