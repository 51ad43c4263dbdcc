//! Repository for the `oferte.json` sheet.

use std::path::Path;

use crate::error::StoreError;
use crate::models::offer::OfferRecord;
use crate::repositories::Sheet;

pub const OFFERS_SHEET: &str = "oferte.json";

/// Read/write access to offer rows, keyed by offer id.
pub trait OfferRepository: Send + Sync {
    fn list(&self) -> Result<Vec<OfferRecord>, StoreError>;
    fn get(&self, id: &str) -> Result<OfferRecord, StoreError>;
    fn append(&self, record: OfferRecord) -> Result<(), StoreError>;
    fn replace(&self, record: OfferRecord) -> Result<OfferRecord, StoreError>;
}

pub struct SheetOfferRepo {
    sheet: Sheet<OfferRecord>,
}

impl SheetOfferRepo {
    pub fn open(data_dir: &Path) -> Result<Self, StoreError> {
        Ok(Self {
            sheet: Sheet::open(data_dir.join(OFFERS_SHEET))?,
        })
    }
}

impl OfferRepository for SheetOfferRepo {
    fn list(&self) -> Result<Vec<OfferRecord>, StoreError> {
        self.sheet.snapshot()
    }

    fn get(&self, id: &str) -> Result<OfferRecord, StoreError> {
        self.sheet
            .find(|r| r.id == id)?
            .ok_or_else(|| StoreError::NotFound {
                entity: "offer",
                id: id.to_string(),
            })
    }

    fn append(&self, record: OfferRecord) -> Result<(), StoreError> {
        self.sheet.append(record)
    }

    fn replace(&self, record: OfferRecord) -> Result<OfferRecord, StoreError> {
        let id = record.id.clone();
        if !self.sheet.replace(|r| r.id == id, record.clone())? {
            return Err(StoreError::NotFound { entity: "offer", id });
        }
        Ok(record)
    }
}
