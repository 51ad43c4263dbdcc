//! Offer row model.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Lifecycle of a quotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferStatus {
    Pending,
    Accepted,
    Declined,
}

/// An offer row from `oferte.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferRecord {
    pub id: String,
    pub client: String,
    #[serde(default)]
    pub contact_phone: String,
    #[serde(default)]
    pub contact_email: String,
    pub value: f64,
    /// Free-text summary of the configured components.
    #[serde(default)]
    pub summary: String,
    pub status: OfferStatus,
    pub created: NaiveDate,
    pub valid_until: NaiveDate,
    /// Set when the offer is accepted and turned into a project.
    #[serde(default)]
    pub accepted: Option<NaiveDate>,
}

impl OfferRecord {
    /// Push the validity window out by the given number of days.
    pub fn extend(&mut self, days: u32) {
        self.valid_until += Duration::days(i64::from(days));
    }

    /// Mark accepted; the caller turns it into a project.
    pub fn accept(&mut self, on: NaiveDate) {
        self.status = OfferStatus::Accepted;
        self.accepted = Some(on);
    }

    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.status == OfferStatus::Pending && today > self.valid_until
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn offer() -> OfferRecord {
        OfferRecord {
            id: "O-2024-001".into(),
            client: "Ionescu SRL".into(),
            contact_phone: String::new(),
            contact_email: String::new(),
            value: 8_000.0,
            summary: "2x Dulap simplu".into(),
            status: OfferStatus::Pending,
            created: date(2024, 1, 1),
            valid_until: date(2024, 1, 31),
            accepted: None,
        }
    }

    #[test]
    fn extend_pushes_validity_forward() {
        let mut o = offer();
        o.extend(15);
        assert_eq!(o.valid_until, date(2024, 2, 15));
    }

    #[test]
    fn expiry_applies_only_to_pending_offers() {
        let mut o = offer();
        assert!(!o.is_expired(date(2024, 1, 31)));
        assert!(o.is_expired(date(2024, 2, 1)));
        o.accept(date(2024, 2, 1));
        assert!(!o.is_expired(date(2024, 2, 1)));
        assert_eq!(o.status, OfferStatus::Accepted);
        assert_eq!(o.accepted, Some(date(2024, 2, 1)));
    }
}
