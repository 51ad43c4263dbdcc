//! Lateness risk classification for active projects.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Buckets
// ---------------------------------------------------------------------------

/// Dashboard risk bucket, derived from how many days a project is past
/// its planned end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskBucket {
    OnTime,
    Warning,
    Critical,
}

impl RiskBucket {
    /// Classify by days past the planned end (non-positive means on or
    /// ahead of schedule).
    pub fn from_days_late(days_late: i64) -> Self {
        if days_late <= 0 {
            RiskBucket::OnTime
        } else if days_late <= 3 {
            RiskBucket::Warning
        } else {
            RiskBucket::Critical
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskBucket::OnTime => "La termen",
            RiskBucket::Warning => "Avertizare (1–3 zile)",
            RiskBucket::Critical => "Critic (>3 zile)",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_boundaries() {
        assert_eq!(RiskBucket::from_days_late(-10), RiskBucket::OnTime);
        assert_eq!(RiskBucket::from_days_late(0), RiskBucket::OnTime);
        assert_eq!(RiskBucket::from_days_late(1), RiskBucket::Warning);
        assert_eq!(RiskBucket::from_days_late(3), RiskBucket::Warning);
        assert_eq!(RiskBucket::from_days_late(4), RiskBucket::Critical);
        assert_eq!(RiskBucket::from_days_late(100), RiskBucket::Critical);
    }

    #[test]
    fn labels_are_stable() {
        assert_eq!(RiskBucket::OnTime.label(), "La termen");
        assert_eq!(RiskBucket::Warning.label(), "Avertizare (1–3 zile)");
        assert_eq!(RiskBucket::Critical.label(), "Critic (>3 zile)");
    }
}
