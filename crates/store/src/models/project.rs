//! Project row model.
//!
//! One row per project, mirroring the flattened spreadsheet columns the
//! workshop has always used: list-valued fields are stored as joined
//! strings (`sections`, `sections_progress`, `section_deadlines`) and
//! decoded on demand through the core codecs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use atelier_core::activity::{self, ActivityLogEntry};
use atelier_core::progress::SectionProgress;
use atelier_core::scheduling::{self, SectionDeadline};
use atelier_core::CoreError;

// ---------------------------------------------------------------------------
// Row types
// ---------------------------------------------------------------------------

pub const STATUS_ACTIVE: &str = "Activ";
pub const STATUS_FINISHED: &str = "Finalizat";

/// One payment instalment of a project's contract value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instalment {
    pub active: bool,
    pub percent: u8,
    pub amount: f64,
}

/// A project row from `proiecte.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub contact_name: String,
    #[serde(default)]
    pub contact_phone: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub floor: String,
    #[serde(default)]
    pub install_contact: String,
    /// Responsible project manager.
    #[serde(default)]
    pub responsible: String,
    /// Joined list of additional participants.
    #[serde(default)]
    pub participants: String,
    pub value: f64,
    #[serde(default)]
    pub instalments: Vec<Instalment>,
    /// Comma-joined ordered section names.
    pub sections: String,
    /// Comma-joined percentages, parallel to `sections`.
    #[serde(default)]
    pub sections_progress: String,
    /// Semicolon-joined `name: ISO-date` pairs.
    #[serde(default)]
    pub section_deadlines: String,
    #[serde(default)]
    pub progress_overall: f64,
    pub status: String,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    /// Free text plus appended `[UPD]` activity lines.
    #[serde(default)]
    pub notes: String,
}

// ---------------------------------------------------------------------------
// Decoded views
// ---------------------------------------------------------------------------

impl ProjectRecord {
    /// Decode the progress column pair.
    ///
    /// Old sheets sometimes stored `sections_progress` as `name:pct`
    /// pairs instead of a bare percentage list; detect that shape and
    /// remap it onto the section order.
    pub fn section_progress(&self) -> SectionProgress {
        if self.sections_progress.contains(':') {
            let mut sp = SectionProgress::from_columns(&self.sections, "");
            for pair in self.sections_progress.split(',') {
                if let Some((name, pct)) = pair.rsplit_once(':') {
                    let percent = pct.trim().parse::<f64>().unwrap_or(0.0).clamp(0.0, 100.0);
                    let _ = sp.set_progress(name.trim(), percent as u8);
                }
            }
            return sp;
        }
        SectionProgress::from_columns(&self.sections, &self.sections_progress)
    }

    /// Decode the per-section deadline column.
    pub fn deadlines(&self) -> Vec<SectionDeadline> {
        scheduling::parse_deadlines(&self.section_deadlines)
    }

    /// Parsed activity log from the notes blob.
    pub fn activity(&self) -> Vec<ActivityLogEntry> {
        activity::parse_activity_log(&self.notes)
    }

    pub fn is_active(&self) -> bool {
        self.status == STATUS_ACTIVE
    }

    /// Days past the planned end date as of `today`; zero or negative
    /// when on schedule, `None` for undated or finished projects.
    pub fn days_late(&self, today: NaiveDate) -> Option<i64> {
        if !self.is_active() {
            return None;
        }
        let end = self.end?;
        Some((today - end).num_days())
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Apply one operator progress update atomically: set the section's
    /// percentage, recompute the overall figure, and append the activity
    /// line. Fails without touching the record when the section is not
    /// part of this project.
    pub fn apply_progress_update(
        &mut self,
        section: &str,
        percent: u8,
        log_line: &str,
    ) -> Result<(), CoreError> {
        let mut sp = self.section_progress();
        sp.set_progress(section, percent)?;

        let (_, progress_col) = sp.to_columns();
        self.sections_progress = progress_col;
        self.progress_overall = sp.overall();
        self.notes = activity::append_entry(&self.notes, log_line);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ProjectRecord {
        ProjectRecord {
            id: "P-2024-001".into(),
            name: "Bucătărie Ionescu".into(),
            company: String::new(),
            contact_name: "Dan Ionescu".into(),
            contact_phone: String::new(),
            contact_email: String::new(),
            address: String::new(),
            floor: String::new(),
            install_contact: String::new(),
            responsible: "Mihai".into(),
            participants: String::new(),
            value: 10_000.0,
            instalments: vec![],
            sections: "CNC, Montaj".into(),
            sections_progress: "50, 50".into(),
            section_deadlines: "CNC: 2024-01-03; Montaj: 2024-01-05".into(),
            progress_overall: 50.0,
            status: STATUS_ACTIVE.into(),
            start: NaiveDate::from_ymd_opt(2024, 1, 1),
            end: NaiveDate::from_ymd_opt(2024, 1, 5),
            notes: String::new(),
        }
    }

    #[test]
    fn progress_update_recomputes_overall_and_logs() {
        let mut rec = record();
        rec.apply_progress_update("CNC", 80, "[UPD][2024-01-02 10:00][USER:Ana][SEC:CNC][ALL:0] ok | FILES: ")
            .unwrap();
        assert_eq!(rec.sections_progress, "80, 50");
        assert_eq!(rec.progress_overall, 65.0);
        assert_eq!(rec.activity().len(), 1);
    }

    #[test]
    fn invalid_section_leaves_the_record_untouched() {
        let mut rec = record();
        let err = rec.apply_progress_update("Vopsitorie", 10, "[UPD] x");
        assert!(err.is_err());
        assert_eq!(rec.sections_progress, "50, 50");
        assert_eq!(rec.progress_overall, 50.0);
        assert!(rec.notes.is_empty());
    }

    #[test]
    fn legacy_keyed_progress_column_is_remapped() {
        let mut rec = record();
        rec.sections_progress = "Montaj:20, CNC:70".into();
        let sp = rec.section_progress();
        assert_eq!(sp.percent_of("CNC"), Some(70));
        assert_eq!(sp.percent_of("Montaj"), Some(20));
    }

    #[test]
    fn deadlines_decode_from_the_column() {
        let rec = record();
        let deadlines = rec.deadlines();
        assert_eq!(deadlines.len(), 2);
        assert_eq!(deadlines[0].section, "CNC");
    }

    #[test]
    fn days_late_only_for_active_dated_projects() {
        let mut rec = record();
        let today = NaiveDate::from_ymd_opt(2024, 1, 9).unwrap();
        assert_eq!(rec.days_late(today), Some(4));

        rec.status = STATUS_FINISHED.into();
        assert_eq!(rec.days_late(today), None);

        rec.status = STATUS_ACTIVE.into();
        rec.end = None;
        assert_eq!(rec.days_late(today), None);
    }

    #[test]
    fn record_round_trips_through_json() {
        let rec = record();
        let json = serde_json::to_string(&rec).unwrap();
        let back: ProjectRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, rec.id);
        assert_eq!(back.end, rec.end);
        assert_eq!(back.sections_progress, rec.sections_progress);
    }
}
