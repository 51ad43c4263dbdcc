//! Per-section progress aggregation.
//!
//! A project carries an ordered pair of section names and percentages of
//! equal length, persisted as two comma-joined spreadsheet columns. The
//! overall project progress is the arithmetic mean of the section
//! percentages, rounded to one decimal.

use serde::Serialize;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Section progress
// ---------------------------------------------------------------------------

/// Parallel (sections, percentages) lists for one project.
///
/// Invariant: the lists always have equal length and every percentage is
/// in [0, 100]. Constructors and mutators maintain this; column parsing
/// pads or truncates tolerantly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionProgress {
    sections: Vec<String>,
    percentages: Vec<u8>,
}

impl SectionProgress {
    /// Fresh progress for the given sections, all at 0%.
    pub fn new(sections: Vec<String>) -> Self {
        let percentages = vec![0; sections.len()];
        Self {
            sections,
            percentages,
        }
    }

    /// Parse the persisted `sections` and `sections_progress` columns.
    ///
    /// Tolerant by design: non-numeric percentages become 0, a short
    /// percentage list is padded with zeros, a long one is truncated.
    pub fn from_columns(sections_col: &str, progress_col: &str) -> Self {
        let sections: Vec<String> = sections_col
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        let mut percentages: Vec<u8> = progress_col
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(|p| {
                p.parse::<f64>()
                    .map(|v| v.clamp(0.0, 100.0) as u8)
                    .unwrap_or(0)
            })
            .collect();

        percentages.resize(sections.len(), 0);
        Self {
            sections,
            percentages,
        }
    }

    /// Serialize back to the comma-joined column pair. Round-trips with
    /// [`SectionProgress::from_columns`].
    pub fn to_columns(&self) -> (String, String) {
        let sections = self.sections.join(", ");
        let percentages = self
            .percentages
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        (sections, percentages)
    }

    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    pub fn percentages(&self) -> &[u8] {
        &self.percentages
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Current percentage for a section, if the project has it.
    pub fn percent_of(&self, section: &str) -> Option<u8> {
        let idx = self.sections.iter().position(|s| s == section)?;
        Some(self.percentages[idx])
    }

    /// Replace one section's percentage (clamped to 100). Fails with
    /// [`CoreError::InvalidSection`] when the section is not on the
    /// project; no other entry is touched either way.
    pub fn set_progress(&mut self, section: &str, percent: u8) -> Result<(), CoreError> {
        let idx = self
            .sections
            .iter()
            .position(|s| s == section)
            .ok_or_else(|| CoreError::InvalidSection {
                section: section.to_string(),
            })?;
        self.percentages[idx] = percent.min(100);
        Ok(())
    }

    /// Overall progress: mean of the percentages rounded to one decimal,
    /// 0 for a project with no sections.
    pub fn overall(&self) -> f64 {
        if self.percentages.is_empty() {
            return 0.0;
        }
        let sum: u32 = self.percentages.iter().map(|&p| u32::from(p)).sum();
        let mean = f64::from(sum) / self.percentages.len() as f64;
        (mean * 10.0).round() / 10.0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
