//! Personnel row model.

use serde::{Deserialize, Serialize};

use crate::sheet::split_list;

/// A personnel row from `personal.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonRecord {
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    /// Joined list of sections this person works in.
    #[serde(default)]
    pub sections: String,
    /// Whether this person is a section responsible (shift lead).
    #[serde(default)]
    pub responsible: bool,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl PersonRecord {
    /// Sections split out of the legacy joined column.
    pub fn section_list(&self) -> Vec<String> {
        split_list(&self.sections)
    }

    /// Whether this person is assigned to the section, matched
    /// case-insensitively against the legacy free-text column.
    pub fn works_in(&self, section: &str) -> bool {
        let wanted = section.to_lowercase();
        self.section_list()
            .iter()
            .any(|s| s.to_lowercase() == wanted)
    }
}

/// Active people grouped under one section, for the staffing lookup.
#[derive(Debug, Clone, Serialize)]
pub struct SectionStaffing {
    pub section: String,
    /// Suggested section responsible, when one is on the roster.
    pub responsible: Option<String>,
    pub people: Vec<String>,
}

/// Active personnel assigned to the section, with the first flagged
/// responsible suggested as the lead.
pub fn section_staffing(people: &[PersonRecord], section: &str) -> SectionStaffing {
    let assigned: Vec<&PersonRecord> = people
        .iter()
        .filter(|p| p.active && p.works_in(section))
        .collect();

    SectionStaffing {
        section: section.to_string(),
        responsible: assigned
            .iter()
            .find(|p| p.responsible)
            .map(|p| p.name.clone()),
        people: assigned.iter().map(|p| p.name.clone()).collect(),
    }
}
