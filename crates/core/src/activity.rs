//! The `[UPD]` activity-log line grammar.
//!
//! Operator updates are appended to a project's free-text notes field as
//! single structured lines:
//!
//! ```text
//! [UPD][2024-03-01 14:30][USER:Ana][SEC:CNC][ALL:1] text | FILES: a.pdf, b.png
//! ```
//!
//! The grammar is isolated here so the tag format can be versioned in one
//! place. Parsing is total: a line that looks like a log entry but fails
//! structured-field extraction degrades to a best-effort entry carrying
//! the raw line as text, and never raises.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Grammar constants
// ---------------------------------------------------------------------------

/// Marker identifying a structured update line inside free-text notes.
pub const UPDATE_TAG: &str = "[UPD]";

const USER_PREFIX: &str = "[USER:";
const SECTION_PREFIX: &str = "[SEC:";
const VISIBLE_ALL_TAG: &str = "[ALL:1]";
const FILES_SEPARATOR: &str = " | FILES: ";

// ---------------------------------------------------------------------------
// Entry type
// ---------------------------------------------------------------------------

/// One parsed operator update. Append-only: entries are never edited or
/// deleted, only added as new updates occur.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityLogEntry {
    /// Wall-clock stamp as written (`YYYY-MM-DD HH:MM`); empty when the
    /// line was malformed.
    pub timestamp: String,
    pub user: String,
    pub section: String,
    pub visible_to_all: bool,
    pub text: String,
    pub files: Vec<String>,
}

impl ActivityLogEntry {
    /// Whether structured-field extraction failed and only the raw line
    /// survived as text.
    pub fn is_degraded(&self) -> bool {
        self.timestamp.is_empty() && self.user.is_empty() && self.section.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// Render one update as a structured log line.
pub fn format_entry(
    timestamp: &str,
    user: &str,
    section: &str,
    visible_to_all: bool,
    note: &str,
    files: &[String],
) -> String {
    format!(
        "{UPDATE_TAG}[{timestamp}]{USER_PREFIX}{user}]{SECTION_PREFIX}{section}][ALL:{}] {}{FILES_SEPARATOR}{}",
        u8::from(visible_to_all),
        note.trim(),
        files.join(", "),
    )
}

/// Append a log line to an existing notes blob, newline-separated.
pub fn append_entry(notes: &str, line: &str) -> String {
    if notes.trim().is_empty() {
        line.trim().to_string()
    } else {
        format!("{}\n{}", notes.trim_end(), line.trim())
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Extract all update entries from a free-text notes blob.
///
/// Lines without the `[UPD]` marker are ignored (they are ordinary
/// notes). Marked lines that fail extraction become degraded entries.
pub fn parse_activity_log(notes: &str) -> Vec<ActivityLogEntry> {
    notes
        .lines()
        .map(str::trim)
        .filter(|line| line.contains(UPDATE_TAG))
        .map(|line| parse_line(line).unwrap_or_else(|| degraded(line)))
        .collect()
}

/// Last `limit` raw update lines mentioning the given section, oldest
/// first. Used for the operator board's per-section history.
pub fn section_history(notes: &str, section: &str, limit: usize) -> Vec<String> {
    let tag = format!("{SECTION_PREFIX}{section}]");
    let matching: Vec<String> = notes
        .lines()
        .map(str::trim)
        .filter(|line| line.contains(UPDATE_TAG) && line.contains(&tag))
        .map(str::to_string)
        .collect();
    let skip = matching.len().saturating_sub(limit);
    matching.into_iter().skip(skip).collect()
}

fn parse_line(line: &str) -> Option<ActivityLogEntry> {
    // The timestamp is the bracket group immediately after the marker.
    let after_tag = &line[line.find(UPDATE_TAG)? + UPDATE_TAG.len()..];
    let ts_body = after_tag.strip_prefix('[')?;
    let ts_end = ts_body.find(']')?;
    let timestamp = ts_body[..ts_end].to_string();
    if timestamp.is_empty() {
        return None;
    }

    let user = bracket_field(line, USER_PREFIX).unwrap_or_default();
    let section = bracket_field(line, SECTION_PREFIX).unwrap_or_default();
    let visible_to_all = line.contains(VISIBLE_ALL_TAG);

    // Free text starts after the first "] " (tag groups are back-to-back,
    // so the first bracket followed by a space closes the header).
    let body = match line.find("] ") {
        Some(pos) => &line[pos + 2..],
        None => "",
    };
    let (text, files) = match body.split_once(FILES_SEPARATOR) {
        Some((text, files)) => (
            text.trim().to_string(),
            files
                .split(',')
                .map(str::trim)
                .filter(|f| !f.is_empty())
                .map(str::to_string)
                .collect(),
        ),
        None => (body.trim().to_string(), Vec::new()),
    };

    Some(ActivityLogEntry {
        timestamp,
        user,
        section,
        visible_to_all,
        text,
        files,
    })
}

fn bracket_field(line: &str, prefix: &str) -> Option<String> {
    let start = line.find(prefix)? + prefix.len();
    let end = line[start..].find(']')?;
    Some(line[start..start + end].to_string())
}

fn degraded(line: &str) -> ActivityLogEntry {
    ActivityLogEntry {
        timestamp: String::new(),
        user: String::new(),
        section: String::new(),
        visible_to_all: false,
        text: line.to_string(),
        files: Vec::new(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatted_entry_parses_back() {
        let files = vec!["att/p1/CNC/plan.pdf".to_string()];
        let line = format_entry("2024-03-01 14:30", "Ana", "CNC", true, "gata debitarea", &files);
        let entries = parse_activity_log(&line);

        assert_eq!(entries.len(), 1);
        let e = &entries[0];
        assert_eq!(e.timestamp, "2024-03-01 14:30");
        assert_eq!(e.user, "Ana");
        assert_eq!(e.section, "CNC");
        assert!(e.visible_to_all);
        assert_eq!(e.text, "gata debitarea");
        assert_eq!(e.files, files);
        assert!(!e.is_degraded());
    }

    #[test]
    fn entry_without_files_has_empty_list() {
        let line = format_entry("2024-03-01 09:00", "Mihai", "Montaj", false, "început", &[]);
        let entries = parse_activity_log(&line);
        assert!(entries[0].files.is_empty());
        assert!(!entries[0].visible_to_all);
    }

    #[test]
    fn plain_note_lines_are_ignored() {
        let notes = "PM: Mihai Pop\nobservație liberă\n[UPD][2024-01-05 08:00][USER:Ana][SEC:CNC][ALL:0] ok | FILES: ";
        let entries = parse_activity_log(notes);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].section, "CNC");
    }

    #[test]
    fn parsing_is_total_on_arbitrary_input() {
        for notes in ["", "[UPD]", "[UPD] fara campuri", "[UPD][", "][UPD][]"] {
            // Must not panic, whatever comes back.
            let _ = parse_activity_log(notes);
        }
    }

    #[test]
    fn malformed_line_degrades_to_raw_text() {
        let entries = parse_activity_log("[UPD] missing every field");
        assert_eq!(entries.len(), 1);
        assert!(entries[0].is_degraded());
        assert_eq!(entries[0].text, "[UPD] missing every field");
    }

    #[test]
    fn missing_user_and_section_default_to_empty() {
        let entries = parse_activity_log("[UPD][2024-01-01 10:00] doar text");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].timestamp, "2024-01-01 10:00");
        assert_eq!(entries[0].user, "");
        assert_eq!(entries[0].section, "");
        assert_eq!(entries[0].text, "doar text");
    }

    #[test]
    fn append_entry_separates_with_newlines() {
        let first = append_entry("", "[UPD][a][USER:x][SEC:y][ALL:0] unu | FILES: ");
        assert!(!first.starts_with('\n'));
        let second = append_entry(&first, "[UPD][b][USER:x][SEC:y][ALL:0] doi | FILES: ");
        assert_eq!(second.lines().count(), 2);
    }

    #[test]
    fn section_history_filters_and_limits() {
        let mut notes = String::new();
        for i in 0..8 {
            let line = format_entry(
                &format!("2024-01-0{} 10:00", (i % 9) + 1),
                "Ana",
                if i % 2 == 0 { "CNC" } else { "Montaj" },
                false,
                &format!("pas {i}"),
                &[],
            );
            notes = append_entry(&notes, &line);
        }
        let hist = section_history(&notes, "CNC", 3);
        assert_eq!(hist.len(), 3);
        assert!(hist.iter().all(|l| l.contains("[SEC:CNC]")));
        // Oldest-first within the window, most recent entry last.
        assert!(hist.last().unwrap().contains("pas 6"));
    }
}
