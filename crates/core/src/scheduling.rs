//! Sequential deadline scheduling for a project's production sections.
//!
//! The model is a strict production line: a project occupies one section
//! at a time, each section starting the day its predecessor ends. This
//! is a deliberate simplification; no cross-project resource contention
//! is modeled.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::sections;

// ---------------------------------------------------------------------------
// Schedule types
// ---------------------------------------------------------------------------

/// Completion date for one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionDeadline {
    pub section: String,
    pub finish: NaiveDate,
}

/// Ordered per-section completion dates plus the overall end date.
///
/// Completion dates are non-decreasing in traversal order; with no
/// sections the overall end equals the start date.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectSchedule {
    pub deadlines: Vec<SectionDeadline>,
    pub overall_end: NaiveDate,
}

// ---------------------------------------------------------------------------
// Scheduling
// ---------------------------------------------------------------------------

/// Compute sequential per-section completion dates from a start date.
///
/// Duration resolution per section: `durations`, then `fallback`, then
/// 1 day; never less than 1 day either way.
pub fn schedule_sections(
    start: NaiveDate,
    ordered_sections: &[String],
    durations: &BTreeMap<String, u32>,
    fallback: &BTreeMap<String, u32>,
) -> ProjectSchedule {
    let mut deadlines = Vec::with_capacity(ordered_sections.len());
    let mut cursor = start;

    for section in ordered_sections {
        let days = durations
            .get(section)
            .or_else(|| fallback.get(section))
            .copied()
            .unwrap_or(1)
            .max(1);
        let finish = cursor + Duration::days(i64::from(days));
        deadlines.push(SectionDeadline {
            section: section.clone(),
            finish,
        });
        cursor = finish;
    }

    let overall_end = deadlines.iter().map(|d| d.finish).max().unwrap_or(start);
    ProjectSchedule {
        deadlines,
        overall_end,
    }
}

/// Schedule against the workshop norm fallback table.
pub fn schedule_with_norms(
    start: NaiveDate,
    ordered_sections: &[String],
    durations: &BTreeMap<String, u32>,
) -> ProjectSchedule {
    let fallback = ordered_sections
        .iter()
        .map(|s| (s.clone(), sections::fallback_days(s)))
        .collect();
    schedule_sections(start, ordered_sections, durations, &fallback)
}

// ---------------------------------------------------------------------------
// Deadline column codec
// ---------------------------------------------------------------------------

/// Encode deadlines as the persisted `section_deadlines` column:
/// semicolon-joined `name: ISO-date` pairs.
pub fn encode_deadlines(deadlines: &[SectionDeadline]) -> String {
    deadlines
        .iter()
        .map(|d| format!("{}: {}", d.section, d.finish))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Parse a persisted `section_deadlines` column. Malformed pairs are
/// skipped; the parse itself never fails.
pub fn parse_deadlines(column: &str) -> Vec<SectionDeadline> {
    column
        .split(';')
        .filter_map(|pair| {
            let (name, date) = pair.rsplit_once(':')?;
            let finish = date.trim().parse::<NaiveDate>().ok()?;
            let section = name.trim();
            if section.is_empty() {
                return None;
            }
            Some(SectionDeadline {
                section: section.to_string(),
                finish,
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Capacity-aware start suggestion
// ---------------------------------------------------------------------------

/// Suggest the first date on or after `start_after` on which fewer than
/// `capacity` of the given project windows are active. Gives up after a
/// year and returns `start_after` unchanged.
pub fn suggested_start(
    windows: &[(Option<NaiveDate>, Option<NaiveDate>)],
    start_after: NaiveDate,
    capacity: usize,
) -> NaiveDate {
    let mut probe = start_after;
    for _ in 0..365 {
        let active = windows
            .iter()
            .filter(|(start, end)| match (start, end) {
                (Some(s), Some(e)) => *s <= probe && probe <= *e,
                _ => false,
            })
            .count();
        if active < capacity {
            return probe;
        }
        probe += Duration::days(1);
    }
    start_after
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn secs(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn sections_run_back_to_back() {
        let durations = BTreeMap::from([("A".to_string(), 2), ("B".to_string(), 3)]);
        let sched = schedule_sections(date(2024, 1, 1), &secs(&["A", "B"]), &durations, &BTreeMap::new());

        assert_eq!(sched.deadlines[0].finish, date(2024, 1, 3));
        assert_eq!(sched.deadlines[1].finish, date(2024, 1, 6));
        assert_eq!(sched.overall_end, date(2024, 1, 6));
    }

    #[test]
    fn empty_section_list_ends_at_start() {
        let sched = schedule_sections(date(2024, 1, 1), &[], &BTreeMap::new(), &BTreeMap::new());
        assert!(sched.deadlines.is_empty());
        assert_eq!(sched.overall_end, date(2024, 1, 1));
    }

    #[test]
    fn fallback_used_when_duration_missing() {
        let fallback = BTreeMap::from([("B".to_string(), 4)]);
        let sched = schedule_sections(
            date(2024, 1, 1),
            &secs(&["A", "B"]),
            &BTreeMap::new(),
            &fallback,
        );
        // A absent from both maps -> 1 day; B from fallback -> 4 days.
        assert_eq!(sched.deadlines[0].finish, date(2024, 1, 2));
        assert_eq!(sched.deadlines[1].finish, date(2024, 1, 6));
    }

    #[test]
    fn zero_day_durations_are_bumped_to_one() {
        let durations = BTreeMap::from([("A".to_string(), 0)]);
        let sched = schedule_sections(date(2024, 1, 1), &secs(&["A"]), &durations, &BTreeMap::new());
        assert_eq!(sched.deadlines[0].finish, date(2024, 1, 2));
    }

    #[test]
    fn deadlines_never_decrease_in_order() {
        let durations = BTreeMap::from([
            ("CNC".to_string(), 2),
            ("Vopsitorie".to_string(), 3),
            ("Montaj".to_string(), 1),
        ]);
        let sched = schedule_sections(
            date(2024, 3, 10),
            &secs(&["CNC", "Vopsitorie", "Montaj"]),
            &durations,
            &BTreeMap::new(),
        );
        for pair in sched.deadlines.windows(2) {
            assert!(pair[0].finish <= pair[1].finish);
        }
        assert_eq!(sched.overall_end, sched.deadlines.last().unwrap().finish);
    }

    #[test]
    fn norm_fallback_covers_canonical_sections() {
        let sched = schedule_with_norms(
            date(2024, 1, 1),
            &secs(&["Proiectare & Design", "CNC"]),
            &BTreeMap::new(),
        );
        // Norms: 3 days of design, then 2 days of CNC.
        assert_eq!(sched.deadlines[0].finish, date(2024, 1, 4));
        assert_eq!(sched.deadlines[1].finish, date(2024, 1, 6));
    }

    #[test]
    fn deadline_column_round_trips() {
        let durations = BTreeMap::from([("CNC".to_string(), 2), ("Montaj".to_string(), 1)]);
        let sched = schedule_sections(
            date(2024, 1, 1),
            &secs(&["CNC", "Montaj"]),
            &durations,
            &BTreeMap::new(),
        );
        let encoded = encode_deadlines(&sched.deadlines);
        assert_eq!(encoded, "CNC: 2024-01-03; Montaj: 2024-01-04");
        assert_eq!(parse_deadlines(&encoded), sched.deadlines);
    }

    #[test]
    fn malformed_deadline_pairs_are_skipped() {
        let parsed = parse_deadlines("CNC: 2024-01-03; garbage; : 2024-01-05; Montaj: not-a-date");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].section, "CNC");
    }

    #[test]
    fn section_names_with_parentheses_survive_the_codec() {
        let deadlines = vec![SectionDeadline {
            section: "Transport (Livrare)".to_string(),
            finish: date(2024, 2, 1),
        }];
        let parsed = parse_deadlines(&encode_deadlines(&deadlines));
        assert_eq!(parsed, deadlines);
    }

    #[test]
    fn suggested_start_skips_full_days() {
        // Two projects active on Jan 1-2, capacity of two -> first free
        // day is Jan 3.
        let windows = vec![
            (Some(date(2024, 1, 1)), Some(date(2024, 1, 2))),
            (Some(date(2024, 1, 1)), Some(date(2024, 1, 2))),
        ];
        assert_eq!(suggested_start(&windows, date(2024, 1, 1), 2), date(2024, 1, 3));
    }

    #[test]
    fn suggested_start_with_open_capacity_is_immediate() {
        let windows = vec![(Some(date(2024, 1, 1)), Some(date(2024, 6, 1)))];
        assert_eq!(suggested_start(&windows, date(2024, 1, 5), 5), date(2024, 1, 5));
    }

    #[test]
    fn undated_windows_do_not_count_as_active() {
        let windows = vec![(None, Some(date(2024, 1, 2))), (Some(date(2024, 1, 1)), None)];
        assert_eq!(suggested_start(&windows, date(2024, 1, 1), 1), date(2024, 1, 1));
    }
}
