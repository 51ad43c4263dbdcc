//! Project identifier allocation.
//!
//! Identifiers are `P-{year}-{NNN}` for projects and `O-{year}-{NNN}`
//! for offers, with a zero-padded three-digit per-year counter.
//! Allocation scans existing identifiers so gaps left by deleted rows
//! are never reused.

// ---------------------------------------------------------------------------
// Allocation
// ---------------------------------------------------------------------------

/// Next free project identifier for the given year.
pub fn next_project_id<'a, I>(existing_ids: I, year: i32) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    next_id(existing_ids, "P", year)
}

/// Next free offer identifier for the given year.
pub fn next_offer_id<'a, I>(existing_ids: I, year: i32) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    next_id(existing_ids, "O", year)
}

fn next_id<'a, I>(existing_ids: I, kind: &str, year: i32) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let prefix = format!("{kind}-{year}-");
    let max_seq = existing_ids
        .into_iter()
        .filter_map(|id| id.strip_prefix(&prefix))
        .filter_map(|seq| seq.parse::<u32>().ok())
        .max()
        .unwrap_or(0);
    format!("{prefix}{:03}", max_seq + 1)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_id_of_the_year() {
        assert_eq!(next_project_id([], 2024), "P-2024-001");
    }

    #[test]
    fn continues_from_the_highest_sequence() {
        let ids = ["P-2024-001", "P-2024-007", "P-2024-003"];
        assert_eq!(next_project_id(ids, 2024), "P-2024-008");
    }

    #[test]
    fn years_count_independently() {
        let ids = ["P-2023-041", "P-2024-002"];
        assert_eq!(next_project_id(ids, 2024), "P-2024-003");
        assert_eq!(next_project_id(ids, 2025), "P-2025-001");
    }

    #[test]
    fn malformed_ids_are_ignored() {
        let ids = ["P-2024-abc", "X-2024-009", "P-2024-004", ""];
        assert_eq!(next_project_id(ids, 2024), "P-2024-005");
    }

    #[test]
    fn counter_keeps_padding_past_three_digits() {
        assert_eq!(next_project_id(["P-2024-999"], 2024), "P-2024-1000");
    }

    #[test]
    fn offer_ids_use_their_own_prefix() {
        let ids = ["O-2024-002", "P-2024-009"];
        assert_eq!(next_offer_id(ids, 2024), "O-2024-003");
    }
}
