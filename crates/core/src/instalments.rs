//! Payment instalment splits for project contracts.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Recommended splits
// ---------------------------------------------------------------------------

/// Recommended percentage split for the given number of instalments.
///
/// Counts of four or more get the four-way split; the percentages of
/// every returned split sum to 100.
pub fn recommended_split(count: u32) -> Vec<u8> {
    match count {
        0 | 1 => vec![100],
        2 => vec![70, 30],
        3 => vec![50, 45, 5],
        _ => vec![50, 25, 20, 5],
    }
}

/// Absolute instalment amounts for a contract value under a percentage
/// split, each rounded to two decimals.
pub fn split_amounts(value: f64, percents: &[u8]) -> Vec<f64> {
    percents
        .iter()
        .map(|&p| round2(value * f64::from(p) / 100.0))
        .collect()
}

/// Check that a custom split covers the whole contract value.
pub fn validate_split(percents: &[u8]) -> Result<(), CoreError> {
    let sum: u32 = percents.iter().map(|&p| u32::from(p)).sum();
    if sum != 100 {
        return Err(CoreError::Validation(format!(
            "procentele tranșelor însumează {sum}%, nu 100%"
        )));
    }
    Ok(())
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_recommended_split_sums_to_100() {
        for count in 0..8 {
            let split = recommended_split(count);
            let sum: u32 = split.iter().map(|&p| u32::from(p)).sum();
            assert_eq!(sum, 100, "count {count}");
            assert!(validate_split(&split).is_ok());
        }
    }

    #[test]
    fn known_splits() {
        assert_eq!(recommended_split(1), vec![100]);
        assert_eq!(recommended_split(2), vec![70, 30]);
        assert_eq!(recommended_split(3), vec![50, 45, 5]);
        assert_eq!(recommended_split(4), vec![50, 25, 20, 5]);
        assert_eq!(recommended_split(9), vec![50, 25, 20, 5]);
    }

    #[test]
    fn amounts_follow_percentages() {
        let amounts = split_amounts(12_500.0, &[70, 30]);
        assert_eq!(amounts, vec![8_750.0, 3_750.0]);
    }

    #[test]
    fn amounts_round_to_two_decimals() {
        let amounts = split_amounts(100.0, &[50, 45, 5]);
        assert_eq!(amounts, vec![50.0, 45.0, 5.0]);
        let odd = split_amounts(999.99, &[70, 30]);
        assert_eq!(odd, vec![699.99, 300.0]);
    }

    #[test]
    fn bad_split_is_rejected() {
        match validate_split(&[60, 30]) {
            Err(CoreError::Validation(msg)) => assert!(msg.contains("90%")),
            other => panic!("expected Validation, got {other:?}"),
        }
    }
}
