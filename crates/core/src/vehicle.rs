//! Delivery vehicle recommendation from total shipping volume.
//!
//! A pure step function over fixed volume thresholds. A volume exactly at
//! a boundary belongs to the larger tier (strict `<` comparisons), so the
//! recommended vehicle always fits the load.

// ---------------------------------------------------------------------------
// Tier thresholds (m³)
// ---------------------------------------------------------------------------

pub const SMALL_VAN_MAX_M3: f64 = 3.0;
pub const MEDIUM_VAN_MAX_M3: f64 = 6.0;
pub const LARGE_VAN_MAX_M3: f64 = 12.0;
pub const TRUCK_3_5T_MAX_M3: f64 = 20.0;

// ---------------------------------------------------------------------------
// Recommendation
// ---------------------------------------------------------------------------

/// Recommend a vehicle size class for the given shipping volume.
pub fn recommend_vehicle(total_volume_m3: f64) -> &'static str {
    if total_volume_m3 < SMALL_VAN_MAX_M3 {
        "Autoutilitară mică (≈3 m³)"
    } else if total_volume_m3 < MEDIUM_VAN_MAX_M3 {
        "Van mediu (≈6 m³)"
    } else if total_volume_m3 < LARGE_VAN_MAX_M3 {
        "Van mare (≈12 m³)"
    } else if total_volume_m3 < TRUCK_3_5T_MAX_M3 {
        "Camion 3.5T (≈20 m³)"
    } else {
        "Camion >7.5T"
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
