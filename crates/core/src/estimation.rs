//! Order configurator duration, volume, and height estimation.
//!
//! Converts a list of furniture component specs plus a delivery mode into
//! per-section labor hours, then into per-section day counts using the
//! section daily capacities. Also derives the total shipping volume and
//! the minimum useful cargo height, which feed the vehicle recommender.
//!
//! Pure and total: for any input within the clamped domain the estimator
//! produces a best-effort numeric result and never fails.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::component::{ComponentKind, ComponentSpec, DeliveryMode};
use crate::rates::{
    BASE_HOURS_PER_UNIT, DISASSEMBLED_VOLUME_FACTOR, DRESSING_MODULE_WIDTH_M, PACK_BASE_HOURS,
    PACK_FACTOR_ASSEMBLED, PACK_FACTOR_DISASSEMBLED, PACK_HOURS_PER_M3, PAINT_COAT_HOURS_PER_M2,
    PAINT_PREP_HOURS_PER_M2, VENEER_HOURS_PER_M2,
};
use crate::sections::{
    capacity_hours_per_day, SEC_AMBALARE, SEC_FURNIR, SEC_PREGATIRE_VOPSITORIE, SEC_VOPSITORIE,
};

// ---------------------------------------------------------------------------
// Result type
// ---------------------------------------------------------------------------

/// Result of estimating one configured order.
///
/// Sections never touched by the configurator are absent from
/// `section_days`; the scheduler applies the norm fallback for those.
#[derive(Debug, Clone, Serialize)]
pub struct OrderEstimate {
    /// Estimated duration in days per section. Every value is >= 1.
    pub section_days: BTreeMap<String, u32>,
    /// Total shipping volume in m³, adjusted for the delivery mode.
    pub total_volume_m3: f64,
    /// Minimum useful cargo height in meters (tallest component).
    pub needed_height_m: f64,
    /// Warnings surfaced to the caller (e.g. paint + veneer over 100%).
    /// Computation proceeds with the raw percentages regardless.
    pub warnings: Vec<String>,
}

impl OrderEstimate {
    fn empty() -> Self {
        Self {
            section_days: BTreeMap::new(),
            total_volume_m3: 0.0,
            needed_height_m: 0.0,
            warnings: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Estimation
// ---------------------------------------------------------------------------

/// Estimate per-section durations, shipping volume, and needed cargo
/// height for a configured order.
///
/// An empty component list yields an empty duration map and zero volume;
/// no packaging floor is charged for an order with nothing in it.
pub fn estimate_order(components: &[ComponentSpec], delivery: DeliveryMode) -> OrderEstimate {
    if components.is_empty() {
        return OrderEstimate::empty();
    }

    let mut section_hours: BTreeMap<String, f64> = BTreeMap::new();
    let mut total_volume_m3 = 0.0;
    let mut needed_height_m: f64 = 0.0;
    let mut warnings = Vec::new();

    for (idx, comp) in components.iter().enumerate() {
        let height = comp.height_m();
        let depth = comp.depth_m();

        // Effective unit count, raw component volume, and front area.
        let (units, volume, front_area) = if comp.kind == ComponentKind::Dressing {
            // A dressing is one continuous run sliced into fixed-width
            // modules; the entered unit count is recomputed from length.
            let length = comp.total_length_m();
            let units = (length / DRESSING_MODULE_WIDTH_M).ceil().max(1.0) as u32;
            (units, length * depth * height, height * length)
        } else {
            let units = comp.units.max(1);
            let width = comp.width_m();
            let volume = height * width * depth * f64::from(units);
            (units, volume, height * width * f64::from(units))
        };

        // Fixed per-unit base hours for the always-present sections.
        for (section, hours_per_unit) in BASE_HOURS_PER_UNIT {
            *section_hours.entry(section.to_string()).or_insert(0.0) +=
                hours_per_unit * f64::from(units);
        }

        // Painted fronts: prep and coat scale with the painted share of
        // the front area.
        let paint_share = comp.paint_share();
        if paint_share > 0.0 && front_area > 0.0 {
            *section_hours
                .entry(SEC_PREGATIRE_VOPSITORIE.to_string())
                .or_insert(0.0) += PAINT_PREP_HOURS_PER_M2 * front_area * paint_share;
            *section_hours
                .entry(SEC_VOPSITORIE.to_string())
                .or_insert(0.0) += PAINT_COAT_HOURS_PER_M2 * front_area * paint_share;
        }

        // Veneered fronts.
        let veneer_share = comp.veneer_share();
        if veneer_share > 0.0 && front_area > 0.0 {
            *section_hours.entry(SEC_FURNIR.to_string()).or_insert(0.0) +=
                VENEER_HOURS_PER_M2 * front_area * veneer_share;
        }

        if comp.materials_over_limit() {
            warnings.push(format!(
                "componenta {} ({}): vopsit {}% + furnir {}% depășesc 100%",
                idx + 1,
                comp.kind.label(),
                comp.paint_percent,
                comp.veneer_percent
            ));
        }

        total_volume_m3 += volume;
        needed_height_m = needed_height_m.max(height);
    }

    // Delivery adjustments: disassembled furniture packs flatter and is
    // cheaper to wrap.
    let (volume_factor, pack_factor) = match delivery {
        DeliveryMode::Assembled => (1.0, PACK_FACTOR_ASSEMBLED),
        DeliveryMode::Disassembled => (DISASSEMBLED_VOLUME_FACTOR, PACK_FACTOR_DISASSEMBLED),
    };
    total_volume_m3 *= volume_factor;

    let pack_hours = PACK_BASE_HOURS + PACK_HOURS_PER_M3 * total_volume_m3 * pack_factor;
    *section_hours.entry(SEC_AMBALARE.to_string()).or_insert(0.0) += pack_hours;

    // Hours -> days against each section's daily capacity, minimum 1 day.
    let section_days = section_hours
        .into_iter()
        .map(|(section, hours)| {
            let capacity = capacity_hours_per_day(&section).max(1.0);
            let days = (hours / capacity).ceil().max(1.0) as u32;
            (section, days)
        })
        .collect();

    OrderEstimate {
        section_days,
        total_volume_m3: round2(total_volume_m3),
        needed_height_m: round2(needed_height_m),
        warnings,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
