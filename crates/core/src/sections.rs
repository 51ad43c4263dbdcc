//! The fixed production pipeline stage enumeration and per-stage norms.
//!
//! Section names are the contract shared between the estimator, the
//! scheduler, and every caller: any name outside [`SECTIONS`] must be
//! rejected or ignored upstream of the engine. Daily capacities and
//! fallback durations are workshop-wide planning norms, not per-project
//! configuration.

// ---------------------------------------------------------------------------
// Canonical section names
// ---------------------------------------------------------------------------

pub const SEC_OFERTARE: &str = "Ofertare";
pub const SEC_PROIECTARE: &str = "Proiectare & Design";
pub const SEC_TEHNOLOGICA: &str = "Tehnologică";
pub const SEC_ACHIZITII: &str = "Achiziții";
pub const SEC_CNC: &str = "CNC";
pub const SEC_DEBITARE: &str = "Debitare";
pub const SEC_FURNIR: &str = "Furnir";
pub const SEC_PREGATIRE_VOPSITORIE: &str = "Pregătire vopsitorie";
pub const SEC_VOPSITORIE: &str = "Vopsitorie";
pub const SEC_ASAMBLARE: &str = "Asamblare";
pub const SEC_CTC: &str = "CTC";
pub const SEC_AMBALARE: &str = "Ambalare";
pub const SEC_TRANSPORT: &str = "Transport (Livrare)";
pub const SEC_MONTAJ: &str = "Montaj";

/// All canonical sections, in production-line order.
pub const SECTIONS: [&str; 14] = [
    SEC_OFERTARE,
    SEC_PROIECTARE,
    SEC_TEHNOLOGICA,
    SEC_ACHIZITII,
    SEC_CNC,
    SEC_DEBITARE,
    SEC_FURNIR,
    SEC_PREGATIRE_VOPSITORIE,
    SEC_VOPSITORIE,
    SEC_ASAMBLARE,
    SEC_CTC,
    SEC_AMBALARE,
    SEC_TRANSPORT,
    SEC_MONTAJ,
];

/// Whether `name` is one of the canonical section names (exact match).
pub fn is_canonical(name: &str) -> bool {
    SECTIONS.contains(&name)
}

// ---------------------------------------------------------------------------
// Per-section norms
// ---------------------------------------------------------------------------

/// Working capacity in labor hours per day for a section.
///
/// Unknown section names get a conservative single-shift default of 8.
pub fn capacity_hours_per_day(section: &str) -> f64 {
    match section {
        SEC_OFERTARE => 12.0,
        SEC_PROIECTARE => 16.0,
        SEC_TEHNOLOGICA => 12.0,
        SEC_ACHIZITII => 12.0,
        SEC_CNC => 24.0,
        SEC_DEBITARE => 16.0,
        SEC_FURNIR => 16.0,
        SEC_PREGATIRE_VOPSITORIE => 16.0,
        SEC_VOPSITORIE => 16.0,
        SEC_ASAMBLARE => 24.0,
        SEC_CTC => 16.0,
        SEC_AMBALARE => 16.0,
        SEC_TRANSPORT => 8.0,
        SEC_MONTAJ => 16.0,
        _ => 8.0,
    }
}

/// Fallback duration in days used by the scheduler when a section has no
/// configurator-derived estimate. Unknown sections default to 1 day.
pub fn fallback_days(section: &str) -> u32 {
    match section {
        SEC_OFERTARE => 1,
        SEC_PROIECTARE => 3,
        SEC_TEHNOLOGICA => 2,
        SEC_ACHIZITII => 2,
        SEC_CNC => 2,
        SEC_DEBITARE => 1,
        SEC_FURNIR => 2,
        SEC_PREGATIRE_VOPSITORIE => 2,
        SEC_VOPSITORIE => 3,
        SEC_ASAMBLARE => 3,
        SEC_CTC => 1,
        SEC_AMBALARE => 1,
        SEC_TRANSPORT => 1,
        SEC_MONTAJ => 2,
        _ => 1,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
