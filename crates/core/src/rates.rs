//! Measurement and rate tables for the order configurator.
//!
//! Static coefficients mapping furniture component types and material
//! processing to labor hours and volumes. Values are workshop planning
//! norms (simplified, per-unit) rather than measured throughput.

use crate::sections::{SEC_AMBALARE, SEC_ASAMBLARE, SEC_CNC, SEC_CTC};

// ---------------------------------------------------------------------------
// Base labor hours per unit
// ---------------------------------------------------------------------------

/// Fixed per-unit labor hours charged to the always-present sections for
/// every cabinet-like component. The packaging entry here is the per-unit
/// handling share, on top of the volume-driven packaging hours.
pub const BASE_HOURS_PER_UNIT: [(&str, f64); 4] = [
    (SEC_CNC, 2.5),
    (SEC_ASAMBLARE, 1.8),
    (SEC_CTC, 0.4),
    (SEC_AMBALARE, 0.4),
];

// ---------------------------------------------------------------------------
// Material processing rates (hours per m² of front area)
// ---------------------------------------------------------------------------

pub const PAINT_PREP_HOURS_PER_M2: f64 = 1.5;
pub const PAINT_COAT_HOURS_PER_M2: f64 = 2.0;
pub const VENEER_HOURS_PER_M2: f64 = 1.6;

// ---------------------------------------------------------------------------
// Packaging
// ---------------------------------------------------------------------------

/// Fixed packaging setup hours charged once per order.
pub const PACK_BASE_HOURS: f64 = 0.5;
/// Packaging hours per cubic meter of shipped volume.
pub const PACK_HOURS_PER_M3: f64 = 0.8;
/// Packed-volume reduction factor for disassembled (flat-packed) delivery.
pub const DISASSEMBLED_VOLUME_FACTOR: f64 = 0.65;
/// Packaging effort multiplier for assembled delivery (bulky, fragile).
pub const PACK_FACTOR_ASSEMBLED: f64 = 1.5;
/// Packaging effort multiplier for disassembled delivery.
pub const PACK_FACTOR_DISASSEMBLED: f64 = 1.0;

// ---------------------------------------------------------------------------
// Dimension defaults (meters)
// ---------------------------------------------------------------------------

/// Default height for unit components when the entered dimension is zero.
pub const DEFAULT_HEIGHT_M: f64 = 2.0;
/// Default width for unit components.
pub const DEFAULT_WIDTH_M: f64 = 0.8;
/// Default depth for unit components.
pub const DEFAULT_DEPTH_M: f64 = 0.6;

/// Default height for a dressing when none is entered.
pub const DRESSING_DEFAULT_HEIGHT_M: f64 = 2.4;
/// Width of one dressing module; total length is sliced into these.
pub const DRESSING_MODULE_WIDTH_M: f64 = 0.8;

/// Millimeters per meter; user input arrives in mm.
pub const MM_PER_M: f64 = 1000.0;
