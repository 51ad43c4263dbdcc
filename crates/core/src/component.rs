//! Furniture component specifications entered in the order configurator.
//!
//! A list of [`ComponentSpec`]s plus a [`DeliveryMode`] is the sole input
//! to the duration estimator. Specs are transient order-entry data: only
//! the derived durations and notes survive once a project is persisted.

use serde::{Deserialize, Serialize};

use crate::rates::{
    DEFAULT_DEPTH_M, DEFAULT_HEIGHT_M, DEFAULT_WIDTH_M, DRESSING_DEFAULT_HEIGHT_M, MM_PER_M,
};

// ---------------------------------------------------------------------------
// Component kinds
// ---------------------------------------------------------------------------

/// Fixed catalog of configurable furniture component types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    SimpleCabinet,
    Dressing,
    KitchenCarcass,
    PaintedFront,
    Countertop,
    Shelving,
}

impl ComponentKind {
    /// Catalog label as shown on the order form.
    pub fn label(self) -> &'static str {
        match self {
            Self::SimpleCabinet => "Dulap simplu",
            Self::Dressing => "Dressing",
            Self::KitchenCarcass => "Corp bucătărie",
            Self::PaintedFront => "Front MDF vopsit",
            Self::Countertop => "Blat",
            Self::Shelving => "Polițe/rafturi",
        }
    }
}

// ---------------------------------------------------------------------------
// Delivery mode
// ---------------------------------------------------------------------------

/// Whether furniture ships pre-assembled or disassembled (flat-packed).
/// Affects packed volume and packaging effort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMode {
    Assembled,
    Disassembled,
}

impl DeliveryMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Assembled => "Asamblate",
            Self::Disassembled => "Dezasamblate",
        }
    }
}

// ---------------------------------------------------------------------------
// Component spec
// ---------------------------------------------------------------------------

/// One furniture item entered in the order configurator.
///
/// Dimensions are millimeters as typed by the user; zero (or negative,
/// clamped) means "use the type default". `total_length_mm` applies only
/// to dressings, which are sliced into fixed-width modules. Material
/// percentages are clamped to [0, 100] independently; a combined total
/// over 100% is surfaced as a warning, never rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentSpec {
    pub kind: ComponentKind,
    #[serde(default = "default_units")]
    pub units: u32,
    #[serde(default)]
    pub height_mm: f64,
    #[serde(default)]
    pub width_mm: f64,
    #[serde(default)]
    pub depth_mm: f64,
    #[serde(default)]
    pub total_length_mm: f64,
    #[serde(default)]
    pub paint_percent: i32,
    #[serde(default)]
    pub veneer_percent: i32,
}

fn default_units() -> u32 {
    1
}

impl ComponentSpec {
    /// Effective height in meters, with negative input clamped to zero and
    /// the type default applied when the entered value is zero.
    pub fn height_m(&self) -> f64 {
        let h = mm_to_m(self.height_mm);
        if h > 0.0 {
            h
        } else if self.kind == ComponentKind::Dressing {
            DRESSING_DEFAULT_HEIGHT_M
        } else {
            DEFAULT_HEIGHT_M
        }
    }

    /// Effective width in meters (non-dressing components).
    pub fn width_m(&self) -> f64 {
        let w = mm_to_m(self.width_mm);
        if w > 0.0 {
            w
        } else {
            DEFAULT_WIDTH_M
        }
    }

    /// Effective depth in meters. Unit components fall back to the type
    /// default; a dressing keeps the entered depth, so a run with no
    /// depth contributes no volume.
    pub fn depth_m(&self) -> f64 {
        let d = mm_to_m(self.depth_mm);
        if d > 0.0 || self.kind == ComponentKind::Dressing {
            d
        } else {
            DEFAULT_DEPTH_M
        }
    }

    /// Total dressing run length in meters, clamped to non-negative.
    pub fn total_length_m(&self) -> f64 {
        mm_to_m(self.total_length_mm)
    }

    /// Painted-front share in [0.0, 1.0].
    pub fn paint_share(&self) -> f64 {
        f64::from(self.paint_percent.clamp(0, 100)) / 100.0
    }

    /// Veneered-front share in [0.0, 1.0].
    pub fn veneer_share(&self) -> f64 {
        f64::from(self.veneer_percent.clamp(0, 100)) / 100.0
    }

    /// Whether the raw material percentages add up past 100%.
    pub fn materials_over_limit(&self) -> bool {
        self.paint_percent.clamp(0, 100) + self.veneer_percent.clamp(0, 100) > 100
    }
}

fn mm_to_m(mm: f64) -> f64 {
    mm.max(0.0) / MM_PER_M
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
