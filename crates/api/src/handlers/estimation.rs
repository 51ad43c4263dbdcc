//! Order configurator endpoints: estimate an order, and turn an
//! estimate into a dated schedule.

use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use atelier_core::component::{ComponentSpec, DeliveryMode};
use atelier_core::estimation::{estimate_order, OrderEstimate};
use atelier_core::scheduling::{self, ProjectSchedule};
use atelier_core::vehicle::recommend_vehicle;
use atelier_core::{sections, CoreError};

use crate::error::AppResult;
use crate::response::DataResponse;

// ---------------------------------------------------------------------------
// POST /estimates
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct EstimateRequest {
    pub components: Vec<ComponentSpec>,
    pub delivery: DeliveryMode,
}

#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    #[serde(flatten)]
    pub estimate: OrderEstimate,
    /// Recommended delivery vehicle for the total volume.
    pub vehicle: &'static str,
}

/// POST /estimates -- estimate per-section durations, shipping volume,
/// and the delivery vehicle for a configured order.
pub async fn estimate(
    Json(req): Json<EstimateRequest>,
) -> AppResult<Json<DataResponse<EstimateResponse>>> {
    let estimate = estimate_order(&req.components, req.delivery);
    let vehicle = recommend_vehicle(estimate.total_volume_m3);

    Ok(Json(DataResponse {
        data: EstimateResponse { estimate, vehicle },
    }))
}

// ---------------------------------------------------------------------------
// POST /estimates/schedule
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct ScheduleRequest {
    pub components: Vec<ComponentSpec>,
    pub delivery: DeliveryMode,
    /// Ordered production sections the project will pass through.
    pub sections: Vec<String>,
    pub start: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct ScheduleResponse {
    #[serde(flatten)]
    pub estimate: OrderEstimate,
    pub vehicle: &'static str,
    pub schedule: ProjectSchedule,
}

/// POST /estimates/schedule -- estimate an order and lay its sections
/// out sequentially from a start date. Sections outside the canonical
/// catalog are rejected.
pub async fn schedule(
    Json(req): Json<ScheduleRequest>,
) -> AppResult<Json<DataResponse<ScheduleResponse>>> {
    validate_sections(&req.sections)?;

    let estimate = estimate_order(&req.components, req.delivery);
    let vehicle = recommend_vehicle(estimate.total_volume_m3);
    let schedule = scheduling::schedule_with_norms(req.start, &req.sections, &estimate.section_days);

    Ok(Json(DataResponse {
        data: ScheduleResponse {
            estimate,
            vehicle,
            schedule,
        },
    }))
}

/// Reject any section name outside the canonical catalog.
pub fn validate_sections(names: &[String]) -> Result<(), CoreError> {
    for name in names {
        if !sections::is_canonical(name) {
            return Err(CoreError::InvalidSection {
                section: name.clone(),
            });
        }
    }
    Ok(())
}
