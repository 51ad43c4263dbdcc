//! Offer lifecycle: quotation entry, validity extension, acceptance.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{Datelike, Duration, Local};
use serde::Deserialize;

use atelier_core::naming;
use atelier_store::models::offer::{OfferRecord, OfferStatus};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

const DEFAULT_VALIDITY_DAYS: u32 = 30;

/// GET /offers -- all offer rows.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<OfferRecord>>>> {
    let rows = state.offers.list()?;
    Ok(Json(DataResponse { data: rows }))
}

// ---------------------------------------------------------------------------
// POST /offers
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct CreateOfferRequest {
    pub client: String,
    #[serde(default)]
    pub contact_phone: String,
    #[serde(default)]
    pub contact_email: String,
    pub value: f64,
    #[serde(default)]
    pub summary: String,
    /// Validity window in days (default 30).
    pub valid_days: Option<u32>,
}

/// POST /offers -- register a quotation with an `O-{year}-{NNN}` id.
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateOfferRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<OfferRecord>>)> {
    if req.client.trim().is_empty() {
        return Err(AppError::BadRequest("Client must not be empty".into()));
    }
    if req.value <= 0.0 {
        return Err(AppError::BadRequest("Offer value must be positive".into()));
    }

    let today = Local::now().date_naive();
    let existing = state.offers.list()?;
    let id = naming::next_offer_id(existing.iter().map(|o| o.id.as_str()), today.year());

    let valid_days = req.valid_days.unwrap_or(DEFAULT_VALIDITY_DAYS);
    let record = OfferRecord {
        id,
        client: req.client.trim().to_string(),
        contact_phone: req.contact_phone,
        contact_email: req.contact_email,
        value: req.value,
        summary: req.summary,
        status: OfferStatus::Pending,
        created: today,
        valid_until: today + Duration::days(i64::from(valid_days)),
        accepted: None,
    };

    state.offers.append(record.clone())?;
    tracing::info!(id = %record.id, client = %record.client, "Offer registered");
    Ok((StatusCode::CREATED, Json(DataResponse { data: record })))
}

// ---------------------------------------------------------------------------
// POST /offers/{id}/extend
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct ExtendOfferRequest {
    pub days: u32,
}

/// POST /offers/{id}/extend -- push the validity window out.
pub async fn extend(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<ExtendOfferRequest>,
) -> AppResult<Json<DataResponse<OfferRecord>>> {
    if req.days == 0 {
        return Err(AppError::BadRequest(
            "Extension must be at least one day".into(),
        ));
    }
    let mut offer = state.offers.get(&id)?;
    offer.extend(req.days);
    let offer = state.offers.replace(offer)?;
    tracing::info!(id = %offer.id, until = %offer.valid_until, "Offer extended");
    Ok(Json(DataResponse { data: offer }))
}

/// POST /offers/{id}/accept -- mark an offer accepted without creating
/// the project yet.
pub async fn accept(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<OfferRecord>>> {
    let mut offer = state.offers.get(&id)?;
    offer.accept(Local::now().date_naive());
    let offer = state.offers.replace(offer)?;
    tracing::info!(id = %offer.id, "Offer accepted");
    Ok(Json(DataResponse { data: offer }))
}
