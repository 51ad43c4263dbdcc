//! Personnel listing and per-section staffing.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use atelier_core::{sections, CoreError};
use atelier_store::models::person::{self, PersonRecord, SectionStaffing};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /personnel -- all personnel rows.
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<PersonRecord>>>> {
    let rows = state.personnel.list()?;
    Ok(Json(DataResponse { data: rows }))
}

/// POST /personnel -- add a person.
pub async fn create(
    State(state): State<AppState>,
    Json(record): Json<PersonRecord>,
) -> AppResult<(StatusCode, Json<DataResponse<PersonRecord>>)> {
    if record.name.trim().is_empty() {
        return Err(AppError::BadRequest("Person name must not be empty".into()));
    }
    state.personnel.append(record.clone())?;
    tracing::info!(name = %record.name, "Person added");
    Ok((StatusCode::CREATED, Json(DataResponse { data: record })))
}

/// GET /personnel/sections/{section} -- active people assigned to one
/// canonical section.
pub async fn staffing(
    State(state): State<AppState>,
    Path(section): Path<String>,
) -> AppResult<Json<DataResponse<SectionStaffing>>> {
    if !sections::is_canonical(&section) {
        return Err(AppError::Core(CoreError::InvalidSection { section }));
    }
    let people = state.personnel.list()?;
    Ok(Json(DataResponse {
        data: person::section_staffing(&people, &section),
    }))
}
