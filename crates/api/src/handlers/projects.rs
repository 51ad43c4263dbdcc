//! Project lifecycle: creation from a configured order, listing, and
//! the parsed activity log.

use std::collections::BTreeMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{Datelike, Local, NaiveDate};
use serde::Deserialize;

use atelier_core::activity::ActivityLogEntry;
use atelier_core::progress::SectionProgress;
use atelier_core::scheduling;
use atelier_core::{instalments, naming};
use atelier_store::models::project::{Instalment, ProjectRecord, STATUS_ACTIVE};

use crate::error::{AppError, AppResult};
use crate::handlers::estimation::validate_sections;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /projects, GET /projects/{id}
// ---------------------------------------------------------------------------

/// GET /projects -- all project rows.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<ProjectRecord>>>> {
    let rows = state.projects.list()?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /projects/{id} -- one project row.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<ProjectRecord>>> {
    let row = state.projects.get(&id)?;
    Ok(Json(DataResponse { data: row }))
}

// ---------------------------------------------------------------------------
// POST /projects
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub contact_name: String,
    #[serde(default)]
    pub contact_phone: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub floor: String,
    #[serde(default)]
    pub install_contact: String,
    #[serde(default)]
    pub responsible: String,
    #[serde(default)]
    pub participants: Vec<String>,
    pub value: f64,
    /// Ordered production sections for this project.
    pub sections: Vec<String>,
    pub start: NaiveDate,
    /// Per-section durations from the configurator estimate; sections
    /// missing here fall back to the workshop norms.
    #[serde(default)]
    pub section_days: BTreeMap<String, u32>,
    /// Custom percentage split; must sum to 100 when given.
    pub instalment_percents: Option<Vec<u8>>,
    /// Number of instalments for the recommended split (default 1).
    pub instalment_count: Option<u32>,
    #[serde(default)]
    pub notes: String,
    /// Offer this project originates from; marked accepted on creation.
    pub offer_id: Option<String>,
}

/// POST /projects -- create a project from a configured order.
///
/// Validates the contract value, the section list, and the instalment
/// split, allocates the next `P-{year}-{NNN}` id, schedules the section
/// deadlines, and optionally accepts the source offer.
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateProjectRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<ProjectRecord>>)> {
    if req.name.trim().is_empty() {
        return Err(AppError::BadRequest("Project name must not be empty".into()));
    }
    if req.value <= 0.0 {
        return Err(AppError::BadRequest(
            "Contract value must be positive".into(),
        ));
    }
    if req.sections.is_empty() {
        return Err(AppError::BadRequest(
            "A project needs at least one section".into(),
        ));
    }
    validate_sections(&req.sections)?;

    let percents = match req.instalment_percents {
        Some(custom) => {
            instalments::validate_split(&custom)?;
            custom
        }
        None => instalments::recommended_split(req.instalment_count.unwrap_or(1)),
    };
    let amounts = instalments::split_amounts(req.value, &percents);
    let instalments: Vec<Instalment> = percents
        .iter()
        .zip(amounts)
        .map(|(&percent, amount)| Instalment {
            active: true,
            percent,
            amount,
        })
        .collect();

    let existing = state.projects.list()?;
    let id = naming::next_project_id(existing.iter().map(|p| p.id.as_str()), req.start.year());

    let schedule = scheduling::schedule_with_norms(req.start, &req.sections, &req.section_days);
    let (sections_col, progress_col) = SectionProgress::new(req.sections.clone()).to_columns();

    let record = ProjectRecord {
        id,
        name: req.name.trim().to_string(),
        company: req.company,
        contact_name: req.contact_name,
        contact_phone: req.contact_phone,
        contact_email: req.contact_email,
        address: req.address,
        floor: req.floor,
        install_contact: req.install_contact,
        responsible: req.responsible,
        participants: req.participants.join(", "),
        value: req.value,
        instalments,
        sections: sections_col,
        sections_progress: progress_col,
        section_deadlines: scheduling::encode_deadlines(&schedule.deadlines),
        progress_overall: 0.0,
        status: STATUS_ACTIVE.to_string(),
        start: Some(req.start),
        end: Some(schedule.overall_end),
        notes: req.notes,
    };

    // Accept the source offer before persisting the project so a failed
    // lookup leaves no half-created project behind.
    if let Some(offer_id) = &req.offer_id {
        let mut offer = state.offers.get(offer_id)?;
        offer.accept(Local::now().date_naive());
        state.offers.replace(offer)?;
    }

    state.projects.append(record.clone())?;
    tracing::info!(id = %record.id, name = %record.name, "Project created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: record })))
}

// ---------------------------------------------------------------------------
// GET /projects/{id}/activity
// ---------------------------------------------------------------------------

/// GET /projects/{id}/activity -- the parsed activity log, oldest first.
pub async fn activity(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<Vec<ActivityLogEntry>>>> {
    let row = state.projects.get(&id)?;
    Ok(Json(DataResponse {
        data: row.activity(),
    }))
}
