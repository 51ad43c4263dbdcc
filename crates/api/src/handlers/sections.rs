//! Per-project section views and operator progress updates.

use axum::extract::{Path, State};
use axum::Json;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use atelier_core::activity;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /projects/{id}/sections
// ---------------------------------------------------------------------------

const SECTION_HISTORY_LIMIT: usize = 5;

/// One section of a project as shown on the operator board.
#[derive(Debug, Serialize)]
pub struct SectionView {
    pub section: String,
    pub percent: u8,
    /// Planned completion date, when one was scheduled.
    pub finish: Option<NaiveDate>,
    /// Most recent update lines for this section, oldest first.
    pub history: Vec<String>,
}

/// GET /projects/{id}/sections -- ordered sections with their progress
/// and planned completion dates.
pub async fn list_sections(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<Vec<SectionView>>>> {
    let row = state.projects.get(&id)?;
    let progress = row.section_progress();
    let deadlines = row.deadlines();

    let views = progress
        .sections()
        .iter()
        .zip(progress.percentages())
        .map(|(section, &percent)| SectionView {
            section: section.clone(),
            percent,
            finish: deadlines
                .iter()
                .find(|d| &d.section == section)
                .map(|d| d.finish),
            history: activity::section_history(&row.notes, section, SECTION_HISTORY_LIMIT),
        })
        .collect();

    Ok(Json(DataResponse { data: views }))
}

// ---------------------------------------------------------------------------
// PUT /projects/{id}/sections/{section}/progress
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct ProgressUpdateRequest {
    pub percent: u8,
    pub user: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub files: Vec<String>,
    #[serde(default)]
    pub visible_to_all: bool,
}

#[derive(Debug, Serialize)]
pub struct ProgressUpdateResponse {
    pub section: String,
    pub percent: u8,
    pub overall: f64,
}

/// PUT /projects/{id}/sections/{section}/progress -- record an operator
/// update: set the section percentage, recompute the overall figure, and
/// append the activity line. Rejected with 400 when the section is not
/// part of the project, leaving the row untouched.
pub async fn update_progress(
    State(state): State<AppState>,
    Path((id, section)): Path<(String, String)>,
    Json(req): Json<ProgressUpdateRequest>,
) -> AppResult<Json<DataResponse<ProgressUpdateResponse>>> {
    let mut row = state.projects.get(&id)?;

    let timestamp = Local::now().format("%Y-%m-%d %H:%M").to_string();
    let note = if req.note.trim().is_empty() {
        format!("progres {}%", req.percent.min(100))
    } else {
        req.note.clone()
    };
    let line = activity::format_entry(
        &timestamp,
        &req.user,
        &section,
        req.visible_to_all,
        &note,
        &req.files,
    );

    row.apply_progress_update(&section, req.percent, &line)?;
    let row = state.projects.replace(row)?;
    tracing::info!(project = %id, %section, percent = req.percent, "Progress updated");

    let percent = row
        .section_progress()
        .percent_of(&section)
        .unwrap_or_default();

    Ok(Json(DataResponse {
        data: ProgressUpdateResponse {
            section,
            percent,
            overall: row.progress_overall,
        },
    }))
}
