//! Dashboard widgets: headline numbers, lateness risk, the delivery
//! forecast, and the cross-project activity feed.

use axum::extract::{Query, State};
use axum::Json;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use atelier_core::activity::ActivityLogEntry;
use atelier_core::risk::RiskBucket;
use atelier_core::scheduling;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /dashboard/summary
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub active_projects: usize,
    pub finished_projects: usize,
    /// Summed contract value of active projects.
    pub total_value_active: f64,
    /// Mean overall progress of active projects, one decimal.
    pub average_progress: f64,
}

/// GET /dashboard/summary -- headline numbers over all projects.
pub async fn summary(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<DashboardSummary>>> {
    let rows = state.projects.list()?;
    let active: Vec<_> = rows.iter().filter(|p| p.is_active()).collect();

    let total_value_active = active.iter().map(|p| p.value).sum();
    let average_progress = if active.is_empty() {
        0.0
    } else {
        let mean = active.iter().map(|p| p.progress_overall).sum::<f64>() / active.len() as f64;
        (mean * 10.0).round() / 10.0
    };

    Ok(Json(DataResponse {
        data: DashboardSummary {
            active_projects: active.len(),
            finished_projects: rows.len() - active.len(),
            total_value_active,
            average_progress,
        },
    }))
}

// ---------------------------------------------------------------------------
// GET /dashboard/risk
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct ProjectRisk {
    pub id: String,
    pub name: String,
    pub days_late: i64,
    pub bucket: RiskBucket,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct RiskReport {
    pub on_time: usize,
    pub warning: usize,
    pub critical: usize,
    /// Active dated projects, latest first.
    pub projects: Vec<ProjectRisk>,
}

/// GET /dashboard/risk -- lateness buckets for active projects with a
/// planned end date.
pub async fn risk(State(state): State<AppState>) -> AppResult<Json<DataResponse<RiskReport>>> {
    let today = Local::now().date_naive();
    let rows = state.projects.list()?;

    let mut projects: Vec<ProjectRisk> = rows
        .iter()
        .filter_map(|p| {
            let days_late = p.days_late(today)?;
            let bucket = RiskBucket::from_days_late(days_late);
            Some(ProjectRisk {
                id: p.id.clone(),
                name: p.name.clone(),
                days_late,
                bucket,
                label: bucket.label(),
            })
        })
        .collect();
    projects.sort_by_key(|p| std::cmp::Reverse(p.days_late));

    let count = |bucket: RiskBucket| projects.iter().filter(|p| p.bucket == bucket).count();

    Ok(Json(DataResponse {
        data: RiskReport {
            on_time: count(RiskBucket::OnTime),
            warning: count(RiskBucket::Warning),
            critical: count(RiskBucket::Critical),
            projects,
        },
    }))
}

// ---------------------------------------------------------------------------
// GET /dashboard/forecast
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct ForecastParams {
    /// How many projects the workshop runs in parallel.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

fn default_capacity() -> usize {
    3
}

#[derive(Debug, Serialize)]
pub struct UpcomingDelivery {
    pub id: String,
    pub name: String,
    pub end: NaiveDate,
}

/// Forecast horizon: six weeks out.
const FORECAST_WINDOW_DAYS: i64 = 42;

#[derive(Debug, Serialize)]
pub struct ForecastResponse {
    /// First day a new project could start without exceeding the
    /// parallel-project capacity.
    pub suggested_start: NaiveDate,
    /// Active projects due within the forecast window (overdue ones
    /// included), soonest first.
    pub upcoming: Vec<UpcomingDelivery>,
}

/// GET /dashboard/forecast -- upcoming deliveries plus the earliest
/// feasible start date for a new project.
pub async fn forecast(
    State(state): State<AppState>,
    Query(params): Query<ForecastParams>,
) -> AppResult<Json<DataResponse<ForecastResponse>>> {
    let today = Local::now().date_naive();
    let rows = state.projects.list()?;
    let active: Vec<_> = rows.iter().filter(|p| p.is_active()).collect();

    let windows: Vec<_> = active.iter().map(|p| (p.start, p.end)).collect();
    let suggested_start = scheduling::suggested_start(&windows, today, params.capacity.max(1));

    let horizon = today + chrono::Duration::days(FORECAST_WINDOW_DAYS);
    let mut upcoming: Vec<UpcomingDelivery> = active
        .iter()
        .filter_map(|p| {
            let end = p.end?;
            (end <= horizon).then(|| UpcomingDelivery {
                id: p.id.clone(),
                name: p.name.clone(),
                end,
            })
        })
        .collect();
    upcoming.sort_by_key(|u| u.end);

    Ok(Json(DataResponse {
        data: ForecastResponse {
            suggested_start,
            upcoming,
        },
    }))
}

// ---------------------------------------------------------------------------
// GET /dashboard/activity
// ---------------------------------------------------------------------------

const ACTIVITY_FEED_LIMIT: usize = 20;

#[derive(Debug, Serialize)]
pub struct FeedItem {
    pub project_id: String,
    pub project_name: String,
    #[serde(flatten)]
    pub entry: ActivityLogEntry,
}

/// GET /dashboard/activity -- most recent operator updates across all
/// projects, newest first.
pub async fn activity_feed(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<FeedItem>>>> {
    let rows = state.projects.list()?;

    let mut items: Vec<FeedItem> = rows
        .iter()
        .flat_map(|p| {
            p.activity().into_iter().map(|entry| FeedItem {
                project_id: p.id.clone(),
                project_name: p.name.clone(),
                entry,
            })
        })
        .collect();

    // Timestamps are `YYYY-MM-DD HH:MM`, so the lexicographic order is
    // chronological; degraded entries sort last.
    items.sort_by(|a, b| b.entry.timestamp.cmp(&a.entry.timestamp));
    items.truncate(ACTIVITY_FEED_LIMIT);

    Ok(Json(DataResponse { data: items }))
}
