pub mod health;

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// POST /estimates                                    estimate a configured order
/// POST /estimates/schedule                           estimate + dated schedule
///
/// GET  /projects                                     list projects
/// POST /projects                                     create from a configured order
/// GET  /projects/{id}                                one project
/// GET  /projects/{id}/activity                       parsed activity log
/// GET  /projects/{id}/sections                       sections with progress/deadlines
/// PUT  /projects/{id}/sections/{section}/progress    operator progress update
///
/// GET  /dashboard/summary                            headline numbers
/// GET  /dashboard/risk                               lateness risk buckets
/// GET  /dashboard/forecast                           deliveries + suggested start
/// GET  /dashboard/activity                           cross-project activity feed
///
/// GET  /personnel                                    list personnel
/// POST /personnel                                    add a person
/// GET  /personnel/sections/{section}                 staffing for one section
///
/// GET  /offers                                       list offers
/// POST /offers                                       register a quotation
/// POST /offers/{id}/extend                           extend validity
/// POST /offers/{id}/accept                           mark accepted
/// ```
pub fn api_routes() -> Router<AppState> {
    let estimate_routes = Router::new()
        .route("/", post(handlers::estimation::estimate))
        .route("/schedule", post(handlers::estimation::schedule));

    let project_routes = Router::new()
        .route(
            "/",
            get(handlers::projects::list).post(handlers::projects::create),
        )
        .route("/{id}", get(handlers::projects::get_by_id))
        .route("/{id}/activity", get(handlers::projects::activity))
        .route("/{id}/sections", get(handlers::sections::list_sections))
        .route(
            "/{id}/sections/{section}/progress",
            put(handlers::sections::update_progress),
        );

    let dashboard_routes = Router::new()
        .route("/summary", get(handlers::dashboard::summary))
        .route("/risk", get(handlers::dashboard::risk))
        .route("/forecast", get(handlers::dashboard::forecast))
        .route("/activity", get(handlers::dashboard::activity_feed));

    let personnel_routes = Router::new()
        .route(
            "/",
            get(handlers::personnel::list).post(handlers::personnel::create),
        )
        .route("/sections/{section}", get(handlers::personnel::staffing));

    let offer_routes = Router::new()
        .route(
            "/",
            get(handlers::offers::list).post(handlers::offers::create),
        )
        .route("/{id}/extend", post(handlers::offers::extend))
        .route("/{id}/accept", post(handlers::offers::accept));

    Router::new()
        .nest("/estimates", estimate_routes)
        .nest("/projects", project_routes)
        .nest("/dashboard", dashboard_routes)
        .nest("/personnel", personnel_routes)
        .nest("/offers", offer_routes)
}
