use std::sync::Arc;

use atelier_store::repositories::{OfferRepository, PersonRepository, ProjectRepository};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). Repositories
/// are trait objects so tests can point the same handlers at a
/// throwaway data directory.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Project sheet access.
    pub projects: Arc<dyn ProjectRepository>,
    /// Personnel sheet access.
    pub personnel: Arc<dyn PersonRepository>,
    /// Offer sheet access.
    pub offers: Arc<dyn OfferRepository>,
}
