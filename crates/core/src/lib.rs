//! Domain engine for the furniture production tracking dashboard.
//!
//! Pure computation only (zero internal deps, no I/O): the order
//! configurator's duration estimator, the vehicle recommender, the
//! sequential deadline scheduler, the per-section progress aggregator,
//! the activity-log grammar, and the lateness risk classifier. The
//! `store` and `api` crates supply persistence and transport around it.

pub mod activity;
pub mod component;
pub mod error;
pub mod estimation;
pub mod instalments;
pub mod naming;
pub mod progress;
pub mod rates;
pub mod risk;
pub mod scheduling;
pub mod sections;
pub mod vehicle;

pub use error::CoreError;
