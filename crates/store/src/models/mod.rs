//! Row models for the three sheets.

pub mod offer;
pub mod person;
pub mod project;
