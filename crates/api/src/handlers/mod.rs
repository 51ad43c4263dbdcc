//! Request handlers, grouped per resource.

pub mod dashboard;
pub mod estimation;
pub mod offers;
pub mod personnel;
pub mod projects;
pub mod sections;
