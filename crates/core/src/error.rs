#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Section '{section}' is not part of this project")]
    InvalidSection { section: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Entity not found: {entity} '{id}'")]
    NotFound { entity: &'static str, id: String },
}
