/// Domain-level failures raised below the HTTP layer.
///
/// Storage failures are not represented here; they travel as `sqlx::Error`
/// until the API layer classifies them.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("Validation failed: {0}")]
    Validation(String),
}
