use thiserror::Error;

#[derive(Error, Debug)]
pub enum CourseError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Validation error on {field}: {message}")]
    FieldValidation { field: String, message: String },

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Authorization error: {0}")]
    Authorization(String),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl CourseError {
    /// Validation failure attributed to a single input field.
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::FieldValidation {
            field: field.into(),
            message: message.into(),
        }
    }
}

pub type CourseResult<T> = Result<T, CourseError>;
