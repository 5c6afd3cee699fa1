use thiserror::Error;

/// Define a convenient Result type
pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error: Project path '{0}' not found.")]
    ProjectPathNotFound(String),
}
