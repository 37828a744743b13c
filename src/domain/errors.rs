// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("source value is empty after normalization")]
    EmptySource,
    #[error("no unique slug found after {attempts} suffix attempts")]
    Exhausted { attempts: u32 },
    #[error("validation error: {0}")]
    Validation(String),
    #[error("unresolved field path: {0}")]
    UnresolvedPath(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}
