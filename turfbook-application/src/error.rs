use thiserror::Error;
use turfbook_core::{repositories::Error as RepoError, usecases::Error as ParameterError};

pub use turfbook_core::repositories;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(BError::Repo(err))
    }
}

impl From<ParameterError> for AppError {
    fn from(err: ParameterError) -> AppError {
        AppError::Business(err.into())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl AppError {
    /// The business rule that has been violated, if any.
    pub fn as_parameter_error(&self) -> Option<&ParameterError> {
        match self {
            Self::Business(BError::Parameter(err)) => Some(err),
            _ => None,
        }
    }
}
