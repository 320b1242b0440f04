use super::json_error_response;
use turfbook_application::error::{AppError, BError};
pub use turfbook_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    App(#[from] AppError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn repo_error_status(err: &RepoError) -> Status {
    match err {
        RepoError::NotFound => Status::NotFound,
        RepoError::AlreadyExists => Status::Conflict,
        RepoError::Other(_) => Status::InternalServerError,
    }
}

fn parameter_error_status(err: &ParameterError) -> Status {
    match err {
        ParameterError::Unauthorized => Status::Unauthorized,
        ParameterError::Forbidden => Status::Forbidden,
        ParameterError::SlotConflict
        | ParameterError::StateConflict { .. }
        | ParameterError::NotExpired => Status::Conflict,
        ParameterError::VenueClosed(_)
        | ParameterError::SlotDisabled
        | ParameterError::AmountOutOfRange(_) => Status::UnprocessableEntity,
        ParameterError::PaymentGateway(_) => Status::BadGateway,
        ParameterError::Repo(err) => repo_error_status(err),
        ParameterError::InvalidDate
        | ParameterError::DateInPast
        | ParameterError::InvalidSlotTime
        | ParameterError::InvalidWeekday
        | ParameterError::InvalidPrice
        | ParameterError::InvalidName
        | ParameterError::EndDateBeforeStart
        | ParameterError::InvalidFeeSettings(_)
        | ParameterError::InvalidSlotGrid(_)
        | ParameterError::PaymentVerification => Status::BadRequest,
    }
}

impl Error {
    pub fn status(&self) -> Status {
        match self {
            Self::App(AppError::Business(BError::Parameter(err))) => parameter_error_status(err),
            Self::App(AppError::Business(BError::Repo(err))) => repo_error_status(err),
            Self::App(AppError::Other(_)) | Self::Other(_) => Status::InternalServerError,
        }
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        let status = self.status();
        if status == Status::InternalServerError {
            error!("Error: {self}");
            // Internal details are not exposed
            return json_error_response(req, &"Internal server error", status);
        }
        if status == Status::BadGateway {
            warn!("{self}");
        } else {
            debug!("Rejecting request with status {}: {self}", status.code);
        }
        json_error_response(req, &self, status)
    }
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        AppError::from(err).into()
    }
}

impl From<BError> for Error {
    fn from(err: BError) -> Self {
        AppError::from(err).into()
    }
}

impl From<ParameterError> for Error {
    fn from(err: ParameterError) -> Self {
        Self::App(err.into())
    }
}
