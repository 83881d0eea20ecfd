use super::json_error_response;
use anyhow::anyhow;
use msh_application::error::{AppError, BError};
pub use msh_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use msh_core::import::UnknownImportField;
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
    serde::json::Error as JsonError,
};
use thiserror::Error;

#[derive(Debug, Error)]
#[allow(clippy::large_enum_variant)]
pub enum Error {
    #[error(transparent)]
    App(#[from] AppError),
    #[error("{0}")]
    OtherWithStatus(#[source] anyhow::Error, Status),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<JsonError<'_>> for Error {
    fn from(err: JsonError) -> Self {
        match err {
            JsonError::Io(err) => Self::OtherWithStatus(anyhow!(err), Status::BadRequest),
            JsonError::Parse(_str, err) => Self::OtherWithStatus(anyhow!(err), Status::BadRequest),
        }
    }
}

fn parameter_status(err: &ParameterError) -> Status {
    match err {
        ParameterError::Credentials | ParameterError::Unauthorized => Status::Unauthorized,
        ParameterError::Forbidden => Status::Forbidden,
        ParameterError::UserExists
        | ParameterError::SlotTaken
        | ParameterError::AlreadyReviewed
        | ParameterError::EquipmentExists
        | ParameterError::AttachmentInUse(_) => Status::Conflict,
        ParameterError::UserDoesNotExist => Status::NotFound,
        ParameterError::Repo(err) => repo_status(err),
        ParameterError::Geocoding(_) => Status::InternalServerError,
        _ => Status::BadRequest,
    }
}

fn repo_status(err: &RepoError) -> Status {
    match err {
        RepoError::NotFound => Status::NotFound,
        RepoError::AlreadyExists => Status::Conflict,
        RepoError::Other(_) => Status::InternalServerError,
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        let status = match &self {
            Error::App(AppError::Business(BError::Parameter(err))) => parameter_status(err),
            Error::App(AppError::Business(BError::Repo(err))) => repo_status(err),
            Error::App(AppError::Import(_)) => Status::BadRequest,
            Error::App(_) => Status::InternalServerError,
            Error::OtherWithStatus(_, status) => *status,
            Error::Other(_) => Status::InternalServerError,
        };
        if status == Status::InternalServerError {
            error!("{self}");
        } else {
            debug!("Request failed with status {status}: {self}");
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

impl From<msh_entities::email::EmailAddressParseError> for Error {
    fn from(err: msh_entities::email::EmailAddressParseError) -> Self {
        Self::OtherWithStatus(err.into(), Status::BadRequest)
    }
}

impl From<UnknownImportField> for Error {
    fn from(err: UnknownImportField) -> Self {
        Self::OtherWithStatus(err.into(), Status::BadRequest)
    }
}
