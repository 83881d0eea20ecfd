use msh_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use std::io;
use thiserror::Error;

pub use msh_core::repositories;

pub use crate::import_facilities::ImportError;

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
    Import(#[from] ImportError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl From<msh_entities::password::ParseError> for AppError {
    fn from(err: msh_entities::password::ParseError) -> Self {
        BError::from(err).into()
    }
}

impl From<msh_entities::email::EmailAddressParseError> for AppError {
    fn from(err: msh_entities::email::EmailAddressParseError) -> Self {
        BError::from(err).into()
    }
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<String> for BError {
    fn from(s: String) -> Self {
        Self::Internal(s)
    }
}

impl From<msh_entities::password::ParseError> for BError {
    fn from(_: msh_entities::password::ParseError) -> Self {
        Self::Parameter(ParameterError::Password)
    }
}

impl From<msh_entities::email::EmailAddressParseError> for BError {
    fn from(_: msh_entities::email::EmailAddressParseError) -> Self {
        Self::Parameter(ParameterError::EmailAddress)
    }
}
