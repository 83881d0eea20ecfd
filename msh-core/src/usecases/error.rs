use crate::{
    gateways::geocode::GeocodingError,
    repositories,
    util::validate::{FacilityInvalidation, SettingsInvalidation},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The name is invalid")]
    Name,
    #[error("Invalid position")]
    InvalidPosition,
    #[error("Invalid equipment")]
    Equipment,
    #[error("Invalid number")]
    Number,
    #[error("Invalid email address")]
    EmailAddress,
    #[error("The user already exists")]
    UserExists,
    #[error("The user does not exist")]
    UserDoesNotExist,
    #[error("Invalid password")]
    Password,
    #[error("Invalid credentials")]
    Credentials,
    #[error("This is not allowed")]
    Forbidden,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error("The request has already been reviewed")]
    AlreadyReviewed,
    #[error("A reason is required to reject a request")]
    MissingRejectionReason,
    #[error("The end date is before the start")]
    EndDateBeforeStart,
    #[error("Reservations in the past are not possible")]
    ReservationInPast,
    #[error("The time slot is already booked")]
    SlotTaken,
    #[error("The equipment already exists")]
    EquipmentExists,
    #[error("Invalid settings: {0}")]
    Settings(#[from] SettingsInvalidation),
    #[error("The address could not be found")]
    AddressNotFound,
    #[error(transparent)]
    Geocoding(#[from] GeocodingError),
    #[error("No valid rows to import")]
    NoValidRows,
    #[error("The attachment {0} belongs to another request")]
    AttachmentInUse(String),
    #[error("Missing mandatory import field: {0}")]
    MissingImportField(String),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<msh_entities::password::ParseError> for Error {
    fn from(_: msh_entities::password::ParseError) -> Self {
        Self::Password
    }
}

impl From<msh_entities::email::EmailAddressParseError> for Error {
    fn from(_: msh_entities::email::EmailAddressParseError) -> Self {
        Self::EmailAddress
    }
}

impl From<FacilityInvalidation> for Error {
    fn from(err: FacilityInvalidation) -> Self {
        match err {
            FacilityInvalidation::Name => Self::Name,
            FacilityInvalidation::Position => Self::InvalidPosition,
            FacilityInvalidation::Equipment => Self::Equipment,
            FacilityInvalidation::Number => Self::Number,
        }
    }
}
