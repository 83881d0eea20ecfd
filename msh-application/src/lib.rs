#[macro_use]
extern crate log;

mod change_user_role;
mod create_facility;
mod create_facility_request;
mod delete_facility_request;
mod import_facilities;
mod register_user;
mod reservations;
mod review_facility_request;
mod update_facility;

pub mod prelude {
    pub use super::{
        change_user_role::*, create_facility::*, create_facility_request::*,
        delete_facility_request::*, import_facilities::*, register_user::*, reservations::*,
        review_facility_request::*, update_facility::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use msh_core::{
    entities::*,
    gateways::{geocode::GeoCodingGateway, storage::AttachmentStorage},
    repositories::*,
    usecases,
};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use msh_db_sqlite::Connections;
}
