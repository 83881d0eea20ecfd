pub mod authorization;
pub mod gateways;
pub mod import;
pub mod repositories;
pub mod usecases;
pub mod util;

pub use self::repositories::Error as RepoError;

pub mod entities {
    pub use msh_entities::{
        address::*, email::*, equipment::*, facility::*, facility_request::*, geo::*, id::*,
        password::*, reservation::*, settings::*, time::*, user::*,
    };
}
