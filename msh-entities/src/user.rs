use num_derive::{FromPrimitive, ToPrimitive};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::{email::*, id::*, password::*, time::*};

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, FromPrimitive, ToPrimitive, Display, EnumString, AsRefStr, EnumIter)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Role {
    User       = 0,
    Admin      = 1,
    SuperAdmin = 2,
}

impl Default for Role {
    fn default() -> Role {
        Role::User
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Optional personal attributes of a user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Profile {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<Gender>,
    /// ISO 8601 date, e.g. `1990-05-17`
    pub birth_date: Option<String>,
    pub job_title: Option<String>,
    pub city: Option<String>,
    pub favorite_sports: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Id,
    pub email: EmailAddress,
    pub password: Password,
    pub role: Role,
    pub name: String,
    pub profile: Profile,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
