// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait FacilityRepo {
    fn create_facility(&self, facility: &Facility) -> Result<()>;
    fn update_facility(&self, facility: &Facility) -> Result<()>;
    fn delete_facility(&self, id: &str) -> Result<()>;

    fn get_facility(&self, id: &str) -> Result<Facility>;
    fn all_facilities(&self) -> Result<Vec<Facility>>;
    fn count_facilities(&self) -> Result<usize>;
}

pub trait FacilityRequestRepo {
    fn create_facility_request(&self, request: &FacilityRequest) -> Result<()>;
    fn update_facility_request(&self, request: &FacilityRequest) -> Result<()>;
    fn delete_facility_request(&self, id: &str) -> Result<()>;

    fn get_facility_request(&self, id: &str) -> Result<FacilityRequest>;
    // Newest first
    fn all_facility_requests(&self) -> Result<Vec<FacilityRequest>>;
    fn facility_requests_of_user(&self, user_id: &str) -> Result<Vec<FacilityRequest>>;
}

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;
    fn update_user(&self, user: &User) -> Result<()>;
    fn delete_user(&self, id: &str) -> Result<()>;

    fn all_users(&self) -> Result<Vec<User>>;
    fn count_users(&self) -> Result<usize>;

    fn get_user(&self, id: &str) -> Result<User>;
    fn get_user_by_email(&self, email: &EmailAddress) -> Result<User>;
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>>;
}

pub trait ReservationRepo {
    fn create_reservation(&self, reservation: &Reservation) -> Result<()>;
    fn update_reservation(&self, reservation: &Reservation) -> Result<()>;

    fn get_reservation(&self, id: &str) -> Result<Reservation>;
    // Ordered by start time
    fn all_reservations(&self) -> Result<Vec<Reservation>>;
    fn reservations_of_user(&self, user_id: &str) -> Result<Vec<Reservation>>;
    fn reservations_of_facility(&self, facility_id: &str) -> Result<Vec<Reservation>>;
}

pub trait EquipmentRepo {
    fn create_equipment(&self, equipment: &Equipment) -> Result<()>;
    fn update_equipment(&self, equipment: &Equipment) -> Result<()>;
    fn delete_equipment(&self, id: &str) -> Result<()>;

    fn get_equipment(&self, id: &str) -> Result<Equipment>;
    // Ordered by name
    fn all_equipment(&self) -> Result<Vec<Equipment>>;
}

pub trait SettingsRepo {
    fn load_settings(&self) -> Result<Option<Settings>>;
    fn save_settings(&self, settings: &Settings) -> Result<()>;
}
