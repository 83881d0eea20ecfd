use crate::util::filter::{filter_facilities, FacilityFilter, FilterOptions};

mod authorize;
mod change_user_role;
mod create_facility_request;
mod create_new_facility;
mod create_new_user;
mod create_reservation;
mod delete_facility_request;
mod delete_user;
mod equipment;
mod error;
mod geocode;
mod import_facilities;
mod login;
mod review_facility_request;
mod settings;
mod update_facility;
mod update_profile;
mod update_reservation;

#[cfg(test)]
pub mod tests;

pub use self::{
    authorize::*, change_user_role::*, create_facility_request::*, create_new_facility::*,
    create_new_user::*, create_reservation::*, delete_facility_request::*, delete_user::*,
    equipment::*, error::Error, geocode::*, import_facilities::*, login::*,
    review_facility_request::*, settings::*, update_facility::*, update_profile::*,
    update_reservation::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
use self::prelude::*;

pub fn get_facility<R: FacilityRepo>(repo: &R, id: &str) -> Result<Facility> {
    Ok(repo.get_facility(id)?)
}

/// Loads the current catalog and narrows it down by the filter.
pub fn load_facilities<R: FacilityRepo>(repo: &R, filter: &FacilityFilter) -> Result<Vec<Facility>> {
    let facilities = repo.all_facilities()?;
    let count = facilities.len();
    let filtered = filter_facilities(&facilities, filter);
    log::debug!("{} of {count} facilities match the filter", filtered.len());
    Ok(filtered)
}

pub fn load_filter_options<R>(repo: &R) -> Result<FilterOptions>
where
    R: FacilityRepo + EquipmentRepo,
{
    let mut options = FilterOptions::collect(&repo.all_facilities()?);
    // The catalog also offers equipment that is not yet used by any facility.
    let catalog = repo.all_equipment()?;
    options.add_equipment(catalog.iter().map(|e| e.name.as_str()));
    Ok(options)
}

pub fn delete_facility<R: FacilityRepo>(repo: &R, id: &str) -> Result<()> {
    log::info!("Deleting facility {id}");
    Ok(repo.delete_facility(id)?)
}

pub fn get_user<R: UserRepo>(repo: &R, account: &User, id: &str) -> Result<User> {
    if account.id.as_str() != id && account.role < Role::Admin {
        return Err(Error::Forbidden);
    }
    Ok(repo.get_user(id)?)
}

pub fn get_reservation<R: ReservationRepo>(repo: &R, id: &str) -> Result<Reservation> {
    Ok(repo.get_reservation(id)?)
}

pub fn facility_requests_of_user<R: FacilityRequestRepo>(
    repo: &R,
    user: &User,
) -> Result<Vec<FacilityRequest>> {
    Ok(repo.facility_requests_of_user(user.id.as_str())?)
}

pub fn reservations_of_user<R: ReservationRepo>(repo: &R, user: &User) -> Result<Vec<Reservation>> {
    Ok(repo.reservations_of_user(user.id.as_str())?)
}
