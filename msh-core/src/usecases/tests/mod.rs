use std::{cell::RefCell, result};

use super::prelude::*;
use crate::repositories::Error as RepoError;

type RepoResult<T> = result::Result<T, RepoError>;

#[derive(Default)]
pub struct MockDb {
    pub facilities: RefCell<Vec<Facility>>,
    pub facility_requests: RefCell<Vec<FacilityRequest>>,
    pub users: RefCell<Vec<User>>,
    pub reservations: RefCell<Vec<Reservation>>,
    pub equipment: RefCell<Vec<Equipment>>,
    pub settings: RefCell<Option<Settings>>,
}

trait Entity {
    fn entity_id(&self) -> &str;
}

impl Entity for Facility {
    fn entity_id(&self) -> &str {
        self.id.as_str()
    }
}

impl Entity for FacilityRequest {
    fn entity_id(&self) -> &str {
        self.id.as_str()
    }
}

impl Entity for User {
    fn entity_id(&self) -> &str {
        self.id.as_str()
    }
}

impl Entity for Reservation {
    fn entity_id(&self) -> &str {
        self.id.as_str()
    }
}

impl Entity for Equipment {
    fn entity_id(&self) -> &str {
        self.id.as_str()
    }
}

fn get<T: Clone + Entity>(objects: &[T], id: &str) -> RepoResult<T> {
    objects
        .iter()
        .find(|x| x.entity_id() == id)
        .cloned()
        .ok_or(RepoError::NotFound)
}

fn create<T: Clone + Entity>(objects: &mut Vec<T>, e: T) -> RepoResult<()> {
    if objects.iter().any(|x| x.entity_id() == e.entity_id()) {
        return Err(RepoError::AlreadyExists);
    }
    objects.push(e);
    Ok(())
}

fn update<T: Clone + Entity>(objects: &mut [T], e: &T) -> RepoResult<()> {
    let x = objects
        .iter_mut()
        .find(|x| x.entity_id() == e.entity_id())
        .ok_or(RepoError::NotFound)?;
    *x = e.clone();
    Ok(())
}

fn delete<T: Entity>(objects: &mut Vec<T>, id: &str) -> RepoResult<()> {
    let index = objects
        .iter()
        .position(|x| x.entity_id() == id)
        .ok_or(RepoError::NotFound)?;
    objects.remove(index);
    Ok(())
}

impl FacilityRepo for MockDb {
    fn create_facility(&self, facility: &Facility) -> RepoResult<()> {
        create(&mut self.facilities.borrow_mut(), facility.clone())
    }
    fn update_facility(&self, facility: &Facility) -> RepoResult<()> {
        update(&mut self.facilities.borrow_mut(), facility)
    }
    fn delete_facility(&self, id: &str) -> RepoResult<()> {
        delete(&mut self.facilities.borrow_mut(), id)
    }
    fn get_facility(&self, id: &str) -> RepoResult<Facility> {
        get(&self.facilities.borrow(), id)
    }
    fn all_facilities(&self) -> RepoResult<Vec<Facility>> {
        Ok(self.facilities.borrow().clone())
    }
    fn count_facilities(&self) -> RepoResult<usize> {
        Ok(self.facilities.borrow().len())
    }
}

impl FacilityRequestRepo for MockDb {
    fn create_facility_request(&self, request: &FacilityRequest) -> RepoResult<()> {
        create(&mut self.facility_requests.borrow_mut(), request.clone())
    }
    fn update_facility_request(&self, request: &FacilityRequest) -> RepoResult<()> {
        update(&mut self.facility_requests.borrow_mut(), request)
    }
    fn delete_facility_request(&self, id: &str) -> RepoResult<()> {
        delete(&mut self.facility_requests.borrow_mut(), id)
    }
    fn get_facility_request(&self, id: &str) -> RepoResult<FacilityRequest> {
        get(&self.facility_requests.borrow(), id)
    }
    fn all_facility_requests(&self) -> RepoResult<Vec<FacilityRequest>> {
        let mut requests = self.facility_requests.borrow().clone();
        requests.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(requests)
    }
    fn facility_requests_of_user(&self, user_id: &str) -> RepoResult<Vec<FacilityRequest>> {
        Ok(self
            .all_facility_requests()?
            .into_iter()
            .filter(|r| r.requested_by.as_str() == user_id)
            .collect())
    }
}

impl UserRepo for MockDb {
    fn create_user(&self, user: &User) -> RepoResult<()> {
        if self.users.borrow().iter().any(|u| u.email == user.email) {
            return Err(RepoError::AlreadyExists);
        }
        create(&mut self.users.borrow_mut(), user.clone())
    }
    fn update_user(&self, user: &User) -> RepoResult<()> {
        update(&mut self.users.borrow_mut(), user)
    }
    fn delete_user(&self, id: &str) -> RepoResult<()> {
        delete(&mut self.users.borrow_mut(), id)
    }
    fn all_users(&self) -> RepoResult<Vec<User>> {
        Ok(self.users.borrow().clone())
    }
    fn count_users(&self) -> RepoResult<usize> {
        Ok(self.users.borrow().len())
    }
    fn get_user(&self, id: &str) -> RepoResult<User> {
        get(&self.users.borrow(), id)
    }
    fn get_user_by_email(&self, email: &EmailAddress) -> RepoResult<User> {
        self.try_get_user_by_email(email)?
            .ok_or(RepoError::NotFound)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| &u.email == email)
            .cloned())
    }
}

impl ReservationRepo for MockDb {
    fn create_reservation(&self, reservation: &Reservation) -> RepoResult<()> {
        create(&mut self.reservations.borrow_mut(), reservation.clone())
    }
    fn update_reservation(&self, reservation: &Reservation) -> RepoResult<()> {
        update(&mut self.reservations.borrow_mut(), reservation)
    }
    fn get_reservation(&self, id: &str) -> RepoResult<Reservation> {
        get(&self.reservations.borrow(), id)
    }
    fn all_reservations(&self) -> RepoResult<Vec<Reservation>> {
        let mut reservations = self.reservations.borrow().clone();
        reservations.sort_by_key(|r| r.start);
        Ok(reservations)
    }
    fn reservations_of_user(&self, user_id: &str) -> RepoResult<Vec<Reservation>> {
        Ok(self
            .all_reservations()?
            .into_iter()
            .filter(|r| r.user_id.as_str() == user_id)
            .collect())
    }
    fn reservations_of_facility(&self, facility_id: &str) -> RepoResult<Vec<Reservation>> {
        Ok(self
            .all_reservations()?
            .into_iter()
            .filter(|r| r.facility_id.as_str() == facility_id)
            .collect())
    }
}

impl EquipmentRepo for MockDb {
    fn create_equipment(&self, equipment: &Equipment) -> RepoResult<()> {
        create(&mut self.equipment.borrow_mut(), equipment.clone())
    }
    fn update_equipment(&self, equipment: &Equipment) -> RepoResult<()> {
        update(&mut self.equipment.borrow_mut(), equipment)
    }
    fn delete_equipment(&self, id: &str) -> RepoResult<()> {
        delete(&mut self.equipment.borrow_mut(), id)
    }
    fn get_equipment(&self, id: &str) -> RepoResult<Equipment> {
        get(&self.equipment.borrow(), id)
    }
    fn all_equipment(&self) -> RepoResult<Vec<Equipment>> {
        let mut equipment = self.equipment.borrow().clone();
        equipment.sort_by_cached_key(|e| e.name.to_lowercase());
        Ok(equipment)
    }
}

impl SettingsRepo for MockDb {
    fn load_settings(&self) -> RepoResult<Option<Settings>> {
        Ok(self.settings.borrow().clone())
    }
    fn save_settings(&self, settings: &Settings) -> RepoResult<()> {
        *self.settings.borrow_mut() = Some(settings.clone());
        Ok(())
    }
}
