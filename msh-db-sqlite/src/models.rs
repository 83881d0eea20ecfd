#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use super::schema::*;

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = users)]
#[diesel(treat_none_as_null = true)]
pub struct NewUser {
    pub id: String,
    pub email: String,
    pub password: String,
    pub role: i16,
    pub name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<String>,
    pub birth_date: Option<String>,
    pub job_title: Option<String>,
    pub city: Option<String>,
    pub favorite_sports: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Queryable)]
pub struct UserEntity {
    pub id: String,
    pub email: String,
    pub password: String,
    pub role: i16,
    pub name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<String>,
    pub birth_date: Option<String>,
    pub job_title: Option<String>,
    pub city: Option<String>,
    pub favorite_sports: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = facilities)]
#[diesel(treat_none_as_null = true)]
pub struct NewFacility {
    pub id: String,
    pub name: String,
    pub description: String,
    pub street: Option<String>,
    pub commune: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub region: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub sports: String,
    pub equipment: String,
    pub facility_type: String,
    pub accessible: bool,
    pub establishment_condition: Option<String>,
    pub building_condition: Option<String>,
    pub equipment_condition: Option<String>,
    pub capacity: Option<i64>,
    pub staff_count: Option<i64>,
    pub surface_area: Option<f64>,
    pub hourly_rate: Option<f64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Queryable)]
pub struct FacilityEntity {
    pub id: String,
    pub name: String,
    pub description: String,
    pub street: Option<String>,
    pub commune: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub region: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub sports: String,
    pub equipment: String,
    pub facility_type: String,
    pub accessible: bool,
    pub establishment_condition: Option<String>,
    pub building_condition: Option<String>,
    pub equipment_condition: Option<String>,
    pub capacity: Option<i64>,
    pub staff_count: Option<i64>,
    pub surface_area: Option<f64>,
    pub hourly_rate: Option<f64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = facility_requests)]
#[diesel(treat_none_as_null = true)]
pub struct NewFacilityRequest {
    pub id: String,
    pub name: String,
    pub description: String,
    pub street: Option<String>,
    pub commune: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub region: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub sports: String,
    pub equipment: String,
    pub facility_type: String,
    pub accessible: bool,
    pub establishment_condition: Option<String>,
    pub building_condition: Option<String>,
    pub equipment_condition: Option<String>,
    pub capacity: Option<i64>,
    pub staff_count: Option<i64>,
    pub surface_area: Option<f64>,
    pub hourly_rate: Option<f64>,
    pub requested_by: String,
    pub requester_email: String,
    pub status: String,
    pub rejection_reason: Option<String>,
    pub attachment_urls: String,
    pub facility_id: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Queryable)]
pub struct FacilityRequestEntity {
    pub id: String,
    pub name: String,
    pub description: String,
    pub street: Option<String>,
    pub commune: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub region: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub sports: String,
    pub equipment: String,
    pub facility_type: String,
    pub accessible: bool,
    pub establishment_condition: Option<String>,
    pub building_condition: Option<String>,
    pub equipment_condition: Option<String>,
    pub capacity: Option<i64>,
    pub staff_count: Option<i64>,
    pub surface_area: Option<f64>,
    pub hourly_rate: Option<f64>,
    pub requested_by: String,
    pub requester_email: String,
    pub status: String,
    pub rejection_reason: Option<String>,
    pub attachment_urls: String,
    pub facility_id: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = reservations)]
pub struct NewReservation {
    pub id: String,
    pub user_id: String,
    pub user_email: String,
    pub facility_id: String,
    pub start_at: i64,
    pub end_at: i64,
    pub status: String,
    pub total_cost: f64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Queryable)]
pub struct ReservationEntity {
    pub id: String,
    pub user_id: String,
    pub user_email: String,
    pub facility_id: String,
    pub start_at: i64,
    pub end_at: i64,
    pub status: String,
    pub total_cost: f64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = equipments)]
#[diesel(treat_none_as_null = true)]
pub struct NewEquipment {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Queryable)]
pub struct EquipmentEntity {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = settings)]
#[diesel(treat_none_as_null = true)]
pub struct NewSettings {
    pub id: String,
    pub site_name: String,
    pub site_description: String,
    pub logo_url: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_address: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub twitter: Option<String>,
    pub youtube: Option<String>,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub footer_links: String,
    pub updated_at: i64,
}

#[derive(Queryable)]
pub struct SettingsEntity {
    pub id: String,
    pub site_name: String,
    pub site_description: String,
    pub logo_url: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_address: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub twitter: Option<String>,
    pub youtube: Option<String>,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub footer_links: String,
    pub updated_at: i64,
}
