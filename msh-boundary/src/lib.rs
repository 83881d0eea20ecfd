use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[cfg(feature = "entity-conversions")]
pub use conv::*;

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "snake_case")]
pub enum FacilityType {
    Indoor,
    Outdoor,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Excellent,
    Good,
    Fair,
    Poor,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct EquipmentItem {
    pub name: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

const fn default_quantity() -> u32 {
    1
}

/// The descriptive fields of a facility as they are
/// submitted by clients.
#[rustfmt::skip]
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(default)]
pub struct FacilityDetails {
    pub name                    : String,
    pub description             : String,
    pub street                  : Option<String>,
    pub commune                 : Option<String>,
    pub city                    : Option<String>,
    pub province                : Option<String>,
    pub region                  : Option<String>,
    pub lat                     : Option<f64>,
    pub lng                     : Option<f64>,
    pub sports                  : Vec<String>,
    pub equipment               : Vec<EquipmentItem>,
    pub facility_type           : Option<FacilityType>,
    pub accessible              : bool,
    pub establishment_condition : Option<Condition>,
    pub building_condition      : Option<Condition>,
    pub equipment_condition     : Option<Condition>,
    pub capacity                : Option<u32>,
    pub staff_count             : Option<u32>,
    pub surface_area            : Option<f64>,
    pub hourly_rate             : Option<f64>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Facility {
    pub id: String,
    #[serde(flatten)]
    pub details: FacilityDetails,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct FilterOptions {
    pub sports: Vec<String>,
    pub regions: Vec<String>,
    pub equipment: Vec<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewFacilityRequest {
    #[serde(flatten)]
    pub details: FacilityDetails,
    #[serde(default)]
    pub attachment_urls: Vec<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct FacilityRequest {
    pub id: String,
    #[serde(flatten)]
    pub details: FacilityDetails,
    pub requested_by: String,
    pub requester_email: String,
    pub status: RequestStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    pub attachment_urls: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facility_id: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// The reviewed request and the facility that was created from it.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct ApprovedFacilityRequest {
    pub request: FacilityRequest,
    pub facility: Facility,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct RejectFacilityRequest {
    pub reason: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    User,
    Admin,
    SuperAdmin,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(default)]
pub struct Profile {
    pub first_name      : Option<String>,
    pub last_name       : Option<String>,
    pub phone           : Option<String>,
    pub gender          : Option<Gender>,
    pub birth_date      : Option<String>,
    pub job_title       : Option<String>,
    pub city            : Option<String>,
    pub favorite_sports : Vec<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct User {
    pub id: String,
    pub email: String,
    pub role: UserRole,
    pub name: String,
    #[serde(flatten)]
    pub profile: Profile,
    pub created_at: i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct UpdateProfile {
    pub name: String,
    #[serde(flatten)]
    pub profile: Profile,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct ChangeUserRole {
    pub role: UserRole,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct JwtToken {
    pub token: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Cancelled,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewReservation {
    pub facility_id: String,
    /// Unix timestamp in milliseconds
    pub start: i64,
    /// Unix timestamp in milliseconds
    pub end: i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Reservation {
    pub id: String,
    pub user_id: String,
    pub user_email: String,
    pub facility_id: String,
    pub start: i64,
    pub end: i64,
    pub status: ReservationStatus,
    pub total_cost: f64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct ChangeReservationStatus {
    pub status: ReservationStatus,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewEquipment {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Equipment {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct FooterLink {
    pub label: String,
    pub url: String,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(default)]
pub struct SocialLinks {
    pub facebook  : Option<String>,
    pub instagram : Option<String>,
    pub twitter   : Option<String>,
    pub youtube   : Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Settings {
    pub site_name: String,
    pub site_description: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub contact_address: Option<String>,
    #[serde(default)]
    pub social_links: SocialLinks,
    pub hero_title: String,
    pub hero_subtitle: String,
    #[serde(default)]
    pub footer_links: Vec<FooterLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

/// The column headers of an uploaded CSV file together
/// with a suggested binding of import fields.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct ImportHeaders {
    pub headers: Vec<ImportHeader>,
    pub fields: Vec<ImportFieldInfo>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct ImportHeader {
    /// As found in the file
    pub column: String,
    /// Normalized for display
    pub normalized: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct ImportFieldInfo {
    pub field: String,
    pub mandatory: bool,
    pub type_hint: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_column: Option<String>,
}

/// A CSV file and the columns to read each field from.
///
/// Fields without a column are skipped.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct ImportRequest {
    pub csv: String,
    #[serde(default)]
    pub mapping: std::collections::BTreeMap<String, String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct ImportReport {
    pub imported: usize,
    pub skipped_lines: Vec<usize>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "snake_case")]
pub enum AccessDecision {
    Loading,
    RedirectToLogin,
    RedirectToHome,
    Render,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Error {
    /// The HTTP status code of the error.
    pub http_status: u16,
    /// A human-readable message describing the error.
    pub message: String,
}
