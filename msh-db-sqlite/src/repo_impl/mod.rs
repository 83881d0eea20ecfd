// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use anyhow::anyhow;
use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};
use num_traits::{FromPrimitive, ToPrimitive};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use msh_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod equipment;
mod facility;
mod facility_request;
mod reservation;
mod settings;
mod user;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

fn read_only_violation() -> repo::Error {
    repo::Error::Other(anyhow!("Write access on a read-only connection"))
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|err| repo::Error::Other(err.into()))
}

fn from_json<T: DeserializeOwned>(json: &str) -> Result<T> {
    serde_json::from_str(json).map_err(|err| repo::Error::Other(err.into()))
}

fn parse_column<T: std::str::FromStr>(column: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| repo::Error::Other(anyhow!("Invalid {column}: '{value}'")))
}

fn parse_optional_column<T: std::str::FromStr>(column: &str, value: Option<String>) -> Result<Option<T>> {
    value.map(|v| parse_column(column, &v)).transpose()
}

fn unsigned_from_column(value: Option<i64>) -> Option<u32> {
    value.and_then(|v| u32::try_from(v).ok())
}

fn role_to_column(role: Role) -> i16 {
    role.to_i16().unwrap_or_default()
}

fn role_from_column(value: i16) -> Result<Role> {
    Role::from_i16(value).ok_or_else(|| repo::Error::Other(anyhow!("Invalid role: {value}")))
}

#[derive(Serialize, Deserialize)]
struct EquipmentItemJson {
    name: String,
    quantity: u32,
}

#[derive(Serialize, Deserialize)]
struct FooterLinkJson {
    label: String,
    url: String,
}

/// The descriptive columns shared by facilities and requests.
struct DetailColumns {
    name: String,
    description: String,
    street: Option<String>,
    commune: Option<String>,
    city: Option<String>,
    province: Option<String>,
    region: Option<String>,
    lat: Option<f64>,
    lng: Option<f64>,
    sports: String,
    equipment: String,
    facility_type: String,
    accessible: bool,
    establishment_condition: Option<String>,
    building_condition: Option<String>,
    equipment_condition: Option<String>,
    capacity: Option<i64>,
    staff_count: Option<i64>,
    surface_area: Option<f64>,
    hourly_rate: Option<f64>,
}

impl DetailColumns {
    fn try_from_details(details: &FacilityDetails) -> Result<Self> {
        let FacilityDetails {
            name,
            description,
            address,
            location,
            sports,
            equipment,
            facility_type,
            accessible,
            establishment_condition,
            building_condition,
            equipment_condition,
            capacity,
            staff_count,
            surface_area,
            hourly_rate,
        } = details;
        let equipment: Vec<_> = equipment
            .iter()
            .map(|e| EquipmentItemJson {
                name: e.name.clone(),
                quantity: e.quantity,
            })
            .collect();
        let condition = |c: &Option<Condition>| c.map(|c| c.to_string());
        Ok(Self {
            name: name.clone(),
            description: description.clone(),
            street: address.street.clone(),
            commune: address.commune.clone(),
            city: address.city.clone(),
            province: address.province.clone(),
            region: address.region.clone(),
            lat: location.map(MapPoint::lat_deg),
            lng: location.map(MapPoint::lng_deg),
            sports: to_json(sports)?,
            equipment: to_json(&equipment)?,
            facility_type: facility_type.to_string(),
            accessible: *accessible,
            establishment_condition: condition(establishment_condition),
            building_condition: condition(building_condition),
            equipment_condition: condition(equipment_condition),
            capacity: capacity.map(i64::from),
            staff_count: staff_count.map(i64::from),
            surface_area: *surface_area,
            hourly_rate: *hourly_rate,
        })
    }

    fn try_into_details(self) -> Result<FacilityDetails> {
        let Self {
            name,
            description,
            street,
            commune,
            city,
            province,
            region,
            lat,
            lng,
            sports,
            equipment,
            facility_type,
            accessible,
            establishment_condition,
            building_condition,
            equipment_condition,
            capacity,
            staff_count,
            surface_area,
            hourly_rate,
        } = self;
        let location = match (lat, lng) {
            (Some(lat), Some(lng)) => Some(MapPoint::from_lat_lng_deg(lat, lng)),
            (None, None) => None,
            _ => {
                log::warn!("Incomplete coordinate of facility '{name}'");
                None
            }
        };
        let equipment: Vec<EquipmentItemJson> = from_json(&equipment)?;
        Ok(FacilityDetails {
            description,
            address: Address {
                street,
                commune,
                city,
                province,
                region,
            },
            location,
            sports: from_json(&sports)?,
            equipment: equipment
                .into_iter()
                .map(|EquipmentItemJson { name, quantity }| EquipmentItem { name, quantity })
                .collect(),
            facility_type: parse_column("facility type", &facility_type)?,
            accessible,
            establishment_condition: parse_optional_column("condition", establishment_condition)?,
            building_condition: parse_optional_column("condition", building_condition)?,
            equipment_condition: parse_optional_column("condition", equipment_condition)?,
            capacity: unsigned_from_column(capacity),
            staff_count: unsigned_from_column(staff_count),
            surface_area,
            hourly_rate,
            name,
        })
    }
}
