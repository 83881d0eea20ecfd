use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::{address::*, geo::*, id::*, time::*};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, EnumIter)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum FacilityType {
    Indoor,
    Outdoor,
}

impl Default for FacilityType {
    fn default() -> Self {
        Self::Outdoor
    }
}

/// Assessment of the condition of an establishment,
/// a building or the installed equipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, EnumIter)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Condition {
    Excellent,
    Good,
    Fair,
    Poor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquipmentItem {
    pub name: String,
    pub quantity: u32,
}

/// The descriptive part of a facility that is shared
/// between a [`Facility`] and a facility request.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FacilityDetails {
    pub name: String,
    pub description: String,
    pub address: Address,
    pub location: Option<MapPoint>,
    pub sports: Vec<String>,
    pub equipment: Vec<EquipmentItem>,
    pub facility_type: FacilityType,
    pub accessible: bool,
    pub establishment_condition: Option<Condition>,
    pub building_condition: Option<Condition>,
    pub equipment_condition: Option<Condition>,
    pub capacity: Option<u32>,
    pub staff_count: Option<u32>,
    /// Surface area in square meters
    pub surface_area: Option<f64>,
    /// Price of a reservation per hour (MAD)
    pub hourly_rate: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Facility {
    pub id: Id,
    pub details: FacilityDetails,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
