//! Mapping of spreadsheet rows onto facility records.

use std::{collections::HashMap, fmt, str::FromStr};

use crate::{
    entities::*,
    util::{
        parse::{parse_decimal, parse_truthy, parse_unsigned, split_list},
        text::fold_diacritics,
    },
};

/// A single row: column name -> cell
pub type Row = HashMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ImportField {
    Name,
    Latitude,
    Longitude,
    Description,
    Address,
    Region,
    Province,
    Commune,
    City,
    Sports,
    Equipment,
    Type,
    Accessible,
    Capacity,
    StaffCount,
    SurfaceArea,
    HourlyRate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeHint {
    Numeric,
    Boolean,
    List,
    Text,
}

impl ImportField {
    pub const ALL: [ImportField; 17] = [
        Self::Name,
        Self::Latitude,
        Self::Longitude,
        Self::Description,
        Self::Address,
        Self::Region,
        Self::Province,
        Self::Commune,
        Self::City,
        Self::Sports,
        Self::Equipment,
        Self::Type,
        Self::Accessible,
        Self::Capacity,
        Self::StaffCount,
        Self::SurfaceArea,
        Self::HourlyRate,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
            Self::Description => "description",
            Self::Address => "address",
            Self::Region => "region",
            Self::Province => "province",
            Self::Commune => "commune",
            Self::City => "city",
            Self::Sports => "sports",
            Self::Equipment => "equipment",
            Self::Type => "type",
            Self::Accessible => "accessible",
            Self::Capacity => "capacity",
            Self::StaffCount => "staff_count",
            Self::SurfaceArea => "surface_area",
            Self::HourlyRate => "hourly_rate",
        }
    }

    pub const fn is_mandatory(self) -> bool {
        matches!(self, Self::Name | Self::Latitude | Self::Longitude)
    }

    pub const fn type_hint(self) -> TypeHint {
        match self {
            Self::Latitude
            | Self::Longitude
            | Self::Capacity
            | Self::StaffCount
            | Self::SurfaceArea
            | Self::HourlyRate => TypeHint::Numeric,
            Self::Accessible => TypeHint::Boolean,
            Self::Sports | Self::Equipment => TypeHint::List,
            Self::Name
            | Self::Description
            | Self::Address
            | Self::Region
            | Self::Province
            | Self::Commune
            | Self::City
            | Self::Type => TypeHint::Text,
        }
    }

    // Normalized header names that are recognized for this field.
    fn synonyms(self) -> &'static [&'static str] {
        match self {
            Self::Name => &["name", "nom", "nom de l'installation", "installation", "title", "titre"],
            Self::Latitude => &["latitude", "lat"],
            Self::Longitude => &["longitude", "lon", "lng", "long"],
            Self::Description => &["description", "desc"],
            Self::Address => &["address", "adresse", "street", "rue"],
            Self::Region => &["region"],
            Self::Province => &["province", "prefecture"],
            Self::Commune => &["commune", "district", "arrondissement"],
            Self::City => &["city", "ville", "localite"],
            Self::Sports => &["sports", "sport", "disciplines", "discipline"],
            Self::Equipment => &["equipment", "equipments", "equipement", "equipements"],
            Self::Type => &["type", "facility type", "type d'installation", "couverture"],
            Self::Accessible => &["accessible", "accessibilite", "pmr", "handicap"],
            Self::Capacity => &["capacity", "capacite"],
            Self::StaffCount => &["staff count", "staff_count", "staff", "personnel", "effectif"],
            Self::SurfaceArea => &["surface area", "surface_area", "surface", "superficie"],
            Self::HourlyRate => &["hourly rate", "hourly_rate", "tarif", "tarif horaire", "prix"],
        }
    }
}

impl fmt::Display for ImportField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown import field: {0}")]
pub struct UnknownImportField(String);

impl FromStr for ImportField {
    type Err = UnknownImportField;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace([' ', '-'], "_");
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == key)
            .ok_or_else(|| UnknownImportField(s.to_string()))
    }
}

/// Trims, lower-cases, folds diacritics and collapses whitespace.
pub fn normalize_column_name(raw: &str) -> String {
    fold_diacritics(raw)
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Binds import fields to source columns.
///
/// Fields without a binding are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMapping {
    bindings: HashMap<ImportField, String>,
}

impl ColumnMapping {
    pub fn bind(&mut self, field: ImportField, column: impl Into<String>) {
        self.bindings.insert(field, column.into());
    }

    pub fn skip(&mut self, field: ImportField) {
        self.bindings.remove(&field);
    }

    pub fn column(&self, field: ImportField) -> Option<&str> {
        self.bindings.get(&field).map(String::as_str)
    }

    /// Mandatory fields without a column.
    pub fn missing_mandatory_fields(&self) -> Vec<ImportField> {
        ImportField::ALL
            .into_iter()
            .filter(|f| f.is_mandatory() && self.column(*f).is_none())
            .collect()
    }

    /// All bindings ordered by field.
    pub fn bindings(&self) -> Vec<(ImportField, &str)> {
        let mut bindings: Vec<_> = self
            .bindings
            .iter()
            .map(|(f, c)| (*f, c.as_str()))
            .collect();
        bindings.sort_unstable_by_key(|(f, _)| *f);
        bindings
    }
}

/// Suggests a binding for every field that has a header with a known name.
pub fn suggest_mapping(headers: &[String]) -> ColumnMapping {
    let mut mapping = ColumnMapping::default();
    for field in ImportField::ALL {
        let synonyms = field.synonyms();
        if let Some(header) = headers
            .iter()
            .find(|h| synonyms.contains(&normalize_column_name(h).as_str()))
        {
            mapping.bind(field, header.clone());
        }
    }
    mapping
}

fn cell<'r>(row: &'r Row, mapping: &ColumnMapping, field: ImportField) -> Option<&'r str> {
    mapping
        .column(field)
        .and_then(|column| row.get(column))
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
}

fn text(row: &Row, mapping: &ColumnMapping, field: ImportField) -> Option<String> {
    cell(row, mapping, field).map(ToString::to_string)
}

fn parse_facility_type(s: &str) -> FacilityType {
    match normalize_column_name(s).as_str() {
        "indoor" | "couvert" | "interieur" => FacilityType::Indoor,
        _ => FacilityType::Outdoor,
    }
}

/// Maps a single row.
///
/// Returns `None` if a mandatory value is missing or the
/// coordinate is invalid.
pub fn map_row(row: &Row, mapping: &ColumnMapping) -> Option<FacilityDetails> {
    let name = text(row, mapping, ImportField::Name)?;
    let lat = cell(row, mapping, ImportField::Latitude).and_then(parse_decimal)?;
    let lng = cell(row, mapping, ImportField::Longitude).and_then(parse_decimal)?;
    let location = MapPoint::try_from_lat_lng_deg(lat, lng)?;

    let list = |field| {
        cell(row, mapping, field)
            .map(split_list)
            .unwrap_or_default()
    };
    let unsigned = |field| cell(row, mapping, field).and_then(parse_unsigned);
    let decimal = |field| {
        cell(row, mapping, field)
            .and_then(parse_decimal)
            .filter(|v| *v >= 0.0)
    };

    Some(FacilityDetails {
        name,
        description: text(row, mapping, ImportField::Description).unwrap_or_default(),
        address: Address {
            street: text(row, mapping, ImportField::Address),
            commune: text(row, mapping, ImportField::Commune),
            city: text(row, mapping, ImportField::City),
            province: text(row, mapping, ImportField::Province),
            region: text(row, mapping, ImportField::Region),
        },
        location: Some(location),
        sports: list(ImportField::Sports),
        equipment: list(ImportField::Equipment)
            .into_iter()
            .map(|name| EquipmentItem { name, quantity: 1 })
            .collect(),
        facility_type: cell(row, mapping, ImportField::Type)
            .map(parse_facility_type)
            .unwrap_or_default(),
        accessible: cell(row, mapping, ImportField::Accessible)
            .map(parse_truthy)
            .unwrap_or(false),
        establishment_condition: None,
        building_condition: None,
        equipment_condition: None,
        capacity: unsigned(ImportField::Capacity),
        staff_count: unsigned(ImportField::StaffCount),
        surface_area: decimal(ImportField::SurfaceArea),
        hourly_rate: decimal(ImportField::HourlyRate),
    })
}

#[derive(Debug, Clone, Default)]
pub struct MappedRows {
    pub records: Vec<FacilityDetails>,
    /// Line numbers in the source file (the header is line 1).
    pub skipped_lines: Vec<usize>,
}

pub fn map_rows(rows: &[Row], mapping: &ColumnMapping) -> MappedRows {
    let mut mapped = MappedRows::default();
    for (index, row) in rows.iter().enumerate() {
        match map_row(row, mapping) {
            Some(record) => mapped.records.push(record),
            None => {
                let line = index + 2;
                log::debug!("Skipping line {line} of import");
                mapped.skipped_lines.push(line);
            }
        }
    }
    mapped
}
