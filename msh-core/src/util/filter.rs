use crate::{
    entities::*,
    util::text::{normalize_name, prepare_name_list},
};

/// Criteria to narrow down the facility catalog.
///
/// Each non-empty name set is a group that matches if the facility
/// has any of its members. Groups are combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacilityFilter {
    pub sports: Vec<String>,
    pub regions: Vec<String>,
    pub equipment: Vec<String>,
    pub is_indoor: bool,
    pub is_outdoor: bool,
    pub accessible: bool,
    pub text: Option<String>,
}

impl FacilityFilter {
    pub fn is_empty(&self) -> bool {
        let Self {
            sports,
            regions,
            equipment,
            is_indoor,
            is_outdoor,
            accessible,
            text,
        } = self;
        sports.iter().all(|s| s.trim().is_empty())
            && regions.iter().all(|s| s.trim().is_empty())
            && equipment.iter().all(|s| s.trim().is_empty())
            && is_indoor == is_outdoor
            && !accessible
            && text.as_deref().map(str::trim).unwrap_or_default().is_empty()
    }

    fn required_type(&self) -> Option<FacilityType> {
        match (self.is_indoor, self.is_outdoor) {
            (true, false) => Some(FacilityType::Indoor),
            (false, true) => Some(FacilityType::Outdoor),
            _ => None,
        }
    }
}

fn normalized_set(names: &[String]) -> Vec<String> {
    names
        .iter()
        .map(|n| normalize_name(n))
        .filter(|n| !n.is_empty())
        .collect()
}

struct Predicate {
    sports: Vec<String>,
    regions: Vec<String>,
    equipment: Vec<String>,
    facility_type: Option<FacilityType>,
    accessible: bool,
    text: Option<String>,
}

impl From<&FacilityFilter> for Predicate {
    fn from(filter: &FacilityFilter) -> Self {
        Self {
            sports: normalized_set(&filter.sports),
            regions: normalized_set(&filter.regions),
            equipment: normalized_set(&filter.equipment),
            facility_type: filter.required_type(),
            accessible: filter.accessible,
            text: filter
                .text
                .as_deref()
                .map(normalize_name)
                .filter(|t| !t.is_empty()),
        }
    }
}

fn any_of<'a>(selected: &[String], mut values: impl Iterator<Item = &'a str>) -> bool {
    selected.is_empty() || values.any(|v| selected.contains(&normalize_name(v)))
}

fn contains_text(details: &FacilityDetails, text: &str) -> bool {
    let Address {
        street,
        commune,
        city,
        province,
        region,
    } = &details.address;
    std::iter::once(details.name.as_str())
        .chain(
            [street, commune, city, province, region]
                .into_iter()
                .flatten()
                .map(String::as_str),
        )
        .any(|field| field.to_lowercase().contains(text))
}

impl Predicate {
    fn matches(&self, details: &FacilityDetails) -> bool {
        any_of(&self.sports, details.sports.iter().map(String::as_str))
            && any_of(&self.regions, details.address.region.as_deref().into_iter())
            && any_of(
                &self.equipment,
                details.equipment.iter().map(|e| e.name.as_str()),
            )
            && self
                .facility_type
                .map_or(true, |t| details.facility_type == t)
            && (!self.accessible || details.accessible)
            && self
                .text
                .as_deref()
                .map_or(true, |text| contains_text(details, text))
    }
}

/// Returns the facilities that satisfy the filter in their original order.
pub fn filter_facilities(facilities: &[Facility], filter: &FacilityFilter) -> Vec<Facility> {
    if filter.is_empty() {
        return facilities.to_vec();
    }
    let predicate = Predicate::from(filter);
    facilities
        .iter()
        .filter(|f| predicate.matches(&f.details))
        .cloned()
        .collect()
}

/// The distinct choices that are offered next to the map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub sports: Vec<String>,
    pub regions: Vec<String>,
    pub equipment: Vec<String>,
}

fn sorted_distinct<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut names = prepare_name_list(names);
    names.sort_by_cached_key(|n| normalize_name(n));
    names
}

impl FilterOptions {
    pub fn collect(facilities: &[Facility]) -> Self {
        let details = || facilities.iter().map(|f| &f.details);
        Self {
            sports: sorted_distinct(details().flat_map(|d| d.sports.iter().map(String::as_str))),
            regions: sorted_distinct(details().filter_map(|d| d.address.region.as_deref())),
            equipment: sorted_distinct(
                details().flat_map(|d| d.equipment.iter().map(|e| e.name.as_str())),
            ),
        }
    }

    /// Offers further equipment names next to the collected ones.
    pub fn add_equipment<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) {
        let collected = std::mem::take(&mut self.equipment);
        self.equipment = sorted_distinct(collected.iter().map(String::as_str).chain(names.into_iter().map(|n| n)));
    }
}
