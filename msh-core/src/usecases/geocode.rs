use super::prelude::*;
use crate::gateways::geocode::{GeoCodingGateway, GeocodingQuery};

/// Casablanca city centre.
pub const FALLBACK_LOCATION: MapPoint = MapPoint::from_lat_lng_deg(33.5731, -7.5898);

pub fn resolve_coordinate(gw: &dyn GeoCodingGateway, query: &GeocodingQuery) -> Result<MapPoint> {
    let query = query.to_query_string();
    if query.is_empty() {
        return Err(Error::AddressNotFound);
    }
    match gw.resolve_address_lat_lng(&query)? {
        Some(pos) if pos.is_valid() => Ok(pos),
        Some(pos) => {
            log::warn!("Geocoding returned an invalid position for '{query}': {pos}");
            Err(Error::AddressNotFound)
        }
        None => Err(Error::AddressNotFound),
    }
}

/// Always returns a coordinate, on any failure the fallback location.
pub fn resolve_coordinate_or_fallback(gw: &dyn GeoCodingGateway, query: &GeocodingQuery) -> MapPoint {
    if query.is_blank() {
        return FALLBACK_LOCATION;
    }
    match resolve_coordinate(gw, query) {
        Ok(pos) => pos,
        Err(Error::AddressNotFound) => {
            log::debug!("No geocoding result for '{}'", query.to_query_string());
            FALLBACK_LOCATION
        }
        Err(err) => {
            log::warn!("Unable to geocode '{}': {err}", query.to_query_string());
            FALLBACK_LOCATION
        }
    }
}

pub fn geocoding_query_of_address(address: &Address, country: Option<&str>) -> GeocodingQuery {
    GeocodingQuery {
        address: address.street.clone(),
        city: address.city.clone().or_else(|| address.commune.clone()),
        region: address.region.clone(),
        country: country.map(ToString::to_string),
    }
}

/// Tries to resolve the location of a facility without coordinates.
///
/// The details are returned unchanged if they already contain
/// a location or the address could not be resolved.
pub fn locate_facility(
    gw: &dyn GeoCodingGateway,
    mut details: FacilityDetails,
    country: Option<&str>,
) -> FacilityDetails {
    if details.location.is_some() || details.address.is_empty() {
        return details;
    }
    let query = geocoding_query_of_address(&details.address, country);
    match resolve_coordinate(gw, &query) {
        Ok(pos) => {
            log::debug!("Located facility '{}' at {pos}", details.name);
            details.location = Some(pos);
        }
        Err(err) => {
            log::warn!("Unable to locate facility '{}': {err}", details.name);
        }
    }
    details
}
