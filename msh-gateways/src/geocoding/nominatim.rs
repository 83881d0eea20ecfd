use msh_core::gateways::geocode::{GeoCodingGateway, GeocodingError};
use msh_entities::geo::MapPoint;
use serde::Deserialize;

use super::HttpClient;

pub const NOMINATIM_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Geocoding by the OpenStreetMap Nominatim service.
#[derive(Debug, Clone)]
pub struct Nominatim {
    base_url: String,
    country_codes: Option<String>,
    http: HttpClient,
}

impl Nominatim {
    pub fn new(base_url: Option<String>, country_codes: Option<String>) -> Self {
        Self {
            base_url: base_url.unwrap_or_else(|| NOMINATIM_BASE_URL.to_string()),
            country_codes,
            http: HttpClient::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Place {
    lat: String,
    lon: String,
}

fn first_location(places: &[Place]) -> Result<Option<MapPoint>, GeocodingError> {
    let Some(place) = places.first() else {
        return Ok(None);
    };
    let lat = place.lat.parse::<f64>();
    let lng = place.lon.parse::<f64>();
    match (lat, lng) {
        (Ok(lat), Ok(lng)) => Ok(MapPoint::try_from_lat_lng_deg(lat, lng)),
        _ => Err(GeocodingError::Response(format!(
            "invalid coordinate {},{}",
            place.lat, place.lon
        ))),
    }
}

impl GeoCodingGateway for Nominatim {
    fn resolve_address_lat_lng(&self, query: &str) -> Result<Option<MapPoint>, GeocodingError> {
        let url = format!("{}/search", self.base_url.trim_end_matches('/'));
        let mut params = vec![("q", query), ("format", "json"), ("limit", "1")];
        if let Some(codes) = &self.country_codes {
            params.push(("countrycodes", codes.as_str()));
        }
        let response = self
            .http
            .get()
            .and_then(|client| client.get(&url).query(&params).send())
            .and_then(|response| response.error_for_status())
            .map_err(|err| GeocodingError::Request(err.to_string()))?;
        let places: Vec<Place> = response
            .json()
            .map_err(|err| GeocodingError::Response(err.to_string()))?;
        log::debug!("Nominatim found {} place(s) for '{query}'", places.len());
        first_location(&places)
    }
}
