use msh_core::gateways::geocode::{GeoCodingGateway, GeocodingError};
use msh_entities::geo::MapPoint;
use serde::Deserialize;

use super::HttpClient;

pub const GOOGLE_GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Geocoding by the Google Maps Geocoding API.
#[derive(Debug, Clone)]
pub struct Google {
    api_key: String,
    region: Option<String>,
    http: HttpClient,
}

impl Google {
    pub fn new(api_key: String, region: Option<String>) -> Self {
        Self {
            api_key,
            region,
            http: HttpClient::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Response {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: Location,
}

#[derive(Debug, Deserialize)]
struct Location {
    lat: f64,
    lng: f64,
}

fn location_of_response(response: Response) -> Result<Option<MapPoint>, GeocodingError> {
    match response.status.as_str() {
        "OK" => Ok(response.results.first().and_then(|r| {
            let Location { lat, lng } = &r.geometry.location;
            MapPoint::try_from_lat_lng_deg(*lat, *lng)
        })),
        "ZERO_RESULTS" => Ok(None),
        status => Err(GeocodingError::Response(match response.error_message {
            Some(msg) => format!("{status}: {msg}"),
            None => status.to_string(),
        })),
    }
}

impl GeoCodingGateway for Google {
    fn resolve_address_lat_lng(&self, query: &str) -> Result<Option<MapPoint>, GeocodingError> {
        let mut params = vec![("address", query), ("key", self.api_key.as_str())];
        if let Some(region) = &self.region {
            params.push(("region", region.as_str()));
        }
        let response: Response = self
            .http
            .get()
            .and_then(|client| client.get(GOOGLE_GEOCODE_URL).query(&params).send())
            .and_then(|response| response.error_for_status())
            .map_err(|err| GeocodingError::Request(err.to_string()))?
            .json()
            .map_err(|err| GeocodingError::Response(err.to_string()))?;
        location_of_response(response)
    }
}
