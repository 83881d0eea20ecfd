use geocoding::{Forward, Opencage, Point};
use msh_core::gateways::geocode::{GeoCodingGateway, GeocodingError};
use msh_entities::geo::MapPoint;

/// Geocoding by the OpenCage Data API.
#[derive(Debug, Clone)]
pub struct OpenCage {
    api_key: String,
}

impl OpenCage {
    pub fn new(api_key: String) -> Self {
        Self { api_key }
    }
}

impl GeoCodingGateway for OpenCage {
    fn resolve_address_lat_lng(&self, query: &str) -> Result<Option<MapPoint>, GeocodingError> {
        let oc_req = Opencage::new(self.api_key.clone());
        let points: Vec<Point<f64>> = oc_req
            .forward(query)
            .map_err(|err| GeocodingError::Request(err.to_string()))?;
        let Some(point) = points.first() else {
            log::debug!("No location found for '{query}'");
            return Ok(None);
        };
        log::debug!("Resolved address location '{query}': {point:?}");
        // x is the longitude
        Ok(MapPoint::try_from_lat_lng_deg(point.y(), point.x()))
    }
}
