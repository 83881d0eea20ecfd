use msh_core::gateways::geocode::{GeoCodingGateway, GeocodingError};
use msh_entities::geo::MapPoint;

/// Used if no geocoding provider is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoGeoCoding;

impl GeoCodingGateway for NoGeoCoding {
    fn resolve_address_lat_lng(&self, query: &str) -> Result<Option<MapPoint>, GeocodingError> {
        log::debug!("Geocoding is disabled: '{query}' is not resolved");
        Ok(None)
    }
}
