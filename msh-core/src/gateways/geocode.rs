use crate::entities::MapPoint;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeocodingError {
    #[error("Geocoding request failed: {0}")]
    Request(String),
    #[error("Unexpected geocoding response: {0}")]
    Response(String),
}

pub trait GeoCodingGateway {
    /// Resolves a free-text address.
    ///
    /// Returns `Ok(None)` if the provider has no result.
    fn resolve_address_lat_lng(&self, query: &str) -> Result<Option<MapPoint>, GeocodingError>;
}

impl<G> GeoCodingGateway for Box<G>
where
    G: GeoCodingGateway + ?Sized,
{
    fn resolve_address_lat_lng(&self, query: &str) -> Result<Option<MapPoint>, GeocodingError> {
        (**self).resolve_address_lat_lng(query)
    }
}

impl<G> GeoCodingGateway for Arc<G>
where
    G: GeoCodingGateway + ?Sized,
{
    fn resolve_address_lat_lng(&self, query: &str) -> Result<Option<MapPoint>, GeocodingError> {
        (**self).resolve_address_lat_lng(query)
    }
}

/// The parts of an address that are sent to a geocoding provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeocodingQuery {
    pub address: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
}

impl GeocodingQuery {
    /// Joins all non-blank parts with `", "`.
    pub fn to_query_string(&self) -> String {
        let Self {
            address,
            city,
            region,
            country,
        } = self;
        [address, city, region, country]
            .into_iter()
            .flatten()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn is_blank(&self) -> bool {
        self.to_query_string().is_empty()
    }
}
