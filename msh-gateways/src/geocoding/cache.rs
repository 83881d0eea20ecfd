use std::collections::HashMap;

use msh_core::gateways::geocode::{GeoCodingGateway, GeocodingError};
use msh_entities::geo::MapPoint;
use parking_lot::Mutex;

/// Remembers all resolved addresses of the wrapped gateway.
///
/// Misses and failures are not cached. The cache is never evicted.
#[derive(Debug)]
pub struct CachedGeoCoding<G> {
    gateway: G,
    cache: Mutex<HashMap<String, MapPoint>>,
}

impl<G> CachedGeoCoding<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn cached_len(&self) -> usize {
        self.cache.lock().len()
    }
}

fn cache_key(query: &str) -> String {
    query.trim().to_lowercase()
}

impl<G> GeoCodingGateway for CachedGeoCoding<G>
where
    G: GeoCodingGateway,
{
    fn resolve_address_lat_lng(&self, query: &str) -> Result<Option<MapPoint>, GeocodingError> {
        let key = cache_key(query);
        if let Some(pos) = self.cache.lock().get(&key) {
            log::debug!("Found cached location for '{key}'");
            return Ok(Some(*pos));
        }
        // The lock is not held during the request
        let resolved = self.gateway.resolve_address_lat_lng(query)?;
        if let Some(pos) = resolved {
            self.cache.lock().insert(key, pos);
        }
        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingGeoCoding {
        calls: AtomicUsize,
    }

    impl GeoCodingGateway for CountingGeoCoding {
        fn resolve_address_lat_lng(
            &self,
            query: &str,
        ) -> Result<Option<MapPoint>, GeocodingError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match query.trim().to_lowercase().as_str() {
                "fes, maroc" => Ok(Some(MapPoint::from_lat_lng_deg(34.0331, -5.0003))),
                "error" => Err(GeocodingError::Request("connection refused".into())),
                _ => Ok(None),
            }
        }
    }

    #[test]
    fn share_results_of_equal_queries() {
        let gw = CachedGeoCoding::new(CountingGeoCoding::default());
        let first = gw.resolve_address_lat_lng("Fes, Maroc").unwrap();
        let second = gw.resolve_address_lat_lng("  fes, MAROC ").unwrap();
        assert!(first.is_some());
        assert_eq!(first, second);
        assert_eq!(gw.gateway.calls.load(Ordering::SeqCst), 1);
        assert_eq!(gw.cached_len(), 1);
    }

    #[test]
    fn do_not_cache_misses_or_failures() {
        let gw = CachedGeoCoding::new(CountingGeoCoding::default());
        assert!(gw.resolve_address_lat_lng("Atlantis").unwrap().is_none());
        assert!(gw.resolve_address_lat_lng("Atlantis").unwrap().is_none());
        assert!(gw.resolve_address_lat_lng("error").is_err());
        assert!(gw.resolve_address_lat_lng("error").is_err());
        assert_eq!(gw.gateway.calls.load(Ordering::SeqCst), 4);
        assert_eq!(gw.cached_len(), 0);
    }
}
