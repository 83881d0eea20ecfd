mod cache;
mod disabled;
mod google;
mod nominatim;
mod opencage;

pub use self::{cache::*, disabled::*, google::*, nominatim::*, opencage::*};

use std::{sync::Arc, time::Duration};

use parking_lot::Mutex;
use reqwest::blocking::Client;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Identifies this application at public geocoding services.
pub const USER_AGENT: &str = concat!("maroc-sport-hub/", env!("CARGO_PKG_VERSION"));

/// An HTTP client that is shared by all lookups of a gateway.
///
/// It is built on first use, i.e. on a blocking thread and
/// never on an async worker.
#[derive(Debug, Clone, Default)]
struct HttpClient(Arc<Mutex<Option<Client>>>);

impl HttpClient {
    fn get(&self) -> reqwest::Result<Client> {
        let mut client = self.0.lock();
        if let Some(client) = &*client {
            return Ok(client.clone());
        }
        let built = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        log::debug!("Created HTTP client for geocoding requests");
        *client = Some(built.clone());
        Ok(built)
    }

    #[cfg(test)]
    fn is_built(&self) -> bool {
        self.0.lock().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_the_client_once() {
        let http = HttpClient::default();
        assert!(!http.is_built());
        http.get().unwrap();
        assert!(http.is_built());
        let shared = http.clone();
        shared.get().unwrap();
        assert!(Arc::ptr_eq(&http.0, &shared.0));
    }
}
