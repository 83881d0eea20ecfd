pub mod prelude {
    use std::{
        cell::{Cell, RefCell},
        sync::Once,
    };

    pub use msh_core::{
        entities::*,
        gateways::{
            geocode::{GeoCodingGateway, GeocodingError},
            storage::AttachmentStorage,
        },
        repositories::{Error as RepoError, *},
        usecases,
    };
    pub use msh_entities::builders::*;

    pub mod sqlite {
        pub use crate::sqlite::*;
    }

    pub use crate::{
        error::{AppError, BError},
        prelude as flows,
    };

    /// Resolves every address to the same result.
    pub struct DummyGeoCoding {
        result: Option<MapPoint>,
        calls: Cell<usize>,
    }

    impl DummyGeoCoding {
        pub fn found(pos: MapPoint) -> Self {
            Self {
                result: Some(pos),
                calls: Cell::new(0),
            }
        }

        pub fn not_found() -> Self {
            Self {
                result: None,
                calls: Cell::new(0),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.get()
        }
    }

    impl GeoCodingGateway for DummyGeoCoding {
        fn resolve_address_lat_lng(&self, _: &str) -> Result<Option<MapPoint>, GeocodingError> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.result)
        }
    }

    #[derive(Default)]
    pub struct RecordingStorage {
        fail: bool,
        deleted: RefCell<Vec<String>>,
    }

    impl RecordingStorage {
        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }

        pub fn deleted(&self) -> Vec<String> {
            self.deleted.borrow().clone()
        }
    }

    impl AttachmentStorage for RecordingStorage {
        fn delete_attachment(&self, url: &str) -> anyhow::Result<()> {
            if self.fail {
                anyhow::bail!("Storage is not available");
            }
            self.deleted.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    static INIT_LOGGER: Once = Once::new();

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            INIT_LOGGER.call_once(|| {
                let _ = env_logger::builder().is_test(true).try_init();
            });
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            msh_db_sqlite::run_embedded_database_migrations(db_connections.exclusive().unwrap())
                .unwrap();
            Self { db_connections }
        }

        pub fn create_user(&self, email: &str, role: Role) -> User {
            let user = User::build().email(email).role(role).finish();
            self.db_connections
                .exclusive()
                .unwrap()
                .create_user(&user)
                .unwrap();
            user
        }

        pub fn get_user(&self, id: &str) -> User {
            self.db_connections.shared().unwrap().get_user(id).unwrap()
        }

        pub fn create_facility(&self, facility: Facility) -> Facility {
            self.db_connections
                .exclusive()
                .unwrap()
                .create_facility(&facility)
                .unwrap();
            facility
        }

        pub fn get_facility(&self, id: &str) -> Result<Facility, RepoError> {
            self.db_connections.shared().unwrap().get_facility(id)
        }

        pub fn create_facility_request(&self, requester: &User, name: &str) -> FacilityRequest {
            let new_request = usecases::NewFacilityRequest {
                details: Facility::build().name(name).finish().details,
                attachment_urls: vec![],
            };
            let db = self.db_connections.exclusive().unwrap();
            usecases::create_facility_request(&db, requester, new_request).unwrap()
        }
    }
}
