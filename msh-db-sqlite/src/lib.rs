#[macro_use]
extern crate diesel;

use anyhow::Result as Fallible;
use diesel::{r2d2, sqlite::SqliteConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use msh_core::{repositories as repo, usecases as uc};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::{
    cell::{RefCell, RefMut},
    sync::Arc,
};

mod models;
mod repo_impl;
mod schema;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

type ConnectionManager = r2d2::ConnectionManager<SqliteConnection>;
type ConnectionPool = r2d2::Pool<ConnectionManager>;
type PooledConnection = r2d2::PooledConnection<ConnectionManager>;

/// A single writer excludes all readers.
type LockedPool = Arc<RwLock<ConnectionPool>>;

fn checkout<G>(guard: G, access: &str) -> Fallible<(G, RefCell<PooledConnection>)>
where
    G: std::ops::Deref<Target = ConnectionPool>,
{
    match guard.get() {
        Ok(conn) => Ok((guard, RefCell::new(conn))),
        Err(err) => {
            log::error!("No pooled database connection available for {access} access: {err}");
            Err(err.into())
        }
    }
}

/// Concurrent read access.
///
/// All write operations fail.
pub struct DbReadOnly<'a> {
    _guard: RwLockReadGuard<'a, ConnectionPool>,
    conn: RefCell<PooledConnection>,
}

/// Exclusive read/write access.
pub struct DbReadWrite<'a> {
    _guard: RwLockWriteGuard<'a, ConnectionPool>,
    conn: RefCell<PooledConnection>,
}

/// A connection within a running transaction.
pub struct DbConnection<'a> {
    conn: RefCell<&'a mut SqliteConnection>,
}

impl DbReadWrite<'_> {
    /// Runs `f` within a transaction that is rolled back on any error.
    ///
    /// Errors of `f` are passed through unchanged.
    pub fn transaction<T, F, E>(&mut self, f: F) -> Result<T, uc::Error>
    where
        F: FnOnce(&DbConnection) -> Result<T, E>,
        E: Into<uc::Error>,
    {
        use diesel::Connection as _;
        let mut failure: Option<uc::Error> = None;
        let result = self.conn.get_mut().transaction(|conn| {
            let db = DbConnection {
                conn: RefCell::new(&mut **conn),
            };
            f(&db).map_err(|err| {
                failure = Some(err.into());
                diesel::result::Error::RollbackTransaction
            })
        });
        result.map_err(|err| match failure.take() {
            Some(err) => err,
            None => uc::Error::Repo(repo_impl::from_diesel_err(err)),
        })
    }

    fn sqlite_conn(&self) -> RefMut<PooledConnection> {
        self.conn.borrow_mut()
    }
}

/// The shared handle of the connection pool.
#[derive(Clone)]
pub struct Connections {
    pool: LockedPool,
}

const DATABASE_SETTINGS: &str = r#"
PRAGMA journal_mode = WAL;
PRAGMA synchronous = NORMAL;
PRAGMA wal_autocheckpoint = 1000;
PRAGMA wal_checkpoint(TRUNCATE);
PRAGMA secure_delete = 0;
PRAGMA automatic_index = 1;
PRAGMA defer_foreign_keys = 1;
PRAGMA recursive_triggers = 1;
PRAGMA encoding = 'UTF-8';
"#;

// Not persisted and therefore applied to every new connection.
const CONNECTION_SETTINGS: &str = "PRAGMA foreign_keys = 1; PRAGMA busy_timeout = 5000;";

#[derive(Debug, Clone, Copy)]
struct ConnectionSettings;

impl r2d2::CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionSettings {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        use diesel::connection::SimpleConnection as _;
        conn.batch_execute(CONNECTION_SETTINGS)
            .map_err(r2d2::Error::QueryError)
    }
}

impl Connections {
    /// Opens the database at `url` and configures it.
    ///
    /// Fails immediately if the database cannot be opened.
    pub fn init(url: &str, pool_size: u32) -> Fallible<Self> {
        use diesel::{connection::SimpleConnection as _, Connection as _};
        // r2d2 would keep retrying an inaccessible file
        SqliteConnection::establish(url)?;
        let pool = ConnectionPool::builder()
            .max_size(pool_size)
            .connection_customizer(Box::new(ConnectionSettings))
            .build(ConnectionManager::new(url))?;
        pool.get()?.batch_execute(DATABASE_SETTINGS)?;
        log::debug!("Opened database {url} with up to {pool_size} connections");
        Ok(Self {
            pool: Arc::new(RwLock::new(pool)),
        })
    }

    pub fn shared(&self) -> Fallible<DbReadOnly> {
        let (guard, conn) = checkout(self.pool.read(), "read-only")?;
        Ok(DbReadOnly {
            _guard: guard,
            conn,
        })
    }

    pub fn exclusive(&self) -> Fallible<DbReadWrite> {
        let (guard, conn) = checkout(self.pool.write(), "read/write")?;
        Ok(DbReadWrite {
            _guard: guard,
            conn,
        })
    }
}

pub fn run_embedded_database_migrations(conn: DbReadWrite<'_>) -> Fallible<()> {
    log::info!("Running embedded database migrations");
    let mut sqlite_conn = conn.sqlite_conn();
    let applied = sqlite_conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| anyhow::anyhow!("Database migration failed: {err}"))?;
    for version in applied {
        log::info!("Applied database migration {version}");
    }
    Ok(())
}
