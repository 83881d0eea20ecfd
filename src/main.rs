use std::{fs, path::Path, sync::Arc};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use msh_application::prelude as flows;
use msh_core::{
    gateways::{geocode::GeoCodingGateway, storage::AttachmentStorage},
    import::{ColumnMapping, ImportField},
    usecases::ImportReport,
};
use msh_db_sqlite::Connections;
use msh_gateways::{
    geocoding::{CachedGeoCoding, Google, NoGeoCoding, Nominatim, OpenCage},
    storage::LocalAttachmentStorage,
};
use msh_webserver::{Cfg, ServerOptions};

mod cli;
mod config;

use self::{
    cli::{Cli, Command, ImportArgs, ServeArgs},
    config::{Config, GeocodingGateway},
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Cli {
        config,
        db_url,
        command,
    } = Cli::parse();

    let mut cfg = Config::try_load_from_file_or_default(config)?;
    if let Some(db_url) = db_url {
        cfg.db.conn_sqlite = db_url;
    }

    let connections = open_database(&cfg)?;

    match command.unwrap_or_else(|| Command::Serve(ServeArgs::default())) {
        Command::Serve(args) => serve(cfg, connections, args).await,
        Command::Import(args) => {
            let report = import(&connections, &args)?;
            println!(
                "Imported {} facilities from {}",
                report.imported,
                args.csv.display()
            );
            if !report.skipped_lines.is_empty() {
                println!("Skipped lines: {:?}", report.skipped_lines);
            }
            Ok(())
        }
        Command::SetRole { email, role } => {
            let user = flows::set_user_role(&connections, &email, role)?;
            println!("{} is now {}", user.email, user.role);
            Ok(())
        }
    }
}

fn open_database(cfg: &Config) -> Result<Connections> {
    log::info!("Connecting to SQLite database {}", cfg.db.conn_sqlite);
    let connections = Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size)?;
    msh_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;
    Ok(connections)
}

async fn serve(cfg: Config, connections: Connections, args: ServeArgs) -> Result<()> {
    let Config {
        webserver,
        auth,
        geocoding,
        storage,
        ..
    } = cfg;
    let token_validity = time::Duration::try_from(auth.token_validity)
        .map_err(|err| anyhow!("Invalid token validity: {err}"))?;
    let options = ServerOptions {
        address: webserver.address,
        port: args.port.unwrap_or(webserver.port),
        enable_cors: args.enable_cors || webserver.enable_cors,
        secret_key: webserver.secret_key,
        token_validity,
    };
    let geo_gw = geocoding_gateway(geocoding.gateway, geocoding.cache);
    let storage: Box<dyn AttachmentStorage + Send + Sync> = Box::new(
        LocalAttachmentStorage::new(storage.upload_dir, storage.url_prefix),
    );
    let cfg = Cfg {
        geocoding_country: geocoding.country,
    };
    msh_webserver::run(connections, options, cfg, geo_gw, storage).await;
    Ok(())
}

fn geocoding_gateway(
    gateway: Option<GeocodingGateway>,
    cache: bool,
) -> Arc<dyn GeoCodingGateway + Send + Sync> {
    let Some(gateway) = gateway else {
        log::warn!("No geocoding gateway configured: addresses are not resolved");
        return Arc::new(NoGeoCoding);
    };
    let gw: Box<dyn GeoCodingGateway + Send + Sync> = match gateway {
        GeocodingGateway::OpenCage { api_key } => {
            log::info!("Use OpenCage geocoding");
            Box::new(OpenCage::new(api_key))
        }
        GeocodingGateway::Nominatim {
            base_url,
            country_codes,
        } => {
            log::info!("Use Nominatim geocoding");
            Box::new(Nominatim::new(base_url, country_codes))
        }
        GeocodingGateway::Google { api_key, region } => {
            log::info!("Use Google geocoding");
            Box::new(Google::new(api_key, region))
        }
    };
    if cache {
        Arc::new(CachedGeoCoding::new(gw))
    } else {
        Arc::new(gw)
    }
}

fn import(connections: &Connections, args: &ImportArgs) -> Result<ImportReport> {
    let data = read_csv_file(&args.csv)?;
    let mapping = column_mapping(&data, &args.bindings)?;
    Ok(flows::import_facilities(connections, &data, mapping)?)
}

fn read_csv_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("Unable to read {}", path.display()))
}

/// Explicit bindings override the suggested mapping.
fn column_mapping(data: &[u8], bindings: &[(ImportField, String)]) -> Result<Option<ColumnMapping>> {
    if bindings.is_empty() {
        return Ok(None);
    }
    let (_, mut mapping) = flows::read_import_headers(data)?;
    for (field, column) in bindings {
        if column.is_empty() {
            mapping.skip(*field);
        } else {
            mapping.bind(*field, column.as_str());
        }
    }
    Ok(Some(mapping))
}

#[cfg(test)]
mod tests {
    use super::*;
    use msh_core::repositories::FacilityRepo;
    use std::path::PathBuf;

    const CSV: &str = "\
Nom,Lat,Lng,Ville,Capacité
Stade A,\"33,5\",\"-7,5\",Casablanca,1000
Salle B,34.02,-6.83,Rabat,200
Sans coordonnées,,,Fès,50
";

    fn setup() -> Connections {
        let connections = Connections::init(":memory:", 1).unwrap();
        msh_db_sqlite::run_embedded_database_migrations(connections.exclusive().unwrap())
            .unwrap();
        connections
    }

    fn csv_file(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("facilities.csv");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn import_with_suggested_mapping() {
        let db = setup();
        let (_dir, csv) = csv_file(CSV);
        let args = ImportArgs {
            csv,
            bindings: vec![],
        };
        let report = import(&db, &args).unwrap();
        assert_eq!(2, report.imported);
        assert_eq!(vec![4], report.skipped_lines);
        assert_eq!(2, db.shared().unwrap().count_facilities().unwrap());
    }

    #[test]
    fn skip_a_suggested_column() {
        let bindings = vec![(ImportField::Capacity, String::new())];
        let mapping = column_mapping(CSV.as_bytes(), &bindings).unwrap().unwrap();
        assert!(mapping.column(ImportField::Capacity).is_none());
        assert_eq!(Some("Nom"), mapping.column(ImportField::Name));
    }

    #[test]
    fn bind_an_unknown_column() {
        let db = setup();
        let (_dir, csv) = csv_file(CSV);
        let args = ImportArgs {
            csv,
            bindings: vec![(ImportField::Name, "Name".into())],
        };
        assert!(import(&db, &args).is_err());
        assert_eq!(0, db.shared().unwrap().count_facilities().unwrap());
    }

    #[test]
    fn missing_csv_file() {
        let db = setup();
        let args = ImportArgs {
            csv: PathBuf::from("does-not-exist.csv"),
            bindings: vec![],
        };
        assert!(import(&db, &args).is_err());
    }

    #[test]
    fn disabled_geocoding() {
        let gw = geocoding_gateway(None, true);
        assert!(gw.resolve_address_lat_lng("Rabat").unwrap().is_none());
    }
}
