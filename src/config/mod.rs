use anyhow::{anyhow, Result};
use std::{
    env, fs,
    io::ErrorKind,
    net::IpAddr,
    path::{Path, PathBuf},
    time::Duration,
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "msh.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";

const DEFAULT_TOKEN_VALIDITY: Duration = Duration::from_secs(24 * 60 * 60);

pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
    pub auth: Auth,
    pub geocoding: Geocoding,
    pub storage: Storage,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        Ok(cfg)
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u32,
}

pub struct WebServer {
    pub address: IpAddr,
    pub port: u16,
    pub enable_cors: bool,
    pub secret_key: Option<String>,
}

pub struct Auth {
    /// How long issued bearer tokens are accepted.
    pub token_validity: Duration,
}

pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
    pub cache: bool,
    /// Appended to all address queries.
    pub country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeocodingGateway {
    OpenCage {
        api_key: String,
    },
    Nominatim {
        base_url: Option<String>,
        country_codes: Option<String>,
    },
    Google {
        api_key: String,
        region: Option<String>,
    },
}

pub struct Storage {
    /// File system directory of uploaded attachments.
    pub upload_dir: PathBuf,
    pub url_prefix: String,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            webserver,
            auth,
            geocoding,
            gateway,
            storage,
        } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.unwrap_or_default();
        if connection_pool_size == 0 {
            return Err(anyhow!("The connection pool must not be empty"));
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::WebServer {
            address,
            port,
            cors,
            secret_key,
        } = webserver.unwrap_or_default();
        let webserver = WebServer {
            address,
            port,
            enable_cors: cors,
            secret_key: secret_key.filter(|key| !key.trim().is_empty()),
        };

        let raw::Auth { token_validity } = auth.unwrap_or_default();
        let auth = Auth {
            token_validity: token_validity.unwrap_or(DEFAULT_TOKEN_VALIDITY),
        };

        let (geo_gateway, cache, country) = match geocoding {
            Some(raw::Geocoding {
                gateway: gw_name,
                cache,
                country,
            }) => {
                let gw = match gw_name {
                    Some(gw_name) => Some(geocoding_gateway(gw_name, gateway.unwrap_or_default())?),
                    None => None,
                };
                (gw, cache, country)
            }
            None => (None, false, None),
        };
        let geocoding = Geocoding {
            gateway: geo_gateway,
            cache,
            country: country.filter(|c| !c.trim().is_empty()),
        };

        let raw::Storage {
            upload_dir,
            url_prefix,
        } = storage.unwrap_or_default();
        let storage = Storage {
            upload_dir,
            url_prefix,
        };

        Ok(Self {
            db,
            webserver,
            auth,
            geocoding,
            storage,
        })
    }
}

fn geocoding_gateway(
    gw_name: raw::GeocodingGateway,
    gateway: raw::Gateway,
) -> Result<GeocodingGateway> {
    let toml_name = toml::Value::try_from(gw_name)?;
    let missing = || anyhow!("Missing {toml_name} gateway configuration");
    let gw = match gw_name {
        raw::GeocodingGateway::Opencage => {
            let raw::OpenCage { api_key } = gateway.opencage.ok_or_else(missing)?;
            GeocodingGateway::OpenCage { api_key }
        }
        raw::GeocodingGateway::Nominatim => {
            // The public instance is used without any configuration
            let raw::Nominatim {
                base_url,
                country_codes,
            } = gateway.nominatim.unwrap_or_default();
            GeocodingGateway::Nominatim {
                base_url,
                country_codes,
            }
        }
        raw::GeocodingGateway::Google => {
            let raw::Google { api_key, region } = gateway.google.ok_or_else(missing)?;
            GeocodingGateway::Google { api_key, region }
        }
    };
    Ok(gw)
}
