use std::{net::IpAddr, sync::Arc};

use msh_core::gateways::{geocode::GeoCodingGateway, storage::AttachmentStorage};
use rocket::{figment::Figment, Rocket, Route};

pub mod api;
mod guards;
pub mod jwt;
mod sqlite;


/// Settings that are used by the request handlers.
#[derive(Debug, Clone, Default)]
pub struct Cfg {
    /// Appended to all geocoding queries.
    pub geocoding_country: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ServerOptions {
    pub address: IpAddr,
    pub port: u16,
    pub enable_cors: bool,
    /// Base64 encoded 256-bit key for private cookies.
    pub secret_key: Option<String>,
    pub token_validity: time::Duration,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    figment: Figment,
    cfg: Cfg,
    token_validity: time::Duration,
}

pub(crate) struct Gateways {
    geocoding: Arc<dyn GeoCodingGateway + Send + Sync>,
    storage: Box<dyn AttachmentStorage + Send + Sync>,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
    gateways: Gateways,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        figment,
        cfg,
        token_validity,
    } = options;
    let Gateways { geocoding, storage } = gateways;

    let jwt_state = jwt::JwtState::new(token_validity);
    let geo_gw = guards::GeoCoding(geocoding);
    let storage = guards::Storage(storage);

    let mut instance = rocket::custom(figment)
        .manage(db)
        .manage(jwt_state)
        .manage(geo_gw)
        .manage(storage)
        .manage(cfg);

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

fn figment(options: &ServerOptions) -> Figment {
    let mut figment = rocket::Config::figment()
        .merge(("address", options.address))
        .merge(("port", options.port));
    if let Some(secret_key) = &options.secret_key {
        figment = figment.merge(("secret_key", secret_key));
    }
    figment
}

pub async fn run(
    db: sqlite::Connections,
    options: ServerOptions,
    cfg: Cfg,
    geocoding: Arc<dyn GeoCodingGateway + Send + Sync>,
    storage: Box<dyn AttachmentStorage + Send + Sync>,
) {
    let instance_options = InstanceOptions {
        mounts: mounts(),
        figment: figment(&options),
        cfg,
        token_validity: options.token_validity,
    };
    let gateways = Gateways { geocoding, storage };

    info!("Starting web server on {}:{}", options.address, options.port);
    let instance = rocket_instance(instance_options, db, gateways);
    let server_task = if options.enable_cors {
        match rocket_cors::CorsOptions::default().to_cors() {
            Ok(cors) => instance.attach(cors).launch(),
            Err(err) => {
                error!("Invalid CORS options: {err}");
                return;
            }
        }
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
    }
}
