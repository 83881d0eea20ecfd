#[macro_use]
extern crate log;

use std::sync::Arc;

use msh_core::gateways::{geocode::GeoCodingGateway, storage::AttachmentStorage};
use msh_db_sqlite::Connections;

mod adapters;
mod core;
mod web;

pub use web::{Cfg, ServerOptions};

pub async fn run(
    connections: Connections,
    options: ServerOptions,
    cfg: Cfg,
    geo_gw: Arc<dyn GeoCodingGateway + Send + Sync>,
    storage: Box<dyn AttachmentStorage + Send + Sync>,
) {
    web::run(connections.into(), options, cfg, geo_gw, storage).await;
}
