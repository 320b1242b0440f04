#![allow(proc_macro_derive_resolution_fallback)]
#![recursion_limit = "128"]

#[macro_use]
extern crate log;

use turfbook_application::{SharedSettings, SlotLocks};
use turfbook_core::gateways::payment::PaymentGateway;
use turfbook_db_sqlite::Connections;

mod adapters;
mod core;
mod web;

pub use web::Cfg;

#[allow(clippy::too_many_arguments)]
pub async fn run(
    connections: Connections,
    slot_locks: SlotLocks,
    settings: SharedSettings,
    enable_cors: bool,
    cfg: Cfg,
    payment_gw: Box<dyn PaymentGateway + Send + Sync>,
    version: &'static str,
) {
    web::run(
        connections.into(),
        slot_locks,
        settings,
        enable_cors,
        cfg,
        payment_gw,
        version,
    )
    .await;
}
