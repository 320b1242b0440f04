use turfbook_application::{SharedSettings, SlotLocks};
use turfbook_core::{gateways::payment::PaymentGateway, usecases::BookingPolicy};

use rocket::{config::Config as RocketCfg, Rocket, Route};

pub mod api;
mod guards;
mod sqlite;


#[derive(Debug, Clone)]
pub struct Cfg {
    pub booking_policy: BookingPolicy,
    /// The currency of all payment orders
    pub currency: String,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
    version: &'static str,
}

pub(crate) struct State {
    db: sqlite::Connections,
    slot_locks: SlotLocks,
    settings: SharedSettings,
    payment_gw: Box<dyn PaymentGateway + Send + Sync>,
}

pub(crate) fn rocket_instance(options: InstanceOptions, state: State) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
        version,
    } = options;
    let State {
        db,
        slot_locks,
        settings,
        payment_gw,
    } = state;

    info!(
        "Booking slots from {:?} with a hold window of {}",
        cfg.booking_policy.slot_grid, cfg.booking_policy.hold_window
    );

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let payment_gw = guards::PaymentGw(payment_gw);
    let version = guards::Version(version);

    let mut instance = r
        .manage(db)
        .manage(slot_locks)
        .manage(settings)
        .manage(payment_gw)
        .manage(cfg)
        .manage(version);

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance.register("/", api::catchers())
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

pub async fn run(
    db: sqlite::Connections,
    slot_locks: SlotLocks,
    settings: SharedSettings,
    enable_cors: bool,
    cfg: Cfg,
    payment_gw: Box<dyn PaymentGateway + Send + Sync>,
    version: &'static str,
) {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
        cfg,
        version,
    };
    let state = State {
        db,
        slot_locks,
        settings,
        payment_gw,
    };
    let instance = rocket_instance(options, state);
    let server_task = if enable_cors {
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
        log::error!("Unable to run web server: {err}");
    }
}
