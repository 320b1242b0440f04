use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use turfbook_application::{prelude::sweep_expired_reservations, SharedSettings, SlotLocks};
use turfbook_core::entities::time::Timestamp;
use turfbook_db_sqlite::{run_embedded_database_migrations, Connections};

mod config;
mod gateways;
mod recurring_sweep;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "turfbook", version, about = "Slot reservations for sports venues", long_about = None)]
struct Cli {
    /// Configuration file (default: turfbook.toml)
    #[arg(short, long, global = true)]
    config_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Default)]
enum Command {
    /// Run the web server and the sweeper (default)
    #[default]
    Serve,
    /// Release the slots of expired reservations once and exit
    SweepExpired,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let Cli {
        config_file,
        command,
    } = Cli::parse();
    let config_file = config::config_file_path(config_file);
    let cfg = config::Config::try_load_from_file_or_default(&config_file)?;

    log::info!("Connecting to SQLite database {}", cfg.db.conn_sqlite);
    let connections = Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size)?;
    run_embedded_database_migrations(connections.exclusive()?)?;

    match command.unwrap_or_default() {
        Command::Serve => {
            tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?
                .block_on(serve(cfg, connections, config_file))
        }
        Command::SweepExpired => {
            let count =
                sweep_expired_reservations(&connections, &SlotLocks::new(), Timestamp::now())?;
            log::info!("Released {count} slot(s)");
            Ok(())
        }
    }
}

async fn serve(cfg: config::Config, connections: Connections, config_file: PathBuf) -> Result<()> {
    let config::Config {
        db: _,
        webserver,
        booking,
        sweeper,
        platform,
        payment,
    } = cfg;

    let slot_locks = SlotLocks::new();
    let settings = SharedSettings::new(platform)?;

    if let Some(task_interval_time) = sweeper.task_interval_time {
        tokio::spawn(recurring_sweep::run(
            connections.clone(),
            slot_locks.clone(),
            task_interval_time,
        ));
    } else {
        log::info!("In-process sweeper is disabled");
    }

    #[cfg(unix)]
    tokio::spawn(reload_settings_on_hangup(settings.clone(), config_file));
    #[cfg(not(unix))]
    let _ = config_file;

    let web_cfg = turfbook_webserver::Cfg {
        booking_policy: booking,
        currency: payment.currency.clone(),
    };
    turfbook_webserver::run(
        connections,
        slot_locks,
        settings,
        webserver.enable_cors,
        web_cfg,
        gateways::payment_gateway(&payment),
        VERSION,
    )
    .await;
    Ok(())
}

#[cfg(unix)]
async fn reload_settings_on_hangup(settings: SharedSettings, config_file: PathBuf) {
    use tokio::signal::unix::{signal, SignalKind};

    let mut hangup = match signal(SignalKind::hangup()) {
        Ok(hangup) => hangup,
        Err(err) => {
            log::warn!("Unable to listen for SIGHUP: {err}");
            return;
        }
    };
    while hangup.recv().await.is_some() {
        log::info!("Reloading platform settings from {}", config_file.display());
        match config::load_platform_settings(&config_file) {
            Ok(platform) => {
                if let Err(err) = settings.replace(platform) {
                    log::warn!("Keeping previous platform settings: {err}");
                }
            }
            Err(err) => {
                log::warn!("Keeping previous platform settings: {err}");
            }
        }
    }
}
