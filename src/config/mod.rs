use anyhow::{anyhow, Result};
use rust_decimal::Decimal;
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};
use time::{macros::format_description, UtcOffset};
use turfbook_core::{
    entities::{settings::PlatformSettings, slot::SlotGrid},
    usecases::BookingPolicy,
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "turfbook.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";

pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
    pub booking: BookingPolicy,
    pub sweeper: Sweeper,
    pub platform: PlatformSettings,
    pub payment: Payment,
}

impl Config {
    pub fn try_load_from_file_or_default(file_path: &Path) -> Result<Self> {
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

pub fn config_file_path<P: AsRef<Path>>(file_path: Option<P>) -> PathBuf {
    file_path.map(|p| p.as_ref().to_path_buf()).unwrap_or_else(|| {
        log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
        PathBuf::from(DEFAULT_CONFIG_FILE_NAME)
    })
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u32,
}

pub struct WebServer {
    pub enable_cors: bool,
}

pub struct Sweeper {
    /// `None` if the in-process sweeper is disabled
    pub task_interval_time: Option<Duration>,
}

#[derive(Debug, Clone, Copy)]
pub enum PaymentGateway {
    /// Accepts every payment that is signed as `demo_success`
    Demo,
}

pub struct Payment {
    pub gateway: PaymentGateway,
    pub currency: String,
}

fn parse_utc_offset(offset: &str) -> Result<UtcOffset> {
    let format = format_description!("[offset_hour sign:mandatory]:[offset_minute]");
    UtcOffset::parse(offset.trim(), &format)
        .map_err(|err| anyhow!("Invalid UTC offset '{offset}': {err}"))
}

fn parse_amount(name: &str, value: &str) -> Result<Decimal> {
    value
        .trim()
        .parse()
        .map_err(|err| anyhow!("Invalid {name} '{value}': {err}"))
}

impl TryFrom<raw::Platform> for PlatformSettings {
    type Error = anyhow::Error;
    fn try_from(from: raw::Platform) -> Result<Self> {
        let raw::Platform {
            convenience_fee_enabled,
            convenience_fee_type,
            convenience_fee_value,
            default_commission_percentage,
        } = from;
        let settings = PlatformSettings {
            convenience_fee_enabled,
            convenience_fee_type: convenience_fee_type
                .parse()
                .map_err(|_| anyhow!("Invalid convenience fee type '{convenience_fee_type}'"))?,
            convenience_fee_value: parse_amount("convenience fee", &convenience_fee_value)?,
            default_commission_percentage: parse_amount(
                "commission percentage",
                &default_commission_percentage,
            )?,
        };
        settings.validate()?;
        Ok(settings)
    }
}

impl TryFrom<raw::Booking> for BookingPolicy {
    type Error = anyhow::Error;
    fn try_from(from: raw::Booking) -> Result<Self> {
        let raw::Booking {
            hold_window,
            first_slot_hour,
            last_slot_hour,
            utc_offset,
        } = from;
        if hold_window.is_zero() {
            return Err(anyhow!("The hold window must not be empty"));
        }
        let hold_window = time::Duration::try_from(hold_window)?;
        let slot_grid = SlotGrid::new(first_slot_hour, last_slot_hour)?;
        let utc_offset = parse_utc_offset(&utc_offset)?;
        Ok(BookingPolicy {
            slot_grid,
            hold_window,
            utc_offset,
        })
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            webserver,
            booking,
            sweeper,
            platform,
            payment,
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

        let raw::WebServer { cors } = webserver.unwrap_or_default();
        let webserver = WebServer { enable_cors: cors };

        let booking = BookingPolicy::try_from(booking.unwrap_or_default())?;

        let raw::Sweeper { task_interval_time } = sweeper.unwrap_or_default();
        let sweeper = Sweeper {
            task_interval_time: Some(task_interval_time).filter(|t| !t.is_zero()),
        };

        let platform = PlatformSettings::try_from(platform.unwrap_or_default())?;

        let raw::Payment { gateway, currency } = payment.unwrap_or_default();
        let gateway = match gateway {
            raw::PaymentGateway::Demo => {
                log::warn!("Use demo payment gateway");
                PaymentGateway::Demo
            }
        };
        let currency = currency.trim().to_uppercase();
        if currency.is_empty() {
            return Err(anyhow!("Missing payment currency"));
        }
        let payment = Payment { gateway, currency };

        Ok(Self {
            db,
            webserver,
            booking,
            sweeper,
            platform,
            payment,
        })
    }
}

/// Reloads the platform settings from the configuration file.
pub fn load_platform_settings<P: AsRef<Path>>(file_path: P) -> Result<PlatformSettings> {
    let cfg_string = fs::read_to_string(file_path.as_ref())?;
    let raw::Config { platform, .. } = toml::from_str(&cfg_string)?;
    PlatformSettings::try_from(platform.unwrap_or_default())
}
