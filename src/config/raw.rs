use duration_str::deserialize_duration;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_CONFIG_FILE: &str = include_str!("turfbook.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub webserver: Option<WebServer>,
    pub booking: Option<Booking>,
    pub sweeper: Option<Sweeper>,
    pub platform: Option<Platform>,
    pub payment: Option<Payment>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    pub connection_sqlite: String,
    pub connection_pool_size: u32,
}

impl Default for Db {
    fn default() -> Self {
        Config::default().db.expect("DB configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    pub cors: bool,
}

impl Default for WebServer {
    fn default() -> Self {
        Config::default()
            .webserver
            .expect("Webserver configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Booking {
    #[serde(deserialize_with = "deserialize_duration")]
    pub hold_window: Duration,
    pub first_slot_hour: u8,
    pub last_slot_hour: u8,
    pub utc_offset: String,
}

impl Default for Booking {
    fn default() -> Self {
        Config::default().booking.expect("Booking configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Sweeper {
    #[serde(deserialize_with = "deserialize_duration")]
    pub task_interval_time: Duration,
}

impl Default for Sweeper {
    fn default() -> Self {
        Config::default().sweeper.expect("Sweeper configuration")
    }
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Platform {
    pub convenience_fee_enabled: bool,
    pub convenience_fee_type: String,
    pub convenience_fee_value: String,
    pub default_commission_percentage: String,
}

impl Default for Platform {
    fn default() -> Self {
        Config::default().platform.expect("Platform configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Payment {
    pub gateway: PaymentGateway,
    pub currency: String,
}

impl Default for Payment {
    fn default() -> Self {
        Config::default().payment.expect("Payment configuration")
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentGateway {
    Demo,
}
