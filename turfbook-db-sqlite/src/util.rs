use std::str::FromStr as _;

use anyhow::anyhow;
use rust_decimal::Decimal;
use time::{Date, Time};
use turfbook_core::{
    entities::time::{format_date, format_time, parse_date, parse_time, Timestamp},
    repositories::Error as RepoError,
};

type Result<T> = std::result::Result<T, RepoError>;

pub fn date_to_sql(date: Date) -> String {
    format_date(date)
}

pub fn time_to_sql(time: Time) -> String {
    format_time(time)
}

pub fn amount_to_sql(amount: Decimal) -> String {
    amount.to_string()
}

pub fn load_date(s: &str) -> Result<Date> {
    parse_date(s).map_err(|err| anyhow!("Invalid date '{s}': {err}").into())
}

pub fn load_time(s: &str) -> Result<Time> {
    parse_time(s).map_err(|err| anyhow!("Invalid time '{s}': {err}").into())
}

pub fn load_amount(s: &str) -> Result<Decimal> {
    Decimal::from_str(s).map_err(|err| anyhow!("Invalid amount '{s}': {err}").into())
}

pub fn load_timestamp(millis: i64) -> Result<Timestamp> {
    Timestamp::try_from_millis(millis).ok_or_else(|| anyhow!("Invalid timestamp: {millis}").into())
}
