use anyhow::anyhow;
use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};
use time::{Date, Time};

use turfbook_core::{
    entities::{
        activity::*, availability::*, id::Id, payment::*, reservation::*, slot::*, time::Timestamp,
        venue::*,
    },
    repositories::{self as repo, *},
};

use super::{util::*, *};

mod activity;
mod payment;
mod reservation;
mod venue;
mod venue_schedule;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

fn resolve_venue_rowid(conn: &mut SqliteConnection, id: &str) -> Result<i64> {
    use schema::venue::dsl;
    schema::venue::table
        .select(dsl::rowid)
        .filter(dsl::id.eq(id))
        .first::<i64>(conn)
        .map_err(|err| {
            log::debug!("Failed to resolve venue '{id}': {err}");
            from_diesel_err(err)
        })
}

fn resolve_reservation_rowid(conn: &mut SqliteConnection, id: &str) -> Result<i64> {
    use schema::reservation::dsl;
    schema::reservation::table
        .select(dsl::rowid)
        .filter(dsl::id.eq(id))
        .first::<i64>(conn)
        .map_err(|err| {
            log::debug!("Failed to resolve reservation '{id}': {err}");
            from_diesel_err(err)
        })
}

fn load_reservation_status(status: StatusPrimitive) -> Result<ReservationStatus> {
    ReservationStatus::try_from(status).map_err(|err| anyhow!(err).into())
}

fn load_payment_status(status: StatusPrimitive) -> Result<PaymentStatus> {
    PaymentStatus::try_from(status).map_err(|err| anyhow!(err).into())
}

fn load_activity_kind(kind: ActivityKindPrimitive) -> Result<ActivityKind> {
    ActivityKind::try_from(kind).map_err(|err| anyhow!(err).into())
}
