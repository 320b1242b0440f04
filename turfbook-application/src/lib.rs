#[macro_use]
extern crate log;

mod create_reservation;
mod expire_reservations;
mod payment;
mod settings;
mod slot_locks;
mod venue_operations;

pub mod prelude {
    pub use super::{
        create_reservation::*, expire_reservations::*, payment::*, venue_operations::*,
    };
}

pub mod error;

pub use self::{settings::SharedSettings, slot_locks::*};

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use turfbook_core::{
    entities::{
        activity::*, availability::*, id::Id, payment::*, reservation::*, settings::*, slot::*,
        time::Timestamp, venue::*,
    },
    gateways::payment::PaymentGateway,
    repositories::*,
    usecases,
};
pub(crate) use rust_decimal::Decimal;

#[cfg(test)]
pub(crate) mod tests;

pub mod sqlite {
    pub use turfbook_db_sqlite::Connections;
}
