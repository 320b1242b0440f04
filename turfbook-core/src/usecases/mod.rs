use time::{Date, Duration, UtcOffset};

use crate::entities::{id::Id, slot::SlotGrid, time::Timestamp};

mod confirm_payment;
mod create_reservation;
mod error;
mod expire_reservations;
mod find_venues;
mod get_reservation;
mod payment_orders;
mod query_slots;
mod register_venue;
mod slot_request;
mod venue_activities;
mod venue_operations;

#[cfg(test)]
pub mod tests;

pub use self::{
    confirm_payment::*, create_reservation::*, error::Error, expire_reservations::*,
    find_venues::*, get_reservation::*, payment_orders::*, query_slots::*, register_venue::*,
    slot_request::*, venue_activities::*, venue_operations::*,
};

mod prelude {
    pub use super::{error::Error, BookingPolicy};
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        entities::{
            activity::*, availability::*, id::*, payment::*, reservation::*, settings::*, slot::*,
            time::*, venue::*,
        },
        repositories::*,
    };
    pub use crate::repositories::Error as RepoError;
    pub use rust_decimal::Decimal;
}

/// Parameters of the booking process that are fixed
/// for the lifetime of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingPolicy {
    pub slot_grid: SlotGrid,
    /// How long a pending reservation holds its slot.
    pub hold_window: Duration,
    /// The local offset that decides which date is "today".
    pub utc_offset: UtcOffset,
}

impl BookingPolicy {
    pub const DEFAULT_HOLD_WINDOW: Duration = Duration::minutes(10);

    pub fn today(&self, now: Timestamp) -> Date {
        now.local_date(self.utc_offset)
    }
}

impl Default for BookingPolicy {
    fn default() -> Self {
        Self {
            slot_grid: SlotGrid::default(),
            hold_window: Self::DEFAULT_HOLD_WINDOW,
            utc_offset: UtcOffset::UTC,
        }
    }
}

// Abbreviated id of a reservation in human readable messages.
fn short_id(id: &Id) -> String {
    let s = id.as_str();
    match s.get(..8) {
        Some(prefix) if prefix.len() < s.len() => format!("{prefix}..."),
        _ => s.to_owned(),
    }
}
