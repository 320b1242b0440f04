// Low-level database access traits.
// Each repository is responsible for a single entity and
// its owned collections. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::{
    activity::*, availability::*, id::Id, payment::*, reservation::*, slot::*, time::*, venue::*,
};
use thiserror::Error;
use time::{Date, Time};

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pagination {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

pub trait VenueRepo {
    fn create_venue(&self, venue: &Venue) -> Result<()>;
    fn update_venue(&self, venue: &Venue) -> Result<()>;
    fn get_venue(&self, id: &str) -> Result<Venue>;

    // Ordered by name. The city is matched as a case-insensitive substring.
    fn find_active_venues(
        &self,
        city: Option<&str>,
        pagination: &Pagination,
    ) -> Result<Vec<Venue>>;
}

pub trait VenueScheduleRepo {
    fn load_venue_schedule(&self, venue_id: &str) -> Result<VenueSchedule>;

    fn replace_day_availability(&self, venue_id: &str, day: &DayAvailability) -> Result<()>;
    fn replace_slot_override(&self, venue_id: &str, slot_override: &SlotOverride) -> Result<()>;
    fn replace_emergency_block(&self, venue_id: &str, block: &EmergencyBlock) -> Result<()>;

    fn create_closure(&self, venue_id: &str, closure: &Closure) -> Result<()>;
    fn delete_closure(&self, venue_id: &str, closure_id: &str) -> Result<()>;
}

pub trait ReservationRepo {
    // Fails with `AlreadyExists` if the slot is already occupied
    // by another active reservation.
    fn create_reservation(&self, reservation: &Reservation) -> Result<()>;
    fn get_reservation(&self, id: &str) -> Result<Reservation>;

    fn find_active_reservation(&self, slot: &SlotKey) -> Result<Option<Reservation>>;
    fn active_reservation_starts(&self, venue_id: &str, date: Date) -> Result<Vec<Time>>;

    /// Overwrites a reservation only if it is still pending
    /// and returns the number of affected rows.
    fn update_pending_reservation(&self, reservation: &Reservation) -> Result<usize>;

    fn find_expired_pending_reservations(&self, now: Timestamp) -> Result<Vec<Reservation>>;

    // Newest first
    fn recent_reservations_of_customer(
        &self,
        customer: &Id,
        pagination: &Pagination,
    ) -> Result<Vec<Reservation>>;
}

pub trait PaymentRepo {
    fn replace_payment(&self, payment: &Payment) -> Result<()>;
    fn get_payment_of_reservation(&self, reservation_id: &str) -> Result<Payment>;
}

pub trait VenueActivityRepo {
    fn log_venue_activity(&self, activity: &VenueActivity) -> Result<()>;

    // Newest first
    fn recent_venue_activities(
        &self,
        venue_id: &str,
        pagination: &Pagination,
    ) -> Result<Vec<VenueActivity>>;
}
