use num_derive::FromPrimitive;
use num_traits::FromPrimitive as _;
use rust_decimal::Decimal;
use strum::{Display, EnumString};
use thiserror::Error;
use time::{Date, Time};

use crate::{id::*, slot::*, time::*};

pub type StatusPrimitive = i16;

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, Display, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum ReservationStatus {
    Pending   = 0,
    Confirmed = 1,
    Cancelled = 2,
    Completed = 3,
}

impl ReservationStatus {
    /// Statuses that occupy a slot.
    pub const ACTIVE: [Self; 2] = [Self::Pending, Self::Confirmed];

    pub fn is_active(self) -> bool {
        Self::ACTIVE.contains(&self)
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, Display, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum PaymentStatus {
    Initiated = 0,
    Success   = 1,
    Failed    = 2,
    Refunded  = 3,
}

#[derive(Debug, Error)]
#[error("Invalid status primitive: {0}")]
pub struct InvalidStatusPrimitive(StatusPrimitive);

impl TryFrom<StatusPrimitive> for ReservationStatus {
    type Error = InvalidStatusPrimitive;
    fn try_from(from: StatusPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidStatusPrimitive(from))
    }
}

impl From<ReservationStatus> for StatusPrimitive {
    fn from(from: ReservationStatus) -> Self {
        from as StatusPrimitive
    }
}

impl TryFrom<StatusPrimitive> for PaymentStatus {
    type Error = InvalidStatusPrimitive;
    fn try_from(from: StatusPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidStatusPrimitive(from))
    }
}

impl From<PaymentStatus> for StatusPrimitive {
    fn from(from: PaymentStatus) -> Self {
        from as StatusPrimitive
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub id                    : Id,
    pub customer              : Id,
    pub venue_id              : Id,
    pub booking_date          : Date,
    pub start_time            : Time,
    pub end_time              : Time,
    pub status                : ReservationStatus,
    pub payment_status        : PaymentStatus,
    // Only set while pending
    pub expires_at            : Option<Timestamp>,
    pub base_amount           : Decimal,
    pub convenience_fee       : Decimal,
    pub total_amount          : Decimal,
    pub commission_percentage : Decimal,
    // Both remain zero until the payment succeeded
    pub platform_commission   : Decimal,
    pub owner_earnings        : Decimal,
    pub created_at            : Timestamp,
}

impl Reservation {
    pub fn slot_key(&self) -> SlotKey {
        SlotKey {
            venue_id: self.venue_id.clone(),
            date: self.booking_date,
            start_time: self.start_time,
        }
    }

    pub fn is_owned_by(&self, customer: &Id) -> bool {
        &self.customer == customer
    }

    /// A pending reservation whose hold window has elapsed.
    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        self.status == ReservationStatus::Pending
            && self.expires_at.map(|at| at < now).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::*;
    use ::time::Duration;
    use std::str::FromStr;

    #[test]
    fn status_primitives() {
        for status in [
            ReservationStatus::Pending,
            ReservationStatus::Confirmed,
            ReservationStatus::Cancelled,
            ReservationStatus::Completed,
        ] {
            let p = StatusPrimitive::from(status);
            assert_eq!(ReservationStatus::try_from(p).unwrap(), status);
        }
        assert!(ReservationStatus::try_from(4).is_err());
        assert!(PaymentStatus::try_from(-1).is_err());
    }

    #[test]
    fn status_names() {
        assert_eq!(ReservationStatus::Pending.to_string(), "PENDING");
        assert_eq!(PaymentStatus::Success.to_string(), "SUCCESS");
        assert_eq!(
            ReservationStatus::from_str("cancelled").unwrap(),
            ReservationStatus::Cancelled
        );
    }

    #[test]
    fn only_pending_and_confirmed_are_active() {
        assert!(ReservationStatus::Pending.is_active());
        assert!(ReservationStatus::Confirmed.is_active());
        assert!(!ReservationStatus::Cancelled.is_active());
        assert!(!ReservationStatus::Completed.is_active());
    }

    #[test]
    fn expiry() {
        let now = Timestamp::now();
        let r = Reservation::build()
            .expires_at(Some(now + Duration::minutes(10)))
            .finish();
        assert!(!r.is_expired_at(now));
        assert!(!r.is_expired_at(now + Duration::minutes(10)));
        assert!(r.is_expired_at(now + Duration::minutes(11)));

        let confirmed = Reservation::build()
            .status(ReservationStatus::Confirmed)
            .expires_at(Some(now))
            .finish();
        assert!(!confirmed.is_expired_at(now + Duration::minutes(11)));
    }
}
