use std::str::FromStr;

use rust_decimal::Decimal;
use time::{macros::time, Date, Duration, OffsetDateTime, Time};

use crate::{id::*, reservation::*, time::*, venue::*};

pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{reservation_builder::*, venue_builder::*};

pub mod venue_builder {

    use super::*;

    #[derive(Debug)]
    pub struct VenueBuild {
        venue: Venue,
    }

    impl VenueBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.venue.id = id.into();
            self
        }
        pub fn owner(mut self, owner: &str) -> Self {
            self.venue.owner = owner.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.venue.name = name.into();
            self
        }
        pub fn city(mut self, city: &str) -> Self {
            self.venue.city = Some(city.into());
            self
        }
        pub fn price_per_hour(mut self, price: &str) -> Self {
            self.venue.price_per_hour = Decimal::from_str(price).unwrap();
            self
        }
        pub fn active(mut self, active: bool) -> Self {
            self.venue.active = active;
            self
        }
        pub fn open_today(mut self, open: bool, reason: Option<&str>) -> Self {
            self.venue.open_today = open;
            self.venue.closed_reason = reason.map(Into::into);
            self
        }
        pub fn finish(self) -> Venue {
            self.venue
        }
    }

    impl Builder for Venue {
        type Build = VenueBuild;
        fn build() -> VenueBuild {
            VenueBuild {
                venue: Venue {
                    id: Id::new(),
                    owner: Id::new(),
                    name: "".into(),
                    city: None,
                    price_per_hour: Decimal::new(100_000, 2),
                    active: true,
                    open_today: true,
                    closed_reason: None,
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}

pub mod reservation_builder {

    use super::*;

    #[derive(Debug)]
    pub struct ReservationBuild {
        reservation: Reservation,
    }

    impl ReservationBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.reservation.id = id.into();
            self
        }
        pub fn customer(mut self, customer: &str) -> Self {
            self.reservation.customer = customer.into();
            self
        }
        pub fn venue_id(mut self, venue_id: &str) -> Self {
            self.reservation.venue_id = venue_id.into();
            self
        }
        pub fn slot(mut self, date: Date, start_time: Time) -> Self {
            self.reservation.booking_date = date;
            self.reservation.start_time = start_time;
            self.reservation.end_time = start_time + Duration::hours(1);
            self
        }
        pub fn status(mut self, status: ReservationStatus) -> Self {
            self.reservation.status = status;
            self
        }
        pub fn payment_status(mut self, status: PaymentStatus) -> Self {
            self.reservation.payment_status = status;
            self
        }
        pub fn expires_at(mut self, expires_at: Option<Timestamp>) -> Self {
            self.reservation.expires_at = expires_at;
            self
        }
        pub fn created_at(mut self, created_at: Timestamp) -> Self {
            self.reservation.created_at = created_at;
            self
        }
        pub fn base_amount(mut self, amount: &str) -> Self {
            self.reservation.base_amount = Decimal::from_str(amount).unwrap();
            self
        }
        pub fn finish(self) -> Reservation {
            self.reservation
        }
    }

    impl Builder for Reservation {
        type Build = ReservationBuild;
        fn build() -> ReservationBuild {
            let created_at = Timestamp::now();
            ReservationBuild {
                reservation: Reservation {
                    id: Id::new(),
                    customer: Id::new(),
                    venue_id: Id::new(),
                    booking_date: OffsetDateTime::from(created_at).date(),
                    start_time: time!(10:00),
                    end_time: time!(11:00),
                    status: ReservationStatus::Pending,
                    payment_status: PaymentStatus::Initiated,
                    expires_at: Some(created_at + Duration::minutes(10)),
                    base_amount: Decimal::new(100_000, 2),
                    convenience_fee: Decimal::ZERO,
                    total_amount: Decimal::new(100_000, 2),
                    commission_percentage: Decimal::new(1000, 2),
                    platform_commission: Decimal::ZERO,
                    owner_earnings: Decimal::ZERO,
                    created_at,
                },
            }
        }
    }
}
