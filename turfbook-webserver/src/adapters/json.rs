pub use turfbook_boundary::*;

use crate::core::{entities as e, usecases};

pub mod from_json {
    //! JSON -> Entity

    use super::*;
    use rust_decimal::Decimal;
    use time::{Date, Time};

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the entities both are outside this crate.

    pub fn price(price: &str) -> Result<Decimal, usecases::Error> {
        price
            .trim()
            .parse::<Decimal>()
            .map_err(|_| usecases::Error::InvalidPrice)
    }

    pub fn date(date: &str) -> Result<Date, usecases::Error> {
        usecases::parse_date_param(date)
    }

    pub fn time(time: &str) -> Result<Time, usecases::Error> {
        e::time::parse_time(time).map_err(|_| usecases::Error::InvalidSlotTime)
    }

    pub fn try_new_venue(
        owner: e::id::Id,
        new_venue: NewVenue,
    ) -> Result<usecases::NewVenue, usecases::Error> {
        let NewVenue {
            name,
            city,
            price_per_hour,
        } = new_venue;
        Ok(usecases::NewVenue {
            owner,
            name,
            city: city.filter(|c| !c.trim().is_empty()),
            price_per_hour: price(&price_per_hour)?,
        })
    }

    pub fn payment_callback(from: PaymentCallback) -> usecases::PaymentCallback {
        let PaymentCallback {
            reservation_id,
            order_id,
            payment_id,
            signature,
            outcome,
        } = from;
        usecases::PaymentCallback {
            reservation_id: reservation_id.into(),
            order_id,
            payment_id,
            signature,
            outcome: outcome.into(),
        }
    }
}

pub mod to_json {
    //! Entity -> JSON

    use super::*;

    pub fn venue_availability(
        venue_id: &str,
        date: time::Date,
        availability: &e::availability::Availability,
    ) -> VenueAvailability {
        VenueAvailability {
            venue_id: venue_id.to_owned(),
            date: e::time::format_date(date),
            is_open: availability.is_open(),
            reason: availability.reason(),
        }
    }

    pub fn slots_of_day(from: usecases::SlotsOfDay) -> SlotsOfDay {
        let usecases::SlotsOfDay {
            venue_id,
            date,
            availability,
            slots,
        } = from;
        SlotsOfDay {
            venue_id: venue_id.into(),
            date: e::time::format_date(date),
            is_open: availability.is_open(),
            reason: availability.reason(),
            slots: slots.into_iter().map(Into::into).collect(),
        }
    }

    pub fn booked_slot(from: turfbook_application::prelude::BookedSlot) -> BookedSlot {
        let turfbook_application::prelude::BookedSlot {
            reservation,
            payment,
        } = from;
        BookedSlot {
            reservation: reservation.into(),
            payment_order: payment.map(Into::into),
        }
    }
}
