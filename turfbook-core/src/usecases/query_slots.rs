use super::prelude::*;
use crate::{availability::evaluate_availability, slots::generate_slots};
use time::Date;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotsOfDay {
    pub venue_id: Id,
    pub date: Date,
    pub availability: Availability,
    pub slots: Vec<Slot>,
}

pub fn query_venue_availability<R>(
    repo: &R,
    venue_id: &str,
    date: Date,
    today: Date,
) -> Result<Availability>
where
    R: VenueRepo + VenueScheduleRepo,
{
    let venue = repo.get_venue(venue_id)?;
    let schedule = repo.load_venue_schedule(venue_id)?;
    Ok(evaluate_availability(&venue, &schedule, date, today))
}

pub fn query_slots<R>(
    repo: &R,
    policy: &BookingPolicy,
    venue_id: &str,
    date: Date,
    today: Date,
) -> Result<SlotsOfDay>
where
    R: VenueRepo + VenueScheduleRepo + ReservationRepo,
{
    let venue = repo.get_venue(venue_id)?;
    let schedule = repo.load_venue_schedule(venue_id)?;
    let booked_starts = repo.active_reservation_starts(venue_id, date)?;
    let (availability, slots) = generate_slots(
        &policy.slot_grid,
        &venue,
        &schedule,
        date,
        today,
        &booked_starts,
    );
    Ok(SlotsOfDay {
        venue_id: venue.id,
        date,
        availability,
        slots,
    })
}
