use time::{Date, Time};

use crate::{
    availability::evaluate_availability,
    entities::{availability::*, slot::*, venue::*},
};

/// Annotates every slot of the grid on the given date.
///
/// A closed date disables all slots, regardless of any slot overrides.
/// Booked slots remain booked even if they have been disabled after
/// the reservation was made.
pub fn generate_slots(
    grid: &SlotGrid,
    venue: &Venue,
    schedule: &VenueSchedule,
    date: Date,
    today: Date,
    booked_starts: &[Time],
) -> (Availability, Vec<Slot>) {
    let availability = evaluate_availability(venue, schedule, date, today);
    let slots = grid
        .slots()
        .map(|(start_time, end_time)| Slot {
            start_time,
            end_time,
            is_enabled: is_slot_enabled(&availability, schedule, start_time, end_time),
            is_booked: booked_starts.contains(&start_time),
        })
        .collect();
    (availability, slots)
}

pub fn is_slot_enabled(
    availability: &Availability,
    schedule: &VenueSchedule,
    start_time: Time,
    end_time: Time,
) -> bool {
    availability.is_open()
        && schedule
            .slot_override(start_time, end_time)
            .map(|o| o.is_enabled)
            .unwrap_or(true)
}
