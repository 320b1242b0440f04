use time::Date;

use crate::entities::{availability::*, venue::*};

/// Decides if a venue is open at all on the given date.
///
/// The first matching rule wins:
///
/// 1. inactive venue
/// 2. active emergency block
/// 3. manual override for the current day
/// 4. date-range closures
/// 5. weekly schedule
pub fn evaluate_availability(
    venue: &Venue,
    schedule: &VenueSchedule,
    date: Date,
    today: Date,
) -> Availability {
    if !venue.active {
        return Availability::Closed(ClosedReason::VenueInactive);
    }
    if let Some(block) = schedule.emergency_block.as_ref().filter(|b| b.is_blocked) {
        return Availability::Closed(ClosedReason::EmergencyBlock(block.reason.clone()));
    }
    if date == today && !venue.open_today {
        return Availability::Closed(ClosedReason::ClosedToday(venue.closed_reason.clone()));
    }
    if let Some(closure) = schedule.closure_on(date) {
        return Availability::Closed(ClosedReason::Closure(closure.reason.clone()));
    }
    if let Some(day) = schedule.day_availability(weekday_index(date)) {
        if !day.is_open {
            return Availability::Closed(ClosedReason::DayClosed);
        }
    }
    Availability::Open
}
