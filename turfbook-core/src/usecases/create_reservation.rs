use super::{prelude::*, short_id};
use crate::{
    availability::evaluate_availability, fees::price_reservation, slots::is_slot_enabled,
};

#[derive(Debug, Clone)]
pub struct NewReservation {
    pub customer: Id,
    pub slot: SlotKey,
}

/// Creates a pending reservation that holds the slot for the
/// hold window of the policy.
///
/// Must be invoked while holding the exclusive lock of the slot
/// and within a single database transaction.
pub fn create_reservation<R>(
    repo: &R,
    policy: &BookingPolicy,
    settings: &PlatformSettings,
    new_reservation: NewReservation,
    now: Timestamp,
) -> Result<Reservation>
where
    R: VenueRepo + VenueScheduleRepo + ReservationRepo + VenueActivityRepo,
{
    let NewReservation { customer, slot } = new_reservation;
    let end_time = policy
        .slot_grid
        .slot_end(slot.start_time)
        .ok_or(Error::InvalidSlotTime)?;
    let venue = repo.get_venue(slot.venue_id.as_str())?;
    let schedule = repo.load_venue_schedule(slot.venue_id.as_str())?;
    let availability = evaluate_availability(&venue, &schedule, slot.date, policy.today(now));
    if let Availability::Closed(reason) = availability {
        return Err(Error::VenueClosed(reason));
    }
    if !is_slot_enabled(&availability, &schedule, slot.start_time, end_time) {
        return Err(Error::SlotDisabled);
    }
    if let Some(existing) = repo.find_active_reservation(&slot)? {
        log::debug!(
            "Slot {:?} is already taken by reservation {}",
            slot,
            existing.id
        );
        return Err(Error::SlotConflict);
    }
    let pricing = price_reservation(venue.price_per_hour, settings)?;
    let reservation = Reservation {
        id: Id::new(),
        customer,
        venue_id: venue.id,
        booking_date: slot.date,
        start_time: slot.start_time,
        end_time,
        status: ReservationStatus::Pending,
        payment_status: PaymentStatus::Initiated,
        expires_at: Some(now + policy.hold_window),
        base_amount: pricing.base_amount,
        convenience_fee: pricing.convenience_fee,
        total_amount: pricing.total_amount,
        commission_percentage: pricing.commission_percentage,
        platform_commission: Decimal::ZERO,
        owner_earnings: Decimal::ZERO,
        created_at: now,
    };
    repo.create_reservation(&reservation).map_err(|err| match err {
        RepoError::AlreadyExists => Error::SlotConflict,
        err => Error::Repo(err),
    })?;
    repo.log_venue_activity(&VenueActivity {
        venue_id: reservation.venue_id.clone(),
        kind: ActivityKind::BookingCreated,
        description: format!("Booking #{} created", short_id(&reservation.id)),
        at: now,
        by: Some(reservation.customer.clone()),
    })?;
    log::debug!(
        "Created reservation {} for slot {:?}",
        reservation.id,
        reservation.slot_key()
    );
    Ok(reservation)
}
