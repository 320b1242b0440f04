use super::*;
use turfbook_core::{settings::SettingsProvider, usecases::BookingPolicy};

/// Validates the requested slot and puts it on hold.
///
/// The slot is locked for the duration of the database transaction
/// that checks the availability and inserts the pending reservation.
#[allow(clippy::too_many_arguments)]
pub fn create_reservation<S>(
    connections: &sqlite::Connections,
    slot_locks: &SlotLocks,
    policy: &BookingPolicy,
    settings: &S,
    customer: Id,
    venue_id: &str,
    date: &str,
    start_time: &str,
) -> Result<Reservation>
where
    S: SettingsProvider + ?Sized,
{
    let now = Timestamp::now();
    let slot = usecases::parse_slot_key(policy, venue_id, date, start_time, policy.today(now))?;
    // Settings are captured once and must not change while pricing
    let settings = settings.platform_settings();
    let reservation = {
        let _slot_guard = slot_locks.lock(&slot);
        let mut repo = connections.exclusive()?;
        repo.transaction(|conn| {
            usecases::create_reservation(
                conn,
                policy,
                &settings,
                usecases::NewReservation { customer, slot },
                now,
            )
        })?
    };
    info!(
        "Created reservation {} for venue {} on {} at {}",
        reservation.id,
        reservation.venue_id,
        reservation.booking_date,
        reservation.start_time
    );
    Ok(reservation)
}

/// A pending reservation together with the payment order that
/// the customer needs to complete.
#[derive(Debug, Clone)]
pub struct BookedSlot {
    pub reservation: Reservation,
    /// Missing if the payment gateway failed. The customer may request
    /// a new order while the reservation is pending.
    pub payment: Option<Payment>,
}

/// Puts the slot on hold and immediately requests a payment
/// order from the gateway.
#[allow(clippy::too_many_arguments)]
pub fn book_slot<S>(
    connections: &sqlite::Connections,
    slot_locks: &SlotLocks,
    policy: &BookingPolicy,
    settings: &S,
    gateway: &dyn PaymentGateway,
    currency: &str,
    customer: Id,
    venue_id: &str,
    date: &str,
    start_time: &str,
) -> Result<BookedSlot>
where
    S: SettingsProvider + ?Sized,
{
    let reservation = create_reservation(
        connections,
        slot_locks,
        policy,
        settings,
        customer.clone(),
        venue_id,
        date,
        start_time,
    )?;
    let payment = match super::payment::create_payment_order(
        connections,
        slot_locks,
        gateway,
        currency,
        reservation.id.as_str(),
        &customer,
    ) {
        Ok(payment) => Some(payment),
        Err(err) => {
            warn!(
                "Failed to create payment order for reservation {}: {err}",
                reservation.id
            );
            None
        }
    };
    Ok(BookedSlot {
        reservation,
        payment,
    })
}
