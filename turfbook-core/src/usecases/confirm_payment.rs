use super::{prelude::*, short_id};
use crate::fees::compute_commission;

/// Applies the final outcome of a payment to a pending reservation.
///
/// A successful payment confirms the reservation and freezes the
/// commission. A failed payment only updates the payment status,
/// i.e. the slot remains on hold until the reservation expires.
pub fn confirm_payment<R>(
    repo: &R,
    reservation_id: &str,
    outcome: PaymentOutcome,
    now: Timestamp,
) -> Result<Reservation>
where
    R: ReservationRepo + VenueActivityRepo,
{
    let mut reservation = repo.get_reservation(reservation_id)?;
    if reservation.status != ReservationStatus::Pending {
        log::warn!(
            "Rejecting payment outcome {:?} for reservation {} in state {}",
            outcome,
            reservation.id,
            reservation.status
        );
        return Err(Error::StateConflict {
            status: reservation.status,
        });
    }
    reservation.payment_status = outcome.into();
    if outcome == PaymentOutcome::Success {
        let (platform_commission, owner_earnings) =
            compute_commission(reservation.base_amount, reservation.commission_percentage)?;
        reservation.status = ReservationStatus::Confirmed;
        reservation.expires_at = None;
        reservation.platform_commission = platform_commission;
        reservation.owner_earnings = owner_earnings;
    }
    update_pending(repo, &reservation)?;
    if reservation.status == ReservationStatus::Confirmed {
        repo.log_venue_activity(&VenueActivity {
            venue_id: reservation.venue_id.clone(),
            kind: ActivityKind::BookingConfirmed,
            description: format!("Booking #{} confirmed", short_id(&reservation.id)),
            at: now,
            by: Some(reservation.customer.clone()),
        })?;
    }
    Ok(reservation)
}

// A concurrent writer might have finished the reservation in the meantime.
pub(crate) fn update_pending<R: ReservationRepo>(repo: &R, reservation: &Reservation) -> Result<()> {
    if repo.update_pending_reservation(reservation)? == 0 {
        let current = repo.get_reservation(reservation.id.as_str())?;
        return Err(Error::StateConflict {
            status: current.status,
        });
    }
    Ok(())
}
