use super::{confirm_payment::update_pending, prelude::*, short_id};

pub fn find_expired_reservations<R: ReservationRepo>(
    repo: &R,
    now: Timestamp,
) -> Result<Vec<Reservation>> {
    Ok(repo.find_expired_pending_reservations(now)?)
}

/// Cancels a single pending reservation after its hold window
/// has elapsed and releases the slot.
pub fn expire_reservation<R>(repo: &R, reservation_id: &str, now: Timestamp) -> Result<Reservation>
where
    R: ReservationRepo + PaymentRepo + VenueActivityRepo,
{
    let mut reservation = repo.get_reservation(reservation_id)?;
    if reservation.status != ReservationStatus::Pending {
        return Err(Error::StateConflict {
            status: reservation.status,
        });
    }
    if !reservation.is_expired_at(now) {
        return Err(Error::NotExpired);
    }
    reservation.status = ReservationStatus::Cancelled;
    reservation.payment_status = PaymentStatus::Failed;
    reservation.expires_at = None;
    update_pending(repo, &reservation)?;
    match repo.get_payment_of_reservation(reservation_id) {
        Ok(mut payment) => {
            if payment.status == PaymentStatus::Initiated {
                payment.status = PaymentStatus::Failed;
                payment.updated_at = now;
                repo.replace_payment(&payment)?;
            }
        }
        Err(RepoError::NotFound) => {}
        Err(err) => return Err(err.into()),
    }
    repo.log_venue_activity(&VenueActivity {
        venue_id: reservation.venue_id.clone(),
        kind: ActivityKind::BookingCancelled,
        description: format!("Booking #{} cancelled", short_id(&reservation.id)),
        at: now,
        by: None,
    })?;
    Ok(reservation)
}
