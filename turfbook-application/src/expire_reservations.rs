use super::*;

/// Cancels all pending reservations whose hold window has elapsed
/// and returns the number of released slots.
///
/// Every reservation is expired in a separate transaction while
/// holding the lock of its slot. Reservations that have been
/// confirmed or cancelled in the meantime are skipped.
pub fn sweep_expired_reservations(
    connections: &sqlite::Connections,
    slot_locks: &SlotLocks,
    now: Timestamp,
) -> Result<usize> {
    let candidates = usecases::find_expired_reservations(&connections.shared()?, now)?;
    if candidates.is_empty() {
        debug!("No expired reservations found");
        return Ok(0);
    }
    let mut expired_count = 0;
    for candidate in candidates {
        let _slot_guard = slot_locks.lock(&candidate.slot_key());
        let mut repo = connections.exclusive()?;
        match repo.transaction(|conn| usecases::expire_reservation(conn, candidate.id.as_str(), now))
        {
            Ok(reservation) => {
                debug!(
                    "Expired reservation {} of venue {} on {} at {}",
                    reservation.id,
                    reservation.venue_id,
                    reservation.booking_date,
                    reservation.start_time
                );
                expired_count += 1;
            }
            Err(usecases::Error::StateConflict { status }) => {
                debug!(
                    "Skipping reservation {} that is already {status}",
                    candidate.id
                );
            }
            Err(usecases::Error::NotExpired) => {
                debug!("Skipping reservation {} that is not expired", candidate.id);
            }
            Err(err) => {
                error!("Failed to expire reservation {}: {err}", candidate.id);
                return Err(err.into());
            }
        }
    }
    if expired_count > 0 {
        info!("Released {expired_count} slot(s) of expired reservations");
    }
    Ok(expired_count)
}
