use super::*;
use turfbook_core::usecases::PaymentCallback;

/// Requests a new payment order for a pending reservation of the
/// customer and replaces any previous order.
///
/// The gateway is contacted without holding any locks. The order is
/// only stored if the reservation is still pending afterwards.
pub fn create_payment_order(
    connections: &sqlite::Connections,
    slot_locks: &SlotLocks,
    gateway: &dyn PaymentGateway,
    currency: &str,
    reservation_id: &str,
    customer: &Id,
) -> Result<Payment> {
    let reservation = usecases::pending_reservation_of_customer(
        &connections.shared()?,
        reservation_id,
        customer,
    )?;
    let order = gateway
        .create_order(
            reservation.total_amount,
            currency,
            reservation.id.as_str(),
        )
        .map_err(usecases::Error::from)?;
    debug!(
        "Created payment order {} for reservation {}",
        order.order_id, reservation.id
    );
    let now = Timestamp::now();
    let _slot_guard = slot_locks.lock(&reservation.slot_key());
    let mut repo = connections.exclusive()?;
    let payment = repo.transaction(|conn| {
        let reservation =
            usecases::pending_reservation_of_customer(conn, reservation_id, customer)?;
        usecases::store_payment_order(conn, &reservation, order, now)
    })?;
    Ok(payment)
}

/// Verifies and applies the outcome of a payment.
pub fn handle_payment_callback(
    connections: &sqlite::Connections,
    slot_locks: &SlotLocks,
    gateway: &dyn PaymentGateway,
    callback: PaymentCallback,
) -> Result<Reservation> {
    usecases::verify_payment_callback(gateway, &callback)?;
    let slot = {
        let repo = connections.shared()?;
        repo.get_reservation(callback.reservation_id.as_str())?
            .slot_key()
    };
    let now = Timestamp::now();
    let reservation = {
        let _slot_guard = slot_locks.lock(&slot);
        let mut repo = connections.exclusive()?;
        repo.transaction(|conn| usecases::apply_payment_callback(conn, &callback, now))?
    };
    info!(
        "Applied payment outcome {:?} to reservation {}: {}",
        callback.outcome, reservation.id, reservation.status
    );
    Ok(reservation)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;
    use turfbook_core::usecases::PaymentCallback;

    fn success_callback(payment: &Payment, signature: &str) -> PaymentCallback {
        PaymentCallback {
            reservation_id: payment.reservation_id.clone(),
            order_id: payment.order_id.clone(),
            payment_id: Some("pay_1".into()),
            signature: Some(signature.into()),
            outcome: PaymentOutcome::Success,
        }
    }

    #[test]
    fn confirm_reservation_after_successful_payment() {
        let fixture = BackendFixture::new();
        let venue = fixture.create_active_venue("1000");
        let customer = Id::new();
        let booked = fixture.book_slot(&customer, venue.id.as_str(), "18:00").unwrap();
        let payment = booked.payment.unwrap();

        let reservation = fixture
            .handle_payment_callback(success_callback(&payment, VALID_SIGNATURE))
            .unwrap();
        assert_eq!(reservation.status, ReservationStatus::Confirmed);
        assert_eq!(reservation.payment_status, PaymentStatus::Success);
        assert_eq!(reservation.platform_commission, dec!(100.00));
        assert_eq!(reservation.owner_earnings, dec!(900.00));
        assert!(reservation.expires_at.is_none());

        let payment = fixture
            .connections
            .shared()
            .unwrap()
            .get_payment_of_reservation(reservation.id.as_str())
            .unwrap();
        assert_eq!(payment.status, PaymentStatus::Success);
        assert_eq!(payment.transaction_id.as_deref(), Some("pay_1"));

        // Duplicate callbacks are rejected
        let err = fixture
            .handle_payment_callback(success_callback(&payment, VALID_SIGNATURE))
            .unwrap_err();
        assert!(matches!(
            err.as_parameter_error(),
            Some(usecases::Error::StateConflict {
                status: ReservationStatus::Confirmed
            })
        ));
    }

    #[test]
    fn reject_invalid_signature() {
        let fixture = BackendFixture::new();
        let venue = fixture.create_active_venue("1000");
        let booked = fixture
            .book_slot(&Id::new(), venue.id.as_str(), "18:00")
            .unwrap();
        let payment = booked.payment.unwrap();
        let err = fixture
            .handle_payment_callback(success_callback(&payment, "forged"))
            .unwrap_err();
        assert!(matches!(
            err.as_parameter_error(),
            Some(usecases::Error::PaymentVerification)
        ));
        let reservation = fixture.get_reservation(&booked.reservation.id);
        assert_eq!(reservation.status, ReservationStatus::Pending);
    }

    #[test]
    fn failed_payment_keeps_the_slot_on_hold() {
        let fixture = BackendFixture::new();
        let venue = fixture.create_active_venue("1000");
        let booked = fixture
            .book_slot(&Id::new(), venue.id.as_str(), "18:00")
            .unwrap();
        let payment = booked.payment.unwrap();
        let reservation = fixture
            .handle_payment_callback(PaymentCallback {
                payment_id: None,
                signature: None,
                outcome: PaymentOutcome::Failure,
                ..success_callback(&payment, "")
            })
            .unwrap();
        assert_eq!(reservation.status, ReservationStatus::Pending);
        assert_eq!(reservation.payment_status, PaymentStatus::Failed);
        let err = fixture
            .create_reservation(&Id::new(), venue.id.as_str(), "18:00")
            .unwrap_err();
        assert!(matches!(
            err.as_parameter_error(),
            Some(usecases::Error::SlotConflict)
        ));
    }

    #[test]
    fn replace_payment_order_of_pending_reservation() {
        let fixture = BackendFixture::new();
        let venue = fixture.create_active_venue("1000");
        let customer = Id::new();
        fixture.gateway.set_unreachable(true);
        let booked = fixture.book_slot(&customer, venue.id.as_str(), "18:00").unwrap();
        assert!(booked.payment.is_none());
        fixture.gateway.set_unreachable(false);

        let first = fixture
            .create_payment_order(&booked.reservation.id, &customer)
            .unwrap();
        let second = fixture
            .create_payment_order(&booked.reservation.id, &customer)
            .unwrap();
        assert_ne!(first.order_id, second.order_id);

        // The superseded order cannot be used anymore
        let err = fixture
            .handle_payment_callback(success_callback(&first, VALID_SIGNATURE))
            .unwrap_err();
        assert!(matches!(
            err.as_parameter_error(),
            Some(usecases::Error::PaymentVerification)
        ));
        assert!(fixture
            .handle_payment_callback(success_callback(&second, VALID_SIGNATURE))
            .is_ok());

        // Only pending reservations accept new orders
        let err = fixture
            .create_payment_order(&booked.reservation.id, &customer)
            .unwrap_err();
        assert!(matches!(
            err.as_parameter_error(),
            Some(usecases::Error::StateConflict { .. })
        ));
    }

    #[test]
    fn payment_order_of_another_customer() {
        let fixture = BackendFixture::new();
        let venue = fixture.create_active_venue("1000");
        let booked = fixture
            .book_slot(&Id::new(), venue.id.as_str(), "18:00")
            .unwrap();
        let err = fixture
            .create_payment_order(&booked.reservation.id, &Id::new())
            .unwrap_err();
        assert!(matches!(
            err.as_parameter_error(),
            Some(usecases::Error::Forbidden)
        ));
    }
}
