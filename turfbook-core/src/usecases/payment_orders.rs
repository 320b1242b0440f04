use super::{confirm_payment, prelude::*};
use crate::gateways::payment::PaymentGateway;

/// A pending reservation of the requesting customer that is
/// still waiting for a payment.
pub fn pending_reservation_of_customer<R: ReservationRepo>(
    repo: &R,
    reservation_id: &str,
    customer: &Id,
) -> Result<Reservation> {
    let reservation = super::get_reservation(repo, reservation_id, customer)?;
    if reservation.status != ReservationStatus::Pending {
        return Err(Error::StateConflict {
            status: reservation.status,
        });
    }
    Ok(reservation)
}

/// Records a new gateway order for a reservation and replaces
/// any previous order.
pub fn store_payment_order<R: PaymentRepo>(
    repo: &R,
    reservation: &Reservation,
    order: PaymentOrder,
    now: Timestamp,
) -> Result<Payment> {
    debug_assert_eq!(order.amount, reservation.total_amount);
    let payment = Payment {
        reservation_id: reservation.id.clone(),
        order_id: order.order_id,
        amount: order.amount,
        currency: order.currency,
        status: PaymentStatus::Initiated,
        transaction_id: None,
        created_at: now,
        updated_at: now,
    };
    repo.replace_payment(&payment)?;
    Ok(payment)
}

/// The outcome of a payment as reported back by the gateway.
#[derive(Debug, Clone)]
pub struct PaymentCallback {
    pub reservation_id: Id,
    pub order_id: String,
    pub payment_id: Option<String>,
    pub signature: Option<String>,
    pub outcome: PaymentOutcome,
}

/// Checks the signature of successful payments.
pub fn verify_payment_callback<G>(gateway: &G, callback: &PaymentCallback) -> Result<()>
where
    G: PaymentGateway + ?Sized,
{
    if callback.outcome != PaymentOutcome::Success {
        return Ok(());
    }
    let (Some(payment_id), Some(signature)) = (&callback.payment_id, &callback.signature) else {
        return Err(Error::PaymentVerification);
    };
    if !gateway.verify_payment(payment_id, &callback.order_id, signature) {
        log::warn!(
            "Invalid payment signature for order {} of reservation {}",
            callback.order_id,
            callback.reservation_id
        );
        return Err(Error::PaymentVerification);
    }
    Ok(())
}

/// Applies a verified payment callback to both the reservation
/// and its payment record.
pub fn apply_payment_callback<R>(
    repo: &R,
    callback: &PaymentCallback,
    now: Timestamp,
) -> Result<Reservation>
where
    R: ReservationRepo + PaymentRepo + VenueActivityRepo,
{
    let reservation_id = callback.reservation_id.as_str();
    let mut payment = repo
        .get_payment_of_reservation(reservation_id)
        .map_err(|err| match err {
            RepoError::NotFound => Error::PaymentVerification,
            err => Error::Repo(err),
        })?;
    if payment.order_id != callback.order_id {
        log::warn!(
            "Payment order {} does not match order {} of reservation {}",
            callback.order_id,
            payment.order_id,
            reservation_id
        );
        return Err(Error::PaymentVerification);
    }
    let reservation = confirm_payment(repo, reservation_id, callback.outcome, now)?;
    payment.status = callback.outcome.into();
    payment.transaction_id = callback.payment_id.clone();
    payment.updated_at = now;
    repo.replace_payment(&payment)?;
    Ok(reservation)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use crate::{entities::builders::*, gateways::payment};
    use rust_decimal_macros::dec;

    struct AcceptingGateway;

    impl PaymentGateway for AcceptingGateway {
        fn create_order(
            &self,
            amount: Decimal,
            currency: &str,
            _receipt: &str,
        ) -> std::result::Result<PaymentOrder, payment::Error> {
            Ok(PaymentOrder {
                order_id: "order_1".into(),
                amount,
                currency: currency.into(),
            })
        }
        fn verify_payment(&self, _: &str, _: &str, signature: &str) -> bool {
            signature == "valid"
        }
    }

    fn setup() -> (MockDb, Reservation) {
        let db = MockDb::default();
        let r = Reservation::build().customer("alice").finish();
        db.reservations.borrow_mut().push(r.clone());
        let order = AcceptingGateway
            .create_order(r.total_amount, "INR", r.id.as_str())
            .unwrap();
        store_payment_order(&db, &r, order, Timestamp::now()).unwrap();
        (db, r)
    }

    fn callback(r: &Reservation, order_id: &str, signature: &str) -> PaymentCallback {
        PaymentCallback {
            reservation_id: r.id.clone(),
            order_id: order_id.into(),
            payment_id: Some("pay_1".into()),
            signature: Some(signature.into()),
            outcome: PaymentOutcome::Success,
        }
    }

    #[test]
    fn successful_callback() {
        let (db, r) = setup();
        let cb = callback(&r, "order_1", "valid");
        verify_payment_callback(&AcceptingGateway, &cb).unwrap();
        let confirmed = apply_payment_callback(&db, &cb, Timestamp::now()).unwrap();
        assert_eq!(confirmed.status, ReservationStatus::Confirmed);
        let payment = db.get_payment_of_reservation(r.id.as_str()).unwrap();
        assert_eq!(payment.status, PaymentStatus::Success);
        assert_eq!(payment.transaction_id.as_deref(), Some("pay_1"));
        assert_eq!(payment.amount, dec!(1000.00));
    }

    #[test]
    fn invalid_signature() {
        let (_, r) = setup();
        assert!(matches!(
            verify_payment_callback(&AcceptingGateway, &callback(&r, "order_1", "forged")),
            Err(Error::PaymentVerification)
        ));
        let mut missing = callback(&r, "order_1", "valid");
        missing.signature = None;
        assert!(matches!(
            verify_payment_callback(&AcceptingGateway, &missing),
            Err(Error::PaymentVerification)
        ));
    }

    #[test]
    fn failed_payments_need_no_signature() {
        let (db, r) = setup();
        let cb = PaymentCallback {
            payment_id: None,
            signature: None,
            outcome: PaymentOutcome::Failure,
            ..callback(&r, "order_1", "")
        };
        verify_payment_callback(&AcceptingGateway, &cb).unwrap();
        let r = apply_payment_callback(&db, &cb, Timestamp::now()).unwrap();
        assert_eq!(r.status, ReservationStatus::Pending);
        assert_eq!(r.payment_status, PaymentStatus::Failed);
        assert_eq!(db.payments.borrow()[0].status, PaymentStatus::Failed);
    }

    #[test]
    fn reject_unknown_order() {
        let (db, r) = setup();
        assert!(matches!(
            apply_payment_callback(&db, &callback(&r, "order_2", "valid"), Timestamp::now()),
            Err(Error::PaymentVerification)
        ));
        assert_eq!(db.reservations.borrow()[0].status, ReservationStatus::Pending);
    }

    #[test]
    fn only_pending_reservations_accept_new_orders() {
        let (db, r) = setup();
        assert!(pending_reservation_of_customer(&db, r.id.as_str(), &"alice".into()).is_ok());
        assert!(matches!(
            pending_reservation_of_customer(&db, r.id.as_str(), &"bob".into()),
            Err(Error::Forbidden)
        ));
        db.reservations.borrow_mut()[0].status = ReservationStatus::Confirmed;
        assert!(matches!(
            pending_reservation_of_customer(&db, r.id.as_str(), &"alice".into()),
            Err(Error::StateConflict { .. })
        ));
    }
}
