use rust_decimal::Decimal;
use thiserror::Error;

use crate::entities::payment::PaymentOrder;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The payment gateway is unreachable: {0}")]
    Unreachable(String),
    #[error("The payment gateway rejected the order: {0}")]
    Rejected(String),
}

pub trait PaymentGateway {
    /// Registers a new order. The receipt is a reference that
    /// the gateway reports back together with the order.
    fn create_order(
        &self,
        amount: Decimal,
        currency: &str,
        receipt: &str,
    ) -> Result<PaymentOrder, Error>;

    /// Verifies the signature that the gateway attached to the
    /// outcome of a payment.
    fn verify_payment(&self, payment_id: &str, order_id: &str, signature: &str) -> bool;
}
