use rust_decimal::Decimal;

use crate::{id::*, reservation::PaymentStatus, time::*};

/// An order that has been registered at the payment gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentOrder {
    pub order_id: String,
    pub amount: Decimal,
    pub currency: String,
}

/// The payment record of a single reservation.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payment {
    pub reservation_id : Id,
    pub order_id       : String,
    pub amount         : Decimal,
    pub currency       : String,
    pub status         : PaymentStatus,
    // Assigned by the gateway after the customer paid
    pub transaction_id : Option<String>,
    pub created_at     : Timestamp,
    pub updated_at     : Timestamp,
}

/// The final result of a payment as reported by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentOutcome {
    Success,
    Failure,
}

impl From<PaymentOutcome> for PaymentStatus {
    fn from(from: PaymentOutcome) -> Self {
        match from {
            PaymentOutcome::Success => Self::Success,
            PaymentOutcome::Failure => Self::Failed,
        }
    }
}
