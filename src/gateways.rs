use rust_decimal::Decimal;
use turfbook_core::{
    entities::payment::PaymentOrder,
    gateways::payment::{self, PaymentGateway},
};
use uuid::Uuid;

use crate::config;

pub fn payment_gateway(cfg: &config::Payment) -> Box<dyn PaymentGateway + Send + Sync> {
    match cfg.gateway {
        config::PaymentGateway::Demo => Box::new(DemoPaymentGateway),
    }
}

/// A payment gateway for local testing that never
/// charges anything.
#[derive(Debug, Default)]
pub struct DemoPaymentGateway;

impl DemoPaymentGateway {
    pub const SUCCESS_SIGNATURE: &'static str = "demo_success";
}

impl PaymentGateway for DemoPaymentGateway {
    fn create_order(
        &self,
        amount: Decimal,
        currency: &str,
        receipt: &str,
    ) -> Result<PaymentOrder, payment::Error> {
        if amount <= Decimal::ZERO {
            return Err(payment::Error::Rejected(format!(
                "Invalid amount {amount} for receipt {receipt}"
            )));
        }
        let mut order_id = Uuid::new_v4().simple().to_string();
        order_id.truncate(12);
        let order = PaymentOrder {
            order_id: format!("order_{order_id}"),
            amount,
            currency: currency.to_owned(),
        };
        log::debug!(
            "Created demo payment order {} over {} {} for {receipt}",
            order.order_id,
            order.amount,
            order.currency
        );
        Ok(order)
    }

    fn verify_payment(&self, _payment_id: &str, _order_id: &str, signature: &str) -> bool {
        signature == Self::SUCCESS_SIGNATURE
    }
}
