//! Monolithic checkout: payment selection, charging and notification all
//! live in one type.
//!
//! Supporting another payment method means editing `PaymentMethod` and the
//! `match` in `process_checkout`. Kept alongside `CheckoutCoordinator` as the
//! starting point it was refactored from.

use core::str::FromStr;

use solid_core::DomainError;

use crate::order::Order;

/// Payment methods the monolith knows how to handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    CreditCard,
    BankTransfer,
}

impl FromStr for PaymentMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "credit_card" => Ok(PaymentMethod::CreditCard),
            "bank_transfer" => Ok(PaymentMethod::BankTransfer),
            other => Err(DomainError::validation(format!(
                "unsupported payment method: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OrderManager;

impl OrderManager {
    pub fn process_checkout(&self, order: &mut Order, payment_method: &str) -> bool {
        tracing::info!(
            target: "checkout",
            customer = order.customer_name(),
            "starting checkout"
        );

        let method = match payment_method.parse::<PaymentMethod>() {
            Ok(method) => method,
            Err(err) => {
                tracing::warn!(target: "checkout", "{err}");
                return false;
            }
        };

        match method {
            PaymentMethod::CreditCard => {
                tracing::info!(target: "checkout", "processing credit card");
            }
            PaymentMethod::BankTransfer => {
                tracing::info!(target: "checkout", "processing bank transfer");
            }
        }

        tracing::info!(
            target: "checkout",
            customer = order.customer_name(),
            "sending notification"
        );
        order.mark_paid();
        true
    }
}
