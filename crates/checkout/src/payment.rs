//! Payment processor capability and the bundled processors.
//!
//! None of these talk to a real gateway; they log the charge they would make
//! and accept it.

use crate::order::Order;

/// Contract every payment method implements.
///
/// `process` returns `true` when the payment is accepted. Implementations
/// must not touch the order's status; the coordinator owns that transition.
pub trait PaymentProcessor: Send + Sync {
    /// Short stable name used in logs and receipts.
    fn name(&self) -> &'static str;

    /// Attempt to charge `order.total_price()` to the customer.
    fn process(&self, order: &Order) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CreditCardProcessor;

impl PaymentProcessor for CreditCardProcessor {
    fn name(&self) -> &'static str {
        "credit_card"
    }

    fn process(&self, order: &Order) -> bool {
        tracing::info!(
            target: "checkout",
            amount = order.total_price(),
            "charging credit card"
        );
        true
    }
}

/// QRIS (QR code) payments.
#[derive(Debug, Clone, Copy, Default)]
pub struct QrisProcessor;

impl PaymentProcessor for QrisProcessor {
    fn name(&self) -> &'static str {
        "qris"
    }

    fn process(&self, order: &Order) -> bool {
        tracing::info!(
            target: "checkout",
            amount = order.total_price(),
            "processing QRIS payment"
        );
        true
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BankTransferProcessor;

impl PaymentProcessor for BankTransferProcessor {
    fn name(&self) -> &'static str {
        "bank_transfer"
    }

    fn process(&self, order: &Order) -> bool {
        tracing::info!(
            target: "checkout",
            amount = order.total_price(),
            "processing bank transfer"
        );
        true
    }
}
