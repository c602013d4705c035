//! Checkout coordination.
//!
//! The coordinator owns the order-status transition and the sequencing
//! (charge, then notify). Everything payment- or channel-specific sits behind
//! the injected traits.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use solid_core::{OrderId, ReceiptId};

use crate::notification::NotificationService;
use crate::order::Order;
use crate::payment::PaymentProcessor;

/// Proof of a successful checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutReceipt {
    pub receipt_id: ReceiptId,
    pub order_id: OrderId,
    pub customer_name: String,
    /// Amount charged, in smallest currency unit.
    pub amount: u64,
    pub processor: String,
    pub paid_at: DateTime<Utc>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("payment declined by {processor} for order {order_id}")]
    PaymentDeclined {
        order_id: OrderId,
        processor: &'static str,
    },
}

/// Runs checkouts with one payment processor and one notifier.
///
/// Holds no per-call state, so a single instance can serve any number of
/// orders and can be shared across threads.
#[derive(Clone)]
pub struct CheckoutCoordinator {
    payment_processor: Arc<dyn PaymentProcessor>,
    notifier: Arc<dyn NotificationService>,
}

impl CheckoutCoordinator {
    pub fn new(
        payment_processor: Arc<dyn PaymentProcessor>,
        notifier: Arc<dyn NotificationService>,
    ) -> Self {
        Self {
            payment_processor,
            notifier,
        }
    }

    /// Run a checkout and report success as a boolean.
    ///
    /// Returns `true` exactly when the payment processor accepts the order; the
    /// order is then `Paid` and the notifier has been called. On `false` the
    /// order is left as it was.
    pub fn run_checkout(&self, order: &mut Order) -> bool {
        self.checkout(order).is_ok()
    }

    /// Run a checkout, returning a receipt on success.
    pub fn checkout(&self, order: &mut Order) -> Result<CheckoutReceipt, CheckoutError> {
        let processor = self.payment_processor.name();
        let span = tracing::info_span!(
            target: "checkout",
            "checkout",
            order_id = %order.id(),
            processor
        );
        let _entered = span.enter();

        tracing::info!(
            target: "checkout",
            customer = order.customer_name(),
            total = order.total_price(),
            "starting checkout"
        );

        if !self.payment_processor.process(order) {
            tracing::info!(target: "checkout", "payment failed, transaction cancelled");
            return Err(CheckoutError::PaymentDeclined {
                order_id: order.id(),
                processor,
            });
        }

        order.mark_paid();
        self.notifier.send(order);
        tracing::info!(target: "checkout", status = %order.status(), "checkout succeeded");

        Ok(CheckoutReceipt {
            receipt_id: ReceiptId::new(),
            order_id: order.id(),
            customer_name: order.customer_name().to_string(),
            amount: order.total_price(),
            processor: processor.to_string(),
            paid_at: Utc::now(),
        })
    }
}

impl core::fmt::Debug for CheckoutCoordinator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CheckoutCoordinator")
            .field("payment_processor", &self.payment_processor.name())
            .finish_non_exhaustive()
    }
}
