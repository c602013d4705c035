use crate::order::Order;

/// Post-payment notification channel.
///
/// Fire-and-forget: there is no way to report a delivery failure back to the
/// coordinator.
pub trait NotificationService: Send + Sync {
    /// Notify the customer that `order` has been paid.
    fn send(&self, order: &Order);
}

/// Logs the confirmation email it would send.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailNotifier;

impl NotificationService for EmailNotifier {
    fn send(&self, order: &Order) {
        tracing::info!(
            target: "checkout",
            customer = order.customer_name(),
            "sending confirmation email"
        );
    }
}
