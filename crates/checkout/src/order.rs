use serde::{Deserialize, Serialize};

use solid_core::OrderId;

/// Order status lifecycle.
///
/// Checkout only ever moves an order from `Open` to `Paid`. `Failed` is part
/// of the vocabulary but nothing in this crate assigns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Open,
    Paid,
    Failed,
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            OrderStatus::Open => "open",
            OrderStatus::Paid => "paid",
            OrderStatus::Failed => "failed",
        })
    }
}

/// An order owned by the caller and lent to the coordinator for one checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    customer_name: String,
    /// Price in smallest currency unit.
    total_price: u64,
    status: OrderStatus,
}

impl Order {
    /// Create a new order in the `Open` state.
    pub fn new(customer_name: impl Into<String>, total_price: u64) -> Self {
        Self::with_id(OrderId::new(), customer_name, total_price)
    }

    pub fn with_id(id: OrderId, customer_name: impl Into<String>, total_price: u64) -> Self {
        Self {
            id,
            customer_name: customer_name.into(),
            total_price,
            status: OrderStatus::Open,
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn total_price(&self) -> u64 {
        self.total_price
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn is_paid(&self) -> bool {
        matches!(self.status, OrderStatus::Paid)
    }

    pub(crate) fn mark_paid(&mut self) {
        self.status = OrderStatus::Paid;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_order_starts_open() {
        let order = Order::new("Andi", 500_000);
        assert_eq!(order.status(), OrderStatus::Open);
        assert_eq!(order.customer_name(), "Andi");
        assert_eq!(order.total_price(), 500_000);
        assert!(!order.is_paid());
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&OrderStatus::Paid).unwrap();
        assert_eq!(json, "\"paid\"");
        assert_eq!(OrderStatus::Failed.to_string(), "failed");
    }

    #[test]
    fn with_id_keeps_the_given_identifier() {
        let id = OrderId::new();
        let order = Order::with_id(id, "Budi", 100_000);
        assert_eq!(order.id(), id);
        assert_ne!(Order::new("Budi", 100_000).id(), id);
    }
}
