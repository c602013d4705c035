//! Checkout domain module.
//!
//! `CheckoutCoordinator` runs a checkout against whichever `PaymentProcessor`
//! and `NotificationService` it was constructed with; adding a payment
//! method means adding a processor, never editing the coordinator.
//! `OrderManager` is the monolithic variant that hard-codes both concerns.

pub mod coordinator;
pub mod monolith;
pub mod notification;
pub mod order;
pub mod payment;

pub use coordinator::{CheckoutCoordinator, CheckoutError, CheckoutReceipt};
pub use monolith::{OrderManager, PaymentMethod};
pub use notification::{EmailNotifier, NotificationService};
pub use order::{Order, OrderStatus};
pub use payment::{BankTransferProcessor, CreditCardProcessor, PaymentProcessor, QrisProcessor};
