use std::sync::{Arc, Mutex};

use solid_checkout::{
    CheckoutCoordinator, EmailNotifier, NotificationService, Order, OrderStatus, QrisProcessor,
};
use solid_demo::scenarios;
use solid_registration::{Rejection, RegistrationPolicy};

#[derive(Default)]
struct Outbox {
    recipients: Mutex<Vec<String>>,
}

impl NotificationService for Outbox {
    fn send(&self, order: &Order) {
        self.recipients
            .lock()
            .unwrap()
            .push(order.customer_name().to_string());
    }
}

#[test]
fn credit_card_checkout_pays_andis_order() {
    let run = scenarios::credit_card_checkout(Arc::new(EmailNotifier));

    assert!(run.succeeded);
    assert_eq!(run.order.status(), OrderStatus::Paid);
    assert_eq!(run.order.customer_name(), "Andi");

    let receipt = run.receipt.expect("receipt for successful checkout");
    assert_eq!(receipt.amount, 500_000);
    assert_eq!(receipt.processor, "credit_card");
}

#[test]
fn qris_checkout_succeeds() {
    let run = scenarios::qris_checkout(Arc::new(EmailNotifier));

    assert!(run.succeeded);
    assert_eq!(run.order.status(), OrderStatus::Paid);
    assert_eq!(run.order.total_price(), 100_000);
}

#[test]
fn one_notifier_serves_both_checkouts() {
    let outbox = Arc::new(Outbox::default());

    scenarios::credit_card_checkout(outbox.clone());
    scenarios::qris_checkout(outbox.clone());

    let recipients = outbox.recipients.lock().unwrap();
    assert_eq!(recipients.as_slice(), &["Andi".to_string(), "Budi".to_string()]);
}

#[test]
fn run_checkout_reports_plain_boolean() {
    let coordinator = CheckoutCoordinator::new(Arc::new(QrisProcessor), Arc::new(EmailNotifier));
    let mut order = Order::new("Budi", 100_000);

    assert!(coordinator.run_checkout(&mut order));
    assert!(order.is_paid());
}

#[test]
fn checkout_run_serializes_with_lowercase_status() {
    let run = scenarios::credit_card_checkout(Arc::new(EmailNotifier));
    let json = serde_json::to_value(&run).unwrap();

    assert_eq!(json["succeeded"], true);
    assert_eq!(json["order"]["status"], "paid");
    assert_eq!(json["receipt"]["processor"], "credit_card");
}

#[test]
fn eligible_student_registers() {
    let run = scenarios::registration_accepted(&RegistrationPolicy::default());
    assert!(run.accepted);
    assert_eq!(run.rejection, None);
}

#[test]
fn student_without_prerequisite_is_rejected() {
    let run = scenarios::registration_missing_prerequisite(&RegistrationPolicy::default());

    assert!(!run.accepted);
    assert_eq!(
        run.rejection,
        Some(Rejection::MissingPrerequisite {
            course: "Pemrograman Lanjut".to_string(),
            prerequisite: "Struktur Data".to_string(),
        })
    );
}

#[test]
fn stricter_policy_rejects_sample_student_on_gpa() {
    let policy = RegistrationPolicy {
        min_gpa: 3.0,
        ..RegistrationPolicy::default()
    };
    let run = scenarios::registration_accepted(&policy);

    assert!(matches!(
        run.rejection,
        Some(Rejection::GpaBelowMinimum { minimum, .. }) if minimum == 3.0
    ));
}

#[test]
fn monolith_checkout_supports_only_hard_coded_methods() {
    assert!(scenarios::monolith_checkout("credit_card").succeeded);
    assert!(scenarios::monolith_checkout("bank_transfer").succeeded);

    let run = scenarios::monolith_checkout("qris");
    assert!(!run.succeeded);
    assert_eq!(run.order.status(), OrderStatus::Open);
}

#[test]
fn monolith_registration_accepts_sample_student() {
    assert!(scenarios::monolith_registration().is_accepted());
}
