//! Demonstration runs over fixed sample data.

use std::sync::Arc;

use serde::Serialize;

use solid_checkout::{
    CheckoutCoordinator, CheckoutReceipt, CreditCardProcessor, NotificationService, Order,
    OrderManager, PaymentProcessor, QrisProcessor,
};
use solid_registration::{
    Course, Rejection, RegistrationPolicy, Student, ValidatorManager, Verdict,
};

/// Outcome of one checkout run.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutRun {
    pub succeeded: bool,
    pub order: Order,
    pub receipt: Option<CheckoutReceipt>,
}

/// Outcome of one registration run.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationRun {
    pub accepted: bool,
    pub rejection: Option<Rejection>,
}

fn checkout_with(
    processor: Arc<dyn PaymentProcessor>,
    notifier: Arc<dyn NotificationService>,
    mut order: Order,
) -> CheckoutRun {
    let coordinator = CheckoutCoordinator::new(processor, notifier);
    let receipt = coordinator.checkout(&mut order).ok();
    CheckoutRun {
        succeeded: receipt.is_some(),
        order,
        receipt,
    }
}

/// Andi pays 500000 by credit card.
pub fn credit_card_checkout(notifier: Arc<dyn NotificationService>) -> CheckoutRun {
    checkout_with(
        Arc::new(CreditCardProcessor),
        notifier,
        Order::new("Andi", 500_000),
    )
}

/// Budi pays 100000 through QRIS, a processor the coordinator was never
/// changed to know about.
pub fn qris_checkout(notifier: Arc<dyn NotificationService>) -> CheckoutRun {
    checkout_with(Arc::new(QrisProcessor), notifier, Order::new("Budi", 100_000))
}

/// The monolithic manager handling Andi's order with `payment_method`.
pub fn monolith_checkout(payment_method: &str) -> CheckoutRun {
    let mut order = Order::new("Andi", 500_000);
    let succeeded = OrderManager.process_checkout(&mut order, payment_method);
    CheckoutRun {
        succeeded,
        order,
        receipt: None,
    }
}

pub fn sample_student() -> Student {
    Student::new(124, ["Algoritma", "Struktur Data"], 2.9, true)
}

pub fn sample_course() -> Course {
    Course::new("Pemrograman Lanjut").with_prerequisite("Struktur Data")
}

fn register(policy: &RegistrationPolicy, student: &Student, course: &Course) -> RegistrationRun {
    let rejection = policy.coordinator().evaluate(student, course).err();
    RegistrationRun {
        accepted: rejection.is_none(),
        rejection,
    }
}

/// The sample student registering for the sample course.
pub fn registration_accepted(policy: &RegistrationPolicy) -> RegistrationRun {
    register(policy, &sample_student(), &sample_course())
}

/// The sample student with no completed courses.
pub fn registration_missing_prerequisite(policy: &RegistrationPolicy) -> RegistrationRun {
    let student = Student {
        completed_courses: Default::default(),
        ..sample_student()
    };
    register(policy, &student, &sample_course())
}

/// The monolithic validator on the sample student and course.
pub fn monolith_registration() -> Verdict {
    ValidatorManager.validate(&sample_student(), &sample_course())
}
