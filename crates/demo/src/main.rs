use std::sync::Arc;

use solid_checkout::EmailNotifier;
use solid_demo::scenarios;
use solid_registration::RegistrationPolicy;

fn main() -> anyhow::Result<()> {
    solid_observability::init();

    let policy = RegistrationPolicy::from_env()?;
    tracing::info!(
        max_credits = policy.max_credits,
        min_gpa = policy.min_gpa,
        "registration policy loaded"
    );

    let email = Arc::new(EmailNotifier);

    println!("--- Scenario 1: credit card ---");
    let run = scenarios::credit_card_checkout(email.clone());
    println!("{}", serde_json::to_string_pretty(&run)?);

    println!("\n--- Scenario 2: QRIS added without touching the coordinator ---");
    let run = scenarios::qris_checkout(email);
    println!("{}", serde_json::to_string_pretty(&run)?);

    println!("\n--- Scenario 3: registration ---");
    let run = scenarios::registration_accepted(&policy);
    println!("{}", run.accepted);

    println!("\n--- Scenario 4: registration without prerequisite ---");
    let run = scenarios::registration_missing_prerequisite(&policy);
    match &run.rejection {
        Some(reason) => println!("{} ({reason})", run.accepted),
        None => println!("{}", run.accepted),
    }

    println!("\n--- Before refactoring ---");
    for method in ["credit_card", "bank_transfer", "qris"] {
        let run = scenarios::monolith_checkout(method);
        println!("{method}: {} (status: {})", run.succeeded, run.order.status());
    }
    println!("registration: {}", scenarios::monolith_registration());

    Ok(())
}
