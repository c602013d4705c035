//! Course registration domain module.
//!
//! A `RegistrationCoordinator` runs an ordered list of `ValidationRule`s
//! against a (student, course) pair and stops at the first rule that fails.
//! New rules are added by implementing the trait and handing an instance to
//! the coordinator. `ValidatorManager` is the monolithic variant with every
//! check inlined.

pub mod coordinator;
pub mod model;
pub mod monolith;
pub mod policy;
pub mod rule;
pub mod rules;

pub use coordinator::RegistrationCoordinator;
pub use model::{Course, Student};
pub use monolith::{ValidatorManager, Verdict};
pub use policy::RegistrationPolicy;
pub use rule::{Rejection, ValidationRule, ValidationRuleExt};
pub use rules::{CreditLoadRule, GpaRule, PrerequisiteRule, TuitionPaidRule};
