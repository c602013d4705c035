//! Ordered rule evaluation.

use crate::model::{Course, Student};
use crate::rule::{Rejection, ValidationRule};

/// Runs registration rules in order, stopping at the first failure.
///
/// The coordinator never inspects what a rule checks; it only sequences them.
/// It keeps no per-call state and can be reused for any number of students.
pub struct RegistrationCoordinator {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl RegistrationCoordinator {
    pub fn new(rules: Vec<Box<dyn ValidationRule>>) -> Self {
        Self { rules }
    }

    /// Append a rule after the existing ones.
    pub fn with_rule(mut self, rule: impl ValidationRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Returns `true` when every rule passes.
    pub fn validate(&self, student: &Student, course: &Course) -> bool {
        self.evaluate(student, course).is_ok()
    }

    /// Returns the rejection of the first failing rule, if any. Rules after it
    /// are not evaluated.
    pub fn evaluate(&self, student: &Student, course: &Course) -> Result<(), Rejection> {
        let span =
            tracing::info_span!(target: "registration", "registration", course = %course.name);
        let _entered = span.enter();

        for rule in &self.rules {
            if let Err(reason) = rule.check(student, course) {
                tracing::info!(
                    target: "registration",
                    rule = rule.name(),
                    %reason,
                    "registration rejected"
                );
                return Err(reason);
            }
        }

        tracing::info!(target: "registration", "registration accepted");
        Ok(())
    }
}

impl core::fmt::Debug for RegistrationCoordinator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RegistrationCoordinator")
            .field("rules", &self.rule_names())
            .finish()
    }
}
