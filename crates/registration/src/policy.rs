//! Registration policy: the tunable thresholds and the canonical rule order.

use solid_core::{DomainError, DomainResult};

use crate::coordinator::RegistrationCoordinator;
use crate::rule::ValidationRule;
use crate::rules::{CreditLoadRule, GpaRule, PrerequisiteRule, TuitionPaidRule};

pub const MAX_CREDITS_VAR: &str = "REGISTRATION_MAX_CREDITS";
pub const MIN_GPA_VAR: &str = "REGISTRATION_MIN_GPA";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegistrationPolicy {
    pub max_credits: u32,
    pub min_gpa: f64,
}

impl Default for RegistrationPolicy {
    fn default() -> Self {
        Self {
            max_credits: CreditLoadRule::DEFAULT_MAX_CREDITS,
            min_gpa: GpaRule::REFACTORED_MINIMUM,
        }
    }
}

impl RegistrationPolicy {
    /// Load overrides from the process environment.
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load overrides through `lookup`; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> DomainResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut policy = Self::default();

        if let Some(raw) = lookup(MAX_CREDITS_VAR) {
            policy.max_credits = raw.trim().parse().map_err(|e| {
                DomainError::validation(format!("{MAX_CREDITS_VAR}={raw:?}: {e}"))
            })?;
        }

        if let Some(raw) = lookup(MIN_GPA_VAR) {
            let min_gpa: f64 = raw
                .trim()
                .parse()
                .map_err(|e| DomainError::validation(format!("{MIN_GPA_VAR}={raw:?}: {e}")))?;
            if !min_gpa.is_finite() || min_gpa < 0.0 {
                return Err(DomainError::validation(format!(
                    "{MIN_GPA_VAR} must be a non-negative number, got {raw:?}"
                )));
            }
            policy.min_gpa = min_gpa;
        }

        Ok(policy)
    }

    /// Rules in evaluation order: credits, prerequisite, GPA, tuition.
    pub fn rules(&self) -> Vec<Box<dyn ValidationRule>> {
        vec![
            Box::new(CreditLoadRule::new(self.max_credits)),
            Box::new(PrerequisiteRule),
            Box::new(GpaRule::new(self.min_gpa)),
            Box::new(TuitionPaidRule),
        ]
    }

    pub fn coordinator(&self) -> RegistrationCoordinator {
        RegistrationCoordinator::new(self.rules())
    }
}
