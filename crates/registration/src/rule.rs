use std::borrow::Cow;

use thiserror::Error;

use crate::model::{Course, Student};

/// Why a registration was refused.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Rejection {
    #[error("credit limit reached ({completed} of {limit} credits completed)")]
    CreditLimitReached { completed: u32, limit: u32 },

    #[error("prerequisite {prerequisite:?} for {course:?} not completed")]
    MissingPrerequisite { course: String, prerequisite: String },

    #[error("gpa {gpa} below minimum {minimum}")]
    GpaBelowMinimum { gpa: f64, minimum: f64 },

    #[error("tuition not paid")]
    TuitionUnpaid,

    /// Reason reported by a rule outside this crate.
    #[error("{rule}: {message}")]
    Custom {
        rule: Cow<'static, str>,
        message: String,
    },
}

impl Rejection {
    pub fn custom(rule: impl Into<Cow<'static, str>>, message: impl Into<String>) -> Self {
        Self::Custom {
            rule: rule.into(),
            message: message.into(),
        }
    }
}

/// A single registration check.
///
/// Rules are pure predicates over their inputs: the same student and course
/// always produce the same answer. `check` is the only decision point; the
/// boolean form comes from [`ValidationRuleExt::validate`].
pub trait ValidationRule: Send + Sync {
    /// Short stable name used in logs.
    fn name(&self) -> &'static str;

    /// Evaluate the rule, returning the reason on failure.
    fn check(&self, student: &Student, course: &Course) -> Result<(), Rejection>;
}

/// Boolean view of a [`ValidationRule`], implemented for every rule.
pub trait ValidationRuleExt: ValidationRule {
    /// Evaluate the rule as a boolean, logging the reason on failure.
    fn validate(&self, student: &Student, course: &Course) -> bool;
}

impl<R: ValidationRule + ?Sized> ValidationRuleExt for R {
    fn validate(&self, student: &Student, course: &Course) -> bool {
        match self.check(student, course) {
            Ok(()) => true,
            Err(reason) => {
                tracing::info!(target: "registration", rule = self.name(), %reason, "rule failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysFull;

    impl ValidationRule for AlwaysFull {
        fn name(&self) -> &'static str {
            "always_full"
        }

        fn check(&self, _student: &Student, course: &Course) -> Result<(), Rejection> {
            Err(Rejection::custom("always_full", format!("{} is full", course.name)))
        }
    }

    #[test]
    fn validate_maps_check_to_bool() {
        let student = Student::new(0, Vec::<String>::new(), 4.0, true);
        let course = Course::new("Kalkulus");
        assert!(!AlwaysFull.validate(&student, &course));
    }

    #[test]
    fn custom_rejection_display() {
        let reason = Rejection::custom("quota", "class is full");
        assert_eq!(reason.to_string(), "quota: class is full");
    }

    #[test]
    fn builtin_rejection_display() {
        let reason = Rejection::CreditLimitReached {
            completed: 144,
            limit: 144,
        };
        assert_eq!(
            reason.to_string(),
            "credit limit reached (144 of 144 credits completed)"
        );
    }
}
