//! The bundled registration rules.

use crate::model::{Course, Student};
use crate::rule::{Rejection, ValidationRule};

/// Refuses students who already reached the credit ceiling (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreditLoadRule {
    max_credits: u32,
}

impl CreditLoadRule {
    pub const DEFAULT_MAX_CREDITS: u32 = 144;

    pub fn new(max_credits: u32) -> Self {
        Self { max_credits }
    }
}

impl Default for CreditLoadRule {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_CREDITS)
    }
}

impl ValidationRule for CreditLoadRule {
    fn name(&self) -> &'static str {
        "credit_load"
    }

    fn check(&self, student: &Student, _course: &Course) -> Result<(), Rejection> {
        if student.total_credits_completed >= self.max_credits {
            return Err(Rejection::CreditLimitReached {
                completed: student.total_credits_completed,
                limit: self.max_credits,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PrerequisiteRule;

impl ValidationRule for PrerequisiteRule {
    fn name(&self) -> &'static str {
        "prerequisite"
    }

    fn check(&self, student: &Student, course: &Course) -> Result<(), Rejection> {
        // An empty name counts as no prerequisite.
        match course.prerequisite.as_deref().filter(|p| !p.is_empty()) {
            Some(prerequisite) if !student.has_completed(prerequisite) => {
                Err(Rejection::MissingPrerequisite {
                    course: course.name.clone(),
                    prerequisite: prerequisite.to_string(),
                })
            }
            _ => Ok(()),
        }
    }
}

/// Refuses students whose GPA is strictly below `minimum`.
///
/// The monolithic validator used 2.5 while the rule-based one uses 2.8; both
/// values are kept so callers pick one explicitly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpaRule {
    minimum: f64,
}

impl GpaRule {
    pub const REFACTORED_MINIMUM: f64 = 2.8;
    pub const MONOLITH_MINIMUM: f64 = 2.5;

    pub fn new(minimum: f64) -> Self {
        Self { minimum }
    }

    pub fn minimum(&self) -> f64 {
        self.minimum
    }
}

impl Default for GpaRule {
    fn default() -> Self {
        Self::new(Self::REFACTORED_MINIMUM)
    }
}

impl ValidationRule for GpaRule {
    fn name(&self) -> &'static str {
        "gpa"
    }

    fn check(&self, student: &Student, _course: &Course) -> Result<(), Rejection> {
        if student.gpa < self.minimum {
            return Err(Rejection::GpaBelowMinimum {
                gpa: student.gpa,
                minimum: self.minimum,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TuitionPaidRule;

impl ValidationRule for TuitionPaidRule {
    fn name(&self) -> &'static str {
        "tuition_paid"
    }

    fn check(&self, student: &Student, _course: &Course) -> Result<(), Rejection> {
        if !student.tuition_paid {
            return Err(Rejection::TuitionUnpaid);
        }
        Ok(())
    }
}
