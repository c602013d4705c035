//! Monolithic registration validator.
//!
//! Every check is inlined and the GPA floor is hard-coded at 2.5, unlike
//! `GpaRule`'s 2.8 default. It also never looks at tuition. Adding a check
//! means editing `validate`.

use crate::model::{Course, Student};
use crate::rule::Rejection;
use crate::rules::{CreditLoadRule, GpaRule};

#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Accepted,
    Rejected(Rejection),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

impl core::fmt::Display for Verdict {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Verdict::Accepted => f.write_str("ACCEPTED"),
            Verdict::Rejected(reason) => write!(f, "REJECTED: {reason}"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatorManager;

impl ValidatorManager {
    pub fn validate(&self, student: &Student, course: &Course) -> Verdict {
        let limit = CreditLoadRule::DEFAULT_MAX_CREDITS;
        if student.total_credits_completed >= limit {
            return Verdict::Rejected(Rejection::CreditLimitReached {
                completed: student.total_credits_completed,
                limit,
            });
        }

        if let Some(prerequisite) = &course.prerequisite {
            if !student.has_completed(prerequisite) {
                return Verdict::Rejected(Rejection::MissingPrerequisite {
                    course: course.name.clone(),
                    prerequisite: prerequisite.clone(),
                });
            }
        }

        if student.gpa < GpaRule::MONOLITH_MINIMUM {
            return Verdict::Rejected(Rejection::GpaBelowMinimum {
                gpa: student.gpa,
                minimum: GpaRule::MONOLITH_MINIMUM,
            });
        }

        Verdict::Accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::RegistrationPolicy;

    fn course() -> Course {
        Course::new("Pemrograman Lanjut").with_prerequisite("Struktur Data")
    }

    #[test]
    fn accepts_eligible_student() {
        let student = Student::new(124, ["Algoritma", "Struktur Data"], 2.9, true);
        let verdict = ValidatorManager.validate(&student, &course());
        assert!(verdict.is_accepted());
        assert_eq!(verdict.to_string(), "ACCEPTED");
    }

    #[test]
    fn rejects_missing_prerequisite() {
        let student = Student::new(124, Vec::<String>::new(), 2.9, true);
        let verdict = ValidatorManager.validate(&student, &course());
        assert_eq!(
            verdict.to_string(),
            "REJECTED: prerequisite \"Struktur Data\" for \"Pemrograman Lanjut\" not completed"
        );
    }

    #[test]
    fn ignores_tuition() {
        let student = Student::new(124, ["Struktur Data"], 3.0, false);
        assert!(ValidatorManager.validate(&student, &course()).is_accepted());
    }

    #[test]
    fn gpa_floor_differs_from_rule_based_default() {
        let student = Student::new(124, ["Struktur Data"], 2.6, true);

        assert!(ValidatorManager.validate(&student, &course()).is_accepted());
        assert!(!RegistrationPolicy::default().coordinator().validate(&student, &course()));
    }

    #[test]
    fn gpa_below_monolith_floor_is_rejected() {
        let student = Student::new(124, ["Struktur Data"], 2.4, true);
        assert_eq!(
            ValidatorManager.validate(&student, &course()),
            Verdict::Rejected(Rejection::GpaBelowMinimum {
                gpa: 2.4,
                minimum: 2.5
            })
        );
    }
}
