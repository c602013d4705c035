use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Academic record of the student asking to register.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub total_credits_completed: u32,
    pub completed_courses: BTreeSet<String>,
    pub gpa: f64,
    pub tuition_paid: bool,
}

impl Student {
    pub fn new<I, S>(
        total_credits_completed: u32,
        completed_courses: I,
        gpa: f64,
        tuition_paid: bool,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            total_credits_completed,
            completed_courses: completed_courses.into_iter().map(Into::into).collect(),
            gpa,
            tuition_paid,
        }
    }

    pub fn has_completed(&self, course_name: &str) -> bool {
        self.completed_courses.contains(course_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    pub prerequisite: Option<String>,
}

impl Course {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prerequisite: None,
        }
    }

    pub fn with_prerequisite(mut self, prerequisite: impl Into<String>) -> Self {
        self.prerequisite = Some(prerequisite.into());
        self
    }
}
