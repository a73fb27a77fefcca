//! Enrollment model

use super::{Course, Grade, Semester};
use serde::{Deserialize, Serialize};

/// A student's registration in one course for one semester
///
/// Enrollments live only inside the owning [`Student`](super::Student), keyed by course code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    student_id: String,
    course: Course,
    semester: Semester,
    grade: Option<Grade>,
}

impl Enrollment {
    /// Create an ungraded enrollment
    #[must_use]
    pub const fn new(student_id: String, course: Course, semester: Semester) -> Self {
        Self {
            student_id,
            course,
            semester,
            grade: None,
        }
    }

    /// Id of the enrolled student
    #[must_use]
    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    /// Course as it was when the student enrolled
    #[must_use]
    pub const fn course(&self) -> &Course {
        &self.course
    }

    /// Term of the enrollment
    #[must_use]
    pub const fn semester(&self) -> &Semester {
        &self.semester
    }

    /// Recorded grade, if any
    #[must_use]
    pub const fn grade(&self) -> Option<Grade> {
        self.grade
    }

    /// Whether a grade has been recorded
    #[must_use]
    pub const fn is_graded(&self) -> bool {
        self.grade.is_some()
    }

    /// Record or overwrite the grade
    pub fn record_grade(&mut self, grade: Grade) {
        self.grade = Some(grade);
    }
}
