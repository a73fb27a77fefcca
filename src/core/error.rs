//! Error types for the records domain

use thiserror::Error;

/// Errors raised by the records domain model and its services
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordsError {
    /// A required field is missing or a value is out of range
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The student already holds an enrollment for this course
    #[error("Student {reg_no} is already enrolled in course {course}")]
    DuplicateEnrollment {
        /// Registration number of the student
        reg_no: String,
        /// Canonical code of the course
        course: String,
    },

    /// Enrolling would push the semester's ungraded credit load over the limit
    #[error("Credit limit exceeded for semester {semester}: {requested} credits requested, limit is {limit}")]
    CreditLimitExceeded {
        /// Display form of the semester
        semester: String,
        /// Ungraded credits the semester would carry after enrolling
        requested: i32,
        /// Maximum ungraded credits per semester
        limit: i32,
    },

    /// Update or delete against an absent key
    #[error("{entity} not found: {key}")]
    NotFound {
        /// Kind of entity looked up (e.g. "Course")
        entity: &'static str,
        /// Key that was not found
        key: String,
    },

    /// Semester string is not of the form `NAME2025`
    #[error("Invalid semester format: {0}")]
    InvalidSemester(String),

    /// Department name does not match any known department
    #[error("Unknown department: {0}")]
    UnknownDepartment(String),

    /// Grade letter does not match any known grade
    #[error("Unknown grade: {0}")]
    UnknownGrade(String),
}

impl RecordsError {
    /// Creates a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a not-found error for the given entity kind and key
    pub fn not_found(entity: &'static str, key: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            key: key.into(),
        }
    }
}

/// Result alias for records operations
pub type Result<T> = std::result::Result<T, RecordsError>;
