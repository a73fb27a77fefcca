//! Course model

use super::Department;
use crate::core::error::{RecordsError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum credit value a course may carry
pub const MIN_CREDITS: i32 = 1;
/// Maximum credit value a course may carry
pub const MAX_CREDITS: i32 = 6;

/// Immutable course identity: department prefix plus course number
///
/// The canonical form pads the number to four digits, so `CS` + `101` is `CS0101`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CourseCode {
    prefix: String,
    number: u32,
}

impl CourseCode {
    /// Create a course code; the prefix is uppercased
    ///
    /// # Errors
    /// Returns a validation error if the prefix is empty
    pub fn new(prefix: &str, number: u32) -> Result<Self> {
        let prefix = prefix.trim().to_uppercase();
        if prefix.is_empty() {
            return Err(RecordsError::validation("Course code prefix is required"));
        }
        Ok(Self { prefix, number })
    }

    /// Department prefix (uppercase)
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Numeric part of the code
    #[must_use]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Canonical string form used as the catalog key (e.g., "CS0101")
    #[must_use]
    pub fn canonical(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    /// Normalize loose user input such as "cs101" into canonical form
    ///
    /// Returns `None` unless the input is ASCII letters followed by ASCII digits.
    #[must_use]
    pub fn normalize(input: &str) -> Option<String> {
        let upper = input.trim().to_uppercase();
        let split = upper.find(|c: char| !c.is_ascii_uppercase())?;
        let (prefix, digits) = upper.split_at(split);
        if prefix.is_empty() || digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let number = digits.parse::<u32>().ok()?;
        Some(format!("{prefix}{number:04}"))
    }
}

impl fmt::Display for CourseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}

/// Instructor who teaches a course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instructor {
    /// Staff identifier
    pub id: String,
    /// Full name
    pub full_name: String,
    /// Department name
    pub department: String,
}

impl Instructor {
    /// Create a new instructor
    #[must_use]
    pub const fn new(id: String, full_name: String, department: String) -> Self {
        Self {
            id,
            full_name,
            department,
        }
    }
}

impl fmt::Display for Instructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.full_name, self.department)
    }
}

/// Unvalidated course fields; [`CourseBuilder::build`] validates them in one step
#[derive(Debug, Clone, Default)]
pub struct CourseBuilder {
    /// Course code (required)
    pub code: Option<CourseCode>,
    /// Course title (required, non-empty)
    pub title: Option<String>,
    /// Credit value, must be within 1..=6
    pub credits: i32,
    /// Optional instructor
    pub instructor: Option<Instructor>,
    /// Offering department
    pub department: Option<Department>,
}

impl CourseBuilder {
    /// Start a builder for the given code with the default of 3 credits
    #[must_use]
    pub const fn new(code: CourseCode) -> Self {
        Self {
            code: Some(code),
            title: None,
            credits: 3,
            instructor: None,
            department: None,
        }
    }

    /// Set the title
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the credit value
    #[must_use]
    pub fn credits(mut self, credits: i32) -> Self {
        self.credits = credits;
        self
    }

    /// Set the instructor
    #[must_use]
    pub fn instructor(mut self, instructor: Instructor) -> Self {
        self.instructor = Some(instructor);
        self
    }

    /// Set the department
    #[must_use]
    pub fn department(mut self, department: Department) -> Self {
        self.department = Some(department);
        self
    }

    /// Validate and construct the course
    ///
    /// # Errors
    /// Returns a validation error if the code or title is missing, or the credits fall
    /// outside `1..=6`
    pub fn build(self) -> Result<Course> {
        let code = self
            .code
            .ok_or_else(|| RecordsError::validation("Course code is required"))?;
        let title = self
            .title
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| RecordsError::validation("Course title is required"))?;
        validate_credits(self.credits)?;

        Ok(Course {
            code,
            title,
            credits: self.credits,
            instructor: self.instructor,
            department: self.department,
            active: true,
        })
    }
}

fn validate_credits(credits: i32) -> Result<()> {
    if (MIN_CREDITS..=MAX_CREDITS).contains(&credits) {
        Ok(())
    } else {
        Err(RecordsError::validation(format!(
            "Credits must be between {MIN_CREDITS} and {MAX_CREDITS}, got {credits}"
        )))
    }
}

/// A course offered in the catalog
///
/// The code is fixed at construction. The setters run the same checks as the builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    code: CourseCode,
    title: String,
    credits: i32,
    instructor: Option<Instructor>,
    department: Option<Department>,
    active: bool,
}

impl Course {
    /// Start building a course with the given code
    #[must_use]
    pub const fn builder(code: CourseCode) -> CourseBuilder {
        CourseBuilder::new(code)
    }

    /// Course code
    #[must_use]
    pub const fn code(&self) -> &CourseCode {
        &self.code
    }

    /// Course title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Credit value
    #[must_use]
    pub const fn credits(&self) -> i32 {
        self.credits
    }

    /// Assigned instructor, if any
    #[must_use]
    pub const fn instructor(&self) -> Option<&Instructor> {
        self.instructor.as_ref()
    }

    /// Offering department, if any
    #[must_use]
    pub const fn department(&self) -> Option<Department> {
        self.department
    }

    /// Whether the course is currently offered
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Change the title
    ///
    /// # Errors
    /// Returns a validation error if the title is empty
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<()> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(RecordsError::validation("Course title is required"));
        }
        self.title = title;
        Ok(())
    }

    /// Change the credit value
    ///
    /// # Errors
    /// Returns a validation error if the credits fall outside `1..=6`
    pub fn set_credits(&mut self, credits: i32) -> Result<()> {
        validate_credits(credits)?;
        self.credits = credits;
        Ok(())
    }

    /// Assign or clear the instructor
    pub fn set_instructor(&mut self, instructor: Option<Instructor>) {
        self.instructor = instructor;
    }

    /// Assign or clear the department
    pub fn set_department(&mut self, department: Option<Department>) {
        self.department = department;
    }

    /// Mark the course as offered or withdrawn
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let instructor = self
            .instructor
            .as_ref()
            .map_or("None", |i| i.full_name.as_str());
        write!(
            f,
            "Course{{code={}, title='{}', credits={}, instructor={}}}",
            self.code, self.title, self.credits, instructor
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(prefix: &str, number: u32) -> CourseCode {
        CourseCode::new(prefix, number).unwrap()
    }

    #[test]
    fn test_canonical_code() {
        assert_eq!(code("cs", 1).canonical(), "CS0001");
        assert_eq!(code("CS", 101).canonical(), "CS0101");
        assert_eq!(code("ee", 2510).to_string(), "EE2510");
        assert_eq!(code("cs", 101), code("CS", 101));
    }

    #[test]
    fn test_code_requires_prefix() {
        assert!(CourseCode::new("", 101).is_err());
        assert!(CourseCode::new("   ", 101).is_err());
    }

    #[test]
    fn test_normalize_loose_input() {
        assert_eq!(CourseCode::normalize("cs101"), Some("CS0101".to_string()));
        assert_eq!(CourseCode::normalize("CS0101"), Some("CS0101".to_string()));
        assert_eq!(CourseCode::normalize("me1"), Some("ME0001".to_string()));
        assert_eq!(CourseCode::normalize("101"), None);
        assert_eq!(CourseCode::normalize("CS"), None);
        assert_eq!(CourseCode::normalize("CS-101"), None);
        assert_eq!(CourseCode::normalize("CS101A"), None);
    }

    #[test]
    fn test_credits_bounds() {
        for credits in [0, 7, -1] {
            let result = Course::builder(code("CS", 101))
                .title("Intro")
                .credits(credits)
                .build();
            assert!(
                matches!(result, Err(RecordsError::Validation(_))),
                "{credits} credits should be rejected"
            );
        }
        for credits in 1..=6 {
            let course = Course::builder(code("CS", 101))
                .title("Intro")
                .credits(credits)
                .build()
                .unwrap();
            assert_eq!(course.credits(), credits);
            assert!(course.is_active());
        }
    }

    #[test]
    fn test_builder_requires_code_and_title() {
        let missing_code = CourseBuilder {
            title: Some("Intro".to_string()),
            credits: 3,
            ..CourseBuilder::default()
        };
        assert!(missing_code.build().is_err());

        assert!(Course::builder(code("CS", 101)).build().is_err());
        assert!(Course::builder(code("CS", 101)).title("  ").build().is_err());
    }

    #[test]
    fn test_setters_revalidate() {
        let mut course = Course::builder(code("CS", 101))
            .title("Intro")
            .credits(3)
            .build()
            .unwrap();

        assert!(course.set_credits(9).is_err());
        assert_eq!(course.credits(), 3);
        course.set_credits(4).unwrap();
        assert_eq!(course.credits(), 4);

        assert!(course.set_title("").is_err());
        assert_eq!(course.title(), "Intro");

        course.set_active(false);
        assert!(!course.is_active());
    }

    #[test]
    fn test_display() {
        let mut course = Course::builder(code("CS", 101))
            .title("Introduction to Programming")
            .credits(3)
            .department(Department::ComputerScience)
            .build()
            .unwrap();
        assert_eq!(
            course.to_string(),
            "Course{code=CS0101, title='Introduction to Programming', credits=3, instructor=None}"
        );

        course.set_instructor(Some(Instructor::new(
            "I001".to_string(),
            "Ada Lovelace".to_string(),
            "Computer Science".to_string(),
        )));
        assert!(course.to_string().ends_with("instructor=Ada Lovelace}"));
    }
}
