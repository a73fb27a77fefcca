//! Student model: enrollments, grading and GPA

use super::{Course, CourseCode, Department, Enrollment, Grade, Semester};
use crate::core::error::{RecordsError, Result};
use crate::debug;
use std::collections::HashMap;
use std::fmt;

/// Maximum ungraded credits a student may carry in one semester
pub const MAX_SEMESTER_CREDITS: i32 = 18;

/// Identity shared by every person on campus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    /// Unique identifier
    pub id: String,
    /// Full name
    pub full_name: String,
    /// Contact email
    pub email: String,
}

/// Fields for constructing a [`Student`]; only `id` and `reg_no` are required
#[derive(Debug, Clone, Default)]
pub struct StudentBuilder {
    /// Directory key
    pub id: String,
    /// Registration number
    pub reg_no: String,
    /// Full name
    pub full_name: String,
    /// Contact email
    pub email: String,
    /// Home department
    pub department: Option<Department>,
}

impl StudentBuilder {
    /// Start a builder with the two required identifiers
    #[must_use]
    pub fn new(id: impl Into<String>, reg_no: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            reg_no: reg_no.into(),
            ..Self::default()
        }
    }

    /// Set the full name
    #[must_use]
    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    /// Set the email
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Set the department
    #[must_use]
    pub fn department(mut self, department: Department) -> Self {
        self.department = Some(department);
        self
    }

    /// Validate and construct the student
    ///
    /// # Errors
    /// Returns a validation error if the id or registration number is blank
    pub fn build(self) -> Result<Student> {
        if self.id.trim().is_empty() {
            return Err(RecordsError::validation("Student id is required"));
        }
        if self.reg_no.trim().is_empty() {
            return Err(RecordsError::validation("Registration number is required"));
        }

        Ok(Student {
            person: Person {
                id: self.id,
                full_name: self.full_name,
                email: self.email,
            },
            reg_no: self.reg_no,
            department: self.department,
            active: true,
            enrollments: HashMap::new(),
        })
    }
}

/// A student and the enrollments they own
#[derive(Debug, Clone)]
pub struct Student {
    person: Person,
    reg_no: String,
    department: Option<Department>,
    active: bool,
    enrollments: HashMap<CourseCode, Enrollment>,
}

impl Student {
    /// Start building a student
    #[must_use]
    pub fn builder(id: impl Into<String>, reg_no: impl Into<String>) -> StudentBuilder {
        StudentBuilder::new(id, reg_no)
    }

    /// Directory key
    #[must_use]
    pub fn id(&self) -> &str {
        &self.person.id
    }

    /// Registration number
    #[must_use]
    pub fn reg_no(&self) -> &str {
        &self.reg_no
    }

    /// Full name
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.person.full_name
    }

    /// Contact email
    #[must_use]
    pub fn email(&self) -> &str {
        &self.person.email
    }

    /// Person fields
    #[must_use]
    pub const fn person(&self) -> &Person {
        &self.person
    }

    /// Home department, if any
    #[must_use]
    pub const fn department(&self) -> Option<Department> {
        self.department
    }

    /// Whether the student is active
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Change the full name
    pub fn set_full_name(&mut self, full_name: impl Into<String>) {
        self.person.full_name = full_name.into();
    }

    /// Change the email
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.person.email = email.into();
    }

    /// Mark the student active or inactive
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// All enrollments keyed by course code
    #[must_use]
    pub const fn enrollments(&self) -> &HashMap<CourseCode, Enrollment> {
        &self.enrollments
    }

    /// Enrollment for a course, if the student holds one
    #[must_use]
    pub fn enrollment(&self, code: &CourseCode) -> Option<&Enrollment> {
        self.enrollments.get(code)
    }

    /// Enroll in a course for a semester
    ///
    /// The check order is fixed: a duplicate is reported before the credit limit.
    ///
    /// # Errors
    /// - [`RecordsError::DuplicateEnrollment`] if the student already holds an enrollment for
    ///   this course, whatever its semester
    /// - [`RecordsError::CreditLimitExceeded`] if the semester's ungraded credits plus this
    ///   course's credits would exceed [`MAX_SEMESTER_CREDITS`]
    pub fn enroll_in_course(&mut self, course: &Course, semester: Semester) -> Result<()> {
        if self.enrollments.contains_key(course.code()) {
            return Err(RecordsError::DuplicateEnrollment {
                reg_no: self.reg_no.clone(),
                course: course.code().canonical(),
            });
        }

        let requested = self.current_semester_credits(&semester) + course.credits();
        if requested > MAX_SEMESTER_CREDITS {
            return Err(RecordsError::CreditLimitExceeded {
                semester: semester.to_string(),
                requested,
                limit: MAX_SEMESTER_CREDITS,
            });
        }

        debug!(
            "Enrolling {} in {} for {semester}",
            self.reg_no,
            course.code()
        );
        let enrollment = Enrollment::new(self.person.id.clone(), course.clone(), semester);
        self.enrollments.insert(course.code().clone(), enrollment);
        Ok(())
    }

    /// Drop the enrollment for a course; does nothing if there is none
    pub fn unenroll_from_course(&mut self, code: &CourseCode) -> Option<Enrollment> {
        let removed = self.enrollments.remove(code);
        if removed.is_some() {
            debug!("Unenrolled {} from {code}", self.reg_no);
        }
        removed
    }

    /// Record or overwrite the grade for an enrolled course
    ///
    /// Silently ignored when the student is not enrolled in the course. Returns whether a
    /// grade was stored.
    pub fn record_grade(&mut self, code: &CourseCode, grade: Grade) -> bool {
        self.enrollments.get_mut(code).is_some_and(|enrollment| {
            enrollment.record_grade(grade);
            debug!("Recorded grade {grade} for {} in {code}", self.reg_no);
            true
        })
    }

    /// Credit-weighted grade point average over graded enrollments; 0.0 when none are graded
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn gpa(&self) -> f64 {
        let (points, credits) = self
            .enrollments
            .values()
            .filter_map(|e| e.grade().map(|g| (g, e.course().credits())))
            .fold((0_i64, 0_i64), |(points, credits), (grade, course_credits)| {
                (
                    points + i64::from(grade.points()) * i64::from(course_credits),
                    credits + i64::from(course_credits),
                )
            });

        if credits > 0 {
            points as f64 / credits as f64
        } else {
            0.0
        }
    }

    /// Credits of ungraded enrollments in the given semester
    #[must_use]
    pub fn current_semester_credits(&self, semester: &Semester) -> i32 {
        self.enrollments
            .values()
            .filter(|e| e.semester() == semester && !e.is_graded())
            .map(|e| e.course().credits())
            .sum()
    }

    /// One-line summary: name, registration number, department and GPA
    #[must_use]
    pub fn display_info(&self) -> String {
        format!(
            "Student: {} ({}) - {} - GPA: {:.2}",
            self.person.full_name,
            self.reg_no,
            self.department_label(),
            self.gpa()
        )
    }

    fn department_label(&self) -> &'static str {
        self.department.as_ref().map_or("Unassigned", Department::code)
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Student{{id='{}', regNo='{}', name='{}', department={}, GPA={:.2}}}",
            self.person.id,
            self.reg_no,
            self.person.full_name,
            self.department_label(),
            self.gpa()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(prefix: &str, number: u32, credits: i32) -> Course {
        Course::builder(CourseCode::new(prefix, number).unwrap())
            .title(format!("{prefix} {number}"))
            .credits(credits)
            .build()
            .unwrap()
    }

    fn student() -> Student {
        Student::builder("CS001", "24BCE10335")
            .full_name("Aditya Das")
            .email("aditya@example.edu")
            .department(Department::ComputerScience)
            .build()
            .unwrap()
    }

    fn fall() -> Semester {
        Semester::new("FALL", 2025)
    }

    #[test]
    fn test_builder_requires_identifiers() {
        assert!(Student::builder("CS001", "").build().is_err());
        assert!(Student::builder("CS001", "   ").build().is_err());
        assert!(Student::builder("", "24BCE10335").build().is_err());

        let s = Student::builder("CS001", "24BCE10335").build().unwrap();
        assert!(s.is_active());
        assert!(s.department().is_none());
        assert!(s.enrollments().is_empty());
    }

    #[test]
    fn test_duplicate_enrollment_any_semester() {
        let mut s = student();
        let cs101 = course("CS", 101, 3);
        s.enroll_in_course(&cs101, fall()).unwrap();

        let err = s
            .enroll_in_course(&cs101, Semester::new("SPRING", 2026))
            .unwrap_err();
        assert!(matches!(err, RecordsError::DuplicateEnrollment { .. }));
        assert_eq!(s.enrollments().len(), 1);
        assert_eq!(
            s.enrollment(cs101.code()).unwrap().semester(),
            &fall()
        );
    }

    #[test]
    fn test_credit_limit() {
        let mut s = student();
        for (number, credits) in [(1, 6), (2, 6), (3, 4)] {
            s.enroll_in_course(&course("CS", number, credits), fall()).unwrap();
        }
        assert_eq!(s.current_semester_credits(&fall()), 16);

        let err = s.enroll_in_course(&course("EE", 1, 3), fall()).unwrap_err();
        assert_eq!(
            err,
            RecordsError::CreditLimitExceeded {
                semester: "FALL 2025".to_string(),
                requested: 19,
                limit: MAX_SEMESTER_CREDITS,
            }
        );
        assert_eq!(s.enrollments().len(), 3);

        s.enroll_in_course(&course("EE", 2, 2), fall()).unwrap();
        assert_eq!(s.current_semester_credits(&fall()), 18);
    }

    #[test]
    fn test_credit_limit_is_per_semester_and_ungraded_only() {
        let mut s = student();
        let big = [course("CS", 1, 6), course("CS", 2, 6), course("CS", 3, 6)];
        for c in &big {
            s.enroll_in_course(c, fall()).unwrap();
        }
        assert!(s.enroll_in_course(&course("CS", 4, 1), fall()).is_err());

        // A different term has its own budget
        s.enroll_in_course(&course("CS", 5, 6), Semester::new("SPRING", 2026))
            .unwrap();

        // Graded enrollments no longer count against the term
        s.record_grade(big[0].code(), Grade::A);
        assert_eq!(s.current_semester_credits(&fall()), 12);
        s.enroll_in_course(&course("CS", 4, 6), fall()).unwrap();
    }

    #[test]
    fn test_gpa_weighted_by_credits() {
        let mut s = student();
        let c3 = course("CS", 101, 3);
        let c4 = course("EE", 101, 4);
        s.enroll_in_course(&c3, fall()).unwrap();
        s.enroll_in_course(&c4, fall()).unwrap();
        assert!(s.gpa().abs() < f64::EPSILON);

        s.record_grade(c3.code(), Grade::S);
        s.record_grade(c4.code(), Grade::B);

        assert!((s.gpa() - 62.0 / 7.0).abs() < 1e-9);
        assert_eq!(format!("{:.2}", s.gpa()), "8.86");
        assert!(s.display_info().ends_with("GPA: 8.86"));
    }

    #[test]
    fn test_gpa_ignores_ungraded() {
        let mut s = student();
        let graded = course("CS", 101, 3);
        s.enroll_in_course(&graded, fall()).unwrap();
        s.enroll_in_course(&course("CS", 102, 4), fall()).unwrap();
        s.record_grade(graded.code(), Grade::A);
        assert!((s.gpa() - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_record_grade_without_enrollment_is_noop() {
        let mut s = student();
        let c = course("CS", 101, 3);
        s.enroll_in_course(&c, fall()).unwrap();
        s.record_grade(c.code(), Grade::A);
        let before = s.gpa();

        assert!(!s.record_grade(&CourseCode::new("ME", 101).unwrap(), Grade::F));
        assert!((s.gpa() - before).abs() < f64::EPSILON);
        assert_eq!(s.enrollments().len(), 1);
    }

    #[test]
    fn test_regrade_overwrites() {
        let mut s = student();
        let c = course("CS", 101, 3);
        s.enroll_in_course(&c, fall()).unwrap();
        s.record_grade(c.code(), Grade::F);
        s.record_grade(c.code(), Grade::S);
        assert!((s.gpa() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_unenroll_then_reenroll() {
        let mut s = student();
        let c = course("CS", 101, 3);
        s.enroll_in_course(&c, fall()).unwrap();
        s.record_grade(c.code(), Grade::B);

        assert!(s.unenroll_from_course(c.code()).is_some());
        assert!(s.enrollments().is_empty());
        assert!(s.unenroll_from_course(c.code()).is_none());

        s.enroll_in_course(&c, fall()).unwrap();
        assert_eq!(s.enrollment(c.code()).unwrap().grade(), None);
    }

    #[test]
    fn test_display_info() {
        let s = student();
        assert_eq!(
            s.display_info(),
            "Student: Aditya Das (24BCE10335) - COMPUTER_SCIENCE - GPA: 0.00"
        );

        let unassigned = Student::builder("X1", "R1").full_name("No Dept").build().unwrap();
        assert!(unassigned.display_info().contains("Unassigned"));
        assert!(unassigned.to_string().starts_with("Student{id='X1'"));
    }
}
