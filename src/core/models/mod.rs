//! Data models for campus records

pub mod course;
pub mod department;
pub mod enrollment;
pub mod grade;
pub mod semester;
pub mod student;

pub use course::{Course, CourseBuilder, CourseCode, Instructor};
pub use department::Department;
pub use enrollment::Enrollment;
pub use grade::Grade;
pub use semester::Semester;
pub use student::{Person, Student, StudentBuilder, MAX_SEMESTER_CREDITS};
