//! Course catalog service

use super::Searchable;
use crate::core::error::{RecordsError, Result};
use crate::core::models::{Course, CourseCode};
use crate::debug;
use std::collections::HashMap;

/// Courses keyed by canonical code (e.g., "CS0101")
#[derive(Debug, Clone, Default)]
pub struct CourseCatalog {
    courses: HashMap<String, Course>,
}

impl CourseCatalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a course under its canonical code, replacing any previous entry
    pub fn add_course(&mut self, course: Course) {
        let key = course.code().canonical();
        debug!("Adding course {key}");
        self.courses.insert(key, course);
    }

    /// Look up a course from loose input such as "cs101" or "CS0101"
    #[must_use]
    pub fn find_by_code(&self, code: &str) -> Option<&Course> {
        let key = CourseCode::normalize(code)?;
        self.courses.get(&key)
    }

    /// Mutable variant of [`find_by_code`](Self::find_by_code)
    pub fn find_by_code_mut(&mut self, code: &str) -> Option<&mut Course> {
        let key = CourseCode::normalize(code)?;
        self.courses.get_mut(&key)
    }

    /// Replace the course stored under a canonical key
    ///
    /// # Errors
    /// Returns [`RecordsError::NotFound`] if the key is absent
    pub fn update_course(&mut self, code: &str, course: Course) -> Result<()> {
        let slot = self
            .courses
            .get_mut(code)
            .ok_or_else(|| RecordsError::not_found("Course", code))?;
        debug!("Updating course {code}");
        *slot = course;
        Ok(())
    }

    /// Remove the course stored under a canonical key
    ///
    /// # Errors
    /// Returns [`RecordsError::NotFound`] if the key is absent
    pub fn delete_course(&mut self, code: &str) -> Result<Course> {
        debug!("Deleting course {code}");
        self.courses
            .remove(code)
            .ok_or_else(|| RecordsError::not_found("Course", code))
    }

    /// Number of courses
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

impl Searchable<Course> for CourseCatalog {
    fn find_all(&self) -> Vec<&Course> {
        self.courses.values().collect()
    }

    fn find_by_id(&self, id: &str) -> Option<&Course> {
        self.courses.get(id)
    }
}
