//! Student directory service

use super::Searchable;
use crate::core::error::{RecordsError, Result};
use crate::core::models::{Course, Semester, Student};
use crate::debug;
use std::collections::{BTreeMap, HashMap};

/// Students keyed by id
#[derive(Debug, Clone, Default)]
pub struct StudentDirectory {
    students: HashMap<String, Student>,
}

impl StudentDirectory {
    /// Create an empty directory
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a student, replacing any student stored under the same id
    pub fn add(&mut self, student: Student) {
        debug!("Adding student {} ({})", student.id(), student.reg_no());
        self.students.insert(student.id().to_string(), student);
    }

    /// Replace an existing student
    ///
    /// # Errors
    /// Returns [`RecordsError::NotFound`] if no student has this id
    pub fn update(&mut self, student: Student) -> Result<()> {
        let slot = self
            .students
            .get_mut(student.id())
            .ok_or_else(|| RecordsError::not_found("Student", student.id()))?;
        debug!("Updating student {}", student.id());
        *slot = student;
        Ok(())
    }

    /// Remove a student by id
    ///
    /// # Errors
    /// Returns [`RecordsError::NotFound`] if no student has this id
    pub fn delete(&mut self, id: &str) -> Result<Student> {
        debug!("Deleting student {id}");
        self.students
            .remove(id)
            .ok_or_else(|| RecordsError::not_found("Student", id))
    }

    /// Find a student by registration number (linear scan)
    #[must_use]
    pub fn find_by_reg_no(&self, reg_no: &str) -> Option<&Student> {
        self.students.values().find(|s| s.reg_no() == reg_no)
    }

    /// Mutable variant of [`find_by_reg_no`](Self::find_by_reg_no)
    pub fn find_by_reg_no_mut(&mut self, reg_no: &str) -> Option<&mut Student> {
        self.students.values_mut().find(|s| s.reg_no() == reg_no)
    }

    /// Mutable lookup by id
    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Student> {
        self.students.get_mut(id)
    }

    /// Case-insensitive substring match on full name or email
    #[must_use]
    pub fn search_by_name_or_email(&self, term: &str) -> Vec<&Student> {
        let term = term.to_lowercase();
        self.search(|s| {
            s.full_name().to_lowercase().contains(&term) || s.email().to_lowercase().contains(&term)
        })
    }

    /// Enroll the student with this id in a course
    ///
    /// Returns `Ok(false)` without changing anything when the id is unknown.
    ///
    /// # Errors
    /// Propagates the student's enrollment errors
    pub fn enroll_student(&mut self, id: &str, course: &Course, semester: Semester) -> Result<bool> {
        match self.students.get_mut(id) {
            Some(student) => student.enroll_in_course(course, semester).map(|()| true),
            None => Ok(false),
        }
    }

    /// Active students with the highest GPA, best first
    #[must_use]
    pub fn top_students(&self, count: usize) -> Vec<&Student> {
        let mut active: Vec<&Student> = self.students.values().filter(|s| s.is_active()).collect();
        active.sort_by(|a, b| b.gpa().total_cmp(&a.gpa()).then_with(|| a.reg_no().cmp(b.reg_no())));
        active.truncate(count);
        active
    }

    /// Number of students per whole-number GPA bucket (floor of the GPA)
    #[must_use]
    pub fn gpa_distribution(&self) -> BTreeMap<u32, usize> {
        let mut buckets = BTreeMap::new();
        for student in self.students.values() {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let bucket = student.gpa().floor() as u32;
            *buckets.entry(bucket).or_insert(0) += 1;
        }
        buckets
    }

    /// Number of students
    #[must_use]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Whether the directory is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

impl Searchable<Student> for StudentDirectory {
    fn find_all(&self) -> Vec<&Student> {
        self.students.values().collect()
    }

    fn find_by_id(&self, id: &str) -> Option<&Student> {
        self.students.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{CourseCode, Department, Grade};

    fn student(id: &str, reg_no: &str, name: &str, email: &str) -> Student {
        Student::builder(id, reg_no)
            .full_name(name)
            .email(email)
            .department(Department::ComputerScience)
            .build()
            .unwrap()
    }

    fn course(prefix: &str, credits: i32) -> Course {
        Course::builder(CourseCode::new(prefix, 101).unwrap())
            .title("Intro")
            .credits(credits)
            .build()
            .unwrap()
    }

    fn directory() -> StudentDirectory {
        let mut dir = StudentDirectory::new();
        dir.add(student("CS001", "R100", "Aditya Das", "aditya@uni.edu"));
        dir.add(student("EE001", "R200", "Arpit Kumar", "arpit@uni.edu"));
        dir.add(student("ME001", "R300", "Meera Iyer", "meera@college.org"));
        dir
    }

    #[test]
    fn test_add_overwrites_same_id() {
        let mut dir = directory();
        dir.add(student("CS001", "R999", "Replaced", "r@uni.edu"));
        assert_eq!(dir.len(), 3);
        assert_eq!(dir.find_by_id("CS001").unwrap().reg_no(), "R999");
        assert!(dir.find_by_reg_no("R100").is_none());
    }

    #[test]
    fn test_find_by_reg_no() {
        let dir = directory();
        for (reg_no, id) in [("R100", "CS001"), ("R200", "EE001"), ("R300", "ME001")] {
            assert_eq!(dir.find_by_reg_no(reg_no).unwrap().id(), id);
        }
        assert!(dir.find_by_reg_no("R404").is_none());
    }

    #[test]
    fn test_search_case_insensitive() {
        let dir = directory();
        let hits = dir.search_by_name_or_email("ARPIT");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id(), "EE001");

        assert_eq!(dir.search_by_name_or_email("uni.edu").len(), 2);
        assert!(dir.search_by_name_or_email("nobody").is_empty());
        assert_eq!(dir.search(|s| s.id().starts_with('M')).len(), 1);
    }

    #[test]
    fn test_update_and_delete_missing() {
        let mut dir = directory();
        let ghost = student("XX001", "R000", "Ghost", "g@uni.edu");
        assert!(matches!(
            dir.update(ghost),
            Err(RecordsError::NotFound { entity: "Student", .. })
        ));
        assert!(dir.delete("XX001").is_err());

        let mut renamed = dir.find_by_id("EE001").unwrap().clone();
        renamed.set_full_name("Arpit K.");
        dir.update(renamed).unwrap();
        assert_eq!(dir.find_by_id("EE001").unwrap().full_name(), "Arpit K.");

        dir.delete("EE001").unwrap();
        assert_eq!(dir.find_all().len(), 2);
    }

    #[test]
    fn test_enroll_student() {
        let mut dir = directory();
        let cs = course("CS", 3);
        let fall = Semester::new("FALL", 2025);

        assert!(!dir.enroll_student("NOPE", &cs, fall.clone()).unwrap());
        assert!(dir.enroll_student("CS001", &cs, fall.clone()).unwrap());
        assert!(matches!(
            dir.enroll_student("CS001", &cs, fall),
            Err(RecordsError::DuplicateEnrollment { .. })
        ));
    }

    #[test]
    fn test_top_students_and_distribution() {
        let mut dir = directory();
        let fall = Semester::new("FALL", 2025);
        let cs = course("CS", 3);
        for (id, grade) in [("CS001", Grade::S), ("EE001", Grade::B), ("ME001", Grade::A)] {
            dir.enroll_student(id, &cs, fall.clone()).unwrap();
            dir.find_by_id_mut(id).unwrap().record_grade(cs.code(), grade);
        }
        dir.find_by_id_mut("ME001").unwrap().set_active(false);

        let top: Vec<&str> = dir.top_students(5).iter().map(|s| s.id()).collect();
        assert_eq!(top, vec!["CS001", "EE001"]);
        assert_eq!(dir.top_students(1).len(), 1);

        let dist = dir.gpa_distribution();
        assert_eq!(dist.get(&10), Some(&1));
        assert_eq!(dist.get(&9), Some(&1));
        assert_eq!(dist.get(&8), Some(&1));
    }
}
