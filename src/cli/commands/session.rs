//! In-memory records session shared by the CLI commands

use campus_records::core::io::import_students_csv;
use campus_records::core::sample;
use campus_records::core::services::{CourseCatalog, StudentDirectory};
use campus_records::{info, warn};
use std::error::Error;
use std::path::Path;

/// The catalog and directory a command works on
#[derive(Debug, Default)]
pub struct Session {
    pub catalog: CourseCatalog,
    pub directory: StudentDirectory,
}

impl Session {
    /// Create a session, optionally seeded with the built-in sample records
    pub fn new(with_sample_data: bool) -> Self {
        let mut session = Self::default();
        if with_sample_data {
            if let Err(e) = sample::seed(&mut session.catalog, &mut session.directory) {
                warn!("Error initializing sample data: {e}");
            }
        }
        session
    }

    /// Import students from a CSV file into the directory; returns how many were added
    pub fn import_students(&mut self, path: &Path) -> Result<usize, Box<dyn Error>> {
        let students = import_students_csv(path)?;
        let count = students.len();
        for student in students {
            self.directory.add(student);
        }
        info!("Imported {count} students from {}", path.display());
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_seeding() {
        assert_eq!(Session::new(true).directory.len(), 2);
        assert!(Session::new(false).catalog.is_empty());
    }
}
