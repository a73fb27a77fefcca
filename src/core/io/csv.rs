//! Student CSV import and export
//!
//! Import rows are `id,regNo,fullName,email[,department]`; the first line is a header.

use crate::core::models::{Department, Student};
use crate::core::error::RecordsError;
use crate::warn;
use std::error::Error;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Header line written by [`export_students_csv`]
pub const EXPORT_HEADER: &str = "ID,RegNo,FullName,Email,Department,GPA";

/// Minimum number of fields an import row needs
const MIN_FIELDS: usize = 4;

/// Parse one import row into a student
///
/// An empty or missing department yields a student without one.
///
/// # Errors
/// Returns an error if the row has fewer than four fields, names an unknown department,
/// or fails student validation (blank id or registration number)
pub fn parse_student_line(line: &str) -> Result<Student, RecordsError> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() < MIN_FIELDS {
        return Err(RecordsError::validation(format!(
            "expected at least {MIN_FIELDS} fields, found {}",
            fields.len()
        )));
    }

    let mut builder = Student::builder(fields[0], fields[1])
        .full_name(fields[2])
        .email(fields[3]);
    if let Some(dept) = fields.get(4).filter(|d| !d.is_empty()) {
        builder = builder.department(dept.parse::<Department>()?);
    }
    builder.build()
}

/// Import students from a CSV file, skipping the header line
///
/// Blank lines are ignored and malformed rows are dropped with a warning.
///
/// # Errors
/// Returns an error if the file cannot be read
pub fn import_students_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Student>, Box<dyn Error>> {
    let content = fs::read_to_string(path.as_ref())?;

    let students = content
        .lines()
        .enumerate()
        .skip(1)
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(idx, line)| match parse_student_line(line) {
            Ok(student) => Some(student),
            Err(e) => {
                warn!(
                    "Skipping line {} of {}: {e}",
                    idx + 1,
                    path.as_ref().display()
                );
                None
            }
        })
        .collect();

    Ok(students)
}

/// Export students as CSV, creating or truncating the file
///
/// # Errors
/// Returns an error if the file cannot be created or written
pub fn export_students_csv<P: AsRef<Path>>(
    students: &[&Student],
    path: P,
) -> Result<(), Box<dyn Error>> {
    let mut writer = BufWriter::new(File::create(path)?);

    writeln!(writer, "{EXPORT_HEADER}")?;
    for student in students {
        writeln!(
            writer,
            "{},{},{},{},{},{:.2}",
            student.id(),
            student.reg_no(),
            student.full_name(),
            student.email(),
            student.department().map_or("", |d| d.code()),
            student.gpa()
        )?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_row() {
        let s = parse_student_line("CS001, 24BCE10335, Aditya Das, aditya@uni.edu, COMPUTER_SCIENCE")
            .unwrap();
        assert_eq!(s.id(), "CS001");
        assert_eq!(s.reg_no(), "24BCE10335");
        assert_eq!(s.full_name(), "Aditya Das");
        assert_eq!(s.email(), "aditya@uni.edu");
        assert_eq!(s.department(), Some(Department::ComputerScience));
    }

    #[test]
    fn test_parse_without_department() {
        let s = parse_student_line("EE001,R2,Arpit Kumar,arpit@uni.edu").unwrap();
        assert!(s.department().is_none());
        let s = parse_student_line("EE001,R2,Arpit Kumar,arpit@uni.edu,").unwrap();
        assert!(s.department().is_none());
    }

    #[test]
    fn test_parse_rejects_bad_rows() {
        assert!(parse_student_line("EE001,R2,Arpit Kumar").is_err());
        assert!(matches!(
            parse_student_line("EE001,R2,Arpit,a@b.c,ASTROLOGY"),
            Err(RecordsError::UnknownDepartment(_))
        ));
        assert!(matches!(
            parse_student_line("EE001,,Arpit,a@b.c"),
            Err(RecordsError::Validation(_))
        ));
    }
}
