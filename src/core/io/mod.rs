//! File adapters around the records core: student CSV import/export and data backups
//!
//! These perform blocking file I/O and are kept out of the in-memory domain model.

pub mod backup;
pub mod csv;

pub use backup::{backup_size, create_backup};
pub use csv::{export_students_csv, import_students_csv, parse_student_line, EXPORT_HEADER};
