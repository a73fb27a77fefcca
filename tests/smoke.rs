//! Integration smoke tests for `campus_records`

use campus_records::core::report::{GpaReport, ReportFormat};
use campus_records::core::sample;
use campus_records::core::services::{CourseCatalog, StudentDirectory};
use campus_records::get_version;

#[test]
fn version_is_not_empty() {
    assert!(!get_version().trim().is_empty());
}

#[test]
fn sample_data_renders_both_report_formats() {
    let mut catalog = CourseCatalog::new();
    let mut directory = StudentDirectory::new();
    sample::seed(&mut catalog, &mut directory).expect("sample data is valid");

    assert_eq!(catalog.len(), 5);
    assert_eq!(directory.len(), 2);

    let report = GpaReport::from_directory(&directory, 3);
    let text = report.render(ReportFormat::Text).unwrap();
    assert!(text.contains("Aditya Das (24BCE10335): GPA = 9.43"));
    assert!(text.contains("Arpit Kumar (24BCE11005): GPA = 8.50"));

    let markdown = report.render(ReportFormat::Markdown).unwrap();
    assert!(markdown.contains("| Aditya Das |"));
}
