//! GPA report generation
//!
//! Reports are rendered through askama templates under `templates/` in plain text or
//! Markdown.

use crate::core::models::Student;
use crate::core::services::{Searchable, StudentDirectory};
use askama::Template;
use std::fmt;
use std::str::FromStr;

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Plain text, one student per line
    Text,
    /// Markdown tables
    Markdown,
}

impl ReportFormat {
    /// Get the file extension for this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Markdown => "md",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "txt" | "text" => Ok(Self::Text),
            "md" | "markdown" => Ok(Self::Markdown),
            _ => Err(format!("Unknown report format: {s}")),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Markdown => write!(f, "markdown"),
        }
    }
}

/// One student line in a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRow {
    /// 1-based position in the listing
    pub rank: usize,
    /// Full name
    pub name: String,
    /// Registration number
    pub reg_no: String,
    /// Department code, or "Unassigned"
    pub department: String,
    /// GPA with two decimals
    pub gpa: String,
}

/// Number of students whose GPA floors to a bucket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistributionRow {
    /// Bucket label such as "8.00-8.99"
    pub label: String,
    /// Students in the bucket
    pub count: usize,
}

/// Report data shared by every format
#[derive(Debug, Clone)]
pub struct GpaReport {
    /// Every student, GPA descending then registration number
    pub rows: Vec<StudentRow>,
    /// Best active students
    pub top: Vec<StudentRow>,
    /// Students per whole-number GPA bucket, lowest first
    pub distribution: Vec<DistributionRow>,
    /// Number of students in the directory
    pub total_students: usize,
    /// Mean GPA with two decimals
    pub average_gpa: String,
}

#[derive(Template)]
#[template(path = "gpa_report.txt")]
struct TextTemplate<'a> {
    rows: &'a [StudentRow],
    top: &'a [StudentRow],
    distribution: &'a [DistributionRow],
    total_students: usize,
    average_gpa: &'a str,
}

#[derive(Template)]
#[template(path = "gpa_report.md")]
struct MarkdownTemplate<'a> {
    rows: &'a [StudentRow],
    top: &'a [StudentRow],
    distribution: &'a [DistributionRow],
    total_students: usize,
    average_gpa: &'a str,
}

fn to_row(rank: usize, student: &Student) -> StudentRow {
    StudentRow {
        rank,
        name: student.full_name().to_string(),
        reg_no: student.reg_no().to_string(),
        department: student
            .department()
            .map_or_else(|| "Unassigned".to_string(), |d| d.code().to_string()),
        gpa: format!("{:.2}", student.gpa()),
    }
}

impl GpaReport {
    /// Collect report data from a directory, listing up to `top_count` top students
    #[must_use]
    pub fn from_directory(directory: &StudentDirectory, top_count: usize) -> Self {
        let mut students = directory.find_all();
        students.sort_by(|a, b| {
            b.gpa()
                .total_cmp(&a.gpa())
                .then_with(|| a.reg_no().cmp(b.reg_no()))
        });

        let rows = students
            .iter()
            .enumerate()
            .map(|(idx, s)| to_row(idx + 1, s))
            .collect();
        let top = directory
            .top_students(top_count)
            .into_iter()
            .enumerate()
            .map(|(idx, s)| to_row(idx + 1, s))
            .collect();
        let distribution = directory
            .gpa_distribution()
            .into_iter()
            .map(|(bucket, count)| DistributionRow {
                label: format!("{bucket}.00-{bucket}.99"),
                count,
            })
            .collect();

        let total_students = students.len();
        #[allow(clippy::cast_precision_loss)]
        let average = if total_students == 0 {
            0.0
        } else {
            students.iter().map(|s| s.gpa()).sum::<f64>() / total_students as f64
        };

        Self {
            rows,
            top,
            distribution,
            total_students,
            average_gpa: format!("{average:.2}"),
        }
    }

    /// Render the report in the requested format
    ///
    /// # Errors
    /// Returns an error if template rendering fails
    pub fn render(&self, format: ReportFormat) -> Result<String, askama::Error> {
        match format {
            ReportFormat::Text => TextTemplate {
                rows: &self.rows,
                top: &self.top,
                distribution: &self.distribution,
                total_students: self.total_students,
                average_gpa: &self.average_gpa,
            }
            .render(),
            ReportFormat::Markdown => MarkdownTemplate {
                rows: &self.rows,
                top: &self.top,
                distribution: &self.distribution,
                total_students: self.total_students,
                average_gpa: &self.average_gpa,
            }
            .render(),
        }
    }
}
