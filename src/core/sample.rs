//! Built-in sample records used to seed an interactive session

use crate::core::error::Result;
use crate::core::models::{Course, CourseCode, Department, Grade, Semester, Student};
use crate::core::services::{CourseCatalog, StudentDirectory};

/// Register the introductory courses and two graded students
///
/// # Errors
/// Returns an error if any sample entity fails validation or enrollment
pub fn seed(catalog: &mut CourseCatalog, directory: &mut StudentDirectory) -> Result<()> {
    let courses = [
        ("CS", "Introduction to Programming", 3, Department::ComputerScience),
        ("EE", "Circuit Analysis", 4, Department::ElectricalEngineering),
        ("ME", "Engineering Mechanics", 4, Department::MechanicalEngineering),
        ("CH", "Chemical Process Principles", 3, Department::ChemicalEngineering),
        ("BT", "Introduction to Biotechnology", 3, Department::BioTechnology),
    ];
    for (prefix, title, credits, department) in courses {
        let course = Course::builder(CourseCode::new(prefix, 101)?)
            .title(title)
            .credits(credits)
            .department(department)
            .build()?;
        catalog.add_course(course);
    }

    let fall = Semester::new("FALL", 2025);
    let students = [
        (
            "CS001",
            "24BCE10335",
            "Aditya Das",
            "aditya.24bce10335@vitbhopal.ac.in",
            Department::ComputerScience,
            [("CS", Grade::S), ("EE", Grade::A)],
        ),
        (
            "EE001",
            "24BCE11005",
            "Arpit Kumar",
            "arpit.24bce11005@vitbhopal.ac.in",
            Department::ElectricalEngineering,
            [("EE", Grade::A), ("ME", Grade::B)],
        ),
    ];

    for (id, reg_no, name, email, department, grades) in students {
        let mut student = Student::builder(id, reg_no)
            .full_name(name)
            .email(email)
            .department(department)
            .build()?;
        for (prefix, grade) in grades {
            let code = CourseCode::new(prefix, 101)?;
            if let Some(course) = catalog.find_by_code(&code.canonical()) {
                student.enroll_in_course(course, fall.clone())?;
                student.record_grade(&code, grade);
            }
        }
        directory.add(student);
    }

    Ok(())
}
