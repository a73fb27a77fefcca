//! Interactive menu over an in-memory records session
//!
//! Reads answers line by line from any `BufRead` and writes prompts to any `Write`, so the
//! whole loop can be driven from a script or a test. End of input exits the menu.

use super::session::Session;
use campus_records::config::Config;
use campus_records::core::io::{backup_size, create_backup, export_students_csv};
use campus_records::core::models::{Course, CourseCode, Department, Grade, Semester, Student};
use campus_records::core::report::{GpaReport, ReportFormat};
use campus_records::core::services::Searchable;
use campus_records::core::RecordsError;
use campus_records::debug;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Number of students listed in the menu's top-students report
const TOP_STUDENTS: usize = 3;

/// Interactive menu state
pub struct Menu<'a, R, W> {
    input: R,
    output: W,
    session: &'a mut Session,
    config: &'a Config,
}

/// Run the menu on stdin/stdout
pub fn run(session: &mut Session, config: &Config) {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(stdin.lock(), stdout.lock(), session, config);
    if let Err(e) = menu.run() {
        eprintln!("✗ Menu terminated: {e}");
    }
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    /// Create a menu reading from `input` and writing to `output`
    pub fn new(input: R, output: W, session: &'a mut Session, config: &'a Config) -> Self {
        Self {
            input,
            output,
            session,
            config,
        }
    }

    /// Main loop; returns when the user exits or input ends
    ///
    /// # Errors
    /// Returns an error only when reading input or writing output fails
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "=== Campus Course & Records Manager ===")?;
        loop {
            writeln!(self.output, "\n=== MAIN MENU ===")?;
            for line in [
                "1. Manage Students",
                "2. Manage Courses",
                "3. Manage Enrollments",
                "4. Manage Grades",
                "5. Import/Export Data",
                "6. Backup Operations",
                "7. Generate Reports",
                "8. Exit",
            ] {
                writeln!(self.output, "{line}")?;
            }
            let Some(choice) = self.read_choice()? else {
                return Ok(());
            };
            match choice {
                1 => self.manage_students()?,
                2 => self.manage_courses()?,
                3 => self.manage_enrollments()?,
                4 => self.manage_grades()?,
                5 => self.import_export()?,
                6 => self.backup()?,
                7 => self.reports()?,
                8 => {
                    writeln!(self.output, "Exiting CCRM. Goodbye!")?;
                    return Ok(());
                }
                _ => writeln!(self.output, "Invalid option! Try again.")?,
            }
        }
    }

    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn read_int(&mut self, label: &str) -> io::Result<Option<i64>> {
        loop {
            let Some(answer) = self.prompt(label)? else {
                return Ok(None);
            };
            match answer.parse::<i64>() {
                Ok(n) => return Ok(Some(n)),
                Err(_) => writeln!(self.output, "Please enter a valid number!")?,
            }
        }
    }

    fn read_choice(&mut self) -> io::Result<Option<i64>> {
        self.read_int("Choose an option: ")
    }

    /// Show a submenu until its last entry ("Back") is picked; `None` means input ended
    fn submenu(&mut self, title: &str, entries: &[&str]) -> io::Result<Option<usize>> {
        writeln!(self.output, "\n=== {title} ===")?;
        for (idx, entry) in entries.iter().enumerate() {
            writeln!(self.output, "{}. {entry}", idx + 1)?;
        }
        loop {
            let Some(choice) = self.read_choice()? else {
                return Ok(None);
            };
            match usize::try_from(choice) {
                Ok(n) if (1..=entries.len()).contains(&n) => return Ok(Some(n)),
                _ => writeln!(self.output, "Invalid option!")?,
            }
        }
    }

    /// Print the outcome of an action that may fail with a user-facing error
    fn report<T>(&mut self, context: &str, result: Result<T, Box<dyn Error>>, ok: &str) -> io::Result<()> {
        match result {
            Ok(_) => writeln!(self.output, "{ok}"),
            Err(e) => writeln!(self.output, "Error {context}: {e}"),
        }
    }

    fn manage_students(&mut self) -> io::Result<()> {
        let entries = [
            "Add Student",
            "List All Students",
            "Search Students",
            "Update Student",
            "Back to Main Menu",
        ];
        loop {
            match self.submenu("STUDENT MANAGEMENT", &entries)? {
                Some(1) => {
                    let result = self.add_student();
                    self.report("adding student", result, "Student added successfully!")?;
                }
                Some(2) => self.list_students()?,
                Some(3) => self.search_students()?,
                Some(4) => self.update_student()?,
                _ => return Ok(()),
            }
        }
    }

    fn add_student(&mut self) -> Result<(), Box<dyn Error>> {
        writeln!(self.output, "\n--- Add New Student ---")?;
        let id = self.prompt("Student ID: ")?.unwrap_or_default();
        let reg_no = self.prompt("Registration Number: ")?.unwrap_or_default();
        let full_name = self.prompt("Full Name: ")?.unwrap_or_default();
        let email = self.prompt("Email: ")?.unwrap_or_default();
        let department = self.read_department()?;

        let student = Student::builder(id, reg_no)
            .full_name(full_name)
            .email(email)
            .department(department)
            .build()?;
        self.session.directory.add(student);
        Ok(())
    }

    fn read_department(&mut self) -> Result<Department, Box<dyn Error>> {
        let names: Vec<&str> = Department::ALL.iter().map(Department::code).collect();
        writeln!(self.output, "Available Departments: [{}]", names.join(", "))?;
        let answer = self.prompt("Department: ")?.unwrap_or_default();
        Ok(answer.parse::<Department>()?)
    }

    fn list_students(&mut self) -> io::Result<()> {
        let lines: Vec<String> = self
            .session
            .directory
            .find_all()
            .iter()
            .map(|s| s.display_info())
            .collect();
        if lines.is_empty() {
            return writeln!(self.output, "No students found.");
        }
        writeln!(self.output, "\n--- All Students ---")?;
        for line in lines {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    fn search_students(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- Search Students ---")?;
        let term = self
            .prompt("Enter search term (name or email): ")?
            .unwrap_or_default();
        let hits: Vec<String> = self
            .session
            .directory
            .search_by_name_or_email(&term)
            .iter()
            .map(ToString::to_string)
            .collect();
        if hits.is_empty() {
            return writeln!(self.output, "No matching students found.");
        }
        for hit in hits {
            writeln!(self.output, "{hit}")?;
        }
        Ok(())
    }

    fn update_student(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- Update Student ---")?;
        let reg_no = self.prompt("Registration Number: ")?.unwrap_or_default();
        if self.session.directory.find_by_reg_no(&reg_no).is_none() {
            return writeln!(self.output, "Student not found.");
        }
        let name = self
            .prompt("New Full Name (leave blank to keep current): ")?
            .unwrap_or_default();
        let email = self
            .prompt("New Email (leave blank to keep current): ")?
            .unwrap_or_default();

        if let Some(student) = self.session.directory.find_by_reg_no_mut(&reg_no) {
            if !name.is_empty() {
                student.set_full_name(name);
            }
            if !email.is_empty() {
                student.set_email(email);
            }
            debug!("Updated student {reg_no}");
        }
        writeln!(self.output, "Student updated (fields changed if provided).")
    }

    fn manage_courses(&mut self) -> io::Result<()> {
        let entries = ["Add Course", "List All Courses", "Back to Main Menu"];
        loop {
            match self.submenu("COURSE MANAGEMENT", &entries)? {
                Some(1) => {
                    let result = self.add_course();
                    self.report("adding course", result, "Course added successfully!")?;
                }
                Some(2) => self.list_courses()?,
                _ => return Ok(()),
            }
        }
    }

    fn add_course(&mut self) -> Result<(), Box<dyn Error>> {
        writeln!(self.output, "\n--- Add New Course ---")?;
        let prefix = self
            .prompt("Course Code Prefix (e.g., CS): ")?
            .unwrap_or_default();
        let number = self
            .read_int("Course Code Number (e.g., 101): ")?
            .ok_or("input ended")?;
        let title = self.prompt("Course Title: ")?.unwrap_or_default();
        let credits = self.read_int("Credits: ")?.ok_or("input ended")?;
        let department = self.read_department()?;

        let number = u32::try_from(number)
            .map_err(|_| RecordsError::validation(format!("Invalid course number: {number}")))?;
        let credits = i32::try_from(credits)
            .map_err(|_| RecordsError::validation(format!("Invalid credits: {credits}")))?;
        let course = Course::builder(CourseCode::new(&prefix, number)?)
            .title(title)
            .credits(credits)
            .department(department)
            .build()?;
        self.session.catalog.add_course(course);
        Ok(())
    }

    fn list_courses(&mut self) -> io::Result<()> {
        let mut courses: Vec<&Course> = self.session.catalog.find_all();
        courses.sort_by(|a, b| a.code().cmp(b.code()));
        let lines: Vec<String> = courses.iter().map(ToString::to_string).collect();
        if lines.is_empty() {
            return writeln!(self.output, "No courses found.");
        }
        writeln!(self.output, "\n--- All Courses ---")?;
        for line in lines {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    fn manage_enrollments(&mut self) -> io::Result<()> {
        let entries = [
            "Enroll Student in Course",
            "Unenroll Student from Course",
            "Back to Main Menu",
        ];
        loop {
            match self.submenu("ENROLLMENT MANAGEMENT", &entries)? {
                Some(1) => {
                    writeln!(self.output, "\n--- Enroll Student in Course ---")?;
                    let result = self.enroll();
                    self.report("enrolling student", result, "Enrollment successful!")?;
                }
                Some(2) => {
                    writeln!(self.output, "\n--- Unenroll Student from Course ---")?;
                    let result = self.unenroll();
                    self.report("unenrolling student", result, "Unenrollment successful!")?;
                }
                _ => return Ok(()),
            }
        }
    }

    /// Prompt for a registration number and course code, resolving the course
    fn read_student_and_course(&mut self) -> Result<(String, Course), Box<dyn Error>> {
        let reg_no = self
            .prompt("Student Registration Number: ")?
            .unwrap_or_default();
        let code = self
            .prompt("Course Code (e.g., CS101): ")?
            .unwrap_or_default();
        let course = self.session.catalog.find_by_code(&code).cloned();
        match (self.session.directory.find_by_reg_no(&reg_no), course) {
            (Some(_), Some(course)) => Ok((reg_no, course)),
            _ => Err("Student or course not found.".into()),
        }
    }

    fn enroll(&mut self) -> Result<(), Box<dyn Error>> {
        let (reg_no, course) = self.read_student_and_course()?;
        let semester = self
            .prompt("Semester (e.g., FALL2025): ")?
            .unwrap_or_default()
            .parse::<Semester>()?;
        let student = self
            .session
            .directory
            .find_by_reg_no_mut(&reg_no)
            .ok_or("Student or course not found.")?;
        student.enroll_in_course(&course, semester)?;
        Ok(())
    }

    fn unenroll(&mut self) -> Result<(), Box<dyn Error>> {
        let (reg_no, course) = self.read_student_and_course()?;
        if let Some(student) = self.session.directory.find_by_reg_no_mut(&reg_no) {
            student.unenroll_from_course(course.code());
        }
        Ok(())
    }

    fn manage_grades(&mut self) -> io::Result<()> {
        let entries = ["Record Grade", "Back to Main Menu"];
        while let Some(1) = self.submenu("GRADE MANAGEMENT", &entries)? {
            writeln!(self.output, "\n--- Record Grade for Student ---")?;
            let result = self.record_grade();
            self.report("recording grade", result, "Grade recorded successfully!")?;
        }
        Ok(())
    }

    fn record_grade(&mut self) -> Result<(), Box<dyn Error>> {
        let (reg_no, course) = self.read_student_and_course()?;
        let grade = self
            .prompt("Grade (e.g., S, A, B, C): ")?
            .unwrap_or_default()
            .parse::<Grade>()?;
        if let Some(student) = self.session.directory.find_by_reg_no_mut(&reg_no) {
            student.record_grade(course.code(), grade);
        }
        Ok(())
    }

    fn import_export(&mut self) -> io::Result<()> {
        let entries = [
            "Import Students from CSV",
            "Export Students to CSV",
            "Back to Main Menu",
        ];
        loop {
            match self.submenu("IMPORT/EXPORT DATA", &entries)? {
                Some(1) => {
                    writeln!(self.output, "\n--- Import Students from CSV ---")?;
                    let path = self.prompt("CSV file path: ")?.unwrap_or_default();
                    match self.session.import_students(Path::new(&path)) {
                        Ok(count) => writeln!(self.output, "Imported {count} students.")?,
                        Err(e) => writeln!(self.output, "Error importing students: {e}")?,
                    }
                }
                Some(2) => {
                    writeln!(self.output, "\n--- Export Students to CSV ---")?;
                    let path = self.prompt("CSV file path: ")?.unwrap_or_default();
                    let students = self.session.directory.find_all();
                    let count = students.len();
                    match export_students_csv(&students, &path) {
                        Ok(()) => writeln!(self.output, "Exported {count} students.")?,
                        Err(e) => writeln!(self.output, "Error exporting students: {e}")?,
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn backup(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n=== BACKUP OPERATIONS ===")?;
        let outcome = self
            .config
            .ensure_directories()
            .map_err(Into::into)
            .and_then(|()| create_backup(self.config))
            .and_then(|dir| backup_size(&dir).map(|size| (dir, size)));
        match outcome {
            Ok((dir, size)) => {
                let name = dir.file_name().unwrap_or_default().to_string_lossy();
                writeln!(self.output, "Backup created: {name}")?;
                writeln!(self.output, "Backup size: {size} bytes")
            }
            Err(e) => writeln!(self.output, "Backup failed: {e}"),
        }
    }

    fn reports(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n=== REPORT GENERATION ===")?;
        if self.session.directory.is_empty() {
            return writeln!(self.output, "No students found.");
        }
        match GpaReport::from_directory(&self.session.directory, TOP_STUDENTS).render(ReportFormat::Text) {
            Ok(text) => write!(self.output, "{text}"),
            Err(e) => writeln!(self.output, "Error generating report: {e}"),
        }
    }
}
