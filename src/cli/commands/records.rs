//! Import, export, backup and report command handlers

use super::session::Session;
use campus_records::config::Config;
use campus_records::core::io::{backup_size, create_backup, export_students_csv};
use campus_records::core::report::{GpaReport, ReportFormat};
use campus_records::core::services::Searchable;
use campus_records::{error, info, verbose};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Import students from `input` and list them; optionally export the result
pub fn run_import(input: &Path, export: Option<&Path>) {
    let mut session = Session::new(false);
    match session.import_students(input) {
        Ok(count) => println!("✓ Imported {count} students from {}", input.display()),
        Err(e) => {
            error!("Import failed for {}: {e}", input.display());
            eprintln!("✗ Failed to import {}: {e}", input.display());
            return;
        }
    }

    for student in session.directory.find_all() {
        println!("{}", student.display_info());
    }

    if let Some(path) = export {
        run_export(&session, path);
    }
}

/// Export every student in the session to `path`
pub fn run_export(session: &Session, path: &Path) {
    let students = session.directory.find_all();
    match export_students_csv(&students, path) {
        Ok(()) => {
            println!("✓ Exported {} students to {}", students.len(), path.display());
            info!("Exported students to {}", path.display());
        }
        Err(e) => {
            error!("Export failed for {}: {e}", path.display());
            eprintln!("✗ Failed to export to {}: {e}", path.display());
        }
    }
}

/// Back up the configured data directory and report the backup size
pub fn run_backup(config: &Config) {
    if let Err(e) = config.ensure_directories() {
        eprintln!("✗ Failed to create data directories: {e}");
        return;
    }

    match create_backup(config) {
        Ok(dir) => {
            let name = dir
                .file_name()
                .map_or_else(|| dir.display().to_string(), |n| n.to_string_lossy().to_string());
            println!("✓ Backup created: {name}");
            match backup_size(&dir) {
                Ok(size) => println!("Backup size: {size} bytes"),
                Err(e) => eprintln!("✗ Failed to measure backup: {e}"),
            }
        }
        Err(e) => {
            error!("Backup failed: {e}");
            eprintln!("✗ Backup failed: {e}");
        }
    }
}

/// Render a GPA report for the session, to stdout or a file
pub fn run_report(
    session: &Session,
    format_str: &str,
    output: Option<&Path>,
    top: usize,
    config: &Config,
) {
    if let Err(err) = generate_report(session, format_str, output, top, config) {
        error!("Report generation failed: {err}");
        eprintln!("{err}");
    }
}

fn generate_report(
    session: &Session,
    format_str: &str,
    output: Option<&Path>,
    top: usize,
    config: &Config,
) -> Result<(), String> {
    let format = ReportFormat::from_str(format_str).map_err(|e| format!("✗ {e}"))?;
    let content = GpaReport::from_directory(&session.directory, top)
        .render(format)
        .map_err(|e| format!("✗ Failed to render report: {e}"))?;

    let Some(path) = resolve_output(output, format, config) else {
        print!("{content}");
        return Ok(());
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("✗ Failed to create {}: {e}", parent.display()))?;
    }
    std::fs::write(&path, content)
        .map_err(|e| format!("✗ Failed to write report to {}: {e}", path.display()))?;

    println!("✓ Report generated: {}", path.display());
    verbose!("Report format: {format}");
    Ok(())
}

/// Explicit output path, or `<reports_dir>/gpa_report.<ext>` when the reports dir is set
fn resolve_output(output: Option<&Path>, format: ReportFormat, config: &Config) -> Option<PathBuf> {
    output.map(Path::to_path_buf).or_else(|| {
        (!config.paths.reports_dir.is_empty()).then(|| {
            PathBuf::from(&config.paths.reports_dir).join(format!("gpa_report.{}", format.extension()))
        })
    })
}
