//! Integration tests for data directory backups

use campus_records::config::Config;
use campus_records::core::io::{backup_size, create_backup};
use std::fs;
use tempfile::TempDir;

fn config_for(root: &TempDir) -> Config {
    let mut config = Config::from_defaults();
    config.paths.data_dir = root.path().join("data").to_string_lossy().to_string();
    config.paths.backup_dir = root.path().join("backups").to_string_lossy().to_string();
    config
}

#[test]
fn backup_copies_regular_files_into_timestamped_dir() {
    let root = TempDir::new().unwrap();
    let config = config_for(&root);
    let data = root.path().join("data");
    fs::create_dir_all(data.join("nested")).unwrap();
    fs::write(data.join("students.csv"), "id,regNo\n").unwrap();
    fs::write(data.join("courses.csv"), "code\n").unwrap();
    fs::write(data.join("nested/skipped.txt"), "x").unwrap();

    let target = create_backup(&config).expect("backup failed");

    assert!(target.starts_with(root.path().join("backups")));
    let name = target.file_name().unwrap().to_string_lossy().to_string();
    assert_eq!(name.len(), "20251016_142530".len());
    assert_eq!(name.as_bytes()[8], b'_');

    assert_eq!(
        fs::read_to_string(target.join("students.csv")).unwrap(),
        "id,regNo\n"
    );
    assert!(target.join("courses.csv").is_file());
    assert!(!target.join("nested").exists());
}

#[test]
fn backup_fails_without_data_dir() {
    let root = TempDir::new().unwrap();
    let config = config_for(&root);
    assert!(create_backup(&config).is_err());
}

#[test]
fn backup_size_is_recursive() {
    let root = TempDir::new().unwrap();
    fs::create_dir_all(root.path().join("a/b")).unwrap();
    fs::write(root.path().join("top.bin"), [0_u8; 10]).unwrap();
    fs::write(root.path().join("a/mid.bin"), [0_u8; 20]).unwrap();
    fs::write(root.path().join("a/b/deep.bin"), [0_u8; 5]).unwrap();

    assert_eq!(backup_size(root.path()).unwrap(), 35);
    assert_eq!(backup_size(&root.path().join("missing")).unwrap(), 0);
}
