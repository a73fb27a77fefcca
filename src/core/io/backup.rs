//! Timestamped backups of the data directory

use crate::core::config::Config;
use crate::{debug, warn};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory name format for a backup (e.g. `20251016_142530`)
const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Copy every regular file in the data directory into `<backup_dir>/<timestamp>`
///
/// Files that fail to copy are logged and skipped.
///
/// # Errors
/// Returns an error if the backup directory cannot be created or the data directory cannot
/// be listed
pub fn create_backup(config: &Config) -> Result<PathBuf, Box<dyn Error>> {
    let stamp = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
    let target = Path::new(&config.paths.backup_dir).join(stamp);
    fs::create_dir_all(&target)?;

    let data_dir = Path::new(&config.paths.data_dir);
    for entry in fs::read_dir(data_dir)? {
        let path = match entry {
            Ok(entry) => entry.path(),
            Err(e) => {
                warn!("Failed to read entry in {}: {e}", data_dir.display());
                continue;
            }
        };
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name() else {
            continue;
        };
        match fs::copy(&path, target.join(name)) {
            Ok(bytes) => debug!("Backed up {} ({bytes} bytes)", path.display()),
            Err(e) => warn!("Failed to backup {}: {e}", path.display()),
        }
    }

    Ok(target)
}

/// Total size in bytes of all regular files under `dir`, recursively
///
/// Returns 0 when the directory does not exist. Unreadable entries count as 0 bytes.
///
/// # Errors
/// Returns an error if `dir` exists but cannot be listed
pub fn backup_size(dir: &Path) -> Result<u64, Box<dyn Error>> {
    if !dir.exists() {
        return Ok(0);
    }

    let mut total = 0;
    for entry in fs::read_dir(dir)?.flatten() {
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if file_type.is_dir() {
            total += backup_size(&entry.path()).unwrap_or(0);
        } else if file_type.is_file() {
            total += entry.metadata().map_or(0, |m| m.len());
        }
    }
    Ok(total)
}
