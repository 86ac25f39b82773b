//! Rotating file writer with size-based rotation and backup retention.
//!
//! This module provides a thread-safe file writer that automatically rotates
//! files when they exceed a size threshold, maintaining a fixed number of
//! backup files. This prevents unbounded disk usage for log files.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

/// Maximum file size before rotation (5 MB).
const MAX_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 2;

/// Thread-safe rotating file writer.
///
/// Provides automatic file rotation based on size thresholds. When the current
/// file exceeds `MAX_FILE_SIZE_BYTES`, it is renamed with a timestamp suffix
/// and a new file is created. Old backups beyond `MAX_BACKUP_FILES` are
/// automatically cleaned up.
///
/// # Thread Safety
///
/// Uses an internal `Mutex` to ensure safe concurrent access. The plugin
/// thread and the worker thread both write to the same log file.
///
/// # Rotation Strategy
///
/// 1. Check file size before each write
/// 2. If size > 5MB, rotate:
///    - Rename current file to `<name>.log.<timestamp>`
///    - Create new empty file
///    - Remove oldest backups beyond 2
pub struct FileWriter {
    /// Path to the primary log file.
    file_path: PathBuf,
    /// Lazily-initialized file handle (opens on first write).
    writer: Mutex<Option<std::fs::File>>,
}

impl FileWriter {
    /// Creates a new file writer for the given path.
    ///
    /// The file is not opened until the first write operation. This allows
    /// construction to succeed even if the file cannot be opened immediately.
    ///
    /// # Parameters
    ///
    /// * `file_path` - Path to the log file (will be created if it doesn't exist)
    pub const fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            writer: Mutex::new(None),
        }
    }

    /// Appends raw bytes to the file with automatic rotation.
    ///
    /// Checks file size before writing and rotates if necessary. Bytes are
    /// flushed to disk immediately so a crashed plugin leaves complete logs.
    ///
    /// # Errors
    ///
    /// May fail due to:
    /// - File system permissions
    /// - Disk space exhaustion
    /// - Mutex poisoning (if another thread panicked while holding the lock)
    pub fn write_bytes(&self, bytes: &[u8]) -> std::io::Result<usize> {
        let mut writer = self.writer.lock().map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::Other, format!("Mutex poisoned: {e}"))
        })?;

        self.check_and_rotate(&mut writer)?;

        if writer.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *writer = Some(file);
        }

        let file = writer
            .as_mut()
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, "No file available"))?;

        file.write_all(bytes)?;
        file.flush()?;
        drop(writer);

        Ok(bytes.len())
    }

    /// Checks file size and rotates if necessary.
    ///
    /// If the current file exceeds `MAX_FILE_SIZE_BYTES`, closes the file
    /// handle and triggers rotation.
    fn check_and_rotate(&self, writer: &mut Option<std::fs::File>) -> std::io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() > MAX_FILE_SIZE_BYTES {
                *writer = None;
                self.rotate_files()?;
            }
        }
        Ok(())
    }

    /// Rotates the current file and cleans up old backups.
    ///
    /// Creates a timestamped backup of the current file and removes backups
    /// beyond the retention limit.
    ///
    /// # Backup Naming
    ///
    /// Backups are named: `<original_name>.log.<unix_timestamp>`
    ///
    /// Example: `mealdeck.log.1234567890`
    fn rotate_files(&self) -> std::io::Result<()> {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or(std::time::Duration::from_secs(0))
            .as_secs();

        let backup_path = self.file_path.with_extension(format!("log.{timestamp}"));

        if self.file_path.exists() {
            fs::rename(&self.file_path, &backup_path)?;
        }

        self.cleanup_old_backups()?;

        Ok(())
    }

    /// Removes old backup files beyond the retention limit.
    ///
    /// Scans the directory for backup files matching the pattern
    /// `<name>.log.*`, sorts by modification time (newest first), and deletes
    /// all backups beyond `MAX_BACKUP_FILES`.
    ///
    /// # Error Handling
    ///
    /// Ignores individual file deletion errors to ensure cleanup continues
    /// even if some files cannot be removed.
    fn cleanup_old_backups(&self) -> std::io::Result<()> {
        let parent_dir = self
            .file_path
            .parent()
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, "No parent directory"))?;

        let file_stem = self
            .file_path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, "Invalid file name"))?;

        let mut backups: Vec<PathBuf> = fs::read_dir(parent_dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(file_stem) && name.contains(".log."))
            })
            .collect();

        backups.sort_by(|a, b| {
            let a_time = fs::metadata(a).and_then(|m| m.modified()).ok();
            let b_time = fs::metadata(b).and_then(|m| m.modified()).ok();
            b_time.cmp(&a_time)
        });

        for old_backup in backups.iter().skip(MAX_BACKUP_FILES) {
            let _ = fs::remove_file(old_backup);
        }

        Ok(())
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_append_to_the_same_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mealdeck.log");
        let writer = FileWriter::new(path.clone());

        writer.write_bytes(b"first line\n").unwrap();
        writer.write_bytes(b"second line\n").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first line\nsecond line\n");
    }

    #[test]
    fn oversized_file_is_rotated_before_write() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mealdeck.log");

        // Pre-seed a file past the rotation threshold.
        let big = vec![b'x'; (MAX_FILE_SIZE_BYTES + 1) as usize];
        fs::write(&path, &big).unwrap();

        let writer = FileWriter::new(path.clone());
        writer.write_bytes(b"fresh\n").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "fresh\n");

        let backups = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.file_name().to_string_lossy().contains(".log."))
            .count();
        assert_eq!(backups, 1);
    }
}
