//! Append-only line writer with size-based rotation.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

/// Rotate once the trace file grows past 10 MB.
pub const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// Rotated files kept next to the live one.
pub const DEFAULT_BACKUPS: usize = 3;

/// Writes one JSON document per line, rotating the file when it gets large.
///
/// A rotated file is renamed to `<stem>.json.<unix-seconds>[-n]`; only the
/// newest `backups` of those are kept. The handle is opened lazily so that
/// building a writer never touches the filesystem.
pub struct RotatingWriter {
    path: PathBuf,
    max_bytes: u64,
    backups: usize,
    file: Mutex<Option<File>>,
}

impl RotatingWriter {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self::with_limits(path, DEFAULT_MAX_BYTES, DEFAULT_BACKUPS)
    }

    #[must_use]
    pub const fn with_limits(path: PathBuf, max_bytes: u64, backups: usize) -> Self {
        Self {
            path,
            max_bytes,
            backups,
            file: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline and flushes.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if rotation, opening or writing
    /// fails, or an `Other` error if the lock was poisoned.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("writer lock poisoned: {e}")))?;

        if self.needs_rotation() {
            *guard = None;
            self.rotate()?;
        }

        if guard.is_none() {
            *guard = Some(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.path)?,
            );
        }
        let Some(file) = guard.as_mut() else {
            return Err(io::Error::new(io::ErrorKind::Other, "trace file not open"));
        };

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.path).is_ok_and(|meta| meta.len() > self.max_bytes)
    }

    fn rotate(&self) -> io::Result<()> {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_secs());

        let mut backup = self.path.with_extension(format!("json.{stamp}"));
        let mut suffix = 1;
        while backup.exists() {
            backup = self.path.with_extension(format!("json.{stamp}-{suffix}"));
            suffix += 1;
        }

        if self.path.exists() {
            fs::rename(&self.path, &backup)?;
        }
        self.prune_backups()
    }

    fn prune_backups(&self) -> io::Result<()> {
        let mut backups = self.backup_files()?;
        backups.sort_by_key(|path| {
            std::cmp::Reverse(fs::metadata(path).and_then(|m| m.modified()).ok())
        });

        for stale in backups.iter().skip(self.backups) {
            // Best effort; a file we fail to remove is retried next rotation.
            let _ = fs::remove_file(stale);
        }
        Ok(())
    }

    fn backup_files(&self) -> io::Result<Vec<PathBuf>> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let Some(stem) = self.path.file_stem().and_then(|s| s.to_str()) else {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "trace file has no name"));
        };
        let prefix = format!("{stem}.json.");

        Ok(fs::read_dir(dir)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&prefix))
            })
            .collect())
    }
}

impl std::fmt::Debug for RotatingWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingWriter")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("backups", &self.backups)
            .finish_non_exhaustive()
    }
}
