//! Backing file access for the settings store
//!
//! Every call opens, uses and releases the file within itself; nothing is held
//! open between attempts.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

/// Raw text access to the settings file.
///
/// The store retries these calls on failure, so implementations should report
/// transient contention (e.g. a concurrent writer holding the file) as an error
/// rather than blocking.
pub trait SettingsFile: Send + Sync {
    /// Location used in diagnostics
    fn path(&self) -> &Path;

    fn exists(&self) -> bool;

    fn read(&self) -> io::Result<String>;

    fn write(&self, contents: &str) -> io::Result<()>;
}

impl<T: SettingsFile + ?Sized> SettingsFile for std::sync::Arc<T> {
    fn path(&self) -> &Path {
        (**self).path()
    }

    fn exists(&self) -> bool {
        (**self).exists()
    }

    fn read(&self) -> io::Result<String> {
        (**self).read()
    }

    fn write(&self, contents: &str) -> io::Result<()> {
        (**self).write(contents)
    }
}

/// Settings file on the local disk
#[derive(Debug, Clone)]
pub struct DiskFile {
    path: PathBuf,
}

impl DiskFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Sibling file a write lands in before replacing the real one
    pub fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SettingsFile for DiskFile {
    fn path(&self) -> &Path {
        &self.path
    }

    fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn read(&self) -> io::Result<String> {
        std::fs::read_to_string(&self.path)
    }

    /// Write a sibling temp file, then rename it over the target, so a failed
    /// write never truncates the last good file.
    fn write(&self, contents: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let temp_path = self.temp_path();
        if let Err(e) = std::fs::write(&temp_path, contents) {
            let _ = std::fs::remove_file(&temp_path);
            return Err(e);
        }
        std::fs::rename(&temp_path, &self.path)
    }
}

/// Call `op` up to `attempts` times, returning the first success or the last error.
pub(crate) fn retry<T>(
    attempts: u32,
    mut op: impl FnMut() -> io::Result<T>,
) -> Result<T, io::Error> {
    let mut last_err = io::Error::other("no attempts made");
    for attempt in 1..=attempts {
        match op() {
            Ok(value) => return Ok(value),
            Err(e) => {
                tracing::debug!(attempt, error = %e, "settings file access failed, retrying");
                last_err = e;
            }
        }
    }
    Err(last_err)
}
