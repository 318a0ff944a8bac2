//! Filesystem adapter that discovers integration slots.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::SlotCount;

/// Directory convention the external executable uses to report how many
/// integration jobs the build step produced.
pub const SCRATCH_BUILD_DIR: &str = "Herwig-scratch/Build";

/// Counts `integrationJob<digits>` entries in the scratch build directory.
/// The scan is non-recursive.
pub struct ScratchScanner {
    dir: PathBuf,
}

impl ScratchScanner {
    /// Scanner over the conventional `Herwig-scratch/Build` location,
    /// relative to the working directory.
    pub fn new() -> Self {
        Self { dir: PathBuf::from(SCRATCH_BUILD_DIR) }
    }

    /// Scanner over an explicit directory.
    pub fn at<P: AsRef<Path>>(dir: P) -> Self {
        Self { dir: dir.as_ref().to_path_buf() }
    }
}

impl Default for ScratchScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl SlotCount for ScratchScanner {
    fn count(&self) -> Result<usize, AppError> {
        let entries = fs::read_dir(&self.dir).map_err(|source| AppError::ScratchUnreadable {
            path: self.dir.display().to_string(),
            source,
        })?;

        let mut slots = 0;
        for entry in entries {
            let entry = entry?;
            if is_integration_job(&entry.file_name().to_string_lossy()) {
                slots += 1;
            }
        }
        Ok(slots)
    }
}

/// `integrationJob` followed by at least one digit, as the build step names
/// its artifacts. Anything after the digits is accepted.
fn is_integration_job(name: &str) -> bool {
    match name.strip_prefix("integrationJob") {
        Some(rest) => rest.chars().next().is_some_and(|c| c.is_ascii_digit()),
        None => false,
    }
}
