//! Append-only capture log store.
//!
//! # Responsibilities
//! - Create the log file with a sentinel header line on first use
//! - Append one complete JSON record per line, serialized under a lock
//! - Keep file permissions owner-only where the platform supports it
//! - Parse records back for tooling and tests, skipping the sentinel
//!
//! # Design Decisions
//! - Appends go through one `Mutex<File>` so concurrent writers never
//!   interleave partial records
//! - Each append is a single `write_all` of `record + '\n'` followed by a
//!   flush; prior lines stay intact whatever happens to the current one
//! - Permission tightening is reported as a `PermissionStatus` instead of
//!   being silently swallowed, so the warning path stays observable

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;

use crate::capture::record::SubmissionRecord;

/// Non-parseable first line written when the log file is created.
pub const SENTINEL: &str = "# phishdrill capture log - security-awareness training data only";

/// Failures of the capture store.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("failed to open capture log: {0}")]
    Open(#[source] std::io::Error),

    #[error("failed to append capture record: {0}")]
    Append(#[source] std::io::Error),

    #[error("failed to serialize capture record: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to read capture log: {0}")]
    Read(#[source] std::io::Error),

    #[error("malformed capture record on line {line}: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Result of a best-effort permission tightening.
#[derive(Debug)]
pub enum PermissionStatus {
    /// Owner-only bits applied.
    Restricted,
    /// The platform has no owner-only permission bits.
    Unsupported,
    /// Tightening failed; never fatal, callers log it.
    Failed(std::io::Error),
}

impl PermissionStatus {
    pub fn is_failed(&self) -> bool {
        matches!(self, PermissionStatus::Failed(_))
    }
}

/// Process-scoped append-only record store.
///
/// Opened once at startup and shared for the process lifetime; tests
/// construct isolated instances on temporary paths.
pub struct CaptureStore {
    path: PathBuf,
    file: Mutex<File>,
}

impl CaptureStore {
    /// Open the store, creating the file with its sentinel header if absent.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CaptureError> {
        let path = path.into();
        let preexisting = path.exists();

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(CaptureError::Open)?;

        if !preexisting {
            file.write_all(SENTINEL.as_bytes())
                .and_then(|_| file.write_all(b"\n"))
                .map_err(CaptureError::Append)?;
        }

        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record as a single complete line.
    ///
    /// The write happens under the store lock as one `write_all`, so
    /// concurrent appends never interleave. Returns the permission
    /// tightening status performed after the append.
    pub fn append(&self, record: &SubmissionRecord) -> Result<PermissionStatus, CaptureError> {
        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        {
            let mut file = self.file.lock().expect("capture store mutex poisoned");
            file.write_all(line.as_bytes()).map_err(CaptureError::Append)?;
            file.flush().map_err(CaptureError::Append)?;
        }

        Ok(self.restrict_permissions())
    }

    /// Tighten the log file to owner read/write only, best effort.
    #[cfg(unix)]
    pub fn restrict_permissions(&self) -> PermissionStatus {
        use std::os::unix::fs::PermissionsExt;

        match std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600)) {
            Ok(()) => PermissionStatus::Restricted,
            Err(e) => PermissionStatus::Failed(e),
        }
    }

    #[cfg(not(unix))]
    pub fn restrict_permissions(&self) -> PermissionStatus {
        PermissionStatus::Unsupported
    }

    /// Parse all records back from the log, skipping the sentinel and blank
    /// lines.
    pub fn read_records(&self) -> Result<Vec<SubmissionRecord>, CaptureError> {
        let file = File::open(&self.path).map_err(CaptureError::Read)?;
        let reader = BufReader::new(file);

        let mut records = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(CaptureError::Read)?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let record = serde_json::from_str(trimmed).map_err(|source| {
                CaptureError::Malformed {
                    line: index + 1,
                    source,
                }
            })?;
            records.push(record);
        }
        Ok(records)
    }
}
