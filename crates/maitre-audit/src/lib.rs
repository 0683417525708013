//! # maitre-audit: The Append-Only Audit File
//!
//! File-backed implementation of [`maitre_core::LogSink`]. The reservation
//! book (and the terminal's login/prompt bookkeeping) compose audit lines;
//! this crate gets them onto disk and back.
//!
//! ## Write Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        FileAuditLog                                     │
//! │                                                                         │
//! │  append(line) ──► open(create|append) ──► write line ──► close         │
//! │                        │                                                │
//! │                        └─ on failure: tracing::error!, line dropped    │
//! │                                                                         │
//! │  read_all() ──► open ──► collect lines in order                        │
//! │                   │                                                     │
//! │                   └─ file not there yet: empty log, not an error       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each append opens, writes, and closes: every line is on disk the moment
//! the call returns, and several handles on the same path interleave whole
//! lines. The desk writes a handful of lines per session; throughput is
//! not a concern here, durability of each line is.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::error;

use maitre_core::LogSink;

// =============================================================================
// File Audit Log
// =============================================================================

/// Append-only audit trail backed by a plain text file, one line per entry.
///
/// The file is created on first append. Failures to write are reported
/// through `tracing` and swallowed; the audit trail must never take the
/// desk down with it.
pub struct FileAuditLog {
    path: PathBuf,
}

impl FileAuditLog {
    /// Creates a sink writing to `path`. The file itself is not touched
    /// until the first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileAuditLog { path: path.into() }
    }

    /// The file this sink appends to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogSink for FileAuditLog {
    fn append(&self, line: &str) {
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| writeln!(file, "{line}"));
        if let Err(err) = result {
            error!(
                "failed to append audit line to {}: {err}",
                self.path.display()
            );
        }
    }

    fn read_all(&self) -> Vec<String> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            // Nothing written yet reads as an empty log.
            Err(_) => return Vec::new(),
        };
        BufReader::new(file).lines().map_while(Result::ok).collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
