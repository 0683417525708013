//! # Audit Log Seam
//!
//! The reservation book records every operation, successful or failed,
//! as one human-readable line. Where those lines go is not the core's
//! business: the book holds a [`LogSink`] trait object and fires lines at
//! it, and the binary decides what is behind it (the append-only file in
//! `maitre-audit`, memory in tests, nothing at all by default).
//!
//! ## Line Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Audit Line Flow                                │
//! │                                                                         │
//! │  ReservationBook op ──► format_entry() ──► LogSink::append(line)       │
//! │  terminal login     ──►      │                     │                    │
//! │  failed prompt      ──►      │                     ▼                    │
//! │                              │        ┌──────────────────────────┐     │
//! │   [2025-05-19 22:19:00]      │        │ NullSink    (default)    │     │
//! │   [Customer: alice]          │        │ MemorySink  (tests)      │     │
//! │   Reserved table #4 ...      │        │ FileAuditLog (the app)   │     │
//! │                              │        └──────────────────────────┘     │
//! │                                                                         │
//! │  viewLogs ◄── LogSink::read_all(): every line, insertion order         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Writes are fire-and-forget: a sink that cannot persist a line reports
//! it through `tracing` and swallows the failure. The audit trail is an
//! account of the desk's day, not a transaction log the book depends on.

use std::sync::Mutex;

use crate::moment::ReferenceMoment;
use crate::types::Actor;

// =============================================================================
// Line Formatting
// =============================================================================

/// Composes one audit line: `[date HH:MM:00] [Role: username] message`.
///
/// The timestamp is the session's reference moment: the desk stamps the
/// day it opened, not a per-line wall-clock read.
pub fn format_entry(moment: &ReferenceMoment, actor: &Actor, message: &str) -> String {
    format!(
        "[{} {:02}:{:02}:00] [{}: {}] {}",
        moment.date(),
        moment.hour(),
        moment.minute(),
        actor.role.label(),
        actor.username,
        message
    )
}

// =============================================================================
// Log Sink Trait
// =============================================================================

/// Destination for audit lines (implemented by the file log in
/// `maitre-audit`; in-memory and no-op impls live here).
pub trait LogSink: Send + Sync {
    /// Appends one line to the audit trail. Must not panic; persistence
    /// failures are reported via `tracing` and swallowed.
    fn append(&self, line: &str);

    /// Returns every recorded line in insertion order. A sink with
    /// nothing recorded (or nothing readable) returns an empty list.
    fn read_all(&self) -> Vec<String>;
}

/// No-op sink used when no audit trail is wired up.
pub struct NullSink;

impl LogSink for NullSink {
    fn append(&self, _line: &str) {}

    fn read_all(&self) -> Vec<String> {
        Vec::new()
    }
}

/// In-memory sink for tests and assertions.
#[derive(Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        MemorySink::default()
    }
}

impl LogSink for MemorySink {
    fn append(&self, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line.to_string());
        }
    }

    fn read_all(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(_) => Vec::new(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
