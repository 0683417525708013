//! # Maitre Terminal
//!
//! The interactive reservation desk. Everything interesting lives in the
//! library so the tests can drive complete sessions over in-memory
//! buffers; `main.rs` only calls [`run`].
//!
//! ## Module Organization
//!
//! ```text
//! src/
//! ├── lib.rs        ← you are here (wiring + entry point)
//! ├── prompt.rs     ← line/numeric/confirm prompts over BufRead + Write
//! ├── accounts.rs   ← receptionist & customer credential stores
//! ├── audit.rs      ← session-side audit lines (logins, rejected input)
//! ├── menu.rs       ← role selection, logins, permission-driven menus
//! └── actions.rs    ← reserve / update / cancel / view flows
//! ```
//!
//! Two output channels never mix: the domain audit trail goes through the
//! book's sink into `logs.txt`, while developer diagnostics go through
//! `tracing` to stderr and stay out of the prompt stream.

pub mod accounts;
pub mod actions;
pub mod audit;
pub mod menu;
pub mod prompt;

use std::io;
use std::sync::Arc;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use maitre_audit::FileAuditLog;
use maitre_core::{LogSink, ReferenceMoment, ReservationBook, DEFAULT_TABLE_COUNT};

use crate::accounts::AccountDirectory;
use crate::audit::AuditTrail;
use crate::menu::Session;
use crate::prompt::Prompter;

/// Audit trail location, relative to the directory the desk is launched
/// from. Every run of the desk appends to the same file.
pub const AUDIT_LOG_PATH: &str = "logs.txt";

/// Initialize the tracing subscriber for developer diagnostics.
///
/// ## Log Levels
///
/// Defaults to `warn` so the prompt stream stays clean; raise it when
/// debugging, e.g.:
///
/// ```text
/// RUST_LOG=maitre=debug cargo run
/// ```
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Build the desk and run it over stdin/stdout until the user exits.
///
/// ## Startup Sequence
///
/// ```text
/// 1. init_tracing()          → stderr diagnostics (RUST_LOG)
/// 2. ReferenceMoment::now()  → freeze "now" for the whole session
/// 3. FileAuditLog            → audit sink at logs.txt
/// 4. ReservationBook         → 10 tables, writing through the sink
/// 5. Session::run()          → role selection loop
/// ```
///
/// Closing stdin (Ctrl-D) ends the session cleanly.
pub fn run() -> io::Result<()> {
    init_tracing();

    let moment = ReferenceMoment::now();
    debug!(date = moment.date(), "session reference moment frozen");

    let sink: Arc<dyn LogSink> = Arc::new(FileAuditLog::new(AUDIT_LOG_PATH));
    let book = ReservationBook::with_sink(DEFAULT_TABLE_COUNT, moment.clone(), sink.clone());
    let audit = AuditTrail::new(sink, moment.clone());

    let stdin = io::stdin();
    let prompter = Prompter::new(stdin.lock(), io::stdout());
    let mut session = Session::new(prompter, book, AccountDirectory::new(), audit, moment);

    match session.run() {
        Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => Ok(()),
        other => other,
    }
}
