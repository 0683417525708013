//! # maitre-core: Pure Business Logic for Maitre
//!
//! This crate is the **heart** of Maitre, a single-venue table reservation
//! desk. It contains all business logic as pure functions and one owned
//! state value, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Maitre Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  apps/terminal (prompt loop)                    │   │
//! │  │   role selection ──► login ──► menu ──► field prompts           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ owned calls, no globals                │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ maitre-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   book    │  │validation │  │   types   │  │    log    │  │   │
//! │  │   │ table pool│  │ phone/date│  │ Role/Actor│  │  LogSink  │  │   │
//! │  │   │  records  │  │ time/ids  │  │ records   │  │ formatting│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK READS • NO GLOBALS • DETERMINISTIC          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ LogSink trait                          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                maitre-audit (append-only file)                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`book`] - The reservation book: table pool, records, operations
//! - [`validation`] - Field validators (phone, date, time, ids, numerics)
//! - [`types`] - Domain types (Reservation, Role, Actor, update payloads)
//! - [`moment`] - The frozen "current moment" reference
//! - [`log`] - Audit sink trait and line formatting
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **One Owner**: the book is an explicitly constructed value handed to
//!    the session; no singletons, no lazily-initialized globals
//! 2. **No I/O**: file, terminal, and clock access are FORBIDDEN here; the
//!    reference moment and the audit sink are injected
//! 3. **Check Then Mutate**: every operation validates all preconditions
//!    before touching state
//! 4. **Explicit Errors**: all failures are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use maitre_core::{Actor, ReservationBook, ReservationRequest, Role};
//!
//! let mut book = ReservationBook::default(); // 10 tables
//! let actor = Actor::new(Role::Customer, "alice");
//!
//! let table = book.reserve_table(&actor, &ReservationRequest {
//!     customer_name: "Alice".to_string(),
//!     phone_number: "123-456-7890".to_string(),
//!     party_size: 2,
//!     date: "2025-06-01".to_string(),
//!     time: "19:00".to_string(),
//!     table_index: 3,
//! })?;
//!
//! assert_eq!(table, 3);
//! assert_eq!(book.customer_reservations("Alice")[0].id, "ID 1A");
//! # Ok::<(), maitre_core::ReservationError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod book;
pub mod error;
pub mod log;
pub mod moment;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use maitre_core::ReservationBook` instead of
// `use maitre_core::book::ReservationBook`

pub use book::ReservationBook;
pub use error::{ReservationError, ReservationResult, ValidationError};
pub use log::{LogSink, MemorySink, NullSink};
pub use moment::ReferenceMoment;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of tables in the venue's pool.
///
/// ## Why a constant?
/// The venue floor is fixed: ten physical tables, indexed 0-9 internally
/// and shown 1-10 at the prompt. Sessions that need a different pool size
/// (tests mostly) pass their own count to `ReservationBook::new`.
pub const DEFAULT_TABLE_COUNT: usize = 10;
