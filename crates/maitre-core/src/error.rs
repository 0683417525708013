//! # Error Types
//!
//! Domain-specific error types for maitre-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  maitre-core errors (this file)                                        │
//! │  ├── ReservationError  - Book operation failures                       │
//! │  └── ValidationError   - Per-field input failures                      │
//! │                                                                         │
//! │  maitre-audit                                                          │
//! │  └── (none: sink writes are fire-and-forget, failures go to tracing)   │
//! │                                                                         │
//! │  terminal app                                                          │
//! │  └── io::Error         - Prompt-loop reads and writes                  │
//! │                                                                         │
//! │  Flow: ValidationError → ReservationError → message shown at prompt    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (id, customer, table)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Reservation Error
// =============================================================================

/// Reservation book operation errors.
///
/// These errors represent rule violations detected by the book before any
/// state changes. They are caught by the prompt loop and shown to the user.
#[derive(Debug, Error)]
pub enum ReservationError {
    /// A supplied field failed its validation check.
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// No active reservation matches the (id, customer) pair.
    ///
    /// ## When This Occurs
    /// - The id was never issued, or was already cancelled
    /// - The id exists but is held under a different customer name
    ///   (an id alone is not sufficient authorization)
    #[error("no reservation {id} held by {customer}")]
    NotFound { id: String, customer: String },

    /// Requested identifier already belongs to a different active reservation.
    #[error("reservation id {id} is already in use")]
    Conflict { id: String },

    /// Requested table is currently booked.
    ///
    /// ## User Workflow
    /// ```text
    /// Reserve table 3
    ///      │
    ///      ▼
    /// Check pool: tables[3] = booked
    ///      │
    ///      ▼
    /// TableUnavailable { table: 3 }
    ///      │
    ///      ▼
    /// Prompt shows: "selected table is already booked"
    /// ```
    #[error("selected table is already booked")]
    TableUnavailable { table: usize },

    /// Table index outside the pool.
    #[error("table number must be between 1 and {count}")]
    TableOutOfRange { table: usize, count: usize },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors, one variant per field.
///
/// These errors occur when raw user input doesn't meet requirements.
/// Used for early validation before any book state changes.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Phone number does not match the fixed shape.
    #[error("phone number must match XXX-XXX-XXXX")]
    Phone,

    /// Party size below the minimum of one guest.
    #[error("party size must be at least 1")]
    PartySize,

    /// Date malformed or earlier than the reference date.
    #[error("date must be YYYY-MM-DD and not in the past")]
    Date,

    /// Time malformed, or not later than the reference time on the
    /// reference date.
    #[error("time must be HH:MM and later than the current time for today")]
    Time,

    /// Reservation identifier does not match the issued shape.
    #[error("reservation id must match 'ID <number>A', e.g. ID 1A")]
    ReservationId,

    /// Raw numeric input rejected: non-digit characters or out of range.
    #[error("enter a number between {min} and {max}")]
    Choice { min: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ReservationError.
pub type ReservationResult<T> = Result<T, ReservationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ReservationError::NotFound {
            id: "ID 7A".to_string(),
            customer: "Alice".to_string(),
        };
        assert_eq!(err.to_string(), "no reservation ID 7A held by Alice");

        let err = ReservationError::TableOutOfRange {
            table: 99,
            count: 10,
        };
        assert_eq!(err.to_string(), "table number must be between 1 and 10");
    }

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(
            ValidationError::Phone.to_string(),
            "phone number must match XXX-XXX-XXXX"
        );
        assert_eq!(
            ValidationError::Choice { min: 1, max: 6 }.to_string(),
            "enter a number between 1 and 6"
        );
    }

    #[test]
    fn test_validation_converts_to_reservation_error() {
        let err: ReservationError = ValidationError::Date.into();
        assert!(matches!(err, ReservationError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "invalid input: date must be YYYY-MM-DD and not in the past"
        );
    }
}
