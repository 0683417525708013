//! # Validation Module
//!
//! Field validators for Maitre. Every reservation field arrives as a raw
//! string from the prompt; these functions decide what the book accepts.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Prompt loop (apps/terminal)                                   │
//! │  ├── Re-prompts per field until the validator accepts                  │
//! │  └── Immediate user feedback, one audit line per failed attempt        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Reservation book (THIS CRATE)                                │
//! │  ├── Re-runs every validator before mutating state                     │
//! │  └── The book never trusts the prompt layer                            │
//! │                                                                         │
//! │  Same functions both times: one definition of "valid" in the system.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Temporal Checks Are Relative
//! Date and time validity depend on the session's [`ReferenceMoment`]; the
//! validators take it as an argument rather than reading a clock, so every
//! check is a pure function.
//!
//! ## The Calendar Is Deliberately Lenient
//! Dates accept day 1-31 for *every* month: "2025-02-30" is valid. This
//! matches the desk's long-standing behavior and the prompts built around
//! it; do not tighten it to a real calendar.

use crate::error::ValidationError;
use crate::moment::ReferenceMoment;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Contact Fields
// =============================================================================

/// Validates a phone number.
///
/// ## Rules
/// - Exactly `XXX-XXX-XXXX`: three digits, dash, three digits, dash,
///   four digits
/// - No spaces, parentheses, country codes, or other separators
///
/// ## Example
/// ```rust
/// use maitre_core::validation::validate_phone;
///
/// assert!(validate_phone("123-456-7890").is_ok());
/// assert!(validate_phone("1234567890").is_err());
/// assert!(validate_phone("12-3456-7890").is_err());
/// ```
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    let bytes = phone.as_bytes();
    if bytes.len() != 12 {
        return Err(ValidationError::Phone);
    }
    for (i, b) in bytes.iter().enumerate() {
        let ok = match i {
            3 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        };
        if !ok {
            return Err(ValidationError::Phone);
        }
    }
    Ok(())
}

// =============================================================================
// Temporal Fields
// =============================================================================

/// Validates a reservation date against the reference moment.
///
/// ## Rules
/// - Shape `YYYY-MM-DD`, zero-padded, digits only
/// - Month in 1-12, day in 1-31; per-month day counts and leap years are
///   NOT checked (see the module docs)
/// - Not earlier than the reference date; the fixed-width zero-padded
///   shape makes lexicographic comparison agree with chronological order
///
/// ## Example
/// ```rust
/// use maitre_core::moment::ReferenceMoment;
/// use maitre_core::validation::validate_date;
///
/// let moment = ReferenceMoment::default(); // 2025-05-19 22:19
/// assert!(validate_date("2025-06-01", &moment).is_ok());
/// assert!(validate_date("2025-02-30", &moment).is_err()); // past, not shape
/// assert!(validate_date("2026-02-30", &moment).is_ok());  // lenient calendar
/// assert!(validate_date("2025-13-01", &moment).is_err());
/// ```
pub fn validate_date(date: &str, moment: &ReferenceMoment) -> ValidationResult<()> {
    let bytes = date.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(ValidationError::Date);
    }
    for (i, b) in bytes.iter().enumerate() {
        if i != 4 && i != 7 && !b.is_ascii_digit() {
            return Err(ValidationError::Date);
        }
    }

    let month: u32 = date[5..7].parse().map_err(|_| ValidationError::Date)?;
    let day: u32 = date[8..10].parse().map_err(|_| ValidationError::Date)?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(ValidationError::Date);
    }

    if date < moment.date() {
        return Err(ValidationError::Date);
    }
    Ok(())
}

/// Validates a reservation time against the reference moment.
///
/// ## Rules
/// - Shape `HH:MM`, zero-padded, 24-hour: hour in 0-23, minute in 0-59
/// - When `date` equals the reference date, the time must be strictly
///   later than the reference time; booking the current minute is
///   rejected
/// - Any other (already-validated) date accepts any well-formed time
///
/// ## Example
/// ```rust
/// use maitre_core::moment::ReferenceMoment;
/// use maitre_core::validation::validate_time;
///
/// let moment = ReferenceMoment::default(); // 2025-05-19 22:19
/// assert!(validate_time("22:20", "2025-05-19", &moment).is_ok());
/// assert!(validate_time("22:19", "2025-05-19", &moment).is_err());
/// assert!(validate_time("08:00", "2025-06-01", &moment).is_ok());
/// ```
pub fn validate_time(time: &str, date: &str, moment: &ReferenceMoment) -> ValidationResult<()> {
    let bytes = time.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return Err(ValidationError::Time);
    }
    for (i, b) in bytes.iter().enumerate() {
        if i != 2 && !b.is_ascii_digit() {
            return Err(ValidationError::Time);
        }
    }

    let hour: u32 = time[0..2].parse().map_err(|_| ValidationError::Time)?;
    let minute: u32 = time[3..5].parse().map_err(|_| ValidationError::Time)?;
    if hour > 23 || minute > 59 {
        return Err(ValidationError::Time);
    }

    if date == moment.date() {
        let later = hour > moment.hour() || (hour == moment.hour() && minute > moment.minute());
        if !later {
            return Err(ValidationError::Time);
        }
    }
    Ok(())
}

// =============================================================================
// Numeric Fields
// =============================================================================

/// Validates a party size.
///
/// ## Rules
/// - At least 1; no upper bound
pub fn validate_party_size(size: i64) -> ValidationResult<()> {
    if size < 1 {
        return Err(ValidationError::PartySize);
    }
    Ok(())
}

/// Parses raw menu or table input as an integer in an inclusive range.
///
/// ## Rules
/// - Every character must be an ASCII digit: rejects "", "1a", "1.1",
///   "1 1", and any sign
/// - The parsed value must fall within `min..=max`
/// - Leading zeros are fine ("007" parses as 7)
///
/// ## Returns
/// The parsed integer.
pub fn parse_numeric_input(input: &str, min: i64, max: i64) -> ValidationResult<i64> {
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::Choice { min, max });
    }
    let value: i64 = input
        .parse()
        .map_err(|_| ValidationError::Choice { min, max })?;
    if value < min || value > max {
        return Err(ValidationError::Choice { min, max });
    }
    Ok(value)
}

// =============================================================================
// Identifiers
// =============================================================================

/// Validates a reservation identifier.
///
/// ## Rules
/// - Exactly `ID <digits>A`: the literal prefix `"ID "`, one or more
///   ASCII digits, then a single trailing `'A'`
/// - Applies to issued identifiers and to any user-supplied identifier
///   for lookup, update, or rename
///
/// ## Example
/// ```rust
/// use maitre_core::validation::validate_reservation_id;
///
/// assert!(validate_reservation_id("ID 12A").is_ok());
/// assert!(validate_reservation_id("id 12A").is_err());
/// assert!(validate_reservation_id("ID 12").is_err());
/// assert!(validate_reservation_id("ID A").is_err());
/// ```
pub fn validate_reservation_id(id: &str) -> ValidationResult<()> {
    let digits = id
        .strip_prefix("ID ")
        .and_then(|rest| rest.strip_suffix('A'))
        .ok_or(ValidationError::ReservationId)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::ReservationId);
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
