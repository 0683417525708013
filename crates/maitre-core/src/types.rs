//! # Domain Types
//!
//! Core domain types used throughout Maitre.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  Reservation    │   │ Reservation-    │   │ Reservation-    │       │
//! │  │  ─────────────  │   │ Request         │   │ Update          │       │
//! │  │  id ("ID 1A")   │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  customer_name  │   │  raw fields for │   │  all-Option     │       │
//! │  │  phone_number   │   │  one reserve    │   │  None = keep    │       │
//! │  │  party_size     │   │  call           │   │  current value  │       │
//! │  │  date / time    │   └─────────────────┘   └─────────────────┘       │
//! │  │  table_index    │                                                    │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Role        │   │   Permission    │   │     Actor       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Customer       │──►│  per-role menu  │   │  role           │       │
//! │  │  Receptionist   │   │  entries, one   │   │  username       │       │
//! │  │  Admin          │   │  per operation  │   │  (audit tag)    │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Roles Are Data, Not Behavior
//! The only thing that varies between roles is *which* book operations they
//! may invoke. A closed enum plus a static permission table captures that;
//! the menu layer renders and dispatches straight off the table.

use serde::{Deserialize, Serialize};

// =============================================================================
// Roles & Permissions
// =============================================================================

/// Who is operating the desk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Customer,
    Receptionist,
    Admin,
}

impl Role {
    /// The operations this role may invoke, in menu order.
    ///
    /// Customers manage their own bookings. Receptionists only observe.
    /// Admins observe plus act on any customer's booking and manage
    /// receptionist accounts.
    pub const fn permissions(&self) -> &'static [Permission] {
        match self {
            Role::Customer => &[
                Permission::ViewOwnReservations,
                Permission::ReserveTable,
                Permission::ViewAvailability,
                Permission::UpdateReservation,
                Permission::CancelReservation,
            ],
            Role::Receptionist => &[Permission::ViewLogs, Permission::ViewAvailability],
            Role::Admin => &[
                Permission::ViewLogs,
                Permission::ViewAvailability,
                Permission::UpdateReservation,
                Permission::CancelReservation,
                Permission::CreateReceptionist,
            ],
        }
    }

    /// Display name, also the role tag on audit lines.
    pub const fn label(&self) -> &'static str {
        match self {
            Role::Customer => "Customer",
            Role::Receptionist => "Receptionist",
            Role::Admin => "Admin",
        }
    }
}

/// A single desk operation a role may invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    ViewOwnReservations,
    ReserveTable,
    ViewAvailability,
    UpdateReservation,
    CancelReservation,
    ViewLogs,
    CreateReceptionist,
}

impl Permission {
    /// Menu entry label shown at the prompt.
    pub const fn label(&self) -> &'static str {
        match self {
            Permission::ViewOwnReservations => "View My Reservations",
            Permission::ReserveTable => "Reserve Table",
            Permission::ViewAvailability => "View Table Availability",
            Permission::UpdateReservation => "Update Reservation",
            Permission::CancelReservation => "Cancel Reservation",
            Permission::ViewLogs => "View Logs",
            Permission::CreateReceptionist => "Create Receptionist Account",
        }
    }
}

// =============================================================================
// Actor
// =============================================================================

/// Who is acting, carried through every book operation so audit lines are
/// tagged with the true operator (an admin acting on a customer's booking
/// is logged as the admin, not the customer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub role: Role,
    pub username: String,
}

impl Actor {
    pub fn new(role: Role, username: impl Into<String>) -> Self {
        Actor {
            role,
            username: username.into(),
        }
    }
}

// =============================================================================
// Reservation
// =============================================================================

/// One active booking.
///
/// Dates and times are kept as their validated input strings. Validation
/// deliberately stops at shape plus month 1-12 / day 1-31 bounds, so a
/// record may carry a date like `2025-02-30`; nothing downstream may assume
/// a real calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// Issued identifier, shaped `ID <number>A`. Unique among active
    /// records; may be renamed by an update.
    pub id: String,

    /// Name the booking is held under. Ownership key together with `id`.
    pub customer_name: String,

    /// Contact number, `XXX-XXX-XXXX`.
    pub phone_number: String,

    /// Seats requested, at least 1.
    pub party_size: i64,

    /// Booking date, zero-padded `YYYY-MM-DD`.
    pub date: String,

    /// Booking time, zero-padded 24-hour `HH:MM`.
    pub time: String,

    /// Zero-based index into the table pool. Rendered 1-based at the
    /// prompt only.
    pub table_index: usize,
}

// =============================================================================
// Reservation Request
// =============================================================================

/// Raw field bundle for one reserve call.
///
/// Fields arrive as the user typed them; `ReservationBook::reserve_table`
/// runs the full validation pass before any state changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationRequest {
    pub customer_name: String,
    pub phone_number: String,
    pub party_size: i64,
    pub date: String,
    pub time: String,
    /// Zero-based; the prompt layer converts from 1-based input.
    pub table_index: usize,
}

// =============================================================================
// Reservation Update
// =============================================================================

/// Partial update for an existing reservation.
///
/// `None` means "keep the current value". The prompt layer maps its
/// `0 = keep current` convention onto these options, so the book never
/// sees sentinel strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationUpdate {
    /// Replacement identifier; must be unused by any other active record.
    pub new_id: Option<String>,

    /// Replacement holder name. Not validated beyond being given.
    pub new_name: Option<String>,

    pub new_phone: Option<String>,

    pub new_party_size: Option<i64>,

    pub new_date: Option<String>,

    /// Checked against `new_date` when both are given, otherwise against
    /// the reference date.
    pub new_time: Option<String>,

    /// Zero-based replacement table. The record's own table is always
    /// claimable by itself.
    pub new_table: Option<usize>,
}

// =============================================================================
// Table Status
// =============================================================================

/// Occupancy of one slot, as returned by availability views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableStatus {
    /// Zero-based slot index.
    pub index: usize,

    /// True when no active reservation holds the slot.
    pub available: bool,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_permissions_cover_self_service() {
        let perms = Role::Customer.permissions();
        assert_eq!(perms.len(), 5);
        assert!(perms.contains(&Permission::ReserveTable));
        assert!(perms.contains(&Permission::CancelReservation));
        assert!(!perms.contains(&Permission::ViewLogs));
        assert!(!perms.contains(&Permission::CreateReceptionist));
    }

    #[test]
    fn test_receptionist_permissions_are_read_only() {
        assert_eq!(
            Role::Receptionist.permissions(),
            &[Permission::ViewLogs, Permission::ViewAvailability]
        );
    }

    #[test]
    fn test_admin_can_act_on_any_booking() {
        let perms = Role::Admin.permissions();
        assert!(perms.contains(&Permission::UpdateReservation));
        assert!(perms.contains(&Permission::CancelReservation));
        assert!(perms.contains(&Permission::CreateReceptionist));
        assert!(!perms.contains(&Permission::ReserveTable));
    }

    #[test]
    fn test_update_default_changes_nothing() {
        let update = ReservationUpdate::default();
        assert_eq!(update.new_id, None);
        assert_eq!(update.new_name, None);
        assert_eq!(update.new_phone, None);
        assert_eq!(update.new_party_size, None);
        assert_eq!(update.new_date, None);
        assert_eq!(update.new_time, None);
        assert_eq!(update.new_table, None);
    }
}
