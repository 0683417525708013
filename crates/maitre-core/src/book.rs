//! # Reservation Book
//!
//! The single stateful piece of the system: the table pool, the active
//! reservation records, and the invariant-preserving operations over them.
//!
//! ## State & Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        ReservationBook                                  │
//! │                                                                         │
//! │  tables: [■][□][□][■][□][□][□][□][□][□]      ■ booked  □ available     │
//! │  reservations: [ ID 1A/Alice/t0, ID 2A/Ben/t3 ]                         │
//! │  next_id: 3                                                             │
//! │                                                                         │
//! │  reserve_table ──► validate fields ──► claim slot ──► issue id ──► push │
//! │  update_reservation ──► re-validate ──► release/claim ──► apply        │
//! │  cancel_reservation ──► ownership check ──► free slot ──► remove       │
//! │  table_availability / customer_reservations / logs ──► read-only       │
//! │                                                                         │
//! │  every op ──► one audit line (success or failure) ──► LogSink          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants, After Every Operation
//! 1. A table is available ⇔ no active record references it
//! 2. No two active records share a table
//! 3. No two active records share an identifier
//! 4. Every stored date/time passed validation at write time
//!
//! Every precondition is checked before any state changes. The one place
//! state moves mid-check, the release-then-claim table move in
//! [`ReservationBook::update_reservation`], restores the old slot before
//! the error surfaces.
//!
//! The book is a plain owned value: whoever runs a session constructs one
//! and passes it down. One session, one book, one owner.

use std::sync::Arc;

use crate::error::{ReservationError, ReservationResult};
use crate::log::{format_entry, LogSink, NullSink};
use crate::moment::ReferenceMoment;
use crate::types::{Actor, Reservation, ReservationRequest, ReservationUpdate, TableStatus};
use crate::validation::{
    validate_date, validate_party_size, validate_phone, validate_reservation_id, validate_time,
};
use crate::DEFAULT_TABLE_COUNT;

// =============================================================================
// Reservation Book
// =============================================================================

/// Owns the table pool and every active reservation.
pub struct ReservationBook {
    /// Occupancy flags, `true` = available, indexed 0..N-1.
    tables: Vec<bool>,

    /// Active records, in creation order.
    reservations: Vec<Reservation>,

    /// Counter behind issued identifiers; only ever moves forward.
    next_id: u64,

    /// The frozen moment date/time validation compares against.
    moment: ReferenceMoment,

    /// Audit destination. Every operation appends one line here, on
    /// success and on failure alike.
    sink: Arc<dyn LogSink>,
}

impl ReservationBook {
    /// Creates a book with no audit trail (lines are dropped).
    pub fn new(table_count: usize, moment: ReferenceMoment) -> Self {
        ReservationBook::with_sink(table_count, moment, Arc::new(NullSink))
    }

    /// Creates a book that appends audit lines to `sink`.
    pub fn with_sink(
        table_count: usize,
        moment: ReferenceMoment,
        sink: Arc<dyn LogSink>,
    ) -> Self {
        ReservationBook {
            tables: vec![true; table_count],
            reservations: Vec::new(),
            next_id: 1,
            moment,
            sink,
        }
    }

    // =========================================================================
    // Mutating Operations
    // =========================================================================

    /// Books a table and issues a fresh reservation identifier.
    ///
    /// ## Checks, In Order
    /// 1. Phone, party size, date, time, each through its validator
    /// 2. Table index within the pool
    /// 3. Table currently available
    ///
    /// Nothing is mutated until every check passes. On success the slot
    /// is claimed, the next `ID <n>A` identifier is issued, the record is
    /// appended, and the zero-based table index is returned.
    pub fn reserve_table(
        &mut self,
        actor: &Actor,
        request: &ReservationRequest,
    ) -> ReservationResult<usize> {
        let result = self.try_reserve(request);
        let line = match &result {
            Ok(table) => format!(
                "Reserved table #{} for {} on {} at {}",
                *table + 1,
                request.party_size,
                request.date,
                request.time
            ),
            Err(err) => format!("Failed to reserve table: {err}"),
        };
        self.audit(actor, &line);
        result
    }

    fn try_reserve(&mut self, request: &ReservationRequest) -> ReservationResult<usize> {
        validate_phone(&request.phone_number)?;
        validate_party_size(request.party_size)?;
        validate_date(&request.date, &self.moment)?;
        validate_time(&request.time, &request.date, &self.moment)?;
        if request.table_index >= self.tables.len() {
            return Err(ReservationError::TableOutOfRange {
                table: request.table_index,
                count: self.tables.len(),
            });
        }
        if !self.tables[request.table_index] {
            return Err(ReservationError::TableUnavailable {
                table: request.table_index,
            });
        }

        self.tables[request.table_index] = false;
        let id = self.generate_id();
        self.reservations.push(Reservation {
            id,
            customer_name: request.customer_name.clone(),
            phone_number: request.phone_number.clone(),
            party_size: request.party_size,
            date: request.date.clone(),
            time: request.time.clone(),
            table_index: request.table_index,
        });
        Ok(request.table_index)
    }

    /// Cancels an active reservation and frees its table.
    ///
    /// Authorization is the `(id, customer_name)` pair; an id alone
    /// never cancels another customer's booking. Removal matches the
    /// pair too, so no dangling duplicate can survive.
    pub fn cancel_reservation(
        &mut self,
        actor: &Actor,
        id: &str,
        customer_name: &str,
    ) -> ReservationResult<()> {
        let result = self.try_cancel(id, customer_name);
        let line = match &result {
            Ok(()) => format!("Cancelled reservation {id}"),
            Err(err) => format!("Failed to cancel reservation: {err}"),
        };
        self.audit(actor, &line);
        result
    }

    fn try_cancel(&mut self, id: &str, customer_name: &str) -> ReservationResult<()> {
        validate_reservation_id(id)?;
        let table = self
            .reservations
            .iter()
            .find(|r| r.id == id && r.customer_name == customer_name)
            .map(|r| r.table_index)
            .ok_or_else(|| ReservationError::NotFound {
                id: id.to_string(),
                customer: customer_name.to_string(),
            })?;

        self.tables[table] = true;
        self.reservations
            .retain(|r| !(r.id == id && r.customer_name == customer_name));
        Ok(())
    }

    /// Applies a partial update to an active reservation.
    ///
    /// ## Checks, In Order
    /// 1. `(id, customer_name)` names an active record
    /// 2. `new_id` is well-shaped and unused by any *other* record
    /// 3. `new_phone` / `new_party_size` / `new_date` / `new_time` pass
    ///    their validators; the time is checked against `new_date` when
    ///    both are given, otherwise against the reference date
    /// 4. `new_table` is in range and claimable
    ///
    /// The table move is release-then-claim: the old slot is freed, the
    /// new one claimed, and a failed claim restores the old slot before
    /// the error surfaces. A record may always re-claim its own table.
    ///
    /// Fields absent from `update` keep their prior values.
    pub fn update_reservation(
        &mut self,
        actor: &Actor,
        id: &str,
        customer_name: &str,
        update: &ReservationUpdate,
    ) -> ReservationResult<()> {
        let result = self.try_update(id, customer_name, update);
        let line = match &result {
            Ok(()) => format!("Updated reservation {id}"),
            Err(err) => format!("Failed to update reservation: {err}"),
        };
        self.audit(actor, &line);
        result
    }

    fn try_update(
        &mut self,
        id: &str,
        customer_name: &str,
        update: &ReservationUpdate,
    ) -> ReservationResult<()> {
        // A shape-invalid id can never name an active record, so both
        // halves of the ownership check collapse into NotFound.
        let position = if validate_reservation_id(id).is_ok() {
            self.reservations
                .iter()
                .position(|r| r.id == id && r.customer_name == customer_name)
        } else {
            None
        };
        let position = position.ok_or_else(|| ReservationError::NotFound {
            id: id.to_string(),
            customer: customer_name.to_string(),
        })?;

        if let Some(new_id) = &update.new_id {
            validate_reservation_id(new_id)?;
            if self.reservation_id_exists(new_id, Some(id)) {
                return Err(ReservationError::Conflict { id: new_id.clone() });
            }
        }
        if let Some(new_phone) = &update.new_phone {
            validate_phone(new_phone)?;
        }
        if let Some(new_party_size) = update.new_party_size {
            validate_party_size(new_party_size)?;
        }
        if let Some(new_date) = &update.new_date {
            validate_date(new_date, &self.moment)?;
        }
        if let Some(new_time) = &update.new_time {
            let against = update.new_date.as_deref().unwrap_or(self.moment.date());
            validate_time(new_time, against, &self.moment)?;
        }

        if let Some(new_table) = update.new_table {
            if new_table >= self.tables.len() {
                return Err(ReservationError::TableOutOfRange {
                    table: new_table,
                    count: self.tables.len(),
                });
            }
            let old_table = self.reservations[position].table_index;
            self.tables[old_table] = true;
            if !self.tables[new_table] {
                self.tables[old_table] = false;
                return Err(ReservationError::TableUnavailable { table: new_table });
            }
            self.tables[new_table] = false;
            self.reservations[position].table_index = new_table;
        }

        let record = &mut self.reservations[position];
        if let Some(new_id) = &update.new_id {
            record.id = new_id.clone();
        }
        if let Some(new_name) = &update.new_name {
            record.customer_name = new_name.clone();
        }
        if let Some(new_phone) = &update.new_phone {
            record.phone_number = new_phone.clone();
        }
        if let Some(new_party_size) = update.new_party_size {
            record.party_size = new_party_size;
        }
        if let Some(new_date) = &update.new_date {
            record.date = new_date.clone();
        }
        if let Some(new_time) = &update.new_time {
            record.time = new_time.clone();
        }
        Ok(())
    }

    // =========================================================================
    // Read-Only Operations
    // =========================================================================

    /// Present occupancy of every slot. Never fails.
    pub fn table_availability(&self) -> Vec<TableStatus> {
        self.tables
            .iter()
            .enumerate()
            .map(|(index, &available)| TableStatus { index, available })
            .collect()
    }

    /// Active reservations held under `customer_name`, in creation order.
    pub fn customer_reservations(&self, customer_name: &str) -> Vec<&Reservation> {
        self.reservations
            .iter()
            .filter(|r| r.customer_name == customer_name)
            .collect()
    }

    /// True when `customer_name` holds at least one active reservation.
    pub fn has_reservations(&self, customer_name: &str) -> bool {
        self.reservations
            .iter()
            .any(|r| r.customer_name == customer_name)
    }

    /// True when an active reservation other than `exclude` carries `id`.
    pub fn reservation_id_exists(&self, id: &str, exclude: Option<&str>) -> bool {
        self.reservations
            .iter()
            .filter(|r| exclude != Some(r.id.as_str()))
            .any(|r| r.id == id)
    }

    /// Every audit line recorded so far, in insertion order.
    pub fn logs(&self) -> Vec<String> {
        self.sink.read_all()
    }

    /// Number of slots in the pool.
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Issues the next `ID <n>A` identifier.
    ///
    /// The counter only moves forward. A candidate can collide with an
    /// active id only when an earlier update manually renamed a record
    /// onto a future counter value; the loop skips past any such id.
    fn generate_id(&mut self) -> String {
        loop {
            let candidate = format!("ID {}A", self.next_id);
            self.next_id += 1;
            if !self.reservation_id_exists(&candidate, None) {
                return candidate;
            }
        }
    }

    /// Appends one audit line tagged with the acting role and username.
    fn audit(&self, actor: &Actor, message: &str) {
        self.sink.append(&format_entry(&self.moment, actor, message));
    }
}

impl Default for ReservationBook {
    /// Ten tables, the default reference moment, no audit trail.
    fn default() -> Self {
        ReservationBook::new(DEFAULT_TABLE_COUNT, ReferenceMoment::default())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::log::MemorySink;
    use crate::types::Role;

    fn desk() -> Actor {
        Actor::new(Role::Customer, "desk")
    }

    fn request_for(name: &str, table: usize) -> ReservationRequest {
        ReservationRequest {
            customer_name: name.to_string(),
            phone_number: "123-456-7890".to_string(),
            party_size: 2,
            date: "2025-06-01".to_string(),
            time: "18:30".to_string(),
            table_index: table,
        }
    }

    fn booked_count(book: &ReservationBook) -> usize {
        book.tables.iter().filter(|&&available| !available).count()
    }

    /// Checks the #3 data-model invariants directly against the fields.
    fn assert_book_invariants(book: &ReservationBook) {
        for (index, &available) in book.tables.iter().enumerate() {
            let holders = book
                .reservations
                .iter()
                .filter(|r| r.table_index == index)
                .count();
            assert!(holders <= 1, "table {index} held by {holders} records");
            assert_eq!(
                available,
                holders == 0,
                "table {index} occupancy flag out of step with records"
            );
        }
        for (i, a) in book.reservations.iter().enumerate() {
            for b in &book.reservations[i + 1..] {
                assert_ne!(a.id, b.id, "duplicate active id {}", a.id);
            }
        }
    }

    #[test]
    fn test_reserve_claims_table_and_issues_id() {
        let mut book = ReservationBook::default();
        let table = book.reserve_table(&desk(), &request_for("Alice", 3)).unwrap();
        assert_eq!(table, 3);
        assert_eq!(booked_count(&book), 1);

        let held = book.customer_reservations("Alice");
        assert_eq!(held.len(), 1);
        assert_eq!(held[0].id, "ID 1A");
        assert_eq!(held[0].table_index, 3);
        assert_book_invariants(&book);
    }

    #[test]
    fn test_reserve_rejects_each_invalid_field() {
        let mut book = ReservationBook::default();

        let mut bad = request_for("Alice", 0);
        bad.phone_number = "1234567890".to_string();
        assert!(matches!(
            book.reserve_table(&desk(), &bad),
            Err(ReservationError::Validation(ValidationError::Phone))
        ));

        let mut bad = request_for("Alice", 0);
        bad.party_size = 0;
        assert!(matches!(
            book.reserve_table(&desk(), &bad),
            Err(ReservationError::Validation(ValidationError::PartySize))
        ));

        let mut bad = request_for("Alice", 0);
        bad.date = "2024-01-01".to_string();
        assert!(matches!(
            book.reserve_table(&desk(), &bad),
            Err(ReservationError::Validation(ValidationError::Date))
        ));

        // Same date as the reference moment: the time check kicks in.
        let mut bad = request_for("Alice", 0);
        bad.date = "2025-05-19".to_string();
        bad.time = "08:00".to_string();
        assert!(matches!(
            book.reserve_table(&desk(), &bad),
            Err(ReservationError::Validation(ValidationError::Time))
        ));

        // Nothing was mutated by any failed attempt.
        assert_eq!(booked_count(&book), 0);
        assert!(book.customer_reservations("Alice").is_empty());
        assert_book_invariants(&book);
    }

    #[test]
    fn test_reserve_rejects_out_of_range_table() {
        let mut book = ReservationBook::default();
        let err = book
            .reserve_table(&desk(), &request_for("Alice", 10))
            .unwrap_err();
        assert!(matches!(
            err,
            ReservationError::TableOutOfRange { table: 10, count: 10 }
        ));
        assert_eq!(booked_count(&book), 0);
    }

    #[test]
    fn test_double_booking_fails_without_state_change() {
        let mut book = ReservationBook::default();
        book.reserve_table(&desk(), &request_for("Alice", 5)).unwrap();

        let before = booked_count(&book);
        let err = book
            .reserve_table(&desk(), &request_for("Bob", 5))
            .unwrap_err();
        assert!(matches!(err, ReservationError::TableUnavailable { table: 5 }));
        assert_eq!(booked_count(&book), before);
        assert!(book.customer_reservations("Bob").is_empty());
        assert_book_invariants(&book);
    }

    #[test]
    fn test_full_house() {
        let mut book = ReservationBook::default();
        for table in 0..book.table_count() {
            book.reserve_table(&desk(), &request_for("Alice", table)).unwrap();
        }
        assert!(book.table_availability().iter().all(|t| !t.available));
        assert_book_invariants(&book);
    }

    #[test]
    fn test_cancel_frees_table_and_removes_record() {
        let mut book = ReservationBook::default();
        book.reserve_table(&desk(), &request_for("Alice", 2)).unwrap();
        assert_eq!(booked_count(&book), 1);

        book.cancel_reservation(&desk(), "ID 1A", "Alice").unwrap();
        assert_eq!(booked_count(&book), 0);
        assert!(!book.has_reservations("Alice"));
        assert_book_invariants(&book);
    }

    #[test]
    fn test_cancel_requires_matching_customer() {
        let mut book = ReservationBook::default();
        book.reserve_table(&desk(), &request_for("Alice", 2)).unwrap();

        let err = book
            .cancel_reservation(&desk(), "ID 1A", "Mallory")
            .unwrap_err();
        assert!(matches!(err, ReservationError::NotFound { .. }));
        assert_eq!(booked_count(&book), 1);
        assert!(book.has_reservations("Alice"));
    }

    #[test]
    fn test_cancel_rejects_malformed_id() {
        let mut book = ReservationBook::default();
        let err = book.cancel_reservation(&desk(), "1A", "Alice").unwrap_err();
        assert!(matches!(
            err,
            ReservationError::Validation(ValidationError::ReservationId)
        ));
    }

    #[test]
    fn test_update_table_only_preserves_other_fields() {
        let mut book = ReservationBook::default();
        book.reserve_table(&desk(), &request_for("Alice", 2)).unwrap();

        let update = ReservationUpdate {
            new_table: Some(7),
            ..Default::default()
        };
        book.update_reservation(&desk(), "ID 1A", "Alice", &update)
            .unwrap();

        let held = book.customer_reservations("Alice");
        assert_eq!(held[0].customer_name, "Alice");
        assert_eq!(held[0].phone_number, "123-456-7890");
        assert_eq!(held[0].party_size, 2);
        assert_eq!(held[0].date, "2025-06-01");
        assert_eq!(held[0].time, "18:30");
        assert_eq!(held[0].table_index, 7);

        // Exactly one slot flipped.
        let availability = book.table_availability();
        assert!(availability[2].available);
        assert!(!availability[7].available);
        assert_eq!(booked_count(&book), 1);
        assert_book_invariants(&book);
    }

    #[test]
    fn test_update_self_claim_is_permitted() {
        let mut book = ReservationBook::default();
        book.reserve_table(&desk(), &request_for("Alice", 4)).unwrap();

        let update = ReservationUpdate {
            new_table: Some(4),
            ..Default::default()
        };
        assert!(book
            .update_reservation(&desk(), "ID 1A", "Alice", &update)
            .is_ok());
        assert!(!book.table_availability()[4].available);
        assert_eq!(booked_count(&book), 1);
        assert_book_invariants(&book);
    }

    #[test]
    fn test_update_failed_claim_restores_old_slot() {
        let mut book = ReservationBook::default();
        book.reserve_table(&desk(), &request_for("Alice", 1)).unwrap(); // ID 1A
        book.reserve_table(&desk(), &request_for("Bob", 2)).unwrap(); // ID 2A

        let update = ReservationUpdate {
            new_table: Some(2),
            ..Default::default()
        };
        let err = book
            .update_reservation(&desk(), "ID 1A", "Alice", &update)
            .unwrap_err();
        assert!(matches!(err, ReservationError::TableUnavailable { table: 2 }));

        // Alice's old slot is booked again; the book reads as before the call.
        let availability = book.table_availability();
        assert!(!availability[1].available);
        assert!(!availability[2].available);
        assert_eq!(book.customer_reservations("Alice")[0].table_index, 1);
        assert_book_invariants(&book);
    }

    #[test]
    fn test_update_rename_conflicts_and_self_rename() {
        let mut book = ReservationBook::default();
        book.reserve_table(&desk(), &request_for("Alice", 0)).unwrap(); // ID 1A
        book.reserve_table(&desk(), &request_for("Bob", 1)).unwrap(); // ID 2A

        let stolen = ReservationUpdate {
            new_id: Some("ID 2A".to_string()),
            ..Default::default()
        };
        let err = book
            .update_reservation(&desk(), "ID 1A", "Alice", &stolen)
            .unwrap_err();
        assert!(matches!(err, ReservationError::Conflict { .. }));

        // Renaming a record to its own id is not a conflict.
        let same = ReservationUpdate {
            new_id: Some("ID 1A".to_string()),
            ..Default::default()
        };
        assert!(book
            .update_reservation(&desk(), "ID 1A", "Alice", &same)
            .is_ok());

        let malformed = ReservationUpdate {
            new_id: Some("first!".to_string()),
            ..Default::default()
        };
        let err = book
            .update_reservation(&desk(), "ID 1A", "Alice", &malformed)
            .unwrap_err();
        assert!(matches!(
            err,
            ReservationError::Validation(ValidationError::ReservationId)
        ));
    }

    #[test]
    fn test_update_unknown_pair_is_not_found() {
        let mut book = ReservationBook::default();
        let none = ReservationUpdate::default();

        let err = book
            .update_reservation(&desk(), "ID 9A", "Alice", &none)
            .unwrap_err();
        assert!(matches!(err, ReservationError::NotFound { .. }));

        // A malformed current id also reads as NotFound: it cannot name
        // any active record.
        let err = book
            .update_reservation(&desk(), "9A", "Alice", &none)
            .unwrap_err();
        assert!(matches!(err, ReservationError::NotFound { .. }));
    }

    #[test]
    fn test_update_validates_new_fields() {
        let mut book = ReservationBook::default();
        book.reserve_table(&desk(), &request_for("Alice", 0)).unwrap();

        let bad_phone = ReservationUpdate {
            new_phone: Some("nope".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            book.update_reservation(&desk(), "ID 1A", "Alice", &bad_phone),
            Err(ReservationError::Validation(ValidationError::Phone))
        ));

        let bad_size = ReservationUpdate {
            new_party_size: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            book.update_reservation(&desk(), "ID 1A", "Alice", &bad_size),
            Err(ReservationError::Validation(ValidationError::PartySize))
        ));

        let bad_date = ReservationUpdate {
            new_date: Some("1999-01-01".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            book.update_reservation(&desk(), "ID 1A", "Alice", &bad_date),
            Err(ReservationError::Validation(ValidationError::Date))
        ));

        // A new time alone is measured against the reference date, so a
        // morning slot on the reference day is already gone.
        let bad_time = ReservationUpdate {
            new_time: Some("08:00".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            book.update_reservation(&desk(), "ID 1A", "Alice", &bad_time),
            Err(ReservationError::Validation(ValidationError::Time))
        ));

        // The same time paired with a future date is fine.
        let moved = ReservationUpdate {
            new_date: Some("2025-06-02".to_string()),
            new_time: Some("08:00".to_string()),
            ..Default::default()
        };
        assert!(book
            .update_reservation(&desk(), "ID 1A", "Alice", &moved)
            .is_ok());

        let record = book.customer_reservations("Alice")[0];
        assert_eq!(record.date, "2025-06-02");
        assert_eq!(record.time, "08:00");
    }

    #[test]
    fn test_generated_ids_are_valid_and_unique() {
        let mut book = ReservationBook::default();
        for table in 0..5 {
            book.reserve_table(&desk(), &request_for("Alice", table)).unwrap();
        }
        book.cancel_reservation(&desk(), "ID 3A", "Alice").unwrap();
        book.reserve_table(&desk(), &request_for("Alice", 9)).unwrap();

        let ids: Vec<String> = book
            .customer_reservations("Alice")
            .iter()
            .map(|r| r.id.clone())
            .collect();
        for id in &ids {
            assert!(validate_reservation_id(id).is_ok(), "bad issued id {id}");
        }

        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());

        // The counter does not reuse the cancelled record's number.
        assert!(ids.contains(&"ID 6A".to_string()));
        assert!(!ids.contains(&"ID 3A".to_string()));
    }

    #[test]
    fn test_manual_rename_forces_generator_skip() {
        let mut book = ReservationBook::default();
        book.reserve_table(&desk(), &request_for("Alice", 0)).unwrap(); // ID 1A

        // Rename onto the value the counter would issue next.
        let rename = ReservationUpdate {
            new_id: Some("ID 2A".to_string()),
            ..Default::default()
        };
        book.update_reservation(&desk(), "ID 1A", "Alice", &rename)
            .unwrap();

        book.reserve_table(&desk(), &request_for("Bob", 1)).unwrap();
        assert_eq!(book.customer_reservations("Bob")[0].id, "ID 3A");
        assert_book_invariants(&book);
    }

    #[test]
    fn test_alice_round_trip() {
        let mut book = ReservationBook::default();
        let request = ReservationRequest {
            customer_name: "Alice".to_string(),
            phone_number: "123-456-7890".to_string(),
            party_size: 2,
            date: "2025-06-01".to_string(),
            time: "19:00".to_string(),
            table_index: 3,
        };
        assert_eq!(book.reserve_table(&desk(), &request).unwrap(), 3);

        let held = book.customer_reservations("Alice");
        assert_eq!(held.len(), 1);
        let expected = Reservation {
            id: "ID 1A".to_string(),
            customer_name: "Alice".to_string(),
            phone_number: "123-456-7890".to_string(),
            party_size: 2,
            date: "2025-06-01".to_string(),
            time: "19:00".to_string(),
            table_index: 3,
        };
        assert_eq!(held[0], &expected);
    }

    #[test]
    fn test_reservation_id_exists_honors_exclusion() {
        let mut book = ReservationBook::default();
        book.reserve_table(&desk(), &request_for("Alice", 0)).unwrap(); // ID 1A
        book.reserve_table(&desk(), &request_for("Bob", 1)).unwrap(); // ID 2A

        assert!(book.reservation_id_exists("ID 1A", None));
        assert!(!book.reservation_id_exists("ID 1A", Some("ID 1A")));
        assert!(book.reservation_id_exists("ID 2A", Some("ID 1A")));
        assert!(!book.reservation_id_exists("ID 9A", None));
    }

    #[test]
    fn test_empty_book_views() {
        let book = ReservationBook::default();
        assert_eq!(book.table_count(), 10);
        assert!(book.table_availability().iter().all(|t| t.available));
        assert!(book.customer_reservations("Nobody").is_empty());
        assert!(!book.has_reservations("Nobody"));
        assert!(book.logs().is_empty());
    }

    #[test]
    fn test_audit_lines_on_success_and_failure() {
        let sink = Arc::new(MemorySink::new());
        let mut book =
            ReservationBook::with_sink(10, ReferenceMoment::default(), sink.clone());
        let alice = Actor::new(Role::Customer, "alice");

        book.reserve_table(&alice, &request_for("Alice", 3)).unwrap();
        let _ = book.reserve_table(&alice, &request_for("Bob", 3)); // fails, still logged

        let lines = book.logs();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "[2025-05-19 22:19:00] [Customer: alice] Reserved table #4 for 2 on 2025-06-01 at 18:30"
        );
        assert!(lines[1].starts_with("[2025-05-19 22:19:00] [Customer: alice]"));
        assert!(lines[1].contains("Failed to reserve table"));

        // The sink the book reads back is the one it writes to.
        assert_eq!(sink.read_all(), lines);
    }

    #[test]
    fn test_audit_lines_tag_the_true_actor() {
        let sink = Arc::new(MemorySink::new());
        let mut book = ReservationBook::with_sink(10, ReferenceMoment::default(), sink);

        let alice = Actor::new(Role::Customer, "alice");
        book.reserve_table(&alice, &request_for("Alice", 0)).unwrap();

        // An admin cancelling on Alice's behalf is logged as the admin.
        let admin = Actor::new(Role::Admin, "admin");
        book.cancel_reservation(&admin, "ID 1A", "Alice").unwrap();

        let lines = book.logs();
        assert!(lines[0].contains("[Customer: alice]"));
        assert!(lines[1].contains("[Admin: admin] Cancelled reservation ID 1A"));
    }

    // =========================================================================
    // Property Tests
    // =========================================================================
    // Random operation interleavings; the occupancy/record bijection and
    // id uniqueness must hold after every single step.

    mod properties {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Reserve { name: usize, table: usize },
            Cancel { name: usize, pick: usize },
            Move { name: usize, pick: usize, table: usize },
        }

        fn arb_op() -> impl Strategy<Value = Op> {
            prop_oneof![
                (0..3usize, 0..12usize)
                    .prop_map(|(name, table)| Op::Reserve { name, table }),
                (0..3usize, 0..8usize).prop_map(|(name, pick)| Op::Cancel { name, pick }),
                (0..3usize, 0..8usize, 0..12usize)
                    .prop_map(|(name, pick, table)| Op::Move { name, pick, table }),
            ]
        }

        fn held_ids(book: &ReservationBook, name: &str) -> Vec<String> {
            book.customer_reservations(name)
                .iter()
                .map(|r| r.id.clone())
                .collect()
        }

        proptest! {
            #[test]
            fn occupancy_always_matches_active_records(
                ops in proptest::collection::vec(arb_op(), 1..50)
            ) {
                let names = ["Ana", "Ben", "Cho"];
                let mut book = ReservationBook::default();
                let actor = desk();

                for op in ops {
                    match op {
                        Op::Reserve { name, table } => {
                            // Table may be out of range: failure paths are
                            // part of the property.
                            let _ = book.reserve_table(
                                &actor,
                                &request_for(names[name], table),
                            );
                        }
                        Op::Cancel { name, pick } => {
                            let name = names[name];
                            let ids = held_ids(&book, name);
                            if let Some(id) = ids.get(pick % ids.len().max(1)) {
                                let _ = book.cancel_reservation(&actor, id, name);
                            }
                        }
                        Op::Move { name, pick, table } => {
                            let name = names[name];
                            let ids = held_ids(&book, name);
                            if let Some(id) = ids.get(pick % ids.len().max(1)) {
                                let update = ReservationUpdate {
                                    new_table: Some(table),
                                    ..Default::default()
                                };
                                let _ = book.update_reservation(&actor, id, name, &update);
                            }
                        }
                    }
                    assert_book_invariants(&book);
                }
            }
        }
    }
}
