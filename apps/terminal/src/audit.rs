//! # Session-Side Audit Lines
//!
//! The book records its own operations (successes and failures alike);
//! the terminal adds the events only it can see: who logged in, and which
//! raw field inputs were rejected before an operation was ever attempted.
//! Both halves write through the same sink, so the log reads as one
//! chronological story.

use std::sync::Arc;

use maitre_core::log::format_entry;
use maitre_core::{Actor, LogSink, ReferenceMoment};

/// Stamps and appends the terminal's own audit lines.
pub struct AuditTrail {
    sink: Arc<dyn LogSink>,
    moment: ReferenceMoment,
}

impl AuditTrail {
    pub fn new(sink: Arc<dyn LogSink>, moment: ReferenceMoment) -> Self {
        AuditTrail { sink, moment }
    }

    /// Records a successful login under the actor's own identity.
    pub fn logged_in(&self, actor: &Actor) {
        self.sink
            .append(&format_entry(&self.moment, actor, "Logged in"));
    }

    /// Records one rejected field input during an interactive flow, e.g.
    /// `Failed to reserve table: phone number must match XXX-XXX-XXXX`.
    pub fn rejected_input(&self, actor: &Actor, action: &str, reason: &str) {
        let message = format!("{action}: {reason}");
        self.sink
            .append(&format_entry(&self.moment, actor, &message));
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use maitre_core::{MemorySink, Role};

    #[test]
    fn test_login_line_is_fully_stamped() {
        let sink = Arc::new(MemorySink::new());
        let trail = AuditTrail::new(sink.clone(), ReferenceMoment::default());

        trail.logged_in(&Actor::new(Role::Admin, "admin"));

        assert_eq!(
            sink.read_all(),
            vec!["[2025-05-19 22:19:00] [Admin: admin] Logged in".to_string()]
        );
    }

    #[test]
    fn test_rejected_input_names_action_and_reason() {
        let sink = Arc::new(MemorySink::new());
        let trail = AuditTrail::new(sink.clone(), ReferenceMoment::new("2025-07-01", 9, 5));

        trail.rejected_input(
            &Actor::new(Role::Customer, "alice"),
            "Failed to reserve table",
            "invalid table number",
        );

        assert_eq!(
            sink.read_all(),
            vec![
                "[2025-07-01 09:05:00] [Customer: alice] Failed to reserve table: \
                 invalid table number"
                    .to_string()
            ]
        );
    }
}
