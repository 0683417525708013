//! # Menus & Sessions
//!
//! The outer shape of the desk: role selection, logins, and the per-role
//! menu loop. Menus are never hand-written per role; they are rendered
//! straight off `Role::permissions()`, so the menu and the capability
//! table cannot drift apart.
//!
//! ```text
//!   [Role Selection] ──► login ──► [Role Menu - username] ──► action
//!         ▲                              │        ▲             │
//!         │                              │        └─────────────┘
//!         └────────── logout ◄───────────┘
//! ```
//!
//! The reservation and account flows themselves live in [`crate::actions`];
//! this module only decides *which* flow runs next.

use std::io::{self, BufRead, Write};

use tracing::debug;

use maitre_core::{Actor, Permission, ReferenceMoment, ReservationBook, Role};

use crate::accounts::{AccountDirectory, AccountKind};
use crate::actions;
use crate::audit::AuditTrail;
use crate::prompt::Prompter;

/// Fixed administrator credentials. There is exactly one admin and it is
/// not stored in the account directory.
pub(crate) const ADMIN_USERNAME: &str = "admin";
pub(crate) const ADMIN_PASSWORD: &str = "admin123";

/// One interactive desk session: the prompt pair plus everything the
/// menus act on.
pub struct Session<R, W> {
    pub(crate) prompt: Prompter<R, W>,
    pub(crate) book: ReservationBook,
    pub(crate) accounts: AccountDirectory,
    pub(crate) audit: AuditTrail,
    pub(crate) moment: ReferenceMoment,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(
        prompt: Prompter<R, W>,
        book: ReservationBook,
        accounts: AccountDirectory,
        audit: AuditTrail,
        moment: ReferenceMoment,
    ) -> Self {
        Session {
            prompt,
            book,
            accounts,
            audit,
            moment,
        }
    }

    /// Top-level loop: pick a role, log in, run that role's menu, and
    /// return to role selection on logout. Choosing Exit ends the session.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.prompt.say("\n[Role Selection]")?;
            self.prompt.say("1. Admin")?;
            self.prompt.say("2. Receptionist")?;
            self.prompt.say("3. Customer")?;
            self.prompt.say("4. Exit")?;

            match self.prompt.numeric("Choose role: ", 1, 4)? {
                1 => {
                    let actor = self.admin_login()?;
                    self.menu_loop(&actor)?;
                }
                2 => {
                    let actor = self.receptionist_login()?;
                    self.menu_loop(&actor)?;
                }
                3 => {
                    let actor = self.customer_entry()?;
                    self.menu_loop(&actor)?;
                }
                _ => return Ok(()),
            }
        }
    }

    fn admin_login(&mut self) -> io::Result<Actor> {
        loop {
            let username = self.prompt.line("Enter Admin username: ")?;
            let password = self.prompt.line("Enter Admin password: ")?;
            if username == ADMIN_USERNAME && password == ADMIN_PASSWORD {
                let actor = Actor::new(Role::Admin, username);
                self.audit.logged_in(&actor);
                return Ok(actor);
            }
            self.prompt
                .say("Invalid admin credentials. Please try again.")?;
        }
    }

    fn receptionist_login(&mut self) -> io::Result<Actor> {
        loop {
            let username = self.prompt.line("Enter Receptionist username: ")?;
            let password = self.prompt.line("Enter password: ")?;
            if self
                .accounts
                .verify(AccountKind::Receptionist, &username, &password)
            {
                let actor = Actor::new(Role::Receptionist, username);
                self.audit.logged_in(&actor);
                return Ok(actor);
            }
            self.prompt
                .say("Invalid receptionist credentials. Please try again.")?;
        }
    }

    /// Customers either create an account (and are logged straight in) or
    /// log in to an existing one.
    fn customer_entry(&mut self) -> io::Result<Actor> {
        self.prompt.say("\n1. Create Customer Account")?;
        self.prompt.say("2. Login to Customer Account")?;
        let choice = self.prompt.numeric("Choice: ", 1, 2)?;

        let actor = if choice == 1 {
            loop {
                let username = self.prompt.line("Enter username: ")?;
                if self.accounts.contains(AccountKind::Customer, &username) {
                    self.prompt
                        .say("Account already exists. Please choose a different username.")?;
                    continue;
                }
                let password = self.prompt.line("Enter password: ")?;
                if self
                    .accounts
                    .register(AccountKind::Customer, &username, &password)
                {
                    self.prompt.say("Customer account created.")?;
                    break Actor::new(Role::Customer, username);
                }
            }
        } else {
            loop {
                let username = self.prompt.line("Enter username: ")?;
                let password = self.prompt.line("Enter password: ")?;
                if self
                    .accounts
                    .verify(AccountKind::Customer, &username, &password)
                {
                    break Actor::new(Role::Customer, username);
                }
                self.prompt.say("Invalid credentials. Please try again.")?;
            }
        };

        self.audit.logged_in(&actor);
        Ok(actor)
    }

    /// Renders the role's menu off its permission table and dispatches
    /// until the user confirms a logout.
    fn menu_loop(&mut self, actor: &Actor) -> io::Result<()> {
        let permissions = actor.role.permissions();
        loop {
            self.prompt
                .say(&format!("\n[{} Menu - {}]", actor.role.label(), actor.username))?;
            for (index, permission) in permissions.iter().enumerate() {
                self.prompt
                    .say(&format!("{}. {}", index + 1, permission.label()))?;
            }
            self.prompt
                .say(&format!("{}. Exit", permissions.len() + 1))?;

            let choice = self.prompt.numeric("Choice: ", 1, (permissions.len() + 1) as i64)?;
            let index = (choice - 1) as usize;
            if index == permissions.len() {
                if self.prompt.confirm("Logout? Yes or No: ")? {
                    return Ok(());
                }
                continue;
            }
            self.dispatch(actor, permissions[index])?;
        }
    }

    fn dispatch(&mut self, actor: &Actor, permission: Permission) -> io::Result<()> {
        debug!(username = actor.username.as_str(), ?permission, "menu action");
        match permission {
            Permission::ViewOwnReservations => actions::view_reservations(self, &actor.username),
            Permission::ReserveTable => actions::reserve_table(self, actor),
            Permission::ViewAvailability => actions::view_availability(self),
            Permission::UpdateReservation => actions::update_reservation(self, actor),
            Permission::CancelReservation => actions::cancel_reservation(self, actor),
            Permission::ViewLogs => actions::view_logs(self),
            Permission::CreateReceptionist => actions::create_receptionist(self),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
//
// These drive complete sessions: a scripted stdin, a real book, a shared
// in-memory sink, and assertions over everything the session printed.

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;
    use std::sync::Arc;

    use maitre_core::{LogSink, MemorySink, DEFAULT_TABLE_COUNT};

    struct FinishedSession {
        output: String,
        log_lines: Vec<String>,
        result: io::Result<()>,
    }

    fn run_script(script: &str) -> FinishedSession {
        let sink = Arc::new(MemorySink::new());
        let shared: Arc<dyn LogSink> = sink.clone();
        let moment = ReferenceMoment::default();

        let book = ReservationBook::with_sink(DEFAULT_TABLE_COUNT, moment.clone(), shared.clone());
        let audit = AuditTrail::new(shared, moment.clone());
        let prompter = Prompter::new(Cursor::new(script.to_string()), Vec::new());

        let mut session = Session::new(prompter, book, AccountDirectory::new(), audit, moment);
        let result = session.run();
        let output = String::from_utf8(session.prompt.into_writer()).unwrap();

        FinishedSession {
            output,
            log_lines: sink.read_all(),
            result,
        }
    }

    #[test]
    fn test_customer_reserves_and_views_own_booking() {
        // Create an account, reserve table 4, view it, log out, exit.
        let script = "3\n1\nalice\npw\n2\n123-456-7890\n2\n2025-06-01\n19:00\n4\n1\n6\nyes\n4\n";
        let session = run_script(script);

        session.result.unwrap();
        assert!(session.output.contains("[Customer Menu - alice]"));
        assert!(session.output.contains("Reserved Table #4 successfully!"));
        assert!(session.output.contains(
            "ID: ID 1A, Name: alice, Contact: 123-456-7890, Party Size: 2, \
             Date: 2025-06-01, Time: 19:00, Table: 4"
        ));

        assert!(session
            .log_lines
            .contains(&"[2025-05-19 22:19:00] [Customer: alice] Logged in".to_string()));
        assert!(session.log_lines.contains(
            &"[2025-05-19 22:19:00] [Customer: alice] Reserved table #4 for 2 \
              on 2025-06-01 at 19:00"
                .to_string()
        ));
    }

    #[test]
    fn test_admin_login_retries_then_creates_receptionist() {
        let script = "1\nroot\ntoor\nadmin\nadmin123\n5\nfront\ndesk123\n6\nyes\n\
                      2\nfront\ndesk123\n1\n3\ny\n4\n";
        let session = run_script(script);

        session.result.unwrap();
        assert!(session
            .output
            .contains("Invalid admin credentials. Please try again."));
        assert!(session.output.contains("[Admin Menu - admin]"));
        assert!(session.output.contains("Receptionist account created."));

        // The freshly created receptionist logs in and views the logs.
        assert!(session.output.contains("[Receptionist Menu - front]"));
        assert!(session.output.contains("--- System Logs ---"));
        assert!(session
            .output
            .contains("[2025-05-19 22:19:00] [Admin: admin] Logged in"));

        assert!(session
            .log_lines
            .contains(&"[2025-05-19 22:19:00] [Receptionist: front] Logged in".to_string()));
    }

    #[test]
    fn test_menu_rejects_stray_input_and_declined_logout_stays() {
        let script = "3\n1\nbea\npw\nabc\n9\n3\n6\nno\n6\nyes\n4\n";
        let session = run_script(script);

        session.result.unwrap();
        assert!(session.output.contains("enter a number between 1 and 6"));
        assert!(session.output.contains("Table 1 is AVAILABLE"));

        // Declining the logout re-renders the menu before the real exit.
        assert_eq!(session.output.matches("[Customer Menu - bea]").count(), 3);
    }

    #[test]
    fn test_duplicate_customer_username_reprompts() {
        let script = "3\n1\ncarl\npw\n6\nyes\n3\n1\ncarl\ncarl2\npw\n6\nyes\n4\n";
        let session = run_script(script);

        session.result.unwrap();
        assert!(session
            .output
            .contains("Account already exists. Please choose a different username."));
        assert!(session.output.contains("[Customer Menu - carl2]"));
    }

    #[test]
    fn test_closing_input_mid_session_surfaces_eof() {
        let session = run_script("3\n2\nghost\npw\n");
        let err = session.result.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
        assert!(session
            .output
            .contains("Invalid credentials. Please try again."));
    }
}
