//! # Account Directory
//!
//! Username/password stores for the two self-registered namespaces:
//! receptionists (created by the admin) and customers (self-service).
//! The admin account is fixed at compile time and never lives here.
//!
//! Passwords are held and compared in plaintext, in memory, for the
//! lifetime of one desk process. Credential hardening is out of scope
//! for this tool.

use std::collections::HashMap;

/// Which credential namespace an account lives in. The same username can
/// exist in both namespaces without colliding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Receptionist,
    Customer,
}

/// In-memory account stores, one map per namespace.
#[derive(Debug, Default)]
pub struct AccountDirectory {
    receptionists: HashMap<String, String>,
    customers: HashMap<String, String>,
}

impl AccountDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    fn namespace(&self, kind: AccountKind) -> &HashMap<String, String> {
        match kind {
            AccountKind::Receptionist => &self.receptionists,
            AccountKind::Customer => &self.customers,
        }
    }

    /// True when `username` is already taken in `kind`'s namespace.
    pub fn contains(&self, kind: AccountKind, username: &str) -> bool {
        self.namespace(kind).contains_key(username)
    }

    /// True when the username/password pair matches a stored account.
    pub fn verify(&self, kind: AccountKind, username: &str, password: &str) -> bool {
        self.namespace(kind)
            .get(username)
            .is_some_and(|stored| stored == password)
    }

    /// Registers a new account. Returns `false` when the username is
    /// taken, leaving the existing account untouched.
    pub fn register(&mut self, kind: AccountKind, username: &str, password: &str) -> bool {
        let namespace = match kind {
            AccountKind::Receptionist => &mut self.receptionists,
            AccountKind::Customer => &mut self.customers,
        };
        if namespace.contains_key(username) {
            return false;
        }
        namespace.insert(username.to_string(), password.to_string());
        true
    }
}

// =============================================================================
// Tests
// =============================================================================
