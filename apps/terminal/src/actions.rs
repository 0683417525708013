//! # Interactive Flows
//!
//! One function per menu entry. The flows share a discipline:
//!
//! 1. Collect each field in its own loop, re-prompting until the
//!    validators accept and writing an audit line for every rejection.
//! 2. Hand the assembled value to the book in a single call. The book
//!    revalidates everything and logs the outcome itself, so nothing is
//!    logged twice.
//! 3. Render the result. Table numbers are 1-based here and 0-based
//!    everywhere below this module.
//!
//! Update and cancel run the same flow for customers and admins; the only
//! difference is where the target customer name comes from (the login for
//! customers, a prompt for admins).

use std::io::{self, BufRead, Write};

use maitre_core::validation::{
    parse_numeric_input, validate_date, validate_phone, validate_reservation_id, validate_time,
};
use maitre_core::{Actor, ReservationRequest, ReservationUpdate, Role, ValidationError};

use crate::accounts::AccountKind;
use crate::menu::Session;

/// Reports one rejected field: a line for the user, a line for the audit
/// trail, and the caller's loop repeats the prompt.
fn reject<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    actor: &Actor,
    action: &str,
    err: &ValidationError,
) -> io::Result<()> {
    session.prompt.say(&format!("Error: {err}"))?;
    session.audit.rejected_input(actor, action, &err.to_string());
    Ok(())
}

/// Resolves which customer an update or cancel acts on. Customers act on
/// themselves; admins name the customer first. Returns `None` (after
/// telling the user) when there is nothing to act on.
fn target_customer<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    actor: &Actor,
) -> io::Result<Option<String>> {
    if actor.role == Role::Admin {
        let name = session.prompt.line("Enter customer name: ")?;
        if !session.book.has_reservations(&name) {
            session
                .prompt
                .say("No reservations found for this customer.")?;
            return Ok(None);
        }
        return Ok(Some(name));
    }

    if !session.book.has_reservations(&actor.username) {
        session.prompt.say("No reservations.")?;
        return Ok(None);
    }
    Ok(Some(actor.username.clone()))
}

// =============================================================================
// Reserve
// =============================================================================

pub fn reserve_table<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    actor: &Actor,
) -> io::Result<()> {
    const ACTION: &str = "Failed to reserve table";

    let phone = loop {
        let input = session
            .prompt
            .line("Enter your phone number (e.g., 123-456-7890): ")?;
        match validate_phone(&input) {
            Ok(()) => break input,
            Err(err) => reject(session, actor, ACTION, &err)?,
        }
    };

    let party_size = loop {
        let input = session
            .prompt
            .line("Enter party size (must be at least 1): ")?;
        match parse_numeric_input(&input, 1, i64::MAX).map_err(|_| ValidationError::PartySize) {
            Ok(size) => break size,
            Err(err) => reject(session, actor, ACTION, &err)?,
        }
    };

    let date = loop {
        let prompt = format!(
            "Enter reservation date (YYYY-MM-DD, on or after {}): ",
            session.moment.date()
        );
        let input = session.prompt.line(&prompt)?;
        match validate_date(&input, &session.moment) {
            Ok(()) => break input,
            Err(err) => reject(session, actor, ACTION, &err)?,
        }
    };

    let time = loop {
        let prompt = format!(
            "Enter reservation time (HH:MM, 24-hour, after {:02}:{:02} if booking for today): ",
            session.moment.hour(),
            session.moment.minute()
        );
        let input = session.prompt.line(&prompt)?;
        match validate_time(&input, &date, &session.moment) {
            Ok(()) => break input,
            Err(err) => reject(session, actor, ACTION, &err)?,
        }
    };

    session.prompt.say("Available tables:")?;
    view_availability(session)?;
    let table_index = loop {
        let max = session.book.table_count() as i64;
        let input = session
            .prompt
            .line(&format!("Enter table number to reserve (1-{max}): "))?;
        match parse_numeric_input(&input, 1, max) {
            Ok(table) => break (table - 1) as usize,
            Err(err) => {
                session.prompt.say(&format!("Error: {err}"))?;
                session
                    .audit
                    .rejected_input(actor, ACTION, "invalid table number");
            }
        }
    };

    let request = ReservationRequest {
        customer_name: actor.username.clone(),
        phone_number: phone,
        party_size,
        date,
        time,
        table_index,
    };

    // The desk showed availability moments ago, but the book is the
    // authority; a table can still be refused here.
    match session.book.reserve_table(actor, &request) {
        Ok(index) => session
            .prompt
            .say(&format!("Reserved Table #{} successfully!", index + 1))?,
        Err(err) => session.prompt.say(&format!("Error: {err}"))?,
    }
    Ok(())
}

// =============================================================================
// Update
// =============================================================================

pub fn update_reservation<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    actor: &Actor,
) -> io::Result<()> {
    const ACTION: &str = "Failed to update reservation";

    let customer = match target_customer(session, actor)? {
        Some(name) => name,
        None => return Ok(()),
    };

    view_reservations(session, &customer)?;

    let id = loop {
        let input = session
            .prompt
            .line("Enter reservation ID to update (e.g., ID 1A): ")?;
        match validate_reservation_id(&input) {
            Ok(()) => break input,
            Err(err) => reject(session, actor, ACTION, &err)?,
        }
    };

    let new_id = loop {
        let input = session
            .prompt
            .line("Enter new ID (e.g., ID 2A, or 0 to keep current): ")?;
        if input == "0" {
            break None;
        }
        match validate_reservation_id(&input) {
            Ok(()) => {
                if session.book.reservation_id_exists(&input, Some(id.as_str())) {
                    session
                        .prompt
                        .say(&format!("Error: reservation id {input} is already in use"))?;
                    session
                        .audit
                        .rejected_input(actor, ACTION, "replacement id already in use");
                } else {
                    break Some(input);
                }
            }
            Err(err) => reject(session, actor, ACTION, &err)?,
        }
    };

    let new_name = {
        let input = session
            .prompt
            .line("Enter new name (or 0 to keep current): ")?;
        if input == "0" {
            None
        } else {
            Some(input)
        }
    };

    let new_phone = loop {
        let input = session
            .prompt
            .line("Enter new phone number (e.g., 123-456-7890, or 0 to keep current): ")?;
        if input == "0" {
            break None;
        }
        match validate_phone(&input) {
            Ok(()) => break Some(input),
            Err(err) => reject(session, actor, ACTION, &err)?,
        }
    };

    let new_party_size = loop {
        let input = session
            .prompt
            .line("Enter new party size (at least 1, or 0 to keep current): ")?;
        if input == "0" {
            break None;
        }
        match parse_numeric_input(&input, 1, i64::MAX).map_err(|_| ValidationError::PartySize) {
            Ok(size) => break Some(size),
            Err(err) => reject(session, actor, ACTION, &err)?,
        }
    };

    let new_date = loop {
        let prompt = format!(
            "Enter new date (YYYY-MM-DD, on or after {}, or 0 to keep current): ",
            session.moment.date()
        );
        let input = session.prompt.line(&prompt)?;
        if input == "0" {
            break None;
        }
        match validate_date(&input, &session.moment) {
            Ok(()) => break Some(input),
            Err(err) => reject(session, actor, ACTION, &err)?,
        }
    };

    let new_time = loop {
        let input = session
            .prompt
            .line("Enter new time (HH:MM, 24-hour, or 0 to keep current): ")?;
        if input == "0" {
            break None;
        }
        // A new time rides on the new date when one was given, otherwise
        // it is checked against the desk's own date.
        let against = new_date.as_deref().unwrap_or(session.moment.date());
        match validate_time(&input, against, &session.moment) {
            Ok(()) => break Some(input),
            Err(err) => reject(session, actor, ACTION, &err)?,
        }
    };

    session
        .prompt
        .say("Table options: 0 to keep current, or pick from:")?;
    view_availability(session)?;
    let new_table = loop {
        let max = session.book.table_count() as i64;
        let input = session.prompt.line(&format!("Enter table number (0-{max}): "))?;
        match parse_numeric_input(&input, 0, max) {
            Ok(0) => break None,
            Ok(table) => break Some((table - 1) as usize),
            Err(err) => {
                session.prompt.say(&format!("Error: {err}"))?;
                session
                    .audit
                    .rejected_input(actor, ACTION, "invalid table number");
            }
        }
    };

    if !session.prompt.confirm("Confirm update? Yes or No: ")? {
        session.prompt.say("Update cancelled.")?;
        return Ok(());
    }

    let update = ReservationUpdate {
        new_id,
        new_name,
        new_phone,
        new_party_size,
        new_date,
        new_time,
        new_table,
    };

    match session
        .book
        .update_reservation(actor, &id, &customer, &update)
    {
        Ok(()) => session.prompt.say("Reservation updated successfully.")?,
        Err(err) => session.prompt.say(&format!("Error: {err}"))?,
    }
    Ok(())
}

// =============================================================================
// Cancel
// =============================================================================

pub fn cancel_reservation<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    actor: &Actor,
) -> io::Result<()> {
    let customer = match target_customer(session, actor)? {
        Some(name) => name,
        None => return Ok(()),
    };

    loop {
        let id = session
            .prompt
            .line("Enter reservation ID to cancel (e.g., ID 1A): ")?;
        view_reservations(session, &customer)?;

        if !session.prompt.confirm("Confirm cancellation? Yes or No: ")? {
            session.prompt.say("Cancellation aborted.")?;
            return Ok(());
        }

        match session.book.cancel_reservation(actor, &id, &customer) {
            Ok(()) => {
                session.prompt.say("Reservation cancelled.")?;
                return Ok(());
            }
            Err(err) => {
                session.prompt.say(&format!("Error: {err}"))?;
                session.prompt.say("Please try again.")?;
            }
        }
    }
}

// =============================================================================
// Views
// =============================================================================

pub fn view_availability<R: BufRead, W: Write>(session: &mut Session<R, W>) -> io::Result<()> {
    for status in session.book.table_availability() {
        let state = if status.available { "AVAILABLE" } else { "BOOKED" };
        session
            .prompt
            .say(&format!("Table {} is {state}", status.index + 1))?;
    }
    Ok(())
}

pub fn view_reservations<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    customer_name: &str,
) -> io::Result<()> {
    session.prompt.say("\n--- Your Reservations ---")?;
    let held = session.book.customer_reservations(customer_name);
    if held.is_empty() {
        session.prompt.say("No reservation to view.")?;
        return Ok(());
    }
    for reservation in held {
        let line = format!(
            "ID: {}, Name: {}, Contact: {}, Party Size: {}, Date: {}, Time: {}, Table: {}",
            reservation.id,
            reservation.customer_name,
            reservation.phone_number,
            reservation.party_size,
            reservation.date,
            reservation.time,
            reservation.table_index + 1,
        );
        session.prompt.say(&line)?;
    }
    Ok(())
}

pub fn view_logs<R: BufRead, W: Write>(session: &mut Session<R, W>) -> io::Result<()> {
    session.prompt.say("--- System Logs ---")?;
    session.prompt.say("")?;
    let lines = session.book.logs();
    if lines.is_empty() {
        session.prompt.say("No log entries yet.")?;
        return Ok(());
    }
    for line in lines {
        session.prompt.say(&line)?;
    }
    Ok(())
}

// =============================================================================
// Accounts
// =============================================================================

pub fn create_receptionist<R: BufRead, W: Write>(session: &mut Session<R, W>) -> io::Result<()> {
    let username = loop {
        let input = session.prompt.line("Enter new receptionist username: ")?;
        if session.accounts.contains(AccountKind::Receptionist, &input) {
            session
                .prompt
                .say("Username already exists. Please choose a different username.")?;
            continue;
        }
        break input;
    };
    let password = session.prompt.line("Enter password: ")?;
    if session
        .accounts
        .register(AccountKind::Receptionist, &username, &password)
    {
        session.prompt.say("Receptionist account created.")?;
    }
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
