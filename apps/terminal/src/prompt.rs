//! # Prompt Plumbing
//!
//! Line-oriented input/output over a generic reader/writer pair. The live
//! desk runs this over locked stdin/stdout; the tests run the exact same
//! code over `Cursor` buffers.
//!
//! ```text
//!   stdin ──┐                              ┌── stdout
//!           ▼                              ▼
//!       ┌──────────────────────────────────────┐
//!       │          Prompter<R, W>              │
//!       │                                      │
//!       │  line()     one trimmed line         │
//!       │  numeric()  re-prompt until in-range │
//!       │  confirm()  yes/y in any casing      │
//!       └──────────────────────────────────────┘
//! ```
//!
//! End of input is surfaced as `ErrorKind::UnexpectedEof`. A session
//! cannot continue without a user, so callers unwind all the way out and
//! the entry point turns that specific error into a clean exit.

use std::io::{self, BufRead, Write};

use maitre_core::validation::parse_numeric_input;

/// Prompt helper bound to one reader/writer pair for the whole session.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Prompter { reader, writer }
    }

    /// Writes `text` without a trailing newline and flushes, so the prompt
    /// and the echoed input share a line.
    pub fn ask(&mut self, text: &str) -> io::Result<()> {
        write!(self.writer, "{text}")?;
        self.writer.flush()
    }

    /// Writes one full line.
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{text}")
    }

    /// Prompts and reads one line, with the line ending trimmed.
    pub fn line(&mut self, prompt: &str) -> io::Result<String> {
        self.ask(prompt)?;
        let mut input = String::new();
        let read = self.reader.read_line(&mut input)?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            ));
        }
        while input.ends_with('\n') || input.ends_with('\r') {
            input.pop();
        }
        Ok(input)
    }

    /// Prompts until the input parses as a whole number in `min..=max`.
    ///
    /// Rejections are reported to the user and the prompt repeats. Menu
    /// choices go through here; reservation fields have their own loops
    /// because those also write audit lines on rejection.
    pub fn numeric(&mut self, prompt: &str, min: i64, max: i64) -> io::Result<i64> {
        loop {
            let input = self.line(prompt)?;
            match parse_numeric_input(&input, min, max) {
                Ok(value) => return Ok(value),
                Err(err) => self.say(&format!("Error: {err}"))?,
            }
        }
    }

    /// Asks a yes/no question. `yes` or `y` in any casing confirms;
    /// anything else declines.
    pub fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        let answer = self.line(prompt)?;
        let answer = answer.trim().to_ascii_lowercase();
        Ok(answer == "yes" || answer == "y")
    }

    /// Consumes the prompter and hands back the writer, so tests can
    /// inspect everything the session printed.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

// =============================================================================
// Tests
// =============================================================================
