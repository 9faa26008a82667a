//! Console implementation of [`View`].

use super::{View, COMMAND_REFERENCE};
use crate::models::{AddressBook, Record};
use std::io::{self, Write};

/// Message shown by `all` when there are no records.
pub const EMPTY_BOOK: &str = "The address book is empty.";

/// Writes one line per item to any [`Write`] target.
///
/// The binary uses stdout; tests render into a `Vec<u8>`.
pub struct ConsoleView<W: Write> {
    out: W,
}

impl ConsoleView<io::Stdout> {
    /// A view printing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> View for ConsoleView<W> {
    fn display_contact(&mut self, record: &Record) -> io::Result<()> {
        writeln!(self.out, "{}", record.describe())
    }

    fn display_all_contacts(&mut self, book: &AddressBook) -> io::Result<()> {
        if book.is_empty() {
            return self.display_message(EMPTY_BOOK);
        }
        for record in book.records() {
            self.display_contact(record)?;
        }
        Ok(())
    }

    fn display_message(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", message)?;
        self.out.flush()
    }

    fn display_commands(&mut self) -> io::Result<()> {
        for line in COMMAND_REFERENCE {
            writeln!(self.out, "{}", line)?;
        }
        Ok(())
    }

    fn display_prompt(&mut self, prompt: &str) -> io::Result<()> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()
    }
}
