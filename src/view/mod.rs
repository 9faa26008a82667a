//! Presentation of records and messages.
//!
//! The command loop only talks to the [`View`] trait; [`ConsoleView`] is the
//! terminal implementation.

pub mod console;

pub use console::ConsoleView;

use crate::models::{AddressBook, Record};
use std::io;

/// Reference text for the `help` command.
pub const COMMAND_REFERENCE: &[&str] = &[
    "Available commands:",
    "  - hello - Greet the assistant.",
    "  - add [name] [phone] - Add a new contact with a phone number.",
    "  - change [name] [old_phone] [new_phone] - Change phone number for a contact.",
    "  - phone [name] - Show phone numbers for a contact.",
    "  - all - Show all contacts.",
    "  - add-birthday [name] [DD.MM.YYYY] - Add a birthday for a contact.",
    "  - show-birthday [name] - Show the birthday of a contact.",
    "  - birthdays [days] - Show contacts with upcoming birthdays in next [days].",
    "  - delete [name] - Delete a contact.",
    "  - help - Show this list.",
    "  - exit/close - Exit the application.",
];

/// Something that can show address book data to the user.
pub trait View {
    /// Show a single record.
    fn display_contact(&mut self, record: &Record) -> io::Result<()>;

    /// Show every record in the book, or a notice if it is empty.
    fn display_all_contacts(&mut self, book: &AddressBook) -> io::Result<()>;

    /// Show a free-form message.
    fn display_message(&mut self, message: &str) -> io::Result<()>;

    /// Show the command reference.
    fn display_commands(&mut self) -> io::Result<()>;

    /// Ask for the next command, leaving the cursor on the same line.
    fn display_prompt(&mut self, prompt: &str) -> io::Result<()>;
}
