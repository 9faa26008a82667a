//! The text command surface.
//!
//! A line of input is parsed into a [`Command`], routed to its handler, and
//! the reply (or the translated error) is sent to a [`View`].

pub mod handlers;
pub mod parser;

pub use parser::{parse_input, Command, ParsedInput};

use crate::models::AddressBook;
use crate::view::View;
use std::io::{self, BufRead};
use tracing::{debug, warn};

/// Prompt shown before every command.
pub const PROMPT: &str = "Enter a command: ";

/// Whether the command loop should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Execute one line of input against the book.
///
/// Command failures are rendered as messages; only a failure to write to
/// the view is returned as an error.
pub fn execute(
    line: &str,
    book: &mut AddressBook,
    view: &mut dyn View,
    default_days: i64,
) -> io::Result<Flow> {
    let ParsedInput { command, args } = parse_input(line);
    debug!(?command, args = args.len(), "Handling command");

    let reply = match command {
        Command::Exit => {
            view.display_message("Good bye!")?;
            return Ok(Flow::Exit);
        }
        Command::All => {
            view.display_all_contacts(book)?;
            return Ok(Flow::Continue);
        }
        Command::Help => {
            view.display_commands()?;
            return Ok(Flow::Continue);
        }
        Command::Hello => Ok("How can I help you?".to_string()),
        Command::Add => handlers::add_contact(&args, book),
        Command::Change => handlers::change_phone(&args, book),
        Command::Phone => handlers::show_phone(&args, book),
        Command::AddBirthday => handlers::add_birthday(&args, book),
        Command::ShowBirthday => handlers::show_birthday(&args, book),
        Command::Birthdays => handlers::birthdays(&args, book, default_days),
        Command::Delete => handlers::delete_contact(&args, book),
        Command::Unknown => Ok("Invalid command.".to_string()),
    };

    let message = reply.unwrap_or_else(|e| {
        debug!(?command, error = %e, "Command failed");
        e.user_message()
    });
    view.display_message(&message)?;
    Ok(Flow::Continue)
}

/// Run the command loop until `exit`/`close` or the end of `input`.
///
/// Lines are decoded lossily, so stray invalid UTF-8 becomes an unknown
/// command instead of ending the session. A read error ends the loop like
/// end of input does. Either way the caller gets control back and can save
/// the book. Only failures to write to the view are returned.
pub fn run<R: BufRead>(
    mut input: R,
    book: &mut AddressBook,
    view: &mut dyn View,
    default_days: i64,
) -> io::Result<()> {
    let mut buf = Vec::new();
    loop {
        view.display_prompt(PROMPT)?;

        buf.clear();
        match input.read_until(b'\n', &mut buf) {
            Ok(0) => {
                warn!("Input closed, exiting");
                break;
            }
            Ok(_) => {}
            Err(e) => {
                warn!(error = %e, "Failed to read input, exiting");
                break;
            }
        }

        let line = String::from_utf8_lossy(&buf);
        if execute(&line, book, view, default_days)? == Flow::Exit {
            return Ok(());
        }
    }

    view.display_message("Good bye!")
}
