//! Splitting a line of user input into a command and its arguments.

use std::str::FromStr;

/// Every verb the assistant understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Delete,
    Help,
    Exit,
    /// Anything else, including empty input
    Unknown,
}

impl FromStr for Command {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "hello" => Command::Hello,
            "add" => Command::Add,
            "change" => Command::Change,
            "phone" => Command::Phone,
            "all" => Command::All,
            "add-birthday" => Command::AddBirthday,
            "show-birthday" => Command::ShowBirthday,
            "birthdays" => Command::Birthdays,
            "delete" => Command::Delete,
            "help" => Command::Help,
            "exit" | "close" => Command::Exit,
            _ => Command::Unknown,
        })
    }
}

/// A parsed line: the verb plus the remaining whitespace-separated tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    pub command: Command,
    pub args: Vec<String>,
}

/// Parse a line of input. The verb is case-insensitive; arguments are kept as typed.
pub fn parse_input(line: &str) -> ParsedInput {
    let mut tokens = line.split_whitespace();
    let command = tokens
        .next()
        .map(|verb| verb.parse().unwrap_or(Command::Unknown))
        .unwrap_or(Command::Unknown);

    ParsedInput {
        command,
        args: tokens.map(str::to_string).collect(),
    }
}
