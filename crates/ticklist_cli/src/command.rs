//! Input line parsing for the interactive session.
//!
//! # Responsibility
//! - Turn one raw input line into a typed command or a user-facing message.
//!
//! # Invariants
//! - Parsing never touches the store; bad input is rejected before dispatch.
//! - Titles keep their inner whitespace; only the surrounding whitespace is
//!   trimmed.

use ticklist_core::TaskId;

/// One parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { title: String },
    List,
    Update { id: TaskId, title: String },
    Delete { id: TaskId },
    Done { id: TaskId },
    Help,
    Exit,
}

/// Parses one input line.
///
/// Returns `Ok(None)` for a blank line, `Ok(Some(command))` for a valid
/// command, and `Err(message)` with the exact text to show the user
/// otherwise.
pub fn parse_line(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (keyword, rest) = split_word(line);
    let command = match keyword {
        "help" => Command::Help,
        "exit" => Command::Exit,
        "list" => Command::List,
        "add" => {
            if rest.is_empty() {
                return Err("usage: add <title>".to_string());
            }
            Command::Add {
                title: rest.to_string(),
            }
        }
        "update" => {
            let (id_word, title) = split_word(rest);
            if id_word.is_empty() || title.is_empty() {
                return Err("usage: update <id> <title>".to_string());
            }
            Command::Update {
                id: parse_id(id_word)?,
                title: title.to_string(),
            }
        }
        "delete" => Command::Delete {
            id: parse_sole_id(rest, "usage: delete <id>")?,
        },
        "done" => Command::Done {
            id: parse_sole_id(rest, "usage: done <id>")?,
        },
        other => return Err(format!("unknown command: {other}")),
    };

    Ok(Some(command))
}

/// Splits off the first whitespace-delimited word, trimming the remainder.
fn split_word(text: &str) -> (&str, &str) {
    match text.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (text, ""),
    }
}

fn parse_sole_id(rest: &str, usage: &'static str) -> Result<TaskId, String> {
    let (id_word, extra) = split_word(rest);
    if id_word.is_empty() || !extra.is_empty() {
        return Err(usage.to_string());
    }
    parse_id(id_word)
}

fn parse_id(word: &str) -> Result<TaskId, String> {
    match word.parse::<TaskId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err("invalid id".to_string()),
    }
}
