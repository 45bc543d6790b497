use page_core::{Msg, ALERT_BUTTON, MOVIE_INPUT};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Page(Msg),
    Show,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("`{0}` takes no arguments")]
    UnexpectedArgument(String),
}

/// Parses one console line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<ConsoleCommand>, ParseError> {
    let line = line.trim_end_matches(&['\r', '\n'][..]);
    let trimmed = line.trim_start();
    if trimmed.trim().is_empty() {
        return Ok(None);
    }

    let (word, rest) = match trimmed.split_once(' ') {
        Some((word, rest)) => (word, rest),
        None => (trimmed, ""),
    };

    let command = match word {
        "bind" => ConsoleCommand::Page(Msg::BindClickAlert {
            element: element_or(rest, ALERT_BUTTON),
        }),
        "click" => ConsoleCommand::Page(Msg::Clicked {
            element: element_or(rest, ALERT_BUTTON),
        }),
        // The rest of the line is the title verbatim, inner spaces included.
        "type" => ConsoleCommand::Page(Msg::InputChanged {
            element: MOVIE_INPUT.into(),
            value: rest.to_string(),
        }),
        "lookup" => no_args(word, rest, ConsoleCommand::Page(Msg::LookupRequested))?,
        "show" => no_args(word, rest, ConsoleCommand::Show)?,
        "quit" | "exit" => no_args(word, rest, ConsoleCommand::Quit)?,
        other => return Err(ParseError::UnknownCommand(other.to_string())),
    };
    Ok(Some(command))
}

fn element_or(rest: &str, default: &str) -> page_core::ElementId {
    match rest.trim() {
        "" => default.into(),
        id => id.into(),
    }
}

fn no_args(
    word: &str,
    rest: &str,
    command: ConsoleCommand,
) -> Result<ConsoleCommand, ParseError> {
    if rest.trim().is_empty() {
        Ok(command)
    } else {
        Err(ParseError::UnexpectedArgument(word.to_string()))
    }
}
