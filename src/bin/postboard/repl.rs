#![deny(clippy::all, clippy::pedantic)]

use std::io::Write;

use postboard::application::board::{Action, ActionOutcome, PostBoard, SubmitOutcome};
use postboard::domain::error::DomainError;
use postboard::domain::form::FormField;
use postboard::presentation::views::render_board;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::client::CliError;

pub const HELP: &str = "\
commands:
  list                      fetch posts and show the board
  show                      show the board without fetching
  set <title|content> TEXT  write one form field
  submit                    create (or update, when editing) a post
  edit <id>                 load a listed post into the form
  cancel                    leave edit mode and clear the form
  delete <id>               delete a post
  help                      show this message
  quit                      leave";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command `{0}` (type `help`)")]
    Unknown(String),
    #[error("`{command}` needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },
    #[error("{0}")]
    Field(String),
}

impl From<DomainError> for ParseError {
    fn from(err: DomainError) -> Self {
        ParseError::Field(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// A transition that maps directly onto a board action.
    Board(Action),
    /// Prefill from the cached list; resolved against the board at run time.
    Edit { id: String },
    Show,
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Result<Option<ReplCommand>, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "list" | "refresh" => ReplCommand::Board(Action::Refresh),
        "show" => ReplCommand::Show,
        "submit" => ReplCommand::Board(Action::Submit),
        "cancel" => ReplCommand::Board(Action::CancelEdit),
        "help" | "?" => ReplCommand::Help,
        "quit" | "exit" => ReplCommand::Quit,
        "set" => {
            let (name, value) = match rest.split_once(char::is_whitespace) {
                Some((name, value)) => (name, value.trim_start()),
                None => (rest, ""),
            };
            if name.is_empty() {
                return Err(ParseError::MissingArgument {
                    command: "set",
                    what: "a field name",
                });
            }
            let field: FormField = name.parse()?;
            ReplCommand::Board(Action::SetField {
                field,
                value: value.to_string(),
            })
        }
        "edit" => ReplCommand::Edit {
            id: required_id("edit", rest)?,
        },
        "delete" | "rm" => ReplCommand::Board(Action::Remove {
            id: required_id("delete", rest)?,
        }),
        other => return Err(ParseError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn required_id(command: &'static str, rest: &str) -> Result<String, ParseError> {
    let id = rest.trim();
    if id.is_empty() {
        return Err(ParseError::MissingArgument {
            command,
            what: "a post id",
        });
    }
    Ok(id.to_string())
}

/// Drive the board from line-oriented input until `quit` or end of input.
///
/// Operations run one at a time on the caller's task. Store failures are only
/// logged by the board; the screen just shows the unchanged state.
pub async fn run<R, W>(board: &mut PostBoard, input: R, out: &mut W) -> Result<(), CliError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    board.refresh().await;
    show(board, out)?;
    writeln!(out, "type `help` for commands")?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(out, "{err}")?;
                continue;
            }
        };
        debug!(target: "postboard::repl", ?command, "dispatching");

        match command {
            ReplCommand::Quit => break,
            ReplCommand::Help => writeln!(out, "{HELP}")?,
            ReplCommand::Show => show(board, out)?,
            ReplCommand::Edit { id } => {
                let Some(post) = board.find_post(&id).cloned() else {
                    writeln!(out, "no listed post with id `{id}` (try `list`)")?;
                    continue;
                };
                board
                    .dispatch(Action::BeginEdit {
                        id: post.id,
                        title: post.title,
                        content: post.content,
                    })
                    .await;
                show(board, out)?;
            }
            ReplCommand::Board(action) => {
                let outcome = board.dispatch(action).await;
                if let ActionOutcome::Submit(SubmitOutcome::MissingField(field)) = outcome {
                    writeln!(out, "please fill out the {field} field")?;
                    continue;
                }
                show(board, out)?;
            }
        }
    }
    Ok(())
}

fn show<W: Write>(board: &PostBoard, out: &mut W) -> Result<(), CliError> {
    let screen = render_board(board)?;
    writeln!(out, "{screen}")?;
    writeln!(out)?;
    Ok(())
}
