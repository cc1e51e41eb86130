//! Line command parsing.
//!
//! # Invariants
//! - Blank lines and `#` comments parse to `None`.
//! - Quoted arguments keep inner whitespace; bare words split on whitespace.

use once_cell::sync::Lazy;
use projboard_core::{ParseStatusError, ProjectStatus};
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""([^"]*)"|(\S+)"#).expect("valid token regex"));

/// Which project a `move` addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveTarget {
    /// 1-based position in store order, written `#N`.
    Index(usize),
    /// Raw id text, delivered as a drag payload.
    Id(String),
}

/// One board command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        title: String,
        description: String,
        people: String,
    },
    Move {
        target: MoveTarget,
        status: ProjectStatus,
    },
    List,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  add \"<title>\" \"<description>\" <people>   create an active project
  move <id|#index> <active|finished>         drag a project into a column
  list                                       show every project with its id
  help                                       show this help
  quit                                       leave the board
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Unknown(String),
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    TooManyArguments(&'static str),
    InvalidIndex(String),
    InvalidStatus(ParseStatusError),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown(value) => write!(f, "unknown command `{value}`; try `help`"),
            Self::MissingArgument { command, argument } => {
                write!(f, "`{command}` is missing <{argument}>")
            }
            Self::TooManyArguments(command) => write!(f, "`{command}` got too many arguments"),
            Self::InvalidIndex(value) => {
                write!(f, "`{value}` is not a project index; use #1, #2, ...")
            }
            Self::InvalidStatus(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidStatus(err) => Some(err),
            _ => None,
        }
    }
}

/// Parses one input line.
///
/// # Errors
/// - Unknown command words, wrong argument counts, bad indexes or statuses.
pub fn parse_line(line: &str) -> Result<Option<Command>, CommandError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let tokens = tokenize(trimmed);
    let Some((name, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let command = match name.to_ascii_lowercase().as_str() {
        "add" => {
            let [title, description, people] = take_args::<3>(
                "add",
                args,
                ["title", "description", "people"],
            )?;
            Command::Add {
                title,
                description,
                people,
            }
        }
        "move" => {
            let [target, status] = take_args::<2>("move", args, ["id", "status"])?;
            Command::Move {
                target: parse_target(&target)?,
                status: status
                    .parse::<ProjectStatus>()
                    .map_err(CommandError::InvalidStatus)?,
            }
        }
        "list" | "ls" => no_args("list", args, Command::List)?,
        "help" | "?" => no_args("help", args, Command::Help)?,
        "quit" | "exit" => no_args("quit", args, Command::Quit)?,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn tokenize(line: &str) -> Vec<String> {
    TOKEN_RE
        .captures_iter(line)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().to_string())
        .collect()
}

fn take_args<const N: usize>(
    command: &'static str,
    args: &[String],
    names: [&'static str; N],
) -> Result<[String; N], CommandError> {
    if args.len() > N {
        return Err(CommandError::TooManyArguments(command));
    }
    if let Some(&argument) = names.get(args.len()) {
        return Err(CommandError::MissingArgument { command, argument });
    }
    Ok(std::array::from_fn(|index| args[index].clone()))
}

fn no_args(
    command: &'static str,
    args: &[String],
    parsed: Command,
) -> Result<Command, CommandError> {
    if args.is_empty() {
        Ok(parsed)
    } else {
        Err(CommandError::TooManyArguments(command))
    }
}

fn parse_target(value: &str) -> Result<MoveTarget, CommandError> {
    match value.strip_prefix('#') {
        Some(index) => index
            .parse::<usize>()
            .ok()
            .filter(|index| *index > 0)
            .map(MoveTarget::Index)
            .ok_or_else(|| CommandError::InvalidIndex(value.to_string())),
        None => Ok(MoveTarget::Id(value.to_string())),
    }
}
