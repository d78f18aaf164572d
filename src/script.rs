//! A small command language for driving an [`OrderedSet`] from a sequence of textual tokens.
//!
//! | Token                   | Effect                                                 |
//! |-------------------------|--------------------------------------------------------|
//! | `<number>`              | insert the number                                      |
//! | `f <number>`, `find`    | print `true` or `false`                                |
//! | `r <number>`, `remove`  | remove the number                                      |
//! | `p`, `print`            | print the height and the node count                    |
//! | `d_asc`, `dump_asc`     | print the values in ascending order                    |
//! | `d_desc`, `dump_desc`   | print the values in descending order                   |
//!
//! # Examples
//! ```
//! use balanced_trees::script::{self, Config, Session};
//! use balanced_trees::AvlSet;
//!
//! let commands = script::parse("20 -10 30 40 f 30 f 60 d_asc".split_whitespace()).unwrap();
//! let mut session: Session<AvlSet> = Session::new(Config::default());
//! assert_eq!(session.run(commands), vec!["true", "false", "-10 20 30 40"]);
//! ```

use crate::binary_tree::Order;
use crate::error::ScriptError;
use crate::ordered_set::OrderedSet;
use log::{debug, info};
use serde_derive::{Deserialize, Serialize};
use std::fmt;
use std::mem;

/// A single operation on a set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Insert(i32),
    Find(i32),
    Remove(i32),
    Print,
    DumpAscending,
    DumpDescending,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Insert(value) => write!(f, "add {}", value),
            Command::Find(value) => write!(f, "find {}", value),
            Command::Remove(value) => write!(f, "remove {}", value),
            Command::Print => write!(f, "print"),
            Command::DumpAscending => write!(f, "dump ascending"),
            Command::DumpDescending => write!(f, "dump descending"),
        }
    }
}

/// Options for a [`Session`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log every processed command at `info` level.
    pub verbose: bool,
}

// An optional `-` followed by decimal digits only.
fn parse_number(token: &str) -> Result<i32, ScriptError> {
    let digits = token.strip_prefix('-').unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(ScriptError::InvalidArgument(token.to_string()));
    }
    token
        .parse()
        .map_err(|_| ScriptError::InvalidArgument(token.to_string()))
}

/// Parses a sequence of tokens into commands.
pub fn parse<'a, I>(tokens: I) -> Result<Vec<Command>, ScriptError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut tokens = tokens.into_iter();
    let mut commands = Vec::new();

    while let Some(token) = tokens.next() {
        let command = match token {
            "p" | "print" => Command::Print,
            "d_asc" | "dump_asc" => Command::DumpAscending,
            "d_desc" | "dump_desc" => Command::DumpDescending,
            "f" | "find" | "r" | "remove" => {
                let argument = tokens.next().ok_or_else(|| ScriptError::MissingArgument {
                    command: token.to_string(),
                })?;
                let value = parse_number(argument)?;
                if token.starts_with('f') {
                    Command::Find(value)
                } else {
                    Command::Remove(value)
                }
            },
            _ => Command::Insert(parse_number(token)?),
        };
        commands.push(command);
    }

    Ok(commands)
}

/// Applies commands to a set it owns and collects the printed lines.
pub struct Session<S> {
    set: S,
    config: Config,
    step: usize,
}

impl<S> Session<S>
where
    S: OrderedSet,
{
    pub fn new(config: Config) -> Self {
        Session {
            set: S::default(),
            config,
            step: 0,
        }
    }

    /// Ends the session, returning the set.
    pub fn into_set(self) -> S {
        self.set
    }

    /// Applies a single command, returning the line it prints, if any.
    pub fn execute(&mut self, command: Command) -> Option<String> {
        self.step += 1;
        if self.config.verbose {
            info!("{:02}) process {}", self.step, command);
        }

        match command {
            Command::Insert(value) => {
                let set = mem::take(&mut self.set);
                self.set = set.insert(value);
                None
            },
            Command::Remove(value) => {
                let set = mem::take(&mut self.set);
                self.set = set.remove(value);
                None
            },
            Command::Find(value) => Some(self.set.find(value).to_string()),
            Command::Print => Some(format!(
                "height : {}  - nodes : {}",
                self.set.height(),
                self.set.node_count(),
            )),
            Command::DumpAscending => Some(self.dump(Order::Ascending)),
            Command::DumpDescending => Some(self.dump(Order::Descending)),
        }
    }

    /// Applies every command in order and returns all printed lines.
    pub fn run<I>(&mut self, commands: I) -> Vec<String>
    where
        I: IntoIterator<Item = Command>,
    {
        let lines: Vec<String> = commands
            .into_iter()
            .filter_map(|command| self.execute(command))
            .collect();
        debug!("session printed {} lines after {} steps", lines.len(), self.step);
        lines
    }

    fn dump(&self, order: Order) -> String {
        self.set
            .dump(order)
            .map(|value| value.to_string())
            .collect::<Vec<String>>()
            .join(" ")
    }
}
