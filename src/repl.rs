//! The line-based command loop around the tree.
//!
//! A [`Session`] seeds a [`Tree`] from one line of whitespace-separated
//! integers and then loops on single-letter commands. Parsing and dispatch
//! are split into [`parse`] and [`apply`] so that every outcome is an
//! explicit value: malformed input and rejected operations come back as
//! [`CommandError`]s the loop prints before continuing, and successful
//! commands come back as [`Reply`]s describing what to print. Only real I/O
//! failures propagate out of the loop.
//!
//! The session reads from any [`BufRead`] and writes to any [`Write`], so
//! tests can drive a whole session through in-memory buffers.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::debug;

use crate::tree::Tree;

/// One parsed user command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// `I <n>`: insert a value.
    Insert(i64),
    /// `D <n>`: delete a value.
    Delete(i64),
    /// `P <n>`: look up the in-order predecessor of a value.
    Predecessor(i64),
    /// `S <n>`: look up the in-order successor of a value.
    Successor(i64),
    /// `H`: print the command list.
    Help,
    /// `E`: end the session.
    Exit,
}

/// Why a command line was rejected. The `Display` strings are the
/// user-visible messages; the loop prints them and carries on, so none of
/// these ever end the session.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// A command that needs a value was given none.
    #[error("please enter a value for this command")]
    MissingValue,
    /// A command's argument was not an integer.
    #[error("please enter an integer")]
    InvalidInteger,
    /// The first token was not a known command letter.
    #[error("invalid command")]
    UnknownCommand,
    /// Zero is reserved and cannot be stored in the tree.
    #[error("cannot add a zero value into the tree")]
    ZeroValue,
    /// Insertion was asked for a value the tree already holds.
    #[error("{0} already exists in this tree")]
    AlreadyPresent(i64),
    /// The named value is not in the tree.
    #[error("{0} does not exist in this tree")]
    Missing(i64),
    /// Deletion or a neighbor query was asked of an empty tree.
    #[error("this tree is empty")]
    EmptyTree,
}

/// What a successful command prints.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    /// The tree changed; show its new in-order sequence.
    InOrder(Vec<i64>),
    /// The predecessor of `target`, if it has one.
    Predecessor {
        /// The value whose neighbor was asked for.
        target: i64,
        /// Its in-order predecessor, when one exists.
        found: Option<i64>,
    },
    /// The successor of `target`, if it has one.
    Successor {
        /// The value whose neighbor was asked for.
        target: i64,
        /// Its in-order successor, when one exists.
        found: Option<i64>,
    },
    /// Show the command list.
    Help,
    /// End the session.
    Exit,
}

/// Parses one input line. Blank lines parse to `Ok(None)`. Command letters
/// are case-insensitive and tokens after a command's argument are ignored.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let mut tokens = line.split_whitespace();
    let Some(command) = tokens.next() else {
        return Ok(None);
    };
    let command = match command.to_ascii_uppercase().as_str() {
        "I" => Command::Insert(integer_argument(tokens.next())?),
        "D" => Command::Delete(integer_argument(tokens.next())?),
        "P" => Command::Predecessor(integer_argument(tokens.next())?),
        "S" => Command::Successor(integer_argument(tokens.next())?),
        "E" => Command::Exit,
        "H" => Command::Help,
        _ => return Err(CommandError::UnknownCommand),
    };
    Ok(Some(command))
}

fn integer_argument(token: Option<&str>) -> Result<i64, CommandError> {
    let token = token.ok_or(CommandError::MissingValue)?;
    token.parse().map_err(|_| CommandError::InvalidInteger)
}

/// Runs one command against the tree. The pre-checks here, not the tree,
/// decide what counts as an error: the tree's own operations are no-ops on
/// values they cannot act on, while the user is told why nothing happened.
/// On `Err` the tree is guaranteed unchanged.
pub fn apply(tree: &mut Tree, command: Command) -> Result<Reply, CommandError> {
    match command {
        Command::Insert(value) => {
            if value == 0 {
                return Err(CommandError::ZeroValue);
            }
            if tree.contains(value) {
                return Err(CommandError::AlreadyPresent(value));
            }
            tree.insert(value);
            debug!(value, "inserted");
            Ok(Reply::InOrder(tree.in_order()))
        }
        Command::Delete(value) => {
            if tree.is_empty() {
                return Err(CommandError::EmptyTree);
            }
            if !tree.contains(value) {
                return Err(CommandError::Missing(value));
            }
            tree.delete(value);
            debug!(value, "deleted");
            Ok(Reply::InOrder(tree.in_order()))
        }
        Command::Predecessor(value) => {
            if tree.is_empty() {
                return Err(CommandError::EmptyTree);
            }
            if !tree.contains(value) {
                return Err(CommandError::Missing(value));
            }
            Ok(Reply::Predecessor {
                target: value,
                found: tree.predecessor(value),
            })
        }
        Command::Successor(value) => {
            if tree.is_empty() {
                return Err(CommandError::EmptyTree);
            }
            if !tree.contains(value) {
                return Err(CommandError::Missing(value));
            }
            Ok(Reply::Successor {
                target: value,
                found: tree.successor(value),
            })
        }
        Command::Help => Ok(Reply::Help),
        Command::Exit => Ok(Reply::Exit),
    }
}

/// An interactive session: one tree, one line reader, one writer.
pub struct Session<R, W> {
    input: R,
    output: W,
    tree: Tree,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session around an empty tree.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            tree: Tree::new(),
        }
    }

    /// Seeds the tree from one prompted line, prints the three traversal
    /// sequences and the command list, then loops on commands until `E` or
    /// end of input. Returns only on I/O failure or a deliberate exit.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "// Binary Search Tree //")?;
        writeln!(
            self.output,
            "Please enter the initial values in sequence, separated with spaces:"
        )?;
        writeln!(self.output, "(Non-integers and duplicates will be ignored)")?;
        write!(self.output, "> ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(());
        }
        self.seed(&line);

        writeln!(
            self.output,
            "Pre-order: {}",
            render_sequence(&self.tree.pre_order())
        )?;
        writeln!(
            self.output,
            "In-order: {}",
            render_sequence(&self.tree.in_order())
        )?;
        writeln!(
            self.output,
            "Post-order: {}",
            render_sequence(&self.tree.post_order())
        )?;

        self.write_help()?;

        loop {
            write!(self.output, "Command? ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(());
            }
            let command = match parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(err) => {
                    writeln!(self.output, "Error: {err}")?;
                    continue;
                }
            };

            debug!(?command, "dispatching");
            match apply(&mut self.tree, command) {
                Ok(reply) => {
                    let done = matches!(reply, Reply::Exit);
                    self.render(reply)?;
                    if done {
                        return Ok(());
                    }
                }
                Err(err) => writeln!(self.output, "Error: {err}")?,
            }
        }
    }

    /// Inserts every integer token on the line. Anything that does not
    /// parse is skipped; zeros and duplicates are absorbed by the tree's
    /// insert no-op.
    fn seed(&mut self, line: &str) {
        for token in line.split_whitespace() {
            match token.parse::<i64>() {
                Ok(value) => self.tree.insert(value),
                Err(_) => debug!(token, "skipping non-integer seed token"),
            }
        }
    }

    fn render(&mut self, reply: Reply) -> io::Result<()> {
        match reply {
            Reply::InOrder(values) => {
                writeln!(self.output, "In-order: {}", render_sequence(&values))
            }
            Reply::Predecessor {
                found: Some(value), ..
            } => writeln!(self.output, "{value}"),
            Reply::Predecessor {
                target,
                found: None,
            } => writeln!(self.output, "{target} has no predecessor."),
            Reply::Successor {
                found: Some(value), ..
            } => writeln!(self.output, "{value}"),
            Reply::Successor {
                target,
                found: None,
            } => writeln!(self.output, "{target} has no successor."),
            Reply::Help => self.write_help(),
            Reply::Exit => writeln!(self.output, "// PROGRAM EXITED //"),
        }
    }

    fn write_help(&mut self) -> io::Result<()> {
        writeln!(self.output, "Command List:")?;
        writeln!(self.output, " {:<5} - Insert the value N into the tree", "I [N]")?;
        writeln!(self.output, " {:<5} - Delete the value N from the tree", "D [N]")?;
        writeln!(
            self.output,
            " {:<5} - Print the predecessor of the node with value N",
            "P [N]"
        )?;
        writeln!(
            self.output,
            " {:<5} - Print the successor of the node with value N",
            "S [N]"
        )?;
        writeln!(self.output, " {:<5} - Exit the program", "E")?;
        writeln!(self.output, " {:<5} - Display this list of commands", "H")?;
        Ok(())
    }
}

/// Renders a traversal sequence with a single space after every value, so
/// an empty tree renders as an empty string.
fn render_sequence(values: &[i64]) -> String {
    let mut out = String::new();
    for value in values {
        out.push_str(&value.to_string());
        out.push(' ');
    }
    out
}
