//! Parsing of explorer commands.
//!
//! A command is a line of whitespace-separated words: the name of the command, followed by its
//! arguments. Every word keeps its position in the line, so that errors can point at it.

use crate::{
    catalog::{self, Function},
    error::{
        kind::{InvalidNumber, MissingArgument, NumberKind, OrderTooLarge, TooManyArguments, UnknownCommand, UnknownFunction},
        similar,
    },
};
use realfn_error::Error;
use std::{ops::Range, slice::Iter};

/// A word of the input, along with its position.
#[derive(Debug, Clone, PartialEq)]
pub struct Word<'a> {
    pub text: &'a str,
    pub span: Range<usize>,
}

/// Splits the input into words.
pub fn words(input: &str) -> Vec<Word<'_>> {
    let mut words = Vec::new();
    let mut start = None;
    for (i, c) in input.char_indices() {
        if c.is_whitespace() {
            if let Some(s) = start.take() {
                words.push(Word { text: &input[s..i], span: s..i });
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }

    if let Some(s) = start {
        words.push(Word { text: &input[s..], span: s..input.len() });
    }
    words
}

/// The largest derivative order accepted by `diff`, `opt` and `steps`. Unsimplified derivative
/// trees grow combinatorially with the order.
pub const MAX_ORDER: usize = 8;

/// Information about a command, shown by `help`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandInfo {
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
}

/// All commands understood by the explorer.
pub static COMMANDS: [CommandInfo; 8] = [
    CommandInfo {
        name: "list",
        usage: "list",
        description: "lists the example functions",
    },
    CommandInfo {
        name: "help",
        usage: "help",
        description: "shows this message",
    },
    CommandInfo {
        name: "show",
        usage: "show NAME",
        description: "prints a function",
    },
    CommandInfo {
        name: "eval",
        usage: "eval NAME X",
        description: "evaluates a function at X",
    },
    CommandInfo {
        name: "diff",
        usage: "diff NAME [N]",
        description: "prints the N-th derivative of a function (default: 1, at most 8)",
    },
    CommandInfo {
        name: "opt",
        usage: "opt NAME [N]",
        description: "differentiates a function N times (default: 4, at most 8), then simplifies it",
    },
    CommandInfo {
        name: "steps",
        usage: "steps NAME [N]",
        description: "lists the steps taken to simplify the N-th derivative (default: 1, at most 8)",
    },
    CommandInfo {
        name: "table",
        usage: "table NAME FROM TO STEPS",
        description: "samples a function at STEPS + 1 evenly spaced points",
    },
];

/// A command that can be executed.
#[derive(Debug, Clone)]
pub enum Command {
    List,
    Help,
    Show(Function),
    Eval(Function, f64),
    Diff(Function, usize),
    Opt(Function, usize),
    Steps(Function, usize),
    Table {
        function: Function,
        from: f64,
        to: f64,
        steps: usize,
    },
}

/// The arguments following a command name.
struct Args<'w, 'a> {
    info: &'static CommandInfo,
    command: &'w Word<'a>,
    rest: Iter<'w, Word<'a>>,
}

impl<'w, 'a> Args<'w, 'a> {
    /// Returns the next argument, or an error naming the missing argument.
    fn next_required(&mut self, argument: &'static str) -> Result<&'w Word<'a>, Error> {
        self.rest.next().ok_or_else(|| Error::new(
            vec![self.command.span.clone()],
            MissingArgument {
                command: self.info.name,
                argument,
                usage: self.info.usage,
            },
        ))
    }

    /// Parses the next argument as the name of a function in the catalog.
    fn function(&mut self) -> Result<Function, Error> {
        let word = self.next_required("NAME")?;
        catalog::get(word.text).ok_or_else(|| Error::new(
            vec![word.span.clone()],
            UnknownFunction {
                name: word.text.to_string(),
                suggestions: similar(word.text, catalog::names()),
            },
        ))
    }

    /// Parses the next argument as a real number.
    fn real(&mut self, argument: &'static str) -> Result<f64, Error> {
        let word = self.next_required(argument)?;
        parse_number(word, NumberKind::Real)
    }

    /// Parses the next argument as a count.
    fn count(&mut self, argument: &'static str) -> Result<usize, Error> {
        let word = self.next_required(argument)?;
        parse_number(word, NumberKind::Count)
    }

    /// Parses the next argument as a derivative order, if there is one.
    fn order(&mut self, default: usize) -> Result<usize, Error> {
        let Some(word) = self.rest.next() else {
            return Ok(default);
        };

        let order = parse_number(word, NumberKind::Count)?;
        if order > MAX_ORDER {
            return Err(Error::new(
                vec![word.span.clone()],
                OrderTooLarge { order, max: MAX_ORDER },
            ));
        }
        Ok(order)
    }

    /// Checks that all arguments were consumed.
    fn finish(mut self) -> Result<(), Error> {
        match self.rest.next() {
            Some(word) => Err(Error::new(
                vec![word.span.clone()],
                TooManyArguments {
                    command: self.info.name,
                    usage: self.info.usage,
                },
            )),
            None => Ok(()),
        }
    }
}

/// Parses a word as the given kind of number.
fn parse_number<T: std::str::FromStr>(word: &Word, expected: NumberKind) -> Result<T, Error> {
    word.text.parse().map_err(|_| Error::new(
        vec![word.span.clone()],
        InvalidNumber {
            text: word.text.to_string(),
            expected,
        },
    ))
}

/// Creates the error for a command name that has no parser.
fn unknown_command(command: &Word) -> Error {
    Error::new(
        vec![command.span.clone()],
        UnknownCommand {
            name: command.text.to_string(),
            suggestions: similar(command.text, COMMANDS.iter().map(|info| info.name)),
        },
    )
}

/// Parses a line of input into a command. Returns `None` if the line is blank.
pub fn parse(input: &str) -> Result<Option<Command>, Error> {
    let words = words(input);
    let Some((command, rest)) = words.split_first() else {
        return Ok(None);
    };

    let Some(info) = COMMANDS.iter().find(|info| info.name == command.text) else {
        return Err(unknown_command(command));
    };

    let mut args = Args { info, command, rest: rest.iter() };
    let parsed = match info.name {
        "list" => Command::List,
        "help" => Command::Help,
        "show" => Command::Show(args.function()?),
        "eval" => {
            let function = args.function()?;
            Command::Eval(function, args.real("X")?)
        },
        "diff" => {
            let function = args.function()?;
            Command::Diff(function, args.order(1)?)
        },
        "opt" => {
            let function = args.function()?;
            Command::Opt(function, args.order(4)?)
        },
        "steps" => {
            let function = args.function()?;
            Command::Steps(function, args.order(1)?)
        },
        "table" => {
            let function = args.function()?;
            let from = args.real("FROM")?;
            let to = args.real("TO")?;
            let steps = args.count("STEPS")?;
            Command::Table { function, from, to, steps }
        },
        _ => return Err(unknown_command(command)),
    };

    args.finish()?;
    Ok(Some(parsed))
}
