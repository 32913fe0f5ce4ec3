use ariadne::{Fmt, Report};
use realfn_error::{build_report, ErrorKind, EXPR};
use std::ops::Range;

/// Formats a "did you mean" help message for the given suggestions.
fn suggestion_help(what: &str, suggestions: &[String], fallback: &str) -> String {
    match suggestions {
        [] => fallback.to_string(),
        [suggestion] => format!("did you mean the `{}` {}?", suggestion.fg(EXPR), what),
        _ => format!(
            "did you mean one of these {}s? {}",
            what,
            suggestions
                .iter()
                .map(|s| format!("`{}`", s.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}

/// The command does not exist.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownCommand {
    /// The name of the command that was given.
    pub name: String,

    /// A list of similarly named commands, if any.
    pub suggestions: Vec<String>,
}

impl ErrorKind for UnknownCommand {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        build_report(
            src_id,
            spans,
            format!("the `{}` command does not exist", self.name),
            &["this command".to_string()],
            Some(suggestion_help(
                "command",
                &self.suggestions,
                "type `help` for a list of available commands",
            )),
        )
    }
}

/// The function is not in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownFunction {
    /// The name of the function that was given.
    pub name: String,

    /// A list of similarly named functions, if any.
    pub suggestions: Vec<String>,
}

impl ErrorKind for UnknownFunction {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        build_report(
            src_id,
            spans,
            format!("the `{}` function does not exist", self.name),
            &["this function".to_string()],
            Some(suggestion_help(
                "function",
                &self.suggestions,
                "type `list` for a list of available functions",
            )),
        )
    }
}

/// A required argument to a command is missing.
#[derive(Debug, Clone, PartialEq)]
pub struct MissingArgument {
    /// The name of the command.
    pub command: &'static str,

    /// The name of the missing argument.
    pub argument: &'static str,

    /// The usage of the command.
    pub usage: &'static str,
}

impl ErrorKind for MissingArgument {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        build_report(
            src_id,
            spans,
            format!("missing the `{}` argument for the `{}` command", self.argument, self.command),
            &["this command".to_string()],
            Some(format!("usage: {}", self.usage.fg(EXPR))),
        )
    }
}

/// Too many arguments were given to a command.
#[derive(Debug, Clone, PartialEq)]
pub struct TooManyArguments {
    /// The name of the command.
    pub command: &'static str,

    /// The usage of the command.
    pub usage: &'static str,
}

impl ErrorKind for TooManyArguments {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        build_report(
            src_id,
            spans,
            format!("too many arguments were given to the `{}` command", self.command),
            &["this argument is unexpected".to_string()],
            Some(format!("usage: {}", self.usage.fg(EXPR))),
        )
    }
}

/// The kind of number an argument must be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    /// Any real number, such as `2` or `-0.5`.
    Real,

    /// A non-negative integer, such as `0` or `4`.
    Count,
}

impl NumberKind {
    fn describe(self) -> &'static str {
        match self {
            Self::Real => "a real number",
            Self::Count => "a non-negative integer",
        }
    }
}

/// An argument could not be parsed as a number.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidNumber {
    /// The text of the argument.
    pub text: String,

    /// The kind of number that was expected.
    pub expected: NumberKind,
}

impl ErrorKind for InvalidNumber {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        build_report(
            src_id,
            spans,
            format!("`{}` is not {}", self.text, self.expected.describe()),
            &[format!("expected {} here", self.expected.describe())],
            None,
        )
    }
}

/// The requested derivative order is too large to build.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderTooLarge {
    /// The order that was given.
    pub order: usize,

    /// The largest accepted order.
    pub max: usize,
}

impl ErrorKind for OrderTooLarge {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        build_report(
            src_id,
            spans,
            format!("cannot compute a derivative of order {}", self.order),
            &[format!("expected at most {} here", self.max)],
            Some(format!(
                "unsimplified derivatives grow too quickly; the largest accepted order is {}",
                self.max.fg(EXPR),
            )),
        )
    }
}
