//! Execution of explorer commands.

use crate::{catalog, command::{self, Command, COMMANDS}};
use log::debug;
use realfn_compute::{
    numerical::{fmt::{format_number, FormatOptions}, sample},
    symbolic::{simplify_with_steps, Expr},
};
use realfn_error::Error;

/// Returns the name of the `n`-th derivative of `f`, such as `f''(x)`.
fn derivative_label(n: usize) -> String {
    match n {
        0..=3 => format!("f{}(x)", "'".repeat(n)),
        _ => format!("f^({})(x)", n),
    }
}

/// Formats a point of the function, such as `f(1) = 3`.
fn format_point(x: f64, y: f64, options: FormatOptions) -> String {
    format!("f({}) = {}", format_number(x, options), format_number(y, options))
}

/// Describes the simplification of the `n`-th derivative of `expr`.
fn optimise(expr: &Expr, n: usize) -> String {
    let label = derivative_label(n);
    let derivative = expr.nth_derivative(n);
    let simplified = derivative.simplify();
    format!(
        "{label} = {}\nsimplified from {} to {} nodes:\n{label} = {}",
        derivative,
        derivative.node_count(),
        simplified.node_count(),
        simplified,
    )
}

/// Lists the steps taken to simplify the `n`-th derivative of `expr`.
fn steps(expr: &Expr, n: usize) -> String {
    let (simplified, steps) = simplify_with_steps(&expr.nth_derivative(n));
    let mut lines = steps.iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {}", i + 1, step))
        .collect::<Vec<_>>();
    if lines.is_empty() {
        lines.push(String::from("already simplified"));
    }
    lines.push(format!("{} = {}", derivative_label(n), simplified));
    lines.join("\n")
}

/// Executes the command, returning its output.
pub fn execute(command: Command, options: FormatOptions) -> String {
    match command {
        Command::List => catalog::all()
            .into_iter()
            .map(|f| format!("{:<10} {}", f.name, f.expr.fmt(options)))
            .collect::<Vec<_>>()
            .join("\n"),
        Command::Help => COMMANDS.iter()
            .map(|info| format!("{:<26} {}", info.usage, info.description))
            .collect::<Vec<_>>()
            .join("\n"),
        Command::Show(f) => format!("f(x) = {}", f.expr.fmt(options)),
        Command::Eval(f, x) => format_point(x, f.expr.eval(x), options),
        Command::Diff(f, n) => format!("{} = {}", derivative_label(n), f.expr.nth_derivative(n).fmt(options)),
        Command::Opt(f, n) => optimise(&f.expr, n),
        Command::Steps(f, n) => steps(&f.expr, n),
        Command::Table { function, from, to, steps } => sample(&function.expr, from, to, steps)
            .into_iter()
            .map(|(x, y)| format_point(x, y, options))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Parses and executes a line of input, returning its output. Blank lines produce no output.
pub fn run(input: &str) -> Result<String, Error> {
    debug!("running `{}`", input.trim());
    match command::parse(input)? {
        Some(command) => Ok(execute(command, FormatOptions::default())),
        None => Ok(String::new()),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn output(input: &str) -> String {
        run(input).unwrap()
    }

    #[test]
    fn labels() {
        assert_eq!(derivative_label(0), "f(x)");
        assert_eq!(derivative_label(2), "f''(x)");
        assert_eq!(derivative_label(4), "f^(4)(x)");
    }

    #[test]
    fn list() {
        assert_eq!(output("list"), [
            "poly       2 * x^2 + x",
            "cubic-log  x^3 + log(sin(x))",
            "nested     sin(cos(log(x)))",
            "tangent    cos(x)^-1 * sin(x)",
            "three      sin(x)^2 * cos(x^2)",
        ].join("\n"));
    }

    #[test]
    fn help_lists_every_command() {
        let help = output("help");
        assert_eq!(help.lines().count(), COMMANDS.len());
        assert!(help.contains("table NAME FROM TO STEPS"));
    }

    #[test]
    fn show_and_eval() {
        assert_eq!(output("show poly"), "f(x) = 2 * x^2 + x");
        assert_eq!(output("eval poly 1"), "f(1) = 3");
        assert_eq!(output("eval nested 1"), "f(1) = 0.8415");
        assert_eq!(output("eval tangent 0"), "f(0) = 0");
        assert_eq!(output("eval cubic-log -1"), "f(-1) = NaN");
    }

    #[test]
    fn diff() {
        assert_eq!(output("diff poly"), "f'(x) = 0 + 2 * 2 * x + 1");
        assert_eq!(output("diff poly 0"), "f(x) = 2 * x^2 + x");
        assert_eq!(output("diff nested 0"), output("show nested"));
    }

    #[test]
    fn opt() {
        let out = output("opt poly 1");
        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "f'(x) = 0 + 2 * 2 * x + 1");
        assert!(lines[1].starts_with("simplified from"));
        assert_eq!(lines[2], "f'(x) = 2 * 2 * x + 1");

        // the default is the fourth derivative
        assert!(output("opt three").starts_with("f^(4)(x) = "));
    }

    #[test]
    fn steps() {
        assert_eq!(output("steps poly"), [
            "1. 0 * a = 0",
            "2. x^1 = x",
            "3. 1 * a = a",
            "4. 0 + a = a",
            "f'(x) = 2 * 2 * x + 1",
        ].join("\n"));
        assert_eq!(output("steps nested 0"), "already simplified\nf(x) = sin(cos(log(x)))");
    }

    #[test]
    fn table() {
        assert_eq!(output("table poly 0 2 4"), [
            "f(0) = 0",
            "f(0.5) = 1",
            "f(1) = 3",
            "f(1.5) = 6",
            "f(2) = 10",
        ].join("\n"));
        assert_eq!(output("table poly 3 5 0"), "f(3) = 21");
    }

    #[test]
    fn blank_line() {
        assert_eq!(output("  "), "");
    }

    #[test]
    fn errors() {
        assert!(run("eval poly").is_err());
        assert!(run("show tan").is_err());
        assert!(run("diff three 12").is_err());
    }
}
