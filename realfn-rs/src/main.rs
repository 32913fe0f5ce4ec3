mod catalog;
mod command;
mod error;
mod exec;

use log::{error, info};
use rustyline::{error::ReadlineError, DefaultEditor};
use std::io::{self, BufRead, IsTerminal};

/// Runs the given line of input, printing the output or reporting the error. Returns `false` if
/// the line failed.
fn run_line(input: &str) -> bool {
    match exec::run(input) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
            true
        },
        Err(err) => {
            if let Err(io_err) = err.report_to_stderr("input", input) {
                error!("could not report error: {}", io_err);
            }
            false
        },
    }
}

/// Reads a line from the editor and runs it.
fn process_line(rl: &mut DefaultEditor) -> Result<(), ReadlineError> {
    let input = rl.readline("> ")?;
    if input.trim().is_empty() {
        return Ok(());
    }

    rl.add_history_entry(&input)?;

    run_line(&input);
    Ok(())
}

fn main() {
    env_logger::init();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    if !args.is_empty() {
        // run the command given on the command line
        if !run_line(&args.join(" ")) {
            std::process::exit(1);
        }
    } else if !io::stdin().is_terminal() {
        // run each line from stdin
        let mut failed = false;
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => failed |= !run_line(&line),
                Err(err) => {
                    error!("could not read from stdin: {}", err);
                    std::process::exit(1);
                },
            }
        }

        if failed {
            std::process::exit(1);
        }
    } else {
        // run the repl / interactive mode
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(err) => {
                eprintln!("{}", err);
                std::process::exit(1);
            },
        };
        info!("starting interactive mode");
        println!("type `help` for a list of commands, `list` for the example functions");

        loop {
            if let Err(err) = process_line(&mut rl) {
                match err {
                    ReadlineError::Eof | ReadlineError::Interrupted => (),
                    _ => eprintln!("{}", err),
                }
                break;
            }
        }
    }
}
