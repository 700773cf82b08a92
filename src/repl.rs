use rustyline::{DefaultEditor, error::ReadlineError};

use crate::{Interpreter, error::EvaluationError, interpreter::value::core::Value};

/// Prompt shown before every line.
pub const PROMPT: &str = "Enter a mathematical expression (or 'exit' to quit): ";

/// What the loop does with one line of input.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// `exit` in any letter case: stop reading.
    Exit,
    /// A blank line: nothing to print.
    Skip,
    /// The expression evaluated to a value.
    Value(Value),
    /// The expression failed; the loop carries on.
    Error(EvaluationError),
}

impl std::fmt::Display for Reply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exit | Self::Skip => Ok(()),
            Self::Value(value) => write!(f, "Result: {value}"),
            Self::Error(e) => write!(f, "Error: {e}"),
        }
    }
}

/// Decides what to do with one line of input.
///
/// Surrounding whitespace is ignored when looking for `exit`; the line is
/// otherwise passed to the interpreter unchanged.
///
/// # Example
/// ```
/// use rpncalc::{
///     Interpreter,
///     repl::{Reply, process_line},
/// };
///
/// let interpreter = Interpreter::new();
/// assert_eq!(process_line(&interpreter, " EXIT "), Reply::Exit);
/// assert_eq!(process_line(&interpreter, "2 * 3").to_string(), "Result: 6.0");
/// ```
#[must_use]
pub fn process_line(interpreter: &Interpreter, line: &str) -> Reply {
    let trimmed = line.trim();

    if trimmed.eq_ignore_ascii_case("exit") {
        Reply::Exit
    } else if trimmed.is_empty() {
        Reply::Skip
    } else {
        match interpreter.evaluate(line) {
            Ok(value) => Reply::Value(value),
            Err(e) => Reply::Error(e),
        }
    }
}

/// Runs the interactive loop until `exit` or end of input.
///
/// Ctrl-C discards the current line. Errors in expressions are printed and
/// never end the loop; only a failing terminal does.
pub fn run(interpreter: Interpreter) -> Result<(), ReadlineError> {
    let mut rl = DefaultEditor::new()?;

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty()
                   && let Err(e) = rl.add_history_entry(line.as_str())
                {
                    tracing::warn!("Failed to add history entry: {e}");
                }

                match process_line(&interpreter, &line) {
                    Reply::Exit => break,
                    Reply::Skip => {},
                    reply => println!("{reply}"),
                }
            },
            Err(ReadlineError::Interrupted) => println!("^C"),
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
