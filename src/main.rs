use std::{fs, process::ExitCode};

use clap::Parser;
use rpncalc::{
    Interpreter,
    repl::{self, Reply, process_line},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// rpncalc evaluates arithmetic, comparison and boolean expressions such as
/// `(2 + 3) * 4 >= 20 and !false`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells rpncalc to read expressions from a file, one per line, instead of
    /// evaluating a single expression.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Prints tokens, postfix order and every stack step on stderr.
    #[arg(short, long)]
    debug: bool,

    /// An expression, or a path with `--file`. Starts the interactive loop
    /// when omitted.
    contents: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.debug);

    let interpreter = if args.debug { Interpreter::traced() } else { Interpreter::new() };

    match args.contents {
        None => match repl::run(interpreter) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            },
        },
        Some(path) if args.file => run_file(&interpreter, &path),
        Some(expression) => match interpreter.evaluate(&expression) {
            Ok(value) => {
                println!("{value}");
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            },
        },
    }
}

/// Evaluates every line of a file, stopping early at `exit`.
fn run_file(interpreter: &Interpreter, path: &str) -> ExitCode {
    let Ok(script) = fs::read_to_string(path) else {
        eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
        return ExitCode::FAILURE;
    };

    let mut failed = false;
    for line in script.lines() {
        match process_line(interpreter, line) {
            Reply::Exit => break,
            Reply::Skip => {},
            reply @ Reply::Value(_) => println!("{reply}"),
            reply @ Reply::Error(_) => {
                failed = true;
                println!("{reply}");
            },
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

/// Installs the stderr subscriber. `RUST_LOG` overrides the default filter.
fn init_tracing(debug: bool) {
    let default = if debug { "rpncalc=trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr))
                                  .with(filter)
                                  .init();
}
