//! Lisp interpreter CLI.

use std::io;
use std::process::ExitCode;

use lisp_eval::InterpreterBuilder;
use lispc::commands::{finish, lex_file, parse_file, run_file, run_repl, RunOptions};
use lispc::{init_tracing, CliError};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    let mut options = RunOptions::default();
    let mut positional = Vec::new();
    for arg in args.iter().skip(1) {
        match options.apply_flag(arg) {
            Ok(true) => {}
            Ok(false) => positional.push(arg.as_str()),
            Err(msg) => {
                eprintln!("error: {msg}");
                return ExitCode::FAILURE;
            }
        }
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match positional.as_slice() {
        [] | ["repl"] => {
            let mut interpreter = InterpreterBuilder::new()
                .max_call_depth(options.max_call_depth)
                .build();
            run_repl(io::stdin().lock(), &mut out, &mut interpreter)
        }
        ["help" | "--help" | "-h"] => {
            print_usage();
            Ok(())
        }
        ["version" | "--version" | "-V"] => {
            println!("lisp {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        ["run", path] => run_file(path, &options, &mut out).map(drop),
        ["lex", path] => lex_file(path, &mut out),
        ["parse", path] => parse_file(path, &mut out),
        ["run" | "lex" | "parse"] => {
            eprintln!("Usage: lisp {} <file>", positional[0]);
            return ExitCode::FAILURE;
        }
        [path] if !path.starts_with('-') => run_file(path, &options, &mut out).map(drop),
        _ => {
            eprintln!("Unknown command: {}", positional.join(" "));
            eprintln!();
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    report(finish(result, &mut out))
}

fn report(result: Result<(), CliError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    println!("Lisp interpreter");
    println!();
    println!("Usage: lisp [command] [options]");
    println!();
    println!("Commands:");
    println!("  <file>              Run a program (same as `run <file>`)");
    println!("  run <file>          Evaluate every form in a file");
    println!("  repl                Start an interactive session (default)");
    println!("  lex <file>          Tokenize and display tokens");
    println!("  parse <file>        Parse and display each form");
    println!("  help                Show this help message");
    println!("  version             Show version information");
    println!();
    println!("Options:");
    println!("  --max-depth=<n>     Maximum nested function calls (default: 10000)");
    println!();
    println!("Environment:");
    println!("  LISP_LOG=<filter>   Enable tracing, e.g. LISP_LOG=lisp_eval=debug");
    println!();
    println!("Examples:");
    println!("  lisp fact.lisp");
    println!("  lisp run deep.lisp --max-depth=50000");
    println!("  lisp parse fact.lisp");
}
