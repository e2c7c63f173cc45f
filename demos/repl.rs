//! Basic REPL for the expression language.
//!
//! Run as:  `RUST_LOG=debug cargo run --example repl -- --max-depth 64`.
//!
//! A line leaving brackets open is continued on the next line; ^C drops a
//! partial expression and ^D exits.

use clap::{App, Arg};
use log::{info, LevelFilter};
use rustyline::error::ReadlineError;
use rustyline::Editor;

use minischeme::token::cli_helper::{colorize, open_depth, CliHelper};
use minischeme::Interpreter;


fn main() -> Result<(), String> {
    // Setup logging.
    env_logger::Builder::from_default_env()
        .filter_module("rustyline", LevelFilter::Warn)
        .init();

    // Parse args.
    let matches = App::new("Cli minischeme REPL")
        .version("0.1")
        .about("Reads one expression at a time and prints its value")
        .arg(
            Arg::new("max-depth")
                .long("max-depth")
                .takes_value(true)
                .value_name("N")
                .help("Nesting limit for lists and quotes"),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Print brackets without depth coloring"),
        )
        .get_matches();

    let mut interpreter = Interpreter::default();
    if let Some(depth) = matches.value_of("max-depth") {
        interpreter.max_depth = match depth.parse::<usize>() {
            Ok(depth) => depth,
            Err(err) => return Err(format!("Invalid --max-depth {}: {}", depth, err)),
        };
    }
    let color = !matches.is_present("no-color");
    if !color {
        colored::control::set_override(false);
    }
    info!("Starting REPL with {:?}", interpreter);

    let mut editor = Editor::<CliHelper>::new();
    editor.set_helper(Some(CliHelper::new(color)));

    let mut expr = String::default();
    let mut depth: usize = 0;
    loop {
        let prompt = if expr.is_empty() {
            "> ".to_string()
        } else {
            format!("..{}", "  ".repeat(depth))
        };

        match editor.readline(&prompt) {
            Ok(line) => {
                if !expr.is_empty() {
                    expr.push('\n');
                }
                expr += &line;

                depth = match open_depth(&expr) {
                    Ok(depth) => depth,
                    Err(err) => {
                        println!("{}", err);
                        println!("");
                        expr.clear();
                        depth = 0;
                        continue;
                    }
                };
                if depth > 0 {
                    continue;
                }
                if expr.trim().is_empty() {
                    expr.clear();
                    continue;
                }

                editor.add_history_entry(expr.as_str());
                match interpreter.run(&expr) {
                    Ok(text) if color => println!("-> {}", colorize(&text)),
                    Ok(text) => println!("-> {}", text),
                    Err(err) => println!("{}", err),
                }
                println!("");
                expr.clear();
            }
            Err(ReadlineError::Interrupted) => {
                // Enable ^C to cancel an expression mid-parse.
                println!("^C");
                expr.clear();
                depth = 0;
            }
            Err(ReadlineError::Eof) => {
                println!("^D");
                break;
            }
            Err(err) => {
                println!("[Readline Error]: {:?}", err);
                println!("");
                expr.clear();
                depth = 0;
            }
        }
    }

    Ok(())
}
