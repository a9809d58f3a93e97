//! Scheme From Scratch REPL.
//!
//! Run interactively:      `cargo run`.
//! Run a source file as:   `cargo run -- path/to/file.scm`.
//!
//! Logging is controlled through RUST_LOG, e.g. `RUST_LOG=debug cargo run`.

use clap::{Arg, ArgMatches, Command};
use colored::Colorize;
use env_logger::{Builder, Env};
use log::{info, LevelFilter};

use sfs::config::{Limits, DEFAULT_MAX_DEPTH, DEFAULT_MAX_LEN, DEFAULT_TEXT_CAPACITY};
use sfs::error::Error;
use sfs::session::Session;
use sfs::sexp::Sexp;
use sfs::stream::{CliStream, FileStream};


fn main() -> Result<(), String> {
    // Setup logging.
    Builder::from_env(Env::default().default_filter_or("warn"))
        .filter_module("rustyline", LevelFilter::Warn)
        .init();

    // Parse args.
    let matches = Command::new("sfs")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Minimal Scheme front end: quote, if, and and over a small reader")
        .arg(
            Arg::new("FILE")
                .help("Source file to run; starts a REPL when absent")
                .index(1),
        )
        .arg(
            Arg::new("max-len")
                .long("max-len")
                .takes_value(true)
                .value_name("BYTES")
                .help("Longest accepted line or expression"),
        )
        .arg(
            Arg::new("text-capacity")
                .long("text-capacity")
                .takes_value(true)
                .value_name("CHARS")
                .help("Longest accepted string or symbol"),
        )
        .arg(
            Arg::new("max-depth")
                .long("max-depth")
                .takes_value(true)
                .value_name("LISTS")
                .help("Deepest accepted list nesting"),
        )
        .get_matches();

    let limits = Limits {
        max_len: limit(&matches, "max-len", DEFAULT_MAX_LEN)?,
        text_capacity: limit(&matches, "text-capacity", DEFAULT_TEXT_CAPACITY)?,
        max_depth: limit(&matches, "max-depth", DEFAULT_MAX_DEPTH)?,
    };
    info!("Running with {:?}", limits);

    match matches.value_of("FILE") {
        Some(path) => file_repl(path, limits),
        None => interactive_repl(limits),
    }
}

fn limit(matches: &ArgMatches, name: &str, default: usize) -> Result<usize, String> {
    let value = match matches.value_of(name) {
        Some(value) => value,
        None => return Ok(default),
    };
    match value.parse::<usize>() {
        Ok(0) => Err(format!("--{} must be positive", name)),
        Ok(n) => Ok(n),
        Err(err) => Err(format!("--{} '{}': {}", name, value, err)),
    }
}

fn interactive_repl(limits: Limits) -> Result<(), String> {
    println!("Welcome to SFS. Use ctrl-c to abandon an expression, ctrl-d to exit.");
    println!();

    for result in Session::new(CliStream::new(), limits) {
        print_result(&result);
    }
    Ok(())
}

fn file_repl(path: &str, limits: Limits) -> Result<(), String> {
    let stream = match FileStream::new(path) {
        Ok(f) => f,
        Err(err) => return Err(format!("{}: {}", path, err)),
    };

    let mut session = Session::new(stream, limits);
    while let Some(result) = session.next() {
        if let Some(text) = session.last_text() {
            println!("> {}", text);
        }
        if result.is_err() {
            // Errors are reported against the line the expression ended on.
            let stream = session.stream();
            print!(" {}:{}:", stream.path().display(), stream.line());
        }
        print_result(&result);
    }
    Ok(())
}

fn print_result(result: &Result<Sexp, Error>) {
    match result {
        Ok(val) => {
            println!("-> {}", val);
        }
        Err(err) => {
            println!(" {}", err.to_string().red());
        }
    }
    println!();
}
