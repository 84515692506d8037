use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::Parser;
use log::LevelFilter;

mod config;
mod diff;
mod error;
mod render;
mod utils;

use config::{Comparison, Invocation};
use error::DiffError;
use render::BitRows;

#[derive(Debug, Parser)]
#[clap(
    version,
    about = "Compare two 64-bit numbers bit by bit",
    allow_negative_numbers = true
)]
struct Args {
    /// Two operands followed by an optional result length (1-64)
    #[clap(value_name = "VALUE")]
    values: Vec<String>,
    /// Prefix each value row with the operand in hex
    #[clap(short = 'x', long = "hex")]
    hex: bool,
    /// Log more, repeat for even more
    #[clap(short, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// What to do with the raw command line.
#[derive(Debug)]
enum CommandLine {
    Run(Args),
    Usage,
    /// Help or version text, printed by clap itself.
    Exit(clap::Error),
}

impl CommandLine {
    /// Malformed command lines get the usage text, like a wrong value count.
    fn parse<I, T>(argv: I) -> CommandLine
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Args::try_parse_from(argv) {
            Ok(args) => CommandLine::Run(args),
            Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                CommandLine::Exit(err)
            }
            Err(_) => CommandLine::Usage,
        }
    }
}

fn level_filter(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn render(comparison: &Comparison, hex: bool) -> BitRows {
    let diffs = diff::differentiate(comparison.left, comparison.right, comparison.length);
    if hex {
        BitRows::with_operands(&diffs, comparison.left, comparison.right)
    } else {
        BitRows::new(&diffs)
    }
}

/// Resolves the command line into the text to print on success.
fn run(program: &str, args: &Args) -> Result<String, DiffError> {
    match Invocation::from_values(args.values.as_slice())? {
        Invocation::Usage => Ok(config::usage(program)),
        Invocation::Compare(comparison) => Ok(render(&comparison, args.hex).to_string()),
    }
}

fn main() {
    let program = std::env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());

    let args = match CommandLine::parse(std::env::args_os()) {
        CommandLine::Run(args) => args,
        CommandLine::Usage => {
            print!("{}", config::usage(&program));
            return;
        }
        CommandLine::Exit(err) => err.exit(),
    };

    env_logger::Builder::new()
        .filter_level(level_filter(args.verbose))
        .init();

    match run(&program, &args) {
        Ok(output) => print!("{}", output),
        Err(err) => {
            println!("{}", err);
            std::process::exit(err.exit_code());
        }
    }
}
