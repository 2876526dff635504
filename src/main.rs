extern crate clap;
extern crate thiserror;

use std::{
    io::{self, Read, Write},
    path::PathBuf,
    process::ExitCode,
};

use brainfuck2c::{
    codegen::{CodegenOptions, DEFAULT_TAPE_SIZE},
    logger::{self, LogLevel},
    parser::{ParserError, DEFAULT_MAX_DEPTH},
    pipeline::{self, Options},
};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use thiserror::Error;
use tracing::debug;

/// Brainf**k to C translator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The file to translate, reads stdin when missing or `-`
    #[arg()]
    file: Option<PathBuf>,

    /// Where to write the result, defaults to stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = Emit::C)]
    emit: Emit,

    /// Number of cells in the generated program's tape
    #[arg(short, long, default_value_t = DEFAULT_TAPE_SIZE)]
    tape_size: usize,

    /// Deepest loop nesting accepted before giving up
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// More output per occurrence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Emit {
    /// Output the lexer
    Tokens,
    /// Output the ast
    Ast,
    /// Output C source
    C,
}

#[derive(Error, Debug)]
enum CliError {
    #[error("couldn't read {path}: {source}")]
    Read { path: String, source: io::Error },

    #[error("couldn't write {path}: {source}")]
    Write { path: String, source: io::Error },

    #[error(transparent)]
    Parse(#[from] ParserError),
}

fn display_path(path: &Option<PathBuf>, fallback: &str) -> String {
    match path {
        Some(path) => path.display().to_string(),
        None => fallback.to_string(),
    }
}

fn read_source(file: &Option<PathBuf>) -> Result<Vec<u8>, CliError> {
    let result = match file {
        Some(path) if path.as_os_str() != "-" => std::fs::read(path),
        _ => {
            let mut buf = vec![];
            io::stdin().read_to_end(&mut buf).map(|_| buf)
        }
    };

    result.map_err(|source| CliError::Read {
        path: display_path(file, "<stdin>"),
        source,
    })
}

fn write_output(output: &Option<PathBuf>, text: &str) -> Result<(), CliError> {
    let result = match output {
        Some(path) => std::fs::write(path, text),
        None => io::stdout().lock().write_all(text.as_bytes()),
    };

    result.map_err(|source| CliError::Write {
        path: display_path(output, "<stdout>"),
        source,
    })
}

fn run(args: &Args) -> Result<(), CliError> {
    debug!("Running {}", display_path(&args.file, "<stdin>"));
    let source = read_source(&args.file)?;

    let text = match args.emit {
        Emit::Tokens => {
            let mut text: String = pipeline::lex_source(&source)
                .iter()
                .map(|token| token.kind.as_char())
                .collect();
            text.push('\n');
            text
        }
        Emit::Ast => format!("{}\n", pipeline::parse_source(&source, args.max_depth)?),
        Emit::C => {
            let options = Options {
                max_depth: args.max_depth,
                codegen: CodegenOptions {
                    tape_size: args.tape_size,
                    ..CodegenOptions::default()
                },
            };
            pipeline::translate(&source, &options)?
        }
    };

    write_output(&args.output, &text)
}

fn main() -> ExitCode {
    let args = Args::parse();
    logger::init_with_level(LogLevel::from_verbosity(args.verbose));

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{0:}: {1:}", "Error".red(), e);
            ExitCode::FAILURE
        }
    }
}
