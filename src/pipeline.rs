use std::time::Instant;

use tracing::{debug, info};

use crate::codegen::{generate, CCodeGen, CodegenOptions};
use crate::lexer::lexer::Lexer;
use crate::lexer::LexerToken;
use crate::parser::parser::Parser;
use crate::parser::{ParserError, Program, DEFAULT_MAX_DEPTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub max_depth: usize,
    pub codegen: CodegenOptions,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            codegen: CodegenOptions::default(),
        }
    }
}

pub fn lex_source(source: &[u8]) -> Vec<LexerToken> {
    debug!("Starting lexing");
    let now = Instant::now();
    let tokens = Lexer::new(source).collect_tokens();
    info!(
        "Finished lexing {} tokens in {:.2?}",
        tokens.len(),
        now.elapsed()
    );
    tokens
}

pub fn parse_tokens(tokens: &[LexerToken], max_depth: usize) -> Result<Program, ParserError> {
    debug!("Starting parsing");
    let now = Instant::now();
    let program = Parser::with_max_depth(tokens, max_depth).parse_program()?;
    info!(
        "Finished parsing {} nodes in {:.2?}",
        program.node_count(),
        now.elapsed()
    );
    Ok(program)
}

pub fn parse_source(source: &[u8], max_depth: usize) -> Result<Program, ParserError> {
    parse_tokens(&lex_source(source), max_depth)
}

/// Translates a whole program to C, nothing is produced if the brackets don't match
pub fn translate(source: &[u8], options: &Options) -> Result<String, ParserError> {
    let program = parse_source(source, options.max_depth)?;

    debug!("Starting codegen");
    let now = Instant::now();
    let output = generate::<CCodeGen>(&program, options.codegen);
    info!(
        "Finished codegen of {} bytes in {:.2?}",
        output.len(),
        now.elapsed()
    );

    Ok(output)
}
