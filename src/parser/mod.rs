use std::fmt;

use thiserror::Error;

use crate::lexer::Operation;

pub mod parser;

/// Loops nested deeper than this are rejected rather than risking the stack
pub const DEFAULT_MAX_DEPTH: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AstKind {
    /// `count` consecutive copies of the same operation, always at least 1
    Run { op: Operation, count: usize },

    Loop(BasicBlock),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasicBlock {
    pub instructions: Vec<AstKind>,
}

pub type Program = BasicBlock;

impl BasicBlock {
    pub fn new(instructions: Vec<AstKind>) -> Self {
        Self { instructions }
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Number of nodes in this block including everything nested inside loops
    pub fn node_count(&self) -> usize {
        self.instructions
            .iter()
            .map(|instruction| match instruction {
                AstKind::Run { .. } => 1,
                AstKind::Loop(body) => 1 + body.node_count(),
            })
            .sum()
    }
}

/// One line, space separated, e.g. `DerefIncrement(2) Loop[DerefDecrement(1)]`
impl fmt::Display for BasicBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, instruction) in self.instructions.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match instruction {
                AstKind::Run { op, count } => write!(f, "{op:?}({count})")?,
                AstKind::Loop(body) => write!(f, "Loop[{body}]")?,
            }
        }
        Ok(())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParserError {
    #[error("unmatched ']' at offset {offset} (line {line}, column {column})")]
    UnmatchedClose {
        offset: usize,
        line: usize,
        column: usize,
    },

    #[error("unmatched '[' opened at offset {offset} (line {line}, column {column})")]
    UnmatchedOpen {
        offset: usize,
        line: usize,
        column: usize,
    },

    #[error("loops nested deeper than {limit} levels at offset {offset} (line {line}, column {column})")]
    NestingTooDeep {
        limit: usize,
        offset: usize,
        line: usize,
        column: usize,
    },
}

impl ParserError {
    pub fn offset(&self) -> usize {
        match self {
            ParserError::UnmatchedClose { offset, .. }
            | ParserError::UnmatchedOpen { offset, .. }
            | ParserError::NestingTooDeep { offset, .. } => *offset,
        }
    }
}
