pub mod c;

use crate::parser::{BasicBlock, Program};

/// Tape size used when nothing else is asked for
pub const DEFAULT_TAPE_SIZE: usize = 30_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodegenOptions {
    /// Number of cells in the generated program's memory buffer
    pub tape_size: usize,

    /// Spaces per nesting level, purely cosmetic
    pub indent_width: usize,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self {
            tape_size: DEFAULT_TAPE_SIZE,
            indent_width: 4,
        }
    }
}

pub trait CodeGen {
    fn new(options: CodegenOptions) -> Self;

    /// Emit the instructions for `block` only, nested `indent_level` deep
    fn emit_block(&mut self, block: &BasicBlock, indent_level: usize);

    /// Wrap `program` in the target's preamble/epilogue
    fn load(&mut self, program: &Program);

    fn to_source(&self) -> &str;
}

pub fn generate<G: CodeGen>(program: &Program, options: CodegenOptions) -> String {
    let mut codegen = G::new(options);
    codegen.load(program);
    codegen.to_source().to_owned()
}

pub use self::c::CCodeGen;
