use crate::lexer::Operation;
use crate::parser::{AstKind, BasicBlock, Program};

use super::{CodeGen, CodegenOptions};

/// Emits portable C backed by `putchar`/`getchar`
#[derive(Debug, Clone)]
pub struct CCodeGen {
    options: CodegenOptions,
    output: String,
}

impl CCodeGen {
    fn line(&mut self, indent_level: usize, text: &str) {
        let width = indent_level * self.options.indent_width;
        self.output.extend(std::iter::repeat(' ').take(width));
        self.output.push_str(text);
        self.output.push('\n');
    }

    /// Output/input runs of one are a single statement, anything longer is a counted loop
    fn emit_repeated(&mut self, indent_level: usize, count: usize, statement: &str) {
        if count == 1 {
            self.line(indent_level, statement);
        } else {
            self.line(
                indent_level,
                &format!("for (int i = 0; i < {count}; i++) {{"),
            );
            self.line(indent_level + 1, statement);
            self.line(indent_level, "}");
        }
    }

    fn emit_run(&mut self, op: Operation, count: usize, indent_level: usize) {
        match op {
            Operation::DerefIncrement => self.line(indent_level, &format!("*ptr += {count};")),
            Operation::DerefDecrement => self.line(indent_level, &format!("*ptr -= {count};")),
            Operation::Increment => self.line(indent_level, &format!("ptr += {count};")),
            Operation::Decrement => self.line(indent_level, &format!("ptr -= {count};")),
            Operation::Write => self.emit_repeated(indent_level, count, "putchar(*ptr);"),
            Operation::Read => self.emit_repeated(indent_level, count, "*ptr = getchar();"),
        }
    }
}

impl CodeGen for CCodeGen {
    fn new(options: CodegenOptions) -> Self {
        Self {
            options,
            output: String::new(),
        }
    }

    fn emit_block(&mut self, block: &BasicBlock, indent_level: usize) {
        for instruction in block.instructions.iter() {
            match instruction {
                AstKind::Run { op, count } => self.emit_run(*op, *count, indent_level),
                AstKind::Loop(body) => {
                    self.line(indent_level, "while (*ptr) {");
                    self.emit_block(body, indent_level + 1);
                    self.line(indent_level, "}");
                }
            }
        }
    }

    fn load(&mut self, program: &Program) {
        self.line(0, "#include <stdio.h>");
        self.line(0, "#include <stdlib.h>");
        self.line(0, "");
        self.line(0, &format!("#define TAPE_SIZE {}", self.options.tape_size));
        self.line(0, "");
        self.line(0, "int main(void) {");
        self.line(1, "unsigned char array[TAPE_SIZE] = {0};");
        self.line(1, "unsigned char *ptr = array;");
        self.line(0, "");

        self.emit_block(program, 1);

        self.line(0, "");
        self.line(1, "return 0;");
        self.line(0, "}");
    }

    fn to_source(&self) -> &str {
        &self.output
    }
}
