pub mod codegen;
pub mod lexer;
pub mod logger;
pub mod parser;
pub mod pipeline;

pub use pipeline::{translate, Options};
