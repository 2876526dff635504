use std::iter::Enumerate;
use std::slice::Iter;

use super::{LexerToken, LexerTokenKind};

#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /** Human Readable positions in file */
    pub cur_line: usize,
    pub cur_col: usize,

    bytes: Enumerate<Iter<'a, u8>>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a [u8]) -> Lexer<'a> {
        Lexer {
            cur_col: 1,
            cur_line: 1,

            bytes: source.iter().enumerate(),
        }
    }

    /// Advances past one byte, returning it along with its offset and where it sat
    fn consume_byte(&mut self) -> Option<(usize, u8, usize, usize)> {
        let (offset, &b) = self.bytes.next()?;
        let (line, column) = (self.cur_line, self.cur_col);

        self.cur_col += 1;
        if b == b'\n' {
            self.cur_line += 1;
            self.cur_col = 1;
        }

        Some((offset, b, line, column))
    }

    /// Every byte outside of the alphabet is a comment and is silently skipped
    pub fn next_token(&mut self) -> Option<LexerToken> {
        while let Some((offset, b, line, column)) = self.consume_byte() {
            if let Some(kind) = LexerTokenKind::from_byte(b) {
                return Some(LexerToken {
                    kind,
                    offset,
                    line,
                    column,
                });
            }
        }

        None
    }

    pub fn collect_tokens(&mut self) -> Vec<LexerToken> {
        self.by_ref().collect()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = LexerToken;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}
