use std::fmt;

pub mod lexer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexerTokenKind {
    // `+`: Increment the byte at the `data pointer` by one
    DerefIncrement,
    // `-`: Decrement the byte at the `data pointer` by one
    DerefDecrement,

    // `>`: Increment the `data pointer` by one
    Increment,
    // `<`: Decrement the `data pointer` by one
    Decrement,

    // `.`: Write the byte at the `data pointer` to the `output device`
    Write,
    // `,`: Read the next byte from the `input device` and write it to the `data pointer`
    Read,

    // `[`: If the byte at the `data pointer` is zero, then jump the `instruction pointer` forward to the instruction after the matching `]`
    JumpStart,
    // `]`: If the byte at the `data pointer` is non-zero then jump the `instruction pointer` back to the instruction after the matching `[`
    JumpEnd,
}

/// The subset of symbols that can be repeated and merged into a single run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    DerefIncrement,
    DerefDecrement,
    Increment,
    Decrement,
    Write,
    Read,
}

impl LexerTokenKind {
    pub fn from_byte(b: u8) -> Option<LexerTokenKind> {
        match b {
            b'+' => Some(LexerTokenKind::DerefIncrement),
            b'-' => Some(LexerTokenKind::DerefDecrement),
            b'>' => Some(LexerTokenKind::Increment),
            b'<' => Some(LexerTokenKind::Decrement),
            b'.' => Some(LexerTokenKind::Write),
            b',' => Some(LexerTokenKind::Read),
            b'[' => Some(LexerTokenKind::JumpStart),
            b']' => Some(LexerTokenKind::JumpEnd),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            LexerTokenKind::DerefIncrement => '+',
            LexerTokenKind::DerefDecrement => '-',
            LexerTokenKind::Increment => '>',
            LexerTokenKind::Decrement => '<',
            LexerTokenKind::Write => '.',
            LexerTokenKind::Read => ',',
            LexerTokenKind::JumpStart => '[',
            LexerTokenKind::JumpEnd => ']',
        }
    }

    /// Brackets aren't operations, they only shape the tree
    pub fn operation(&self) -> Option<Operation> {
        match self {
            LexerTokenKind::DerefIncrement => Some(Operation::DerefIncrement),
            LexerTokenKind::DerefDecrement => Some(Operation::DerefDecrement),
            LexerTokenKind::Increment => Some(Operation::Increment),
            LexerTokenKind::Decrement => Some(Operation::Decrement),
            LexerTokenKind::Write => Some(Operation::Write),
            LexerTokenKind::Read => Some(Operation::Read),
            LexerTokenKind::JumpStart | LexerTokenKind::JumpEnd => None,
        }
    }
}

impl fmt::Display for LexerTokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerToken {
    pub kind: LexerTokenKind,

    /** 'raw' byte offset within the source, zero based */
    pub offset: usize,

    /** Human Readable positions in file */
    pub line: usize,
    pub column: usize,
}
