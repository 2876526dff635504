use crate::lexer::{LexerToken, LexerTokenKind};

use super::{AstKind, BasicBlock, ParserError, Program, DEFAULT_MAX_DEPTH};

pub struct Parser<'a> {
    tokens: &'a [LexerToken],
    /// Shared by every level of the recursion, only ever moves forward
    pos: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [LexerToken]) -> Parser<'a> {
        Parser::with_max_depth(tokens, DEFAULT_MAX_DEPTH)
    }

    pub fn with_max_depth(tokens: &'a [LexerToken], max_depth: usize) -> Parser<'a> {
        Parser {
            tokens,
            pos: 0,
            max_depth,
        }
    }

    /// How many tokens have been consumed so far
    pub fn position(&self) -> usize {
        self.pos
    }

    /// `opened_by` is the `[` that started this block, `None` for the program itself
    fn parse_block(
        &mut self,
        depth: usize,
        opened_by: Option<&LexerToken>,
    ) -> Result<BasicBlock, ParserError> {
        let tokens = self.tokens;
        let mut instructions = vec![];

        while let Some(token) = tokens.get(self.pos) {
            match token.kind {
                LexerTokenKind::JumpEnd => {
                    if opened_by.is_none() {
                        return Err(ParserError::UnmatchedClose {
                            offset: token.offset,
                            line: token.line,
                            column: token.column,
                        });
                    }
                    // the loop has ended so we can hand the body back
                    self.pos += 1;
                    return Ok(BasicBlock { instructions });
                }
                LexerTokenKind::JumpStart => {
                    if depth >= self.max_depth {
                        return Err(ParserError::NestingTooDeep {
                            limit: self.max_depth,
                            offset: token.offset,
                            line: token.line,
                            column: token.column,
                        });
                    }
                    self.pos += 1;
                    let body = self.parse_block(depth + 1, Some(token))?;
                    instructions.push(AstKind::Loop(body));
                }
                kind => {
                    // greedily eat the whole run so that no two siblings share an op
                    let count = tokens[self.pos..]
                        .iter()
                        .take_while(|t| t.kind == kind)
                        .count();
                    self.pos += count;

                    if let Some(op) = kind.operation() {
                        instructions.push(AstKind::Run { op, count });
                    }
                }
            }
        }

        match opened_by {
            Some(open) => Err(ParserError::UnmatchedOpen {
                offset: open.offset,
                line: open.line,
                column: open.column,
            }),
            None => Ok(BasicBlock { instructions }),
        }
    }

    pub fn parse_program(&mut self) -> Result<Program, ParserError> {
        self.parse_block(0, None)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::lexer::lexer::Lexer;
    use crate::lexer::Operation;

    fn parse(source: &str) -> Result<Program, ParserError> {
        let tokens = Lexer::new(source.as_bytes()).collect_tokens();
        Parser::new(&tokens).parse_program()
    }

    fn run(op: Operation, count: usize) -> AstKind {
        AstKind::Run { op, count }
    }

    fn looped(instructions: Vec<AstKind>) -> AstKind {
        AstKind::Loop(BasicBlock::new(instructions))
    }

    #[test]
    fn empty_program() {
        assert_eq!(parse("").unwrap(), Program::default());
        assert_eq!(parse("no code here").unwrap(), Program::default());
        assert!(parse("still nothing").unwrap().is_empty());
    }

    #[test]
    fn top_level_length() {
        let program = parse("+-[>]<").unwrap();
        assert_eq!(program.len(), 4);
        assert!(!program.is_empty());
        // nested nodes aren't counted at the top level
        assert_eq!(program.node_count(), 5);
    }

    #[test]
    fn single_run_is_merged() {
        assert_eq!(
            parse("++++").unwrap().instructions,
            vec![run(Operation::DerefIncrement, 4)]
        );
    }

    #[test]
    fn comments_do_not_split_runs() {
        // the lexer throws comments away so the run is still contiguous
        assert_eq!(
            parse("++ comment ++").unwrap().instructions,
            vec![run(Operation::DerefIncrement, 4)]
        );
    }

    #[test]
    fn run_followed_by_loop() {
        assert_eq!(
            parse("+++[-]").unwrap().instructions,
            vec![
                run(Operation::DerefIncrement, 3),
                looped(vec![run(Operation::DerefDecrement, 1)]),
            ]
        );
    }

    #[test]
    fn read_then_write() {
        assert_eq!(
            parse(",.").unwrap().instructions,
            vec![run(Operation::Read, 1), run(Operation::Write, 1)]
        );
    }

    #[test]
    fn empty_loop() {
        assert_eq!(parse("[]").unwrap().instructions, vec![looped(vec![])]);
    }

    #[test]
    fn runs_do_not_merge_across_loops() {
        assert_eq!(
            parse("+[]+").unwrap().instructions,
            vec![
                run(Operation::DerefIncrement, 1),
                looped(vec![]),
                run(Operation::DerefIncrement, 1),
            ]
        );
    }

    #[test]
    fn nested_loops() {
        let program = parse(">>[<[-]>>.<<]").unwrap();
        assert_eq!(
            program.instructions,
            vec![
                run(Operation::Increment, 2),
                looped(vec![
                    run(Operation::Decrement, 1),
                    looped(vec![run(Operation::DerefDecrement, 1)]),
                    run(Operation::Increment, 2),
                    run(Operation::Write, 1),
                    run(Operation::Decrement, 2),
                ]),
            ]
        );
        assert_eq!(program.node_count(), 8);
    }

    #[test]
    fn consumes_every_token() {
        let tokens = Lexer::new(b"+[->+<]>.").collect_tokens();
        let mut parser = Parser::new(&tokens);
        parser.parse_program().unwrap();
        assert_eq!(parser.position(), tokens.len());
    }

    #[test]
    fn unmatched_close() {
        assert_eq!(
            parse("]"),
            Err(ParserError::UnmatchedClose {
                offset: 0,
                line: 1,
                column: 1
            })
        );
        assert_eq!(parse("[]]").unwrap_err().offset(), 2);
    }

    #[test]
    fn unmatched_open() {
        assert!(matches!(parse("["), Err(ParserError::UnmatchedOpen { .. })));
        // the outer loop is the one that never closes
        assert_eq!(
            parse("[[]"),
            Err(ParserError::UnmatchedOpen {
                offset: 0,
                line: 1,
                column: 1
            })
        );
        // and the innermost open loop is the one reported
        assert_eq!(parse("[\n+[").unwrap_err().offset(), 3);
    }

    #[test]
    fn nesting_limit() {
        let tokens = Lexer::new(b"[[[]]]").collect_tokens();
        assert!(Parser::with_max_depth(&tokens, 3).parse_program().is_ok());
        assert_eq!(
            Parser::with_max_depth(&tokens, 2).parse_program(),
            Err(ParserError::NestingTooDeep {
                limit: 2,
                offset: 2,
                line: 1,
                column: 3
            })
        );
    }

    #[test]
    fn deep_nesting_within_default_limit() {
        let depth = 500;
        let source = format!("{}{}", "[".repeat(depth), "]".repeat(depth));
        assert!(parse(&source).is_ok());
    }

    #[test]
    fn tree_renders_on_one_line() {
        assert_eq!(
            parse("++[-]>,").unwrap().to_string(),
            "DerefIncrement(2) Loop[DerefDecrement(1)] Increment(1) Read(1)"
        );
        assert_eq!(parse("").unwrap().to_string(), "");
    }

    #[test]
    fn rendering_stays_linear_at_the_depth_limit() {
        let source = format!(
            "{}{}",
            "[".repeat(DEFAULT_MAX_DEPTH),
            "]".repeat(DEFAULT_MAX_DEPTH)
        );
        let rendered = parse(&source).unwrap().to_string();
        assert_eq!(rendered.len(), DEFAULT_MAX_DEPTH * "Loop[]".len());
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            parse("+\n ]").unwrap_err().to_string(),
            "unmatched ']' at offset 3 (line 2, column 2)"
        );
        assert_eq!(
            parse("[").unwrap_err().to_string(),
            "unmatched '[' opened at offset 0 (line 1, column 1)"
        );
    }
}
