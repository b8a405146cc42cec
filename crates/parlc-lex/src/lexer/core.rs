//! Core lexer implementation.
//!
//! `next_token` works in three steps: skip insignificant characters, try
//! the two-character operators, then run the DFA with maximal munch,
//! rewinding to the last accepting position when it halts.

use crate::cursor::{Cursor, CursorSnapshot};
use crate::dfa::{self, CharClass};
use crate::token::{classify_word, Token, TokenKind};

/// Two-character operators recognized ahead of the DFA.
const MULTI_CHAR_OPERATORS: [&str; 5] = ["==", "!=", "<=", ">=", "->"];

/// A colour literal body is exactly this many hex-like characters.
const COLOUR_BODY_LEN: u32 = 6;

/// Lexer for PArL source text.
///
/// The lexer is total: it never fails, emitting a single-character
/// [`TokenKind::Error`] token for anything it cannot recognize, and always
/// terminates with exactly one [`TokenKind::Eof`] token.
pub struct Lexer<'a> {
    pub(crate) cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer over the given source.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// Returns the next token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace_and_comments();

        let line = self.cursor.line();
        let column = self.cursor.column();

        if self.cursor.is_at_end() {
            return Token::eof(line, column);
        }

        if let Some(op) = self.match_two_char_operator() {
            return Token::new(TokenKind::Operator, op, line, column);
        }

        let start = self.cursor.snapshot();
        let mut state = dfa::START;
        let mut last_accept: Option<(TokenKind, CursorSnapshot)> = None;
        let mut hex_body = 0u32;

        while !self.cursor.is_at_end() {
            let class = CharClass::of(self.cursor.current_char());
            let Some(next) = dfa::transition(state, class) else {
                break;
            };

            self.cursor.advance();
            state = next;

            if state == dfa::COLOUR_BODY {
                // The '#' itself is class Hash; only hex-like body
                // characters count toward the six.
                if matches!(class, CharClass::Digit | CharClass::Letter) {
                    hex_body += 1;
                }
                if hex_body == COLOUR_BODY_LEN {
                    last_accept = Some((TokenKind::ColourLiteral, self.cursor.snapshot()));
                } else if hex_body > COLOUR_BODY_LEN {
                    break;
                }
            } else if let Some(kind) = dfa::accepting(state) {
                last_accept = Some((kind, self.cursor.snapshot()));
            }
        }

        match last_accept {
            Some((kind, accept)) => {
                self.cursor.restore(accept);
                let text = self.cursor.slice_from(start.position);
                let kind = if kind == TokenKind::Identifier {
                    classify_word(text)
                } else {
                    kind
                };
                Token::new(kind, text, line, column)
            }
            None => {
                // No accepting state on this run: emit the first character
                // as an error token and move past it.
                self.cursor.restore(start);
                let mut buf = [0u8; 4];
                let offending = self.cursor.current_char().encode_utf8(&mut buf);
                self.cursor.advance();
                Token::new(TokenKind::Error, offending, line, column)
            }
        }
    }

    /// Consumes and returns a two-character operator if one starts here.
    fn match_two_char_operator(&mut self) -> Option<&'static str> {
        let c0 = self.cursor.current_char();
        let c1 = self.cursor.peek_char(1);
        let op = MULTI_CHAR_OPERATORS.iter().copied().find(|op| {
            let bytes = op.as_bytes();
            c0 == bytes[0] as char && c1 == bytes[1] as char
        })?;
        self.cursor.advance();
        self.cursor.advance();
        Some(op)
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }
}

/// Iterate tokens up to (but not including) `Eof`.
impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            None
        } else {
            Some(token)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_all(source: &str) -> Vec<Token> {
        Lexer::new(source).collect()
    }

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    fn lexemes(tokens: &[Token]) -> Vec<&'static str> {
        tokens.iter().map(|t| t.lexeme_str()).collect()
    }

    #[test]
    fn test_identifiers_and_keywords() {
        let t = lex_all("let foo fun Fun");
        assert_eq!(
            kinds(&t),
            vec![
                TokenKind::Keyword,
                TokenKind::Identifier,
                TokenKind::Keyword,
                TokenKind::Identifier,
            ]
        );
    }

    #[test]
    fn test_word_operators() {
        let t = lex_all("a and b or not c");
        assert_eq!(t[1].kind, TokenKind::Operator);
        assert_eq!(t[3].kind, TokenKind::Operator);
        assert_eq!(t[4].kind, TokenKind::Operator);
    }

    #[test]
    fn test_builtins() {
        let t = lex_all("__print __width __randi");
        assert_eq!(t[0].kind, TokenKind::Builtin);
        assert_eq!(t[1].kind, TokenKind::Builtin);
        // Not in the builtin set, so it stays an identifier.
        assert_eq!(t[2].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_numbers() {
        let t = lex_all("42 3.14 0");
        assert_eq!(
            kinds(&t),
            vec![
                TokenKind::IntLiteral,
                TokenKind::FloatLiteral,
                TokenKind::IntLiteral,
            ]
        );
        assert_eq!(lexemes(&t), vec!["42", "3.14", "0"]);
    }

    #[test]
    fn test_trailing_dot_is_not_a_float() {
        let t = lex_all("2.");
        assert_eq!(t[0].kind, TokenKind::IntLiteral);
        assert_eq!(t[0].lexeme_str(), "2");
        assert_eq!(t[1].kind, TokenKind::Error);
        assert_eq!(t[1].lexeme_str(), ".");
    }

    #[test]
    fn test_leading_dot_float() {
        // The DFA's start state transitions on Dot, so `.5` is a float.
        let t = lex_all(".5");
        assert_eq!(t[0].kind, TokenKind::FloatLiteral);
        assert_eq!(t[0].lexeme_str(), ".5");
    }

    #[test]
    fn test_colour_literal_exact() {
        let t = lex_all("#00ff00");
        assert_eq!(t[0].kind, TokenKind::ColourLiteral);
        assert_eq!(t[0].lexeme_str(), "#00ff00");
    }

    #[test]
    fn test_colour_literal_caps_at_six() {
        // Maximal munch with the colour cap: the seventh hex-like
        // character abandons the run and rewinds to the six-char accept.
        let t = lex_all("#abcdef0 x");
        assert_eq!(
            lexemes(&t),
            vec!["#abcdef", "0", "x"],
            "colour literal must cap at six body characters"
        );
        assert_eq!(
            kinds(&t),
            vec![
                TokenKind::ColourLiteral,
                TokenKind::IntLiteral,
                TokenKind::Identifier,
            ]
        );
    }

    #[test]
    fn test_colour_literal_too_short() {
        let t = lex_all("#abc");
        assert_eq!(t[0].kind, TokenKind::Error);
        assert_eq!(t[0].lexeme_str(), "#");
        assert_eq!(t[1].kind, TokenKind::Identifier);
        assert_eq!(t[1].lexeme_str(), "abc");
    }

    #[test]
    fn test_two_char_operators() {
        let t = lex_all("a <= b -> c != d");
        assert_eq!(lexemes(&t), vec!["a", "<=", "b", "->", "c", "!=", "d"]);
    }

    #[test]
    fn test_single_char_operators_and_separators() {
        let t = lex_all("= < > ( ) { } [ ] ; , :");
        assert_eq!(t[0].kind, TokenKind::Operator);
        assert_eq!(t[1].kind, TokenKind::Operator);
        for tok in &t[3..] {
            assert_eq!(tok.kind, TokenKind::Separator, "{tok}");
        }
    }

    #[test]
    fn test_adjacent_operator_chars_split() {
        // `=<` is not a recognized pair, so it lexes as two operators.
        let t = lex_all("=<");
        assert_eq!(lexemes(&t), vec!["=", "<"]);
    }

    #[test]
    fn test_error_token_for_unknown_char() {
        let t = lex_all("@");
        assert_eq!(t[0].kind, TokenKind::Error);
        assert_eq!(t[0].lexeme_str(), "@");
    }

    #[test]
    fn test_error_token_position() {
        let t = lex_all("x @ y");
        assert_eq!(t[1].kind, TokenKind::Error);
        assert_eq!(t[1].column, 3);
        assert_eq!(t[2].lexeme_str(), "y");
    }

    #[test]
    fn test_positions() {
        let t = lex_all("let x\n  = 1;");
        assert_eq!((t[0].line, t[0].column), (1, 1)); // let
        assert_eq!((t[1].line, t[1].column), (1, 5)); // x
        assert_eq!((t[2].line, t[2].column), (2, 3)); // =
        assert_eq!((t[3].line, t[3].column), (2, 5)); // 1
        assert_eq!((t[4].line, t[4].column), (2, 6)); // ;
    }

    #[test]
    fn test_underscore_identifier() {
        let t = lex_all("_x _1 _");
        assert_eq!(lexemes(&t), vec!["_x", "_1", "_"]);
        for tok in &t {
            assert_eq!(tok.kind, TokenKind::Identifier);
        }
    }

    #[test]
    fn test_eof_after_input() {
        let mut lexer = Lexer::new("x");
        assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
        // Stays at Eof.
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }
}
