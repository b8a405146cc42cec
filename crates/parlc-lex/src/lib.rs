//! parlc-lex - Lexical analyzer for PArL.
//!
//! Transforms source text into a token stream using a table-driven DFA
//! with maximal-munch matching:
//!
//! 1. Whitespace and comments are skipped between tokens.
//! 2. The five two-character operators (`==`, `!=`, `<=`, `>=`, `->`) are
//!    matched ahead of the DFA.
//! 3. The DFA ([`dfa`]) advances while a transition exists, remembering
//!    the last accepting position, and rewinds there when it halts.
//!    Colour literals additionally require exactly six hex-like characters
//!    after the `#`.
//! 4. Accepted identifiers are reclassified as keywords, word operators,
//!    or pad builtins based purely on their spelling.
//!
//! The lexer is total. Unrecognized characters become inline
//! [`TokenKind::Error`] tokens; lexing itself never aborts, and the stream
//! always ends with exactly one [`TokenKind::Eof`].
//!
//! # Examples
//!
//! ```
//! use parlc_lex::{tokenize, TokenKind};
//!
//! let tokens = tokenize("let x: int = 42;");
//! assert_eq!(tokens[0].kind, TokenKind::Keyword);
//! assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
//! ```

pub mod cursor;
pub mod dfa;
mod edge_cases;
pub mod lexer;
pub mod token;

pub use lexer::Lexer;
pub use token::{Token, TokenKind};

/// Tokenize an entire source, ending with exactly one `Eof` token.
///
/// Total: every input produces a token sequence in one left-to-right pass.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            break;
        }
    }
    tokens
}
