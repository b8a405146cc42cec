//! Token model for PArL.
//!
//! A token is the lexer's unit of output: a kind, the exact source slice
//! it covers (interned), and the 1-based line/column of its first
//! character. Tokens are immutable after construction and cheap to copy.

use parlc_util::{FxHashSet, Symbol};
use std::fmt;
use std::sync::LazyLock;

/// The closed set of token categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Reserved word: `fun`, `let`, `if`, type names, ...
    Keyword,
    /// Name chosen by the programmer
    Identifier,
    /// Symbolic or word operator: `+`, `==`, `->`, `and`, ...
    Operator,
    /// Punctuation: `( ) { } [ ] ; , :`
    Separator,
    /// Integer literal: `42`
    IntLiteral,
    /// Float literal: `3.14`
    FloatLiteral,
    /// Boolean literal
    BooleanLiteral,
    /// Colour literal: `#rrggbb`
    ColourLiteral,
    /// Pad builtin: `__print`, `__width`, ...
    Builtin,
    /// Single unrecognized character
    Error,
    /// End of input
    Eof,
}

/// A lexical unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    /// Token category
    pub kind: TokenKind,
    /// Exact source slice, interned
    pub lexeme: Symbol,
    /// Line of the first character (1-based)
    pub line: u32,
    /// Column of the first character (1-based)
    pub column: u32,
}

impl Token {
    /// Create a token, interning its lexeme.
    pub fn new(kind: TokenKind, lexeme: &str, line: u32, column: u32) -> Self {
        Self {
            kind,
            lexeme: Symbol::intern(lexeme),
            line,
            column,
        }
    }

    /// Create an end-of-input token. The lexeme is empty since there is no
    /// source slice to preserve.
    pub fn eof(line: u32, column: u32) -> Self {
        Self::new(TokenKind::Eof, "", line, column)
    }

    /// The lexeme as a string.
    pub fn lexeme_str(&self) -> &'static str {
        self.lexeme.as_str()
    }

    /// True if this token's lexeme matches the given spelling.
    pub fn is(&self, lexeme: &str) -> bool {
        self.lexeme.as_str() == lexeme
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "Eof at {}:{}", self.line, self.column),
            _ => write!(
                f,
                "{:?}(`{}`) at {}:{}",
                self.kind, self.lexeme, self.line, self.column
            ),
        }
    }
}

static KEYWORDS: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
    [
        "fun", "let", "return", "if", "else", "while", "for", "true", "false", "as", "int",
        "float", "bool", "colour",
    ]
    .into_iter()
    .collect()
});

static WORD_OPERATORS: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| ["and", "or", "not"].into_iter().collect());

static PAD_BUILTINS: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
    [
        "__width",
        "__height",
        "__read",
        "__random_int",
        "__delay",
        "__write",
        "__write_box",
        "__print",
    ]
    .into_iter()
    .collect()
});

/// Reclassify a lexeme the DFA accepted as an identifier.
///
/// Pure in the spelling: keywords become [`TokenKind::Keyword`], the word
/// operators `and`/`or`/`not` become [`TokenKind::Operator`], pad builtins
/// become [`TokenKind::Builtin`], everything else stays
/// [`TokenKind::Identifier`].
pub fn classify_word(text: &str) -> TokenKind {
    if KEYWORDS.contains(text) {
        TokenKind::Keyword
    } else if WORD_OPERATORS.contains(text) {
        TokenKind::Operator
    } else if PAD_BUILTINS.contains(text) {
        TokenKind::Builtin
    } else {
        TokenKind::Identifier
    }
}

/// True if the name is one of the pad builtins.
///
/// Compares against the pre-interned builtin symbols, so no string work
/// happens on this path.
pub fn is_builtin(name: Symbol) -> bool {
    use parlc_util::symbol::builtin;
    [
        builtin::WIDTH,
        builtin::HEIGHT,
        builtin::READ,
        builtin::RANDOM_INT,
        builtin::DELAY,
        builtin::WRITE,
        builtin::WRITE_BOX,
        builtin::PRINT,
    ]
    .contains(&name)
}
