//! Edge case tests for parlc-lex.

#[cfg(test)]
mod tests {
    use crate::{tokenize, Lexer, Token, TokenKind};
    use proptest::prelude::*;

    fn lex_all(source: &str) -> Vec<Token> {
        Lexer::new(source).collect()
    }

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_whitespace_only() {
        assert!(lex_all("  \t\n\r  ").is_empty());
    }

    #[test]
    fn test_edge_comment_only() {
        assert!(lex_all("// just a comment").is_empty());
        assert!(lex_all("/* just a comment */").is_empty());
    }

    #[test]
    fn test_edge_single_char_ident() {
        let t = lex_all("x");
        assert_eq!(t[0].kind, TokenKind::Identifier);
        assert_eq!(t[0].lexeme_str(), "x");
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10_000);
        let t = lex_all(&name);
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].lexeme_str(), name);
    }

    #[test]
    fn test_edge_long_integer() {
        let digits = "9".repeat(100);
        let t = lex_all(&digits);
        assert_eq!(t[0].kind, TokenKind::IntLiteral);
        assert_eq!(t[0].lexeme_str(), digits);
    }

    #[test]
    fn test_edge_case_sensitivity() {
        let t = lex_all("Let LET let");
        assert_eq!(t[0].kind, TokenKind::Identifier);
        assert_eq!(t[1].kind, TokenKind::Identifier);
        assert_eq!(t[2].kind, TokenKind::Keyword);
    }

    #[test]
    fn test_edge_keyword_prefix_is_identifier() {
        let t = lex_all("letter iffy fortune");
        for tok in &t {
            assert_eq!(tok.kind, TokenKind::Identifier, "{tok}");
        }
    }

    #[test]
    fn test_edge_adjacent_tokens_no_whitespace() {
        let t = lex_all("x=1;");
        let lexemes: Vec<_> = t.iter().map(|t| t.lexeme_str()).collect();
        assert_eq!(lexemes, vec!["x", "=", "1", ";"]);
    }

    #[test]
    fn test_edge_colour_then_separator() {
        let t = lex_all("#a1b2c3;");
        assert_eq!(t[0].kind, TokenKind::ColourLiteral);
        assert_eq!(t[1].lexeme_str(), ";");
    }

    #[test]
    fn test_edge_colour_mixed_case() {
        // Hex validity beyond [0-9A-Za-z] is not enforced at lex time.
        let t = lex_all("#GGGGGG");
        assert_eq!(t[0].kind, TokenKind::ColourLiteral);
        assert_eq!(t[0].lexeme_str(), "#GGGGGG");
    }

    #[test]
    fn test_edge_hash_alone() {
        let t = lex_all("#");
        assert_eq!(t[0].kind, TokenKind::Error);
    }

    #[test]
    fn test_edge_bang_alone_is_operator() {
        // `!` is an operator character even though PArL spells negation
        // `not`; the parser rejects it.
        let t = lex_all("!");
        assert_eq!(t[0].kind, TokenKind::Operator);
    }

    #[test]
    fn test_edge_consecutive_errors() {
        let t = lex_all("@@");
        assert_eq!(t.len(), 2);
        assert_eq!(t[0].kind, TokenKind::Error);
        assert_eq!(t[1].kind, TokenKind::Error);
        assert_eq!(t[1].column, 2);
    }

    #[test]
    fn test_edge_float_then_dot() {
        let t = lex_all("1.2.3");
        let lexemes: Vec<_> = t.iter().map(|t| t.lexeme_str()).collect();
        // Maximal munch takes `1.2`, then `.3` restarts from the dot.
        assert_eq!(lexemes, vec!["1.2", ".3"]);
    }

    #[test]
    fn test_edge_arrow_vs_minus() {
        let t = lex_all("a - > b -> c");
        let lexemes: Vec<_> = t.iter().map(|t| t.lexeme_str()).collect();
        assert_eq!(lexemes, vec!["a", "-", ">", "b", "->", "c"]);
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        let t = lex_all("a\r\nb");
        assert_eq!((t[0].line, t[0].column), (1, 1));
        assert_eq!((t[1].line, t[1].column), (2, 1));
    }

    proptest! {
        /// The lexer is total: any input terminates with exactly one Eof.
        #[test]
        fn prop_tokenize_is_total(src in "\\PC*") {
            let tokens = tokenize(&src);
            prop_assert!(!tokens.is_empty());
            prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
            let eofs = tokens.iter().filter(|t| t.kind == TokenKind::Eof).count();
            prop_assert_eq!(eofs, 1);
        }

        /// Every non-Eof token carries a non-empty lexeme drawn from the
        /// source.
        #[test]
        fn prop_lexemes_are_source_slices(src in "[a-z0-9+\\-*/=<>!(){};,: .#_\\n]*") {
            for token in tokenize(&src) {
                if token.kind != TokenKind::Eof {
                    prop_assert!(!token.lexeme_str().is_empty());
                    prop_assert!(src.contains(token.lexeme_str()));
                }
            }
        }

        /// Tokenizing twice yields the same stream.
        #[test]
        fn prop_tokenize_is_deterministic(src in "\\PC*") {
            prop_assert_eq!(tokenize(&src), tokenize(&src));
        }
    }
}
