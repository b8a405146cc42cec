//! Diagnostic codes for categorizing front-end errors.
//!
//! Codes follow the format `{prefix}{number}` with the number zero-padded
//! to four digits. Lexer codes live in the 1000 range, parser codes in the
//! 2000 range, semantic codes in the 3000 range.

/// A unique code identifying a diagnostic message.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix ("E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code.
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix.
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier.
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string, e.g. "E2001".
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    /// E1001: Lexer - unexpected character
    pub const E_LEXER_UNEXPECTED_CHAR: Self = Self::new("E", 1001);

    /// E2001: Parser - expected a particular token
    pub const E_PARSER_EXPECTED_TOKEN: Self = Self::new("E", 2001);
    /// E2002: Parser - token cannot start a construct
    pub const E_PARSER_UNEXPECTED_TOKEN: Self = Self::new("E", 2002);

    /// E3001: Semantic - duplicate declaration in scope
    pub const E_SEM_DUPLICATE_DECL: Self = Self::new("E", 3001);
    /// E3002: Semantic - use of an undeclared name
    pub const E_SEM_UNDECLARED: Self = Self::new("E", 3002);
    /// E3003: Semantic - call target is not a function
    pub const E_SEM_NOT_A_FUNCTION: Self = Self::new("E", 3003);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_code() {
        let code = DiagnosticCode::new("E", 1001);
        assert_eq!(code.prefix(), "E");
        assert_eq!(code.number(), 1001);
    }

    #[test]
    fn test_as_str_padding() {
        assert_eq!(DiagnosticCode::new("E", 1).as_str(), "E0001");
        assert_eq!(DiagnosticCode::new("W", 42).as_str(), "W0042");
        assert_eq!(DiagnosticCode::new("E", 3002).as_str(), "E3002");
    }

    #[test]
    fn test_display_and_debug() {
        let code = DiagnosticCode::E_PARSER_EXPECTED_TOKEN;
        assert_eq!(format!("{}", code), "E2001");
        assert_eq!(format!("{:?}", code), "DiagnosticCode(E2001)");
    }

    #[test]
    fn test_phase_ranges() {
        assert_eq!(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR.number() / 1000, 1);
        assert_eq!(DiagnosticCode::E_PARSER_EXPECTED_TOKEN.number() / 1000, 2);
        assert_eq!(DiagnosticCode::E_SEM_DUPLICATE_DECL.number() / 1000, 3);
    }

    #[test]
    fn test_code_equality() {
        assert_eq!(DiagnosticCode::new("E", 7), DiagnosticCode::new("E", 7));
        assert_ne!(DiagnosticCode::new("E", 7), DiagnosticCode::new("W", 7));
    }
}
