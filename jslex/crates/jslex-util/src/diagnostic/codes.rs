//! Diagnostic codes for categorizing lexical errors.
//!
//! # Examples
//!
//! ```
//! use jslex_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_UNTERMINATED_STRING;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1002);
//! assert_eq!(code.as_str(), "E1002");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::DiagnosticError;

/// A unique code identifying a diagnostic message
///
/// Codes follow the format `{prefix}{number}` where `prefix` is "E" and
/// `number` is zero-padded to four digits.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix (e.g., "E" for error)
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E1001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // LEXER ERROR CODES (E1001-E1999)
    // =========================================================================

    /// E1001: Lexer - Unrecognized symbol
    pub const E_LEXER_UNRECOGNIZED_SYMBOL: Self = Self::new("E", 1001);
    /// E1002: Lexer - Unterminated string literal
    pub const E_LEXER_UNTERMINATED_STRING: Self = Self::new("E", 1002);
    /// E1003: Lexer - Malformed numeric run
    pub const E_LEXER_MALFORMED_NUMBER: Self = Self::new("E", 1003);
    /// E1005: Lexer - Unterminated character literal
    pub const E_LEXER_UNTERMINATED_CHAR: Self = Self::new("E", 1005);
    /// E1006: Lexer - Invalid character literal
    pub const E_LEXER_INVALID_CHAR: Self = Self::new("E", 1006);
    /// E1007: Lexer - Unterminated block comment
    pub const E_LEXER_UNTERMINATED_COMMENT: Self = Self::new("E", 1007);
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DiagnosticCode {
    type Err = DiagnosticError;

    /// Parses `E1002` style codes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DiagnosticError::InvalidCode(s.to_string());
        let prefix = match s.get(..1) {
            Some("E") => "E",
            _ => return Err(invalid()),
        };
        let digits = &s[1..];
        if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let number = digits.parse().map_err(|_| invalid())?;
        Ok(Self::new(prefix, number))
    }
}
