//! Lexical error taxonomy.
//!
//! Lexical errors never abort a scan. Each one becomes an error token in the
//! stream and a diagnostic in the [`Handler`](jslex_util::Handler).

use jslex_util::DiagnosticCode;
use thiserror::Error;

/// The kind of lexical defect an error token stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum LexErrorKind {
    /// A character or run that matches no category rule.
    #[error("unrecognized symbol")]
    UnrecognizedSymbol,

    /// A `"` string with no closing quote before end of input.
    #[error("unterminated string")]
    UnterminatedString,

    /// A `'` character literal with no closing quote before end of input.
    #[error("unterminated character literal")]
    UnterminatedCharacterLiteral,

    /// A closed character literal holding zero or several characters.
    #[error("invalid character literal")]
    InvalidCharacterLiteral,

    /// A `/*` comment with no `*/` before end of input.
    #[error("unterminated block comment")]
    UnterminatedBlockComment,

    /// A sign-, digit- or dot-led run that is not a valid number.
    #[error("malformed numeric literal")]
    MalformedNumericRun,
}

impl LexErrorKind {
    /// Returns the stable diagnostic code reported for this kind.
    pub const fn code(self) -> DiagnosticCode {
        match self {
            LexErrorKind::UnrecognizedSymbol => DiagnosticCode::E_LEXER_UNRECOGNIZED_SYMBOL,
            LexErrorKind::UnterminatedString => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            LexErrorKind::MalformedNumericRun => DiagnosticCode::E_LEXER_MALFORMED_NUMBER,
            LexErrorKind::UnterminatedCharacterLiteral => DiagnosticCode::E_LEXER_UNTERMINATED_CHAR,
            LexErrorKind::InvalidCharacterLiteral => DiagnosticCode::E_LEXER_INVALID_CHAR,
            LexErrorKind::UnterminatedBlockComment => DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT,
        }
    }

    /// A short fix suggestion attached to the diagnostic.
    pub const fn help(self) -> &'static str {
        match self {
            LexErrorKind::UnrecognizedSymbol => {
                "remove the symbol or replace it with a valid token"
            },
            LexErrorKind::UnterminatedString => "add a closing `\"`",
            LexErrorKind::UnterminatedCharacterLiteral => "add a closing `'`",
            LexErrorKind::InvalidCharacterLiteral => {
                "a character literal holds exactly one character or one escape"
            },
            LexErrorKind::UnterminatedBlockComment => "add a closing `*/`",
            LexErrorKind::MalformedNumericRun => {
                "numbers are decimal (`42`), floating point (`3.14`, `1e-3`) or hex (`0x1F`)"
            },
        }
    }
}
