//! jslex-lex - Lexical scanner for a JavaScript-like surface grammar
//!
//! This crate turns one source text into an ordered [`TokenStream`] of
//! `(lexeme, category)` pairs. It is a pure in-memory transform: no I/O, no
//! global mutable state, and no early exit. Malformed input yields error
//! tokens in the stream instead of aborting the scan, so every lexical defect
//! is visible after one pass.
//!
//! # Example Usage
//!
//! ```
//! use jslex_lex::{tokenize, Category};
//!
//! let stream = tokenize("let a = 42;");
//! assert_eq!(
//!     stream.pairs(),
//!     vec![
//!         ("let", Category::Keyword),
//!         ("a", Category::Identifier),
//!         ("=", Category::Operator),
//!         ("42", Category::Literal),
//!         (";", Category::Separator),
//!     ]
//! );
//! ```
//!
//! To collect diagnostics for error tokens, scan with your own handler:
//!
//! ```
//! use jslex_lex::tokenize_with_handler;
//! use jslex_util::Handler;
//!
//! let handler = Handler::new();
//! let stream = tokenize_with_handler("\"abc", &handler);
//! assert_eq!(stream.len(), 1);
//! let rendered = handler.diagnostics()[0].to_string();
//! assert_eq!(rendered.lines().next(), Some("error[E1002]: unterminated string at 1:1"));
//! ```
//!
//! # Module Structure
//!
//! - [`cursor`] - Forward-only character cursor with one-step pushback
//! - [`lexer`] - Lexeme extraction and orchestration
//! - [`classify`] - Category rules for completed lexemes
//! - [`tables`] - Reserved words, operators and separators
//! - [`token`] - Token, category and stream types
//! - [`error`] - Lexical error kinds
//!
//! # Token Categories
//!
//! - **Keyword**: one of 64 reserved words, matched case-sensitively
//! - **Identifier**: `[A-Za-z_][A-Za-z0-9_]*`
//! - **Literal**: `42`, `-7`, `3.14`, `.5`, `2.5e-3`, `0x1A3F`, `"text"`, `'c'`
//! - **Operator**: `== != <= >= && || ++ -- += -= *= /= %= << >>` and
//!   `+ - * / % & | ^ ~ ! = < >`
//! - **Separator**: `( ) { } [ ] ; ,` and member-access `.`
//! - **Error**: anything else, tagged with a [`LexErrorKind`]
//!
//! Whitespace, `//` line comments and `/* */` block comments are skipped.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod tables;
pub mod token;

#[cfg(test)]
mod edge_cases;

use jslex_util::Handler;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::LexErrorKind;
pub use lexer::Lexer;
pub use token::{Category, Token, TokenStream};

/// Scans `source` into a token stream.
///
/// Diagnostics for error tokens are discarded; the error tokens themselves
/// are still in the stream. Use [`tokenize_with_handler`] to keep them.
pub fn tokenize(source: &str) -> TokenStream<'_> {
    let handler = Handler::new();
    tokenize_with_handler(source, &handler)
}

/// Scans `source` into a token stream, reporting every error token to
/// `handler`.
pub fn tokenize_with_handler<'src>(source: &'src str, handler: &Handler) -> TokenStream<'src> {
    Lexer::new(source, handler).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_let_statement() {
        assert_eq!(
            tokenize("let a = 42;").pairs(),
            vec![
                ("let", Category::Keyword),
                ("a", Category::Identifier),
                ("=", Category::Operator),
                ("42", Category::Literal),
                (";", Category::Separator),
            ]
        );
    }

    #[test]
    fn test_call_with_string_argument() {
        assert_eq!(
            tokenize("greet(\"World\");").pairs(),
            vec![
                ("greet", Category::Identifier),
                ("(", Category::Separator),
                ("\"World\"", Category::Literal),
                (")", Category::Separator),
                (";", Category::Separator),
            ]
        );
    }

    #[test]
    fn test_compound_assignment() {
        assert_eq!(
            tokenize("x += 5;").pairs(),
            vec![
                ("x", Category::Identifier),
                ("+=", Category::Operator),
                ("5", Category::Literal),
                (";", Category::Separator),
            ]
        );
    }

    #[test]
    fn test_unterminated_string_ends_stream() {
        let handler = Handler::new();
        let stream = tokenize_with_handler("\"abc", &handler);
        assert_eq!(
            stream.pairs(),
            vec![("\"abc", Category::Error(LexErrorKind::UnterminatedString))]
        );
        assert_eq!(stream[0].category.to_string(), "error: unterminated string");
        assert_eq!(handler.error_count(), 1);

        let rendered = handler.diagnostics()[0].to_string();
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(
            lines,
            vec![
                "error[E1002]: unterminated string at 1:1",
                "  = note: found `\\\"abc`",
                "  = help: add a closing `\"`",
            ]
        );
    }

    #[test]
    fn test_sample_program() {
        let source = "let a = 42;\nconst pi = 3.14;\nvar hexValue = 0x1A3F;\n\n\
                      function greet(name) {\n    console.log(\"Hello, \" + name);\n}\n\n\
                      greet(\"World\");\n";
        let stream = tokenize(source);

        assert!(!stream.has_errors());
        let literals: Vec<_> = stream
            .iter()
            .filter(|t| t.category == Category::Literal)
            .map(|t| t.lexeme)
            .collect();
        assert_eq!(literals, vec!["42", "3.14", "0x1A3F", "\"Hello, \"", "\"World\""]);

        let keywords: Vec<_> = stream
            .iter()
            .filter(|t| t.category == Category::Keyword)
            .map(|t| t.lexeme)
            .collect();
        assert_eq!(keywords, vec!["let", "const", "var", "function"]);

        let log = stream.iter().position(|t| t.lexeme == "console").unwrap();
        assert_eq!(stream[log + 1].category, Category::Separator);
        assert_eq!(stream[log + 2].lexeme, "log");
        assert_eq!(stream[log].span.line, 6);
        assert_eq!(stream[log].span.column, 5);
    }

    #[test]
    fn test_every_defect_is_reported_in_one_pass() {
        let handler = Handler::new();
        let stream = tokenize_with_handler("a # 3. 'xy' b", &handler);
        assert_eq!(stream.errors().count(), 3);
        assert_eq!(handler.error_count(), 3);
        assert_eq!(stream[stream.len() - 1].lexeme, "b");

        let codes: Vec<_> = handler
            .diagnostics()
            .iter()
            .filter_map(|d| d.code)
            .map(|c| c.as_str())
            .collect();
        assert_eq!(codes, vec!["E1001", "E1003", "E1006"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \n\t ").is_empty());
    }
}
