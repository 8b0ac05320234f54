//! String and character literal lexing.

use crate::error::LexErrorKind;
use crate::token::{Category, Token};
use crate::Lexer;

impl<'src> Lexer<'src, '_> {
    /// Lexes a `"`-delimited string literal.
    ///
    /// A backslash always takes the following character with it, so `\"`
    /// never closes the string. The lexeme includes both quotes.
    pub(super) fn lex_string(&mut self) -> Token<'src> {
        self.cursor.advance();

        loop {
            match self.cursor.advance() {
                Some('"') => return self.finish_token(Category::Literal),
                Some('\\') => {
                    if self.cursor.advance().is_none() {
                        break;
                    }
                },
                Some(_) => {},
                None => break,
            }
        }

        self.finish_token(Category::Error(LexErrorKind::UnterminatedString))
    }

    /// Lexes a `'`-delimited character literal.
    ///
    /// The body must be exactly one character or one backslash escape.
    pub(super) fn lex_char(&mut self) -> Token<'src> {
        self.cursor.advance();
        let mut units = 0usize;

        loop {
            match self.cursor.advance() {
                Some('\'') => break,
                Some('\\') => {
                    if self.cursor.advance().is_none() {
                        return self.finish_token(Category::Error(
                            LexErrorKind::UnterminatedCharacterLiteral,
                        ));
                    }
                    units += 1;
                },
                Some(_) => units += 1,
                None => {
                    return self.finish_token(Category::Error(
                        LexErrorKind::UnterminatedCharacterLiteral,
                    ));
                },
            }
        }

        if units == 1 {
            self.finish_token(Category::Literal)
        } else {
            self.finish_token(Category::Error(LexErrorKind::InvalidCharacterLiteral))
        }
    }
}
