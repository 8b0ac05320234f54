//! Comment lexing.
//!
//! This module handles skipping whitespace, line comments and block comments.

use crate::error::LexErrorKind;
use crate::token::{Category, Token};
use crate::Lexer;

impl<'src> Lexer<'src, '_> {
    /// Skips whitespace and comments.
    ///
    /// Called before every token attempt. Repeats until neither whitespace
    /// nor a comment opener is next. Returns an error token if a block
    /// comment runs off the end of the input.
    pub(super) fn skip_whitespace_and_comments(&mut self) -> Option<Token<'src>> {
        if !self.bom_checked {
            self.bom_checked = true;
            self.cursor.match_char('\u{FEFF}');
        }

        loop {
            self.cursor.eat_while(char::is_whitespace);

            match (self.cursor.peek(), self.cursor.peek_at(1)) {
                (Some('/'), Some('/')) => self.skip_line_comment(),
                (Some('/'), Some('*')) => {
                    if let Some(error) = self.skip_block_comment() {
                        return Some(error);
                    }
                },
                _ => return None,
            }
        }
    }

    /// Skips a line comment (from `//` up to, not including, the newline).
    fn skip_line_comment(&mut self) {
        self.cursor.advance();
        self.cursor.advance();
        self.cursor.eat_while(|c| c != '\n');
    }

    /// Skips a block comment through the first `*/`.
    ///
    /// Block comments do not nest. If the input ends first, the whole
    /// consumed text becomes an unterminated-comment error token.
    fn skip_block_comment(&mut self) -> Option<Token<'src>> {
        self.begin_token();
        self.cursor.advance();
        self.cursor.advance();

        loop {
            match (self.cursor.peek(), self.cursor.peek_at(1)) {
                (Some('*'), Some('/')) => {
                    self.cursor.advance();
                    self.cursor.advance();
                    return None;
                },
                (Some(_), _) => {
                    self.cursor.advance();
                },
                (None, _) => {
                    return Some(
                        self.finish_token(Category::Error(LexErrorKind::UnterminatedBlockComment)),
                    );
                },
            }
        }
    }
}
