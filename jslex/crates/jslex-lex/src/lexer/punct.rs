//! Punctuation lexing: separators and operators.

use crate::classify::classify_punct;
use crate::tables::{is_fixed_separator, is_operator};
use crate::token::{Category, Token};
use crate::Lexer;

impl<'src> Lexer<'src, '_> {
    /// Lexes a separator, an operator or an unrecognized symbol.
    ///
    /// Fixed separators always stand alone. Anything else tries the longest
    /// operator first: a second character is consumed and, if the pair is
    /// not an operator, pushed back before the single character is
    /// classified.
    pub(super) fn lex_punctuation(&mut self, first: char) -> Token<'src> {
        self.cursor.advance();

        if is_fixed_separator(first) {
            return self.finish_token(Category::Separator);
        }

        if self.cursor.advance().is_some() {
            if is_operator(self.cursor.slice_from(self.token_start)) {
                return self.finish_token(Category::Operator);
            }
            self.cursor.unconsume();
        }

        let single = self.cursor.slice_from(self.token_start);
        self.finish_token(classify_punct(single))
    }
}
