//! Word-run lexing: identifiers, keywords, numbers and dotted paths.
//!
//! A word run is a maximal stretch of ASCII letters, digits, underscores and
//! dots. Runs led by a digit, a sign or a dot are numeric-shaped and become a
//! single literal or error token. Runs led by a letter or underscore are split
//! at every dot into name segments and `.` separators.

use jslex_util::Span;

use crate::classify::{classify_name, classify_numeric};
use crate::token::Category;
use crate::Lexer;

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.'
}

impl<'src> Lexer<'src, '_> {
    /// Returns true if `current` (followed by `next`) starts a word run.
    ///
    /// Letters, digits and underscores always do. A sign or a dot only does
    /// when a digit follows it immediately.
    pub(super) fn starts_word_run(current: char, next: Option<char>) -> bool {
        match current {
            c if c.is_ascii_alphanumeric() || c == '_' => true,
            '+' | '-' | '.' => next.is_some_and(|n| n.is_ascii_digit()),
            _ => false,
        }
    }

    /// Lexes one word run and queues the resulting token(s).
    pub(super) fn lex_word_run(&mut self) {
        let numeric = !matches!(self.cursor.peek(), Some(c) if c.is_ascii_alphabetic() || c == '_');

        // The leading sign or dot is not itself a word character.
        self.cursor.advance();

        loop {
            match self.cursor.peek() {
                Some(c) if is_word_char(c) => {
                    self.cursor.advance();
                },
                Some('+' | '-') if numeric && self.at_exponent_sign() => {
                    self.cursor.advance();
                },
                _ => break,
            }
        }

        if numeric {
            let run = self.cursor.slice_from(self.token_start);
            let token = self.finish_token(classify_numeric(run));
            self.pending.push_back(token);
        } else {
            self.split_path();
        }
    }

    /// True when the cursor sits on the sign of an exponent: the run so far
    /// ends in `e`/`E`, is not hex, and a digit follows the sign.
    fn at_exponent_sign(&self) -> bool {
        let run = self.cursor.slice_from(self.token_start);
        let unsigned = run.strip_prefix(['+', '-']).unwrap_or(run);
        let is_hex = unsigned.starts_with("0x") || unsigned.starts_with("0X");

        run.ends_with(['e', 'E'])
            && !is_hex
            && self.cursor.peek_at(1).is_some_and(|c| c.is_ascii_digit())
    }

    /// Splits the current name run at each dot and queues one token per
    /// non-empty segment and one separator per dot.
    ///
    /// Word runs hold only ASCII, so byte offsets double as column offsets.
    fn split_path(&mut self) {
        let run = self.cursor.slice_from(self.token_start);
        let (start, line, column) =
            (self.token_start, self.token_start_line, self.token_start_column);
        let span_at = |offset: usize, len: usize| {
            Span::new(start + offset, start + offset + len, line, column + offset as u32)
        };

        let mut segment_start = 0;
        for (offset, c) in run.char_indices() {
            if c != '.' {
                continue;
            }
            if offset > segment_start {
                let segment = &run[segment_start..offset];
                let token = self.make_token(
                    segment,
                    classify_name(segment),
                    span_at(segment_start, segment.len()),
                );
                self.pending.push_back(token);
            }
            let dot = self.make_token(
                &run[offset..offset + 1],
                Category::Separator,
                span_at(offset, 1),
            );
            self.pending.push_back(dot);
            segment_start = offset + 1;
        }

        if segment_start < run.len() {
            let segment = &run[segment_start..];
            let token = self.make_token(
                segment,
                classify_name(segment),
                span_at(segment_start, segment.len()),
            );
            self.pending.push_back(token);
        }
    }
}
