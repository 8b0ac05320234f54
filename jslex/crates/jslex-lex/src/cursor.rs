//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which owns the scan position.
//! It handles UTF-8 encoding correctly and tracks line/column information
//! for spans and diagnostics.

/// A cursor for traversing source code character by character.
///
/// The cursor only moves forward. The single exception is [`Cursor::unconsume`],
/// which steps back over the most recently consumed character and can only
/// be used once per [`Cursor::advance`].
///
/// # Example
///
/// ```
/// use jslex_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("let x = 42;");
///
/// assert_eq!(cursor.peek(), Some('l'));
/// assert_eq!(cursor.advance(), Some('l'));
/// assert_eq!(cursor.peek(), Some('e'));
/// ```
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,

    /// State before the last `advance`, cleared by `unconsume`.
    previous: Option<CursorState>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct CursorState {
    position: usize,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor for the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
            previous: None,
        }
    }

    /// Returns the character at the cursor position, or `None` at the end.
    ///
    /// # Example
    ///
    /// ```
    /// use jslex_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("a");
    /// assert_eq!(cursor.peek(), Some('a'));
    /// assert_eq!(Cursor::new("").peek(), None);
    /// ```
    #[inline]
    pub fn peek(&self) -> Option<char> {
        let b = *self.source.as_bytes().get(self.position)?;

        // Fast path for ASCII (most common case)
        if b < 128 {
            return Some(b as char);
        }

        self.source[self.position..].chars().next()
    }

    /// Returns the character `offset` characters ahead of the current one.
    ///
    /// `peek_at(0)` is the same as [`Cursor::peek`].
    ///
    /// # Example
    ///
    /// ```
    /// use jslex_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("<<");
    /// assert_eq!(cursor.peek_at(1), Some('<'));
    /// assert_eq!(cursor.peek_at(2), None);
    /// ```
    #[inline]
    pub fn peek_at(&self, offset: usize) -> Option<char> {
        if offset == 0 {
            return self.peek();
        }
        self.remaining().chars().nth(offset)
    }

    /// Consumes and returns the current character.
    ///
    /// Updates line and column tracking. Returns `None` and does nothing if
    /// already at the end.
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.previous = Some(self.state());

        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Steps back over the character consumed by the last [`Cursor::advance`].
    ///
    /// Returns `false` if there is nothing to step back over: either nothing
    /// has been consumed yet, or the last consumed character was already
    /// pushed back.
    ///
    /// # Example
    ///
    /// ```
    /// use jslex_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("<a");
    /// cursor.advance();
    /// cursor.advance();
    /// assert!(cursor.unconsume());
    /// assert_eq!(cursor.peek(), Some('a'));
    /// assert!(!cursor.unconsume());
    /// ```
    pub fn unconsume(&mut self) -> bool {
        match self.previous.take() {
            Some(state) => {
                self.position = state.position;
                self.line = state.line;
                self.column = state.column;
                true
            },
            None => false,
        }
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Matches and consumes the expected character if present.
    ///
    /// Returns true if the character was matched and consumed, false otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// use jslex_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("=>");
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('='));
    /// assert_eq!(cursor.peek(), Some('>'));
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes characters while `predicate` holds and returns how many
    /// characters were consumed.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> usize {
        let mut count = 0;
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.advance();
            count += 1;
        }
        count
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns a slice of the source from the given start position to the
    /// current position.
    ///
    /// # Example
    ///
    /// ```
    /// use jslex_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("let x");
    /// let start = cursor.position();
    /// cursor.eat_while(|c| c.is_ascii_alphabetic());
    /// assert_eq!(cursor.slice_from(start), "let");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the source text from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }

    fn state(&self) -> CursorState {
        CursorState {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }
}
