//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its core methods.

use std::collections::VecDeque;

use jslex_util::{DiagnosticBuilder, Handler, Span};
use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::token::{Category, Token, TokenStream};

/// Lexer for the JavaScript-like surface grammar.
///
/// The lexer extracts one maximal run at a time and hands it to the
/// [classifier](crate::classify). A dotted word run can yield several tokens;
/// those are buffered and handed out one by one.
///
/// # Example
///
/// ```
/// use jslex_lex::{Category, Lexer};
/// use jslex_util::Handler;
///
/// let handler = Handler::new();
/// let mut lexer = Lexer::new("let a = 42;", &handler);
///
/// let first = lexer.next_token().unwrap();
/// assert_eq!((first.lexeme, first.category), ("let", Category::Keyword));
/// ```
pub struct Lexer<'src, 'h> {
    /// Character cursor for source traversal.
    pub(super) cursor: Cursor<'src>,

    /// Collects a diagnostic for every error token.
    handler: &'h Handler,

    /// Tokens already extracted but not yet handed out.
    pub(super) pending: VecDeque<Token<'src>>,

    /// Starting position of the current token (byte offset).
    pub(super) token_start: usize,

    /// Line number where the current token starts (1-based).
    pub(super) token_start_line: u32,

    /// Column number where the current token starts (1-based).
    pub(super) token_start_column: u32,

    /// Whether the BOM (Byte Order Mark) has been checked.
    pub(super) bom_checked: bool,
}

impl<'src, 'h> Lexer<'src, 'h> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'src str, handler: &'h Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            pending: VecDeque::new(),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            bom_checked: false,
        }
    }

    /// Returns the next token, or `None` once the input is exhausted.
    ///
    /// Skips whitespace and comments, then dispatches on the current
    /// character: a quote starts a literal run, a word-run trigger starts a
    /// word run, and anything else is punctuation.
    pub fn next_token(&mut self) -> Option<Token<'src>> {
        if let Some(token) = self.pending.pop_front() {
            return Some(token);
        }

        if let Some(error) = self.skip_whitespace_and_comments() {
            return Some(error);
        }

        let current = self.cursor.peek()?;
        self.begin_token();

        let token = match current {
            '"' => self.lex_string(),
            '\'' => self.lex_char(),
            c if Self::starts_word_run(c, self.cursor.peek_at(1)) => {
                self.lex_word_run();
                return self.pending.pop_front();
            },
            c => self.lex_punctuation(c),
        };
        Some(token)
    }

    /// Scans the remaining input into a [`TokenStream`].
    pub fn tokenize(mut self) -> TokenStream<'src> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        let stream = TokenStream::new(tokens);
        debug!(
            bytes = self.cursor.source().len(),
            tokens = stream.len(),
            errors = stream.errors().count(),
            "scan finished"
        );
        stream
    }

    /// Marks the current cursor position as the start of the next token.
    pub(super) fn begin_token(&mut self) {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
    }

    /// Span from the token start to the cursor.
    pub(super) fn token_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Closes the current token: everything from the token start to the
    /// cursor becomes one token of `category`.
    pub(super) fn finish_token(&mut self, category: Category) -> Token<'src> {
        let lexeme = self.cursor.slice_from(self.token_start);
        self.make_token(lexeme, category, self.token_span())
    }

    /// Builds a token and reports it to the handler if it is an error.
    pub(super) fn make_token(
        &mut self,
        lexeme: &'src str,
        category: Category,
        span: Span,
    ) -> Token<'src> {
        if let Category::Error(kind) = category {
            DiagnosticBuilder::error(kind.to_string())
                .code(kind.code())
                .span(span)
                .note(format!("found `{}`", lexeme.escape_debug()))
                .help(kind.help())
                .emit(self.handler);
        }
        trace!(lexeme, category = %category, line = span.line, column = span.column, "token");
        Token::new(lexeme, category, span)
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl<'src> Iterator for Lexer<'src, '_> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}
