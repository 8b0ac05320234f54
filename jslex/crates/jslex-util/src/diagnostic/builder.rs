//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API, including source code snippets.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::Span;

/// A source code snippet for display in diagnostics
///
/// Holds the affected source line with the highlighted column range.
///
/// # Examples
///
/// ```
/// use jslex_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::new("let s = \"abc;", 1, 9, 14, Some("string starts here"));
/// assert!(snippet.format().contains("^^^^^"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the issue starts (1-based)
    pub start_column: usize,
    /// Column where the issue ends (1-based, exclusive)
    pub end_column: usize,
    /// Optional label to display under the highlighted range
    pub label: Option<String>,
}

impl SourceSnippet {
    /// Create a new source snippet
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
        label: Option<impl Into<String>>,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
            label: label.map(Into::into),
        }
    }

    /// Build a snippet for `span` by locating its first line in `source`.
    ///
    /// Spans that continue past the end of their first line are clipped to
    /// that line. Returns `None` when the span's line does not exist.
    pub fn from_source(source: &str, span: Span) -> Option<Self> {
        let line_index = (span.line as usize).checked_sub(1)?;
        let line = source.lines().nth(line_index)?;
        let start_column = span.column as usize;
        let line_chars = line.chars().count();
        let span_chars = source
            .get(span.start..span.end)
            .map_or(1, |text| text.chars().count().max(1));
        let end_column = (start_column + span_chars).min(line_chars + 1).max(start_column + 1);
        Some(Self {
            line: line.to_string(),
            line_number: span.line as usize,
            start_column,
            end_column,
            label: None,
        })
    }

    /// Format the snippet for display
    ///
    /// Returns the source line followed by a caret line pointing at the
    /// highlighted range.
    pub fn format(&self) -> String {
        let line_num_width = self.line_number.to_string().len().max(3);
        let mut result = format!(
            "{:>width$} | {}\n",
            self.line_number,
            self.line,
            width = line_num_width
        );

        result.push_str(&format!("{:>width$} | ", "", width = line_num_width));

        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);
        result.push_str(&" ".repeat(underline_start));
        result.push_str(&"^".repeat(underline_len));

        if let Some(ref label) = self.label {
            result.push_str(&format!(" {}", label));
        }

        result
    }
}

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use jslex_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Level};
/// use jslex_util::Span;
///
/// let diag = DiagnosticBuilder::new(Level::Error, "unrecognized symbol")
///     .code(DiagnosticCode::E_LEXER_UNRECOGNIZED_SYMBOL)
///     .span(Span::new(3, 4, 1, 4))
///     .help("remove the character")
///     .build();
/// assert_eq!(diag.level, Level::Error);
/// ```
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
    snippets: Vec<SourceSnippet>,
}

impl DiagnosticBuilder {
    /// Create a new diagnostic builder
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Add a note to the diagnostic
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion to the diagnostic
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Add a source code snippet
    pub fn snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            notes: self.notes,
            helps: self.helps,
            snippets: self.snippets,
        }
    }

    /// Build and emit the diagnostic to the given handler
    ///
    /// # Examples
    ///
    /// ```
    /// use jslex_util::diagnostic::{DiagnosticBuilder, Handler};
    ///
    /// let handler = Handler::new();
    /// DiagnosticBuilder::error("unterminated string").emit(&handler);
    /// assert!(handler.has_errors());
    /// ```
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_snippet_format() {
        let snippet = SourceSnippet::new("let x = 42;", 1, 5, 6, Some("here"));
        let formatted = snippet.format();
        assert!(formatted.contains("let x = 42;"));
        assert!(formatted.ends_with("    ^ here"));
    }

    #[test]
    fn test_snippet_from_source() {
        let source = "let a = 1;\nlet b = #;\n";
        let span = Span::new(19, 20, 2, 9);
        let snippet = SourceSnippet::from_source(source, span).unwrap();
        assert_eq!(snippet.line, "let b = #;");
        assert_eq!(snippet.line_number, 2);
        assert_eq!(snippet.start_column, 9);
        assert_eq!(snippet.end_column, 10);
    }

    #[test]
    fn test_snippet_from_source_clips_multiline_span() {
        let source = "x = \"abc\ndef";
        let span = Span::new(4, source.len(), 1, 5);
        let snippet = SourceSnippet::from_source(source, span).unwrap();
        assert_eq!(snippet.line, "x = \"abc");
        assert_eq!(snippet.end_column, 9);
    }

    #[test]
    fn test_snippet_from_source_missing_line() {
        assert!(SourceSnippet::from_source("abc", Span::new(0, 1, 4, 1)).is_none());
        assert!(SourceSnippet::from_source("abc", Span::DUMMY).is_none());
    }

    #[test]
    fn test_builder_fluent() {
        let snippet = SourceSnippet::new("a # b", 1, 3, 4, Some("here"));

        let diag = DiagnosticBuilder::error("unrecognized symbol")
            .code(DiagnosticCode::E_LEXER_UNRECOGNIZED_SYMBOL)
            .span(Span::new(2, 3, 1, 3))
            .note("only ASCII punctuation is recognized")
            .help("remove the character")
            .snippet(snippet)
            .build();

        assert_eq!(diag.level, Level::Error);
        assert_eq!(diag.code, Some(DiagnosticCode::E_LEXER_UNRECOGNIZED_SYMBOL));
        assert_eq!(diag.notes.len(), 1);
        assert_eq!(diag.helps, vec!["remove the character"]);
        assert_eq!(diag.snippets.len(), 1);
    }

    #[test]
    fn test_builder_emit() {
        let handler = Handler::new();
        DiagnosticBuilder::error("test error")
            .span(Span::DUMMY)
            .emit(&handler);

        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 1);
    }
}
