//! Token stream and diagnostic rendering.

use std::fmt::Write as _;

use clap::ValueEnum;
use jslex_lex::{Token, TokenStream};
use jslex_util::{Diagnostic, SourceSnippet};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// How the token listing is printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `<lexeme, category>` line per token
    #[default]
    Text,
    /// A JSON array of token objects
    Json,
}

/// One token as it appears in JSON output.
#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    lexeme: &'a str,
    category: &'static str,
    line: u32,
    column: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<'a> From<&Token<'a>> for TokenRecord<'a> {
    fn from(token: &Token<'a>) -> Self {
        Self {
            lexeme: token.lexeme,
            category: token.category.name(),
            line: token.span.line,
            column: token.span.column,
            error: token.error_kind().map(|kind| kind.to_string()),
        }
    }
}

/// Renders the whole stream in the requested format.
///
/// `spans` only affects text output; JSON always carries positions.
pub fn render_tokens(
    stream: &TokenStream<'_>,
    format: OutputFormat,
    spans: bool,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(stream, spans)),
        OutputFormat::Json => render_json(stream),
    }
}

fn render_text(stream: &TokenStream<'_>, spans: bool) -> String {
    if !spans {
        return stream.to_string();
    }
    let mut out = String::new();
    for token in stream {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{} {}", token.span, token);
    }
    out
}

fn render_json(stream: &TokenStream<'_>) -> Result<String> {
    let records: Vec<TokenRecord<'_>> = stream.iter().map(TokenRecord::from).collect();
    let mut json = serde_json::to_string_pretty(&records)?;
    json.push('\n');
    Ok(json)
}

/// Renders diagnostics one after another, each with the offending source
/// line underneath.
pub fn render_diagnostics(diagnostics: Vec<Diagnostic>, source: &str) -> String {
    let mut out = String::new();
    for diagnostic in diagnostics {
        let diagnostic = match SourceSnippet::from_source(source, diagnostic.span) {
            Some(snippet) => diagnostic.with_snippet(snippet),
            None => diagnostic,
        };
        let _ = writeln!(out, "{}", diagnostic);
    }
    out
}
