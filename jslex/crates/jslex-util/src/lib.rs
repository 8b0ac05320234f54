//! jslex-util - Shared foundation types for the jslex workspace
//!
//! This crate holds the pieces every other crate in the workspace needs but
//! which have nothing to do with scanning itself:
//!
//! - [`span`] - byte ranges plus line/column positions in the source text
//! - [`diagnostic`] - error reporting: [`Diagnostic`], [`DiagnosticBuilder`],
//!   [`DiagnosticCode`] and the collecting [`Handler`]
//! - [`error`] - error types for the fallible helpers in this crate
//!
//! # Example
//!
//! ```
//! use jslex_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unterminated string")
//!     .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
//!     .span(Span::new(0, 4, 1, 1))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet};
pub use error::{DiagnosticError, SpanError, SpanResult};
pub use span::Span;

pub use rustc_hash::FxHashSet;
