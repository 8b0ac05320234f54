//! Core error types for jslex-util crate
//!
//! This module defines error types used by the fallible helpers of this crate.

use thiserror::Error;

/// Error type for span operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpanError {
    /// Invalid span range
    #[error("Invalid span: start {start} > end {end}")]
    InvalidSpan {
        /// Start byte offset
        start: usize,
        /// End byte offset
        end: usize,
    },

    /// Span out of bounds for the source text
    #[error("Span out of bounds: source has {source_len} bytes, span is {span_start}..{span_end}")]
    OutOfBounds {
        /// Length of the source text in bytes
        source_len: usize,
        /// Start byte offset of the span
        span_start: usize,
        /// End byte offset of the span
        span_end: usize,
    },

    /// Span does not fall on character boundaries
    #[error("Span {start}..{end} does not fall on a UTF-8 character boundary")]
    NotCharBoundary {
        /// Start byte offset
        start: usize,
        /// End byte offset
        end: usize,
    },
}

/// Error type for diagnostic operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiagnosticError {
    /// Invalid diagnostic code
    #[error("Invalid diagnostic code: {0}")]
    InvalidCode(String),
}

/// Result type alias for span operations
pub type SpanResult<T> = std::result::Result<T, SpanError>;
