//! Lexer module.
//!
//! This module organizes the lexeme extractor into smaller, focused components:
//! - `core` - Main Lexer struct, dispatch and token bookkeeping
//! - `comment` - Whitespace and comment skipping
//! - `string` - String and character literal runs
//! - `word` - Identifier, keyword, number and dotted-path runs
//! - `punct` - Operator and separator runs

mod comment;
mod core;
mod punct;
mod string;
mod word;

pub use core::Lexer;
