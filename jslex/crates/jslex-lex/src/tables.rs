//! Static lookup tables: reserved words, operators and separators.
//!
//! The sets are built once on first use and never mutated afterwards, so any
//! number of scans on any number of threads can consult them concurrently.

use std::sync::LazyLock;

use jslex_util::FxHashSet;

/// Reserved words. Matching is exact and case-sensitive.
pub const KEYWORDS: [&str; 64] = [
    "abstract", "arguments", "await", "boolean", "break", "byte", "case", "catch", "char",
    "class", "const", "continue", "debugger", "default", "delete", "do", "double", "else",
    "enum", "eval", "export", "extends", "false", "final", "finally", "float", "for",
    "function", "goto", "if", "implements", "import", "in", "instanceof", "int", "interface",
    "let", "long", "native", "new", "null", "package", "private", "protected", "public",
    "return", "short", "static", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "true", "try", "typeof", "var", "void", "volatile", "while", "with", "yield",
];

/// Operator lexemes, one or two characters long.
pub const OPERATORS: [&str; 28] = [
    "==", "!=", "<=", ">=", "&&", "||", "++", "--", "+=", "-=", "*=", "/=", "%=", "<<", ">>",
    "+", "-", "*", "/", "%", "&", "|", "^", "~", "!", "=", "<", ">",
];

/// Separators that always stand alone, whatever follows them.
pub const FIXED_SEPARATORS: [char; 8] = ['(', ')', '{', '}', '[', ']', ';', ','];

static KEYWORD_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| KEYWORDS.iter().copied().collect());

static OPERATOR_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| OPERATORS.iter().copied().collect());

/// Returns true if `word` is a reserved word.
///
/// # Example
///
/// ```
/// use jslex_lex::tables::is_keyword;
///
/// assert!(is_keyword("let"));
/// assert!(!is_keyword("Let"));
/// ```
#[inline]
pub fn is_keyword(word: &str) -> bool {
    KEYWORD_SET.contains(word)
}

/// Returns true if `lexeme` is in the operator table.
#[inline]
pub fn is_operator(lexeme: &str) -> bool {
    OPERATOR_SET.contains(lexeme)
}

/// Returns true for `( ) { } [ ] ; ,`.
#[inline]
pub fn is_fixed_separator(c: char) -> bool {
    FIXED_SEPARATORS.contains(&c)
}

/// Returns true for any separator, including the member-access `.`.
#[inline]
pub fn is_separator(c: char) -> bool {
    c == '.' || is_fixed_separator(c)
}
