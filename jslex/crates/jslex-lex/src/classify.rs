//! Classifier: assigns a category to a completed lexeme.
//!
//! Every function here is pure. The extractor in [`crate::lexer`] decides
//! where a lexeme starts and ends and then asks this module what it is.
//!
//! Numeric precedence, first match wins:
//!
//! 1. hexadecimal: `0x` / `0X` followed by one or more hex digits
//! 2. floating point: `[+-]?[0-9]*\.[0-9]+([eE][+-]?[0-9]+)?`
//! 3. decimal integer: `[+-]?[0-9]+`

use crate::error::LexErrorKind;
use crate::tables::{is_keyword, is_operator, is_separator};
use crate::token::Category;

/// Classifies a numeric-shaped word run.
///
/// # Example
///
/// ```
/// use jslex_lex::classify::classify_numeric;
/// use jslex_lex::{Category, LexErrorKind};
///
/// assert_eq!(classify_numeric("0x1A3F"), Category::Literal);
/// assert_eq!(classify_numeric("3."), Category::Error(LexErrorKind::MalformedNumericRun));
/// ```
pub fn classify_numeric(run: &str) -> Category {
    if is_hexadecimal(run) || is_floating_point(run) || is_decimal(run) {
        Category::Literal
    } else {
        Category::Error(LexErrorKind::MalformedNumericRun)
    }
}

/// Classifies one dot-free segment of a name run.
pub fn classify_name(segment: &str) -> Category {
    if is_keyword(segment) {
        Category::Keyword
    } else if is_identifier(segment) {
        Category::Identifier
    } else {
        Category::Error(LexErrorKind::UnrecognizedSymbol)
    }
}

/// Classifies a one- or two-character punctuation lexeme.
pub fn classify_punct(lexeme: &str) -> Category {
    if is_operator(lexeme) {
        return Category::Operator;
    }
    let mut chars = lexeme.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if is_separator(c) => Category::Separator,
        _ => Category::Error(LexErrorKind::UnrecognizedSymbol),
    }
}

/// `0x` or `0X` followed by at least one hex digit.
pub fn is_hexadecimal(s: &str) -> bool {
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(digits) => !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_hexdigit()),
        None => false,
    }
}

/// `[+-]?[0-9]*\.[0-9]+([eE][+-]?[0-9]+)?`
pub fn is_floating_point(s: &str) -> bool {
    let s = strip_sign(s);
    let Some((int_part, rest)) = s.split_once('.') else {
        return false;
    };
    if !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let (fraction, exponent) = match rest.find(['e', 'E']) {
        Some(idx) => (&rest[..idx], Some(&rest[idx + 1..])),
        None => (rest, None),
    };
    if !is_digits(fraction) {
        return false;
    }
    exponent.is_none_or(|exp| is_digits(strip_sign(exp)))
}

/// `[+-]?[0-9]+`
pub fn is_decimal(s: &str) -> bool {
    is_digits(strip_sign(s))
}

/// `[A-Za-z_][A-Za-z0-9_]*`
pub fn is_identifier(s: &str) -> bool {
    let mut bytes = s.bytes();
    match bytes.next() {
        Some(b) if b.is_ascii_alphabetic() || b == b'_' => {},
        _ => return false,
    }
    bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

fn strip_sign(s: &str) -> &str {
    s.strip_prefix(['+', '-']).unwrap_or(s)
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MALFORMED: Category = Category::Error(LexErrorKind::MalformedNumericRun);
    const UNRECOGNIZED: Category = Category::Error(LexErrorKind::UnrecognizedSymbol);

    #[test]
    fn test_hexadecimal() {
        assert!(is_hexadecimal("0x1A3F"));
        assert!(is_hexadecimal("0XFF"));
        assert!(is_hexadecimal("0xdeadBEEF"));
        assert!(!is_hexadecimal("0x"));
        assert!(!is_hexadecimal("0xG"));
        assert!(!is_hexadecimal("-0x1"));
        assert!(!is_hexadecimal("1x1"));
    }

    #[test]
    fn test_floating_point() {
        assert!(is_floating_point("3.14"));
        assert!(is_floating_point(".5"));
        assert!(is_floating_point("-0.5"));
        assert!(is_floating_point("+1.0e10"));
        assert!(is_floating_point("2.5e-3"));
        assert!(is_floating_point("2.5E+3"));
        assert!(!is_floating_point("3."));
        assert!(!is_floating_point("1e10"));
        assert!(!is_floating_point("1.2.3"));
        assert!(!is_floating_point("1.5e"));
        assert!(!is_floating_point("1.5e-"));
        assert!(!is_floating_point("1.x"));
        assert!(!is_floating_point("."));
    }

    #[test]
    fn test_decimal() {
        assert!(is_decimal("42"));
        assert!(is_decimal("-7"));
        assert!(is_decimal("+0"));
        assert!(!is_decimal("-"));
        assert!(!is_decimal(""));
        assert!(!is_decimal("4a"));
    }

    #[test]
    fn test_numeric_precedence() {
        assert_eq!(classify_numeric("0x1A3F"), Category::Literal);
        assert_eq!(classify_numeric("3.14"), Category::Literal);
        assert_eq!(classify_numeric("42"), Category::Literal);
        assert_eq!(classify_numeric("3."), MALFORMED);
        assert_eq!(classify_numeric("12abc"), MALFORMED);
        assert_eq!(classify_numeric("0x"), MALFORMED);
        assert_eq!(classify_numeric("1e5"), MALFORMED);
    }

    #[test]
    fn test_identifier_shape() {
        assert!(is_identifier("a"));
        assert!(is_identifier("_private"));
        assert!(is_identifier("camelCase9"));
        assert!(!is_identifier("9lives"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("a-b"));
    }

    #[test]
    fn test_classify_name() {
        assert_eq!(classify_name("let"), Category::Keyword);
        assert_eq!(classify_name("Let"), Category::Identifier);
        assert_eq!(classify_name("instanceof"), Category::Keyword);
        assert_eq!(classify_name("console"), Category::Identifier);
        assert_eq!(classify_name("3"), UNRECOGNIZED);
    }

    #[test]
    fn test_classify_punct() {
        assert_eq!(classify_punct("<<"), Category::Operator);
        assert_eq!(classify_punct("="), Category::Operator);
        assert_eq!(classify_punct("~"), Category::Operator);
        assert_eq!(classify_punct("."), Category::Separator);
        assert_eq!(classify_punct(";"), Category::Separator);
        assert_eq!(classify_punct("#"), UNRECOGNIZED);
        assert_eq!(classify_punct("@"), UNRECOGNIZED);
        assert_eq!(classify_punct("é"), UNRECOGNIZED);
    }
}
