//! Token type definitions.
//!
//! A [`Token`] pairs a lexeme (a slice of the source text) with its
//! [`Category`]. A [`TokenStream`] is the ordered result of one scan.

use std::fmt;
use std::ops::Index;

use jslex_util::Span;

use crate::error::LexErrorKind;

/// Token category.
///
/// A closed set. `Comment` is reserved: comments are discarded during
/// scanning and no token of this category is ever produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// A reserved word such as `let` or `typeof`
    Keyword,
    /// A name: `[A-Za-z_][A-Za-z0-9_]*` that is not reserved
    Identifier,
    /// `( ) { } [ ] ; ,` and member-access `.`
    Separator,
    /// An entry of the operator table
    Operator,
    /// A numeric, string or character literal
    Literal,
    /// Reserved, never emitted
    Comment,
    /// A lexical defect
    Error(LexErrorKind),
}

impl Category {
    /// Returns the lower-case category name, `"error"` for every error kind.
    pub const fn name(&self) -> &'static str {
        match self {
            Category::Keyword => "keyword",
            Category::Identifier => "identifier",
            Category::Separator => "separator",
            Category::Operator => "operator",
            Category::Literal => "literal",
            Category::Comment => "comment",
            Category::Error(_) => "error",
        }
    }

    /// Returns true for error categories.
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Category::Error(_))
    }
}

/// Renders as the category name; errors render as `error: <tag>`.
impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Error(kind) => write!(f, "error: {}", kind),
            other => f.write_str(other.name()),
        }
    }
}

/// A classified lexeme.
///
/// `lexeme` is never empty and is always `&source[span.start..span.end]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'src> {
    /// The exact source text of the token.
    pub lexeme: &'src str,
    /// The token's category.
    pub category: Category,
    /// Where the token sits in the source.
    pub span: Span,
}

impl<'src> Token<'src> {
    /// Creates a new token.
    pub fn new(lexeme: &'src str, category: Category, span: Span) -> Self {
        debug_assert!(!lexeme.is_empty(), "tokens never have an empty lexeme");
        Self {
            lexeme,
            category,
            span,
        }
    }

    /// Returns the error kind if this is an error token.
    pub fn error_kind(&self) -> Option<LexErrorKind> {
        match self.category {
            Category::Error(kind) => Some(kind),
            _ => None,
        }
    }

    /// Returns true if this is an error token.
    #[inline]
    pub fn is_error(&self) -> bool {
        self.category.is_error()
    }
}

/// Renders as `<lexeme, category>`.
impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.lexeme, self.category)
    }
}

/// The ordered tokens of one scan.
///
/// Built once and read-only afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenStream<'src> {
    tokens: Vec<Token<'src>>,
}

impl<'src> TokenStream<'src> {
    pub(crate) fn new(tokens: Vec<Token<'src>>) -> Self {
        Self { tokens }
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the scan produced no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterates over the tokens in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, Token<'src>> {
        self.tokens.iter()
    }

    /// The tokens as a slice.
    pub fn as_slice(&self) -> &[Token<'src>] {
        &self.tokens
    }

    /// The category of every token, in order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.tokens.iter().map(|t| t.category)
    }

    /// The lexeme of every token, in order.
    pub fn lexemes(&self) -> impl Iterator<Item = &'src str> + '_ {
        self.tokens.iter().map(|t| t.lexeme)
    }

    /// `(lexeme, category)` pairs, in order.
    pub fn pairs(&self) -> Vec<(&'src str, Category)> {
        self.tokens.iter().map(|t| (t.lexeme, t.category)).collect()
    }

    /// The error tokens, in order.
    pub fn errors(&self) -> impl Iterator<Item = &Token<'src>> + '_ {
        self.tokens.iter().filter(|t| t.is_error())
    }

    /// Returns true if any token is an error token.
    pub fn has_errors(&self) -> bool {
        self.tokens.iter().any(Token::is_error)
    }

    /// Consumes the stream and returns the tokens.
    pub fn into_vec(self) -> Vec<Token<'src>> {
        self.tokens
    }
}

impl<'src> Index<usize> for TokenStream<'src> {
    type Output = Token<'src>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.tokens[index]
    }
}

impl<'src> IntoIterator for TokenStream<'src> {
    type Item = Token<'src>;
    type IntoIter = std::vec::IntoIter<Token<'src>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a, 'src> IntoIterator for &'a TokenStream<'src> {
    type Item = &'a Token<'src>;
    type IntoIter = std::slice::Iter<'a, Token<'src>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl<'src> FromIterator<Token<'src>> for TokenStream<'src> {
    fn from_iter<I: IntoIterator<Item = Token<'src>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// One `<lexeme, category>` line per token.
impl fmt::Display for TokenStream<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            writeln!(f, "{}", token)?;
        }
        Ok(())
    }
}
