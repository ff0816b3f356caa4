//! Structured parse errors.
//!
//! Every grammar rule reports failure as a [`ParseError`]: the kind of
//! mismatch plus the character offset where it was detected. Errors
//! propagate out of the recursive descent unchanged, so the error a caller
//! sees is always the first one encountered in left-to-right order.

use thiserror::Error;

/// The kind of syntax violation a rule detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The lookahead character matched no value form.
    #[error("Expected value")]
    ExpectedValue,
    /// A malformed digit, fraction, or exponent sequence.
    #[error("Invalid number")]
    InvalidNumber,
    /// Input ended before the closing quote of a string literal.
    #[error("Unterminated string")]
    UnterminatedString,
    /// A raw character below U+0020 appeared unescaped inside a string.
    #[error("Unexpected control character")]
    UnexpectedControlCharacter,
    /// The character after `\` is not a recognized escape.
    #[error("Invalid escape character")]
    InvalidEscape,
    /// A `\u` escape was not followed by four hex digits.
    #[error("Expected hex digit")]
    InvalidHexDigit,
    /// A string literal was required but the cursor was not at `"`. Reported
    /// for object keys that are not strings.
    #[error("Expected string")]
    ExpectedQuote,
    /// An object member key was not followed by `:`.
    #[error("Expected colon")]
    ExpectedColon,
    /// An array was not terminated by `]`.
    #[error("Expected closing bracket")]
    ExpectedClosingBracket,
    /// An object was not terminated by `}`.
    #[error("Expected closing brace")]
    ExpectedClosingBrace,
    /// Extra input remained after a complete value.
    #[error("Unexpected trailing data")]
    TrailingData,
    /// The configured maximum nesting depth was exceeded.
    #[error("Nesting limit exceeded")]
    NestingLimitExceeded,
}

/// A syntax error at a specific character offset.
///
/// The offset counts characters from the start of the input, so it can be
/// used to slice the original text when rendering diagnostics.
///
/// # Examples
///
/// ```
/// use jsonvet::{parse, ErrorKind};
///
/// let err = parse("[1,]").unwrap_err();
/// assert_eq!(err.kind, ErrorKind::ExpectedValue);
/// assert_eq!(err.position, 3);
/// assert_eq!(err.to_string(), "Expected value at index 3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{kind} at index {position}")]
pub struct ParseError {
    /// What went wrong.
    pub kind: ErrorKind,
    /// Character offset where the mismatch was detected.
    pub position: usize,
}

impl ParseError {
    /// Creates an error of `kind` at character offset `position`.
    #[must_use]
    pub fn new(kind: ErrorKind, position: usize) -> Self {
        Self { kind, position }
    }
}
