//! A validating JSON parser with exact error offsets.
//!
//! `jsonvet` decodes a complete JSON text into an owned [`Value`] tree, or
//! reports the character offset of the first syntax error. It is a strict
//! single-pass parser: the whole input must be a single JSON value, trailing
//! data is rejected, and nesting depth is bounded by a configurable limit so
//! adversarial input fails with a structured error instead of consuming
//! resources without bound. Containers are parsed with an explicit stack,
//! so deeply nested input never exhausts the thread stack.
//!
//! # Examples
//!
//! ```
//! use jsonvet::{parse, Value};
//!
//! let value = parse(r#"{"name": "jsonvet", "strict": true}"#).unwrap();
//! assert_eq!(value.get("name"), Some(&Value::String("jsonvet".into())));
//!
//! let err = parse("[1, 2,]").unwrap_err();
//! assert_eq!(err.to_string(), "Expected value at index 6");
//! ```

mod cursor;
mod error;
mod options;
mod parser;
mod value;

#[cfg(test)]
mod tests;

pub use error::{ErrorKind, ParseError};
pub use options::ParserOptions;
pub use value::{Array, Map, Value};

/// Parses a complete JSON text into a [`Value`] with default options.
///
/// The input must contain exactly one JSON value, optionally surrounded by
/// whitespace. On failure the returned [`ParseError`] carries the kind of
/// mismatch and the character offset where it was detected, and displays as
/// `"<message> at index <position>"`.
///
/// # Errors
///
/// Returns a [`ParseError`] if `input` is not a single complete JSON value.
///
/// # Examples
///
/// ```
/// use jsonvet::{parse, Value};
///
/// assert_eq!(parse("[]").unwrap(), Value::Array(vec![]));
/// assert!(parse("[1, 2").is_err());
/// ```
pub fn parse(input: &str) -> Result<Value, ParseError> {
    parse_with_options(input, ParserOptions::default())
}

/// Parses a complete JSON text with explicit [`ParserOptions`].
///
/// # Errors
///
/// Returns a [`ParseError`] if `input` is not a single complete JSON value
/// or exceeds the configured nesting depth.
///
/// # Examples
///
/// ```
/// use jsonvet::{ErrorKind, ParserOptions, parse_with_options};
///
/// let options = ParserOptions {
///     max_nesting_depth: 2,
/// };
/// let err = parse_with_options("[[[1]]]", options).unwrap_err();
/// assert_eq!(err.kind, ErrorKind::NestingLimitExceeded);
/// ```
pub fn parse_with_options(input: &str, options: ParserOptions) -> Result<Value, ParseError> {
    let buf: Vec<char> = input.chars().collect();
    parser::document(&buf, options)
}
