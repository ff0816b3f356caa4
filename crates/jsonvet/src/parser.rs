//! The grammar rules.
//!
//! Each rule takes a [`Cursor`] by value and returns either the parsed
//! construct paired with the advanced cursor, or a [`ParseError`] carrying
//! the offset where the mismatch was detected. Failures short-circuit every
//! enclosing rule via `?`; no rule retries past a child failure.
//!
//! Containers are parsed iteratively: an opening `[` or `{` pushes a
//! [`Frame`] onto an explicit stack instead of recursing, so nesting depth
//! consumes heap rather than call stack and the configured limit is
//! reachable without exhausting the thread stack. Opening a container at
//! the maximum depth fails immediately, which converts what would otherwise
//! be unbounded resource use on adversarial input into an ordinary
//! [`ParseError`].

use crate::cursor::Cursor;
use crate::error::{ErrorKind, ParseError};
use crate::options::ParserOptions;
use crate::value::{Array, Map, Value};

/// A rule outcome: the parsed construct plus the advanced cursor.
type Parsed<'a, T> = Result<(T, Cursor<'a>), ParseError>;

/// One partially-built container on the explicit parse stack.
///
/// An object frame carries the key of the member whose value is currently
/// being parsed.
enum Frame {
    Array(Array),
    Object(Map, String),
}

/// Parses one complete document: a single value with nothing after it.
pub(crate) fn document(buf: &[char], options: ParserOptions) -> Result<Value, ParseError> {
    let (parsed, cursor) = value(Cursor::new(buf), options)?;
    if !cursor.at_end() {
        return Err(ParseError::new(ErrorKind::TrailingData, cursor.pos()));
    }
    Ok(parsed)
}

/// Parses a value surrounded by optional whitespace.
///
/// Scalars and empty containers complete in place. A non-empty container
/// pushes a [`Frame`] and loops back to parse its first element; each
/// completed value then pops back into the innermost frame, closing
/// containers for as long as their delimiters follow.
fn value(mut cursor: Cursor<'_>, options: ParserOptions) -> Parsed<'_, Value> {
    let mut stack: Vec<Frame> = Vec::new();

    loop {
        cursor.skip_whitespace();
        let mut completed = match cursor.peek() {
            Some('[') => {
                if stack.len() >= options.max_nesting_depth {
                    return Err(ParseError::new(
                        ErrorKind::NestingLimitExceeded,
                        cursor.pos(),
                    ));
                }
                cursor.bump();
                // The array is empty only if `]` follows; otherwise the
                // first element is required and its failure stands.
                let mut probe = cursor;
                probe.skip_whitespace();
                if probe.peek() != Some(']') {
                    stack.push(Frame::Array(Array::new()));
                    continue;
                }
                probe.bump();
                cursor = probe;
                Value::Array(Array::new())
            }
            Some('{') => {
                if stack.len() >= options.max_nesting_depth {
                    return Err(ParseError::new(
                        ErrorKind::NestingLimitExceeded,
                        cursor.pos(),
                    ));
                }
                cursor.bump();
                let mut probe = cursor;
                probe.skip_whitespace();
                if probe.peek() != Some('}') {
                    let (key, next) = member_key(cursor)?;
                    cursor = next;
                    stack.push(Frame::Object(Map::new(), key));
                    continue;
                }
                probe.bump();
                cursor = probe;
                Value::Object(Map::new())
            }
            Some('"') => {
                let (s, next) = string(cursor)?;
                cursor = next;
                Value::String(s)
            }
            Some(c) if c.is_ascii_digit() || c == '-' => {
                let (n, next) = number(cursor)?;
                cursor = next;
                Value::Number(n)
            }
            _ => {
                let (keyword, next) = literal(cursor)?;
                cursor = next;
                keyword
            }
        };

        loop {
            cursor.skip_whitespace();
            match stack.pop() {
                None => return Ok((completed, cursor)),
                Some(Frame::Array(mut elements)) => {
                    elements.push(completed);
                    if cursor.peek() == Some(',') {
                        cursor.bump();
                        stack.push(Frame::Array(elements));
                        break; // parse the next element
                    }
                    if cursor.peek() != Some(']') {
                        return Err(ParseError::new(
                            ErrorKind::ExpectedClosingBracket,
                            cursor.pos(),
                        ));
                    }
                    cursor.bump();
                    completed = Value::Array(elements);
                }
                Some(Frame::Object(mut members, key)) => {
                    // A repeated key overwrites the earlier value while
                    // keeping its first-seen slot.
                    members.insert(key, completed);
                    if cursor.peek() == Some(',') {
                        cursor.bump();
                        let (key, next) = member_key(cursor)?;
                        cursor = next;
                        stack.push(Frame::Object(members, key));
                        break; // parse the member's value
                    }
                    if cursor.peek() != Some('}') {
                        return Err(ParseError::new(
                            ErrorKind::ExpectedClosingBrace,
                            cursor.pos(),
                        ));
                    }
                    cursor.bump();
                    completed = Value::Object(members);
                }
            }
        }
    }
}

/// Parses the key and colon of one object member, leaving the cursor at
/// the start of the member's value. String-lexer failures propagate
/// verbatim, so a non-string key reports [`ErrorKind::ExpectedQuote`].
fn member_key(mut cursor: Cursor<'_>) -> Parsed<'_, String> {
    cursor.skip_whitespace();
    let (key, mut cursor) = string(cursor)?;
    cursor.skip_whitespace();
    if cursor.peek() != Some(':') {
        return Err(ParseError::new(ErrorKind::ExpectedColon, cursor.pos()));
    }
    cursor.bump();
    Ok((key, cursor))
}

/// Matches the keyword literals `true`, `false`, and `null`.
///
/// The match is a fixed-width lookahead against the keyword text; trailing
/// identifier-like characters (`truefoo`) are left for the enclosing rule
/// or the top-level trailing-data check to reject.
fn literal(mut cursor: Cursor<'_>) -> Parsed<'_, Value> {
    for (keyword, parsed) in [
        ("true", Value::Boolean(true)),
        ("false", Value::Boolean(false)),
        ("null", Value::Null),
    ] {
        if cursor.matches(keyword) {
            cursor.advance_by(keyword.len());
            return Ok((parsed, cursor));
        }
    }
    Err(ParseError::new(ErrorKind::ExpectedValue, cursor.pos()))
}

/// Lexes a numeric literal and decodes it to an `f64`.
///
/// Consumes the maximal prefix matching the JSON number grammar: optional
/// `-`, an integer part without leading zeros, an optional fraction, and an
/// optional exponent.
fn number(mut cursor: Cursor<'_>) -> Parsed<'_, f64> {
    let start = cursor.pos();
    let mut lexeme = String::new();

    if cursor.peek() == Some('-') {
        lexeme.push('-');
        cursor.bump();
    }

    match cursor.peek() {
        Some('0') => {
            lexeme.push('0');
            cursor.bump();
            // A digit directly after a leading zero is an error here rather
            // than leftover input, so `01` reports at offset 1.
            if cursor.peek().is_some_and(|c| c.is_ascii_digit()) {
                return Err(ParseError::new(ErrorKind::InvalidNumber, cursor.pos()));
            }
        }
        Some(c @ '1'..='9') => {
            lexeme.push(c);
            cursor.bump();
            while let Some(c) = cursor.peek() {
                if !c.is_ascii_digit() {
                    break;
                }
                lexeme.push(c);
                cursor.bump();
            }
        }
        _ => return Err(ParseError::new(ErrorKind::InvalidNumber, cursor.pos())),
    }

    if cursor.peek() == Some('.') {
        lexeme.push('.');
        cursor.bump();
        if !cursor.peek().is_some_and(|c| c.is_ascii_digit()) {
            return Err(ParseError::new(ErrorKind::InvalidNumber, cursor.pos()));
        }
        while let Some(c) = cursor.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            lexeme.push(c);
            cursor.bump();
        }
    }

    if matches!(cursor.peek(), Some('e' | 'E')) {
        lexeme.push('e');
        cursor.bump();
        if let Some(sign @ ('+' | '-')) = cursor.peek() {
            lexeme.push(sign);
            cursor.bump();
        }
        if !cursor.peek().is_some_and(|c| c.is_ascii_digit()) {
            return Err(ParseError::new(ErrorKind::InvalidNumber, cursor.pos()));
        }
        while let Some(c) = cursor.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            lexeme.push(c);
            cursor.bump();
        }
    }

    let parsed = lexeme
        .parse::<f64>()
        .map_err(|_| ParseError::new(ErrorKind::InvalidNumber, start))?;
    Ok((parsed, cursor))
}

/// Lexes a string literal, decoding escapes into the result.
///
/// Each `\uXXXX` escape contributes one UTF-16 code unit. An adjacent pair
/// of escapes forming a surrogate pair decodes to a single scalar; a lone
/// surrogate, which cannot be stored in a Rust string, decodes to U+FFFD.
fn string(mut cursor: Cursor<'_>) -> Parsed<'_, String> {
    if cursor.peek() != Some('"') {
        return Err(ParseError::new(ErrorKind::ExpectedQuote, cursor.pos()));
    }
    cursor.bump();

    let mut decoded = String::new();
    loop {
        match cursor.peek() {
            None => {
                return Err(ParseError::new(
                    ErrorKind::UnterminatedString,
                    cursor.pos(),
                ));
            }
            Some('"') => {
                cursor.bump();
                return Ok((decoded, cursor));
            }
            Some(c) if (c as u32) < 0x20 => {
                return Err(ParseError::new(
                    ErrorKind::UnexpectedControlCharacter,
                    cursor.pos(),
                ));
            }
            Some('\\') => {
                cursor.bump();
                escape(&mut cursor, &mut decoded)?;
            }
            Some(c) => {
                decoded.push(c);
                cursor.bump();
            }
        }
    }
}

/// Decodes one escape sequence; the cursor is just past the backslash.
fn escape(cursor: &mut Cursor<'_>, decoded: &mut String) -> Result<(), ParseError> {
    let mapped = match cursor.peek() {
        Some('"') => '"',
        Some('\\') => '\\',
        Some('/') => '/',
        Some('b') => '\u{0008}',
        Some('f') => '\u{000C}',
        Some('n') => '\n',
        Some('r') => '\r',
        Some('t') => '\t',
        Some('u') => {
            cursor.bump();
            let unit = hex_escape(cursor)?;
            decoded.push(decode_utf16_unit(cursor, unit)?);
            return Ok(());
        }
        _ => return Err(ParseError::new(ErrorKind::InvalidEscape, cursor.pos())),
    };
    decoded.push(mapped);
    cursor.bump();
    Ok(())
}

/// Reads exactly four hex digits following `\u`.
fn hex_escape(cursor: &mut Cursor<'_>) -> Result<u16, ParseError> {
    let mut unit: u16 = 0;
    for _ in 0..4 {
        let Some(digit) = cursor.peek().and_then(|c| c.to_digit(16)) else {
            return Err(ParseError::new(ErrorKind::InvalidHexDigit, cursor.pos()));
        };
        unit = unit * 16 + digit as u16;
        cursor.bump();
    }
    Ok(unit)
}

/// Turns a decoded UTF-16 code unit into a scalar, pairing surrogates.
///
/// When `unit` is a high surrogate and another `\uXXXX` escape follows, the
/// two are combined if the second decodes to a low surrogate. Unpairable
/// surrogates become U+FFFD.
fn decode_utf16_unit(cursor: &mut Cursor<'_>, unit: u16) -> Result<char, ParseError> {
    const REPLACEMENT: char = '\u{FFFD}';

    if (0xD800..0xDC00).contains(&unit) {
        if cursor.peek() == Some('\\') && cursor.peek_at(1) == Some('u') {
            let mut lookahead = *cursor;
            lookahead.advance_by(2);
            let low = hex_escape(&mut lookahead)?;
            if (0xDC00..0xE000).contains(&low) {
                *cursor = lookahead;
                let scalar =
                    0x10000 + ((u32::from(unit) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
                return Ok(char::from_u32(scalar).unwrap_or(REPLACEMENT));
            }
        }
        // Lone high surrogate; any following escape decodes on its own.
        return Ok(REPLACEMENT);
    }
    if (0xDC00..0xE000).contains(&unit) {
        return Ok(REPLACEMENT);
    }
    Ok(char::from_u32(u32::from(unit)).unwrap_or(REPLACEMENT))
}
