use rstest::rstest;

use crate::{ErrorKind, ParseError, ParserOptions, parse, parse_with_options};

#[rstest]
#[case("", ErrorKind::ExpectedValue, 0)]
#[case("  ", ErrorKind::ExpectedValue, 2)]
#[case("nul", ErrorKind::ExpectedValue, 0)]
#[case("True", ErrorKind::ExpectedValue, 0)]
#[case("'x'", ErrorKind::ExpectedValue, 0)]
#[case("+1", ErrorKind::ExpectedValue, 0)]
#[case(".5", ErrorKind::ExpectedValue, 0)]
fn rejects_non_values(#[case] input: &str, #[case] kind: ErrorKind, #[case] position: usize) {
    assert_eq!(parse(input), Err(ParseError::new(kind, position)));
}

#[rstest]
#[case("1 2", 2)]
#[case("[1]x", 3)]
#[case("{}x", 2)]
#[case("truely", 4)]
#[case("null null", 5)]
fn rejects_trailing_data(#[case] input: &str, #[case] position: usize) {
    assert_eq!(
        parse(input),
        Err(ParseError::new(ErrorKind::TrailingData, position))
    );
}

#[rstest]
#[case("[,]", ErrorKind::ExpectedValue, 1)]
#[case("[1,]", ErrorKind::ExpectedValue, 3)]
#[case("[1,,2]", ErrorKind::ExpectedValue, 3)]
#[case("[1 2]", ErrorKind::ExpectedClosingBracket, 3)]
#[case("[truefoo]", ErrorKind::ExpectedClosingBracket, 5)]
#[case("[tru]", ErrorKind::ExpectedValue, 1)]
fn rejects_malformed_arrays(#[case] input: &str, #[case] kind: ErrorKind, #[case] position: usize) {
    assert_eq!(parse(input), Err(ParseError::new(kind, position)));
}

#[rstest]
#[case("{,}", ErrorKind::ExpectedQuote, 1)]
#[case("{1:2}", ErrorKind::ExpectedQuote, 1)]
#[case("{\"a\":1,}", ErrorKind::ExpectedQuote, 7)]
#[case("{\"a\" 1}", ErrorKind::ExpectedColon, 5)]
#[case("{\"a\":}", ErrorKind::ExpectedValue, 5)]
#[case("{\"a\":1 \"b\":2}", ErrorKind::ExpectedClosingBrace, 7)]
fn rejects_malformed_objects(
    #[case] input: &str,
    #[case] kind: ErrorKind,
    #[case] position: usize,
) {
    assert_eq!(parse(input), Err(ParseError::new(kind, position)));
}

/// A proper prefix of valid JSON always fails at the end of the input.
#[rstest]
#[case("[")]
#[case("[1")]
#[case("[[1,2]")]
#[case("[true,")]
#[case("{")]
#[case("{\"a\"")]
#[case("{\"a\":")]
#[case("{\"a\":1")]
#[case("\"abc")]
#[case("\"esc\\")]
#[case("-")]
#[case("1e")]
fn prefix_of_valid_json_fails_at_input_length(#[case] input: &str) {
    let err = parse(input).unwrap_err();
    assert_eq!(err.position, input.chars().count(), "input: {input:?}");
}

#[test]
fn formats_message_with_index() {
    let err = parse("[1,]").unwrap_err();
    assert_eq!(err.to_string(), "Expected value at index 3");

    let err = parse("{\"a\" 1}").unwrap_err();
    assert_eq!(err.to_string(), "Expected colon at index 5");
}

#[test]
fn nesting_limit_exceeded_beyond_default() {
    // The bracket that would open the 1001st container is one too deep.
    let input = "[".repeat(1001);
    assert_eq!(
        parse(&input),
        Err(ParseError::new(ErrorKind::NestingLimitExceeded, 1000))
    );
}

#[test]
fn pathological_nesting_fails_without_exhausting_the_stack() {
    // Depth is tracked on the heap, so input far past the limit still
    // reports the first over-deep bracket instead of crashing the thread.
    let arrays = "[".repeat(100_000);
    assert_eq!(
        parse(&arrays),
        Err(ParseError::new(ErrorKind::NestingLimitExceeded, 1000))
    );

    let objects = "{\"k\":".repeat(100_000);
    assert_eq!(
        parse(&objects),
        Err(ParseError::new(ErrorKind::NestingLimitExceeded, 5000))
    );
}

#[test]
fn nesting_limit_respects_options() {
    let options = ParserOptions {
        max_nesting_depth: 2,
    };
    assert!(parse_with_options("[[]]", options).is_ok());
    assert!(parse_with_options("[[1]]", options).is_ok());
    assert_eq!(
        parse_with_options("[[[]]]", options),
        Err(ParseError::new(ErrorKind::NestingLimitExceeded, 2))
    );
    assert_eq!(
        parse_with_options("{\"a\":{\"b\":{\"c\":1}}}", options),
        Err(ParseError::new(ErrorKind::NestingLimitExceeded, 10))
    );
}

#[test]
fn nesting_limit_failure_propagates_out_of_empty_check() {
    // The array empty-detection probe must not swallow the depth error.
    let options = ParserOptions {
        max_nesting_depth: 1,
    };
    let err = parse_with_options("[[", options).unwrap_err();
    assert_eq!(err.kind, ErrorKind::NestingLimitExceeded);
}
