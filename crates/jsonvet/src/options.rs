/// Configuration options for the parser.
///
/// # Examples
///
/// ```rust
/// use jsonvet::{ParserOptions, parse_with_options};
///
/// let options = ParserOptions {
///     max_nesting_depth: 8,
/// };
/// assert!(parse_with_options("[[[[[[[[[0]]]]]]]]]", options).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ParserOptions {
    /// Maximum nesting depth of arrays and objects.
    ///
    /// Containers are tracked on an explicit heap-allocated stack, so this
    /// bound caps that stack's growth. Once a container would open deeper
    /// than this many levels, parsing fails with
    /// [`ErrorKind::NestingLimitExceeded`] instead of consuming memory
    /// without bound.
    ///
    /// # Default
    ///
    /// `1000`
    ///
    /// [`ErrorKind::NestingLimitExceeded`]: crate::ErrorKind::NestingLimitExceeded
    pub max_nesting_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_nesting_depth: 1000,
        }
    }
}
