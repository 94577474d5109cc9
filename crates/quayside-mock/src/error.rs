//! Mock layer error types.

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, MockError>;

/// Errors raised while building the route table.
///
/// Matched routes never fail; only registration can.
#[derive(Debug, thiserror::Error)]
pub enum MockError {
    /// A route pattern is not a valid regular expression.
    #[error("invalid route pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
}
