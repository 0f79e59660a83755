use thiserror::Error;

/// Errors returned by every encode and decode operation in this crate.
///
/// The set is closed. Parsing has nothing transient to retry, so every
/// multi-step operation fails fast: the first error aborts it, propagates
/// unchanged, and leaves the cursor at the position it started from.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Structurally malformed content, e.g. a dangling OID subidentifier.
    #[error("invalid data")]
    InvalidData,

    /// Source exhausted on decode, or destination capacity exceeded on
    /// encode.
    #[error("buffer too small")]
    BufferTooSmall,

    /// Non-canonical or unrepresentable length field, or content whose
    /// length violates the type's rules (e.g. a non-empty NULL).
    #[error("invalid length")]
    InvalidLength,

    /// Tag mismatch for the decode operation invoked, or the unsupported
    /// high-tag-number form.
    #[error("invalid tag")]
    InvalidTag,

    /// Decoded value does not fit the requested fixed-width output.
    #[error("arithmetic overflow")]
    Overflow,

    /// Nesting deeper than [`MAX_DEPTH`](crate::MAX_DEPTH).
    #[error("nesting too deep")]
    DepthExceeded,
}

pub type Result<T> = std::result::Result<T, Error>;
