use thiserror::Error;

/// Failure modes of the read accessors.
///
/// Invalid access surfaces as a typed error rather than a sentinel value;
/// the caller decides whether to recover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AccessError {
    #[error("index {index} out of range for ring of {len} elements")]
    OutOfRange { index: usize, len: usize },

    #[error("ring is empty")]
    Empty,
}
