use thiserror::Error;

/// A starting offset that can't be applied to the tracker.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OffsetError {
    #[error("offset must not be negative (got {0})")]
    Negative(f64),
    #[error("offset must be a finite number")]
    NotFinite,
    #[error("offset is not a number: {0:?}")]
    NotANumber(String),
    #[error("offset of {0} seconds is too large")]
    TooLarge(f64),
}
