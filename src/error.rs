//! Clock error types.

use thiserror::Error;

/// Clock error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockError {
    /// A value outside `0..limit` was handed to a counter.
    #[error("invalid argument: {value} is outside 0..{limit}")]
    InvalidArgument { value: i32, limit: u8 },
}

/// Result type for clock operations.
pub type Result<T> = core::result::Result<T, ClockError>;
