//! Filter error types

use thiserror::Error;

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;

/// Errors raised while validating filter inputs
///
/// Two families: domain errors (the channel response itself is unusable)
/// and shape errors (the received data does not fit the response length).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// Channel response has zero energy, so the matched kernel cannot be normalized
    #[error("channel response has zero energy")]
    ZeroEnergy,

    /// Channel response energy overflowed or is NaN
    #[error("channel response energy is not finite")]
    NonFiniteEnergy,

    /// Channel response has no taps
    #[error("channel response is empty")]
    EmptyResponse,

    /// A matched-filter row is shorter than the channel response
    #[error("row {row} has {len} samples, need at least {taps}")]
    RowTooShort { row: usize, len: usize, taps: usize },

    /// Correlation input holds less than one whole block
    #[error("received data has {len} samples, need at least {taps}")]
    InputTooShort { len: usize, taps: usize },

    /// A pre-blocked correlation row does not match the response length
    #[error("block {block} has {len} samples, expected {taps}")]
    BlockLength { block: usize, len: usize, taps: usize },
}

impl FilterError {
    /// True for errors caused by the channel response itself
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            FilterError::ZeroEnergy | FilterError::NonFiniteEnergy | FilterError::EmptyResponse
        )
    }

    /// True for errors caused by received-data length or shape
    pub fn is_shape(&self) -> bool {
        !self.is_domain()
    }

    /// Short machine-readable reason, used for NIF error terms
    pub fn reason(&self) -> &'static str {
        match self {
            FilterError::ZeroEnergy => "zero_energy",
            FilterError::NonFiniteEnergy => "non_finite_energy",
            FilterError::EmptyResponse => "empty_response",
            FilterError::RowTooShort { .. } => "row_too_short",
            FilterError::InputTooShort { .. } => "input_too_short",
            FilterError::BlockLength { .. } => "block_length",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_families() {
        assert!(FilterError::ZeroEnergy.is_domain());
        assert!(FilterError::NonFiniteEnergy.is_domain());
        assert!(FilterError::EmptyResponse.is_domain());
        assert!(FilterError::RowTooShort { row: 0, len: 1, taps: 2 }.is_shape());
        assert!(FilterError::InputTooShort { len: 1, taps: 2 }.is_shape());
        assert!(FilterError::BlockLength { block: 3, len: 1, taps: 2 }.is_shape());
    }

    #[test]
    fn test_error_messages() {
        let err = FilterError::RowTooShort { row: 2, len: 3, taps: 5 };
        assert_eq!(err.to_string(), "row 2 has 3 samples, need at least 5");
        assert_eq!(err.reason(), "row_too_short");
    }
}
