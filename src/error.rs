use thiserror::Error;

/// Errors raised while computing the slope×R² feature.
///
/// Every variant is returned at the point of detection and reaches the caller unchanged;
/// there is no partial result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FeatureError {
    /// A series that had to be normalized or averaged was empty
    #[error("input series cannot be empty")]
    EmptySeries,

    /// Every value of a series to normalize was identical (min == max)
    #[error("all values are identical, cannot normalize a constant series")]
    DegenerateSeries,

    /// Covariance was requested on series of unequal length
    #[error("series must have the same length: {left} != {right}")]
    SizeMismatch {
        /// Length of the first series
        left: usize,
        /// Length of the second series
        right: usize,
    },

    /// A normalized series had exactly zero variance at the regression step
    #[error("variance is zero, cannot compute regression parameters")]
    ZeroVariance,

    /// A price was zero, negative or NaN while log prices were requested
    #[error("price at index {index} is not positive, cannot take its logarithm")]
    NonPositivePrice {
        /// Position of the first offending price
        index: usize,
    },

    /// A rolling window was requested with fewer than two prices
    #[error("period must be at least 2, got {period}")]
    InvalidPeriod {
        /// The rejected period
        period: usize,
    },

    /// A count could not be represented in the float type
    #[error("count {value} is not representable as a float")]
    Cast {
        /// The count that failed to convert
        value: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, FeatureError>;

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn messages_name_the_failure() {
        assert_eq!(
            FeatureError::DegenerateSeries.to_string(),
            "all values are identical, cannot normalize a constant series"
        );
        assert_eq!(
            FeatureError::SizeMismatch { left: 3, right: 4 }.to_string(),
            "series must have the same length: 3 != 4"
        );
        assert_eq!(
            FeatureError::NonPositivePrice { index: 2 }.to_string(),
            "price at index 2 is not positive, cannot take its logarithm"
        );
    }

    #[test]
    fn implements_core_error() {
        fn is_error<E: core::error::Error>(_: &E) {}
        is_error(&FeatureError::ZeroVariance);
    }
}
