use num_traits::Float;

use crate::{FeatureError, Result};

/// Returns the minimum and maximum of a slice in a single pass
///
/// # Arguments
///
/// * `values` - The slice to scan
///
/// # Returns
///
/// * `Option<(T, T)>` - The `(min, max)` pair, or `None` if the slice is empty
#[inline]
pub fn min_max<T: Float>(values: &[T]) -> Option<(T, T)> {
    let (&first, rest) = values.split_first()?;
    Some(
        rest.iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    )
}

/// Converts a count into the float type
///
/// # Arguments
///
/// * `value` - The count to convert
///
/// # Returns
///
/// * `Result<T>` - The converted value, or `FeatureError::Cast` if it is not representable
#[inline]
pub fn cast<T: Float>(value: usize) -> Result<T> {
    T::from(value).ok_or(FeatureError::Cast { value })
}
