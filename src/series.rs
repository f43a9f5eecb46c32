//! Numeric primitives behind the slope×R² feature.
//!
//! All statistics are population statistics (divisor `n`) accumulated with a plain
//! left-to-right sum, so results match a naive double-precision implementation exactly.

use alloc::vec::Vec;

use num_traits::Float;

use crate::{
    FeatureError, Result,
    helper::{cast, min_max},
};

/// Min-max normalizes a series into `[0, 1]`
///
/// The global minimum maps to exactly `0` and the global maximum to exactly `1`;
/// order and length are preserved.
///
/// # Arguments
///
/// * `series` - The values to rescale
///
/// # Returns
///
/// * `Result<Vec<T>>` - The rescaled values, `EmptySeries` for an empty input or
///   `DegenerateSeries` when every value is identical
///
/// # Examples
///
/// ```
/// use slope_r2::series::normalize;
///
/// assert_eq!(normalize(&[10.0f64, 30.0, 20.0]).unwrap(), vec![0.0, 1.0, 0.5]);
/// assert!(normalize(&[5.0f64, 5.0]).is_err());
/// ```
pub fn normalize<T: Float>(series: &[T]) -> Result<Vec<T>> {
    let (min, max) = min_max(series).ok_or(FeatureError::EmptySeries)?;
    if min == max {
        return Err(FeatureError::DegenerateSeries);
    }

    let range = max - min;
    if range.is_finite() {
        return Ok(series.iter().map(|&v| (v - min) / range).collect());
    }

    // max - min overflowed, halve every operand so the range fits again
    let two = T::one() + T::one();
    let (min, range) = (min / two, max / two - min / two);
    Ok(series.iter().map(|&v| (v / two - min) / range).collect())
}

/// Builds the one-based time index `1, 2, ..., len`
///
/// A zero length yields an empty index; rejecting it is left to the consumers.
///
/// # Examples
///
/// ```
/// use slope_r2::series::index_series;
///
/// assert_eq!(index_series::<f64>(3).unwrap(), vec![1.0, 2.0, 3.0]);
/// assert!(index_series::<f64>(0).unwrap().is_empty());
/// ```
pub fn index_series<T: Float>(len: usize) -> Result<Vec<T>> {
    (1..=len).map(cast).collect()
}

/// Arithmetic mean of a non-empty series
///
/// # Examples
///
/// ```
/// use slope_r2::series::mean;
///
/// assert_eq!(mean(&[1.0f64, 2.0, 6.0]).unwrap(), 3.0);
/// ```
pub fn mean<T: Float>(series: &[T]) -> Result<T> {
    if series.is_empty() {
        return Err(FeatureError::EmptySeries);
    }
    let sum = series.iter().fold(T::zero(), |acc, &v| acc + v);
    Ok(sum / cast(series.len())?)
}

/// Population variance of `series` around a caller-supplied `mean`
///
/// The mean is trusted as given; pass the mean of `series` itself or use [`Centered`],
/// which pairs them for you. An empty series yields NaN.
pub fn variance<T: Float>(series: &[T], mean: T) -> Result<T> {
    let sum_sq = series
        .iter()
        .fold(T::zero(), |acc, &v| acc + (v - mean) * (v - mean));
    Ok(sum_sq / cast(series.len())?)
}

/// Population covariance of two equally long series around caller-supplied means
///
/// # Returns
///
/// * `Result<T>` - The covariance, or `SizeMismatch` when the lengths differ
pub fn covariance<T: Float>(x: &[T], x_mean: T, y: &[T], y_mean: T) -> Result<T> {
    if x.len() != y.len() {
        return Err(FeatureError::SizeMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    let sum_prod = x
        .iter()
        .zip(y)
        .fold(T::zero(), |acc, (&a, &b)| acc + (a - x_mean) * (b - y_mean));
    Ok(sum_prod / cast(x.len())?)
}

/// A series paired with its own mean
///
/// The mean is computed once at construction, so variance and covariance can never
/// be evaluated against a mean that belongs to another series.
///
/// # Examples
///
/// ```
/// use slope_r2::series::Centered;
///
/// let x = Centered::new(&[1.0f64, 2.0, 3.0]).unwrap();
/// let y = Centered::new(&[2.0f64, 4.0, 6.0]).unwrap();
///
/// assert_eq!(x.mean(), 2.0);
/// assert!((x.variance().unwrap() - 2.0 / 3.0).abs() < 1e-12);
/// assert!((x.covariance(&y).unwrap() - 4.0 / 3.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Centered<'a, T> {
    values: &'a [T],
    mean: T,
}

impl<'a, T: Float> Centered<'a, T> {
    /// Pairs `values` with their mean; fails with `EmptySeries` on an empty slice
    pub fn new(values: &'a [T]) -> Result<Self> {
        Ok(Self {
            values,
            mean: mean(values)?,
        })
    }

    /// The underlying values
    pub fn values(&self) -> &'a [T] {
        self.values
    }

    /// The mean of the values
    pub fn mean(&self) -> T {
        self.mean
    }

    /// Population variance
    pub fn variance(&self) -> Result<T> {
        variance(self.values, self.mean)
    }

    /// Population covariance with another centered series of the same length
    pub fn covariance(&self, other: &Centered<'_, T>) -> Result<T> {
        covariance(self.values, self.mean, other.values, other.mean)
    }
}
