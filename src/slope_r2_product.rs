use alloc::vec::Vec;

use log::{debug, trace};
use num_traits::Float;

use crate::{
    FeatureError, Result,
    series::{Centered, index_series, normalize},
};

/// Slope and correlation of the regression of normalized prices on normalized time.
///
/// Both axes are min-max normalized before regressing, so the slope is comparable
/// across instruments and window lengths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegressionFit<T> {
    /// Ordinary least squares slope, `cov(x, y) / var(x)`
    pub slope: T,
    /// Pearson correlation between normalized time and normalized prices
    pub correlation: T,
}

impl<T: Float> RegressionFit<T> {
    /// Coefficient of determination, the squared correlation
    pub fn r2(&self) -> T {
        self.correlation * self.correlation
    }

    /// The feature value, `slope * r2`
    pub fn product(&self) -> T {
        self.slope * self.r2()
    }
}

/// Trend feature combining the direction and the quality of a linear fit.
///
/// `SlopeR2Product` owns a price series and reduces it to one scalar: the slope of the
/// least squares line through the normalized prices, weighted by the R² of that line.
/// Strong clean uptrends score close to `+1`, clean downtrends close to `-1`, and
/// noisy or flat windows close to `0`.
///
/// The stored prices are never mutated, so repeated computations on one instance
/// return identical results and a shared reference can be used from several threads.
#[derive(Debug, Clone)]
pub struct SlopeR2Product<T> {
    /// Price series, oldest first
    prices: Vec<T>,
    /// Regress on the natural logarithm of the prices
    log_prices: bool,
}

impl<T: Float> SlopeR2Product<T> {
    /// Creates a new calculator owning `prices`
    ///
    /// No validation happens here; an empty or constant series is reported by
    /// [`compute_slope_r2_product`](Self::compute_slope_r2_product).
    ///
    /// # Arguments
    ///
    /// * `prices` - The price series, oldest first
    ///
    /// # Returns
    ///
    /// * `Self` - The calculator
    pub fn new(prices: Vec<T>) -> Self {
        Self {
            prices,
            log_prices: false,
        }
    }

    /// Returns the stored prices
    pub fn prices(&self) -> &[T] {
        &self.prices
    }

    /// Returns whether prices are log-transformed before the fit
    pub const fn log_prices(&self) -> bool {
        self.log_prices
    }

    /// Sets whether prices are log-transformed before the fit
    ///
    /// With log prices the fit judges how straight the trend is on a logarithmic
    /// scale, so steady percentage growth scores like a straight line. The log prices
    /// are normalized afterwards, so the slope stays unitless. Every price must then
    /// be strictly positive.
    ///
    /// # Arguments
    ///
    /// * `log_prices` - Regress on `ln(price)` instead of `price`
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The calculator
    pub const fn set_log_prices(&mut self, log_prices: bool) -> &mut Self {
        self.log_prices = log_prices;
        self
    }

    /// Fits the normalized regression and returns its slope and correlation
    ///
    /// # Returns
    ///
    /// * `Result<RegressionFit<T>>` - The fit, or the first error met along the way
    ///
    /// # Examples
    ///
    /// ```
    /// use slope_r2::SlopeR2Product;
    /// use assert_approx_eq::assert_approx_eq;
    ///
    /// let fit = SlopeR2Product::new(vec![1.0f64, 3.0, 2.0]).fit().unwrap();
    /// assert_approx_eq!(fit.slope, 0.5, 1e-9);
    /// assert_approx_eq!(fit.r2(), 0.25, 1e-9);
    /// ```
    pub fn fit(&self) -> Result<RegressionFit<T>> {
        fit_prices(&self.prices, self.log_prices)
    }

    /// Returns the normalized slope multiplied by the R² of the fit
    ///
    /// Prices and their one-based time index are min-max normalized, then regressed
    /// with population statistics. The sign follows the trend direction and the
    /// magnitude shrinks as the fit gets noisier.
    ///
    /// # Returns
    ///
    /// * `Result<T>` - The feature value, or:
    ///   - `EmptySeries` for no prices
    ///   - `DegenerateSeries` for a constant series or a single price
    ///   - `ZeroVariance` if a normalized axis still has zero variance
    ///   - `NonPositivePrice` for a price `<= 0` with log prices enabled
    ///
    /// # Examples
    ///
    /// ```
    /// use slope_r2::{FeatureError, SlopeR2Product};
    /// use assert_approx_eq::assert_approx_eq;
    ///
    /// let up = SlopeR2Product::new(vec![100.0f64, 200.0, 300.0]);
    /// assert_approx_eq!(up.compute_slope_r2_product().unwrap(), 1.0, 1e-9);
    ///
    /// let down = SlopeR2Product::new(vec![2.0f64, 1.0]);
    /// assert_approx_eq!(down.compute_slope_r2_product().unwrap(), -1.0, 1e-9);
    ///
    /// let flat = SlopeR2Product::new(vec![5.0f64, 5.0, 5.0]);
    /// assert_eq!(flat.compute_slope_r2_product(), Err(FeatureError::DegenerateSeries));
    /// ```
    pub fn compute_slope_r2_product(&self) -> Result<T> {
        self.fit().map(|fit| fit.product())
    }
}

impl<T: Float> From<Vec<T>> for SlopeR2Product<T> {
    fn from(prices: Vec<T>) -> Self {
        Self::new(prices)
    }
}

/// Runs the full normalize, regress and combine pipeline over `prices`
pub(crate) fn fit_prices<T: Float>(prices: &[T], log_prices: bool) -> Result<RegressionFit<T>> {
    let result = if log_prices {
        ln_prices(prices).and_then(|logs| regress(&logs))
    } else {
        regress(prices)
    };

    match &result {
        Ok(fit) => trace!(
            "slope/r2 fit over {} prices: slope={:?} correlation={:?} product={:?}",
            prices.len(),
            fit.slope.to_f64(),
            fit.correlation.to_f64(),
            fit.product().to_f64()
        ),
        Err(err) => debug!("slope/r2 rejected {} prices: {}", prices.len(), err),
    }
    result
}

fn ln_prices<T: Float>(prices: &[T]) -> Result<Vec<T>> {
    prices
        .iter()
        .enumerate()
        .map(|(index, &p)| {
            if p > T::zero() {
                Ok(p.ln())
            } else {
                Err(FeatureError::NonPositivePrice { index })
            }
        })
        .collect()
}

fn regress<T: Float>(prices: &[T]) -> Result<RegressionFit<T>> {
    let norm_y = normalize(prices)?;
    let norm_x = normalize(&index_series(norm_y.len())?)?;

    let x = Centered::<T>::new(&norm_x)?;
    let y = Centered::<T>::new(&norm_y)?;

    let var_x = x.variance()?;
    let var_y = y.variance()?;
    if var_x.is_zero() || var_y.is_zero() {
        return Err(FeatureError::ZeroVariance);
    }

    let cov = x.covariance(&y)?;
    Ok(RegressionFit {
        slope: cov / var_x,
        correlation: cov / (var_x.sqrt() * var_y.sqrt()),
    })
}
