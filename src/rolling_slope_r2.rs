use num_traits::Float;

use crate::{FeatureError, Result, Window, slope_r2_product::fit_prices};

/// Rolling slope×R² over the most recent `period` prices.
///
/// Feeds a live price stream one value at a time and evaluates the feature over a
/// fixed lookback window, oldest price first. Each window is evaluated exactly as
/// [`SlopeR2Product`](crate::SlopeR2Product) would evaluate it.
#[derive(Debug, Clone)]
pub struct RollingSlopeR2<T> {
    /// Lookback window
    buf: Window<T>,
    /// Regress on the natural logarithm of the prices
    log_prices: bool,
}

impl<T: Float + Default> RollingSlopeR2<T> {
    /// Creates a rolling feature over `period` prices
    ///
    /// # Arguments
    ///
    /// * `period` - The lookback length, at least 2
    ///
    /// # Returns
    ///
    /// * `Result<Self>` - The rolling feature, or `InvalidPeriod` if `period < 2`
    pub fn new(period: usize) -> Result<Self> {
        if period < 2 {
            return Err(FeatureError::InvalidPeriod { period });
        }
        Ok(Self {
            buf: Window::new(period),
            log_prices: false,
        })
    }

    /// Returns the lookback length
    pub fn period(&self) -> usize {
        self.buf.period()
    }

    /// Returns whether prices are log-transformed before the fit
    pub const fn log_prices(&self) -> bool {
        self.log_prices
    }

    /// Sets whether prices are log-transformed before the fit
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The rolling feature
    pub const fn set_log_prices(&mut self, log_prices: bool) -> &mut Self {
        self.log_prices = log_prices;
        self
    }

    /// Clears the window, keeping the period and log setting
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The rolling feature
    pub fn reset(&mut self) -> &mut Self {
        self.buf.reset();
        self
    }

    /// Pushes the next price, dropping the oldest one once the window is full
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The rolling feature for method chaining
    pub fn next(&mut self, price: T) -> &mut Self {
        self.buf.next(price);
        self
    }

    /// Returns the feature over the current window
    ///
    /// # Returns
    ///
    /// * `Option<Result<T>>` - `None` until `period` prices were pushed, then the
    ///   slope×R² product of the window or the error it raised
    ///
    /// # Examples
    ///
    /// ```
    /// use slope_r2::RollingSlopeR2;
    /// use assert_approx_eq::assert_approx_eq;
    ///
    /// let mut rolling = RollingSlopeR2::<f64>::new(3).unwrap();
    /// let mut results = vec![];
    /// for price in [1.0, 2.0, 3.0, 2.0, 1.0] {
    ///     if let Some(Ok(v)) = rolling.next(price).value() {
    ///         results.push(v);
    ///     }
    /// }
    ///
    /// let expected = [1.0f64, 0.0, -1.0];
    /// for (e, r) in expected.iter().zip(&results) {
    ///     assert_approx_eq!(e, r, 1e-9);
    /// }
    /// ```
    pub fn value(&self) -> Option<Result<T>> {
        self.buf
            .is_full()
            .then(|| fit_prices(&self.buf.to_vec(), self.log_prices).map(|fit| fit.product()))
    }
}
