//! Simpson's 1/3 rule for numerical integration.
//!
//! Simpson's rule fits parabolas through consecutive point triples,
//! achieving O(h⁴) accuracy and exactness for polynomials up to degree 3.

use crate::error::{QuadratureError, QuadratureResult};
use crate::table::SampleTable;

impl SampleTable {
    /// Integrate using the composite Simpson's 1/3 rule.
    ///
    /// Assumes a uniform grid and uses the single step
    /// h = (x[n−1] − x[0]) / (n − 1); the caller is responsible for
    /// supplying uniformly spaced arguments. Accumulates
    /// f[0] + f[n−1] plus 4·f[i] at odd interior indices and 2·f[i] at
    /// even interior indices, then scales by h/3.
    ///
    /// # Errors
    ///
    /// - [`QuadratureError::InvalidPointCount`] if the sample count is
    ///   even (the rule needs an even number of intervals).
    /// - [`QuadratureError::InsufficientSamples`] for a one-point or
    ///   empty table.
    ///
    /// # Example
    ///
    /// ```
    /// use quadtab::SampleTable;
    ///
    /// // f(x) = x^2 on [0, 2]; exact integral is 8/3
    /// let table = SampleTable::from_pairs(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0]).unwrap();
    /// let result = table.simpson().unwrap();
    /// assert!((result - 8.0 / 3.0).abs() < 1e-12);
    /// ```
    pub fn simpson(&self) -> QuadratureResult<f64> {
        let n = self.len();
        if n % 2 == 0 {
            return Err(QuadratureError::InvalidPointCount {
                method: "simpson",
                n,
                requirement: "number of intervals must be odd for Simpson's method",
            });
        }
        self.require_samples("simpson", 3)?;

        let x = self.arguments();
        let f = self.values();

        let h = (x[n - 1] - x[0]) / (n - 1) as f64;
        let mut sum = f[0] + f[n - 1];

        for i in (1..n - 1).step_by(2) {
            sum += 4.0 * f[i];
        }
        for i in (2..n - 1).step_by(2) {
            sum += 2.0 * f[i];
        }

        Ok(sum * h / 3.0)
    }
}
