//! Rectangle rules for numerical integration.
//!
//! The left and right rectangle rules use one endpoint value per interval
//! and have O(h) accuracy; the midpoint variant averages the two endpoint
//! values and matches the trapezoidal rule's O(h²).

use crate::error::QuadratureResult;
use crate::table::SampleTable;

impl SampleTable {
    /// Integrate using the left rectangle rule.
    ///
    /// Each interval contributes its left endpoint value times its width:
    /// Σ f(xᵢ)·(xᵢ₊₁ − xᵢ) for i = 0..n−2. Works on any grid.
    ///
    /// # Errors
    ///
    /// Returns an error if the table holds fewer than 2 samples.
    ///
    /// # Example
    ///
    /// ```
    /// use quadtab::SampleTable;
    ///
    /// // f(x) = x^2 on [0, 4]
    /// let table = SampleTable::from_pairs(
    ///     &[0.0, 1.0, 2.0, 3.0, 4.0],
    ///     &[0.0, 1.0, 4.0, 9.0, 16.0],
    /// ).unwrap();
    ///
    /// let result = table.left_rectangle().unwrap();
    /// assert!((result - 14.0).abs() < 1e-12);
    /// ```
    pub fn left_rectangle(&self) -> QuadratureResult<f64> {
        self.require_samples("left_rectangle", 2)?;

        let x = self.arguments();
        let f = self.values();

        let mut integral = 0.0;
        for i in 0..self.len() - 1 {
            integral += f[i] * (x[i + 1] - x[i]);
        }
        Ok(integral)
    }

    /// Integrate using the right rectangle rule.
    ///
    /// Each interval contributes its right endpoint value times its width:
    /// Σ f(xᵢ)·(xᵢ − xᵢ₋₁) for i = 1..n−1. Works on any grid.
    ///
    /// # Errors
    ///
    /// Returns an error if the table holds fewer than 2 samples.
    pub fn right_rectangle(&self) -> QuadratureResult<f64> {
        self.require_samples("right_rectangle", 2)?;

        let x = self.arguments();
        let f = self.values();

        let mut integral = 0.0;
        for i in 1..self.len() {
            integral += f[i] * (x[i] - x[i - 1]);
        }
        Ok(integral)
    }

    /// Integrate using the midpoint rectangle rule.
    ///
    /// Each interval contributes the average of its two endpoint values
    /// times its width: Σ ½(f(xᵢ)+f(xᵢ₊₁))·(xᵢ₊₁ − xᵢ). With only sampled
    /// data the midpoint value is unavailable, so the endpoint average
    /// stands in for it; on these tables the result coincides with
    /// [`SampleTable::trapezoid`]. Works on any grid.
    ///
    /// # Errors
    ///
    /// Returns an error if the table holds fewer than 2 samples.
    ///
    /// # Example
    ///
    /// ```
    /// use quadtab::SampleTable;
    ///
    /// // f(x) = 2x is linear, so the rule is exact: integral over [0, 2] is 4
    /// let table = SampleTable::from_pairs(&[0.0, 1.0, 2.0], &[0.0, 2.0, 4.0]).unwrap();
    /// let result = table.midpoint_rectangle().unwrap();
    /// assert!((result - 4.0).abs() < 1e-12);
    /// ```
    pub fn midpoint_rectangle(&self) -> QuadratureResult<f64> {
        self.require_samples("midpoint_rectangle", 2)?;

        let x = self.arguments();
        let f = self.values();

        let mut integral = 0.0;
        for i in 0..self.len() - 1 {
            let mid_value = (f[i] + f[i + 1]) / 2.0;
            integral += mid_value * (x[i + 1] - x[i]);
        }
        Ok(integral)
    }
}
