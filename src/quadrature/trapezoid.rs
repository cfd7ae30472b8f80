//! Trapezoidal rule for numerical integration.
//!
//! The trapezoidal rule approximates the integral by summing trapezoid
//! areas. It has O(h²) accuracy for smooth functions and is exact for
//! linear data on any grid.

use crate::error::QuadratureResult;
use crate::table::SampleTable;

impl SampleTable {
    /// Integrate using the composite trapezoidal rule.
    ///
    /// Each interval contributes the average of its endpoint values times
    /// its width: Σ ½(f(xᵢ)+f(xᵢ₋₁))·(xᵢ − xᵢ₋₁) for i = 1..n−1. Works on
    /// any grid.
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
    /// // f(x) = x^2 on [0, 2]
    /// let table = SampleTable::from_pairs(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0]).unwrap();
    /// let result = table.trapezoid().unwrap();
    /// assert!((result - 3.0).abs() < 1e-12);
    /// ```
    pub fn trapezoid(&self) -> QuadratureResult<f64> {
        self.require_samples("trapezoid", 2)?;

        let x = self.arguments();
        let f = self.values();

        let mut integral = 0.0;
        for i in 1..self.len() {
            integral += 0.5 * (f[i] + f[i - 1]) * (x[i] - x[i - 1]);
        }
        Ok(integral)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::QuadratureError;
    use crate::table::SampleTable;
    use approx::assert_relative_eq;

    #[test]
    fn test_trapezoid_constant() {
        let x = vec![0.0, 1.0, 2.0, 3.0, 4.0];
        let f = vec![5.0; 5];
        let table = SampleTable::from_pairs(&x, &f).unwrap();

        assert_relative_eq!(table.trapezoid().unwrap(), 20.0);
    }

    #[test]
    fn test_trapezoid_exact_for_linear() {
        // f(x) = x on [0, 1]; integral is 0.5
        let n = 11;
        let x: Vec<f64> = (0..n).map(|i| i as f64 / (n - 1) as f64).collect();
        let table = SampleTable::from_pairs(&x, &x).unwrap();

        assert_relative_eq!(table.trapezoid().unwrap(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_trapezoid_quadratic_scenario() {
        // f(x) = x^2 sampled at 0..4; trapezoid gives 22
        let table = SampleTable::from_pairs(
            &[0.0, 1.0, 2.0, 3.0, 4.0],
            &[0.0, 1.0, 4.0, 9.0, 16.0],
        )
        .unwrap();

        assert_relative_eq!(table.trapezoid().unwrap(), 22.0);
    }

    #[test]
    fn test_trapezoid_averages_rectangles_on_two_points() {
        let table = SampleTable::from_pairs(&[0.0, 3.0], &[1.0, 5.0]).unwrap();

        let left = table.left_rectangle().unwrap();
        let right = table.right_rectangle().unwrap();
        assert_relative_eq!(table.trapezoid().unwrap(), (left + right) / 2.0);
    }

    #[test]
    fn test_trapezoid_too_few_samples() {
        let table = SampleTable::from_pairs(&[1.0], &[2.0]).unwrap();
        assert!(matches!(
            table.trapezoid(),
            Err(QuadratureError::InsufficientSamples {
                method: "trapezoid",
                n: 1,
                required: 2,
            })
        ));
    }
}
