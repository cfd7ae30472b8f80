//! Newton's 3/8 rule for numerical integration.
//!
//! The 3/8 rule fits cubics through groups of four consecutive points.
//! Like Simpson's rule it is exact for polynomials up to degree 3, but it
//! needs the interval count to be a multiple of 3.

use crate::error::{QuadratureError, QuadratureResult};
use crate::table::SampleTable;

impl SampleTable {
    /// Integrate using the composite Newton 3/8 rule.
    ///
    /// Processes groups of four consecutive points starting at indices
    /// 0, 3, 6, …; each group contributes
    /// (f[i] + 3f[i+1] + 3f[i+2] + f[i+3]) · 3h/8 with the per-group step
    /// h = (x[i+3] − x[i]) / 3. The grid is assumed uniform within each
    /// group; the caller is responsible for that.
    ///
    /// # Errors
    ///
    /// Returns [`QuadratureError::InvalidPointCount`] unless `n >= 4` and
    /// `(n − 1) % 3 == 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use quadtab::SampleTable;
    ///
    /// // f(x) = x^3 on [0, 3]; exact integral is 81/4
    /// let table = SampleTable::from_pairs(
    ///     &[0.0, 1.0, 2.0, 3.0],
    ///     &[0.0, 1.0, 8.0, 27.0],
    /// ).unwrap();
    /// let result = table.newton().unwrap();
    /// assert!((result - 20.25).abs() < 1e-12);
    /// ```
    pub fn newton(&self) -> QuadratureResult<f64> {
        let n = self.len();
        if n < 4 || (n - 1) % 3 != 0 {
            return Err(QuadratureError::InvalidPointCount {
                method: "newton",
                n,
                requirement: "number of points must satisfy (n - 1) % 3 == 0, \
                              with at least 4 points, for Newton's 3/8 rule",
            });
        }

        let x = self.arguments();
        let f = self.values();

        let mut sum = 0.0;
        for i in (0..n - 3).step_by(3) {
            let h = (x[i + 3] - x[i]) / 3.0;
            sum += (f[i] + 3.0 * f[i + 1] + 3.0 * f[i + 2] + f[i + 3]) * 3.0 * h / 8.0;
        }
        Ok(sum)
    }
}
