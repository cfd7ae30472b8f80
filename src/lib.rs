//! quadtab - definite-integral approximation over tabulated samples.
//!
//! This crate computes definite integrals of a function known only through
//! discrete (x, f(x)) samples. The samples live in a [`SampleTable`], an
//! immutable value type, and each quadrature rule is a pure method on it.
//!
//! # Available Methods
//!
//! | Method | Formula | Accuracy |
//! |--------|---------|----------|
//! | [`SampleTable::left_rectangle`] | f(xᵢ)·Δxᵢ | O(h) |
//! | [`SampleTable::right_rectangle`] | f(xᵢ₊₁)·Δxᵢ | O(h) |
//! | [`SampleTable::midpoint_rectangle`] | ½(f(xᵢ)+f(xᵢ₊₁))·Δxᵢ | O(h²) |
//! | [`SampleTable::trapezoid`] | ½(f(xᵢ)+f(xᵢ₊₁))·Δxᵢ | O(h²) |
//! | [`SampleTable::simpson`] | composite 1/3 rule | O(h⁴) |
//! | [`SampleTable::newton`] | composite 3/8 rule | O(h⁴) |
//!
//! # Choosing a Method
//!
//! - **Arbitrary grids**: the rectangle and trapezoid rules difference
//!   consecutive arguments and accept any spacing.
//! - **Uniform grids**: [`SampleTable::simpson`] and [`SampleTable::newton`]
//!   assume uniform spacing (a single computed step); supplying a
//!   non-uniform grid silently degrades accuracy.
//! - Simpson and Newton are exact for polynomials up to degree 3.
//!
//! # Example
//!
//! ```
//! use quadtab::SampleTable;
//!
//! // f(x) = x^2 sampled on [0, 4]
//! let table = SampleTable::from_pairs(
//!     &[0.0, 1.0, 2.0, 3.0, 4.0],
//!     &[0.0, 1.0, 4.0, 9.0, 16.0],
//! )?;
//!
//! // Exact value is 64/3
//! let result = table.simpson()?;
//! assert!((result - 64.0 / 3.0).abs() < 1e-12);
//! # Ok::<(), quadtab::QuadratureError>(())
//! ```

pub mod error;
mod quadrature;
mod table;

pub use error::{QuadratureError, QuadratureResult};
pub use table::SampleTable;
