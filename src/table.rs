//! The sample table: paired (argument, value) observations of a function.

use std::fmt;

use crate::error::{QuadratureError, QuadratureResult};

/// An immutable table of (x, f(x)) samples.
///
/// Index `i` in the argument and value sequences refers to the same sample;
/// the table never reorders internally. Sortedness and uniform spacing are
/// not assumed except where a specific rule requires them (see
/// [`SampleTable::simpson`] and [`SampleTable::newton`]).
///
/// Construction copies the caller's data into owned storage; the table has
/// no `&mut self` methods, so once built it is read-only and safe to share
/// across threads. `Clone` produces an independent deep copy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleTable {
    arguments: Vec<f64>,
    values: Vec<f64>,
}

impl SampleTable {
    /// Create a table from a declared sample count and two sequences.
    ///
    /// # Errors
    ///
    /// Returns [`QuadratureError::SizeMismatch`] if either sequence's
    /// length differs from `n`.
    ///
    /// # Example
    ///
    /// ```
    /// use quadtab::SampleTable;
    ///
    /// let table = SampleTable::new(3, &[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0]).unwrap();
    /// assert_eq!(table.len(), 3);
    ///
    /// assert!(SampleTable::new(3, &[0.0, 1.0], &[0.0, 1.0, 4.0]).is_err());
    /// ```
    pub fn new(n: usize, arguments: &[f64], values: &[f64]) -> QuadratureResult<Self> {
        if arguments.len() != n || values.len() != n {
            return Err(QuadratureError::SizeMismatch {
                expected: n,
                arguments: arguments.len(),
                values: values.len(),
            });
        }
        Ok(Self {
            arguments: arguments.to_vec(),
            values: values.to_vec(),
        })
    }

    /// Create a table from the two sequences alone, inferring the count.
    ///
    /// # Errors
    ///
    /// Returns [`QuadratureError::SizeMismatch`] if the sequences have
    /// different lengths.
    pub fn from_pairs(arguments: &[f64], values: &[f64]) -> QuadratureResult<Self> {
        Self::new(arguments.len(), arguments, values)
    }

    /// Number of samples in the table.
    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    /// Whether the table holds no samples.
    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    /// The independent-variable grid.
    pub fn arguments(&self) -> &[f64] {
        &self.arguments
    }

    /// The function values, paired index-for-index with [`Self::arguments`].
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Indexed read of the function-value sequence.
    ///
    /// # Errors
    ///
    /// Returns [`QuadratureError::IndexOutOfRange`] when `index >= len()`.
    ///
    /// # Example
    ///
    /// ```
    /// use quadtab::SampleTable;
    ///
    /// let table = SampleTable::from_pairs(&[0.0, 1.0], &[5.0, 7.0]).unwrap();
    /// assert_eq!(table.value(1).unwrap(), 7.0);
    /// assert!(table.value(2).is_err());
    /// ```
    pub fn value(&self, index: usize) -> QuadratureResult<f64> {
        if index >= self.len() {
            return Err(QuadratureError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        Ok(self.values[index])
    }

    /// Reject tables too small for an interval-based rule.
    pub(crate) fn require_samples(
        &self,
        method: &'static str,
        required: usize,
    ) -> QuadratureResult<()> {
        if self.len() < required {
            return Err(QuadratureError::InsufficientSamples {
                method,
                n: self.len(),
                required,
            });
        }
        Ok(())
    }
}

/// Two-line rendering: the argument sequence, then the value sequence,
/// each prefixed with its label and space-separated.
///
/// Splitting either printed line on whitespace and dropping the leading
/// label recovers the original sequence.
impl fmt::Display for SampleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("argument")?;
        for x in &self.arguments {
            write!(f, " {x}")?;
        }
        f.write_str("\nfunction")?;
        for v in &self.values {
            write!(f, " {v}")?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_copies_input() {
        let args = vec![0.0, 1.0, 2.0];
        let vals = vec![0.0, 1.0, 4.0];
        let table = SampleTable::new(3, &args, &vals).unwrap();

        assert_eq!(table.arguments(), &args[..]);
        assert_eq!(table.values(), &vals[..]);
    }

    #[test]
    fn test_size_mismatch() {
        // Either sequence disagreeing with n fails, regardless of n.
        assert!(matches!(
            SampleTable::new(3, &[0.0, 1.0], &[0.0, 1.0, 4.0]),
            Err(QuadratureError::SizeMismatch { expected: 3, .. })
        ));
        assert!(matches!(
            SampleTable::new(2, &[0.0, 1.0], &[0.0]),
            Err(QuadratureError::SizeMismatch { .. })
        ));
        assert!(matches!(
            SampleTable::new(0, &[0.0], &[]),
            Err(QuadratureError::SizeMismatch { .. })
        ));
        assert!(matches!(
            SampleTable::from_pairs(&[0.0, 1.0, 2.0], &[0.0]),
            Err(QuadratureError::SizeMismatch { .. })
        ));
    }

    #[test]
    fn test_default_is_empty() {
        let table = SampleTable::default();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert!(matches!(
            table.value(0),
            Err(QuadratureError::IndexOutOfRange { index: 0, len: 0 })
        ));
    }

    #[test]
    fn test_indexed_value() {
        let table = SampleTable::from_pairs(&[0.0, 1.0, 2.0], &[3.0, 5.0, 7.0]).unwrap();

        assert_eq!(table.value(0).unwrap(), 3.0);
        assert_eq!(table.value(2).unwrap(), 7.0);
        assert!(matches!(
            table.value(3),
            Err(QuadratureError::IndexOutOfRange { index: 3, len: 3 })
        ));
    }

    #[test]
    fn test_clone_is_deep() {
        let table = SampleTable::from_pairs(&[0.0, 1.0], &[2.0, 3.0]).unwrap();
        let copy = table.clone();

        assert_eq!(table, copy);
        assert_ne!(table.arguments().as_ptr(), copy.arguments().as_ptr());
        assert_ne!(table.values().as_ptr(), copy.values().as_ptr());
    }

    #[test]
    fn test_display_round_trip() {
        let args = vec![0.0, 0.5, 1.0, 1.5];
        let vals = vec![0.0, 0.25, 1.0, 2.25];
        let table = SampleTable::from_pairs(&args, &vals).unwrap();

        let rendered = table.to_string();
        let mut lines = rendered.lines();

        let parse_line = |line: &str| -> Vec<f64> {
            line.split_whitespace()
                .skip(1) // label
                .map(|tok| tok.parse().unwrap())
                .collect()
        };

        let argument_line = lines.next().unwrap();
        let function_line = lines.next().unwrap();
        assert!(argument_line.starts_with("argument "));
        assert!(function_line.starts_with("function "));
        assert_eq!(parse_line(argument_line), args);
        assert_eq!(parse_line(function_line), vals);
        assert!(lines.next().is_none());
    }
}
