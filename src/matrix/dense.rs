use std::ops::Index;
use std::slice::ChunksExact;

use serde::{
    Serialize,
    Deserialize,
};

use crate::NaiveBayesError;


/// Dense representation of a feature matrix.
/// Values are stored in row-major order,
/// so `self.values[i * n_cols + j]` is the entry at row `i`, column `j`.
/// The classifiers never mutate a matrix passed to them;
/// this type is also what `predict_proba` and `predict_log_proba` return.
///
/// # Example
/// ```
/// use minibayes::DenseMatrix;
///
/// let x = DenseMatrix::from_rows(&[
///     [1.0, 0.0],
///     [0.5, 2.0],
/// ]).unwrap();
///
/// assert_eq!(x.shape(), (2, 2));
/// assert_eq!(x[(1, 1)], 2.0);
/// assert_eq!(x.row(0), &[1.0, 0.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenseMatrix {
    values: Vec<f64>,
    n_rows: usize,
    n_cols: usize,
}


impl DenseMatrix {
    /// Construct a dense matrix from a slice of equal-length rows.
    /// Returns an error when some row has a different length
    /// than the first one.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, NaiveBayesError>
        where R: AsRef<[f64]>,
    {
        let n_rows = rows.len();
        let n_cols = rows.first()
            .map(|row| row.as_ref().len())
            .unwrap_or(0);

        let mut values = Vec::with_capacity(n_rows * n_cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != n_cols {
                return Err(NaiveBayesError::InconsistentRows {
                    row: i,
                    expected: n_cols,
                    got: row.len(),
                });
            }
            values.extend_from_slice(row);
        }

        Ok(Self { values, n_rows, n_cols })
    }


    /// Construct a dense matrix from a row-major value buffer.
    /// Returns an error when `values.len() != n_rows * n_cols`.
    pub fn from_row_major(values: Vec<f64>, n_rows: usize, n_cols: usize)
        -> Result<Self, NaiveBayesError>
    {
        let expected = n_rows * n_cols;
        if values.len() != expected {
            return Err(NaiveBayesError::ValueLenMismatch {
                expected,
                got: values.len(),
            });
        }

        Ok(Self { values, n_rows, n_cols })
    }


    /// Construct a matrix whose shape is known to match the buffer.
    pub(crate) fn new(values: Vec<f64>, n_rows: usize, n_cols: usize) -> Self {
        debug_assert_eq!(values.len(), n_rows * n_cols);
        Self { values, n_rows, n_cols }
    }


    /// Returns the pair of the number of rows and
    /// the number of columns.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }


    /// Returns the `i`-th row as a slice.
    pub fn row(&self, i: usize) -> &[f64] {
        let start = i * self.n_cols;
        &self.values[start..start + self.n_cols]
    }


    /// Returns an iterator over the rows.
    pub fn rows(&self) -> ChunksExact<'_, f64> {
        self.values.chunks_exact(self.n_cols.max(1))
    }


    /// Returns the entry at row `i`, column `j`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.n_cols + j]
    }


    /// Returns the underlying row-major buffer.
    pub fn as_slice(&self) -> &[f64] {
        &self.values[..]
    }
}


impl Index<(usize, usize)> for DenseMatrix {
    type Output = f64;
    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.values[i * self.n_cols + j]
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_builds_row_major_storage() {
        let x = DenseMatrix::from_rows(&[
            [1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0],
        ]).unwrap();

        assert_eq!(x.shape(), (2, 3));
        assert_eq!(x.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(x.row(1), &[4.0, 5.0, 6.0]);
        assert_eq!(x.get(0, 2), 3.0);
        assert_eq!(x[(1, 0)], 4.0);
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let rows = [vec![1.0, 2.0], vec![3.0]];
        assert_eq!(
            DenseMatrix::from_rows(&rows),
            Err(NaiveBayesError::InconsistentRows { row: 1, expected: 2, got: 1 }),
        );
    }

    #[test]
    fn from_row_major_checks_the_buffer_length() {
        assert!(DenseMatrix::from_row_major(vec![0.0; 6], 2, 3).is_ok());
        assert_eq!(
            DenseMatrix::from_row_major(vec![0.0; 5], 2, 3),
            Err(NaiveBayesError::ValueLenMismatch { expected: 6, got: 5 }),
        );
    }

    #[test]
    fn rows_iterates_in_order() {
        let x = DenseMatrix::from_rows(&[
            [1.0, 2.0],
            [3.0, 4.0],
            [5.0, 6.0],
        ]).unwrap();

        let rows = x.rows().collect::<Vec<_>>();
        assert_eq!(rows, vec![&[1.0, 2.0][..], &[3.0, 4.0], &[5.0, 6.0]]);
    }
}
