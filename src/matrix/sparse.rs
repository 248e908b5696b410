use serde::{
    Serialize,
    Deserialize,
};

use crate::NaiveBayesError;
use super::dense::DenseMatrix;


/// Row-compressed sparse representation of a feature matrix.
/// Only nonzero entries are stored:
/// row `i` owns the column indices
/// `self.col_indices[self.row_offsets[i]..self.row_offsets[i + 1]]`
/// and the matching slice of `self.values`.
/// Column indices are sorted within each row.
/// Note that `self.nnz() <= n_rows * n_cols`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsrMatrix {
    row_offsets: Vec<usize>,
    col_indices: Vec<usize>,
    values: Vec<f64>,
    n_cols: usize,
}


impl CsrMatrix {
    /// Construct a sparse matrix from `(row, col, value)` triplets.
    /// Entries may be given in any order;
    /// duplicates of the same `(row, col)` pair are summed and
    /// exact zeros are dropped.
    /// Returns an error when some entry lies outside the declared shape.
    ///
    /// # Example
    /// ```
    /// use minibayes::CsrMatrix;
    ///
    /// let x = CsrMatrix::from_triplets(2, 4, &[
    ///     (0, 3, 1.0),
    ///     (0, 1, 2.0),
    ///     (1, 0, 5.0),
    /// ]).unwrap();
    ///
    /// assert_eq!(x.shape(), (2, 4));
    /// assert_eq!(x.nnz(), 3);
    /// assert_eq!(x.row(0), (&[1, 3][..], &[2.0, 1.0][..]));
    /// ```
    pub fn from_triplets(
        n_rows: usize,
        n_cols: usize,
        triplets: &[(usize, usize, f64)],
    ) -> Result<Self, NaiveBayesError>
    {
        for &(row, col, _) in triplets {
            if row >= n_rows || col >= n_cols {
                return Err(NaiveBayesError::EntryOutOfRange {
                    row, col, n_rows, n_cols,
                });
            }
        }

        let mut buckets = vec![Vec::new(); n_rows];
        for &(row, col, value) in triplets {
            buckets[row].push((col, value));
        }

        let mut row_offsets = Vec::with_capacity(n_rows + 1);
        row_offsets.push(0);
        let mut col_indices = Vec::with_capacity(triplets.len());
        let mut values = Vec::with_capacity(triplets.len());

        for mut entries in buckets {
            entries.sort_by_key(|&(col, _)| col);

            let row_start = col_indices.len();
            for (col, value) in entries {
                if value == 0f64 { continue; }

                if col_indices.len() > row_start
                    && *col_indices.last().unwrap() == col
                {
                    *values.last_mut().unwrap() += value;
                } else {
                    col_indices.push(col);
                    values.push(value);
                }
            }
            row_offsets.push(col_indices.len());
        }

        Ok(Self { row_offsets, col_indices, values, n_cols })
    }


    /// Convert a dense matrix into the row-compressed form,
    /// dropping exact zeros.
    pub fn from_dense(dense: &DenseMatrix) -> Self {
        let (n_rows, n_cols) = dense.shape();

        let mut row_offsets = Vec::with_capacity(n_rows + 1);
        row_offsets.push(0);
        let mut col_indices = Vec::new();
        let mut values = Vec::new();

        for i in 0..n_rows {
            for (j, &value) in dense.row(i).iter().enumerate() {
                if value != 0f64 {
                    col_indices.push(j);
                    values.push(value);
                }
            }
            row_offsets.push(col_indices.len());
        }

        Self { row_offsets, col_indices, values, n_cols }
    }


    /// Returns the pair of the number of rows and
    /// the number of columns.
    pub fn shape(&self) -> (usize, usize) {
        (self.row_offsets.len() - 1, self.n_cols)
    }


    /// Returns the number of stored nonzero entries.
    pub fn nnz(&self) -> usize {
        self.values.len()
    }


    /// Returns the nonzero column indices and values of row `i`.
    pub fn row(&self, i: usize) -> (&[usize], &[f64]) {
        let lo = self.row_offsets[i];
        let hi = self.row_offsets[i + 1];
        (&self.col_indices[lo..hi], &self.values[lo..hi])
    }


    /// Returns an iterator over the nonzero `(column, value)` pairs
    /// of row `i`.
    pub fn iter_row(&self, i: usize)
        -> impl Iterator<Item = (usize, f64)> + '_
    {
        let (cols, values) = self.row(i);
        cols.iter()
            .copied()
            .zip(values.iter().copied())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_triplets_sorts_within_rows() {
        let x = CsrMatrix::from_triplets(2, 3, &[
            (1, 2, 3.0),
            (0, 2, 1.0),
            (0, 0, 2.0),
        ]).unwrap();

        assert_eq!(x.row(0), (&[0, 2][..], &[2.0, 1.0][..]));
        assert_eq!(x.row(1), (&[2][..], &[3.0][..]));
        assert_eq!(x.nnz(), 3);
    }

    #[test]
    fn from_triplets_sums_duplicates_and_drops_zeros() {
        let x = CsrMatrix::from_triplets(1, 3, &[
            (0, 1, 2.0),
            (0, 1, 3.0),
            (0, 2, 0.0),
        ]).unwrap();

        assert_eq!(x.row(0), (&[1][..], &[5.0][..]));
        assert_eq!(x.nnz(), 1);
    }

    #[test]
    fn from_triplets_rejects_out_of_range_entries() {
        assert_eq!(
            CsrMatrix::from_triplets(2, 3, &[(2, 0, 1.0)]),
            Err(NaiveBayesError::EntryOutOfRange {
                row: 2, col: 0, n_rows: 2, n_cols: 3,
            }),
        );
        assert!(CsrMatrix::from_triplets(2, 3, &[(0, 3, 1.0)]).is_err());
    }

    #[test]
    fn from_dense_keeps_only_nonzeros() {
        let dense = DenseMatrix::from_rows(&[
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0],
            [2.0, 0.0, 3.0],
        ]).unwrap();
        let sparse = CsrMatrix::from_dense(&dense);

        assert_eq!(sparse.shape(), (3, 3));
        assert_eq!(sparse.nnz(), 3);
        assert_eq!(sparse.row(0), (&[1][..], &[1.0][..]));
        assert_eq!(sparse.row(1), (&[][..], &[][..]));
        assert_eq!(
            sparse.iter_row(2).collect::<Vec<_>>(),
            vec![(0, 2.0), (2, 3.0)],
        );
    }
}
