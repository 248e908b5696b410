//! Defines the error type returned by this crate.
use thiserror::Error;


/// Errors reported by the matrix adapters and classifiers in this crate.
/// Every error is detected eagerly at the call that violates the contract;
/// no operation retries internally.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NaiveBayesError {
    /// A row passed to
    /// [`DenseMatrix::from_rows`](crate::DenseMatrix::from_rows)
    /// has a different length than the first row.
    #[error("inconsistent number of columns: row {row} expected {expected}, got {got}")]
    InconsistentRows {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        got: usize,
    },

    /// The row-major buffer length does not match the declared shape.
    #[error("number of values ({got}) does not match rows x columns ({expected})")]
    ValueLenMismatch {
        /// `n_rows * n_cols`.
        expected: usize,
        /// Length of the given buffer.
        got: usize,
    },

    /// A sparse entry lies outside the declared matrix shape.
    #[error("entry ({row}, {col}) is out of range for a {n_rows}x{n_cols} matrix")]
    EntryOutOfRange {
        /// Row index of the offending entry.
        row: usize,
        /// Column index of the offending entry.
        col: usize,
        /// Declared number of rows.
        n_rows: usize,
        /// Declared number of columns.
        n_cols: usize,
    },

    /// The target vector length differs from the number of rows
    /// in the feature matrix passed to `fit`.
    #[error("number of targets ({targets}) does not match number of rows ({rows})")]
    TargetLenMismatch {
        /// Number of rows in the feature matrix.
        rows: usize,
        /// Length of the target vector.
        targets: usize,
    },

    /// The matrix passed to a `predict*` method has a different
    /// feature count than the matrix the model was fitted on.
    #[error("feature count mismatch: the model was fitted on {expected} features, got {got}")]
    FeatureCountMismatch {
        /// Feature count seen at fit time.
        expected: usize,
        /// Feature count of the given matrix.
        got: usize,
    },

    /// `fit` was called on a sample without rows or without features.
    #[error("the training sample must have at least one row and one feature")]
    EmptyTrainingSet,

    /// The smoothing parameter of a multinomial classifier is not positive.
    #[error("invalid smoothing parameter: alpha = {alpha} (alpha must be positive)")]
    InvalidSmoothing {
        /// The rejected value.
        alpha: f64,
    },

    /// A `predict*` method was called before `fit`.
    #[error("this classifier is not fitted; call `fit` before predicting")]
    NotFitted,
}
