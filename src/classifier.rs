//! Defines the common interface of the classifiers in this crate.

use crate::{DenseMatrix, NaiveBayesError};


/// A trait that defines the behavior of a probabilistic classifier.
/// Whether a classifier consumes dense or sparse matrices is fixed by
/// the implementing type chosen at construction time,
/// through the [`Classifier::Matrix`] associated type;
/// no runtime inspection of the input takes place.
///
/// Call [`fit`](Classifier::fit) before any `predict*` method;
/// predicting on an unfitted instance fails with
/// [`NaiveBayesError::NotFitted`].
/// Re-fitting fully replaces the previously learned parameters.
pub trait Classifier {
    /// The feature-matrix representation this classifier consumes.
    type Matrix;

    /// The label type of the target vector.
    type Label;


    /// Estimates the model parameters from the training pair `(x, y)`.
    /// Returns `&mut Self` so that a `predict*` call can be chained
    /// onto a successful fit.
    fn fit(&mut self, x: &Self::Matrix, y: &[Self::Label])
        -> Result<&mut Self, NaiveBayesError>;


    /// Computes the normalized log-posterior of each class
    /// for each row of `x`.
    /// The returned matrix has one row per sample and
    /// one column per class (in stored class order);
    /// the log-sum-exp of every row is `0`.
    fn predict_log_proba(&self, x: &Self::Matrix)
        -> Result<DenseMatrix, NaiveBayesError>;


    /// Computes the posterior probability of each class
    /// for each row of `x`.
    /// Agrees elementwise with the exponential of
    /// [`predict_log_proba`](Classifier::predict_log_proba);
    /// every row sums to `1` up to floating rounding.
    fn predict_proba(&self, x: &Self::Matrix)
        -> Result<DenseMatrix, NaiveBayesError>;


    /// Predicts the most probable class for each row of `x`.
    /// Ties are broken in favor of the class that appears first
    /// in the stored class list.
    fn predict(&self, x: &Self::Matrix)
        -> Result<Vec<Self::Label>, NaiveBayesError>;


    /// Returns the fraction of rows of `x`
    /// whose prediction equals the corresponding entry of `y`.
    fn score(&self, x: &Self::Matrix, y: &[Self::Label])
        -> Result<f64, NaiveBayesError>
        where Self::Label: PartialEq,
    {
        if y.is_empty() {
            return Err(NaiveBayesError::EmptyTrainingSet);
        }

        let predictions = self.predict(x)?;
        if predictions.len() != y.len() {
            return Err(NaiveBayesError::TargetLenMismatch {
                rows: predictions.len(),
                targets: y.len(),
            });
        }

        let n_correct = predictions.iter()
            .zip(y)
            .filter(|(p, t)| p == t)
            .count();
        Ok(n_correct as f64 / y.len() as f64)
    }
}
