use serde::{
    Serialize,
    Deserialize,
};

use rayon::prelude::*;

use std::hash::Hash;

use crate::{Classifier, CsrMatrix, DenseMatrix, NaiveBayesError};
use crate::common::{checker, utils};
use crate::common::labels::ClassRegistry;

use super::multinomial::{MultinomialModel, DEFAULT_ALPHA};


/// Multinomial Naive Bayes classifier over row-compressed sparse
/// matrices of non-negative counts.
/// The model and every public contract are identical to
/// [`MultinomialNB`](crate::MultinomialNB);
/// only the iteration differs:
/// count accumulation in `fit` and the dot products in `predict*`
/// touch the stored nonzero entries only and
/// never materialize a dense copy.
/// Count data such as term frequencies is mostly zeros,
/// which is what makes this variant viable at scale.
///
/// # Example
/// ```
/// use minibayes::prelude::*;
///
/// let x = CsrMatrix::from_triplets(4, 3, &[
///     (0, 0, 4.0), (0, 1, 1.0),
///     (1, 0, 5.0), (1, 2, 1.0),
///     (2, 1, 3.0), (2, 2, 4.0),
///     (3, 0, 1.0), (3, 1, 2.0), (3, 2, 5.0),
/// ]).unwrap();
/// let y = vec!["ham", "ham", "spam", "spam"];
///
/// let mut clf = CsrMultinomialNB::new();
/// let predictions = clf.fit(&x, &y)
///     .unwrap()
///     .predict(&x)
///     .unwrap();
///
/// assert_eq!(predictions, y);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsrMultinomialNB<L> {
    alpha: f64,
    fitted: Option<MultinomialModel<L>>,
}


impl<L> CsrMultinomialNB<L> {
    /// Construct a new, unfitted instance with
    /// the default smoothing parameter [`DEFAULT_ALPHA`].
    pub fn new() -> Self {
        Self { alpha: DEFAULT_ALPHA, fitted: None }
    }


    /// Set the smoothing parameter.
    /// Same contract as
    /// [`MultinomialNB::alpha`](crate::MultinomialNB::alpha).
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }


    /// The class labels in stored order.
    /// Returns `None` on an unfitted instance.
    pub fn classes(&self) -> Option<&[L]> {
        self.fitted.as_ref().map(|model| &model.classes[..])
    }


    /// The logarithmic class priors `ln(n_c / n_samples)`,
    /// indexed like [`classes`](CsrMultinomialNB::classes).
    pub fn log_priors(&self) -> Option<&[f64]> {
        self.fitted.as_ref().map(|model| &model.log_priors[..])
    }


    /// The smoothed per-feature log-probabilities of
    /// the given class index.
    pub fn feature_log_prob(&self, class: usize) -> Option<&[f64]> {
        self.fitted.as_ref()
            .and_then(|model| model.distributions.get(class))
            .map(|dist| &dist.log_prob[..])
    }
}


impl<L> Default for CsrMultinomialNB<L> {
    fn default() -> Self {
        Self::new()
    }
}


impl<L> Classifier for CsrMultinomialNB<L>
    where L: Clone + Eq + Hash + Send + Sync,
{
    type Matrix = CsrMatrix;
    type Label = L;


    fn fit(&mut self, x: &CsrMatrix, y: &[L])
        -> Result<&mut Self, NaiveBayesError>
    {
        checker::check_smoothing(self.alpha)?;
        checker::check_sample(x.shape(), y.len())?;
        let (_, n_features) = x.shape();

        let registry = ClassRegistry::from_target(y);
        let class_indices = registry.indices(y);
        let n_classes = registry.len();

        let mut counts = vec![vec![0f64; n_features]; n_classes];
        for (i, &k) in class_indices.iter().enumerate() {
            for (j, value) in x.iter_row(i) {
                counts[k][j] += value;
            }
        }

        self.fitted = Some(MultinomialModel::from_counts(
            registry, &class_indices, counts, self.alpha, n_features,
        ));
        Ok(self)
    }


    fn predict_log_proba(&self, x: &CsrMatrix)
        -> Result<DenseMatrix, NaiveBayesError>
    {
        let model = self.fitted.as_ref()
            .ok_or(NaiveBayesError::NotFitted)?;
        checker::check_feature_count(model.n_features, x.shape().1)?;

        let (n_rows, _) = x.shape();
        let rows = (0..n_rows).into_par_iter()
            .map(|i| {
                let (cols, values) = x.row(i);
                let mut scores = model.log_joint_sparse(cols, values);
                utils::log_normalize(&mut scores);
                scores
            })
            .collect::<Vec<_>>();

        Ok(utils::stack_rows(rows, model.classes.len()))
    }


    fn predict_proba(&self, x: &CsrMatrix)
        -> Result<DenseMatrix, NaiveBayesError>
    {
        let model = self.fitted.as_ref()
            .ok_or(NaiveBayesError::NotFitted)?;
        checker::check_feature_count(model.n_features, x.shape().1)?;

        let (n_rows, _) = x.shape();
        let rows = (0..n_rows).into_par_iter()
            .map(|i| {
                let (cols, values) = x.row(i);
                let mut scores = model.log_joint_sparse(cols, values);
                utils::log_normalize(&mut scores);
                scores.iter_mut()
                    .for_each(|score| { *score = score.exp(); });
                scores
            })
            .collect::<Vec<_>>();

        Ok(utils::stack_rows(rows, model.classes.len()))
    }


    fn predict(&self, x: &CsrMatrix)
        -> Result<Vec<L>, NaiveBayesError>
    {
        let model = self.fitted.as_ref()
            .ok_or(NaiveBayesError::NotFitted)?;
        checker::check_feature_count(model.n_features, x.shape().1)?;

        let (n_rows, _) = x.shape();
        let labels = (0..n_rows).into_par_iter()
            .map(|i| {
                let (cols, values) = x.row(i);
                let scores = model.log_joint_sparse(cols, values);
                model.classes[utils::argmax(&scores)].clone()
            })
            .collect::<Vec<_>>();

        Ok(labels)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::MultinomialNB;

    #[test]
    fn sparse_fit_matches_dense_fit() {
        let dense = DenseMatrix::from_rows(&[
            [2.0, 0.0, 1.0],
            [0.0, 0.0, 3.0],
            [0.0, 4.0, 0.0],
            [1.0, 2.0, 0.0],
        ]).unwrap();
        let y = vec![0, 0, 1, 1];

        let mut dense_clf = MultinomialNB::new();
        dense_clf.fit(&dense, &y).unwrap();

        let sparse = CsrMatrix::from_dense(&dense);
        let mut sparse_clf = CsrMultinomialNB::new();
        sparse_clf.fit(&sparse, &y).unwrap();

        for class in 0..2 {
            let d = dense_clf.feature_log_prob(class).unwrap();
            let s = sparse_clf.feature_log_prob(class).unwrap();
            for (a, b) in d.iter().zip(s) {
                assert!((a - b).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn invalid_alpha_is_rejected_at_fit_time() {
        let x = CsrMatrix::from_triplets(2, 1, &[(0, 0, 1.0)]).unwrap();
        let y = vec![0, 1];

        let mut clf = CsrMultinomialNB::new().alpha(-0.5);
        assert_eq!(
            clf.fit(&x, &y).err(),
            Some(NaiveBayesError::InvalidSmoothing { alpha: -0.5 }),
        );
    }
}
