use rayon::prelude::*;

use serde::{
    Serialize,
    Deserialize,
};

use std::hash::Hash;

use crate::{Classifier, DenseMatrix, NaiveBayesError};
use crate::common::{checker, utils};
use crate::common::labels::ClassRegistry;

use super::probability::Multinomial;


/// The smoothing parameter set as default (Laplace smoothing).
pub const DEFAULT_ALPHA: f64 = 1.0;


/// Multinomial Naive Bayes classifier over dense matrices of
/// non-negative counts.
/// `fit` accumulates per-class, per-feature counts and turns them into
/// smoothed log-probabilities
/// `ln( (count_{c,f} + α) / (Σ_f count_{c,f} + α · n_features) )`;
/// the `predict*` methods score each class by
/// `ln P(c) + Σ_f x_f · ln θ_{c,f}` and normalize with
/// the log-sum-exp reduction.
///
/// Negative feature values are a contract violation:
/// they are not validated and produce meaningless scores.
///
/// # Example
/// ```
/// use minibayes::prelude::*;
///
/// let x = DenseMatrix::from_rows(&[
///     [4.0, 1.0, 0.0],
///     [5.0, 0.0, 1.0],
///     [0.0, 3.0, 4.0],
///     [1.0, 2.0, 5.0],
/// ]).unwrap();
/// let y = vec!["ham", "ham", "spam", "spam"];
///
/// let mut clf = MultinomialNB::new().alpha(0.5);
/// let predictions = clf.fit(&x, &y)
///     .unwrap()
///     .predict(&x)
///     .unwrap();
///
/// assert_eq!(predictions, y);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultinomialNB<L> {
    alpha: f64,
    fitted: Option<MultinomialModel<L>>,
}


/// The parameters estimated by a multinomial `fit`,
/// shared by the dense and sparse classifiers.
/// Fully replaced on every successful re-fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(super) struct MultinomialModel<L> {
    pub(super) classes: Vec<L>,
    pub(super) log_priors: Vec<f64>,
    pub(super) distributions: Vec<Multinomial>,
    pub(super) n_features: usize,
}


impl<L> MultinomialModel<L> {
    /// Estimate the model from per-class raw count tables.
    pub(super) fn from_counts(
        registry: ClassRegistry<L>,
        class_indices: &[usize],
        counts: Vec<Vec<f64>>,
        alpha: f64,
        n_features: usize,
    ) -> Self
        where L: Clone + Eq + Hash,
    {
        let log_priors = utils::log_priors(class_indices, registry.len());

        let distributions = counts.into_par_iter()
            .map(|class_counts| Multinomial::from_counts(&class_counts, alpha))
            .collect::<Vec<_>>();

        Self {
            classes: registry.into_classes(),
            log_priors,
            distributions,
            n_features,
        }
    }


    /// The unnormalized log-joint `ln P(c) + Σ_f x_f · ln θ_{c,f}`
    /// of each class for the given dense row.
    pub(super) fn log_joint(&self, row: &[f64]) -> Vec<f64> {
        self.log_priors.iter()
            .zip(&self.distributions[..])
            .map(|(&prior, dist)| prior + dist.log_mass(row))
            .collect()
    }


    /// The same log-joint, accumulated over the nonzero entries
    /// of a compressed row only.
    pub(super) fn log_joint_sparse(&self, cols: &[usize], values: &[f64])
        -> Vec<f64>
    {
        self.log_priors.iter()
            .zip(&self.distributions[..])
            .map(|(&prior, dist)| prior + dist.log_mass_sparse(cols, values))
            .collect()
    }
}


impl<L> MultinomialNB<L> {
    /// Construct a new, unfitted instance with
    /// the default smoothing parameter [`DEFAULT_ALPHA`].
    pub fn new() -> Self {
        Self { alpha: DEFAULT_ALPHA, fitted: None }
    }


    /// Set the smoothing parameter.
    /// `1.0` is Laplace smoothing and
    /// values in `(0, 1)` are Lidstone smoothing.
    /// Non-positive values are rejected when `fit` is called.
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
    /// indexed like [`classes`](MultinomialNB::classes).
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


impl<L> Default for MultinomialNB<L> {
    fn default() -> Self {
        Self::new()
    }
}


impl<L> Classifier for MultinomialNB<L>
    where L: Clone + Eq + Hash + Send + Sync,
{
    type Matrix = DenseMatrix;
    type Label = L;


    fn fit(&mut self, x: &DenseMatrix, y: &[L])
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
            counts[k].iter_mut()
                .zip(x.row(i))
                .for_each(|(count, &value)| { *count += value; });
        }

        self.fitted = Some(MultinomialModel::from_counts(
            registry, &class_indices, counts, self.alpha, n_features,
        ));
        Ok(self)
    }


    fn predict_log_proba(&self, x: &DenseMatrix)
        -> Result<DenseMatrix, NaiveBayesError>
    {
        let model = self.fitted.as_ref()
            .ok_or(NaiveBayesError::NotFitted)?;
        checker::check_feature_count(model.n_features, x.shape().1)?;

        let (n_rows, _) = x.shape();
        let rows = (0..n_rows).into_par_iter()
            .map(|i| {
                let mut scores = model.log_joint(x.row(i));
                utils::log_normalize(&mut scores);
                scores
            })
            .collect::<Vec<_>>();

        Ok(utils::stack_rows(rows, model.classes.len()))
    }


    fn predict_proba(&self, x: &DenseMatrix)
        -> Result<DenseMatrix, NaiveBayesError>
    {
        let model = self.fitted.as_ref()
            .ok_or(NaiveBayesError::NotFitted)?;
        checker::check_feature_count(model.n_features, x.shape().1)?;

        let (n_rows, _) = x.shape();
        let rows = (0..n_rows).into_par_iter()
            .map(|i| {
                let mut scores = model.log_joint(x.row(i));
                utils::log_normalize(&mut scores);
                scores.iter_mut()
                    .for_each(|score| { *score = score.exp(); });
                scores
            })
            .collect::<Vec<_>>();

        Ok(utils::stack_rows(rows, model.classes.len()))
    }


    fn predict(&self, x: &DenseMatrix)
        -> Result<Vec<L>, NaiveBayesError>
    {
        let model = self.fitted.as_ref()
            .ok_or(NaiveBayesError::NotFitted)?;
        checker::check_feature_count(model.n_features, x.shape().1)?;

        let (n_rows, _) = x.shape();
        let labels = (0..n_rows).into_par_iter()
            .map(|i| {
                let scores = model.log_joint(x.row(i));
                model.classes[utils::argmax(&scores)].clone()
            })
            .collect::<Vec<_>>();

        Ok(labels)
    }
}
