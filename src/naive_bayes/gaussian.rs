use rayon::prelude::*;

use serde::{
    Serialize,
    Deserialize,
};

use std::hash::Hash;

use crate::{Classifier, DenseMatrix, NaiveBayesError};
use crate::common::{checker, utils};
use crate::common::labels::ClassRegistry;

use super::probability::Gaussian;


/// Relative variance floor.
/// A within-class variance of zero is replaced by this fraction of
/// the population variance of the same feature over the whole sample.
const VARIANCE_FLOOR_RATIO: f64 = 1e-9;
/// Absolute fallback for features that are constant
/// over the whole training sample.
const MINIMAL_VARIANCE: f64 = 1e-12;


/// Gaussian Naive Bayes classifier over dense matrices of reals.
/// `fit` estimates a per-class, per-feature mean and
/// (population) variance together with the logarithmic class priors;
/// the `predict*` methods accumulate per-class Gaussian log-densities
/// and normalize them with the log-sum-exp reduction.
/// The struct name comes from scikit-learn.
///
/// # Example
/// ```
/// use minibayes::prelude::*;
///
/// let x = DenseMatrix::from_rows(&[
///     [-2.0, -1.0],
///     [-1.0, -1.0],
///     [-1.0, -2.0],
///     [ 1.0,  1.0],
///     [ 1.0,  2.0],
///     [ 2.0,  1.0],
/// ]).unwrap();
/// let y = vec![1, 1, 1, 2, 2, 2];
///
/// let mut clf = GaussianNB::new();
/// let predictions = clf.fit(&x, &y)
///     .unwrap()
///     .predict(&x)
///     .unwrap();
///
/// assert_eq!(predictions, y);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaussianNB<L> {
    fitted: Option<GaussianModel<L>>,
}


/// The parameters estimated by [`GaussianNB::fit`].
/// Fully replaced on every successful re-fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct GaussianModel<L> {
    classes: Vec<L>,
    log_priors: Vec<f64>,
    densities: Vec<Gaussian>,
    n_features: usize,
}


impl<L> GaussianModel<L> {
    /// The unnormalized log-joint `ln P(c) + ln p(x | c)`
    /// of each class for the given row.
    fn log_joint(&self, row: &[f64]) -> Vec<f64> {
        self.log_priors.iter()
            .zip(&self.densities[..])
            .map(|(&prior, density)| prior + density.log_density(row))
            .collect()
    }
}


impl<L> GaussianNB<L> {
    /// Construct a new, unfitted instance.
    pub fn new() -> Self {
        Self { fitted: None }
    }


    /// The class labels in stored order.
    /// Returns `None` on an unfitted instance.
    pub fn classes(&self) -> Option<&[L]> {
        self.fitted.as_ref().map(|model| &model.classes[..])
    }


    /// The logarithmic class priors `ln(n_c / n_samples)`,
    /// indexed like [`classes`](GaussianNB::classes).
    pub fn log_priors(&self) -> Option<&[f64]> {
        self.fitted.as_ref().map(|model| &model.log_priors[..])
    }


    /// The per-feature means of the given class index.
    pub fn means(&self, class: usize) -> Option<&[f64]> {
        self.fitted.as_ref()
            .and_then(|model| model.densities.get(class))
            .map(|density| &density.means[..])
    }


    /// The per-feature (floored) variances of the given class index.
    pub fn variances(&self, class: usize) -> Option<&[f64]> {
        self.fitted.as_ref()
            .and_then(|model| model.densities.get(class))
            .map(|density| &density.vars[..])
    }
}


impl<L> Default for GaussianNB<L> {
    fn default() -> Self {
        Self::new()
    }
}


impl<L> Classifier for GaussianNB<L>
    where L: Clone + Eq + Hash + Send + Sync,
{
    type Matrix = DenseMatrix;
    type Label = L;


    fn fit(&mut self, x: &DenseMatrix, y: &[L])
        -> Result<&mut Self, NaiveBayesError>
    {
        checker::check_sample(x.shape(), y.len())?;
        let (n_rows, n_features) = x.shape();

        let registry = ClassRegistry::from_target(y);
        let class_indices = registry.indices(y);
        let n_classes = registry.len();

        let log_priors = utils::log_priors(&class_indices, n_classes);

        // The population variance over the whole sample sets the scale
        // of the floor applied to degenerate within-class variances.
        let all_rows = (0..n_rows).collect::<Vec<_>>();
        let (_, overall_vars) = feature_statistics(x, &all_rows);
        let floors = overall_vars.into_iter()
            .map(|var| (VARIANCE_FLOOR_RATIO * var).max(MINIMAL_VARIANCE))
            .collect::<Vec<_>>();

        let densities = (0..n_classes)
            .map(|k| {
                let members = class_indices.iter()
                    .enumerate()
                    .filter_map(|(i, &ki)| (ki == k).then_some(i))
                    .collect::<Vec<_>>();

                let (means, vars) = feature_statistics(x, &members);
                let vars = vars.into_iter()
                    .zip(&floors[..])
                    .map(|(var, &floor)| var.max(floor))
                    .collect::<Vec<_>>();

                Gaussian::new(means, vars)
            })
            .collect::<Vec<_>>();

        self.fitted = Some(GaussianModel {
            classes: registry.into_classes(),
            log_priors,
            densities,
            n_features,
        });
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


/// Compute the population mean and variance of each feature
/// over the given rows.
fn feature_statistics(x: &DenseMatrix, rows: &[usize])
    -> (Vec<f64>, Vec<f64>)
{
    let n = rows.len() as f64;
    let (_, n_features) = x.shape();

    let means = (0..n_features).into_par_iter()
        .map(|j| {
            rows.iter()
                .map(|&i| x.get(i, j))
                .sum::<f64>()
                / n
        })
        .collect::<Vec<f64>>();

    let vars = means.par_iter()
        .enumerate()
        .map(|(j, &mean)| {
            rows.iter()
                .map(|&i| (x.get(i, j) - mean).powi(2))
                .sum::<f64>()
                / n
        })
        .collect::<Vec<f64>>();

    (means, vars)
}
