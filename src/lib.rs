#![warn(missing_docs)]

//!
//! A crate that provides Naive Bayes classifiers.
//! All the classifiers in this crate score classes in log space and
//! normalize the scores with the log-sum-exp reduction,
//! so that `predict_proba` and `predict_log_proba` agree
//! under the exp/log round-trip.
//!
//! This crate includes two families of classifiers.
//!
//! - Gaussian Naive Bayes
//!     Models each feature as an independent per-class Gaussian
//!     over continuous values.
//!     In this crate, `GaussianNB` corresponds to this family.
//!
//!
//! - Multinomial Naive Bayes
//!     Models each sample as counts drawn from a per-class
//!     multinomial distribution with additive smoothing.
//!     In this crate, `MultinomialNB` (dense input) and
//!     `CsrMultinomialNB` (sparse input) correspond to this family.
//!     The two share the same model;
//!     the sparse one iterates stored nonzero entries only.

pub mod classifier;
pub mod error;
pub mod matrix;
pub mod naive_bayes;
pub mod prelude;

pub(crate) mod common;


pub use classifier::Classifier;
pub use error::NaiveBayesError;

pub use matrix::{DenseMatrix, CsrMatrix};

pub use naive_bayes::{GaussianNB, MultinomialNB, CsrMultinomialNB};
