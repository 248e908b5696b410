//! Exports the classifiers, matrix adapters, and traits of this crate.
//!
pub use crate::classifier::Classifier;


pub use crate::naive_bayes::{
    // Continuous features ----------------------
    GaussianNB,


    // Count features ---------------------------
    MultinomialNB,
    CsrMultinomialNB,
};


pub use crate::matrix::{
    DenseMatrix,
    CsrMatrix,
};


pub use crate::error::NaiveBayesError;
