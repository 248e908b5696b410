//! Defines the Naive Bayes classifiers.

/// Defines the Gaussian Naive Bayes classifier.
pub mod gaussian;
/// Defines the Multinomial Naive Bayes classifier over dense input.
pub mod multinomial;
/// Defines the Multinomial Naive Bayes classifier over sparse input.
pub mod multinomial_sparse;

/// Defines probability density/mass functions.
mod probability;


pub use gaussian::GaussianNB;
pub use multinomial::MultinomialNB;
pub use multinomial_sparse::CsrMultinomialNB;
