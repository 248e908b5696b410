//! Feature-matrix adapters with dense/sparse format.

// Provides the dense matrix struct.
pub(crate) mod dense;
// Provides the row-compressed sparse matrix struct.
pub(crate) mod sparse;


pub use dense::DenseMatrix;
pub use sparse::CsrMatrix;
