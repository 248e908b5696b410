//! Defines some common functions used in this library.

/// Defines some useful functions such as the log-sum-exp reduction.
pub(crate) mod utils;

/// Defines some checker functions.
pub(crate) mod checker;

/// Defines the class registry built during `fit`.
pub(crate) mod labels;
