//! This file provides some common numeric functions
//! such as the log-sum-exp reduction.
//! All the posterior computations in this crate go through
//! the functions defined here.


/// Returns `ln( Σ_k exp(xs[k]) )`.
/// Subtracting the maximum before exponentiating keeps every summand
/// in `(0, 1]`, so the sum never overflows for large inputs and
/// never underflows to zero when the maximum is very negative.
/// Returns `-∞` for an empty slice.
#[inline(always)]
pub(crate) fn log_sum_exp(xs: &[f64]) -> f64 {
    let max = xs.iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);

    // `max` is `-∞` for an empty slice and `+∞` when some input is.
    // Either way the reduction is `max` itself.
    if !max.is_finite() { return max; }

    let sum = xs.iter()
        .map(|x| (x - max).exp())
        .sum::<f64>();

    max + sum.ln()
}


/// Normalizes the given unnormalized log-joint values in place,
/// so that `log_sum_exp(xs) == 0` afterwards.
/// Exponentiating the result yields posterior probabilities
/// summing to `1` up to floating rounding.
#[inline(always)]
pub(crate) fn log_normalize(xs: &mut [f64]) {
    let z = log_sum_exp(xs);
    xs.iter_mut()
        .for_each(|x| { *x -= z; });
}


/// Returns the index attaining the maximal value.
/// Ties are broken by the smallest index.
#[inline(always)]
pub(crate) fn argmax(xs: &[f64]) -> usize {
    let mut best = 0;
    for (k, &x) in xs.iter().enumerate().skip(1) {
        if x > xs[best] {
            best = k;
        }
    }
    best
}


/// Stacks one score vector per sample into
/// an `n_samples × n_classes` matrix.
#[inline(always)]
pub(crate) fn stack_rows(rows: Vec<Vec<f64>>, n_cols: usize)
    -> crate::DenseMatrix
{
    let n_rows = rows.len();
    let values = rows.into_iter()
        .flatten()
        .collect::<Vec<_>>();

    crate::DenseMatrix::new(values, n_rows, n_cols)
}


/// Returns the logarithm of the empirical class priors,
/// `ln( n_c / n_samples )` for each dense class index `c`.
#[inline(always)]
pub(crate) fn log_priors(class_indices: &[usize], n_classes: usize) -> Vec<f64> {
    let mut counts = vec![0_usize; n_classes];
    for &k in class_indices {
        counts[k] += 1;
    }

    let n_samples = class_indices.len() as f64;
    counts.into_iter()
        .map(|c| (c as f64 / n_samples).ln())
        .collect()
}
