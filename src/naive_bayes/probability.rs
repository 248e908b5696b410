use serde::{
    Serialize,
    Deserialize,
};

use core::f64::consts::PI;


/// Gaussian density with one mean/variance pair per feature.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(super) struct Gaussian {
    pub(super) means: Vec<f64>,
    pub(super) vars: Vec<f64>,
}


impl Gaussian {
    pub(super) fn new(means: Vec<f64>, vars: Vec<f64>) -> Self {
        assert_eq!(means.len(), vars.len());
        Self { means, vars }
    }


    /// Computes the logarithmic density of the given row,
    /// `Σ_f −½ ( ln(2π σ²_f) + (x_f − μ_f)² / σ²_f )`,
    /// under the per-feature independence assumption.
    /// Every stored variance is strictly positive,
    /// so each term is finite.
    #[inline(always)]
    pub(super) fn log_density(&self, row: &[f64]) -> f64 {
        let gauss_const = self.means.len() as f64 * (2f64 * PI).ln();

        let non_const = self.means.iter()
            .zip(&self.vars[..])
            .zip(row)
            .map(|((&mean, &var), &x)| {
                (x - mean).powi(2) / var + var.ln()
            })
            .sum::<f64>();

        -0.5 * (gauss_const + non_const)
    }
}


/// Smoothed multinomial log-probability table for one class.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(super) struct Multinomial {
    pub(super) log_prob: Vec<f64>,
}


impl Multinomial {
    /// Builds the table from raw per-feature counts,
    /// `log_prob[f] = ln( (count_f + α) / (Σ_f count_f + α · n_features) )`.
    /// `alpha > 0` guarantees that no entry is `ln(0)`,
    /// even for features never observed in the class.
    pub(super) fn from_counts(counts: &[f64], alpha: f64) -> Self {
        let n_features = counts.len() as f64;
        let log_total = (counts.iter().sum::<f64>() + alpha * n_features).ln();

        let log_prob = counts.iter()
            .map(|&count| (count + alpha).ln() - log_total)
            .collect();

        Self { log_prob }
    }


    /// Computes the logarithmic mass term `Σ_f x_f · ln θ_f`
    /// of the given dense row.
    #[inline(always)]
    pub(super) fn log_mass(&self, row: &[f64]) -> f64 {
        row.iter()
            .zip(&self.log_prob[..])
            .map(|(&x, &log_p)| x * log_p)
            .sum::<f64>()
    }


    /// Computes the same sum over the nonzero entries of
    /// a compressed row.
    /// Zero entries contribute `0 · ln θ_f = 0`,
    /// so iterating the stored entries only is exact.
    #[inline(always)]
    pub(super) fn log_mass_sparse(&self, cols: &[usize], values: &[f64])
        -> f64
    {
        cols.iter()
            .zip(values)
            .map(|(&j, &x)| x * self.log_prob[j])
            .sum::<f64>()
    }
}
