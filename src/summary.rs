use log::debug;
use serde::{Deserialize, Serialize};

use crate::{Error, MomentsConfig};

/// The count, mean, variance, and standard deviation of a set of values
///
/// NaN or infinite statistics serialize as `null` in json, which does not
/// deserialize back into `f64`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Summary {
    pub n: usize,
    pub mean: f64,
    /// Variance with the denominator `n - ddof`
    pub variance: f64,
    pub std: f64,
}

impl Summary {
    /// Summarize `xs` using the degrees of freedom in `config`
    ///
    /// # Example
    ///
    /// ```rust
    /// # use moments::{MomentsConfig, Summary};
    /// let xs: Vec<f64> = vec![1.0, 2.0, 3.0];
    /// let summary = Summary::new(&xs, &MomentsConfig::default()).unwrap();
    ///
    /// assert_eq!(summary.n, 3);
    /// assert_eq!(summary.mean, 2.0);
    /// assert_eq!(summary.variance, 1.0);
    /// assert_eq!(summary.std, 1.0);
    /// ```
    pub fn new(xs: &[f64], config: &MomentsConfig) -> Result<Self, Error> {
        let (mean, variance) =
            moments_stats::mean_and_variance_ddof(xs, config.ddof)?;
        debug!("Summarized {} values with ddof = {}", xs.len(), config.ddof);
        Ok(Self {
            n: xs.len(),
            mean,
            variance,
            std: variance.sqrt(),
        })
    }
}
