use num::Float;

use crate::Error;

// Convert a count to the float type of the data
#[inline]
fn count<T: Float>(n: usize) -> Result<T, Error> {
    num::cast(n).ok_or(Error::CountNotRepresentable(n))
}

/// The arithmetic mean of a slice of floats.
///
/// Values are summed left to right in a `T` accumulator.
///
/// # Example
///
/// ```rust
/// # use moments_stats::mean;
/// let xs: Vec<f64> = vec![1.0, 2.0, 3.0];
/// assert_eq!(mean(&xs).unwrap(), 2.0);
///
/// let empty: Vec<f64> = vec![];
/// assert!(mean(&empty).is_err());
/// ```
pub fn mean<T: Float>(xs: &[T]) -> Result<T, Error> {
    if xs.is_empty() {
        return Err(Error::InsufficientInput {
            required: 1,
            n: xs.len(),
        });
    }
    let n: T = count(xs.len())?;
    Ok(xs.iter().fold(T::zero(), |acc, &x| acc + x) / n)
}

/// The sample variance of a slice of floats, using the `n - 1` (Bessel)
/// denominator.
///
/// # Example
///
/// ```rust
/// # use moments_stats::variance;
/// let xs: Vec<f64> = vec![1.0, 2.0, 3.0];
/// assert_eq!(variance(&xs).unwrap(), 1.0);
///
/// assert!(variance(&[5.0_f64]).is_err());
/// ```
pub fn variance<T: Float>(xs: &[T]) -> Result<T, Error> {
    variance_ddof(xs, 1)
}

/// The variance of a slice of floats with the denominator `n - ddof`.
///
/// `ddof = 0` is the population variance and `ddof = 1` is the sample
/// variance. Uses two passes: one for the mean and one for the squared
/// deviations.
pub fn variance_ddof<T: Float>(xs: &[T], ddof: usize) -> Result<T, Error> {
    mean_and_variance_ddof(xs, ddof).map(|(_, v)| v)
}

/// The mean and the variance with denominator `n - ddof`, sharing the mean
/// pass.
///
/// # Example
///
/// ```rust
/// # use moments_stats::mean_and_variance_ddof;
/// let xs: Vec<f64> = vec![1.0, 2.0, 3.0];
/// assert_eq!(mean_and_variance_ddof(&xs, 1).unwrap(), (2.0, 1.0));
/// ```
pub fn mean_and_variance_ddof<T: Float>(
    xs: &[T],
    ddof: usize,
) -> Result<(T, T), Error> {
    let m = mean(xs)?;

    let n = xs.len();
    if n <= ddof {
        return Err(Error::InsufficientInput {
            required: ddof.saturating_add(1),
            n,
        });
    }

    let sum_sq = xs.iter().fold(T::zero(), |acc, &x| {
        let diff = x - m;
        acc + diff * diff
    });
    let denom: T = count(n - ddof)?;
    Ok((m, sum_sq / denom))
}

/// The sample standard deviation of a slice of floats
pub fn std<T: Float>(xs: &[T]) -> Result<T, Error> {
    variance(xs).map(Float::sqrt)
}

/// The standard deviation of a slice of floats with the denominator
/// `n - ddof` under the root
pub fn std_ddof<T: Float>(xs: &[T], ddof: usize) -> Result<T, Error> {
    variance_ddof(xs, ddof).map(Float::sqrt)
}
