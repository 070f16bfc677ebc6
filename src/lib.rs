#![warn(unused_extern_crates)]
#![warn(
    clippy::all,
    clippy::imprecise_flops,
    clippy::unseparated_literal_suffix,
    clippy::unreadable_literal,
    clippy::implicit_clone
)]
//! Sample mean and variance of finite sequences of floats.
//!
//! # Example
//!
//! The sample variance uses the `n - 1` denominator.
//!
//! ```rust
//! use moments::{mean, variance};
//!
//! let xs: Vec<f64> = vec![1.0, 2.0, 3.0];
//!
//! assert_eq!(mean(&xs).unwrap(), 2.0);
//! assert_eq!(variance(&xs).unwrap(), 1.0);
//! ```
//!
//! Inputs that are too short for the requested statistic are errors rather
//! than `NaN` or infinity.
//!
//! ```rust
//! use moments::{mean, variance};
//! use moments::stats::Error;
//!
//! let empty: Vec<f64> = Vec::new();
//!
//! assert_eq!(
//!     mean(&empty),
//!     Err(Error::InsufficientInput { required: 1, n: 0 }),
//! );
//! assert_eq!(
//!     variance(&[5.0_f64]),
//!     Err(Error::InsufficientInput { required: 2, n: 1 }),
//! );
//! ```
//!
//! The degrees of freedom can be set through a [`MomentsConfig`], which can
//! also be read from a yaml or json file.
//!
//! ```rust
//! use moments::{MomentsConfig, Summary};
//!
//! let xs: Vec<f64> = vec![0.0, 1.0, 2.0, 3.0, 4.0];
//! let config = MomentsConfig::new().ddof(0);
//!
//! assert_eq!(config.variance(&xs).unwrap(), 2.0);
//!
//! let summary = Summary::new(&xs, &config).unwrap();
//! assert_eq!(summary.n, 5);
//! ```
mod config;
mod error;
pub mod prelude;
mod summary;

pub use config::{ConfigFormat, MomentsConfig, DEFAULT_DDOF};
pub use error::Error;
pub use summary::Summary;

pub use moments_stats as stats;
pub use moments_stats::{mean, std, std_ddof, variance, variance_ddof};
