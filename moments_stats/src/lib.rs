#![warn(unused_extern_crates)]
#![warn(
    clippy::all,
    clippy::imprecise_flops,
    clippy::unseparated_literal_suffix,
    clippy::unreadable_literal,
    clippy::implicit_clone
)]
//! Mean and variance of finite sequences of floats.
//!
//! Every function takes a borrowed slice and returns a freshly computed
//! scalar. Inputs too short for the requested statistic produce
//! [`Error::InsufficientInput`] instead of dividing by zero.
//!
//! ```rust
//! use moments_stats::{mean, variance, Error};
//!
//! let xs: Vec<f64> = vec![1.0, 2.0, 3.0];
//! assert_eq!(mean(&xs), Ok(2.0));
//! assert_eq!(variance(&xs), Ok(1.0));
//!
//! assert_eq!(
//!     variance(&[5.0_f64]),
//!     Err(Error::InsufficientInput { required: 2, n: 1 }),
//! );
//! ```
mod error;
mod sample;

pub use error::Error;
pub use sample::{
    mean, mean_and_variance_ddof, std, std_ddof, variance, variance_ddof,
};
