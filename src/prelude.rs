//! Common import for general use.

pub use crate::{
    ConfigFormat, Error, MomentsConfig, Summary, DEFAULT_DDOF,
};

pub use moments_stats::{mean, variance, variance_ddof};
