use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("StatsError: {0}")]
    Stats(#[from] moments_stats::Error),
    #[error(
        "Unsupported config format `{0}`. Options are `yaml`, `yml`, and \
        `json`."
    )]
    UnsupportedFormat(String),
    #[error("IoError: {0}")]
    Io(#[from] io::Error),
    #[error("YamlError: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("JsonError: {0}")]
    Json(#[from] serde_json::Error),
}
