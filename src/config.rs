use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::info;
use num::Float;
use serde::{Deserialize, Serialize};

use crate::Error;

/// Default delta degrees of freedom. Gives the sample (Bessel-corrected)
/// variance.
pub const DEFAULT_DDOF: usize = 1;

fn default_ddof() -> usize {
    DEFAULT_DDOF
}

/// The file formats a config can be read from
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

impl FromStr for ConfigFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            _ => Err(Error::UnsupportedFormat(s.to_owned())),
        }
    }
}

impl ConfigFormat {
    fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("");
        ext.parse()
    }
}

/// Configuration for variance-type computations
///
/// Sets the delta degrees of freedom, `ddof`, subtracted from the number of
/// values in the variance denominator.
#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MomentsConfig {
    /// `0` for the population variance, `1` for the sample variance
    #[serde(default = "default_ddof")]
    pub ddof: usize,
}

impl MomentsConfig {
    pub fn new() -> Self {
        Self { ddof: DEFAULT_DDOF }
    }

    pub fn ddof(mut self, ddof: usize) -> Self {
        self.ddof = ddof;
        self
    }

    /// Read a config from a yaml or json file. The format is determined by
    /// the file extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;

        info!("Loading config from {:?}...", path);
        let text = fs::read_to_string(path)?;
        Self::from_str_fmt(&text, format)
    }

    /// Parse a config from a string in the given format
    pub fn from_str_fmt(
        text: &str,
        format: ConfigFormat,
    ) -> Result<Self, Error> {
        match format {
            // An empty yaml document deserializes as unit, not a map
            ConfigFormat::Yaml if text.trim().is_empty() => Ok(Self::new()),
            ConfigFormat::Yaml => {
                serde_yaml::from_str(text).map_err(Error::Yaml)
            }
            ConfigFormat::Json => {
                serde_json::from_str(text).map_err(Error::Json)
            }
        }
    }

    /// The variance of `xs` under this config
    pub fn variance<T: Float>(&self, xs: &[T]) -> Result<T, Error> {
        moments_stats::variance_ddof(xs, self.ddof).map_err(Error::Stats)
    }

    /// The standard deviation of `xs` under this config
    pub fn std<T: Float>(&self, xs: &[T]) -> Result<T, Error> {
        moments_stats::std_ddof(xs, self.ddof).map_err(Error::Stats)
    }
}

impl Default for MomentsConfig {
    fn default() -> Self {
        MomentsConfig::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::*;

    #[test]
    fn default_is_sample_variance() {
        assert_eq!(MomentsConfig::default().ddof, 1);
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(
            ConfigFormat::from_path("a/b/moments.yml").unwrap(),
            ConfigFormat::Yaml
        );
        assert_eq!(
            ConfigFormat::from_path("moments.yaml").unwrap(),
            ConfigFormat::Yaml
        );
        assert_eq!(
            ConfigFormat::from_path("moments.json").unwrap(),
            ConfigFormat::Json
        );
    }

    #[test]
    fn unknown_extension_is_unsupported() {
        match ConfigFormat::from_path("moments.toml") {
            Err(Error::UnsupportedFormat(ext)) => assert_eq!(ext, "toml"),
            res => panic!("Expected UnsupportedFormat, got {:?}", res),
        }
        assert!(ConfigFormat::from_path("moments").is_err());
    }

    #[test]
    fn parse_yaml() {
        let config =
            MomentsConfig::from_str_fmt("ddof: 0", ConfigFormat::Yaml).unwrap();
        assert_eq!(config, MomentsConfig::new().ddof(0));
    }

    #[test]
    fn parse_empty_yaml_and_json_are_default() {
        let yaml = MomentsConfig::from_str_fmt("", ConfigFormat::Yaml).unwrap();
        let json =
            MomentsConfig::from_str_fmt("{}", ConfigFormat::Json).unwrap();
        assert_eq!(yaml, MomentsConfig::default());
        assert_eq!(json, MomentsConfig::default());
    }

    #[test]
    fn unknown_field_is_rejected() {
        let res =
            MomentsConfig::from_str_fmt("{\"dof\": 2}", ConfigFormat::Json);
        assert!(matches!(res, Err(Error::Json(_))));
    }

    #[test]
    fn variance_uses_ddof() {
        let xs: Vec<f64> = vec![0.0, 1.0, 2.0, 3.0, 4.0];
        let sample = MomentsConfig::new();
        let population = MomentsConfig::new().ddof(0);

        assert_relative_eq!(
            sample.variance(&xs).unwrap(),
            2.5,
            epsilon = 1E-12
        );
        assert_relative_eq!(
            population.variance(&xs).unwrap(),
            2.0,
            epsilon = 1E-12
        );
        assert_relative_eq!(
            population.std(&xs).unwrap(),
            2.0_f64.sqrt(),
            epsilon = 1E-12
        );
    }

    #[test]
    fn variance_short_input_is_stats_error() {
        let res = MomentsConfig::new().variance(&[1.0_f64]);
        assert!(matches!(
            res,
            Err(Error::Stats(moments_stats::Error::InsufficientInput {
                required: 2,
                n: 1
            }))
        ));
    }

    #[test]
    fn max_ddof_from_yaml_is_stats_error() {
        let config = MomentsConfig::from_str_fmt(
            "ddof: 18446744073709551615",
            ConfigFormat::Yaml,
        )
        .unwrap();
        assert_eq!(config.ddof, usize::MAX);

        let res = config.variance(&[1.0_f64, 2.0]);
        assert!(matches!(
            res,
            Err(Error::Stats(moments_stats::Error::InsufficientInput {
                required: usize::MAX,
                n: 2
            }))
        ));
    }
}
