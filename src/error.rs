//! Errors raised while loading and validating scenarios
//!
//! The engine's per-frame operations never fail; only the YAML-facing
//! layer has something to report.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to open scenario file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed scenario YAML")]
    Yaml(#[from] serde_yaml::Error),

    #[error("body {index} is invalid: {reason}")]
    InvalidBody { index: usize, reason: &'static str },

    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: &'static str },
}
