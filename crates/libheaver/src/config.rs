//! Driver configuration
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::args::DEFAULT_NET_INTERFACE;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to open driver config {path:?}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse driver config {path:?}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

type Result<T> = std::result::Result<T, ConfigError>;

/// Where the external tools live and how new containers are wired.
/// Missing keys in a config file fall back to the defaults.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct DriverConfig {
    /// heaver binary used for lifecycle and listing calls
    pub heaver_path: PathBuf,
    /// heaver-img binary used for image queries
    pub image_tool_path: PathBuf,
    /// Interface passed to `--net` on create
    pub net_interface: String,
    /// Seconds to wait for one invocation, unlimited when unset
    pub timeout_secs: Option<u64>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            heaver_path: PathBuf::from("/usr/bin/heaver"),
            image_tool_path: PathBuf::from("heaver-img"),
            net_interface: DEFAULT_NET_INTERFACE.to_owned(),
            timeout_secs: None,
        }
    }
}

impl DriverConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = fs::File::open(path).map_err(|err| ConfigError::Open {
            path: path.to_owned(),
            source: err,
        })?;
        serde_json::from_reader(&file).map_err(|err| ConfigError::Parse {
            path: path.to_owned(),
            source: err,
        })
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
