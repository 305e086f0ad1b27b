use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::topology::AccessPoint;
use crate::utils::{Result, TopologyError};

pub const DEFAULT_SERVERS_FILE: &str = "apex-prime-servers.txt";
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// Optional generator configuration, loaded from TOML. Every key may be omitted.
#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    pub servers_file: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    /// Replaces the built-in bootstrap relays when present.
    pub bootstrap_peers: Option<Vec<AccessPoint>>,
}

impl GeneratorConfig {
    /// Load generator config from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .map_err(|e| TopologyError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml(&data)
            .map_err(|e| TopologyError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn from_toml(data: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(data)
    }
}
