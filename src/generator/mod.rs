//! Generator: configuration, the built-in bootstrap relays, and the CLI that
//! drives load -> build -> write.

pub mod bootstrap;
pub mod config;
pub mod cli;

pub use bootstrap::BOOTSTRAP_RELAYS;
pub use config::GeneratorConfig;
pub use cli::run_cli;

use std::path::PathBuf;
use tracing::info;

use crate::topology::{build_all, load_servers, write_all, AccessPoint};
use crate::utils::Result;

/// Fully resolved inputs for one run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub servers_file: PathBuf,
    pub output_dir: PathBuf,
    pub bootstrap: Vec<AccessPoint>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            servers_file: PathBuf::from(config::DEFAULT_SERVERS_FILE),
            output_dir: PathBuf::from(config::DEFAULT_OUTPUT_DIR),
            bootstrap: BOOTSTRAP_RELAYS.clone(),
        }
    }
}

/// Run the whole pipeline. Nothing is written if the server list fails to load.
pub fn generate(settings: &Settings) -> Result<Vec<PathBuf>> {
    let servers = load_servers(&settings.servers_file)?;
    info!(
        servers = servers.len(),
        input = %settings.servers_file.display(),
        "generating topology files"
    );
    let docs = build_all(&servers, &settings.bootstrap);
    write_all(&settings.output_dir, &docs)
}
