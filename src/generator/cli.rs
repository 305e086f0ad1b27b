use clap::Parser;
use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

use crate::generator::bootstrap::{parse_peers_csv, BOOTSTRAP_RELAYS};
use crate::generator::config::{GeneratorConfig, DEFAULT_OUTPUT_DIR, DEFAULT_SERVERS_FILE};
use crate::generator::{generate, Settings};
use crate::utils::init_logging;

/// Generate `<friendly_name>_topology.json` for every server in the list.
#[derive(Parser, Debug)]
#[command(name = "topology-gen", version)]
pub struct Cli {
    /// Server list (header: address,port,friendly_name,role)
    #[arg(long)]
    pub servers: Option<PathBuf>,

    /// Directory the topology files are written to
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// comma separated host:port bootstrap relays, replaces the built-in set
    #[arg(long)]
    pub bootstrap: Option<String>,

    /// Debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Flags win over the config file, the config file over built-in defaults.
    pub fn resolve(&self) -> Result<Settings> {
        let cfg = match &self.config {
            Some(path) => GeneratorConfig::load(path)?,
            None => GeneratorConfig::default(),
        };

        let bootstrap = match &self.bootstrap {
            Some(b) => parse_peers_csv(b)?,
            None => cfg
                .bootstrap_peers
                .unwrap_or_else(|| BOOTSTRAP_RELAYS.clone()),
        };

        Ok(Settings {
            servers_file: self
                .servers
                .clone()
                .or(cfg.servers_file)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SERVERS_FILE)),
            output_dir: self
                .out_dir
                .clone()
                .or(cfg.output_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            bootstrap,
        })
    }
}

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = cli.resolve()?;
    let written = generate(&settings)?;
    info!(files = written.len(), dir = %settings.output_dir.display(), "topology generation complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_uses_defaults() {
        let cli = Cli::try_parse_from(["topology-gen"]).unwrap();
        let s = cli.resolve().unwrap();
        assert_eq!(s.servers_file, PathBuf::from("apex-prime-servers.txt"));
        assert_eq!(s.output_dir, PathBuf::from("."));
        assert_eq!(s.bootstrap, *BOOTSTRAP_RELAYS);
    }

    #[test]
    fn test_flags_override_config() {
        let dir = tempfile::tempdir().unwrap();
        let cfg_path = dir.path().join("topology.toml");
        std::fs::write(
            &cfg_path,
            "servers_file = \"from-config.csv\"\noutput_dir = \"cfg-out\"\n\n[[bootstrap_peers]]\nfriendly_name = \"\"\naddress = \"cfg.example\"\nport = 1\n",
        )
        .unwrap();
        let cfg_arg = cfg_path.to_str().unwrap();

        let cli = Cli::try_parse_from(["topology-gen", "--config", cfg_arg]).unwrap();
        let s = cli.resolve().unwrap();
        assert_eq!(s.servers_file, PathBuf::from("from-config.csv"));
        assert_eq!(s.output_dir, PathBuf::from("cfg-out"));
        assert_eq!(s.bootstrap[0].address, "cfg.example");

        let cli = Cli::try_parse_from([
            "topology-gen",
            "--config",
            cfg_arg,
            "--servers",
            "flag.csv",
            "--bootstrap",
            "flag.example:2",
        ])
        .unwrap();
        let s = cli.resolve().unwrap();
        assert_eq!(s.servers_file, PathBuf::from("flag.csv"));
        assert_eq!(s.output_dir, PathBuf::from("cfg-out"));
        assert_eq!(s.bootstrap.len(), 1);
        assert_eq!(s.bootstrap[0].address, "flag.example");
    }

    #[test]
    fn test_bad_bootstrap_flag() {
        let cli = Cli::try_parse_from(["topology-gen", "--bootstrap", "nope"]).unwrap();
        assert!(cli.resolve().is_err());
    }
}
