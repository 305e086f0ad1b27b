use lazy_static::lazy_static;

use crate::topology::AccessPoint;
use crate::utils::{Result, TopologyError};

pub const BOOTSTRAP_PORT: u16 = 5521;

lazy_static! {
    /// Public bootstrap relays of the network. Listed in every relay's public
    /// roots and appended to its local roots.
    pub static ref BOOTSTRAP_RELAYS: Vec<AccessPoint> = vec![
        bootstrap_entry("relay-g1.prime.mainnet.apexfusion.org", BOOTSTRAP_PORT),
        bootstrap_entry("relay-g2.prime.mainnet.apexfusion.org", BOOTSTRAP_PORT),
    ];
}

/// Bootstrap entries carry no friendly name.
pub fn bootstrap_entry(address: &str, port: u16) -> AccessPoint {
    AccessPoint {
        friendly_name: String::new(),
        address: address.to_string(),
        port,
    }
}

/// Parse a comma separated `host:port` list into bootstrap entries.
pub fn parse_peers_csv(s: &str) -> Result<Vec<AccessPoint>> {
    s.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| {
            let (host, port) = p
                .rsplit_once(':')
                .ok_or_else(|| TopologyError::Config(format!("bootstrap peer {:?} is not host:port", p)))?;
            let port = port
                .parse::<u16>()
                .map_err(|e| TopologyError::Config(format!("bootstrap peer {:?}: {}", p, e)))?;
            if host.is_empty() {
                return Err(TopologyError::Config(format!("bootstrap peer {:?} has no host", p)));
            }
            Ok(bootstrap_entry(host, port))
        })
        .collect()
}
