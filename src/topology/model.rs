//! Topology data model: input rows and the per-server output document.
//!
//! Field declaration order is the JSON key order, which the consuming node
//! software's config loader expects.

use serde::{Deserialize, Serialize};
use crate::utils::serde_helpers::port_from_str;

pub const VALENCY_INFO: &str =
    "set the .localRoots.valency to the number of configured accessPoints";

pub const USE_LEDGER_AFTER_SLOT_INFO: &str = "the node will use the .publicRoots.accessPoints only until he synchronised up to slot .useLedgerAfterSlot. then P2P peering jumps in, plus static links to .localRoots.accessPoints";

/// One row of the server list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerRecord {
    pub address: String,
    #[serde(deserialize_with = "port_from_str")]
    pub port: u16,
    pub friendly_name: String,
    pub role: String,
}

impl ServerRecord {
    pub fn new(address: &str, port: u16, friendly_name: &str, role: &str) -> Self {
        Self {
            address: address.to_string(),
            port,
            friendly_name: friendly_name.to_string(),
            role: role.to_string(),
        }
    }

    /// Unrecognized roles are treated as nodes.
    pub fn role_kind(&self) -> Role {
        Role::known(&self.role).unwrap_or(Role::Node)
    }

    /// Two records name the same server only when address AND port match.
    pub fn same_endpoint(&self, other: &ServerRecord) -> bool {
        self.address == other.address && self.port == other.port
    }

    pub fn access_point(&self) -> AccessPoint {
        AccessPoint {
            friendly_name: self.friendly_name.clone(),
            address: self.address.clone(),
            port: self.port,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Relay,
    Node,
}

impl Role {
    /// `None` for anything but the exact strings "relay" and "node".
    pub fn known(s: &str) -> Option<Role> {
        match s {
            "relay" => Some(Role::Relay),
            "node" => Some(Role::Node),
            _ => None,
        }
    }

    pub fn use_ledger_after_slot(self) -> i64 {
        match self {
            Role::Relay => 0,
            Role::Node => -1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessPoint {
    pub friendly_name: String,
    pub address: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalRoots {
    #[serde(rename = "accessPoints")]
    pub access_points: Vec<AccessPoint>,
    pub advertise: bool,
    #[serde(rename = "valency_INFO")]
    pub valency_info: &'static str,
    pub valency: usize,
}

impl LocalRoots {
    pub fn new(access_points: Vec<AccessPoint>) -> Self {
        let valency = access_points.len();
        Self {
            access_points,
            advertise: false,
            valency_info: VALENCY_INFO,
            valency,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicRoots {
    #[serde(rename = "accessPoints")]
    pub access_points: Vec<AccessPoint>,
    pub advertise: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valency: Option<usize>,
}

impl PublicRoots {
    /// Relay branch: advertised bootstrap set. Valency is always 1 whatever
    /// the number of entries.
    pub fn advertised(bootstrap: &[AccessPoint]) -> Self {
        Self {
            access_points: bootstrap.to_vec(),
            advertise: true,
            valency: Some(1),
        }
    }

    pub fn none() -> Self {
        Self {
            access_points: Vec::new(),
            advertise: false,
            valency: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopologyDocument {
    #[serde(rename = "localRoots")]
    pub local_roots: Vec<LocalRoots>,
    #[serde(rename = "publicRoots")]
    pub public_roots: Vec<PublicRoots>,
    #[serde(rename = "useLedgerAfterSlot_INFO")]
    pub use_ledger_after_slot_info: &'static str,
    #[serde(rename = "useLedgerAfterSlot")]
    pub use_ledger_after_slot: i64,
}
