use std::collections::HashSet;
use tracing::{debug, warn};

use crate::topology::model::{
    AccessPoint, LocalRoots, PublicRoots, Role, ServerRecord, TopologyDocument,
    USE_LEDGER_AFTER_SLOT_INFO,
};

/// Every server in `servers` except those on the same address AND port as `target`.
pub fn local_access_points(target: &ServerRecord, servers: &[ServerRecord]) -> Vec<AccessPoint> {
    servers
        .iter()
        .filter(|s| !s.same_endpoint(target))
        .map(ServerRecord::access_point)
        .collect()
}

/// Build the topology document for one server against the full server list.
pub fn build_topology(
    target: &ServerRecord,
    servers: &[ServerRecord],
    bootstrap: &[AccessPoint],
) -> TopologyDocument {
    let mut local = local_access_points(target, servers);
    let role = target.role_kind();

    let public = match role {
        Role::Relay => {
            // relays also dial the bootstrap relays statically
            local.extend_from_slice(bootstrap);
            PublicRoots::advertised(bootstrap)
        }
        Role::Node => PublicRoots::none(),
    };

    TopologyDocument {
        local_roots: vec![LocalRoots::new(local)],
        public_roots: vec![public],
        use_ledger_after_slot_info: USE_LEDGER_AFTER_SLOT_INFO,
        use_ledger_after_slot: role.use_ledger_after_slot(),
    }
}

/// One (friendly_name, document) pair per input row, in input order.
pub fn build_all(
    servers: &[ServerRecord],
    bootstrap: &[AccessPoint],
) -> Vec<(String, TopologyDocument)> {
    let mut seen = HashSet::new();
    servers
        .iter()
        .map(|server| {
            if !seen.insert(server.friendly_name.as_str()) {
                warn!(
                    server = %server.friendly_name,
                    "duplicate friendly_name, later entry overwrites earlier output"
                );
            }
            let doc = build_topology(server, servers, bootstrap);
            debug!(
                server = %server.friendly_name,
                local = doc.local_roots[0].valency,
                "built topology"
            );
            (server.friendly_name.clone(), doc)
        })
        .collect()
}
