use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

use crate::topology::model::{Role, ServerRecord};
use crate::utils::{Result, TopologyError};

pub const REQUIRED_COLUMNS: [&str; 4] = ["address", "port", "friendly_name", "role"];

/// Load the server list from a delimited file with header
/// `address,port,friendly_name,role`.
pub fn load_servers<P: AsRef<Path>>(path: P) -> Result<Vec<ServerRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| TopologyError::InputUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let servers = read_servers(file)?;
    debug!(path = %path.display(), count = servers.len(), "loaded server list");
    Ok(servers)
}

/// Row order is preserved, no dedup or sorting. Unknown roles are kept as-is.
pub fn read_servers<R: Read>(reader: R) -> Result<Vec<ServerRecord>> {
    let mut reader = csv::Reader::from_reader(reader);

    let headers = reader.headers().map_err(|source| TopologyError::MalformedRow {
        line: 1,
        source,
    })?;
    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|col| !headers.iter().any(|h| h == **col))
    {
        return Err(TopologyError::MissingColumn(missing.to_string()));
    }

    let mut servers = Vec::new();
    for (idx, row) in reader.deserialize::<ServerRecord>().enumerate() {
        // header is line 1
        let server = row.map_err(|source| TopologyError::MalformedRow {
            line: source
                .position()
                .map(|p| p.line())
                .unwrap_or(idx as u64 + 2),
            source,
        })?;
        if Role::known(&server.role).is_none() {
            warn!(
                server = %server.friendly_name,
                role = %server.role,
                "unrecognized role, treating as node"
            );
        }
        servers.push(server);
    }
    Ok(servers)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "address,port,friendly_name,role\n\
relay1.foo.com,5521,Main-relay1,relay\n\
relay2.foo.com,5521,Main-relay2,relay\n\
node1.foo.com,5521,Main-node1,node\n";

    #[test]
    fn test_read_preserves_order() {
        let servers = read_servers(SAMPLE.as_bytes()).unwrap();
        let names: Vec<_> = servers.iter().map(|s| s.friendly_name.as_str()).collect();
        assert_eq!(names, vec!["Main-relay1", "Main-relay2", "Main-node1"]);
        assert_eq!(servers[2], ServerRecord::new("node1.foo.com", 5521, "Main-node1", "node"));
    }

    #[test]
    fn test_column_order_is_free_and_extra_columns_ignored() {
        let input = "role,friendly_name,notes,port,address\nrelay,r1,edge,3001,10.0.0.1\n";
        let servers = read_servers(input.as_bytes()).unwrap();
        assert_eq!(servers, vec![ServerRecord::new("10.0.0.1", 3001, "r1", "relay")]);
    }

    #[test]
    fn test_missing_column() {
        let input = "address,port,friendly_name\nrelay1.foo.com,5521,Main-relay1\n";
        let err = read_servers(input.as_bytes()).unwrap_err();
        assert!(matches!(err, TopologyError::MissingColumn(ref c) if c == "role"));
    }

    #[test]
    fn test_bad_port_is_malformed_row() {
        let input = "address,port,friendly_name,role\na,1,x,node\nb,http,y,node\n";
        let err = read_servers(input.as_bytes()).unwrap_err();
        match err {
            TopologyError::MalformedRow { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_role_kept() {
        let input = "address,port,friendly_name,role\na,1,x,producer\n";
        let servers = read_servers(input.as_bytes()).unwrap();
        assert_eq!(servers[0].role, "producer");
        assert_eq!(servers[0].role_kind(), Role::Node);
    }

    #[test]
    fn test_header_only_is_empty() {
        let servers = read_servers("address,port,friendly_name,role\n".as_bytes()).unwrap();
        assert!(servers.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let err = load_servers("/nonexistent/servers.txt").unwrap_err();
        assert!(matches!(err, TopologyError::InputUnreadable { .. }));
    }
}
