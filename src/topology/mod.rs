//! Topology module: server list loading, per-server topology construction,
//! and rendering of topology files.
//!
//! Pipeline: `loader::load_servers` -> `builder::build_all` -> `writer::write_all`.

pub mod model;
pub mod loader;
pub mod builder;
pub mod format;
pub mod writer;

pub use model::{AccessPoint, LocalRoots, PublicRoots, Role, ServerRecord, TopologyDocument};
pub use loader::{load_servers, read_servers};
pub use builder::{build_all, build_topology, local_access_points};
pub use format::TopologyFormatter;
pub use writer::{output_file_name, render, write_all, write_topology};
