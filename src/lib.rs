//! Peer topology generator.
//!
//! Turns a flat server list (`address,port,friendly_name,role`) into one
//! `<friendly_name>_topology.json` per server, carrying its local roots (every
//! other server) and public roots (the bootstrap relays, for relays only).

pub mod utils;
pub mod topology;
pub mod generator;
