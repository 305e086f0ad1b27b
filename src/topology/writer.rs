use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::topology::format::TopologyFormatter;
use crate::topology::model::TopologyDocument;
use crate::utils::{Result, TopologyError};

pub fn output_file_name(friendly_name: &str) -> String {
    format!("{}_topology.json", friendly_name)
}

/// Render a document to the exact bytes written to disk.
pub fn render(doc: &TopologyDocument) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, TopologyFormatter::new());
    doc.serialize(&mut ser)?;
    Ok(buf)
}

/// Write one document into `dir`, replacing any existing file of the same name.
pub fn write_topology(dir: &Path, friendly_name: &str, doc: &TopologyDocument) -> Result<PathBuf> {
    let path = dir.join(output_file_name(friendly_name));
    let bytes = render(doc)?;
    fs::write(&path, &bytes).map_err(|source| TopologyError::Write {
        path: path.clone(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "wrote topology");
    Ok(path)
}

/// Write all documents in order, printing a confirmation per file. Stops at
/// the first failure; files already written stay in place.
pub fn write_all(dir: &Path, docs: &[(String, TopologyDocument)]) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(docs.len());
    for (name, doc) in docs {
        let path = write_topology(dir, name, doc)?;
        println!("Generated {}", output_file_name(name));
        written.push(path);
    }
    Ok(written)
}
