use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::content::{ContentTable, ScriptLibrary};

use super::FileNode;

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("failed to read archive: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse archive: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("entry '{path}' references unknown script '{script}'")]
    UnknownScript { path: String, script: String },
    #[error("entry '{path}' has neither inline text nor a script reference")]
    MissingPayload { path: String },
}

#[derive(Debug, Deserialize)]
struct ArchiveDoc {
    #[serde(default)]
    files: Vec<ArchiveEntry>,
}

#[derive(Debug, Deserialize)]
struct ArchiveEntry {
    path: String,
    #[serde(rename = "type")]
    file_type: String,
    hash: String,
    text: Option<String>,
    script: Option<String>,
}

/// A loaded world: file nodes plus the content table behind them.
///
/// Stands in for the build step that would generate the hash lookup table;
/// after loading, both the node map and the table are read-only.
pub struct Archive {
    nodes: BTreeMap<String, FileNode>,
    table: ContentTable,
}

impl Archive {
    /// Load a world archive, resolving script references against `scripts`.
    pub fn load<P: AsRef<Path>>(path: P, scripts: &ScriptLibrary) -> Result<Self, ArchiveError> {
        let path = path.as_ref();
        info!("Loading world archive from: {}", path.display());

        let raw = std::fs::read_to_string(path)?;
        let doc: ArchiveDoc = toml::from_str(&raw)?;
        Self::from_doc(doc, scripts)
    }

    /// Parse an archive from in-memory TOML, for tests and embedded worlds.
    pub fn from_toml(raw: &str, scripts: &ScriptLibrary) -> Result<Self, ArchiveError> {
        let doc: ArchiveDoc = toml::from_str(raw)?;
        Self::from_doc(doc, scripts)
    }

    fn from_doc(doc: ArchiveDoc, scripts: &ScriptLibrary) -> Result<Self, ArchiveError> {
        let mut nodes = BTreeMap::new();
        let mut table = ContentTable::new();

        for entry in doc.files {
            match (&entry.text, &entry.script) {
                (Some(text), _) => table.insert_text(&entry.hash, text.clone()),
                (None, Some(name)) => {
                    let script =
                        scripts
                            .get(name)
                            .cloned()
                            .ok_or_else(|| ArchiveError::UnknownScript {
                                path: entry.path.clone(),
                                script: name.clone(),
                            })?;
                    table.insert_script(&entry.hash, script);
                }
                (None, None) => {
                    return Err(ArchiveError::MissingPayload { path: entry.path });
                }
            }

            let node = FileNode::new(entry.path, entry.file_type, entry.hash);
            debug!("Archived {} ({})", node.path, node.file_type);
            nodes.insert(node.path.clone(), node);
        }

        info!("World archive loaded: {} files", nodes.len());
        Ok(Self { nodes, table })
    }

    pub fn node(&self, path: &str) -> Option<&FileNode> {
        self.nodes.get(path)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &FileNode> {
        self.nodes.values()
    }

    pub fn table(&self) -> &ContentTable {
        &self.table
    }
}
