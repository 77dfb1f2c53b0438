//! Virtual filesystem nodes and world archives
//!
//! Nodes describe where content appears in the simulated filesystem; the
//! archive turns a TOML world file into nodes plus a populated content
//! table. Dispatch only ever reads nodes, it never owns or mutates them.

mod archive;

pub use archive::{Archive, ArchiveError};

use serde::{Deserialize, Serialize};

/// One entry in the simulated filesystem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileNode {
    /// Display path, e.g. `/home/player/readme.txt`.
    pub path: String,
    /// Display name, the last path segment.
    pub full_name: String,
    /// Extension key used to pick a handler.
    pub file_type: String,
    /// Opaque content identifier resolved through the content table.
    pub hash: String,
}

impl FileNode {
    pub fn new(
        path: impl Into<String>,
        file_type: impl Into<String>,
        hash: impl Into<String>,
    ) -> Self {
        let path = path.into();
        let full_name = path.rsplit('/').next().unwrap_or(path.as_str()).to_string();
        Self {
            path,
            full_name,
            file_type: file_type.into(),
            hash: hash.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_is_last_segment() {
        let node = FileNode::new("/home/player/readme.txt", "txt", "abc");
        assert_eq!(node.full_name, "readme.txt");
    }

    #[test]
    fn test_full_name_of_bare_name() {
        let node = FileNode::new("note.txt", "txt", "abc");
        assert_eq!(node.full_name, "note.txt");
    }
}
