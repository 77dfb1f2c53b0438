use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::content::{ContentError, ContentSource};
use crate::vfs::FileNode;

use super::handler::{FileTypeHandler, HandlerSpec};

/// Registry mapping extension keys to handler instances.
///
/// Built once at startup and passed by reference to whatever performs
/// dispatch. Multiple keys may alias the same handler; the last
/// registration for a key wins, so installation order matters.
#[derive(Default)]
pub struct FileRegistry {
    handlers: BTreeMap<String, Arc<FileTypeHandler>>,
}

impl FileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with the built-in handlers.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        super::builtin::install_defaults(&mut registry);
        registry
    }

    /// Build a handler from `spec` and bind it under every listed
    /// extension, unconditionally overwriting prior bindings.
    pub fn install(&mut self, spec: HandlerSpec) -> Arc<FileTypeHandler> {
        let handler = Arc::new(FileTypeHandler::from_spec(spec));
        for key in handler.extensions() {
            if let Some(previous) = self.handlers.insert(key.clone(), handler.clone()) {
                warn!(
                    "Handler for '{key}' replaced (was bound to {:?})",
                    previous.extensions()
                );
            }
        }
        handler
    }

    pub fn get(&self, file_type: &str) -> Option<&Arc<FileTypeHandler>> {
        self.handlers.get(file_type)
    }

    pub fn has_handler(&self, file_type: &str) -> bool {
        self.handlers.contains_key(file_type)
    }

    /// Open `node`: resolve its handler by type, load its content, and
    /// delegate to the handler's `read` capability.
    ///
    /// Three outcomes, kept distinct:
    /// - no handler for the type: a user-facing message (`Ok(Some(_))`),
    ///   returned without consulting the content source;
    /// - type matched but the content carried no usable payload: `Ok(None)`;
    /// - unknown hash or failing loader: `Err`, propagated unchanged.
    pub async fn open(
        &self,
        node: &FileNode,
        source: &dyn ContentSource,
    ) -> Result<Option<String>, ContentError> {
        let Some(handler) = self.handlers.get(&node.file_type) else {
            warn!("File '{}' is not a recognized type.", node.path);
            return Ok(Some(format!(
                "File '{}' is not a recognized type.",
                node.full_name
            )));
        };

        info!("Opening {} at {}", node.full_name, node.path);

        match source.load(&node.hash).await? {
            Some(module) => {
                debug!("Reading file at path {}.", node.path);
                Ok(handler.read(node, module).await)
            }
            None => Ok(None),
        }
    }

    /// Examine `node`: same flow as [`open`](Self::open), delegating to the
    /// handler's `examine` capability. Handlers without the capability
    /// yield `Ok(None)`.
    pub async fn examine(
        &self,
        node: &FileNode,
        source: &dyn ContentSource,
    ) -> Result<Option<String>, ContentError> {
        let Some(handler) = self.handlers.get(&node.file_type) else {
            warn!("File '{}' is not a recognized type.", node.path);
            return Ok(Some(format!(
                "File '{}' is not a recognized type.",
                node.full_name
            )));
        };

        match source.load(&node.hash).await? {
            Some(module) => {
                debug!("Examining file at path {}.", node.path);
                Ok(handler.examine(node, &module))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentTable;
    use crate::handlers::handler::ReadFn;

    fn passthrough(extensions: &[&str]) -> HandlerSpec {
        let read: ReadFn =
            Box::new(|_node, module| Box::pin(async move { module.into_text() }));
        HandlerSpec {
            extensions: extensions.iter().map(|s| s.to_string()).collect(),
            read,
            examine: None,
        }
    }

    #[test]
    fn test_install_binds_every_extension() {
        let mut registry = FileRegistry::new();
        let handler = registry.install(passthrough(&["txt", "html"]));

        assert!(Arc::ptr_eq(registry.get("txt").unwrap(), &handler));
        assert!(Arc::ptr_eq(registry.get("html").unwrap(), &handler));
    }

    #[test]
    fn test_last_registration_wins() {
        let mut registry = FileRegistry::new();
        let first = registry.install(passthrough(&["html"]));
        let second = registry.install(passthrough(&["html"]));

        let bound = registry.get("html").unwrap();
        assert!(Arc::ptr_eq(bound, &second));
        assert!(!Arc::ptr_eq(bound, &first));
    }

    #[tokio::test]
    async fn test_open_unrecognized_type_skips_loader() {
        let registry = FileRegistry::new();
        // Empty table: any load attempt would be a HashNotFound error.
        let table = ContentTable::new();
        let node = FileNode::new("/home/player/strange.bin", "bin", "deadbeef");

        let result = registry.open(&node, &table).await.unwrap();
        let message = result.unwrap();
        assert!(message.contains("strange.bin"));
        assert!(message.contains("not a recognized type"));
    }

    #[tokio::test]
    async fn test_open_unknown_hash_rejects() {
        let mut registry = FileRegistry::new();
        registry.install(passthrough(&["txt"]));
        let table = ContentTable::new();
        let node = FileNode::new("/note.txt", "txt", "missing");

        let result = registry.open(&node, &table).await;
        assert!(matches!(result, Err(ContentError::HashNotFound(_))));
    }

    #[tokio::test]
    async fn test_open_passes_loaded_content_to_read() {
        let mut registry = FileRegistry::new();
        registry.install(passthrough(&["txt"]));

        let mut table = ContentTable::new();
        table.insert_text("h1", "hello");
        let node = FileNode::new("/note.txt", "txt", "h1");

        let out = registry.open(&node, &table).await.unwrap();
        assert_eq!(out.as_deref(), Some("hello"));
    }

    #[tokio::test]
    async fn test_open_missing_payload_is_none() {
        use crate::content::{ContentLoaderFn, ModuleShape};

        let mut registry = FileRegistry::new();
        registry.install(passthrough(&["txt"]));

        let mut table = ContentTable::new();
        let loader: ContentLoaderFn = Arc::new(|| Box::pin(async { Ok(ModuleShape::Empty) }));
        table.insert("h2", loader);
        let node = FileNode::new("/hollow.txt", "txt", "h2");

        let out = registry.open(&node, &table).await.unwrap();
        assert!(out.is_none());
    }

    #[tokio::test]
    async fn test_examine_without_capability_is_none() {
        let mut registry = FileRegistry::new();
        registry.install(passthrough(&["txt"]));

        let mut table = ContentTable::new();
        table.insert_text("h3", "hello");
        let node = FileNode::new("/note.txt", "txt", "h3");

        let out = registry.examine(&node, &table).await.unwrap();
        assert!(out.is_none());
    }

    #[test]
    fn test_isolated_registries_do_not_share_state() {
        let mut a = FileRegistry::new();
        a.install(passthrough(&["txt"]));
        let b = FileRegistry::new();

        assert!(a.has_handler("txt"));
        assert!(!b.has_handler("txt"));
    }
}
