use std::fmt;
use std::future::Future;
use std::pin::Pin;

use crate::content::ContentModule;
use crate::vfs::FileNode;

pub type ReadFuture = Pin<Box<dyn Future<Output = Option<String>> + Send>>;

/// Required capability: produce the displayable result of opening a file.
/// May suspend, e.g. when executable content performs async work.
pub type ReadFn = Box<dyn Fn(FileNode, ContentModule) -> ReadFuture + Send + Sync>;

/// Optional capability: produce a short inspection description, or `None`
/// when the content has nothing to say about itself.
pub type ExamineFn = Box<dyn Fn(&FileNode, &ContentModule) -> Option<String> + Send + Sync>;

/// Configuration bag a handler is built from.
///
/// Passed to [`FileRegistry::install`], which is the only way to construct
/// a handler - binding every listed extension happens as part of
/// construction, not as a separate step a caller could forget.
///
/// [`FileRegistry::install`]: super::FileRegistry::install
pub struct HandlerSpec {
    /// Extension keys this handler answers for.
    pub extensions: Vec<String>,
    pub read: ReadFn,
    pub examine: Option<ExamineFn>,
}

/// One strategy for interpreting content of one or more file types.
///
/// A single concrete type with optional behavior slots; handlers differ in
/// the closures they carry, not in their type. Stateless and immutable
/// after construction.
pub struct FileTypeHandler {
    extensions: Vec<String>,
    read: ReadFn,
    examine: Option<ExamineFn>,
}

impl FileTypeHandler {
    pub(super) fn from_spec(spec: HandlerSpec) -> Self {
        Self {
            extensions: spec.extensions,
            read: spec.read,
            examine: spec.examine,
        }
    }

    /// Extension keys this handler was installed under.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn can_examine(&self) -> bool {
        self.examine.is_some()
    }

    pub async fn read(&self, node: &FileNode, module: ContentModule) -> Option<String> {
        (self.read)(node.clone(), module).await
    }

    pub fn examine(&self, node: &FileNode, module: &ContentModule) -> Option<String> {
        self.examine.as_ref().and_then(|f| f(node, module))
    }
}

impl fmt::Debug for FileTypeHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileTypeHandler")
            .field("extensions", &self.extensions)
            .field("examine", &self.examine.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passthrough_spec() -> HandlerSpec {
        let read: ReadFn =
            Box::new(|_node, module| Box::pin(async move { module.into_text() }));
        HandlerSpec {
            extensions: vec!["txt".to_string()],
            read,
            examine: None,
        }
    }

    #[tokio::test]
    async fn test_read_delegates_to_slot() {
        let handler = FileTypeHandler::from_spec(passthrough_spec());
        let node = FileNode::new("/a.txt", "txt", "h");

        let out = handler
            .read(&node, ContentModule::Text("hello".to_string()))
            .await;
        assert_eq!(out.as_deref(), Some("hello"));
    }

    #[test]
    fn test_examine_without_slot_is_none() {
        let handler = FileTypeHandler::from_spec(passthrough_spec());
        let node = FileNode::new("/a.txt", "txt", "h");

        assert!(!handler.can_examine());
        assert!(
            handler
                .examine(&node, &ContentModule::Text("hello".to_string()))
                .is_none()
        );
    }
}
