use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::error;

use super::{ContentModule, ModuleShape, ScriptModule};

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content with hash '{0}' not found")]
    HashNotFound(String),
    #[error("failed to load content for hash '{hash}': {reason}")]
    LoadFailed { hash: String, reason: String },
}

pub type LoadFuture = Pin<Box<dyn Future<Output = Result<ModuleShape, ContentError>> + Send>>;

/// Zero-argument loader for one table entry.
pub type ContentLoaderFn = Arc<dyn Fn() -> LoadFuture + Send + Sync>;

/// Resolves an opaque content hash to a loaded module.
///
/// The trait is async because loading may suspend; it is the only
/// suspension point in dispatch besides the handlers themselves.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Resolve `hash` to a normalized module.
    ///
    /// `Ok(None)` means the entry loaded but carried no usable payload.
    /// An unknown hash or a failing loader is an `Err`, never a silent
    /// `None` - those indicate a broken world build, not missing content.
    async fn load(&self, hash: &str) -> Result<Option<ContentModule>, ContentError>;
}

/// Lookup table mapping content hashes to loader functions.
///
/// Populated once while the world archive is built, read-only afterwards.
/// Whether a loader caches its result is the loader's business; calling
/// [`ContentSource::load`] repeatedly with the same hash is always safe.
#[derive(Clone, Default)]
pub struct ContentTable {
    entries: HashMap<String, ContentLoaderFn>,
}

impl ContentTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, hash: impl Into<String>, loader: ContentLoaderFn) {
        self.entries.insert(hash.into(), loader);
    }

    /// Register inline text content under `hash`.
    pub fn insert_text(&mut self, hash: impl Into<String>, text: impl Into<String>) {
        let text = text.into();
        let loader: ContentLoaderFn = Arc::new(move || {
            let module = ContentModule::Text(text.clone());
            Box::pin(async move { Ok(ModuleShape::Bare(module)) })
        });
        self.insert(hash, loader);
    }

    /// Register a script module under `hash`.
    ///
    /// Scripts come out of the build wrapped in a default slot, so the
    /// normalization path is exercised on every script load.
    pub fn insert_script(&mut self, hash: impl Into<String>, script: ScriptModule) {
        let loader: ContentLoaderFn = Arc::new(move || {
            let module = ContentModule::Script(script.clone());
            Box::pin(async move { Ok(ModuleShape::DefaultExport(module)) })
        });
        self.insert(hash, loader);
    }

    pub fn contains(&self, hash: &str) -> bool {
        self.entries.contains_key(hash)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl ContentSource for ContentTable {
    async fn load(&self, hash: &str) -> Result<Option<ContentModule>, ContentError> {
        let Some(loader) = self.entries.get(hash) else {
            error!("content with hash '{hash}' not found");
            return Err(ContentError::HashNotFound(hash.to_string()));
        };

        match loader().await {
            Ok(shape) => Ok(shape.normalize()),
            Err(err) => {
                error!("error loading content with hash '{hash}': {err}");
                Err(err)
            }
        }
    }
}
