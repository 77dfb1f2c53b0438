//! Content model for virtual files
//!
//! A loaded piece of content is either inert data to display as-is, or a
//! script module that supplies behavior. The two shapes are distinguished
//! by the [`ContentModule`] discriminant rather than probed at runtime.
//!
//! ## Key Components
//!
//! - [`ContentModule`] - Resolved payload for a content hash
//! - [`ScriptModule`] - Executable content with optional capability slots
//! - [`ModuleShape`] - Raw loader output before normalization
//! - [`ContentSource`] / [`ContentTable`] - Hash-to-module resolution

mod loader;

pub use loader::{ContentError, ContentLoaderFn, ContentSource, ContentTable, LoadFuture};

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Capability function supplied by a script module.
///
/// Capabilities come entirely from the game build, never from player input.
pub type ScriptFn = Arc<dyn Fn() -> String + Send + Sync>;

/// Executable content: a bag of optional behavior slots.
#[derive(Clone, Default)]
pub struct ScriptModule {
    /// Produces the primary output when the file is read.
    pub run: Option<ScriptFn>,
    /// Produces a short inspection description.
    pub examine: Option<ScriptFn>,
}

impl fmt::Debug for ScriptModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScriptModule")
            .field("run", &self.run.is_some())
            .field("examine", &self.examine.is_some())
            .finish()
    }
}

/// Resolved payload for a content hash.
#[derive(Clone, Debug)]
pub enum ContentModule {
    /// Display-ready data (plain text or markup).
    Text(String),
    /// Content that supplies behavior instead of data.
    Script(ScriptModule),
}

impl ContentModule {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentModule::Text(text) => Some(text.as_str()),
            ContentModule::Script(_) => None,
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            ContentModule::Text(text) => Some(text),
            ContentModule::Script(_) => None,
        }
    }

    pub fn as_script(&self) -> Option<&ScriptModule> {
        match self {
            ContentModule::Script(script) => Some(script),
            ContentModule::Text(_) => None,
        }
    }
}

/// Shape of a freshly loaded module, before normalization.
///
/// Build tooling may wrap a payload in a conventional default slot; the
/// loader unwraps it so handlers always see the payload itself.
#[derive(Clone, Debug)]
pub enum ModuleShape {
    /// Payload lives in the module's default slot; unwrap it.
    DefaultExport(ContentModule),
    /// Payload is the module value itself.
    Bare(ContentModule),
    /// Module loaded but carries no usable payload.
    Empty,
}

impl ModuleShape {
    /// Collapse to the payload handlers consume, if any.
    pub fn normalize(self) -> Option<ContentModule> {
        match self {
            ModuleShape::DefaultExport(module) | ModuleShape::Bare(module) => Some(module),
            ModuleShape::Empty => None,
        }
    }
}

/// Named script modules registered by the game binary, referenced from
/// archive entries by name.
pub type ScriptLibrary = BTreeMap<String, ScriptModule>;
