//! File-type handlers for adventfs
//!
//! This module provides the extension-keyed registry that turns a file
//! node into rendered output, with no knowledge of how content is stored.
//!
//! ## Key Components
//!
//! - [`FileRegistry`] - Extension key to handler mapping, and the sole
//!   dispatch entry points `open` / `examine`
//! - [`FileTypeHandler`] - One strategy for one or more file types
//! - [`HandlerSpec`] - Configuration bag handlers are installed from
//! - [`install_defaults`] - The built-in text, document, and script handlers
//!
//! ## Example
//!
//! ```rust,ignore
//! use adventfs::handlers::FileRegistry;
//!
//! let registry = FileRegistry::with_defaults();
//! match registry.open(&node, &table).await? {
//!     Some(output) => println!("{output}"),
//!     None => println!("The file is empty."),
//! }
//! ```

mod builtin;
mod handler;
mod registry;

pub use builtin::{document_handler, install_defaults, script_handler, text_handler};
pub use handler::{ExamineFn, FileTypeHandler, HandlerSpec, ReadFn, ReadFuture};
pub use registry::FileRegistry;
