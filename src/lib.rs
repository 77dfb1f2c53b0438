pub mod config;
pub mod content;
pub mod handlers;
pub mod markup;
pub mod vfs;
