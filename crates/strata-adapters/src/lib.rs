//! Infrastructure adapters for Strata.
//!
//! This crate implements the ports defined in `strata_core::application::ports`.
//! It contains all I/O: the local filesystem, the built-in and override
//! template stores, and the placeholder renderer.

pub mod filesystem;
pub mod renderer;
pub mod template_store;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::SimpleRenderer;
pub use template_store::{DirectoryTemplateStore, EmbeddedTemplateStore, LayeredTemplateStore};
