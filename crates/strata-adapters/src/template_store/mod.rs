//! Template store adapters.

mod directory;
mod embedded;
mod layered;

pub use directory::DirectoryTemplateStore;
pub use embedded::EmbeddedTemplateStore;
pub use layered::LayeredTemplateStore;
