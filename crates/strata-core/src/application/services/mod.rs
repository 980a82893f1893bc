//! Application services - orchestrate use cases.
//!
//! Four orchestrators sit on top of a handful of building blocks:
//!
//! - [`FeatureService`], [`ScreenService`], [`RepositoryService`] and
//!   [`UseCaseService`] are the entry points, one per generator.
//! - [`ModuleScaffolder`], [`ManifestSynchronizer`], [`BuildLogicGenerator`]
//!   and [`DependencyWiring`] each own one kind of file.
//! - [`TemplateService`] and [`IdempotentWriter`] sit underneath everything.

pub mod build_logic;
pub mod dependency_wiring;
pub mod feature_service;
pub mod manifest_sync;
pub mod module_context;
pub mod module_scaffolder;
pub mod repository_service;
pub mod scope;
pub mod screen_service;
pub mod template_service;
pub mod usecase_service;
pub mod writer;

pub use build_logic::BuildLogicGenerator;
pub use dependency_wiring::DependencyWiring;
pub use feature_service::FeatureService;
pub use manifest_sync::ManifestSynchronizer;
pub use module_context::ModuleContext;
pub use module_scaffolder::{ModuleScaffolder, ModuleSpec};
pub use repository_service::RepositoryService;
pub use scope::MutationScope;
pub use screen_service::ScreenService;
pub use template_service::TemplateService;
pub use usecase_service::UseCaseService;
pub use writer::IdempotentWriter;
