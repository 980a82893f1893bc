pub mod artifact_request;
pub mod feature_request;
pub mod report;

pub use artifact_request::{DiOptions, RepositoryRequest, ScreenRequest, UseCaseRequest};
pub use feature_request::{DatasourceLayout, FeatureRequest, ModuleFlags};
pub use report::GenerationReport;
