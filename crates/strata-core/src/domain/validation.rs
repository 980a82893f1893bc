use crate::domain::{
    entities::{FeatureRequest, RepositoryRequest, ScreenRequest, UseCaseRequest},
    error::DomainError,
};
use std::path::{Component, Path};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_feature_request(request: &FeatureRequest) -> Result<(), DomainError> {
        Self::validate_segment("feature name", &request.feature_name)?;
        Self::validate_relative("root folder", &request.root_folder)?;
        for (kind, script) in &request.root_scripts {
            if script.trim().is_empty() {
                return Err(DomainError::InvalidRootScript {
                    entry: kind.to_string(),
                    reason: "script path is empty".into(),
                });
            }
        }
        Ok(())
    }

    pub fn validate_screen_request(request: &ScreenRequest) -> Result<(), DomainError> {
        Self::validate_identifier("screen name", &request.screen_name)
    }

    pub fn validate_repository_request(request: &RepositoryRequest) -> Result<(), DomainError> {
        Self::validate_identifier("repository name", &request.repository_name)
    }

    pub fn validate_use_case_request(request: &UseCaseRequest) -> Result<(), DomainError> {
        Self::validate_identifier("use case name", &request.use_case_name)
    }

    /// Non-empty, no separators, no `.`/`..`.
    pub fn validate_segment(field: &'static str, value: &str) -> Result<(), DomainError> {
        let reason = if value.trim().is_empty() {
            Some("must not be empty")
        } else if value.contains(['/', '\\']) {
            Some("must be a single path segment")
        } else if value == "." || value == ".." {
            Some("must not be a relative directory marker")
        } else {
            None
        };
        match reason {
            Some(reason) => Err(DomainError::InvalidName {
                field,
                value: value.to_string(),
                reason: reason.into(),
            }),
            None => Ok(()),
        }
    }

    /// A segment that is also usable as a Kotlin type name.
    pub fn validate_identifier(field: &'static str, value: &str) -> Result<(), DomainError> {
        Self::validate_segment(field, value)?;
        let mut chars = value.chars();
        let valid_start = chars
            .next()
            .is_some_and(|c| c.is_alphabetic() || c == '_');
        if !valid_start || !chars.all(|c| c.is_alphanumeric() || c == '_') {
            return Err(DomainError::InvalidName {
                field,
                value: value.to_string(),
                reason: "must start with a letter and contain only letters, digits or '_'".into(),
            });
        }
        Ok(())
    }

    /// Relative path without parent segments. Empty is allowed.
    pub fn validate_relative(field: &'static str, value: &str) -> Result<(), DomainError> {
        let path = Path::new(value);
        if path.is_absolute() || value.starts_with('/') || value.starts_with('\\') {
            return Err(DomainError::InvalidPath {
                path: value.to_string(),
                reason: format!("{} must be relative", field),
            });
        }
        if path.components().any(|c| matches!(c, Component::ParentDir)) {
            return Err(DomainError::InvalidPath {
                path: value.to_string(),
                reason: format!("{} must not contain '..'", field),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_nested_feature_names() {
        assert!(DomainValidator::validate_segment("feature name", "").is_err());
        assert!(DomainValidator::validate_segment("feature name", "a/b").is_err());
        assert!(DomainValidator::validate_segment("feature name", "..").is_err());
        assert!(DomainValidator::validate_segment("feature name", "catalog").is_ok());
    }

    #[test]
    fn identifiers_must_be_kotlin_names() {
        assert!(DomainValidator::validate_identifier("use case name", "GetItems").is_ok());
        assert!(DomainValidator::validate_identifier("use case name", "1Get").is_err());
        assert!(DomainValidator::validate_identifier("use case name", "Get-Items").is_err());
    }

    #[test]
    fn root_folder_must_be_relative() {
        assert!(DomainValidator::validate_relative("root folder", "features/shared").is_ok());
        assert!(DomainValidator::validate_relative("root folder", "").is_ok());
        assert!(DomainValidator::validate_relative("root folder", "/abs").is_err());
        assert!(DomainValidator::validate_relative("root folder", "../up").is_err());
    }

    #[test]
    fn feature_request_validation() {
        let ok = FeatureRequest::new("/p", "features", "catalog");
        assert!(DomainValidator::validate_feature_request(&ok).is_ok());

        let bad = FeatureRequest::new("/p", "features", "");
        assert!(matches!(
            DomainValidator::validate_feature_request(&bad),
            Err(DomainError::InvalidName { field: "feature name", .. })
        ));
    }
}
