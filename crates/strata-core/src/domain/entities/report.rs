use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// What one generation call did.
///
/// `summary` is the human-readable sentence shown to the user; the other
/// fields back the JSON output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub summary: String,
    /// Modules or artifacts created by this call.
    pub created: Vec<String>,
    /// Modules or artifacts that already existed.
    pub existing: Vec<String>,
    /// Files written by this call.
    pub files_written: Vec<PathBuf>,
    pub manifest_updated: bool,
}

impl GenerationReport {
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            ..Self::default()
        }
    }

    /// Record one artifact file: created when `written`, existing otherwise.
    /// The artifact is named by the file stem.
    pub fn record_file(&mut self, path: PathBuf, written: bool) {
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        if written {
            self.created.push(name);
            self.files_written.push(path);
        } else {
            self.existing.push(name);
        }
    }

    pub fn created_nothing(&self) -> bool {
        self.created.is_empty() && self.files_written.is_empty()
    }
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_file_splits_created_and_existing() {
        let mut report = GenerationReport::new("done");
        report.record_file(PathBuf::from("/m/FooRepository.kt"), true);
        report.record_file(PathBuf::from("/m/FooRepositoryImpl.kt"), false);
        assert_eq!(report.created, vec!["FooRepository"]);
        assert_eq!(report.existing, vec!["FooRepositoryImpl"]);
        assert_eq!(report.files_written, vec![PathBuf::from("/m/FooRepository.kt")]);
        assert!(!report.created_nothing());
        assert_eq!(report.to_string(), "done");
    }
}
