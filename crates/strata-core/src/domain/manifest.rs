//! Module manifest (`settings.gradle[.kts]`) dialects and append logic.

use serde::Serialize;
use std::fmt;

/// Declaration syntax of the project manifest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum ManifestDialect {
    /// `settings.gradle.kts`: `include("<path>")`
    #[default]
    KotlinDsl,
    /// `settings.gradle`: `include '<path>'`
    Groovy,
}

impl ManifestDialect {
    /// Candidate file names, most modern first.
    pub const CANDIDATES: [ManifestDialect; 2] = [Self::KotlinDsl, Self::Groovy];

    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::KotlinDsl => "settings.gradle.kts",
            Self::Groovy => "settings.gradle",
        }
    }

    /// Pick the dialect from which manifest files exist.
    pub fn detect(kotlin_exists: bool, groovy_exists: bool) -> Self {
        match (kotlin_exists, groovy_exists) {
            (false, true) => Self::Groovy,
            _ => Self::KotlinDsl,
        }
    }

    pub fn include(&self, module_path: &str) -> ManifestDeclaration {
        ManifestDeclaration(match self {
            Self::KotlinDsl => format!("include(\"{}\")", module_path),
            Self::Groovy => format!("include '{}'", module_path),
        })
    }

    pub fn include_build(&self, dir: &str) -> ManifestDeclaration {
        ManifestDeclaration(match self {
            Self::KotlinDsl => format!("includeBuild(\"{}\")", dir),
            Self::Groovy => format!("includeBuild '{}'", dir),
        })
    }
}

/// One rendered include line. Identity is the exact text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ManifestDeclaration(String);

impl ManifestDeclaration {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ManifestDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Append every declaration not already present in `current`.
///
/// Presence is a substring check against the whole text. Returns `None`
/// when nothing was appended.
pub fn append_missing(current: &str, declarations: &[ManifestDeclaration]) -> Option<String> {
    let mut updated = current.to_string();
    let mut changed = false;
    for declaration in declarations {
        if updated.contains(declaration.as_str()) {
            continue;
        }
        if !updated.is_empty() && !updated.ends_with('\n') {
            updated.push('\n');
        }
        updated.push_str(declaration.as_str());
        updated.push('\n');
        changed = true;
    }
    changed.then_some(updated)
}
