//! Path and package derivation.
//!
//! Every generated artifact is addressed three ways: a directory on disk, a
//! dotted package, and a colon-separated Gradle project path. The functions
//! here derive all three from the same inputs, purely, so the services never
//! build them by hand.

use crate::domain::value_objects::ModuleKind;
use std::path::{Path, PathBuf};

/// Org segment used when none is given and none can be detected.
pub const DEFAULT_ORG_SEGMENT: &str = "example";

/// Kotlin source root inside a module.
pub const MAIN_SOURCE_ROOT: &str = "src/main/kotlin";
/// Resource root inside a module.
pub const MAIN_RESOURCE_ROOT: &str = "src/main/resources";
/// Test source root inside a module.
pub const TEST_SOURCE_ROOT: &str = "src/test/kotlin";

/// Kotlin-DSL build script file name.
pub const BUILD_SCRIPT_KTS: &str = "build.gradle.kts";
/// Groovy build script file name.
pub const BUILD_SCRIPT_GROOVY: &str = "build.gradle";

/// Directory holding the convention-plugin build.
pub const BUILD_LOGIC_DIR: &str = "build-logic";

/// Normalize separators to `/`.
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Split a root folder like `features/shared` into its non-empty segments.
pub fn root_segments(root_folder: &str) -> Vec<&str> {
    root_folder
        .split(['/', '\\'])
        .filter(|s| !s.is_empty() && *s != ".")
        .collect()
}

/// Trimmed org segment, or [`DEFAULT_ORG_SEGMENT`] when blank.
pub fn org_or_default(org: &str) -> &str {
    let trimmed = org.trim();
    if trimmed.is_empty() {
        DEFAULT_ORG_SEGMENT
    } else {
        trimmed
    }
}

/// `com.<org>.<root...>.<feature>.<suffix>`.
///
/// Nested root folders contribute one package segment per path segment; an
/// empty root folder contributes none.
pub fn base_package(org: &str, root_folder: &str, feature: &str, suffix: &str) -> String {
    let mut parts = vec!["com", org_or_default(org)];
    parts.extend(root_segments(root_folder));
    parts.push(feature);
    parts.push(suffix);
    parts.join(".")
}

/// Directory (relative to a module) that holds sources for `package`.
pub fn package_dir(package: &str) -> PathBuf {
    let mut dir = PathBuf::from(MAIN_SOURCE_ROOT);
    for segment in package.split('.').filter(|s| !s.is_empty()) {
        dir.push(segment);
    }
    dir
}

/// Project-relative path segments of `dir`.
///
/// Separators are normalized, `.` segments are dropped and the
/// project-root prefix is stripped textually; when `dir` equals the root,
/// the result is empty.
fn relative_segments(project_root: &Path, dir: &Path) -> Vec<String> {
    let base = to_forward_slashes(project_root);
    let base = base.trim_end_matches('/');
    let full = to_forward_slashes(dir);
    let relative = full.strip_prefix(base).unwrap_or(&full);
    relative
        .split('/')
        .filter(|s| !s.is_empty() && *s != ".")
        .map(str::to_string)
        .collect()
}

/// Project-relative path of `dir` with `/` separators.
pub fn relative_dir(project_root: &Path, dir: &Path) -> String {
    relative_segments(project_root, dir).join("/")
}

/// Gradle project path for `module` inside `feature_dir`.
///
/// ```
/// use std::path::Path;
/// use strata_core::domain::naming::gradle_path_for;
///
/// let path = gradle_path_for(
///     Path::new("/work/app"),
///     Path::new("/work/app/features/shared/payments"),
///     "domain",
/// );
/// assert_eq!(path, ":features:shared:payments:domain");
/// ```
pub fn gradle_path_for(project_root: &Path, feature_dir: &Path, module: &str) -> String {
    let mut segments = relative_segments(project_root, feature_dir);
    segments.push(module.to_string());
    format!(":{}", segments.join(":"))
}

/// Gradle path prefix shared by every module of a feature, e.g. `:features:catalog`.
pub fn feature_gradle_prefix(project_root: &Path, feature_dir: &Path) -> String {
    format!(":{}", relative_segments(project_root, feature_dir).join(":"))
}

/// Package and manifest path of one module, derived together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedNaming {
    pub base_package: String,
    pub module_gradle_path: String,
}

impl DerivedNaming {
    pub fn derive(
        project_root: &Path,
        root_folder: &str,
        feature: &str,
        org: &str,
        kind: ModuleKind,
    ) -> Self {
        let feature_dir = project_root.join(root_folder).join(feature);
        Self {
            base_package: base_package(org, root_folder, feature, kind.package_suffix()),
            module_gradle_path: gradle_path_for(project_root, &feature_dir, kind.as_str()),
        }
    }
}

// ============================================================================
// Identifier helpers
// ============================================================================

pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Strip `suffix` from the end of `s`, ignoring ASCII case.
pub fn strip_suffix_ignore_case<'a>(s: &'a str, suffix: &str) -> &'a str {
    if s.len() >= suffix.len() && s.is_char_boundary(s.len() - suffix.len()) {
        let (head, tail) = s.split_at(s.len() - suffix.len());
        if tail.eq_ignore_ascii_case(suffix) {
            return head;
        }
    }
    s
}

/// Last dotted segment of a fully-qualified name.
pub fn simple_name(fqn: &str) -> &str {
    fqn.rsplit('.').next().unwrap_or(fqn)
}
