//! Where an anchor module sits, and the names that follow from it.
//!
//! Single-artifact generators start from one module directory (for example
//! `<root>/<feature>/data`). The feature name, the root folder and the org
//! segment in use are all derived from that location.

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{
        ModuleKind,
        naming::{self, MAIN_SOURCE_ROOT},
    },
    error::StrataResult,
};
use std::path::{Path, PathBuf};
use tracing::debug;

/// First package directory under `src/main/kotlin/com` of `module_dir`.
fn org_in_module(fs: &dyn Filesystem, module_dir: &Path) -> StrataResult<Option<String>> {
    let com = module_dir.join(MAIN_SOURCE_ROOT).join("com");
    if !fs.is_dir(&com) {
        return Ok(None);
    }
    Ok(fs
        .list_dirs(&com)?
        .first()
        .and_then(|d| d.file_name())
        .map(|n| n.to_string_lossy().into_owned()))
}

/// Org segment already used by `module_dir` or one of its siblings.
///
/// Looks at the module itself first, then at every sibling module in name
/// order. Modules that do not exist yet are skipped.
pub fn detect_org_segment(fs: &dyn Filesystem, module_dir: &Path) -> Option<String> {
    if let Ok(Some(org)) = org_in_module(fs, module_dir) {
        return Some(org);
    }
    let feature_dir = module_dir.parent()?;
    let siblings = fs.list_dirs(feature_dir).ok()?;
    siblings
        .iter()
        .filter(|sibling| sibling.as_path() != module_dir)
        .find_map(|sibling| org_in_module(fs, sibling).ok().flatten())
}

/// [`detect_org_segment`], falling back to the default org segment.
pub fn resolve_org_segment(fs: &dyn Filesystem, module_dir: &Path) -> String {
    match detect_org_segment(fs, module_dir) {
        Some(org) => org,
        None => {
            debug!(module = %module_dir.display(), "no org segment found, using default");
            naming::DEFAULT_ORG_SEGMENT.to_string()
        }
    }
}

/// Location of an anchor module within the project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleContext {
    pub project_root: PathBuf,
    pub module_dir: PathBuf,
    pub feature_dir: PathBuf,
    pub feature_name: String,
    /// Project-relative directory holding the feature, `/`-separated.
    pub root_folder: String,
    pub org: String,
}

impl ModuleContext {
    /// Resolve `module_dir` (absolute, or relative to `project_root`).
    ///
    /// Both paths are made absolute against the working directory first, so
    /// a relative project and an absolute module share one prefix.
    pub fn resolve(
        fs: &dyn Filesystem,
        project_root: &Path,
        module_dir: &Path,
    ) -> StrataResult<Self> {
        let project_root = absolute(project_root, "project root")?;
        if !fs.is_dir(&project_root) {
            return Err(ApplicationError::ProjectRootNotFound { path: project_root }.into());
        }
        let module_dir = if module_dir.is_absolute() {
            absolute(module_dir, "module directory")?
        } else {
            project_root.join(module_dir)
        };
        let feature_dir = module_dir
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| ApplicationError::Unresolvable {
                what: "feature directory",
                path: module_dir.clone(),
            })?
            .to_path_buf();
        let feature_name = feature_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| ApplicationError::Unresolvable {
                what: "feature name",
                path: module_dir.clone(),
            })?;
        let root_folder = feature_dir
            .parent()
            .map(|root| naming::relative_dir(&project_root, root))
            .unwrap_or_default();
        let org = resolve_org_segment(fs, &module_dir);

        Ok(Self {
            project_root,
            module_dir,
            feature_dir,
            feature_name,
            root_folder,
            org,
        })
    }

    /// Directory name of the anchor module.
    pub fn module_name(&self) -> String {
        self.module_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Whether the anchor module is named for `kind` (ASCII case-insensitive).
    pub fn is_kind(&self, kind: ModuleKind) -> bool {
        self.module_name().eq_ignore_ascii_case(kind.as_str())
    }

    /// `com.<org>.<root>.<feature>.<suffix>`
    pub fn package(&self, suffix: &str) -> String {
        naming::base_package(&self.org, &self.root_folder, &self.feature_name, suffix)
    }

    /// Directory of a sibling module of the given kind.
    pub fn sibling(&self, kind: ModuleKind) -> PathBuf {
        self.feature_dir.join(kind.as_str())
    }

    /// `:<root>:<feature>`
    pub fn feature_prefix(&self) -> String {
        naming::feature_gradle_prefix(&self.project_root, &self.feature_dir)
    }

    /// Gradle path of a module in this feature.
    pub fn gradle_path(&self, module: &str) -> String {
        naming::gradle_path_for(&self.project_root, &self.feature_dir, module)
    }
}

fn absolute(path: &Path, what: &'static str) -> StrataResult<PathBuf> {
    std::path::absolute(path).map_err(|_| {
        ApplicationError::Unresolvable {
            what,
            path: path.to_path_buf(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::FakeFs;

    #[test]
    fn detects_org_in_module_itself() {
        let fs = FakeFs::with_root("/p");
        fs.mkdir("/p/features/catalog/data/src/main/kotlin/com/acme/features");
        assert_eq!(
            detect_org_segment(&fs, Path::new("/p/features/catalog/data")),
            Some("acme".into())
        );
    }

    #[test]
    fn detects_org_in_sibling() {
        let fs = FakeFs::with_root("/p");
        fs.mkdir("/p/features/catalog/presentation");
        fs.mkdir("/p/features/catalog/domain/src/main/kotlin/com/zeta/x");
        assert_eq!(
            detect_org_segment(&fs, Path::new("/p/features/catalog/presentation")),
            Some("zeta".into())
        );
    }

    #[test]
    fn missing_modules_fall_back_to_default() {
        let fs = FakeFs::with_root("/p");
        assert_eq!(
            resolve_org_segment(&fs, Path::new("/p/features/none/data")),
            naming::DEFAULT_ORG_SEGMENT
        );
    }

    #[test]
    fn resolves_nested_root_context() {
        let fs = FakeFs::with_root("/p");
        fs.mkdir("/p/features/shared/payments/data/src/main/kotlin/com/acme");
        let ctx = ModuleContext::resolve(&fs, Path::new("/p"), Path::new("features/shared/payments/data"))
            .unwrap();
        assert_eq!(ctx.feature_name, "payments");
        assert_eq!(ctx.root_folder, "features/shared");
        assert_eq!(ctx.org, "acme");
        assert!(ctx.is_kind(ModuleKind::Data));
        assert_eq!(ctx.package("domain"), "com.acme.features.shared.payments.domain");
        assert_eq!(ctx.feature_prefix(), ":features:shared:payments");
        assert_eq!(ctx.gradle_path("domain"), ":features:shared:payments:domain");
    }

    #[test]
    fn relative_project_and_absolute_module_share_one_prefix() {
        let root = std::env::current_dir().unwrap().join("shop");
        let module = root.join("features/catalog/domain");
        let fs = FakeFs::with_root(root.to_str().unwrap());
        fs.mkdir(&module);

        let ctx = ModuleContext::resolve(&fs, Path::new("./shop"), &module).unwrap();
        assert_eq!(ctx.project_root, root);
        assert_eq!(ctx.root_folder, "features");
        assert_eq!(ctx.feature_prefix(), ":features:catalog");
        assert_eq!(ctx.gradle_path("data"), ":features:catalog:data");
        assert_eq!(ctx.package("domain"), "com.example.features.catalog.domain");
    }

    #[test]
    fn missing_project_root_is_an_error() {
        let fs = FakeFs::default();
        assert!(ModuleContext::resolve(&fs, Path::new("/nope"), Path::new("a/b")).is_err());
    }
}
