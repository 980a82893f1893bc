//! Override templates in front of the built-in set.

use std::collections::BTreeSet;

use strata_core::{application::ports::TemplateStore, error::StrataResult};

use super::{DirectoryTemplateStore, EmbeddedTemplateStore};

/// Consults `overrides` first, then `base`.
///
/// The primary/fallback rule is applied by the caller per path, so an
/// override's `.tpl` fallback never shadows a built-in primary.
pub struct LayeredTemplateStore {
    overrides: Option<Box<dyn TemplateStore>>,
    base: Box<dyn TemplateStore>,
}

impl LayeredTemplateStore {
    pub fn new(base: impl TemplateStore + 'static) -> Self {
        Self {
            overrides: None,
            base: Box::new(base),
        }
    }

    pub fn with_overrides(mut self, overrides: impl TemplateStore + 'static) -> Self {
        self.overrides = Some(Box::new(overrides));
        self
    }

    /// Built-in templates, optionally behind an override directory.
    pub fn standard(override_dir: Option<&std::path::Path>) -> Self {
        let store = Self::new(EmbeddedTemplateStore::new());
        match override_dir {
            Some(dir) => store.with_overrides(DirectoryTemplateStore::new(dir)),
            None => store,
        }
    }

    /// Paths that the override layer replaces.
    pub fn overridden(&self) -> StrataResult<Vec<String>> {
        let Some(overrides) = &self.overrides else {
            return Ok(Vec::new());
        };
        let base: BTreeSet<String> = self.base.list()?.into_iter().collect();
        Ok(overrides
            .list()?
            .into_iter()
            .filter(|path| base.contains(path))
            .collect())
    }
}

impl TemplateStore for LayeredTemplateStore {
    fn load(&self, path: &str) -> StrataResult<Option<String>> {
        if let Some(overrides) = &self.overrides {
            if let Some(body) = overrides.load(path)? {
                return Ok(Some(body));
            }
        }
        self.base.load(path)
    }

    fn list(&self) -> StrataResult<Vec<String>> {
        let mut all: BTreeSet<String> = self.base.list()?.into_iter().collect();
        if let Some(overrides) = &self.overrides {
            all.extend(overrides.list()?);
        }
        Ok(all.into_iter().collect())
    }
}
