//! Constructor-injected references for generated classes.
//!
//! Selected artifacts arrive either fully qualified (`com.acme.x.GetItems`)
//! or as a bare simple name (`GetItems`).

use crate::domain::naming::{lower_first, simple_name};
use std::collections::BTreeSet;

/// One injected dependency.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct InjectedRef {
    pub simple: String,
    /// Import target, when one is needed.
    pub fqn: Option<String>,
}

impl InjectedRef {
    /// Parse a selection. Simple names are imported from `home_package`
    /// when one is given.
    pub fn parse(selection: &str, home_package: Option<&str>) -> Option<Self> {
        let selection = selection.trim();
        if selection.is_empty() {
            return None;
        }
        let simple = simple_name(selection).to_string();
        let fqn = if selection.contains('.') {
            Some(selection.to_string())
        } else {
            home_package.map(|pkg| format!("{}.{}", pkg, selection))
        };
        Some(Self { simple, fqn })
    }

    pub fn parameter(&self) -> String {
        format!("private val {}: {}", lower_first(&self.simple), self.simple)
    }
}

/// Import lines and constructor parameters rendered for templates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Injection {
    refs: Vec<InjectedRef>,
}

impl Injection {
    /// Blank and duplicate selections are dropped; order is kept.
    pub fn from_selections<S: AsRef<str>>(selections: &[S], home_package: Option<&str>) -> Self {
        let mut seen = BTreeSet::new();
        let refs = selections
            .iter()
            .filter(|s| seen.insert(s.as_ref().trim().to_string()))
            .filter_map(|s| InjectedRef::parse(s.as_ref(), home_package))
            .collect();
        Self { refs }
    }

    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    /// `import <fqn>` lines, sorted by fully-qualified name.
    pub fn imports(&self) -> String {
        let fqns: BTreeSet<&str> = self.refs.iter().filter_map(|r| r.fqn.as_deref()).collect();
        fqns.into_iter()
            .map(|fqn| format!("import {}", fqn))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Constructor parameters, one per line.
    pub fn parameters(&self) -> String {
        self.refs
            .iter()
            .map(InjectedRef::parameter)
            .collect::<Vec<_>>()
            .join(",\n    ")
    }
}
