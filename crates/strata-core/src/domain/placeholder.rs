//! Placeholder substitution rules and template references.
//!
//! Templates carry two placeholder syntaxes side by side: a bracketed form
//! (`${PACKAGE}`) and a bare-token form (`NAMESPACE`). Older templates may
//! also contain a hard-coded namespace literal. All three are modeled as
//! [`SubstitutionRule`] variants applied in a fixed priority order:
//! bracketed, then bare, then literal.

use std::fmt;

/// Namespace literal baked into older module templates.
pub const LEGACY_NAMESPACE_LITERAL: &str = "com.strata.template.namespace";

/// One substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubstitutionRule {
    /// `${KEY}` → value
    Bracketed { key: String, value: String },
    /// `KEY` → value, anywhere in the text
    BareToken { key: String, value: String },
    /// Arbitrary literal → value
    Literal { from: String, to: String },
}

impl SubstitutionRule {
    fn priority(&self) -> u8 {
        match self {
            Self::Bracketed { .. } => 0,
            Self::BareToken { .. } => 1,
            Self::Literal { .. } => 2,
        }
    }

    fn pattern_len(&self) -> usize {
        match self {
            Self::Bracketed { key, .. } | Self::BareToken { key, .. } => key.len(),
            Self::Literal { from, .. } => from.len(),
        }
    }

    fn apply(&self, text: &str) -> String {
        match self {
            Self::Bracketed { key, value } => text.replace(&format!("${{{}}}", key), value),
            Self::BareToken { key, value } => text.replace(key.as_str(), value),
            Self::Literal { from, to } => text.replace(from.as_str(), to),
        }
    }
}

/// Ordered set of substitution rules.
///
/// Application order is stable: rules sort by syntax priority, and within
/// one syntax the longer pattern goes first so `PACKAGE_NAME` is never
/// clobbered by `PACKAGE`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderMap {
    rules: Vec<SubstitutionRule>,
}

impl PlaceholderMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a bracketed `${key}` rule.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add a bare-token rule.
    pub fn with_bare(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.rules.push(SubstitutionRule::BareToken {
            key: key.into(),
            value: value.into(),
        });
        self
    }

    /// Add a literal replacement.
    pub fn with_literal(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.rules.push(SubstitutionRule::Literal {
            from: from.into(),
            to: to.into(),
        });
        self
    }

    /// Insert or replace a bracketed rule.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        for rule in &mut self.rules {
            if let SubstitutionRule::Bracketed { key: k, value: v } = rule {
                if *k == key {
                    *v = value;
                    return;
                }
            }
        }
        self.rules.push(SubstitutionRule::Bracketed { key, value });
    }

    /// Value of the bracketed or bare rule named `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.rules.iter().find_map(|rule| match rule {
            SubstitutionRule::Bracketed { key: k, value }
            | SubstitutionRule::BareToken { key: k, value }
                if k == key =>
            {
                Some(value.as_str())
            }
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rules(&self) -> &[SubstitutionRule] {
        &self.rules
    }

    /// Replace every occurrence of every rule.
    pub fn apply(&self, text: &str) -> String {
        let mut ordered: Vec<&SubstitutionRule> = self.rules.iter().collect();
        ordered.sort_by(|a, b| {
            a.priority()
                .cmp(&b.priority())
                .then_with(|| b.pattern_len().cmp(&a.pattern_len()))
        });
        ordered
            .into_iter()
            .fold(text.to_string(), |acc, rule| rule.apply(&acc))
    }
}

/// Bracketed placeholders (`${IDENT}`) still present in `text`.
pub fn residual_placeholders(text: &str) -> Vec<String> {
    let mut found = Vec::new();
    let mut rest = text;
    while let Some(start) = rest.find("${") {
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                let name = &after[..end];
                if !name.is_empty()
                    && name
                        .chars()
                        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
                {
                    found.push(name.to_string());
                }
                rest = &after[end + 1..];
            }
            None => break,
        }
    }
    found
}

// ============================================================================
// TemplateRef
// ============================================================================

/// A logical template name plus its primary and fallback extensions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TemplateRef {
    logical_name: String,
    primary_extension: &'static str,
    fallback_extension: &'static str,
}

impl TemplateRef {
    pub fn new(
        logical_name: impl Into<String>,
        primary_extension: &'static str,
        fallback_extension: &'static str,
    ) -> Self {
        Self {
            logical_name: logical_name.into(),
            primary_extension,
            fallback_extension,
        }
    }

    /// Kotlin source template: `.kt`, falling back to `.tpl`.
    pub fn kotlin(logical_name: impl Into<String>) -> Self {
        Self::new(logical_name, "kt", "tpl")
    }

    /// Gradle Kotlin-DSL script template: `.gradle.kts`, falling back to `.gradle.kts.tpl`.
    pub fn gradle(logical_name: impl Into<String>) -> Self {
        Self::new(logical_name, "gradle.kts", "gradle.kts.tpl")
    }

    pub fn logical_name(&self) -> &str {
        &self.logical_name
    }

    pub fn primary_path(&self) -> String {
        format!("{}.{}", self.logical_name, self.primary_extension)
    }

    pub fn fallback_path(&self) -> String {
        format!("{}.{}", self.logical_name, self.fallback_extension)
    }
}

impl fmt::Display for TemplateRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.primary_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bracketed_replaces_every_occurrence() {
        let map = PlaceholderMap::new().with("PACKAGE", "com.acme");
        assert_eq!(
            map.apply("package ${PACKAGE}\nimport ${PACKAGE}.Foo"),
            "package com.acme\nimport com.acme.Foo"
        );
    }

    #[test]
    fn bracketed_wins_over_bare_token() {
        // Bare-first would turn `${PACKAGE}` into `${bare}`.
        let map = PlaceholderMap::new()
            .with_bare("PACKAGE", "bare")
            .with("PACKAGE", "bracketed");
        assert_eq!(map.apply("${PACKAGE} PACKAGE"), "bracketed bare");
    }

    #[test]
    fn longer_bare_token_applies_first() {
        let map = PlaceholderMap::new()
            .with_bare("NAME", "x")
            .with_bare("NAMESPACE", "com.acme.data");
        assert_eq!(map.apply("namespace = \"NAMESPACE\""), "namespace = \"com.acme.data\"");
    }

    #[test]
    fn literal_rule_applies_last() {
        let map = PlaceholderMap::new()
            .with_bare("NAMESPACE", "com.acme.catalog.data")
            .with_literal(LEGACY_NAMESPACE_LITERAL, "com.acme.catalog.data");
        let out = map.apply("a = \"NAMESPACE\"\nb = \"com.strata.template.namespace\"");
        assert_eq!(out, "a = \"com.acme.catalog.data\"\nb = \"com.acme.catalog.data\"");
    }

    #[test]
    fn insert_replaces_existing_key() {
        let mut map = PlaceholderMap::new().with("A", "1");
        map.insert("A", "2");
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("A"), Some("2"));
    }

    #[test]
    fn residuals_are_reported() {
        assert_eq!(
            residual_placeholders("ok ${NAME} and ${OTHER_1} but not ${lower} or $plain"),
            vec!["NAME".to_string(), "OTHER_1".to_string()]
        );
        assert!(residual_placeholders("fun x() = \"$value\"").is_empty());
    }

    #[test]
    fn template_ref_paths() {
        let r = TemplateRef::kotlin("presentationScreen/Screen");
        assert_eq!(r.primary_path(), "presentationScreen/Screen.kt");
        assert_eq!(r.fallback_path(), "presentationScreen/Screen.tpl");

        let g = TemplateRef::gradle("cleanArchitecture/module/data");
        assert_eq!(g.primary_path(), "cleanArchitecture/module/data.gradle.kts");
        assert_eq!(g.fallback_path(), "cleanArchitecture/module/data.gradle.kts.tpl");
    }
}
