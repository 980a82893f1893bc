//! Placeholder substitution renderer.

use strata_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::{PlaceholderMap, placeholder::residual_placeholders},
    error::StrataResult,
};
use tracing::instrument;

/// Renderer that applies a [`PlaceholderMap`] as text substitution.
///
/// In strict mode, output that still contains `${KEY}` placeholders is an
/// error instead of being returned.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRenderer {
    strict: bool,
}

impl SimpleRenderer {
    /// Create a new lenient renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer that rejects unresolved placeholders.
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip_all, fields(rules = placeholders.len()))]
    fn render(&self, source: &str, placeholders: &PlaceholderMap) -> StrataResult<String> {
        let rendered = placeholders.apply(source);
        if self.strict {
            let residual = residual_placeholders(&rendered);
            if !residual.is_empty() {
                return Err(ApplicationError::RenderingFailed {
                    reason: format!("unresolved placeholders: {}", residual.join(", ")),
                }
                .into());
            }
        }
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_both_syntaxes() {
        let map = PlaceholderMap::new()
            .with("PACKAGE", "com.acme")
            .with_bare("NAMESPACE", "com.acme.data");
        let out = SimpleRenderer::new()
            .render("package ${PACKAGE}\nnamespace = \"NAMESPACE\"\n", &map)
            .unwrap();
        assert_eq!(out, "package com.acme\nnamespace = \"com.acme.data\"\n");
    }

    #[test]
    fn lenient_mode_leaves_unknown_placeholders() {
        let out = SimpleRenderer::new()
            .render("${UNKNOWN}", &PlaceholderMap::new())
            .unwrap();
        assert_eq!(out, "${UNKNOWN}");
    }

    #[test]
    fn strict_mode_rejects_unknown_placeholders() {
        let err = SimpleRenderer::strict()
            .render("class ${NAME}", &PlaceholderMap::new())
            .unwrap_err();
        assert!(err.to_string().contains("${NAME}"));
    }
}
