//! Template Service - resolve and render template resources.
//!
//! Resolution tries the primary resource, then the extension-swapped
//! fallback. A missing template is a hard failure unless the caller asks
//! for an optional lookup or supplies a default.

use crate::{
    application::{
        ApplicationError,
        ports::{TemplateRenderer, TemplateStore},
    },
    domain::{PlaceholderMap, TemplateRef, placeholder::residual_placeholders},
    error::StrataResult,
};
use std::sync::Arc;
use tracing::{trace, warn};

/// Service for template lookup and rendering.
#[derive(Clone)]
pub struct TemplateService {
    store: Arc<dyn TemplateStore>,
    renderer: Arc<dyn TemplateRenderer>,
}

impl TemplateService {
    pub fn new(store: Arc<dyn TemplateStore>, renderer: Arc<dyn TemplateRenderer>) -> Self {
        Self { store, renderer }
    }

    /// Raw template text, or `None` when neither resource exists.
    pub fn find(&self, template: &TemplateRef) -> StrataResult<Option<String>> {
        if let Some(text) = self.store.load(&template.primary_path())? {
            trace!(template = %template.primary_path(), "template resolved");
            return Ok(Some(text));
        }
        let fallback = self.store.load(&template.fallback_path())?;
        if fallback.is_some() {
            trace!(template = %template.fallback_path(), "template resolved via fallback");
        }
        Ok(fallback)
    }

    /// Raw template text; fails if neither resource exists.
    pub fn resolve(&self, template: &TemplateRef) -> StrataResult<String> {
        self.find(template)?.ok_or_else(|| {
            ApplicationError::TemplateNotFound {
                name: template.primary_path(),
            }
            .into()
        })
    }

    /// Resolve and substitute; fails if the template is missing.
    pub fn render(
        &self,
        template: &TemplateRef,
        placeholders: &PlaceholderMap,
    ) -> StrataResult<String> {
        let source = self.resolve(template)?;
        self.render_source(template, &source, placeholders)
    }

    /// Resolve and substitute, or `None` when the template is missing.
    pub fn render_optional(
        &self,
        template: &TemplateRef,
        placeholders: &PlaceholderMap,
    ) -> StrataResult<Option<String>> {
        match self.find(template)? {
            Some(source) => self
                .render_source(template, &source, placeholders)
                .map(Some),
            None => Ok(None),
        }
    }

    /// Resolve and substitute, using `default` as the source when missing.
    pub fn render_or(
        &self,
        template: &TemplateRef,
        default: &str,
        placeholders: &PlaceholderMap,
    ) -> StrataResult<String> {
        let source = self
            .find(template)?
            .unwrap_or_else(|| default.to_string());
        self.render_source(template, &source, placeholders)
    }

    /// Every template path the store can serve.
    pub fn list(&self) -> StrataResult<Vec<String>> {
        self.store.list()
    }

    fn render_source(
        &self,
        template: &TemplateRef,
        source: &str,
        placeholders: &PlaceholderMap,
    ) -> StrataResult<String> {
        let rendered = self.renderer.render(source, placeholders)?;
        let residual = residual_placeholders(&rendered);
        if !residual.is_empty() {
            warn!(
                template = %template,
                placeholders = ?residual,
                "rendered template still contains placeholders"
            );
        }
        Ok(rendered)
    }
}
