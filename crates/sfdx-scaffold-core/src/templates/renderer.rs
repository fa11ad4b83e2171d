//! Handlebars-based renderer for the text assets (README, package.xml).
//!
//! Wraps the [`handlebars::Handlebars`] engine with **strict mode** enabled, so any
//! `{{variable}}` missing from the data context is an error instead of an empty string.
//!
//! Two flavours differ only in how substituted values are escaped:
//! - [`TemplateRenderer::markdown`] writes values as-is.
//! - [`TemplateRenderer::xml`] uses [`handlebars::html_escape`]. Its output is
//!   `&amp;`, `&lt;`, `&gt;`, `&quot;` and numeric character references, all valid
//!   XML, so a value can never break the surrounding document.

use handlebars::Handlebars;
use serde_json::Value;

use crate::error::{Result, ScaffoldError};

/// Template renderer used for the non-JSON project files.
pub struct TemplateRenderer {
    hbs: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Renderer for Markdown and other plain-text output.
    pub fn markdown() -> Self {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        hbs.register_escape_fn(handlebars::no_escape);
        Self { hbs }
    }

    /// Renderer for XML output.
    pub fn xml() -> Self {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        hbs.register_escape_fn(handlebars::html_escape);
        Self { hbs }
    }

    /// Render a template string with the given data context.
    pub fn render(&self, template: &str, data: &Value) -> Result<String> {
        self.hbs
            .render_template(template, data)
            .map_err(|e| ScaffoldError::TemplateRender(e.to_string()))
    }
}
