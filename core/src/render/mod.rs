//! HTML rendering of an assembled document.

use crate::document::{Document, Page};
use crate::types::{LayoutConfig, Orientation};
use handlebars::Handlebars;
use serde::Serialize;
use thiserror::Error;

/// The built-in print template.
pub const DEFAULT_TEMPLATE: &str = include_str!("template.hbs");

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] Box<handlebars::TemplateError>),

    #[error("render error: {0}")]
    Render(#[from] handlebars::RenderError),
}

/// Template context with every field enumerated.
#[derive(Serialize)]
struct DocumentContext<'a> {
    title: &'a str,
    pages: &'a [Page],
    panel_count: usize,
    page_count: usize,
    rows: u32,
    columns: u32,
    is_portrait: bool,
    page_width: &'static str,
    page_height: &'static str,
    page_padding: &'a str,
    panel_padding: &'a str,
    image_filter: &'a str,
    page_direction: &'static str,
    footer: &'a str,
}

/// Fills an HTML template from a [`Document`] and its [`LayoutConfig`].
///
/// The template is compiled once at construction and discarded with the
/// renderer; there is no process-wide template state.
pub struct Renderer<'a> {
    registry: Handlebars<'a>,
}

impl Renderer<'_> {
    pub fn new(template: &str) -> Result<Self, RenderError> {
        let mut registry = Handlebars::new();
        registry
            .register_template_string("document", template)
            .map_err(Box::new)?;
        Ok(Self { registry })
    }

    pub fn render(&self, document: &Document, config: &LayoutConfig) -> Result<String, RenderError> {
        let context = DocumentContext {
            title: &config.title,
            pages: &document.pages,
            panel_count: document.panel_count,
            page_count: document.page_count,
            rows: config.rows,
            columns: config.columns,
            is_portrait: config.orientation == Orientation::Portrait,
            page_width: config.page_width(),
            page_height: config.page_height(),
            page_padding: &config.page_padding,
            panel_padding: &config.panel_padding,
            image_filter: &config.image_filter,
            page_direction: config.side.direction(),
            footer: &config.footer,
        };

        Ok(self.registry.render("document", &context)?)
    }
}
