//! Component rendering
//!
//! Every component variant renders its content through [`RenderBlock`];
//! [`render_component`] dispatches on the variant and wraps the content in an
//! absolutely positioned container taken from the component's bounding box.

mod graphic;
mod table;
mod text;

// Re-export component types from schema
pub use crate::schema::{
    CalloutComponent, Component, DividerComponent, ImageComponent, PaymentComponent,
    TableColumn, TableComponent, TextComponent, TotalsComponent,
};

use crate::schema::{Binding, Position};
use crate::Result;
use std::fmt;
use xml_tools::XmlNode;

/// Trait for components that render markup from a payload
pub trait RenderBlock {
    /// Markup placed inside the component's positioned container
    fn render_content(&self, payload: &XmlNode) -> Result<String>;
}

/// Rendered markup for one component
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment(String);

impl Fragment {
    /// Fragment that contributes nothing to the document
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wrap content in an absolute-position container
    pub fn positioned(position: Position, content: &str) -> Self {
        Self(format!(
            r#"<fo:block-container absolute-position="absolute" left="{}" top="{}" width="{}" height="{}">{}</fo:block-container>"#,
            pt(position.x),
            pt(position.y),
            pt(position.width),
            pt(position.height),
            content
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Render a single component
///
/// Unknown component types produce an empty fragment.
pub fn render_component(component: &Component, payload: &XmlNode) -> Result<Fragment> {
    let (position, content) = match component {
        Component::Text(c) => (c.position, c.render_content(payload)?),
        Component::Image(c) => (c.position, c.render_content(payload)?),
        Component::Divider(c) => (c.position, c.render_content(payload)?),
        Component::Table(c) => (c.position, c.render_content(payload)?),
        Component::Totals(c) => (c.position, c.render_content(payload)?),
        Component::Payment(c) => (c.position, c.render_content(payload)?),
        Component::Callout(c) => (c.position, c.render_content(payload)?),
        Component::Unknown(c) => {
            log::warn!("component '{}': unknown type '{}' rendered empty", c.id, c.kind);
            return Ok(Fragment::empty());
        }
    };
    log::trace!("rendered {} component '{}'", component.kind(), component.id());
    Ok(Fragment::positioned(position, &content))
}

/// Resolve a binding, substituting the fallback when the value is empty
pub fn bound_value(binding: &Binding, payload: &XmlNode) -> Result<String> {
    let value = xml_tools::resolve(payload, &binding.path)?;
    Ok(or_fallback(value, binding))
}

pub(crate) fn or_fallback(value: String, binding: &Binding) -> String {
    if value.is_empty() {
        log::debug!("binding '{}' empty, using fallback", binding.path);
        binding.fallback.clone()
    } else {
        value
    }
}

/// Characters XML 1.0 allows in a document
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..)
}

/// Escape the five reserved markup characters
///
/// Carriage returns become `&#13;` so end-of-line normalization keeps them;
/// characters XML 1.0 forbids are dropped.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\r' => out.push_str("&#13;"),
            c if is_xml_char(c) => out.push(c),
            _ => {}
        }
    }
    out
}

/// Format a length in points
pub(crate) fn pt(value: f64) -> String {
    // fold -0.0 into 0.0
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value}pt")
}
