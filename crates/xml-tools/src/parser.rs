//! XML payload parsing

use crate::node::{ElementBuilder, XmlElement, XmlNode};
use crate::{Result, XmlError};
use serde::{Deserialize, Serialize};

fn default_max_bytes() -> usize {
    8 * 1024 * 1024
}

fn default_max_depth() -> usize {
    128
}

fn default_max_nodes() -> u32 {
    1_000_000
}

/// Ceilings applied to untrusted payloads
///
/// Payloads originate from tenants, so every parse is bounded in size,
/// node count and nesting depth.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ParseLimits {
    /// Maximum payload size in bytes
    #[serde(default = "default_max_bytes")]
    pub max_bytes: usize,

    /// Maximum element nesting depth
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Maximum number of XML nodes (elements, attributes, text)
    #[serde(default = "default_max_nodes")]
    pub max_nodes: u32,
}

impl Default for ParseLimits {
    fn default() -> Self {
        Self {
            max_bytes: default_max_bytes(),
            max_depth: default_max_depth(),
            max_nodes: default_max_nodes(),
        }
    }
}

/// Parse an XML payload with the default [`ParseLimits`]
pub fn parse(xml: &str) -> Result<XmlNode> {
    parse_with_limits(xml, &ParseLimits::default())
}

/// Parse an XML payload into an owned tree
///
/// The returned node is an element keyed by the document element's name,
/// so `/Case/...` paths start at the document element. DTDs are rejected.
/// No partial tree is returned on failure.
pub fn parse_with_limits(xml: &str, limits: &ParseLimits) -> Result<XmlNode> {
    if xml.len() > limits.max_bytes {
        return Err(XmlError::PayloadTooLarge {
            size: xml.len(),
            limit: limits.max_bytes,
        });
    }

    let mut options = roxmltree::ParsingOptions::default();
    options.allow_dtd = false;
    options.nodes_limit = limits.max_nodes;

    let doc = roxmltree::Document::parse_with_options(xml, options)?;
    let root = doc.root_element();

    let mut top = XmlElement::new();
    top.push(
        root.tag_name().name().to_string(),
        convert_element(root, 1, limits.max_depth)?,
    );

    log::debug!(
        "parsed XML payload: {} bytes, root <{}>",
        xml.len(),
        root.tag_name().name()
    );
    Ok(XmlNode::Element(top))
}

fn convert_element(node: roxmltree::Node, depth: usize, max_depth: usize) -> Result<XmlNode> {
    if depth > max_depth {
        return Err(XmlError::TooDeep(max_depth));
    }

    let mut builder = ElementBuilder::default();
    for attr in node.attributes() {
        builder.attribute(attr.name(), attr.value());
    }

    let mut text = String::new();
    for child in node.children() {
        if child.is_element() {
            let converted = convert_element(child, depth + 1, max_depth)?;
            builder.child(child.tag_name().name(), converted);
        } else if child.is_text() {
            if let Some(t) = child.text() {
                text.push_str(t);
            }
        }
    }

    Ok(builder.finish(text.trim().to_string()))
}
