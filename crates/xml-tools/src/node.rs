//! Owned XML tree produced by the payload parser

use std::collections::HashMap;

/// Reserved key holding an element's inline text when it also has attributes or children
pub const TEXT_KEY: &str = "#text";

/// Prefix marking attribute keys (`<Account id="7">` becomes `@_id`)
pub const ATTRIBUTE_PREFIX: &str = "@_";

/// A node in a parsed payload
///
/// An element with neither attributes nor child elements collapses to a
/// [`XmlNode::Scalar`] holding its trimmed text. Repeated sibling elements
/// with the same name are grouped into a [`XmlNode::Sequence`] in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    /// Text-only element or attribute value
    Scalar(String),

    /// Element with attributes and/or child elements
    Element(XmlElement),

    /// Repeated sibling elements
    Sequence(Vec<XmlNode>),
}

impl XmlNode {
    /// Singular-value view: the first item of a sequence, or the node itself
    pub fn first(&self) -> Option<&XmlNode> {
        match self {
            XmlNode::Sequence(items) => items.first(),
            node => Some(node),
        }
    }

    /// Text content of the node
    ///
    /// Scalars yield their value, elements yield their `#text` entry (empty when
    /// absent) and sequences yield the text of their first item.
    pub fn text(&self) -> &str {
        match self {
            XmlNode::Scalar(s) => s.as_str(),
            XmlNode::Element(element) => match element.get(TEXT_KEY) {
                Some(XmlNode::Scalar(s)) => s.as_str(),
                _ => "",
            },
            XmlNode::Sequence(items) => items.first().map(XmlNode::text).unwrap_or(""),
        }
    }

    /// Get an element entry by key (attributes use the `@_` prefix)
    pub fn get(&self, key: &str) -> Option<&XmlNode> {
        match self {
            XmlNode::Element(element) => element.get(key),
            _ => None,
        }
    }

    /// Check whether this node is a scalar
    pub fn is_scalar(&self) -> bool {
        matches!(self, XmlNode::Scalar(_))
    }
}

/// Ordered key/value entries of an element
///
/// Keys keep the order in which they first appear in the document, so path
/// enumeration and serialization are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    entries: Vec<(String, XmlNode)>,
}

impl XmlElement {
    /// Create an empty element
    pub fn new() -> Self {
        Self::default()
    }

    /// Get an entry by key
    pub fn get(&self, key: &str) -> Option<&XmlNode> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, node)| node)
    }

    /// Iterate entries in document order
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&str, &XmlNode)> {
        self.entries.iter().map(|(k, node)| (k.as_str(), node))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the element has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append an entry, keeping insertion order
    pub(crate) fn push(&mut self, key: String, node: XmlNode) {
        self.entries.push((key, node));
    }
}

/// Accumulates child elements while grouping repeated names into sequences
#[derive(Default)]
pub(crate) struct ElementBuilder {
    element: XmlElement,
    index: HashMap<String, usize>,
}

impl ElementBuilder {
    pub(crate) fn attribute(&mut self, name: &str, value: &str) {
        self.element
            .push(format!("{ATTRIBUTE_PREFIX}{name}"), XmlNode::Scalar(value.to_string()));
    }

    pub(crate) fn child(&mut self, name: &str, node: XmlNode) {
        match self.index.get(name) {
            Some(&i) => {
                let slot = &mut self.element.entries[i].1;
                if let XmlNode::Sequence(items) = slot {
                    items.push(node);
                } else {
                    let previous = std::mem::replace(slot, XmlNode::Sequence(Vec::new()));
                    *slot = XmlNode::Sequence(vec![previous, node]);
                }
            }
            None => {
                self.index.insert(name.to_string(), self.element.len());
                self.element.push(name.to_string(), node);
            }
        }
    }

    /// Finish the element; text-only elements collapse to a scalar
    pub(crate) fn finish(mut self, text: String) -> XmlNode {
        if self.element.is_empty() {
            return XmlNode::Scalar(text);
        }
        if !text.is_empty() {
            self.element.push(TEXT_KEY.to_string(), XmlNode::Scalar(text));
        }
        XmlNode::Element(self.element)
    }
}
