//! Binding-path resolution
//!
//! A binding path is an absolute, `/`-delimited list of element names such as
//! `/Case/Debts/Debt/Amount`. Attributes are addressed with the `@_` prefix
//! (`/Case/Account/@_id`). There are no predicates or indices.

use crate::node::XmlNode;
use crate::{Result, XmlError};

/// Separator between path segments
pub const PATH_SEPARATOR: char = '/';

/// Split an absolute path into its element-name segments
///
/// Empty segments (`//`, trailing `/`) are ignored. Fails with
/// [`XmlError::InvalidPath`] when the path does not start with `/`.
pub fn path_segments(path: &str) -> Result<Vec<&str>> {
    if !path.starts_with(PATH_SEPARATOR) {
        return Err(XmlError::InvalidPath(path.to_string()));
    }
    Ok(path
        .split(PATH_SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .collect())
}

/// Walk a path, taking the first item of any sequence before descending
fn lookup<'a>(node: &'a XmlNode, path: &str) -> Result<Option<&'a XmlNode>> {
    let mut current = node;
    for segment in path_segments(path)? {
        let next = current.first().and_then(|n| n.get(segment));
        match next {
            Some(n) => current = n,
            None => return Ok(None),
        }
    }
    Ok(Some(current))
}

/// Resolve a path to a single string value
///
/// Absent elements resolve to an empty string. When the addressed value is a
/// sequence, the first item's text is used.
pub fn resolve(node: &XmlNode, path: &str) -> Result<String> {
    Ok(lookup(node, path)?
        .map(|n| n.text().to_string())
        .unwrap_or_default())
}

/// Resolve a path to every node it addresses
///
/// A sequence is returned item by item in document order, any other value
/// as a single-element list, and an absent path as an empty list.
pub fn resolve_all<'a>(node: &'a XmlNode, path: &str) -> Result<Vec<&'a XmlNode>> {
    Ok(match lookup(node, path)? {
        Some(XmlNode::Sequence(items)) => items.iter().collect(),
        Some(n) => vec![n],
        None => Vec::new(),
    })
}
