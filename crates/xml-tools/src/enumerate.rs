//! Leaf-path enumeration for binding autocomplete

use crate::node::{XmlNode, ATTRIBUTE_PREFIX, TEXT_KEY};
use std::collections::HashSet;

/// Enumerate every leaf path of a payload, depth-first in document order
///
/// Attribute keys are skipped. Paths shared by repeated elements are yielded
/// once. The iterator is lazy; call again to restart.
///
/// ```
/// use xml_tools::{enumerate_paths, parse};
///
/// let payload = parse("<Case><Account><Name>Orbyt</Name></Account></Case>").unwrap();
/// let paths: Vec<String> = enumerate_paths(&payload).collect();
/// assert_eq!(paths, vec!["/Case/Account/Name"]);
/// ```
pub fn enumerate_paths(node: &XmlNode) -> PathIter<'_> {
    PathIter {
        stack: vec![(String::new(), node)],
        seen: HashSet::new(),
    }
}

/// Iterator returned by [`enumerate_paths`]
#[derive(Debug)]
pub struct PathIter<'a> {
    stack: Vec<(String, &'a XmlNode)>,
    seen: HashSet<String>,
}

impl Iterator for PathIter<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some((prefix, node)) = self.stack.pop() {
            match node {
                XmlNode::Scalar(_) => {
                    if !prefix.is_empty() && self.seen.insert(prefix.clone()) {
                        return Some(prefix);
                    }
                }
                XmlNode::Element(element) => {
                    // reversed so the first key is popped first
                    for (key, child) in element.iter().rev() {
                        if key.starts_with(ATTRIBUTE_PREFIX) {
                            continue;
                        }
                        let path = if key == TEXT_KEY {
                            prefix.clone()
                        } else {
                            format!("{prefix}/{key}")
                        };
                        self.stack.push((path, child));
                    }
                }
                XmlNode::Sequence(items) => {
                    for item in items.iter().rev() {
                        self.stack.push((prefix.clone(), item));
                    }
                }
            }
        }
        None
    }
}
