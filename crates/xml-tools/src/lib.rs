//! XML Tools - payload parsing and binding-path resolution
//!
//! This crate provides:
//! - Parsing of raw XML payloads into an owned [`XmlNode`] tree
//! - Resolution of absolute binding paths (`/Case/Account/Name`) to scalar values
//! - Resolution of repeated elements for table rows
//! - Enumeration of every leaf path in a payload (editor autocomplete)
//!
//! Missing data is never an error: an absent element resolves to an empty
//! string or an empty node-set. Only malformed XML, payloads that exceed the
//! configured [`ParseLimits`], and paths without a leading `/` fail.
//!
//! # Example
//!
//! ```
//! use xml_tools::{parse, resolve};
//!
//! let payload = parse("<Case><Account><Name>Orbyt</Name></Account></Case>").unwrap();
//! assert_eq!(resolve(&payload, "/Case/Account/Name").unwrap(), "Orbyt");
//! assert_eq!(resolve(&payload, "/Case/Account/Phone").unwrap(), "");
//! ```

mod enumerate;
mod node;
mod parser;
mod path;

pub use enumerate::{enumerate_paths, PathIter};
pub use node::{XmlElement, XmlNode, ATTRIBUTE_PREFIX, TEXT_KEY};
pub use parser::{parse, parse_with_limits, ParseLimits};
pub use path::{path_segments, resolve, resolve_all, PATH_SEPARATOR};

use thiserror::Error;

/// Errors that can occur while parsing payloads or resolving paths
#[derive(Debug, Error)]
pub enum XmlError {
    #[error("Malformed XML payload: {0}")]
    Parse(#[from] roxmltree::Error),

    #[error("XML payload is {size} bytes, limit is {limit}")]
    PayloadTooLarge { size: usize, limit: usize },

    #[error("XML payload nesting exceeds depth limit of {0}")]
    TooDeep(usize),

    #[error("Binding path must be absolute: '{0}'")]
    InvalidPath(String),
}

/// Result type for XML operations
pub type Result<T> = std::result::Result<T, XmlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = XmlError::InvalidPath("Case/Name".to_string());
        assert_eq!(err.to_string(), "Binding path must be absolute: 'Case/Name'");

        let err = XmlError::PayloadTooLarge { size: 10, limit: 4 };
        assert_eq!(err.to_string(), "XML payload is 10 bytes, limit is 4");
    }
}
