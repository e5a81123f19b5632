//! Template Engine - statement templates compiled to XSL-FO
//!
//! This crate provides:
//! - Template JSON schema types
//! - Validation that collects every violated field
//! - Component rendering (text, image, divider, table, totals, payment, callout)
//! - Data binding via absolute XML paths (`/Case/Account/Name`)
//! - Deterministic assembly of a paginated XSL-FO document
//!
//! # Example
//!
//! ```ignore
//! use template::{compile, parse_template};
//!
//! let template = parse_template(template_json)?;
//! let fo = compile(&template, "<Case><Account><Name>Orbyt</Name></Account></Case>")?;
//! ```
//!
//! The output is consumed by an external XSL-FO processor; this crate does no
//! text layout and keeps no state between calls.

pub mod blocks;
mod compiler;
mod config;
pub mod parser;
mod schema;
mod validator;

pub use compiler::{compile, Compiler};
pub use config::CompilerConfig;
pub use parser::parse_template;
pub use schema::*;
pub use validator::{validate, Finding, ValidationError};

use thiserror::Error;

/// Errors that can occur during template processing
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("XML error: {0}")]
    Xml(#[from] xml_tools::XmlError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TemplateError {
    /// Findings when the error is a validation failure
    pub fn findings(&self) -> &[Finding] {
        match self {
            TemplateError::Validation(e) => &e.findings,
            _ => &[],
        }
    }
}

/// Result type for template operations
pub type Result<T> = std::result::Result<T, TemplateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TemplateError::from(xml_tools::XmlError::InvalidPath("Case".to_string()));
        assert_eq!(
            err.to_string(),
            "XML error: Binding path must be absolute: 'Case'"
        );
        assert!(err.findings().is_empty());

        let err = TemplateError::from(ValidationError {
            findings: vec![Finding {
                path: "name".to_string(),
                reason: "must not be empty".to_string(),
            }],
        });
        assert_eq!(
            err.to_string(),
            "Template has 1 validation error(s); name: must not be empty"
        );
        assert_eq!(err.findings().len(), 1);
    }
}
