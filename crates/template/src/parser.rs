//! Template JSON parsing

use crate::{validate, Result, Template};

/// Parse and validate a template from a JSON string
///
/// Syntax errors surface as [`crate::TemplateError::Json`], schema violations
/// as [`crate::TemplateError::Validation`] carrying every finding.
pub fn parse_template(json: &str) -> Result<Template> {
    let raw: serde_json::Value = serde_json::from_str(json)?;
    Ok(validate(&raw)?)
}
