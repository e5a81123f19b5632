//! Compiler configuration

use serde::{Deserialize, Serialize};
use xml_tools::ParseLimits;

fn default_margin() -> String {
    "10mm".to_string()
}

/// Settings shared by every compile call
///
/// Deserializes from camelCase JSON; missing fields take their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CompilerConfig {
    /// Page margin declared once in the document preamble (any XSL-FO length)
    #[serde(default = "default_margin")]
    pub margin: String,

    /// Ceilings applied to the XML payload
    #[serde(default)]
    pub limits: ParseLimits,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            margin: default_margin(),
            limits: ParseLimits::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config: CompilerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CompilerConfig::default());
        assert_eq!(config.margin, "10mm");
    }

    #[test]
    fn test_config_overrides() {
        let config: CompilerConfig =
            serde_json::from_str(r#"{ "margin": "15mm", "limits": { "maxBytes": 1024 } }"#)
                .unwrap();
        assert_eq!(config.margin, "15mm");
        assert_eq!(config.limits.max_bytes, 1024);
        assert_eq!(config.limits.max_depth, ParseLimits::default().max_depth);
    }
}
