//! WASM bindings for the rsfo template compiler
//!
//! This crate provides a JavaScript-friendly API for:
//! - Validating designer templates
//! - Compiling a template and XML payload into XSL-FO
//! - Listing the binding paths an XML sample offers
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { StatementTemplate, listPaths } from 'rsfo-wasm';
//!
//! await init();
//!
//! // Check a template object before saving it
//! const findings = StatementTemplate.validate(templateObject);
//!
//! // Offer the designer every path the sample payload contains
//! const paths = listPaths(sampleXml);
//!
//! // Compile
//! const template = StatementTemplate.fromJson(templateJson);
//! const fo = template.compile(payloadXml);
//! ```

use template::{Compiler, CompilerConfig, Template, TemplateError};
use wasm_bindgen::prelude::*;

// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn js_error(message: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&message.to_string()).into()
}

fn template_error(err: TemplateError) -> JsValue {
    match err {
        TemplateError::Validation(ref e) => {
            let error = js_sys::Error::new(&err.to_string());
            if let Ok(findings) = serde_wasm_bindgen::to_value(&e.findings) {
                let _ = js_sys::Reflect::set(&error, &JsValue::from_str("findings"), &findings);
            }
            error.into()
        }
        other => js_error(other),
    }
}

/// Compiled-ready statement template
#[wasm_bindgen]
pub struct StatementTemplate {
    template: Template,
    compiler: Compiler,
}

#[wasm_bindgen]
impl StatementTemplate {
    /// Create template from JSON
    ///
    /// Validation errors carry a `findings` array of `{ path, reason }`.
    ///
    /// @param json - Template JSON string
    /// @returns StatementTemplate instance
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<StatementTemplate, JsValue> {
        let template = template::parse_template(json).map_err(template_error)?;
        Ok(StatementTemplate {
            template,
            compiler: Compiler::default(),
        })
    }

    /// Validate a template object without keeping it
    ///
    /// @param value - Template as a plain JS object
    /// @returns Array of `{ path, reason }`, empty when the template is valid
    pub fn validate(value: JsValue) -> Result<JsValue, JsValue> {
        let raw: serde_json::Value = serde_wasm_bindgen::from_value(value)?;
        let findings = match template::validate(&raw) {
            Ok(_) => Vec::new(),
            Err(err) => err.findings,
        };
        Ok(serde_wasm_bindgen::to_value(&findings)?)
    }

    /// Replace the compiler configuration
    ///
    /// @param config - `{ margin?, limits?: { maxBytes?, maxDepth?, maxNodes? } }`
    #[wasm_bindgen(js_name = setConfig)]
    pub fn set_config(&mut self, config: JsValue) -> Result<(), JsValue> {
        let config: CompilerConfig = serde_wasm_bindgen::from_value(config)?;
        self.compiler = Compiler::new(config);
        Ok(())
    }

    /// Compile the template against an XML payload
    ///
    /// @param xml - XML payload
    /// @returns XSL-FO document
    pub fn compile(&self, xml: &str) -> Result<String, JsValue> {
        self.compiler
            .compile(&self.template, xml)
            .map_err(template_error)
    }

    /// Binding paths the template reads, in page order
    ///
    /// @returns Array of paths
    #[wasm_bindgen(js_name = bindingPaths)]
    pub fn binding_paths(&self) -> Vec<JsValue> {
        self.template
            .binding_paths()
            .into_iter()
            .map(JsValue::from_str)
            .collect()
    }

    /// Serialize the template back to JSON
    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.template).map_err(js_error)
    }
}

/// List every value path in an XML sample
///
/// @param xml - Sample XML payload
/// @returns Array of absolute paths in document order
#[wasm_bindgen(js_name = listPaths)]
pub fn list_paths(xml: &str) -> Result<Vec<JsValue>, JsValue> {
    let payload = xml_tools::parse(xml).map_err(js_error)?;
    Ok(xml_tools::enumerate_paths(&payload)
        .map(|path| JsValue::from_str(&path))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    fn template_json() -> String {
        serde_json::to_string(&Template::example()).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_compile_example() {
        let template = StatementTemplate::from_json(&template_json()).unwrap();
        let fo = template.compile("<Case/>").unwrap();
        assert!(fo.starts_with("<?xml"));
        assert!(fo.ends_with("</fo:root>\n"));
    }

    #[wasm_bindgen_test]
    fn test_invalid_json_rejected() {
        assert!(StatementTemplate::from_json("{").is_err());
    }

    #[wasm_bindgen_test]
    fn test_validate_returns_findings() {
        let invalid = js_sys::JSON::parse(r#"{ "schemaVersion": "2.0" }"#).unwrap();
        let findings = js_sys::Array::from(&StatementTemplate::validate(invalid).unwrap());
        assert!(findings.length() > 0);

        let valid = js_sys::JSON::parse(&template_json()).unwrap();
        let findings = js_sys::Array::from(&StatementTemplate::validate(valid).unwrap());
        assert_eq!(findings.length(), 0);
    }

    #[wasm_bindgen_test]
    fn test_rejected_template_carries_findings() {
        let err = StatementTemplate::from_json(r#"{ "schemaVersion": "2.0" }"#)
            .err()
            .unwrap();
        let findings = js_sys::Reflect::get(&err, &JsValue::from_str("findings")).unwrap();
        assert!(js_sys::Array::from(&findings).length() > 0);
    }

    #[wasm_bindgen_test]
    fn test_list_paths() {
        let paths = list_paths("<Case><Name>Orbyt</Name></Case>").unwrap();
        let paths: Vec<String> = paths.iter().filter_map(JsValue::as_string).collect();
        assert_eq!(paths, vec!["/Case/Name"]);
    }

    #[wasm_bindgen_test]
    fn test_round_trip_json() {
        let template = StatementTemplate::from_json(&template_json()).unwrap();
        let again = StatementTemplate::from_json(&template.to_json().unwrap()).unwrap();
        assert_eq!(again.template, template.template);
    }
}
