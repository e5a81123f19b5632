//! Template validation
//!
//! Validation walks the raw JSON value and collects one [`Finding`] per
//! violated field instead of stopping at the first problem, so the editor and
//! API callers get every diagnostic in one pass. Only a value with no findings
//! is converted into a typed [`Template`].

use crate::schema::{Template, COMPONENT_TYPES, SCHEMA_VERSION};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;

/// A single violated field
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Finding {
    /// Field path, e.g. `pages[0].body.components[2].style.color`
    pub path: String,

    /// Human-readable reason
    pub reason: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.reason)
        } else {
            write!(f, "{}: {}", self.path, self.reason)
        }
    }
}

/// Template rejected by validation; carries every finding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub findings: Vec<Finding>,
}

impl ValidationError {
    /// Check whether any finding addresses the given field path
    pub fn has_finding(&self, path: &str) -> bool {
        self.findings.iter().any(|f| f.path == path)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Template has {} validation error(s)", self.findings.len())?;
        for finding in &self.findings {
            write!(f, "; {finding}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Validate an arbitrary JSON value into a trusted [`Template`]
pub fn validate(raw: &Value) -> Result<Template, ValidationError> {
    let mut validator = Validator::default();
    validator.template(raw);

    if !validator.findings.is_empty() {
        log::debug!(
            "template rejected with {} finding(s)",
            validator.findings.len()
        );
        return Err(ValidationError {
            findings: validator.findings,
        });
    }

    Template::deserialize_checked(raw)
}

impl Template {
    /// Validate an arbitrary JSON value into a template
    pub fn from_value(raw: &Value) -> Result<Self, ValidationError> {
        validate(raw)
    }

    /// Re-check a typed template against every invariant
    pub fn validate(&self) -> Result<(), ValidationError> {
        let raw = serde_json::to_value(self).map_err(|e| single_finding("", e.to_string()))?;
        validate(&raw).map(|_| ())
    }

    fn deserialize_checked(raw: &Value) -> Result<Self, ValidationError> {
        serde_json::from_value(raw.clone()).map_err(|e| single_finding("", e.to_string()))
    }
}

fn single_finding(path: &str, reason: String) -> ValidationError {
    ValidationError {
        findings: vec![Finding {
            path: path.to_string(),
            reason,
        }],
    }
}

fn join(base: &str, key: &str) -> String {
    if base.is_empty() {
        key.to_string()
    } else {
        format!("{base}.{key}")
    }
}

fn is_hex_color(s: &str) -> bool {
    s.len() == 7 && s.starts_with('#') && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

#[derive(Clone, Copy)]
enum Bound {
    NonNegative,
    Positive,
}

#[derive(Default)]
struct Validator {
    findings: Vec<Finding>,
    /// component id -> path of first use
    component_ids: HashMap<String, String>,
    /// page number -> path of first use
    page_numbers: HashMap<u64, String>,
}

impl Validator {
    fn fail(&mut self, path: String, reason: impl Into<String>) {
        self.findings.push(Finding {
            path,
            reason: reason.into(),
        });
    }

    fn object<'v>(&mut self, value: Option<&'v Value>, path: String) -> Option<&'v Map<String, Value>> {
        match value {
            None => {
                self.fail(path, "is required");
                None
            }
            Some(Value::Object(map)) => Some(map),
            Some(_) => {
                self.fail(path, "must be an object");
                None
            }
        }
    }

    /// Required, non-empty string
    fn text<'v>(&mut self, obj: &'v Map<String, Value>, key: &str, base: &str) -> Option<&'v str> {
        let path = join(base, key);
        match obj.get(key) {
            None => {
                self.fail(path, "is required");
                None
            }
            Some(Value::String(s)) if s.is_empty() => {
                self.fail(path, "must not be empty");
                None
            }
            Some(Value::String(s)) => Some(s.as_str()),
            Some(_) => {
                self.fail(path, "must be a string");
                None
            }
        }
    }

    /// Optional string (any content)
    fn optional_string(&mut self, obj: &Map<String, Value>, key: &str, base: &str) {
        if let Some(value) = obj.get(key) {
            if !value.is_string() {
                self.fail(join(base, key), "must be a string");
            }
        }
    }

    fn number(
        &mut self,
        obj: &Map<String, Value>,
        key: &str,
        base: &str,
        bound: Bound,
        required: bool,
    ) {
        let path = join(base, key);
        let value = match obj.get(key) {
            None if required => {
                self.fail(path, "is required");
                return;
            }
            None => return,
            Some(value) => value,
        };
        let Some(n) = value.as_f64() else {
            self.fail(path, "must be a number");
            return;
        };
        match bound {
            Bound::NonNegative if n < 0.0 => {
                self.fail(path, "must be greater than or equal to 0");
            }
            Bound::Positive if n <= 0.0 => self.fail(path, "must be greater than 0"),
            _ => {}
        }
    }

    /// Required integer >= 1 that fits in u32
    fn counter(&mut self, obj: &Map<String, Value>, key: &str, base: &str) -> Option<u64> {
        let path = join(base, key);
        let Some(value) = obj.get(key) else {
            self.fail(path, "is required");
            return None;
        };
        match value.as_u64() {
            Some(0) => self.fail(path, "must be at least 1"),
            Some(n) if n > u64::from(u32::MAX) => self.fail(path, "is too large"),
            Some(n) => return Some(n),
            None if value.as_f64().is_some_and(|n| n < 1.0) => {
                self.fail(path, "must be at least 1");
            }
            None => self.fail(path, "must be an integer"),
        }
        None
    }

    fn one_of(
        &mut self,
        obj: &Map<String, Value>,
        key: &str,
        base: &str,
        allowed: &[&str],
        required: bool,
    ) {
        let path = join(base, key);
        match obj.get(key) {
            None if required => self.fail(path, "is required"),
            None => {}
            Some(Value::String(s)) if allowed.contains(&s.as_str()) => {}
            Some(_) => self.fail(path, format!("must be one of: {}", allowed.join(", "))),
        }
    }

    fn color(&mut self, obj: &Map<String, Value>, key: &str, base: &str) {
        match obj.get(key) {
            None => {}
            Some(Value::String(s)) if is_hex_color(s) => {}
            Some(_) => self.fail(join(base, key), "must be a #RRGGBB color"),
        }
    }

    fn template(&mut self, raw: &Value) {
        let Some(obj) = self.object(Some(raw), String::new()) else {
            return;
        };

        match obj.get("schemaVersion") {
            None => self.fail("schemaVersion".to_string(), "is required"),
            Some(Value::String(v)) if v == SCHEMA_VERSION => {}
            Some(_) => self.fail(
                "schemaVersion".to_string(),
                format!("must be \"{SCHEMA_VERSION}\""),
            ),
        }
        self.text(obj, "tenantId", "");
        self.text(obj, "templateId", "");
        self.text(obj, "name", "");
        self.optional_string(obj, "description", "");
        self.one_of(obj, "status", "", &["draft", "published"], true);
        self.counter(obj, "version", "");
        self.text(obj, "createdBy", "");
        self.text(obj, "updatedBy", "");

        match obj.get("pages") {
            None => self.fail("pages".to_string(), "is required"),
            Some(Value::Array(pages)) if pages.is_empty() => {
                self.fail("pages".to_string(), "must contain at least one page");
            }
            Some(Value::Array(pages)) => {
                for (i, page) in pages.iter().enumerate() {
                    self.page(page, format!("pages[{i}]"));
                }
            }
            Some(_) => self.fail("pages".to_string(), "must be an array"),
        }
    }

    fn page(&mut self, value: &Value, path: String) {
        let Some(obj) = self.object(Some(value), path.clone()) else {
            return;
        };

        self.text(obj, "id", &path);
        if let Some(number) = self.counter(obj, "pageNumber", &path) {
            let number_path = join(&path, "pageNumber");
            if let Some(first) = self.page_numbers.get(&number) {
                let reason = format!("duplicate page number {number} (also used by {first})");
                self.fail(number_path, reason);
            } else {
                self.page_numbers.insert(number, path.clone());
            }
        }
        self.one_of(obj, "size", &path, &["A4"], true);

        for region in ["header", "body", "footer"] {
            self.region(obj.get(region), join(&path, region));
        }
    }

    fn region(&mut self, value: Option<&Value>, path: String) {
        let Some(obj) = self.object(value, path.clone()) else {
            return;
        };
        match obj.get("components") {
            None => {}
            Some(Value::Array(components)) => {
                for (i, component) in components.iter().enumerate() {
                    self.component(component, format!("{path}.components[{i}]"));
                }
            }
            Some(_) => self.fail(join(&path, "components"), "must be an array"),
        }
    }

    fn component(&mut self, value: &Value, path: String) {
        let Some(obj) = self.object(Some(value), path.clone()) else {
            return;
        };

        if let Some(id) = self.text(obj, "id", &path) {
            if let Some(first) = self.component_ids.get(id) {
                let reason = format!("duplicate component id '{id}' (also used by {first})");
                self.fail(join(&path, "id"), reason);
            } else {
                self.component_ids.insert(id.to_string(), path.clone());
            }
        }

        let kind = match obj.get("type") {
            None => {
                self.fail(join(&path, "type"), "is required");
                return;
            }
            Some(Value::String(kind)) => kind.as_str(),
            Some(_) => {
                self.fail(join(&path, "type"), "must be a string");
                return;
            }
        };

        if !COMPONENT_TYPES.contains(&kind) {
            log::debug!("{path}: unknown component type '{kind}' will render empty");
            return;
        }

        self.position(obj.get("position"), join(&path, "position"));

        match kind {
            "text" => self.text_component(obj, &path),
            "image" => {
                self.text(obj, "assetId", &path);
                self.optional_string(obj, "description", &path);
            }
            "divider" => {
                self.number(obj, "strokeWidth", &path, Bound::Positive, false);
                self.color(obj, "color", &path);
            }
            "table" => self.table(obj, &path),
            "totals" => {
                self.optional_string(obj, "label", &path);
                self.binding(obj.get("amountBinding"), join(&path, "amountBinding"));
            }
            "payment" => {
                self.text(obj, "instruction", &path);
                self.binding(obj.get("accountBinding"), join(&path, "accountBinding"));
            }
            "callout" => {
                self.text(obj, "title", &path);
                self.text(obj, "body", &path);
            }
            _ => {}
        }
    }

    fn text_component(&mut self, obj: &Map<String, Value>, path: &str) {
        let content = obj.get("content").filter(|v| !v.is_null());
        let binding = obj.get("binding").filter(|v| !v.is_null());

        match content {
            Some(Value::String(_)) | None => {}
            Some(_) => self.fail(join(path, "content"), "must be a string"),
        }
        if let Some(binding) = binding {
            self.binding(Some(binding), join(path, "binding"));
        }

        let has_content = content.and_then(Value::as_str).is_some_and(|s| !s.is_empty());
        if !has_content && binding.is_none() {
            self.fail(
                join(path, "content"),
                "text component must include content or binding",
            );
        }

        let style_path = join(path, "style");
        if let Some(style) = self.object(obj.get("style"), style_path.clone()) {
            if style.contains_key("fontFamily") {
                self.text(style, "fontFamily", &style_path);
            }
            self.number(style, "fontSize", &style_path, Bound::Positive, false);
            self.one_of(style, "fontWeight", &style_path, &["normal", "bold"], false);
            self.color(style, "color", &style_path);
            self.one_of(style, "align", &style_path, &["left", "center", "right"], false);
        }
    }

    fn table(&mut self, obj: &Map<String, Value>, path: &str) {
        self.binding(obj.get("rowBinding"), join(path, "rowBinding"));

        let columns_path = join(path, "columns");
        match obj.get("columns") {
            None => self.fail(columns_path, "is required"),
            Some(Value::Array(columns)) if columns.is_empty() => {
                self.fail(columns_path, "must contain at least one column");
            }
            Some(Value::Array(columns)) => {
                for (i, column) in columns.iter().enumerate() {
                    let column_path = format!("{columns_path}[{i}]");
                    let Some(col) = self.object(Some(column), column_path.clone()) else {
                        continue;
                    };
                    self.text(col, "id", &column_path);
                    self.text(col, "header", &column_path);
                    self.number(col, "width", &column_path, Bound::Positive, true);
                    self.binding(col.get("binding"), join(&column_path, "binding"));
                }
            }
            Some(_) => self.fail(columns_path, "must be an array"),
        }
    }

    fn position(&mut self, value: Option<&Value>, path: String) {
        let Some(obj) = self.object(value, path.clone()) else {
            return;
        };
        self.number(obj, "x", &path, Bound::NonNegative, true);
        self.number(obj, "y", &path, Bound::NonNegative, true);
        self.number(obj, "width", &path, Bound::Positive, true);
        self.number(obj, "height", &path, Bound::Positive, true);
    }

    fn binding(&mut self, value: Option<&Value>, path: String) {
        let Some(obj) = self.object(value, path.clone()) else {
            return;
        };
        self.text(obj, "path", &path);
        self.optional_string(obj, "fallback", &path);
    }
}
