//! Integration tests for template parsing and validation

use serde_json::json;
use template::{
    parse_template, validate, Align, Component, FontWeight, PageSize, Template, TemplateError,
    TemplateStatus, TEMPLATE_SCHEMA,
};

#[test]
fn test_parse_template_with_all_component_types() {
    let template_json = r##"{
        "schemaVersion": "1.0",
        "tenantId": "tenant-a",
        "templateId": "utility-statement",
        "name": "Utility statement",
        "description": "Monthly utility statement",
        "status": "published",
        "version": 4,
        "createdBy": "designer",
        "updatedBy": "reviewer",
        "pages": [{
            "id": "page-1",
            "pageNumber": 1,
            "size": "A4",
            "header": { "components": [
                { "id": "logo", "type": "image", "assetId": "logo-main",
                  "position": { "x": 20, "y": 20, "width": 120, "height": 40 } },
                { "id": "title", "type": "text", "content": "Statement",
                  "position": { "x": 300, "y": 20, "width": 200, "height": 24 },
                  "style": { "fontSize": 18, "fontWeight": "bold", "align": "right" } }
            ] },
            "body": { "components": [
                { "id": "rule", "type": "divider", "strokeWidth": 0.5, "color": "#999999",
                  "position": { "x": 20, "y": 70, "width": 555, "height": 1 } },
                { "id": "debts", "type": "table",
                  "position": { "x": 20, "y": 80, "width": 555, "height": 300 },
                  "rowBinding": { "path": "/Case/Debts/Debt" },
                  "columns": [
                    { "id": "creditor", "header": "Creditor", "width": 400,
                      "binding": { "path": "/Case/Debts/Debt/Creditor" } },
                    { "id": "amount", "header": "Amount", "width": 155,
                      "binding": { "path": "/Case/Debts/Debt/Amount", "fallback": "0.00" } }
                  ] },
                { "id": "total", "type": "totals",
                  "position": { "x": 375, "y": 400, "width": 200, "height": 20 },
                  "amountBinding": { "path": "/Case/Total", "fallback": "0.00" } }
            ] },
            "footer": { "components": [
                { "id": "pay", "type": "payment", "instruction": "Please transfer to",
                  "position": { "x": 20, "y": 780, "width": 400, "height": 20 },
                  "accountBinding": { "path": "/Case/Account/Iban" } },
                { "id": "note", "type": "callout", "title": "Questions?", "body": "Call us.",
                  "position": { "x": 420, "y": 760, "width": 155, "height": 60 } }
            ] }
        }]
    }"##;

    let template = parse_template(template_json).unwrap();

    assert_eq!(template.status, TemplateStatus::Published);
    assert_eq!(template.version, 4);
    assert_eq!(template.pages[0].size, PageSize::A4);

    let kinds: Vec<&str> = template.components().map(Component::kind).collect();
    assert_eq!(
        kinds,
        vec!["image", "text", "divider", "table", "totals", "payment", "callout"]
    );

    if let Component::Text(title) = &template.pages[0].header.components[1] {
        assert_eq!(title.style.font_size, 18.0);
        assert_eq!(title.style.font_weight, FontWeight::Bold);
        assert_eq!(title.style.align, Align::Right);
        assert_eq!(title.style.font_family, "Helvetica");
    } else {
        panic!("Expected TextComponent");
    }

    assert_eq!(
        template.binding_paths(),
        vec![
            "/Case/Debts/Debt",
            "/Case/Debts/Debt/Creditor",
            "/Case/Debts/Debt/Amount",
            "/Case/Total",
            "/Case/Account/Iban",
        ]
    );
}

#[test]
fn test_text_without_content_or_binding_fails_validation() {
    let raw = json!({
        "schemaVersion": "1.0",
        "tenantId": "tenant-a",
        "templateId": "t",
        "name": "T",
        "status": "draft",
        "version": 1,
        "createdBy": "a",
        "updatedBy": "a",
        "pages": [{
            "id": "p1", "pageNumber": 1, "size": "A4",
            "header": {}, "footer": {},
            "body": { "components": [{
                "id": "empty", "type": "text",
                "position": { "x": 0, "y": 0, "width": 10, "height": 10 },
                "style": {}
            }] }
        }]
    });

    let err = validate(&raw).unwrap_err();
    assert!(err.has_finding("pages[0].body.components[0].content"));
}

#[test]
fn test_every_finding_reported() {
    let raw = json!({
        "schemaVersion": "1.0",
        "tenantId": "",
        "templateId": "t",
        "name": "T",
        "status": "draft",
        "version": 1,
        "createdBy": "a",
        "updatedBy": "a",
        "pages": [{
            "id": "p1", "pageNumber": 1, "size": "Letter",
            "header": {}, "body": {}, "footer": {}
        }, {
            "id": "p2", "pageNumber": 1, "size": "A4",
            "header": { "components": [
                { "id": "x", "type": "divider", "strokeWidth": -1,
                  "position": { "x": -5, "y": 0, "width": 10, "height": 1 } },
                { "id": "x", "type": "image", "assetId": "",
                  "position": { "x": 0, "y": 0, "width": 10, "height": 10 } }
            ] },
            "body": {}, "footer": {}
        }]
    });

    let err = validate(&raw).unwrap_err();
    let paths: Vec<&str> = err.findings.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "tenantId",
            "pages[0].size",
            "pages[1].pageNumber",
            "pages[1].header.components[0].position.x",
            "pages[1].header.components[0].strokeWidth",
            "pages[1].header.components[1].id",
            "pages[1].header.components[1].assetId",
        ]
    );
}

#[test]
fn test_typed_template_revalidated() {
    let mut template = Template::example();
    template.version = 0;
    template.pages[0].page_number = 0;

    let err = template.validate().unwrap_err();
    assert!(err.has_finding("version"));
    assert!(err.has_finding("pages[0].pageNumber"));
}

#[test]
fn test_syntax_error_is_json_error() {
    assert!(matches!(parse_template("{"), Err(TemplateError::Json(_))));
}

#[test]
fn test_embedded_schema_is_json() {
    let schema: serde_json::Value = serde_json::from_str(TEMPLATE_SCHEMA).unwrap();
    assert_eq!(schema["properties"]["schemaVersion"]["const"], "1.0");
}
