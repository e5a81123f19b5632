//! Integration tests for payload parsing and path resolution

use pretty_assertions::assert_eq;
use xml_tools::{enumerate_paths, parse, resolve, resolve_all, XmlError, XmlNode};

const STATEMENT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Case number="C-100">
    <Account>
        <Name>Orbyt</Name>
        <Number>NL00 0000 1234</Number>
    </Account>
    <Debts>
        <Debt><Creditor>Water Co</Creditor><Amount>120.50</Amount></Debt>
        <Debt><Creditor>Power &amp; Light</Creditor><Amount>80.00</Amount></Debt>
        <Debt><Creditor>Telecom</Creditor><Amount>15.25</Amount></Debt>
    </Debts>
    <Total currency="EUR">215.75</Total>
</Case>"#;

#[test]
fn test_resolve_statement_fields() {
    let payload = parse(STATEMENT).unwrap();

    assert_eq!(resolve(&payload, "/Case/Account/Name").unwrap(), "Orbyt");
    assert_eq!(resolve(&payload, "/Case/Account/Number").unwrap(), "NL00 0000 1234");
    assert_eq!(resolve(&payload, "/Case/Total").unwrap(), "215.75");
    assert_eq!(resolve(&payload, "/Case/Total/@_currency").unwrap(), "EUR");
    assert_eq!(resolve(&payload, "/Case/@_number").unwrap(), "C-100");
    assert_eq!(resolve(&payload, "/Case/Debts/Debt/Creditor").unwrap(), "Water Co");
}

#[test]
fn test_missing_data_degrades() {
    let payload = parse(STATEMENT).unwrap();

    assert_eq!(resolve(&payload, "/Case/Account/Email").unwrap(), "");
    assert_eq!(resolve(&payload, "/Invoice/Account/Name").unwrap(), "");
    assert!(resolve_all(&payload, "/Case/Payments/Payment").unwrap().is_empty());
}

#[test]
fn test_invalid_path_is_error() {
    let payload = parse(STATEMENT).unwrap();

    let err = resolve(&payload, "Case/Account/Name").unwrap_err();
    assert!(matches!(err, XmlError::InvalidPath(ref p) if p == "Case/Account/Name"));
    assert!(resolve_all(&payload, "Debts").is_err());
}

#[test]
fn test_repeated_rows() {
    let payload = parse(STATEMENT).unwrap();
    let debts = resolve_all(&payload, "/Case/Debts/Debt").unwrap();
    assert_eq!(debts.len(), 3);

    let creditors: Vec<String> = debts
        .iter()
        .map(|debt| resolve(debt, "/Creditor").unwrap())
        .collect();
    assert_eq!(creditors, vec!["Water Co", "Power & Light", "Telecom"]);
}

#[test]
fn test_single_row_is_not_a_sequence() {
    let payload = parse("<Case><Debts><Debt><Amount>5</Amount></Debt></Debts></Case>").unwrap();
    let debts = resolve_all(&payload, "/Case/Debts/Debt").unwrap();
    assert_eq!(debts.len(), 1);
    assert!(!debts[0].is_scalar());
}

#[test]
fn test_enumerate_statement_paths() {
    let payload = parse(STATEMENT).unwrap();
    let paths: Vec<String> = enumerate_paths(&payload).collect();
    assert_eq!(
        paths,
        vec![
            "/Case/Account/Name",
            "/Case/Account/Number",
            "/Case/Debts/Debt/Creditor",
            "/Case/Debts/Debt/Amount",
            "/Case/Total",
        ]
    );

    // every enumerated path resolves to a value
    for path in &paths {
        assert!(!resolve(&payload, path).unwrap().is_empty(), "{path}");
    }
}

#[test]
fn test_parse_fails_without_partial_tree() {
    let result = parse("<Case><Account>");
    assert!(matches!(result, Err(XmlError::Parse(_))));

    let result = parse("");
    assert!(result.is_err());
}

#[test]
fn test_empty_root() {
    let payload = parse("<Case/>").unwrap();
    assert_eq!(payload.get("Case"), Some(&XmlNode::Scalar(String::new())));
    assert_eq!(resolve(&payload, "/Case/Anything").unwrap(), "");
}
