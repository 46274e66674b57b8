use permits_api::types::Permit;

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_permits_full() {
    let json = load_fixture("permits_single.json");
    let permits: Vec<Permit> = serde_json::from_str(&json).unwrap();
    assert_eq!(permits.len(), 1);

    let permit = &permits[0];
    assert_eq!(permit.permit_number.as_deref(), Some("BP-2022-10001"));
    assert_eq!(permit.issue_date.as_deref(), Some("2022-11-30T00:00:00.000"));
    assert_eq!(permit.permit_type.as_deref(), Some("Housing Renovation"));
    assert_eq!(permit.work_type.as_deref(), Some("Interior Alteration"));
    assert_eq!(permit.neighbourhood_name.as_deref(), Some("RIVER HEIGHTS"));
    assert_eq!(permit.community.as_deref(), Some("RIVER HEIGHTS - FORT GARRY"));
    assert_eq!(permit.status.as_deref(), Some("Finaled"));
    assert_eq!(permit.final_date.as_deref(), Some("2023-02-15T00:00:00.000"));
}

#[test]
fn deserialize_ignores_extra_fields() {
    let json = load_fixture("permits.json");
    let permits: Vec<Permit> = serde_json::from_str(&json).unwrap();
    assert_eq!(permits.len(), 2);
    assert_eq!(permits[0].key(), "BP-2023-00412");
}

#[test]
fn deserialize_missing_fields_are_empty() {
    let json = load_fixture("permits.json");
    let permits: Vec<Permit> = serde_json::from_str(&json).unwrap();
    let in_progress = &permits[1];
    assert_eq!(in_progress.status.as_deref(), Some("In Progress"));
    assert_eq!(in_progress.final_date, None);
}

#[test]
fn deserialize_empty_array() {
    let permits: Vec<Permit> = serde_json::from_str("[]").unwrap();
    assert!(permits.is_empty());
}

#[test]
fn deserialize_malformed_json_returns_error() {
    let bad_json = r#"[{"permit_number": not valid json}]"#;
    let result = serde_json::from_str::<Vec<Permit>>(bad_json);
    assert!(result.is_err());
}

#[test]
fn deserialize_nested_value_is_stringified() {
    let json = r#"[{"permit_number": "X", "status": {"code": 3}}]"#;
    let permits: Vec<Permit> = serde_json::from_str(json).unwrap();
    assert_eq!(permits[0].status.as_deref(), Some(r#"{"code":3}"#));
}
