use crate::BudgetCurrencyRequest;

fn request(json: &str) -> BudgetCurrencyRequest {
    serde_json::from_str(json).unwrap()
}

#[test]
fn test_lookup_key_requires_year_and_name() {
    let full = request(r#"{"year": 2024, "projectName": "Rigua Nintendo"}"#);
    assert_eq!(full.lookup_key(), Some(("Rigua Nintendo", 2024)));

    assert_eq!(request(r#"{"projectName": "Rigua Nintendo"}"#).lookup_key(), None);
    assert_eq!(request(r#"{"year": 2024}"#).lookup_key(), None);
    assert_eq!(request("{}").lookup_key(), None);
}

#[test]
fn test_lookup_key_treats_zero_year_and_empty_name_as_missing() {
    assert_eq!(
        request(r#"{"year": 0, "projectName": "Rigua Nintendo"}"#).lookup_key(),
        None
    );
    assert_eq!(
        request(r#"{"year": 2024, "projectName": ""}"#).lookup_key(),
        None
    );
    assert_eq!(
        request(r#"{"year": null, "projectName": "Rigua Nintendo"}"#).lookup_key(),
        None
    );
}

#[test]
fn test_targets_ttd_defaults_to_true_when_currency_omitted() {
    assert!(request(r#"{"year": 2024, "projectName": "x"}"#).targets_ttd());
}

#[test]
fn test_targets_ttd_is_case_insensitive() {
    assert!(request(r#"{"currency": "TTD"}"#).targets_ttd());
    assert!(request(r#"{"currency": "ttd"}"#).targets_ttd());
    assert!(!request(r#"{"currency": "USD"}"#).targets_ttd());
    assert!(!request(r#"{"currency": "EUR"}"#).targets_ttd());
}
