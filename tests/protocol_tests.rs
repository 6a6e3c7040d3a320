use training_schedule::{MappingError, Protocol};

#[test]
fn parse_recognises_rest_in_any_case() {
    for label in ["Rest", "rest", "REST", "rEsT"] {
        assert_eq!(Protocol::parse(label).unwrap(), Protocol::Rest);
    }
    assert_eq!(
        Protocol::parse("Rest day").unwrap(),
        Protocol::named("Rest day")
    );
}

#[test]
fn parse_rejects_blank_labels() {
    assert_eq!(
        Protocol::parse("   ").unwrap_err(),
        MappingError::InvalidLabel {
            position: None,
            label: "   ".to_string()
        }
    );
}

#[test]
fn parse_split_reports_first_bad_position() {
    let err = Protocol::parse_split(["Strength", "Rest", ""]).unwrap_err();
    assert_eq!(
        err,
        MappingError::InvalidLabel {
            position: Some(2),
            label: String::new()
        }
    );
}

#[test]
fn rest_always_renders_canonically() {
    let parsed: Protocol = "REST".parse().unwrap();
    assert_eq!(parsed.to_string(), "Rest");
    assert_eq!(Protocol::named("Full body HIIT").label(), "Full body HIIT");
}

#[test]
fn default_split_has_nine_entries_with_three_rests() {
    let split = Protocol::default_split();
    assert_eq!(split.len(), 9);
    assert_eq!(split.iter().filter(|p| p.is_rest()).count(), 3);
}

#[test]
fn protocol_serializes_as_plain_label() {
    let json = serde_json::to_string(&[Protocol::Rest, Protocol::named("Mobility")]).unwrap();
    assert_eq!(json, r#"["Rest","Mobility"]"#);

    let parsed: Vec<Protocol> = serde_json::from_str(r#"["rest", "Mobility"]"#).unwrap();
    assert_eq!(parsed, vec![Protocol::Rest, Protocol::named("Mobility")]);
    assert!(serde_json::from_str::<Protocol>(r#""""#).is_err());
}
