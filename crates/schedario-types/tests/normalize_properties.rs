use schedario_types::{PropertyValue, is_empty, normalize};

fn samples() -> Vec<PropertyValue> {
    vec![
        PropertyValue::Null,
        PropertyValue::text(""),
        PropertyValue::text("   "),
        PropertyValue::text("null"),
        PropertyValue::text(" Undefined"),
        PropertyValue::text("  Necropoli di Monte Abatone  "),
        PropertyValue::text("riga uno\nriga due\n"),
        PropertyValue::text(" null null "),
        PropertyValue::Integer(0),
        PropertyValue::Integer(-17),
        PropertyValue::Float(0.25),
        PropertyValue::Float(1500.0),
        PropertyValue::Float(f64::NAN),
        PropertyValue::Float(f64::NEG_INFINITY),
        PropertyValue::Bool(false),
    ]
}

#[test]
fn test_normalization_is_idempotent() {
    for value in samples() {
        let once = normalize(&value);
        let twice = normalize(&PropertyValue::text(once.clone()));
        assert_eq!(once, twice, "normalize not idempotent for {:?}", value);
    }
}

#[test]
fn test_emptiness_matches_normalized_form() {
    for value in samples() {
        assert_eq!(
            is_empty(&value),
            normalize(&value).is_empty(),
            "emptiness disagrees with normalize for {:?}",
            value
        );
    }
}

#[test]
fn test_zero_is_not_empty() {
    assert!(!is_empty(&PropertyValue::Integer(0)));
    assert!(!is_empty(&PropertyValue::Float(0.0)));
}
