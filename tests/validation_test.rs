use contextual::categorizer::parse_generate_response;
use contextual::{CategorizeError, Classifier, ClassifierError};

#[test]
fn test_zero_k_is_rejected() {
    let result = Classifier::builder().with_k(0).add_entry(["cat"], "Pets").build();
    assert!(matches!(result.unwrap_err(), ClassifierError::InvalidK(0)));
}

#[test]
fn test_threshold_out_of_range() {
    for threshold in [-0.01, 1.01, f32::NAN, f32::NEG_INFINITY] {
        let result = Classifier::builder().with_min_similarity(threshold).build();
        assert!(
            matches!(result, Err(ClassifierError::InvalidThreshold(_))),
            "threshold {} should be rejected",
            threshold
        );
    }
}

#[test]
fn test_threshold_bounds_are_accepted() -> Result<(), ClassifierError> {
    let strict = Classifier::builder()
        .with_min_similarity(1.0)
        .add_entry(["cat", "animal"], "Pets")
        .build()?;
    assert_eq!(strict.predict(&["cat", "animal"]).as_deref(), Some("Pets"));
    assert_eq!(strict.predict(&["cat"]), None);

    let lenient = Classifier::builder()
        .with_min_similarity(0.0)
        .add_entry(["cat"], "Pets")
        .build()?;
    assert_eq!(lenient.predict(&["category"]).as_deref(), Some("Pets"));
    Ok(())
}

#[test]
fn test_error_messages() {
    assert_eq!(
        ClassifierError::InvalidK(0).to_string(),
        "Invalid k: 0 (must be at least 1)"
    );
    assert!(ClassifierError::InvalidThreshold(2.0).to_string().contains("[0, 1]"));
}

#[test]
fn test_upstream_output_is_strictly_decoded() {
    let missing_description = r#"{"response":"{\"category\":\"Tech\",\"tags\":[\"rust\"]}"}"#;
    let err = parse_generate_response(missing_description).unwrap_err();
    assert!(matches!(err, CategorizeError::MalformedResponse(_)));
    assert!(err.to_string().starts_with("Malformed upstream response"));

    let missing_envelope = r#"{"category":"Tech","description":"x","tags":[]}"#;
    assert!(matches!(
        parse_generate_response(missing_envelope),
        Err(CategorizeError::MalformedResponse(_))
    ));
}
