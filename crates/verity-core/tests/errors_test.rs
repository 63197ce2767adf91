use verity_core::errors::*;

#[test]
fn invalid_label_carries_label_and_expected_values() {
    let err = VerityError::InvalidLabel {
        label: "maybe".into(),
        class_a: "false".into(),
        class_b: "true".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("maybe"));
    assert!(msg.contains("false"));
    assert!(msg.contains("true"));
}

#[test]
fn unmodeled_attribute_carries_name() {
    let err = VerityError::UnmodeledAttribute {
        attribute: "headline".into(),
    };
    assert!(err.to_string().contains("headline"));
}

// --- From impls ---

#[test]
fn config_error_converts_to_verity_error() {
    let config_err = ConfigError::ValidationFailed {
        field: "labels".into(),
        message: "must differ".into(),
    };
    let err: VerityError = config_err.into();
    assert!(matches!(err, VerityError::Config(_)));
    assert!(err.to_string().contains("must differ"));
}

#[test]
fn json_error_converts_to_serialization_error() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: VerityError = json_err.into();
    assert!(matches!(err, VerityError::Serialization { .. }));
}

#[test]
fn io_error_converts_to_io_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
    let err: VerityError = io_err.into();
    assert!(err.to_string().contains("pipe closed"));
}
