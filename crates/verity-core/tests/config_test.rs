use std::collections::HashMap;

use verity_core::config::*;
use verity_core::errors::ConfigError;
use verity_core::models::Attribute;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = VerityConfig::from_toml("").unwrap();

    assert_eq!(config.labels.class_a, "false");
    assert_eq!(config.labels.class_b, "true");

    let modeled: Vec<Attribute> = config
        .model
        .modeled_attributes
        .iter()
        .map(|m| m.attribute)
        .collect();
    assert_eq!(
        modeled,
        vec![
            Attribute::SourceTrust,
            Attribute::LengthBucket,
            Attribute::KeywordDensity
        ]
    );
    assert_eq!(
        config.model.modeled_attributes[1].values,
        vec!["short", "average", "long"]
    );

    assert_eq!(config.classifier.formula, LikelihoodFormula::Literal);
    assert_eq!(config.classifier.decision_threshold, 0.5);
    assert_eq!(config.ingestion.label_policy, LabelPolicy::Reject);
    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json);
    assert!(config.validate().is_ok());
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[classifier]
formula = "normalized"

[ingestion]
label_policy = "skip"

[[model.modeled_attributes]]
attribute = "source_trust"
values = ["trusted", "unreliable"]
"#;
    let config = VerityConfig::from_toml(toml).unwrap();
    assert_eq!(config.classifier.formula, LikelihoodFormula::Normalized);
    // Non-overridden fields keep defaults
    assert_eq!(config.classifier.decision_threshold, 0.5);
    assert_eq!(config.ingestion.label_policy, LabelPolicy::Skip);
    assert_eq!(config.model.modeled_attributes.len(), 1);
    assert!(config.validate().is_ok());
}

#[test]
fn config_rejects_malformed_toml() {
    let err = VerityConfig::from_toml("[classifier\nformula = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn config_rejects_unknown_formula_in_toml() {
    let err = VerityConfig::from_toml("[classifier]\nformula = \"bayesian\"").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn config_serde_roundtrip() {
    let config = VerityConfig::default();
    let toml_str = config.to_toml().unwrap();
    let roundtripped = VerityConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.labels, config.labels);
    assert_eq!(
        roundtripped.model.modeled_attributes,
        config.model.modeled_attributes
    );
}

#[test]
fn validate_rejects_identical_labels() {
    let mut config = VerityConfig::default();
    config.labels.class_b = "false".to_string();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("labels"));
}

#[test]
fn validate_rejects_sentinel_label() {
    let mut config = VerityConfig::default();
    config.labels.class_a = "unknown".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn validate_rejects_empty_model() {
    let mut config = VerityConfig::default();
    config.model.modeled_attributes.clear();
    assert!(config.validate().is_err());
}

#[test]
fn validate_rejects_duplicate_attribute() {
    let mut config = VerityConfig::default();
    config
        .model
        .modeled_attributes
        .push(ModeledAttribute::with_vocabulary(Attribute::SourceTrust));
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("source_trust"));
}

#[test]
fn validate_rejects_sentinel_and_duplicate_values() {
    let mut config = VerityConfig::default();
    config.model.modeled_attributes =
        vec![ModeledAttribute::new(Attribute::Author, &["trusted", "unknown"])];
    assert!(config.validate().is_err());

    config.model.modeled_attributes =
        vec![ModeledAttribute::new(Attribute::Author, &["trusted", "trusted"])];
    assert!(config.validate().is_err());

    config.model.modeled_attributes = vec![ModeledAttribute::new(Attribute::Author, &[])];
    assert!(config.validate().is_err());
}

#[test]
fn validate_rejects_non_finite_threshold() {
    let mut config = VerityConfig::default();
    config.classifier.decision_threshold = f64::NAN;
    assert!(config.validate().is_err());
}

#[test]
fn env_overrides_take_priority() {
    let env: HashMap<&str, &str> = [
        ("VERITY_FORMULA", "normalized"),
        ("VERITY_DECISION_THRESHOLD", "0.25"),
        ("VERITY_LABEL_POLICY", "skip"),
        ("VERITY_LOG_LEVEL", "debug"),
    ]
    .into_iter()
    .collect();

    let mut config = VerityConfig::default();
    config.apply_env_overrides(|key| env.get(key).map(|v| v.to_string()));

    assert_eq!(config.classifier.formula, LikelihoodFormula::Normalized);
    assert_eq!(config.classifier.decision_threshold, 0.25);
    assert_eq!(config.ingestion.label_policy, LabelPolicy::Skip);
    assert_eq!(config.observability.log_level, "debug");
}

#[test]
fn env_overrides_ignore_garbage() {
    let mut config = VerityConfig::default();
    config.apply_env_overrides(|key| match key {
        "VERITY_FORMULA" => Some("weird".to_string()),
        "VERITY_DECISION_THRESHOLD" => Some("half".to_string()),
        _ => None,
    });
    assert_eq!(config.classifier.formula, LikelihoodFormula::Literal);
    assert_eq!(config.classifier.decision_threshold, 0.5);
}

#[test]
fn load_reads_file_and_validates() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("verity.toml");
    std::fs::write(&path, "[labels]\nclass_a = \"fake\"\nclass_b = \"real\"\n").unwrap();

    let config = VerityConfig::load(Some(&path)).unwrap();
    assert_eq!(config.labels.class_a, "fake");
    assert_eq!(config.labels.class_b, "real");
}

#[test]
fn load_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = VerityConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn load_rejects_invalid_file_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("verity.toml");
    std::fs::write(&path, "[labels]\nclass_a = \"same\"\nclass_b = \"same\"\n").unwrap();
    let err = VerityConfig::load(Some(&path)).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}
