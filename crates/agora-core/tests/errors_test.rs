use agora_core::errors::{AgoraError, ConfigError, StoreError};
use agora_core::AttributeKey;

#[test]
fn unknown_attribute_key_is_a_validation_error() {
    let err = "income".parse::<AttributeKey>().unwrap_err();
    assert!(matches!(err, AgoraError::InvalidAttributeKey { ref key } if key == "income"));
    assert!(err.is_validation());
    assert_eq!(err.to_string(), "invalid attribute key: income");
}

#[test]
fn every_registry_key_parses_back() {
    for key in AttributeKey::ALL {
        assert_eq!(key.as_str().parse::<AttributeKey>().unwrap(), key);
    }
}

#[test]
fn store_errors_convert_and_are_not_validation() {
    let err: AgoraError = StoreError::Timeout {
        operation: "fetch_reactions".to_string(),
        elapsed_ms: 3000,
    }
    .into();
    assert!(!err.is_validation());
    assert_eq!(
        err.to_string(),
        "store unavailable: fetch_reactions timed out after 3000ms"
    );
}

#[test]
fn config_errors_convert() {
    let err: AgoraError = ConfigError::FileNotFound {
        path: "/nope/agora.toml".to_string(),
    }
    .into();
    assert!(matches!(err, AgoraError::Config(_)));
}

#[test]
fn invalid_score_message_names_the_field() {
    let err = AgoraError::InvalidScore {
        field: "confidence".to_string(),
        value: 140,
    };
    assert!(err.is_validation());
    assert_eq!(err.to_string(), "invalid confidence: 140 is outside 0..=100");
}
