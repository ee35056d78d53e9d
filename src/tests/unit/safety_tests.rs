//! Safety validator tests: blocklist floor, classifier verdicts, fail-open

use std::sync::Arc;

use crate::core::client::{MockModelService, ServiceError};
use crate::core::safety::{SafetyValidator, SafetyVerdict};

#[tokio::test]
async fn test_blocklisted_name_is_unsafe_without_model_call() {
    // No expectation set: any complete() call would panic the mock
    let mock = MockModelService::new();
    let validator = SafetyValidator::new(Arc::new(mock));

    let verdict = validator.validate("Sexy Santa").await;
    assert!(!verdict.is_safe());
}

#[tokio::test]
async fn test_blocklist_overrides_classifier() {
    // Even a classifier that would say SAFE cannot rescue a blocklisted name
    let mut mock = MockModelService::new();
    mock.expect_complete()
        .returning(|_| Ok("SAFE".to_string()));
    let validator = SafetyValidator::new(Arc::new(mock));

    let verdict = validator.validate("Naughty Nutcracker").await;
    assert!(!verdict.is_safe());
}

#[tokio::test]
async fn test_classifier_safe_verdict() {
    let mut mock = MockModelService::new();
    mock.expect_complete()
        .times(1)
        .returning(|_| Ok("SAFE".to_string()));
    let validator = SafetyValidator::new(Arc::new(mock));

    assert_eq!(
        validator.validate("Merry Mittens").await,
        SafetyVerdict::Safe
    );
}

#[tokio::test]
async fn test_classifier_unsafe_verdict() {
    let mut mock = MockModelService::new();
    mock.expect_complete()
        .times(1)
        .returning(|_| Ok("UNSAFE".to_string()));
    let validator = SafetyValidator::new(Arc::new(mock));

    assert!(!validator.validate("Merry Mittens").await.is_safe());
}

#[tokio::test]
async fn test_unclear_verdict_is_unsafe() {
    let mut mock = MockModelService::new();
    mock.expect_complete()
        .times(1)
        .returning(|_| Ok("Well, it depends...".to_string()));
    let validator = SafetyValidator::new(Arc::new(mock));

    assert!(!validator.validate("Merry Mittens").await.is_safe());
}

#[tokio::test]
async fn test_classifier_error_fails_open() {
    let mut mock = MockModelService::new();
    mock.expect_complete()
        .times(1)
        .returning(|_| Err(ServiceError::RateLimit));
    let validator = SafetyValidator::new(Arc::new(mock));

    assert_eq!(
        validator.validate("Merry Mittens").await,
        SafetyVerdict::Safe
    );
}
