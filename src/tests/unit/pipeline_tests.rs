//! Orchestrator tests
//!
//! Exercises the state machine end to end with scripted model services:
//! reproducibility, bounded regeneration, graceful degradation, fallback
//! determinism, and the validation boundary.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use crate::config::PipelineConfig;
use crate::core::models::{BirthMonth, StyleHints};
use crate::core::pipeline::{NameGenerationPipeline, PipelineError};
use crate::core::safety::fallback_name;
use crate::core::seed::derive_seed;
use crate::tests::mocks::{EmbedBehavior, FakeModelService};

fn pipeline_with(service: FakeModelService) -> (NameGenerationPipeline, Arc<FakeModelService>) {
    let service = Arc::new(service);
    let pipeline = NameGenerationPipeline::new(service.clone(), PipelineConfig::default());
    (pipeline, service)
}

#[tokio::test]
async fn test_accepted_name_round_trip() {
    let (pipeline, service) = pipeline_with(FakeModelService::new("Twinkleberry Froststride"));

    let elf = pipeline.generate_elf_name("Timmy", "April").await.unwrap();

    assert_eq!(elf.name, "Twinkleberry Froststride");
    assert!(elf.is_safe);
    assert_eq!(
        elf.generation_context.seed,
        derive_seed("Timmy", BirthMonth::April)
    );
    assert_eq!(service.generation_calls.load(Ordering::SeqCst), 1);
    assert_eq!(service.safety_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_accepted_name_has_two_or_three_words() {
    let (pipeline, _) = pipeline_with(FakeModelService::new("Twinkleberry Froststride"));

    let elf = pipeline.generate_elf_name("Timmy", "April").await.unwrap();
    let words = elf.name.split_whitespace().count();
    assert!((2..=3).contains(&words));
}

#[tokio::test]
async fn test_two_runs_are_reproducible() {
    let (pipeline, _) = pipeline_with(FakeModelService::new("Merry Mittens"));

    let first = pipeline.generate_elf_name("Timmy", "April").await.unwrap();
    let second = pipeline.generate_elf_name("Timmy", "April").await.unwrap();

    assert_eq!(first.name, second.name);
    assert_eq!(first.generation_context, second.generation_context);
}

#[tokio::test]
async fn test_embedding_failure_degrades_to_neutral_hints() {
    let (pipeline, service) = pipeline_with(
        FakeModelService::new("Merry Mittens").with_embed(EmbedBehavior::Fail),
    );

    let elf = pipeline.generate_elf_name("Timmy", "April").await.unwrap();

    assert_eq!(elf.name, "Merry Mittens");
    assert!(elf.generation_context.embedding.is_empty());
    assert_eq!(elf.generation_context.style_hints, StyleHints::default());
    assert_eq!(service.embed_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_unsafe_candidate_triggers_regeneration() {
    let (pipeline, service) = pipeline_with(
        FakeModelService::new("")
            .with_generation_script(&["Twinkle Cocoa", "Merry Mittens"])
            .with_safety_script(&["UNSAFE", "SAFE"]),
    );

    let elf = pipeline.generate_elf_name("Timmy", "April").await.unwrap();

    assert_eq!(elf.name, "Merry Mittens");
    assert_eq!(service.generation_calls.load(Ordering::SeqCst), 2);
    assert_eq!(service.safety_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_blocklisted_candidate_skips_classifier() {
    let (pipeline, service) = pipeline_with(
        FakeModelService::new("").with_generation_script(&["Sexy Santa", "Merry Mittens"]),
    );

    let elf = pipeline.generate_elf_name("Timmy", "April").await.unwrap();

    assert_eq!(elf.name, "Merry Mittens");
    // The blocklisted candidate never reached the model classifier
    assert_eq!(service.safety_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_regeneration_is_bounded() {
    let (pipeline, service) = pipeline_with(
        FakeModelService::new("Twinkle Cocoa").with_safety_script(&["UNSAFE"]),
    );

    let elf = pipeline.generate_elf_name("Timmy", "April").await.unwrap();

    // Exactly max_attempts (3) generation cycles, then fallback
    assert_eq!(service.generation_calls.load(Ordering::SeqCst), 3);
    let seed = derive_seed("Timmy", BirthMonth::April);
    assert_eq!(elf.name, fallback_name(&seed));
    assert!(elf.is_safe);
}

#[tokio::test]
async fn test_generation_failure_falls_back_deterministically() {
    let (pipeline, _) = pipeline_with(FakeModelService::new("").failing_generation());
    let first = pipeline.generate_elf_name("Timmy", "April").await.unwrap();

    let (pipeline, _) = pipeline_with(FakeModelService::new("").failing_generation());
    let second = pipeline.generate_elf_name("Timmy", "April").await.unwrap();

    assert_eq!(first.name, second.name);
    assert!(first.is_safe);

    let seed = derive_seed("Timmy", BirthMonth::April);
    assert_eq!(first.name, fallback_name(&seed));
}

#[tokio::test]
async fn test_classifier_outage_fails_open() {
    let (pipeline, _) =
        pipeline_with(FakeModelService::new("Merry Mittens").failing_safety());

    let elf = pipeline.generate_elf_name("Timmy", "April").await.unwrap();

    // Fail-open: the name passed the lexical floor, the dead classifier
    // does not block the outcome
    assert_eq!(elf.name, "Merry Mittens");
    assert!(elf.is_safe);
}

#[tokio::test]
async fn test_empty_name_rejected_before_any_call() {
    let (pipeline, service) = pipeline_with(FakeModelService::new("Merry Mittens"));

    let err = pipeline.generate_elf_name("", "April").await.unwrap_err();
    assert!(matches!(err, PipelineError::Validation(_)));

    assert_eq!(service.generation_calls.load(Ordering::SeqCst), 0);
    assert_eq!(service.safety_calls.load(Ordering::SeqCst), 0);
    assert_eq!(service.embed_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_invalid_month_rejected_before_any_call() {
    let (pipeline, service) = pipeline_with(FakeModelService::new("Merry Mittens"));

    let err = pipeline
        .generate_elf_name("Timmy", "Smarch")
        .await
        .unwrap_err();
    assert!(matches!(err, PipelineError::Validation(_)));

    assert_eq!(service.generation_calls.load(Ordering::SeqCst), 0);
    assert_eq!(service.embed_calls.load(Ordering::SeqCst), 0);
}
