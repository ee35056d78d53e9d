//! Style Hint Derivation Module
//!
//! Maps a semantic embedding vector onto qualitative generation hints.
//! Only the sign pattern of the first three components matters: positive
//! leans cheerful/bright, negative leans cozy/natural, and values inside a
//! small band around zero get a playful twist. The result is deterministic
//! and always a full set of human-readable labels.

use crate::core::models::StyleHints;

/// Default half-width of the "near zero" band
pub const DEFAULT_NEAR_ZERO_BAND: f32 = 0.05;

/// Which of the three inspected embedding slots a component falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lean {
    Positive,
    Negative,
    NearZero,
}

fn lean_of(value: f32, band: f32) -> Lean {
    if value > band {
        Lean::Positive
    } else if value < -band {
        Lean::Negative
    } else {
        Lean::NearZero
    }
}

/// Derive style hints from an embedding vector.
///
/// Inspects the first three components, one per hint field. Embeddings
/// shorter than three components degrade gracefully: missing slots keep
/// the neutral default label instead of failing.
pub fn embedding_to_style_hints(embedding: &[f32], near_zero_band: f32) -> StyleHints {
    let mut hints = StyleHints::default();

    if let Some(&v) = embedding.first() {
        hints.adjective_style = match lean_of(v, near_zero_band) {
            Lean::Positive => "cheerful",
            Lean::Negative => "gentle",
            Lean::NearZero => "playful",
        };
    }

    if let Some(&v) = embedding.get(1) {
        hints.noun_style = match lean_of(v, near_zero_band) {
            Lean::Positive => "bright winter object",
            Lean::Negative => "cozy and natural",
            Lean::NearZero => "winter object",
        };
    }

    if let Some(&v) = embedding.get(2) {
        hints.twist = match lean_of(v, near_zero_band) {
            Lean::Positive => "add sparkle",
            Lean::Negative => "add warmth",
            Lean::NearZero => "add a playful twist",
        };
    }

    hints
}
