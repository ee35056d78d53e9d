//! Data Model Module
//!
//! Core types for the name generation pipeline: validated user input,
//! style hints, the per-request generation context, and the final elf name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter your first name")]
    EmptyName,

    #[error("Invalid birth month: {0}. Please select a calendar month")]
    InvalidMonth(String),
}

// ============================================================================
// Birth Month
// ============================================================================

/// One of the 12 calendar months
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BirthMonth {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl BirthMonth {
    pub const ALL: [BirthMonth; 12] = [
        BirthMonth::January,
        BirthMonth::February,
        BirthMonth::March,
        BirthMonth::April,
        BirthMonth::May,
        BirthMonth::June,
        BirthMonth::July,
        BirthMonth::August,
        BirthMonth::September,
        BirthMonth::October,
        BirthMonth::November,
        BirthMonth::December,
    ];

    /// Month name as it appears in prompts and seed derivation
    pub fn name(&self) -> &'static str {
        match self {
            BirthMonth::January => "January",
            BirthMonth::February => "February",
            BirthMonth::March => "March",
            BirthMonth::April => "April",
            BirthMonth::May => "May",
            BirthMonth::June => "June",
            BirthMonth::July => "July",
            BirthMonth::August => "August",
            BirthMonth::September => "September",
            BirthMonth::October => "October",
            BirthMonth::November => "November",
            BirthMonth::December => "December",
        }
    }
}

impl fmt::Display for BirthMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for BirthMonth {
    type Err = ValidationError;

    /// Month names are matched exactly as offered by the input form
    /// ("January" through "December").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BirthMonth::ALL
            .iter()
            .find(|m| m.name() == s)
            .copied()
            .ok_or_else(|| ValidationError::InvalidMonth(s.to_string()))
    }
}

// ============================================================================
// User Input
// ============================================================================

/// Validated user input: a non-empty first name and a calendar month.
///
/// Construction is the validation boundary — invalid input never reaches
/// the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInput {
    pub first_name: String,
    pub birth_month: BirthMonth,
}

impl UserInput {
    /// Validate raw form values and build a `UserInput`.
    pub fn parse(first_name: &str, birth_month: &str) -> Result<Self, ValidationError> {
        if first_name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let birth_month = BirthMonth::from_str(birth_month)?;

        Ok(Self {
            first_name: first_name.trim().to_string(),
            birth_month,
        })
    }
}

// ============================================================================
// Style Hints
// ============================================================================

/// Qualitative generation guidance derived from an embedding vector.
///
/// Labels are stable, human-readable strings embedded verbatim into the
/// prompt — never raw numbers. `Default` is the neutral hint set used when
/// embedding retrieval fails or the vector is shorter than expected.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StyleHints {
    pub adjective_style: &'static str,
    pub noun_style: &'static str,
    pub twist: &'static str,
}

impl Default for StyleHints {
    fn default() -> Self {
        Self {
            adjective_style: "cheerful",
            noun_style: "winter object",
            twist: "add sparkle",
        }
    }
}

// ============================================================================
// Generation Context
// ============================================================================

/// Full determinism record for one request.
///
/// Created once by the orchestrator, never mutated, cloned into the final
/// `ElfName` so the caller can see exactly what drove the generation.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GenerationContext {
    /// 8-character lowercase hex seed derived from the user input
    pub seed: String,
    /// Raw embedding vector (empty when retrieval was skipped or failed)
    pub embedding: Vec<f32>,
    pub style_hints: StyleHints,
}

// ============================================================================
// Elf Name
// ============================================================================

/// Final, validated pipeline output
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ElfName {
    pub name: String,
    pub is_safe: bool,
    pub generation_context: GenerationContext,
}

// ============================================================================
// Tests
// ============================================================================
