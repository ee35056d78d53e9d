//! Safety Validator Module
//!
//! Two-layer safety check for candidate names: a deterministic lexical
//! blocklist scan (the hard floor, no model call needed) and a model-based
//! SAFE/UNSAFE classification. The validator never rewrites a name; it
//! reports a verdict and lets the orchestrator decide to regenerate. A
//! classifier transport error fails open — the lexical floor already ran.

use std::sync::Arc;

use crate::core::client::ModelService;
use crate::core::prompt::build_safety_prompt;
use crate::core::seed::seed_value;

// ============================================================================
// Blocklists
// ============================================================================

const POLITICAL_TERMS: &[&str] = &[
    "trump", "biden", "democrat", "republican", "liberal", "conservative",
    "congress", "senate", "president", "election", "vote", "campaign",
    "politician", "politics", "government", "capitol", "white house",
    "maga", "antifa", "socialist", "communist", "fascist", "nazi",
    "left-wing", "right-wing", "partisan", "impeach", "brexit",
];

const RELIGIOUS_TERMS: &[&str] = &[
    "jesus", "christ", "god", "lord", "allah", "buddha", "krishna",
    "prophet", "messiah", "savior", "holy", "sacred", "divine",
    "church", "mosque", "temple", "synagogue", "cathedral",
    "bible", "quran", "torah", "scripture", "gospel",
    "prayer", "worship", "blessed", "saint", "angel", "demon",
    "heaven", "hell", "sin", "salvation", "baptism", "communion",
];

const BODY_PART_TERMS: &[&str] = &[
    "butt", "buttocks", "boob", "breast", "chest", "nipple",
    "groin", "crotch", "genitals", "penis", "vagina", "testicle",
    "anus", "rectum", "bladder", "prostate", "uterus",
    "sexy", "hot", "naked", "nude", "bare",
];

const SUGGESTIVE_TERMS: &[&str] = &[
    "sexy", "seductive", "sensual", "erotic", "kinky", "naughty",
    "dirty", "nasty", "horny", "aroused", "intimate", "provocative",
    "flirty", "sultry", "steamy", "passionate", "lusty",
    "strip", "tease", "seduce", "fondle", "caress",
];

// ============================================================================
// Fallback Names
// ============================================================================

/// Curated pre-approved names, used when generation or validation cannot
/// produce a safe AI-generated result within the retry budget.
pub const FALLBACK_SAFE_NAMES: &[&str] = &[
    "Sparkle Snowflake",
    "Twinkle Toes",
    "Jingle Bell",
    "Candy Cane",
    "Frosty Mittens",
    "Merry Snowball",
    "Jolly Gingerbread",
    "Cozy Cocoa",
    "Starlight Shimmer",
    "Peppermint Twist",
    "Snowy Whiskers",
    "Tinsel Twirl",
    "Cookie Crumble",
    "Glitter Glow",
    "Holly Berry",
    "Icicle Sparkle",
    "Moonbeam Magic",
    "Nutmeg Sprinkle",
    "Pine Needle",
    "Ribbon Dancer",
    "Sleigh Bell",
    "Sugar Plum",
    "Velvet Bow",
    "Winter Wonder",
    "Yuletide Joy",
];

/// Pick the fallback name for a seed. Deterministic: the same seed always
/// selects the same entry.
pub fn fallback_name(seed: &str) -> &'static str {
    let index = seed_value(seed) as usize % FALLBACK_SAFE_NAMES.len();
    FALLBACK_SAFE_NAMES[index]
}

// ============================================================================
// Verdict
// ============================================================================

/// Outcome of a safety check. Rejection is normal control flow driving
/// regeneration, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SafetyVerdict {
    Safe,
    Unsafe { reason: String },
}

impl SafetyVerdict {
    pub fn is_safe(&self) -> bool {
        matches!(self, SafetyVerdict::Safe)
    }
}

// ============================================================================
// Safety Validator
// ============================================================================

pub struct SafetyValidator {
    service: Arc<dyn ModelService>,
}

impl SafetyValidator {
    pub fn new(service: Arc<dyn ModelService>) -> Self {
        Self { service }
    }

    /// Validate a candidate name.
    ///
    /// Layer 1 is the lexical blocklist: any match is immediately unsafe,
    /// regardless of what the classifier would say. Layer 2 asks the model
    /// for a SAFE/UNSAFE verdict; an unclear answer counts as unsafe, but
    /// a failed call (service outage, not a verdict) passes the name
    /// through with a logged warning.
    pub async fn validate(&self, name: &str) -> SafetyVerdict {
        if let Some(term) = blocked_term(name) {
            log::info!("Candidate \"{name}\" rejected by blocklist (term: {term})");
            return SafetyVerdict::Unsafe {
                reason: format!("blocklisted term: {term}"),
            };
        }

        let prompt = build_safety_prompt(name);
        match self.service.complete(&prompt).await {
            Ok(response) => {
                let verdict = response.trim().to_uppercase();
                if verdict.contains("UNSAFE") {
                    SafetyVerdict::Unsafe {
                        reason: "classifier verdict: UNSAFE".to_string(),
                    }
                } else if verdict.contains("SAFE") {
                    SafetyVerdict::Safe
                } else {
                    // Unclear verdict: err on the side of caution
                    SafetyVerdict::Unsafe {
                        reason: format!("unclear classifier verdict: {verdict}"),
                    }
                }
            }
            Err(e) => {
                // Fail open: the blocklist already provided the hard floor,
                // and availability wins over a second opinion.
                log::warn!("Safety classification call failed, passing \"{name}\": {e}");
                SafetyVerdict::Safe
            }
        }
    }
}

/// Scan a name against all blocklists. Single-word terms match on word
/// boundaries; multi-word terms match as substrings.
fn blocked_term(name: &str) -> Option<&'static str> {
    let lower = name.to_lowercase();
    let words: Vec<&str> = lower
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric() && c != '-'))
        .collect();

    for list in [
        POLITICAL_TERMS,
        RELIGIOUS_TERMS,
        BODY_PART_TERMS,
        SUGGESTIVE_TERMS,
    ] {
        for term in list {
            let hit = if term.contains(' ') {
                lower.contains(term)
            } else {
                words.iter().any(|w| w == term)
            };
            if hit {
                return Some(term);
            }
        }
    }

    None
}
