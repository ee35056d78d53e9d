//! Prompt Construction Module
//!
//! Pure functions producing the prompts sent to the model: the elf-name
//! generation prompt and the safety classification prompt. Reproducibility
//! is anchored by embedding the seed and the user's name/month directly in
//! the prompt text — no model-level seed parameter is used.

use crate::core::models::{BirthMonth, StyleHints};

/// Build the elf-name generation prompt.
///
/// States the output contract (exactly 2 or 3 words, whimsical, Christmas
/// vocabulary), forbids unsafe content, embeds the style hints as natural
/// language, and anchors the seed and user input for stable phrasing.
pub fn build_generation_prompt(
    first_name: &str,
    birth_month: BirthMonth,
    style_hints: &StyleHints,
    seed: &str,
) -> String {
    format!(
        r#"Generate a whimsical Christmas elf name following these requirements:

FORMAT:
- The name must be exactly 2 or 3 words
- Follow one of these patterns:
  * Adjective-WinterObject (e.g., "Sparkly Snowflake")
  * PlayfulVerb-CozyNoun (e.g., "Twinkle Cocoa")
  * SillyCharacterName-SeasonalFlair (e.g., "Jingles Peppermint")

STYLE GUIDANCE:
- Use {adjective} adjectives
- Use {noun} for nouns
- {twist}

CHRISTMAS THEME:
- Use Christmas-themed vocabulary including: snow, light, candy, sparkle, animals, warmth, winter, mischief
- Make it whimsical and playful in tone
- If using invented words, ensure they are readable and pronounceable

SAFETY REQUIREMENTS (CRITICAL):
- NO political references
- NO religious references
- NO body part references
- NO suggestive content
- Must be family-friendly and appropriate for all ages

INSPIRATION:
- This name is for {first_name}, born in {month}
- Inspiration token: {seed}

EXAMPLES:
- Sparkly Snowbell
- Twinkle Cocoa
- Jingles Peppermint
- Cozy Candlelight
- Merry Mittens

Generate ONE elf name that meets all requirements above. Return ONLY the name, nothing else."#,
        adjective = style_hints.adjective_style,
        noun = style_hints.noun_style,
        twist = style_hints.twist,
        first_name = first_name,
        month = birth_month,
        seed = seed,
    )
}

/// Build the SAFE/UNSAFE classification prompt for a candidate name.
pub fn build_safety_prompt(name: &str) -> String {
    format!(
        r#"You are a family-friendly content validator for a children's Christmas elf name generator.

Evaluate if the following elf name is appropriate for all ages and family-friendly.

Elf Name: "{name}"

The name is UNSAFE if it contains ANY of the following:
- Political references (politicians, political parties, political movements, etc.)
- Religious references (religious figures, religious terms, religious holidays other than Christmas, etc.)
- Body part references (any human or animal body parts)
- Suggestive content (anything with romantic, sexual, or inappropriate connotations)
- Offensive language or inappropriate themes

The name is SAFE if it:
- Uses Christmas-themed vocabulary (snow, candy, sparkle, winter, etc.)
- Is whimsical and playful
- Is appropriate for children of all ages

Respond with ONLY one word: "SAFE" or "UNSAFE"
Do not provide any explanation, just the single word."#,
    )
}
