/// Elf Name Generator - AI-Powered Christmas Elf Names
///
/// Core library turning a first name and birth month into a reproducible,
/// family-friendly elf name: deterministic seeding, embedding-derived
/// style hints, prompt construction, safety validation with bounded
/// retries, and a fallback list for when the model misbehaves.

pub mod config;
pub mod core;


pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
