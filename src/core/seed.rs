//! Seed Derivation Module
//!
//! Turns `(first_name, birth_month)` into a short deterministic identifier
//! used to anchor reproducible prompt phrasing. The hash is for
//! reproducibility only, not for authentication or tamper-resistance.

use sha2::{Digest, Sha256};

use crate::core::models::BirthMonth;

/// Number of hex characters kept from the digest
const SEED_LEN: usize = 8;

/// Derive the deterministic seed for one request.
///
/// Concatenates the first name and month exactly as provided (no
/// normalization), hashes the UTF-8 bytes with SHA-256, and keeps the
/// first 8 hex characters of the digest. Pure function: the same pair
/// always yields the same value.
pub fn derive_seed(first_name: &str, birth_month: BirthMonth) -> String {
    let mut hasher = Sha256::new();
    hasher.update(first_name.as_bytes());
    hasher.update(birth_month.name().as_bytes());
    let digest = hasher.finalize();

    hex::encode(digest)[..SEED_LEN].to_string()
}

/// Interpret a seed as an integer, for keying deterministic selections
/// (e.g. the fallback name list). 8 hex chars always fit in a `u32`.
pub fn seed_value(seed: &str) -> u32 {
    u32::from_str_radix(seed, 16).unwrap_or(0)
}
