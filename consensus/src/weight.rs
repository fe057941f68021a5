//! Influence weights derived from citizen trust attributes.
//!
//! Weights are snapshotted at the moment a rating or verification is
//! written; later changes to the citizen's score or level never alter past
//! weights.

use civica_types::{params, VerificationLevel};

/// The per-level multiplier used by rating weight.
pub fn level_multiplier(level: VerificationLevel) -> f64 {
    match level {
        VerificationLevel::Basic => params::BASIC_LEVEL_MULTIPLIER,
        VerificationLevel::Verified => params::VERIFIED_LEVEL_MULTIPLIER,
        VerificationLevel::Trusted => params::TRUSTED_LEVEL_MULTIPLIER,
        VerificationLevel::Guardian => params::GUARDIAN_LEVEL_MULTIPLIER,
    }
}

/// Influence weight of a citizen's rating.
///
/// `base × min(score / 1000, 2.0) × level_multiplier`. A citizen with zero
/// reputation contributes weight 0.0; aggregation must tolerate a rating
/// set whose total weight is zero.
pub fn rating_weight(reputation_score: i64, level: VerificationLevel) -> f64 {
    let reputation_multiplier = (reputation_score as f64 / params::REPUTATION_WEIGHT_DIVISOR)
        .min(params::MAX_REPUTATION_MULTIPLIER);
    params::BASE_WEIGHT * reputation_multiplier * level_multiplier(level)
}

/// Influence weight of a report-verification vote.
///
/// Uses the verification level only — Guardians count double, Trusted count
/// once. Reputation score deliberately plays no part here, unlike
/// [`rating_weight`]; the asymmetry is part of the platform's rules.
pub fn verification_weight(level: VerificationLevel) -> f64 {
    match level {
        VerificationLevel::Guardian => params::GUARDIAN_VERIFICATION_WEIGHT,
        _ => params::TRUSTED_VERIFICATION_WEIGHT,
    }
}
