//! The engine's constant table.
//!
//! Every fixed bonus, threshold and multiplier lives here so no literal
//! appears at a call site and tests can pin exact values. These are protocol
//! constants of the platform, not configuration.

// ── Influence weights ────────────────────────────────────────────────

/// Base influence weight every citizen starts from.
pub const BASE_WEIGHT: f64 = 1.0;

/// Reputation points corresponding to a 1.0x reputation multiplier.
pub const REPUTATION_WEIGHT_DIVISOR: f64 = 1000.0;

/// Cap on the reputation multiplier.
pub const MAX_REPUTATION_MULTIPLIER: f64 = 2.0;

/// Level multipliers for rating weight.
pub const BASIC_LEVEL_MULTIPLIER: f64 = 1.0;
pub const VERIFIED_LEVEL_MULTIPLIER: f64 = 1.2;
pub const TRUSTED_LEVEL_MULTIPLIER: f64 = 1.5;
pub const GUARDIAN_LEVEL_MULTIPLIER: f64 = 2.0;

/// Report-verification weight uses the citizen's level only — Guardians
/// count double, Trusted count once. Reputation score is deliberately not a
/// factor here, unlike rating weight.
pub const GUARDIAN_VERIFICATION_WEIGHT: f64 = 2.0;
pub const TRUSTED_VERIFICATION_WEIGHT: f64 = 1.0;

// ── Ratings ──────────────────────────────────────────────────────────

/// Valid rating value bounds (inclusive).
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Reputation shown for an official with no weighted ratings yet.
pub const NEUTRAL_RATING: f64 = 2.5;

// ── Report quorum ────────────────────────────────────────────────────

/// Community score (percent) at or above which a report is verified.
pub const VERIFY_THRESHOLD: f64 = 60.0;

/// Community score (percent) strictly below which a report is dismissed.
pub const DISMISS_THRESHOLD: f64 = 40.0;

/// Verification votes required before a critical report can leave `Pending`.
pub const CRITICAL_REQUIRED_VERIFICATIONS: u32 = 5;

/// Verification votes required for all other severities.
pub const DEFAULT_REQUIRED_VERIFICATIONS: u32 = 3;

// ── Citizen rewards (relative increments, one per accepted operation) ─

/// Points awarded for submitting (or re-submitting) a rating.
pub const RATING_REWARD: i64 = 5;

/// Points awarded for casting an election vote.
pub const VOTE_REWARD: i64 = 10;

/// Points awarded for a verification vote marking a report valid.
pub const VERIFY_VALID_REWARD: i64 = 20;

/// Points awarded for a verification vote marking a report invalid.
pub const VERIFY_INVALID_REWARD: i64 = 10;

// ── Penalties applied when a report is verified ──────────────────────

/// Subtracted from the official's average reputation (not clamped).
pub const VERIFIED_REPORT_REPUTATION_PENALTY: f64 = 0.5;

/// Subtracted from the official's transparency score.
pub const VERIFIED_REPORT_TRANSPARENCY_PENALTY: f64 = 20.0;
