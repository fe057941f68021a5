//! Citizen verification levels.

use serde::{Deserialize, Serialize};

/// Ordered trust tier gating which actions a citizen may perform.
///
/// The derive order is the trust order: `Basic < Verified < Trusted < Guardian`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VerificationLevel {
    /// Default tier for a new account.
    Basic,
    /// Identity confirmed.
    Verified,
    /// Long-standing contributor with verified history.
    Trusted,
    /// Highest tier; community steward.
    Guardian,
}

impl VerificationLevel {
    /// Whether this citizen may file corruption reports.
    pub fn can_file_reports(&self) -> bool {
        *self >= Self::Verified
    }

    /// Whether this citizen may cast verification votes on corruption reports.
    pub fn can_verify_reports(&self) -> bool {
        matches!(self, Self::Trusted | Self::Guardian)
    }
}
