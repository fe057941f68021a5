//! Rating categories for official reputation.

use serde::{Deserialize, Serialize};

/// The dimension a citizen rates an official on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RatingCategory {
    Transparency,
    Effectiveness,
    Integrity,
    Communication,
    Responsiveness,
    Overall,
}

impl RatingCategory {
    /// All categories in display order.
    pub const ALL: [RatingCategory; 6] = [
        Self::Transparency,
        Self::Effectiveness,
        Self::Integrity,
        Self::Communication,
        Self::Responsiveness,
        Self::Overall,
    ];
}
