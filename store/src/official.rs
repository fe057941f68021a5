//! Official storage trait.

use crate::StoreError;
use civica_types::OfficialId;
use serde::{Deserialize, Serialize};

/// A public official with derived reputation aggregates.
///
/// `avg_reputation` and `total_ratings` are always recomputed from the full
/// rating set inside the submitting transaction; no citizen action writes
/// them directly. `transparency_score` only moves through report penalties.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Official {
    pub id: OfficialId,
    pub avg_reputation: f64,
    pub total_ratings: u64,
    pub transparency_score: f64,
    pub is_active: bool,
}

/// Official operations available inside a transaction.
pub trait OfficialTxn {
    fn get_official(&self, id: &OfficialId) -> Result<Option<Official>, StoreError>;

    fn put_official(&mut self, official: &Official) -> Result<(), StoreError>;

    /// Apply relative deltas to an official's scores (report penalties).
    /// Neither score is clamped. Fails with `NotFound` if the official does
    /// not exist.
    fn adjust_official_scores(
        &mut self,
        id: &OfficialId,
        avg_reputation_delta: f64,
        transparency_delta: f64,
    ) -> Result<(), StoreError>;

    fn active_official_count(&self) -> Result<u64, StoreError>;
}
