//! Reputation rating storage trait.

use crate::StoreError;
use civica_types::{CitizenId, OfficialId, RatingCategory, Timestamp};
use serde::{Deserialize, Serialize};

/// One citizen's rating of one official in one category.
///
/// Unique on `(official, citizen, category)` — re-submission replaces the
/// record in place, it never creates a second row. The weight is snapshotted
/// at write time; later changes to the citizen never rewrite it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReputationRating {
    pub official: OfficialId,
    pub citizen: CitizenId,
    pub category: RatingCategory,
    /// 1–5 inclusive.
    pub value: u8,
    pub weight: f64,
    pub comment: Option<String>,
    /// URL or content-addressed hash of supporting evidence.
    pub evidence: Option<String>,
    pub rated_at: Timestamp,
}

/// Rating operations available inside a transaction.
pub trait RatingTxn {
    /// Insert or replace the rating for `(official, citizen, category)`.
    fn upsert_rating(&mut self, rating: &ReputationRating) -> Result<(), StoreError>;

    fn get_rating(
        &self,
        official: &OfficialId,
        citizen: &CitizenId,
        category: RatingCategory,
    ) -> Result<Option<ReputationRating>, StoreError>;

    /// All ratings for an official, across citizens and categories.
    fn ratings_for_official(
        &self,
        official: &OfficialId,
    ) -> Result<Vec<ReputationRating>, StoreError>;
}
