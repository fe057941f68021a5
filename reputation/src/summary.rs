//! Read-side reputation summaries for an official.

use crate::engine::RatingEngine;
use crate::error::ReputationError;
use civica_consensus::{weighted_average, WeightedValue};
use civica_store::{Official, ReputationRating, StoreTxn};
use civica_types::{OfficialId, RatingCategory, ReportStatus};
use serde::{Deserialize, Serialize};

/// How many of the newest ratings a summary carries.
const RECENT_RATINGS: usize = 10;

/// Weighted average within a single category.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CategoryAverage {
    pub category: RatingCategory,
    pub average: f64,
    pub count: u64,
}

/// An official's reputation at a glance.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OfficialSummary {
    pub official: Official,
    /// Per-category weighted averages, only for categories with ratings,
    /// in category display order. A category whose total weight is zero
    /// averages 0 (it has ratings but none carry influence).
    pub categories: Vec<CategoryAverage>,
    /// Newest ratings first.
    pub recent_ratings: Vec<ReputationRating>,
    /// Corruption reports against this official that reached `Verified`.
    pub verified_report_count: u64,
}

impl RatingEngine {
    /// Assemble the reputation summary for an official.
    pub fn official_summary(
        &self,
        txn: &dyn StoreTxn,
        official: &OfficialId,
    ) -> Result<OfficialSummary, ReputationError> {
        let record = txn
            .get_official(official)?
            .ok_or_else(|| ReputationError::OfficialNotFound(official.clone()))?;

        let mut ratings = txn.ratings_for_official(official)?;

        let categories = RatingCategory::ALL
            .iter()
            .filter_map(|&category| {
                let in_category: Vec<&ReputationRating> =
                    ratings.iter().filter(|r| r.category == category).collect();
                if in_category.is_empty() {
                    return None;
                }
                let samples: Vec<WeightedValue> = in_category
                    .iter()
                    .map(|r| WeightedValue {
                        value: r.value as f64,
                        weight: r.weight,
                    })
                    .collect();
                Some(CategoryAverage {
                    category,
                    average: weighted_average(&samples, 0.0),
                    count: in_category.len() as u64,
                })
            })
            .collect();

        ratings.sort_by(|a, b| b.rated_at.cmp(&a.rated_at));
        ratings.truncate(RECENT_RATINGS);

        let verified_report_count = txn
            .reports()?
            .iter()
            .filter(|r| &r.official == official && r.status == ReportStatus::Verified)
            .count() as u64;

        Ok(OfficialSummary {
            official: record,
            categories,
            recent_ratings: ratings,
            verified_report_count,
        })
    }
}
