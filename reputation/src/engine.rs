//! Rating submission and aggregate recomputation.

use crate::error::ReputationError;
use civica_consensus::{rating_weight, weighted_average, WeightedValue};
use civica_store::{ReputationRating, StoreTxn};
use civica_types::{params, CitizenId, OfficialId, RatingCategory, Timestamp};
use serde::{Deserialize, Serialize};

/// A citizen's rating submission, shape-validated by the caller.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SubmitRating {
    pub official: OfficialId,
    pub citizen: CitizenId,
    pub category: RatingCategory,
    /// 1–5 inclusive.
    pub value: u8,
    pub comment: Option<String>,
    pub evidence: Option<String>,
}

/// Engine for weighted rating aggregation.
pub struct RatingEngine;

impl RatingEngine {
    /// Submit (or re-submit) a rating and recompute the official's aggregate.
    ///
    /// Runs entirely inside the caller's transaction: the upsert, the full
    /// re-read of the official's ratings, the aggregate write-back and the
    /// rater's reward commit or roll back together. Re-submission replaces
    /// the existing `(official, citizen, category)` record — the weight is
    /// re-snapshotted from the citizen's current attributes, not averaged
    /// with the old one.
    pub fn submit_rating(
        &self,
        txn: &mut dyn StoreTxn,
        submission: SubmitRating,
        now: Timestamp,
    ) -> Result<ReputationRating, ReputationError> {
        if !(params::MIN_RATING..=params::MAX_RATING).contains(&submission.value) {
            return Err(ReputationError::RatingOutOfRange(submission.value));
        }

        let mut official = txn
            .get_official(&submission.official)?
            .filter(|o| o.is_active)
            .ok_or_else(|| ReputationError::OfficialNotFound(submission.official.clone()))?;

        let citizen = txn
            .get_citizen(&submission.citizen)?
            .ok_or_else(|| ReputationError::CitizenNotFound(submission.citizen.clone()))?;

        let weight = rating_weight(citizen.reputation_score, citizen.verification_level);

        let rating = ReputationRating {
            official: submission.official.clone(),
            citizen: submission.citizen.clone(),
            category: submission.category,
            value: submission.value,
            weight,
            comment: submission.comment,
            evidence: submission.evidence,
            rated_at: now,
        };
        txn.upsert_rating(&rating)?;

        let ratings = txn.ratings_for_official(&submission.official)?;
        let samples: Vec<WeightedValue> = ratings
            .iter()
            .map(|r| WeightedValue {
                value: r.value as f64,
                weight: r.weight,
            })
            .collect();

        official.avg_reputation = weighted_average(&samples, params::NEUTRAL_RATING);
        official.total_ratings = ratings.len() as u64;
        txn.put_official(&official)?;

        txn.add_reputation(&submission.citizen, params::RATING_REWARD)?;

        tracing::debug!(
            official = %rating.official,
            citizen = %rating.citizen,
            weight,
            avg_reputation = official.avg_reputation,
            "rating recorded"
        );

        Ok(rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use civica_nullables::MemoryStore;
    use civica_store::{Citizen, EngineStore, Official, StoreError};
    use civica_types::VerificationLevel;

    fn test_citizen(n: u8, score: i64, level: VerificationLevel) -> Citizen {
        Citizen {
            id: CitizenId::new(format!("citizen-{n}")),
            reputation_score: score,
            verification_level: level,
            is_active: true,
        }
    }

    fn test_official(n: u8) -> Official {
        Official {
            id: OfficialId::new(format!("official-{n}")),
            avg_reputation: 0.0,
            total_ratings: 0,
            transparency_score: 100.0,
            is_active: true,
        }
    }

    fn seed(store: &MemoryStore, citizens: &[Citizen], officials: &[Official]) {
        store
            .atomically(|txn| {
                for c in citizens {
                    txn.put_citizen(c)?;
                }
                for o in officials {
                    txn.put_official(o)?;
                }
                Ok::<_, StoreError>(())
            })
            .unwrap();
    }

    fn submission(citizen: &Citizen, official: &Official, value: u8) -> SubmitRating {
        SubmitRating {
            official: official.id.clone(),
            citizen: citizen.id.clone(),
            category: RatingCategory::Integrity,
            value,
            comment: None,
            evidence: None,
        }
    }

    fn submit(store: &MemoryStore, s: SubmitRating) -> Result<ReputationRating, ReputationError> {
        store.atomically(|txn| RatingEngine.submit_rating(txn, s, Timestamp::new(1000)))
    }

    fn official_state(store: &MemoryStore, id: &OfficialId) -> Official {
        store
            .atomically(|txn| txn.get_official(id))
            .unwrap()
            .unwrap()
    }

    #[test]
    fn rating_snapshots_weight_and_recomputes_average() {
        let store = MemoryStore::new();
        let citizen = test_citizen(1, 1000, VerificationLevel::Verified);
        let official = test_official(1);
        seed(&store, &[citizen.clone()], &[official.clone()]);

        let rating = submit(&store, submission(&citizen, &official, 4)).unwrap();
        assert_eq!(rating.value, 4);
        assert_eq!(rating.weight, 1.2);

        let o = official_state(&store, &official.id);
        assert_eq!(o.avg_reputation, 4.0);
        assert_eq!(o.total_ratings, 1);
    }

    #[test]
    fn zero_weight_rating_keeps_neutral_average() {
        // Basic citizen with zero reputation carries weight 0: the rating row
        // exists but the aggregate stays at the neutral midpoint.
        let store = MemoryStore::new();
        let citizen = test_citizen(1, 0, VerificationLevel::Basic);
        let official = test_official(1);
        seed(&store, &[citizen.clone()], &[official.clone()]);

        let rating = submit(&store, submission(&citizen, &official, 4)).unwrap();
        assert_eq!(rating.weight, 0.0);

        let o = official_state(&store, &official.id);
        assert_eq!(o.avg_reputation, 2.5);
        assert_eq!(o.total_ratings, 1);
    }

    #[test]
    fn resubmission_updates_in_place_and_never_double_counts() {
        let store = MemoryStore::new();
        let citizen = test_citizen(1, 1000, VerificationLevel::Basic);
        let official = test_official(1);
        seed(&store, &[citizen.clone()], &[official.clone()]);

        submit(&store, submission(&citizen, &official, 2)).unwrap();
        submit(&store, submission(&citizen, &official, 5)).unwrap();

        let o = official_state(&store, &official.id);
        assert_eq!(o.total_ratings, 1);
        assert_eq!(o.avg_reputation, 5.0);
    }

    #[test]
    fn resubmission_resnapshots_the_weight() {
        let store = MemoryStore::new();
        let citizen = test_citizen(1, 1000, VerificationLevel::Basic);
        let official = test_official(1);
        seed(&store, &[citizen.clone()], &[official.clone()]);

        let first = submit(&store, submission(&citizen, &official, 3)).unwrap();
        assert_eq!(first.weight, 1.0);

        // Rewards from the first submission raise the score, so the second
        // snapshot is heavier — not an average of the two snapshots.
        let second = submit(&store, submission(&citizen, &official, 3)).unwrap();
        assert_eq!(second.weight, 1.005);
    }

    #[test]
    fn weighted_mean_across_citizens() {
        let store = MemoryStore::new();
        // Weight 2.0 (guardian, capped multiplier 1.0 at 1000 pts → 2.0).
        let heavy = test_citizen(1, 1000, VerificationLevel::Guardian);
        // Weight 1.0.
        let light = test_citizen(2, 1000, VerificationLevel::Basic);
        let official = test_official(1);
        seed(
            &store,
            &[heavy.clone(), light.clone()],
            &[official.clone()],
        );

        submit(&store, submission(&heavy, &official, 5)).unwrap();
        submit(&store, submission(&light, &official, 2)).unwrap();

        let o = official_state(&store, &official.id);
        // (5×2 + 2×1) / 3 = 4.0
        assert_eq!(o.avg_reputation, 4.0);
        assert_eq!(o.total_ratings, 2);
    }

    #[test]
    fn rater_earns_points_on_every_accepted_submission() {
        let store = MemoryStore::new();
        let citizen = test_citizen(1, 100, VerificationLevel::Basic);
        let official = test_official(1);
        seed(&store, &[citizen.clone()], &[official.clone()]);

        submit(&store, submission(&citizen, &official, 4)).unwrap();
        submit(&store, submission(&citizen, &official, 4)).unwrap();

        let c = store
            .atomically(|txn| txn.get_citizen(&citizen.id))
            .unwrap()
            .unwrap();
        assert_eq!(c.reputation_score, 110);
    }

    #[test]
    fn inactive_official_is_not_found() {
        let store = MemoryStore::new();
        let citizen = test_citizen(1, 100, VerificationLevel::Basic);
        let mut official = test_official(1);
        official.is_active = false;
        seed(&store, &[citizen.clone()], &[official.clone()]);

        let err = submit(&store, submission(&citizen, &official, 4)).unwrap_err();
        assert!(matches!(err, ReputationError::OfficialNotFound(_)));
        assert_eq!(err.kind(), civica_types::FailureKind::NotFound);
    }

    #[test]
    fn missing_citizen_is_not_found() {
        let store = MemoryStore::new();
        let citizen = test_citizen(1, 100, VerificationLevel::Basic);
        let official = test_official(1);
        seed(&store, &[], &[official.clone()]);

        let err = submit(&store, submission(&citizen, &official, 4)).unwrap_err();
        assert!(matches!(err, ReputationError::CitizenNotFound(_)));
    }

    #[test]
    fn out_of_range_value_is_rejected() {
        let store = MemoryStore::new();
        let citizen = test_citizen(1, 100, VerificationLevel::Basic);
        let official = test_official(1);
        seed(&store, &[citizen.clone()], &[official.clone()]);

        for value in [0, 6] {
            let err = submit(&store, submission(&citizen, &official, value)).unwrap_err();
            assert!(matches!(err, ReputationError::RatingOutOfRange(v) if v == value));
        }
    }

    #[test]
    fn failed_submission_leaves_no_rating_row() {
        let store = MemoryStore::new();
        let citizen = test_citizen(1, 100, VerificationLevel::Basic);
        let official = test_official(1);
        seed(&store, &[citizen.clone()], &[official.clone()]);

        submit(&store, submission(&citizen, &official, 9)).unwrap_err();

        let ratings = store
            .atomically(|txn| txn.ratings_for_official(&official.id))
            .unwrap();
        assert!(ratings.is_empty());
    }
}
