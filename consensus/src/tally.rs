//! Weighted aggregation: averages over rating sets, quorum tallies over
//! verification votes.

use serde::{Deserialize, Serialize};

/// One weighted sample for [`weighted_average`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeightedValue {
    pub value: f64,
    pub weight: f64,
}

/// Weighted mean of `samples`, or `default` when the total weight is zero.
///
/// The zero-weight case is reachable in practice (every rater may carry
/// weight 0.0) and must not divide by zero.
pub fn weighted_average(samples: &[WeightedValue], default: f64) -> f64 {
    let total_weight: f64 = samples.iter().map(|s| s.weight).sum();
    if total_weight > 0.0 {
        let weighted_sum: f64 = samples.iter().map(|s| s.value * s.weight).sum();
        weighted_sum / total_weight
    } else {
        default
    }
}

/// One weighted verification vote for [`weighted_quorum`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuorumVote {
    pub weight: f64,
    pub positive: bool,
}

/// What a quorum tally concluded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuorumOutcome {
    /// Not enough votes yet; the score is informational only.
    BelowQuorum,
    /// Quorum met and the score reached the verify threshold.
    Verify,
    /// Quorum met and the score fell strictly below the dismiss threshold.
    Dismiss,
    /// Quorum met but the score sits between the thresholds. The subject
    /// stays open indefinitely unless further votes move the score.
    Inconclusive,
}

/// Result of tallying weighted quorum votes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuorumTally {
    /// Percentage of total weight that voted positive (0 when no votes).
    pub score: f64,
    /// Number of votes cast.
    pub count: u32,
    pub outcome: QuorumOutcome,
}

/// Tally weighted votes against a count quorum and score thresholds.
///
/// The score is `positive_weight / total_weight × 100`. Below `required`
/// votes the outcome is always `BelowQuorum` regardless of score. At or
/// above quorum: `score >= verify_threshold` verifies, `score <
/// dismiss_threshold` dismisses (strict), anything between is
/// `Inconclusive`. A score of exactly `dismiss_threshold` is inconclusive,
/// not a dismissal.
pub fn weighted_quorum(
    votes: &[QuorumVote],
    required: u32,
    verify_threshold: f64,
    dismiss_threshold: f64,
) -> QuorumTally {
    let total_weight: f64 = votes.iter().map(|v| v.weight).sum();
    let positive_weight: f64 = votes.iter().filter(|v| v.positive).map(|v| v.weight).sum();

    let score = if total_weight > 0.0 {
        positive_weight / total_weight * 100.0
    } else {
        0.0
    };
    let count = votes.len() as u32;

    let outcome = if count < required {
        QuorumOutcome::BelowQuorum
    } else if score >= verify_threshold {
        QuorumOutcome::Verify
    } else if score < dismiss_threshold {
        QuorumOutcome::Dismiss
    } else {
        QuorumOutcome::Inconclusive
    };

    QuorumTally {
        score,
        count,
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use civica_types::params;

    fn votes(entries: &[(f64, bool)]) -> Vec<QuorumVote> {
        entries.iter()
            .map(|&(weight, positive)| QuorumVote { weight, positive })
            .collect()
    }

    fn tally(entries: &[(f64, bool)], required: u32) -> QuorumTally {
        weighted_quorum(
            &votes(entries),
            required,
            params::VERIFY_THRESHOLD,
            params::DISMISS_THRESHOLD,
        )
    }

    #[test]
    fn average_of_empty_set_is_the_default() {
        assert_eq!(weighted_average(&[], 2.5), 2.5);
    }

    #[test]
    fn zero_total_weight_falls_back_to_default() {
        let samples = [WeightedValue {
            value: 4.0,
            weight: 0.0,
        }];
        assert_eq!(weighted_average(&samples, 2.5), 2.5);
    }

    #[test]
    fn average_weighs_heavier_samples_more() {
        let samples = [
            WeightedValue {
                value: 5.0,
                weight: 3.0,
            },
            WeightedValue {
                value: 1.0,
                weight: 1.0,
            },
        ];
        assert_eq!(weighted_average(&samples, 2.5), 4.0);
    }

    #[test]
    fn below_quorum_regardless_of_score() {
        let t = tally(&[(1.0, true), (1.0, true)], 3);
        assert_eq!(t.outcome, QuorumOutcome::BelowQuorum);
        assert_eq!(t.score, 100.0);
        assert_eq!(t.count, 2);
    }

    #[test]
    fn empty_votes_score_zero() {
        let t = tally(&[], 3);
        assert_eq!(t.score, 0.0);
        assert_eq!(t.count, 0);
        assert_eq!(t.outcome, QuorumOutcome::BelowQuorum);
    }

    #[test]
    fn exactly_sixty_percent_verifies() {
        // 3 positive of weight 1, 2 negative of weight 1 → 60.0
        let t = tally(
            &[
                (1.0, true),
                (1.0, true),
                (1.0, true),
                (1.0, false),
                (1.0, false),
            ],
            5,
        );
        assert_eq!(t.score, 60.0);
        assert_eq!(t.outcome, QuorumOutcome::Verify);
    }

    #[test]
    fn exactly_forty_percent_is_inconclusive() {
        // 2 positive, 3 negative → 40.0: not a dismissal, the threshold is strict.
        let t = tally(
            &[
                (1.0, true),
                (1.0, true),
                (1.0, false),
                (1.0, false),
                (1.0, false),
            ],
            5,
        );
        assert_eq!(t.score, 40.0);
        assert_eq!(t.outcome, QuorumOutcome::Inconclusive);
    }

    #[test]
    fn strictly_below_forty_dismisses() {
        let t = tally(&[(1.0, true), (1.0, false), (1.0, false)], 3);
        assert!(t.score < 40.0);
        assert_eq!(t.outcome, QuorumOutcome::Dismiss);
    }

    #[test]
    fn guardian_weight_shifts_the_score() {
        // 4 trusted valid + 1 guardian invalid: 4/6 ≈ 66.67 → verify.
        let t = tally(
            &[
                (1.0, true),
                (1.0, true),
                (1.0, true),
                (1.0, true),
                (2.0, false),
            ],
            5,
        );
        assert!((t.score - 100.0 * 4.0 / 6.0).abs() < 1e-9);
        assert_eq!(t.outcome, QuorumOutcome::Verify);
    }
}
