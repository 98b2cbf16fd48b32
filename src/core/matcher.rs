use crate::core::scoring::calculate_compatibility_with;
use crate::models::{CompatibilityResult, RankedCandidate, ScoringWeights, UserProfile};

/// Threshold used when the caller does not supply one
pub const DEFAULT_MIN_SCORE: u8 = 60;

/// Rank `candidates` against `target` with the default weights
///
/// See [`Matcher::find_compatible_users`].
pub fn find_compatible_users(
    candidates: Vec<UserProfile>,
    target: &UserProfile,
    min_score: u8,
) -> Vec<RankedCandidate> {
    Matcher::with_default_weights().find_compatible_users(candidates, target, min_score)
}

/// Ranks a candidate pool against one user
///
/// # Pipeline Stages
/// 1. Self exclusion (by user id)
/// 2. Compatibility scoring
/// 3. Threshold filtering (incomparable pairs are dropped)
/// 4. Stable sort, best first
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        let weights = weights.sanitized();
        if weights.sum() <= 0.0 {
            tracing::warn!("All scoring weights are zero; no pair will be comparable");
        }
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Compare two users with this matcher's weights
    pub fn compatibility(&self, a: &UserProfile, b: &UserProfile) -> CompatibilityResult {
        calculate_compatibility_with(a, b, &self.weights)
    }

    /// Score every candidate against `target` and keep those at or above
    /// `min_score`, best first. Equal scores keep their input order.
    ///
    /// # Arguments
    /// * `candidates` - Pool to rank; may contain the target itself
    /// * `target` - The user matches are found for
    /// * `min_score` - Inclusive threshold on the total score
    pub fn find_compatible_users(
        &self,
        candidates: Vec<UserProfile>,
        target: &UserProfile,
        min_score: u8,
    ) -> Vec<RankedCandidate> {
        let pool_size = candidates.len();

        let mut ranked: Vec<RankedCandidate> = candidates
            .into_iter()
            // Stage 1: never match a user with themselves
            .filter(|candidate| candidate.id != target.id)
            // Stage 2 & 3: score and apply the threshold
            .filter_map(|candidate| {
                let compatibility = self.compatibility(target, &candidate);

                if compatibility.meets(min_score) {
                    Some(RankedCandidate {
                        candidate,
                        compatibility,
                    })
                } else {
                    None
                }
            })
            .collect();

        // Stage 4: `sort_by` is stable, ties stay in input order
        ranked.sort_by(|a, b| b.score().cmp(&a.score()));

        tracing::debug!(
            "Ranked {} of {} candidates for {} (min score {})",
            ranked.len(),
            pool_size,
            target.id,
            min_score
        );

        ranked
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
