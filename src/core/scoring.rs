use crate::core::{
    budget::budget_score, lifestyle::lifestyle_score, location::location_score,
    timing::timing_score,
};
use crate::models::{CompatibilityResult, FactorScores, ScoringWeights, UserProfile};

/// Calculate the compatibility of two users with the default weights
///
/// See [`calculate_compatibility_with`].
pub fn calculate_compatibility(a: &UserProfile, b: &UserProfile) -> CompatibilityResult {
    calculate_compatibility_with(a, b, &ScoringWeights::default())
}

/// Calculate the compatibility (0-100) of two users
///
/// Scoring formula, over the factors both users have data for:
/// total = round(
///     (lifestyle * 40 +      # shared habits
///      budget * 25 +         # budget range overlap
///      location * 20 +       # same city / neighbourhood
///      timing * 15)          # move-in dates close together
///     / sum of weights used
/// )
///
/// A factor missing on either side is left out of both the numerator and
/// the weight sum. When nothing can be compared the total is `None`.
pub fn calculate_compatibility_with(
    a: &UserProfile,
    b: &UserProfile,
    weights: &ScoringWeights,
) -> CompatibilityResult {
    let weights = weights.sanitized();
    let housing_a = a.housing_preferences.as_ref();
    let housing_b = b.housing_preferences.as_ref();

    let factor_scores = FactorScores {
        lifestyle: a
            .lifestyle
            .as_ref()
            .zip(b.lifestyle.as_ref())
            .and_then(|(x, y)| lifestyle_score(x, y)),
        budget: housing_a
            .and_then(|h| h.budget_range.as_ref())
            .zip(housing_b.and_then(|h| h.budget_range.as_ref()))
            .and_then(|(x, y)| budget_score(x, y)),
        location: housing_a
            .and_then(|h| h.location.as_ref())
            .zip(housing_b.and_then(|h| h.location.as_ref()))
            .and_then(|(x, y)| location_score(x, y)),
        timing: housing_a
            .and_then(|h| h.move_in_date)
            .zip(housing_b.and_then(|h| h.move_in_date))
            .map(|(x, y)| timing_score(x, y)),
    };

    CompatibilityResult {
        total_score: weighted_total(&factor_scores, &weights),
        factor_scores,
    }
}

/// Weighted mean of the computed factors, rounded to an integer
fn weighted_total(scores: &FactorScores, weights: &ScoringWeights) -> Option<u8> {
    let weighted = [
        (scores.lifestyle, weights.lifestyle),
        (scores.budget, weights.budget),
        (scores.location, weights.location),
        (scores.timing, weights.timing),
    ];

    let (sum, total_weight) = weighted
        .iter()
        .filter_map(|(score, weight)| score.map(|s| (s, *weight)))
        .fold((0.0_f64, 0.0_f64), |(sum, total), (score, weight)| {
            (sum + score * weight, total + weight)
        });

    if total_weight <= 0.0 {
        return None;
    }

    Some((sum / total_weight).round().clamp(0.0, 100.0) as u8)
}
