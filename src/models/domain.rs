use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::lenient;

/// User record handed to the engine by the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "lookingFor", default)]
    pub looking_for: Option<String>,
    #[serde(rename = "isActive", default = "default_true")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub lifestyle: Option<LifestyleProfile>,
    #[serde(rename = "housingPreferences", default, deserialize_with = "lenient::optional")]
    pub housing_preferences: Option<HousingPreferences>,
}

fn default_true() -> bool { true }

impl UserProfile {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            looking_for: None,
            is_active: true,
            lifestyle: None,
            housing_preferences: None,
        }
    }

    /// City from the housing preferences, if one was given
    pub fn city(&self) -> Option<&str> {
        self.housing_preferences
            .as_ref()
            .and_then(|h| h.location.as_ref())
            .and_then(|l| non_blank(&l.city))
    }
}

/// Trimmed contents of an optional string, `None` when absent or blank
pub fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SleepSchedule {
    EarlyBird,
    NightOwl,
    Flexible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cleanliness {
    Relaxed,
    ModeratelyClean,
    VeryClean,
}

impl Cleanliness {
    /// Least to most tidy
    pub const SCALE: [Cleanliness; 3] = [
        Cleanliness::Relaxed,
        Cleanliness::ModeratelyClean,
        Cleanliness::VeryClean,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SocialLevel {
    VerySocial,
    ModeratelySocial,
    Private,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GuestFrequency {
    Never,
    Rarely,
    Occasionally,
    Frequently,
}

impl GuestFrequency {
    /// Least to most frequent
    pub const SCALE: [GuestFrequency; 4] = [
        GuestFrequency::Never,
        GuestFrequency::Rarely,
        GuestFrequency::Occasionally,
        GuestFrequency::Frequently,
    ];
}

/// Day-to-day habits. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LifestyleProfile {
    #[serde(
        rename = "sleepSchedule",
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub sleep_schedule: Option<SleepSchedule>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub cleanliness: Option<Cleanliness>,
    #[serde(
        rename = "socialLevel",
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub social_level: Option<SocialLevel>,
    #[serde(
        rename = "guestFrequency",
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub guest_frequency: Option<GuestFrequency>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub smoking: Option<bool>,
    #[serde(
        rename = "hasPets",
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub has_pets: Option<bool>,
}

/// Monthly budget in currency units
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetRange {
    #[serde(default, deserialize_with = "lenient::number")]
    pub min: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub max: Option<f64>,
}

impl BudgetRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min: Some(min), max: Some(max) }
    }

    /// `(min, max)` when both bounds are finite and ordered.
    /// An inverted or partial range is treated as missing.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        match (self.min, self.max) {
            (Some(min), Some(max)) if min.is_finite() && max.is_finite() && min <= max => {
                Some((min, max))
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default, deserialize_with = "lenient::optional")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub state: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub neighborhood: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HousingPreferences {
    #[serde(rename = "budgetRange", default, deserialize_with = "lenient::optional")]
    pub budget_range: Option<BudgetRange>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub location: Option<Location>,
    #[serde(rename = "moveInDate", default, deserialize_with = "lenient::date")]
    pub move_in_date: Option<NaiveDate>,
}

/// Per-factor sub-scores in `[0, 100]`; `None` when the factor was skipped
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FactorScores {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifestyle: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timing: Option<f64>,
}

/// Outcome of comparing two profiles.
///
/// `total_score` is `None` when no factor could be computed: the pair is
/// not comparable, which is different from a genuine score of 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    #[serde(rename = "totalScore")]
    pub total_score: Option<u8>,
    #[serde(rename = "factorScores")]
    pub factor_scores: FactorScores,
}

impl CompatibilityResult {
    pub fn is_comparable(&self) -> bool {
        self.total_score.is_some()
    }

    /// True only for a comparable result at or above `min_score`
    pub fn meets(&self, min_score: u8) -> bool {
        self.total_score.is_some_and(|score| score >= min_score)
    }
}

/// A candidate that passed the threshold, with its result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub candidate: UserProfile,
    pub compatibility: CompatibilityResult,
}

impl RankedCandidate {
    /// Score of a ranked candidate. Always present after ranking.
    pub fn score(&self) -> u8 {
        self.compatibility.total_score.unwrap_or_default()
    }
}

/// Factor weights. Only the weights of computed factors enter the average.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub lifestyle: f64,
    pub budget: f64,
    pub location: f64,
    pub timing: f64,
}

impl ScoringWeights {
    /// Negative or non-finite weights count as 0
    pub fn sanitized(self) -> Self {
        let clean = |w: f64| if w.is_finite() { w.max(0.0) } else { 0.0 };
        Self {
            lifestyle: clean(self.lifestyle),
            budget: clean(self.budget),
            location: clean(self.location),
            timing: clean(self.timing),
        }
    }

    pub fn sum(&self) -> f64 {
        self.lifestyle + self.budget + self.location + self.timing
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            lifestyle: 40.0,
            budget: 25.0,
            location: 20.0,
            timing: 15.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Pending,
    Mutual,
}

/// Interest from one user in another, mutual once reciprocated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: String,
    #[serde(rename = "initiatedBy")]
    pub initiated_by: String,
    pub recipient: String,
    /// Score at the time the record was created
    #[serde(rename = "compatibilityScore")]
    pub compatibility_score: Option<u8>,
    pub status: MatchStatus,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "matchedAt", default)]
    pub matched_at: Option<DateTime<Utc>>,
}

impl MatchRecord {
    pub fn pending(initiated_by: &str, recipient: &str, compatibility_score: Option<u8>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            initiated_by: initiated_by.to_string(),
            recipient: recipient.to_string(),
            compatibility_score,
            status: MatchStatus::Pending,
            created_at: Utc::now(),
            matched_at: None,
        }
    }

    /// Whether the record links `a` and `b`, in either direction
    pub fn involves(&self, a: &str, b: &str) -> bool {
        (self.initiated_by == a && self.recipient == b)
            || (self.initiated_by == b && self.recipient == a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_from_document() {
        let json = r#"{
            "_id": "64f0c2",
            "lookingFor": "roommate",
            "lifestyle": {
                "sleepSchedule": "night-owl",
                "cleanliness": "very-clean",
                "guestFrequency": "sometimes",
                "smoking": false
            },
            "housingPreferences": {
                "budgetRange": {"min": "800", "max": 1200},
                "location": {"city": "Austin", "state": "TX"},
                "moveInDate": "2025-06-01"
            }
        }"#;

        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.id, "64f0c2");
        assert!(profile.is_active);

        let lifestyle = profile.lifestyle.unwrap();
        assert_eq!(lifestyle.sleep_schedule, Some(SleepSchedule::NightOwl));
        assert_eq!(lifestyle.cleanliness, Some(Cleanliness::VeryClean));
        // Unknown value is dropped, not rejected
        assert_eq!(lifestyle.guest_frequency, None);
        assert_eq!(lifestyle.smoking, Some(false));

        let housing = profile.housing_preferences.unwrap();
        assert_eq!(housing.budget_range.unwrap().bounds(), Some((800.0, 1200.0)));
        assert_eq!(housing.move_in_date, NaiveDate::from_ymd_opt(2025, 6, 1));
    }

    #[test]
    fn test_inverted_budget_is_missing() {
        assert_eq!(BudgetRange::new(1500.0, 900.0).bounds(), None);
        assert_eq!(BudgetRange { min: Some(500.0), max: None }.bounds(), None);
        assert_eq!(BudgetRange::new(900.0, 900.0).bounds(), Some((900.0, 900.0)));
    }

    #[test]
    fn test_city_ignores_blank() {
        let mut profile = UserProfile::new("u1");
        profile.housing_preferences = Some(HousingPreferences {
            location: Some(Location {
                city: Some("   ".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        });
        assert_eq!(profile.city(), None);
    }

    #[test]
    fn test_weights_sanitized() {
        let weights = ScoringWeights {
            lifestyle: -5.0,
            budget: f64::NAN,
            location: 20.0,
            timing: 15.0,
        }
        .sanitized();
        assert_eq!(weights.lifestyle, 0.0);
        assert_eq!(weights.budget, 0.0);
        assert_eq!(weights.sum(), 35.0);
        assert_eq!(ScoringWeights::default().sum(), 100.0);
    }

    #[test]
    fn test_sentinel_never_meets_threshold() {
        let result = CompatibilityResult::default();
        assert!(!result.is_comparable());
        assert!(!result.meets(0));
    }

    #[test]
    fn test_match_record_involves_either_direction() {
        let record = MatchRecord::pending("a", "b", Some(72));
        assert!(record.involves("a", "b"));
        assert!(record.involves("b", "a"));
        assert!(!record.involves("a", "c"));
        assert_eq!(record.status, MatchStatus::Pending);
    }
}
