use crate::config::MatchingSettings;
use crate::core::Matcher;
use crate::models::{
    CompatibilityResponse, FindMatchesRequest, FindMatchesResponse, InterestResponse, MatchStatus,
    UserProfile,
};
use crate::services::store::{Interest, MatchStore, ProfileStore, StoreError};
use thiserror::Error;
use validator::Validate;

/// Errors returned to callers of the match service
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("User not found: {0}")]
    NotFound(String),

    #[error("A user cannot be matched with themselves")]
    SelfComparison,

    #[error("Profile {0} has no lifestyle information")]
    IncompleteProfile(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Caller layer around the engine
///
/// Loads profiles, narrows the candidate pool, applies request defaults and
/// caps, and keeps interest records. Scoring itself is left to [`Matcher`].
pub struct MatchService<P, M> {
    profiles: P,
    matches: M,
    matcher: Matcher,
    settings: MatchingSettings,
}

impl<P: ProfileStore, M: MatchStore> MatchService<P, M> {
    pub fn new(profiles: P, matches: M, matcher: Matcher, settings: MatchingSettings) -> Self {
        Self {
            profiles,
            matches,
            matcher,
            settings,
        }
    }

    pub fn profiles(&self) -> &P {
        &self.profiles
    }

    pub fn matches(&self) -> &M {
        &self.matches
    }

    /// Rank compatible users for `req.user_id`
    ///
    /// The pool is every other active profile, narrowed by the optional
    /// `city` and `lookingFor` filters. Results are capped at the smaller of the
    /// request limit and the configured maximum.
    pub fn find_matches(
        &self,
        req: &FindMatchesRequest,
    ) -> Result<FindMatchesResponse, ServiceError> {
        if let Err(errors) = req.validate() {
            tracing::warn!("Validation failed for find_matches request: {:?}", errors);
            return Err(errors.into());
        }

        let target = self.load(&req.user_id)?;
        let min_score = req.min_score.unwrap_or(self.settings.default_min_score);
        let limit = req
            .limit
            .map_or(self.settings.max_results, usize::from)
            .min(self.settings.max_results);

        tracing::debug!(
            "Finding matches for user: {}, min score: {}, city: {:?}, lookingFor: {:?}",
            target.id,
            min_score,
            req.city,
            req.looking_for
        );

        let candidates: Vec<UserProfile> = self
            .profiles
            .list_profiles()?
            .into_iter()
            .filter(|p| p.id != target.id)
            .filter(|p| p.is_active)
            .filter(|p| matches_filter(p.city(), req.city.as_deref()))
            .filter(|p| matches_filter(p.looking_for.as_deref(), req.looking_for.as_deref()))
            .collect();

        let total_candidates = candidates.len();

        let mut matches = self.matcher.find_compatible_users(candidates, &target, min_score);
        matches.truncate(limit);

        tracing::info!(
            "Returning {} matches for user {} (from {} candidates)",
            matches.len(),
            target.id,
            total_candidates
        );

        Ok(FindMatchesResponse {
            matches,
            total_candidates,
            min_score,
        })
    }

    /// Compare two users directly. Both must have lifestyle information.
    pub fn compatibility(
        &self,
        user_id: &str,
        other_id: &str,
    ) -> Result<CompatibilityResponse, ServiceError> {
        if user_id == other_id {
            return Err(ServiceError::SelfComparison);
        }

        let user = self.load(user_id)?;
        let other = self.load(other_id)?;

        for profile in [&user, &other] {
            if profile.lifestyle.is_none() {
                tracing::warn!("Rejecting compatibility request: {} has no lifestyle", profile.id);
                return Err(ServiceError::IncompleteProfile(profile.id.clone()));
            }
        }

        let compatibility = self.matcher.compatibility(&user, &other);

        tracing::debug!(
            "Compatibility {} -> {}: {:?}",
            user_id,
            other_id,
            compatibility.total_score
        );

        Ok(CompatibilityResponse {
            user_id: user.id,
            other_user_id: other.id,
            compatibility,
        })
    }

    /// Record that `from_id` is interested in `to_id`
    ///
    /// The first expression of interest creates a pending record with a
    /// snapshot of the current score. Interest from the recipient of a
    /// pending record makes it mutual. Anything else returns the existing
    /// record unchanged.
    pub fn express_interest(
        &self,
        from_id: &str,
        to_id: &str,
    ) -> Result<InterestResponse, ServiceError> {
        if from_id == to_id {
            return Err(ServiceError::SelfComparison);
        }

        let from = self.load(from_id)?;
        let to = self.load(to_id)?;

        let snapshot = self.matcher.compatibility(&from, &to).total_score;

        let response = match self.matches.record_interest(&from.id, &to.id, snapshot)? {
            Interest::Created(record) => {
                tracing::info!(
                    "Recorded interest {} -> {} (score {:?})",
                    from.id,
                    to.id,
                    snapshot
                );
                InterestResponse {
                    record,
                    created: true,
                    is_mutual: false,
                }
            }
            Interest::Reciprocated(record) => {
                tracing::info!("Mutual match between {} and {}", from.id, to.id);
                InterestResponse {
                    record,
                    created: false,
                    is_mutual: true,
                }
            }
            Interest::Existing(record) => {
                tracing::debug!("Interest {} -> {} already recorded", from.id, to.id);
                let is_mutual = record.status == MatchStatus::Mutual;
                InterestResponse {
                    record,
                    created: false,
                    is_mutual,
                }
            }
        };

        Ok(response)
    }

    fn load(&self, user_id: &str) -> Result<UserProfile, ServiceError> {
        self.profiles
            .get_profile(user_id)?
            .ok_or_else(|| ServiceError::NotFound(user_id.to_string()))
    }
}

/// No filter matches everything; otherwise the value must be present and
/// equal ignoring case and surrounding whitespace
fn matches_filter(value: Option<&str>, filter: Option<&str>) -> bool {
    match filter.map(str::trim).filter(|f| !f.is_empty()) {
        None => true,
        Some(wanted) => value.is_some_and(|v| v.trim().to_lowercase() == wanted.to_lowercase()),
    }
}
