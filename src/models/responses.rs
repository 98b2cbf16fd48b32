use serde::{Deserialize, Serialize};
use crate::models::domain::{CompatibilityResult, MatchRecord, RankedCandidate};

/// Response for the find matches operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindMatchesResponse {
    pub matches: Vec<RankedCandidate>,
    /// Other users in the filtered pool, before the threshold and cap
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
    #[serde(rename = "minScore")]
    pub min_score: u8,
}

/// Direct comparison of two users
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibilityResponse {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "otherUserId")]
    pub other_user_id: String,
    pub compatibility: CompatibilityResult,
}

/// Outcome of expressing interest in another user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestResponse {
    #[serde(rename = "match")]
    pub record: MatchRecord,
    /// False when an existing record was returned
    pub created: bool,
    #[serde(rename = "isMutual")]
    pub is_mutual: bool,
}
