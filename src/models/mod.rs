// Model exports
pub mod domain;
pub mod lenient;
pub mod requests;
pub mod responses;

pub use domain::{
    BudgetRange, Cleanliness, CompatibilityResult, FactorScores, GuestFrequency,
    HousingPreferences, LifestyleProfile, Location, MatchRecord, MatchStatus, RankedCandidate,
    ScoringWeights, SleepSchedule, SocialLevel, UserProfile,
};
pub use requests::FindMatchesRequest;
pub use responses::{CompatibilityResponse, FindMatchesResponse, InterestResponse};
