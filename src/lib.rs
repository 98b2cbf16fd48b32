//! roomie-match - Lifestyle compatibility matching for roomieVerse
//!
//! This library scores how well two users would live together, from their
//! habits, budgets, locations and move-in dates, and ranks a candidate pool
//! against one user. The engine in [`core`] is pure and stateless; the
//! [`services`] layer loads profiles and keeps interest records around it.

pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use core::{calculate_compatibility, find_compatible_users, Matcher};
pub use models::{CompatibilityResult, FactorScores, RankedCandidate, ScoringWeights, UserProfile};
pub use services::{MatchService, ServiceError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Two empty profiles are not comparable
        let result = calculate_compatibility(&UserProfile::new("a"), &UserProfile::new("b"));
        assert!(!result.is_comparable());
    }
}
