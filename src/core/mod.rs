// Core algorithm exports
pub mod budget;
pub mod lifestyle;
pub mod location;
pub mod matcher;
pub mod scoring;
pub mod timing;

pub use budget::budget_score;
pub use lifestyle::lifestyle_score;
pub use location::location_score;
pub use matcher::{find_compatible_users, Matcher, DEFAULT_MIN_SCORE};
pub use scoring::{calculate_compatibility, calculate_compatibility_with};
pub use timing::{days_apart, timing_score};
