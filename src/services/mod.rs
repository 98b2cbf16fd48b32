// Service exports
pub mod matching;
pub mod store;

pub use matching::{MatchService, ServiceError};
pub use store::{
    InMemoryMatchStore, InMemoryProfileStore, Interest, MatchStore, ProfileStore, StoreError,
};
