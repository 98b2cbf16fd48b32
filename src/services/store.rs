use crate::models::{MatchRecord, MatchStatus, UserProfile};
use chrono::Utc;
use std::collections::HashMap;
use std::sync::RwLock;
use thiserror::Error;

/// Errors that can occur when reading or writing a store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store lock poisoned: {0}")]
    Poisoned(&'static str),
}

/// Source of user profiles
pub trait ProfileStore: Send + Sync {
    fn get_profile(&self, user_id: &str) -> Result<Option<UserProfile>, StoreError>;

    fn list_profiles(&self) -> Result<Vec<UserProfile>, StoreError>;
}

/// What recording an expression of interest did to the pair's record
#[derive(Debug, Clone, PartialEq)]
pub enum Interest {
    /// No record existed; a pending one was created
    Created(MatchRecord),
    /// The recipient of a pending record answered; it is now mutual
    Reciprocated(MatchRecord),
    /// A record already covered this interest and was left untouched
    Existing(MatchRecord),
}

impl Interest {
    pub fn into_record(self) -> MatchRecord {
        match self {
            Interest::Created(r) | Interest::Reciprocated(r) | Interest::Existing(r) => r,
        }
    }
}

/// Interest records between pairs of users
pub trait MatchStore: Send + Sync {
    /// Record interest from `from` in `to`.
    ///
    /// Lookup and write happen as one step, so concurrent interest from
    /// both sides of a pair always ends in a single mutual record.
    /// `score` is stored only when a new record is created.
    fn record_interest(
        &self,
        from: &str,
        to: &str,
        score: Option<u8>,
    ) -> Result<Interest, StoreError>;
}

/// Profiles held in memory, listed in insertion order
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    profiles: RwLock<Vec<UserProfile>>,
}

impl InMemoryProfileStore {
    /// Later profiles replace earlier ones with the same id
    pub fn from_profiles(profiles: Vec<UserProfile>) -> Self {
        let mut deduped: Vec<UserProfile> = Vec::with_capacity(profiles.len());
        for profile in profiles {
            match deduped.iter_mut().find(|p| p.id == profile.id) {
                Some(existing) => *existing = profile,
                None => deduped.push(profile),
            }
        }
        Self {
            profiles: RwLock::new(deduped),
        }
    }

    pub fn len(&self) -> usize {
        self.profiles.read().map(|p| p.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ProfileStore for InMemoryProfileStore {
    fn get_profile(&self, user_id: &str) -> Result<Option<UserProfile>, StoreError> {
        let profiles = self
            .profiles
            .read()
            .map_err(|_| StoreError::Poisoned("profiles"))?;
        Ok(profiles.iter().find(|p| p.id == user_id).cloned())
    }

    fn list_profiles(&self) -> Result<Vec<UserProfile>, StoreError> {
        let profiles = self
            .profiles
            .read()
            .map_err(|_| StoreError::Poisoned("profiles"))?;
        Ok(profiles.clone())
    }
}

/// Match records held in memory, keyed by record id
#[derive(Debug, Default)]
pub struct InMemoryMatchStore {
    records: RwLock<HashMap<String, MatchRecord>>,
}

impl InMemoryMatchStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Result<Vec<MatchRecord>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::Poisoned("matches"))?;
        Ok(records.values().cloned().collect())
    }
}

impl MatchStore for InMemoryMatchStore {
    fn record_interest(
        &self,
        from: &str,
        to: &str,
        score: Option<u8>,
    ) -> Result<Interest, StoreError> {
        // Held across lookup and write
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::Poisoned("matches"))?;

        let existing = records.values_mut().find(|r| r.involves(from, to));

        Ok(match existing {
            Some(record) if record.status == MatchStatus::Pending && record.initiated_by == to => {
                record.status = MatchStatus::Mutual;
                record.matched_at = Some(Utc::now());
                Interest::Reciprocated(record.clone())
            }
            Some(record) => Interest::Existing(record.clone()),
            None => {
                let record = MatchRecord::pending(from, to, score);
                records.insert(record.id.clone(), record.clone());
                Interest::Created(record)
            }
        })
    }
}
