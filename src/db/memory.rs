// SPDX-License-Identifier: MIT

//! In-memory record store backed by concurrent maps.
//!
//! Stands in for a relational engine behind the repository ports: records
//! are keyed by id, ids come from per-entity sequences starting at 1, and
//! the filtered lookups scan. DashMap gives per-entry consistency only;
//! there are no cross-record transactions and no uniqueness constraints.

use crate::db::{TrainingRepository, UserRepository};
use crate::error::Result;
use crate::models::{ActivityType, Training, User};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// In-memory store holding both record types.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: DashMap<u64, User>,
    trainings: DashMap<u64, Training>,
    user_seq: AtomicU64,
    training_seq: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(seq: &AtomicU64) -> u64 {
        seq.fetch_add(1, Ordering::Relaxed) + 1
    }
}

// ─── User Operations ─────────────────────────────────────────

#[async_trait]
impl UserRepository for MemoryStore {
    async fn save(&self, mut user: User) -> Result<User> {
        let id = match user.id {
            Some(id) => id,
            None => {
                let id = Self::next_id(&self.user_seq);
                user.id = Some(id);
                id
            }
        };
        self.users.insert(id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<User>> {
        Ok(self.users.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_all(&self) -> Result<Vec<User>> {
        Ok(self.users.iter().map(|entry| entry.value().clone()).collect())
    }

    async fn delete_by_id(&self, id: u64) -> Result<()> {
        self.users.remove(&id);
        Ok(())
    }

    async fn exists_by_id(&self, id: u64) -> Result<bool> {
        Ok(self.users.contains_key(&id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .iter()
            .find(|entry| entry.email == email)
            .map(|entry| entry.value().clone()))
    }

    async fn find_by_email_containing(&self, fragment: &str) -> Result<Vec<User>> {
        let needle = fragment.to_lowercase();
        Ok(self
            .users
            .iter()
            .filter(|entry| entry.email.to_lowercase().contains(&needle))
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn find_by_birthdate_on_or_before(&self, date: NaiveDate) -> Result<Vec<User>> {
        Ok(self
            .users
            .iter()
            .filter(|entry| entry.birthdate <= date)
            .map(|entry| entry.value().clone())
            .collect())
    }
}

// ─── Training Operations ─────────────────────────────────────

#[async_trait]
impl TrainingRepository for MemoryStore {
    async fn save(&self, mut training: Training) -> Result<Training> {
        let id = match training.id {
            Some(id) => id,
            None => {
                let id = Self::next_id(&self.training_seq);
                training.id = Some(id);
                id
            }
        };
        self.trainings.insert(id, training.clone());
        Ok(training)
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<Training>> {
        Ok(self.trainings.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_all(&self) -> Result<Vec<Training>> {
        Ok(self.trainings.iter().map(|entry| entry.value().clone()).collect())
    }

    async fn find_by_user_id(&self, user_id: u64) -> Result<Vec<Training>> {
        Ok(self
            .trainings
            .iter()
            .filter(|entry| entry.user_id == user_id)
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn find_by_end_time_after(&self, instant: DateTime<Utc>) -> Result<Vec<Training>> {
        Ok(self
            .trainings
            .iter()
            .filter(|entry| entry.end_time > instant)
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn find_by_activity_type(&self, activity_type: ActivityType) -> Result<Vec<Training>> {
        Ok(self
            .trainings
            .iter()
            .filter(|entry| entry.activity_type == activity_type)
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn exists_by_user_id(&self, user_id: u64) -> Result<bool> {
        Ok(self.trainings.iter().any(|entry| entry.user_id == user_id))
    }
}
