//! Record store layer: repository ports and the in-memory implementation.

pub mod memory;

pub use memory::MemoryStore;

use crate::error::Result;
use crate::models::{ActivityType, Training, User};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

/// Persistence port for users.
///
/// Object-safe so services can hold it as `Arc<dyn UserRepository>`; the
/// store is expected to provide its own internal concurrency control, and
/// every method is a single logical read or write.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a user. Assigns a fresh id when the record has none,
    /// overwrites the stored record otherwise. Returns the stored copy.
    async fn save(&self, user: User) -> Result<User>;

    /// Load a user by id.
    async fn find_by_id(&self, id: u64) -> Result<Option<User>>;

    /// All users, in no particular order.
    async fn find_all(&self) -> Result<Vec<User>>;

    /// Remove a user record. Removing an absent id is not an error here;
    /// callers decide whether absence matters.
    async fn delete_by_id(&self, id: u64) -> Result<()>;

    /// Whether a user record exists at this id.
    async fn exists_by_id(&self, id: u64) -> Result<bool>;

    /// Exact-match lookup by email (case-sensitive).
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// All users whose email contains `fragment`, case-insensitively.
    async fn find_by_email_containing(&self, fragment: &str) -> Result<Vec<User>>;

    /// All users born on or before `date`.
    async fn find_by_birthdate_on_or_before(&self, date: NaiveDate) -> Result<Vec<User>>;
}

/// Persistence port for training sessions.
#[async_trait]
pub trait TrainingRepository: Send + Sync {
    /// Persist a training. Assigns a fresh id when the record has none,
    /// overwrites the stored record otherwise. Returns the stored copy.
    async fn save(&self, training: Training) -> Result<Training>;

    /// Load a training by id.
    async fn find_by_id(&self, id: u64) -> Result<Option<Training>>;

    /// All trainings, in no particular order.
    async fn find_all(&self) -> Result<Vec<Training>>;

    /// All trainings owned by a user.
    async fn find_by_user_id(&self, user_id: u64) -> Result<Vec<Training>>;

    /// All trainings whose end time is strictly after `instant`.
    async fn find_by_end_time_after(&self, instant: DateTime<Utc>) -> Result<Vec<Training>>;

    /// All trainings of one activity type.
    async fn find_by_activity_type(&self, activity_type: ActivityType) -> Result<Vec<Training>>;

    /// Whether any training references this user.
    async fn exists_by_user_id(&self, user_id: u64) -> Result<bool>;
}
