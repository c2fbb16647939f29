// SPDX-License-Identifier: MIT

//! Training session entity and transfer objects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Activity performed during a training session.
///
/// Serialized as uppercase tokens (`RUNNING`, `CYCLING`, ...) on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityType {
    Running,
    Cycling,
    Walking,
    Swimming,
    Tennis,
}

impl ActivityType {
    /// Human-readable name for display surfaces.
    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityType::Running => "Running",
            ActivityType::Cycling => "Cycling",
            ActivityType::Walking => "Walking",
            ActivityType::Swimming => "Swimming",
            ActivityType::Tennis => "Tennis",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Training session record held by the store.
///
/// The owning user is referenced by id; the record store does not enforce
/// the reference, so resolution happens in the mapper and services.
#[derive(Debug, Clone, PartialEq)]
pub struct Training {
    /// Store-assigned identifier; absent until the record is first saved
    pub id: Option<u64>,
    /// Owning user id
    pub user_id: u64,
    /// Session start
    pub start_time: DateTime<Utc>,
    /// Session end (not validated against start)
    pub end_time: DateTime<Utc>,
    /// Activity performed
    pub activity_type: ActivityType,
    /// Distance covered, in kilometers
    pub distance: f64,
    /// Average speed, in km/h
    pub average_speed: f64,
}

/// Canonical training shape at the API boundary.
///
/// The user relationship is reduced to its identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingDto {
    pub id: Option<u64>,
    pub user_id: u64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub activity_type: ActivityType,
    pub distance: f64,
    pub average_speed: f64,
}

/// Create request for a training session.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewTrainingDto {
    pub user_id: u64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub activity_type: ActivityType,
    #[validate(range(min = 0.0, message = "distance must not be negative"))]
    pub distance: f64,
    #[validate(range(min = 0.0, message = "average_speed must not be negative"))]
    pub average_speed: f64,
}

/// Partial training update; only present fields overwrite stored values.
///
/// Presence is the marker, not magic values: `distance: 0.0` is a real
/// update, an absent `distance` is a no-op.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTrainingDto {
    pub user_id: Option<u64>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub activity_type: Option<ActivityType>,
    #[validate(range(min = 0.0, message = "distance must not be negative"))]
    pub distance: Option<f64>,
    #[validate(range(min = 0.0, message = "average_speed must not be negative"))]
    pub average_speed: Option<f64>,
}
