// SPDX-License-Identifier: MIT

//! Conversions between training records and their wire shapes.
//!
//! Outbound, the user reference is reduced to its id. Inbound, the id is
//! resolved against the user port so a training can never point at a user
//! that does not exist.

use std::sync::Arc;

use crate::db::UserRepository;
use crate::error::{AppError, Result};
use crate::models::{NewTrainingDto, Training, TrainingDto, UpdateTrainingDto};

#[derive(Clone)]
pub struct TrainingMapper {
    users: Arc<dyn UserRepository>,
}

impl TrainingMapper {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Projects a stored training onto its wire shape.
    pub fn to_dto(&self, training: &Training) -> TrainingDto {
        TrainingDto {
            id: training.id,
            user_id: training.user_id,
            start_time: training.start_time,
            end_time: training.end_time,
            activity_type: training.activity_type,
            distance: training.distance,
            average_speed: training.average_speed,
        }
    }

    /// Builds a new training from its wire shape, resolving the user id.
    pub async fn to_entity(&self, dto: &NewTrainingDto) -> Result<Training> {
        self.resolve_user(dto.user_id).await?;
        Ok(Training {
            id: None,
            user_id: dto.user_id,
            start_time: dto.start_time,
            end_time: dto.end_time,
            activity_type: dto.activity_type,
            distance: dto.distance,
            average_speed: dto.average_speed,
        })
    }

    /// Applies a partial update on top of a stored training. Absent fields
    /// keep their stored values; a new user id must resolve.
    pub async fn merge(&self, mut training: Training, patch: &UpdateTrainingDto) -> Result<Training> {
        if let Some(user_id) = patch.user_id {
            self.resolve_user(user_id).await?;
            training.user_id = user_id;
        }
        if let Some(start_time) = patch.start_time {
            training.start_time = start_time;
        }
        if let Some(end_time) = patch.end_time {
            training.end_time = end_time;
        }
        if let Some(activity_type) = patch.activity_type {
            training.activity_type = activity_type;
        }
        if let Some(distance) = patch.distance {
            training.distance = distance;
        }
        if let Some(average_speed) = patch.average_speed {
            training.average_speed = average_speed;
        }
        Ok(training)
    }

    async fn resolve_user(&self, user_id: u64) -> Result<()> {
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "user with id {user_id} does not exist"
            )));
        }
        Ok(())
    }
}
