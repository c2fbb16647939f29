// SPDX-License-Identifier: MIT

//! Training session service.
//!
//! Works in wire shapes on both sides: callers hand in dtos and get dtos
//! back, with the mapper resolving user references in between.

use std::sync::Arc;

use chrono::NaiveDate;
use validator::Validate;

use crate::db::TrainingRepository;
use crate::error::{AppError, Result};
use crate::mapper::TrainingMapper;
use crate::models::{ActivityType, NewTrainingDto, TrainingDto, UpdateTrainingDto};
use crate::time_utils::start_of_day_utc;

#[derive(Clone)]
pub struct TrainingService {
    trainings: Arc<dyn TrainingRepository>,
    mapper: TrainingMapper,
}

impl TrainingService {
    pub fn new(trainings: Arc<dyn TrainingRepository>, mapper: TrainingMapper) -> Self {
        Self { trainings, mapper }
    }

    pub async fn get_training(&self, id: u64) -> Result<Option<TrainingDto>> {
        Ok(self
            .trainings
            .find_by_id(id)
            .await?
            .map(|training| self.mapper.to_dto(&training)))
    }

    pub async fn get_all_trainings(&self) -> Result<Vec<TrainingDto>> {
        let trainings = self.trainings.find_all().await?;
        Ok(trainings.iter().map(|t| self.mapper.to_dto(t)).collect())
    }

    /// All trainings recorded for a user. Unknown users simply have none.
    pub async fn get_trainings_by_user_id(&self, user_id: u64) -> Result<Vec<TrainingDto>> {
        let trainings = self.trainings.find_by_user_id(user_id).await?;
        Ok(trainings.iter().map(|t| self.mapper.to_dto(t)).collect())
    }

    /// Trainings that ended strictly after the start of the given day, UTC.
    pub async fn get_trainings_by_end_date_after(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<TrainingDto>> {
        let instant = start_of_day_utc(date);
        let trainings = self.trainings.find_by_end_time_after(instant).await?;
        Ok(trainings.iter().map(|t| self.mapper.to_dto(t)).collect())
    }

    pub async fn get_trainings_by_activity_type(
        &self,
        activity_type: ActivityType,
    ) -> Result<Vec<TrainingDto>> {
        let trainings = self.trainings.find_by_activity_type(activity_type).await?;
        Ok(trainings.iter().map(|t| self.mapper.to_dto(t)).collect())
    }

    /// Record a new training for an existing user.
    pub async fn create_training(&self, dto: NewTrainingDto) -> Result<TrainingDto> {
        dto.validate()?;

        let training = self.mapper.to_entity(&dto).await?;
        let training = self.trainings.save(training).await?;
        tracing::info!(
            training_id = ?training.id,
            user_id = training.user_id,
            activity_type = %training.activity_type,
            "Created training"
        );
        Ok(self.mapper.to_dto(&training))
    }

    /// Apply a partial update. Field presence decides what changes, so an
    /// explicit `0.0` distance is applied rather than ignored.
    pub async fn update_training(&self, id: u64, patch: UpdateTrainingDto) -> Result<TrainingDto> {
        patch.validate()?;

        let training = self
            .trainings
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("training with id {id} does not exist")))?;

        let training = self.mapper.merge(training, &patch).await?;
        let training = self.trainings.save(training).await?;
        tracing::info!(training_id = ?training.id, "Updated training");
        Ok(self.mapper.to_dto(&training))
    }
}
