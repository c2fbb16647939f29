// SPDX-License-Identifier: MIT

//! Training endpoints under `/v1/trainings`.

use crate::error::{AppError, Result};
use crate::models::{ActivityType, NewTrainingDto, TrainingDto, UpdateTrainingDto};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/v1/trainings", get(get_all_trainings).post(create_training))
        .route("/v1/trainings/{id}", get(get_training).put(update_training))
        .route("/v1/trainings/user/{user_id}", get(get_trainings_by_user))
        .route("/v1/trainings/finished/{date}", get(get_finished_trainings))
        .route("/v1/trainings/activity-type", get(get_trainings_by_activity))
}

/// List all trainings.
async fn get_all_trainings(State(state): State<Arc<AppState>>) -> Result<Json<Vec<TrainingDto>>> {
    let trainings = state.training_service.get_all_trainings().await?;
    Ok(Json(trainings))
}

/// Record a training for an existing user.
async fn create_training(
    State(state): State<Arc<AppState>>,
    Json(dto): Json<NewTrainingDto>,
) -> Result<(StatusCode, Json<TrainingDto>)> {
    let training = state.training_service.create_training(dto).await?;
    Ok((StatusCode::CREATED, Json(training)))
}

/// Get a single training by id.
async fn get_training(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<TrainingDto>> {
    let training = state
        .training_service
        .get_training(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("training with id {id} does not exist")))?;
    Ok(Json(training))
}

/// Partially update a training.
async fn update_training(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    Json(patch): Json<UpdateTrainingDto>,
) -> Result<Json<TrainingDto>> {
    let training = state.training_service.update_training(id, patch).await?;
    Ok(Json(training))
}

/// List trainings recorded for one user.
async fn get_trainings_by_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<u64>,
) -> Result<Json<Vec<TrainingDto>>> {
    let trainings = state
        .training_service
        .get_trainings_by_user_id(user_id)
        .await?;
    Ok(Json(trainings))
}

/// List trainings finished after the given date.
async fn get_finished_trainings(
    State(state): State<Arc<AppState>>,
    Path(date): Path<NaiveDate>,
) -> Result<Json<Vec<TrainingDto>>> {
    let trainings = state
        .training_service
        .get_trainings_by_end_date_after(date)
        .await?;
    Ok(Json(trainings))
}

#[derive(Deserialize)]
struct ActivityTypeQuery {
    activity_type: ActivityType,
}

/// List trainings of one activity type, e.g. `?activity_type=RUNNING`.
async fn get_trainings_by_activity(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ActivityTypeQuery>,
) -> Result<Json<Vec<TrainingDto>>> {
    let trainings = state
        .training_service
        .get_trainings_by_activity_type(query.activity_type)
        .await?;
    Ok(Json(trainings))
}
