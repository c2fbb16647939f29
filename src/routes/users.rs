// SPDX-License-Identifier: MIT

//! User endpoints under `/v1/users`.

use crate::error::{AppError, Result};
use crate::models::{BasicUserEmailDto, BasicUserInfoDto, UpdateUserDto, UserDto};
use crate::time_utils::birthdate_cutoff_for_age;
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

/// User routes. `/details/{id}`, `/simple` and `/email` are aliases kept
/// for clients of the earlier surface.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/v1/users", get(get_all_users).post(create_user))
        .route(
            "/v1/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/v1/users/details/{id}", get(get_user))
        .route("/v1/users/basic-info", get(get_basic_user_info))
        .route("/v1/users/simple", get(get_basic_user_info))
        .route("/v1/users/search", get(search_users_by_email))
        .route("/v1/users/email", get(search_users_by_email))
        .route("/v1/users/older-than/{age}", get(get_users_older_than_age))
        .route("/v1/users/older/{date}", get(get_users_older_than_date))
}

/// List all users.
async fn get_all_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<UserDto>>> {
    let users = state.user_service.find_all_users().await?;
    Ok(Json(users.iter().map(UserDto::from).collect()))
}

/// Create a user.
async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(dto): Json<UserDto>,
) -> Result<(StatusCode, Json<UserDto>)> {
    let user = state.user_service.create_user(dto).await?;
    Ok((StatusCode::CREATED, Json(UserDto::from(&user))))
}

/// Get a single user by id.
async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<UserDto>> {
    let user = state
        .user_service
        .get_user(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user with id {id} does not exist")))?;
    Ok(Json(UserDto::from(&user)))
}

/// Partially update a user.
async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    Json(patch): Json<UpdateUserDto>,
) -> Result<Json<UserDto>> {
    let user = state.user_service.update_user(id, patch).await?;
    Ok(Json(UserDto::from(&user)))
}

/// Delete a user.
async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<StatusCode> {
    state.user_service.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List all users reduced to id and name.
async fn get_basic_user_info(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<BasicUserInfoDto>>> {
    let info = state.user_service.find_all_basic_user_info().await?;
    Ok(Json(info))
}

#[derive(Deserialize)]
struct EmailQuery {
    email: String,
}

/// Search users whose email contains the fragment, case-insensitively.
async fn search_users_by_email(
    State(state): State<Arc<AppState>>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<Vec<BasicUserEmailDto>>> {
    let hits = state.user_service.find_users_by_email(&query.email).await?;
    Ok(Json(hits))
}

/// List users at least `age` years old today.
async fn get_users_older_than_age(
    State(state): State<Arc<AppState>>,
    Path(age): Path<u32>,
) -> Result<Json<Vec<UserDto>>> {
    let cutoff = birthdate_cutoff_for_age(age);
    let users = state.user_service.find_all_users_older_than(cutoff).await?;
    Ok(Json(users.iter().map(UserDto::from).collect()))
}

/// List users born on or before the given date.
async fn get_users_older_than_date(
    State(state): State<Arc<AppState>>,
    Path(date): Path<NaiveDate>,
) -> Result<Json<Vec<UserDto>>> {
    let users = state.user_service.find_all_users_older_than(date).await?;
    Ok(Json(users.iter().map(UserDto::from).collect()))
}
