// SPDX-License-Identifier: MIT

//! Fitness-Tracker: record users and their training sessions
//!
//! This crate provides the backend API for managing user profiles and the
//! trainings they log, with lookups by age, activity type and finish date.

pub mod config;
pub mod db;
pub mod error;
pub mod mapper;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use services::{TrainingService, UserService};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub user_service: UserService,
    pub training_service: TrainingService,
}
