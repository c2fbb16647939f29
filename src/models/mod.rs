// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod training;
pub mod user;

pub use training::{ActivityType, NewTrainingDto, Training, TrainingDto, UpdateTrainingDto};
pub use user::{BasicUserEmailDto, BasicUserInfoDto, UpdateUserDto, User, UserDto};
