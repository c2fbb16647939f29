// SPDX-License-Identifier: MIT

//! Services module - business logic layer.

pub mod training;
pub mod user;

pub use training::TrainingService;
pub use user::UserService;
