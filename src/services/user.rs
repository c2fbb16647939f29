// SPDX-License-Identifier: MIT

//! User management service.
//!
//! Owns the business rules around user records: id assignment is the
//! store's job, emails must not collide, and a user with recorded
//! trainings cannot be removed.

use std::sync::Arc;

use validator::Validate;

use crate::db::{TrainingRepository, UserRepository};
use crate::error::{AppError, Result};
use crate::models::{BasicUserEmailDto, BasicUserInfoDto, UpdateUserDto, User, UserDto};

#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
    trainings: Arc<dyn TrainingRepository>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>, trainings: Arc<dyn TrainingRepository>) -> Self {
        Self { users, trainings }
    }

    /// Create a new user. The id is assigned by the store; a dto that
    /// already carries one is rejected.
    pub async fn create_user(&self, dto: UserDto) -> Result<User> {
        if dto.id.is_some() {
            return Err(AppError::BadRequest(
                "a new user must not carry an id".to_string(),
            ));
        }
        dto.validate()?;

        // Pre-check then save; two concurrent creates can both pass the check.
        let taken = self.users.find_by_email_containing(&dto.email).await?;
        if !taken.is_empty() {
            return Err(AppError::Conflict(format!(
                "email {} is already taken",
                dto.email
            )));
        }

        let user = self.users.save(User::from(dto)).await?;
        tracing::info!(user_id = ?user.id, email = %user.email, "Created user");
        Ok(user)
    }

    pub async fn get_user(&self, id: u64) -> Result<Option<User>> {
        self.users.find_by_id(id).await
    }

    /// Exact-match email lookup.
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.users.find_by_email(email).await
    }

    pub async fn find_all_users(&self) -> Result<Vec<User>> {
        self.users.find_all().await
    }

    /// Every user reduced to id and name.
    pub async fn find_all_basic_user_info(&self) -> Result<Vec<BasicUserInfoDto>> {
        let users = self.users.find_all().await?;
        Ok(users.iter().map(BasicUserInfoDto::from).collect())
    }

    /// Case-insensitive substring search over emails, reduced to id and
    /// email.
    pub async fn find_users_by_email(&self, fragment: &str) -> Result<Vec<BasicUserEmailDto>> {
        let users = self.users.find_by_email_containing(fragment).await?;
        Ok(users.iter().map(BasicUserEmailDto::from).collect())
    }

    /// Users born on or before the cutoff date. The boundary is inclusive:
    /// a user born exactly on the cutoff is returned.
    pub async fn find_all_users_older_than(
        &self,
        cutoff: chrono::NaiveDate,
    ) -> Result<Vec<User>> {
        self.users.find_by_birthdate_on_or_before(cutoff).await
    }

    /// Apply a partial update. Absent fields keep their stored values.
    pub async fn update_user(&self, id: u64, patch: UpdateUserDto) -> Result<User> {
        patch.validate()?;

        let mut user = self
            .users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user with id {id} does not exist")))?;

        if let Some(first_name) = patch.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            user.last_name = last_name;
        }
        if let Some(birthdate) = patch.birthdate {
            user.birthdate = birthdate;
        }
        if let Some(email) = patch.email {
            user.email = email;
        }

        let user = self.users.save(user).await?;
        tracing::info!(user_id = ?user.id, "Updated user");
        Ok(user)
    }

    /// Delete a user. Fails with a conflict while trainings still point at
    /// the user, so training records never dangle.
    pub async fn delete_user(&self, id: u64) -> Result<()> {
        if !self.users.exists_by_id(id).await? {
            return Err(AppError::NotFound(format!(
                "user with id {id} does not exist"
            )));
        }
        if self.trainings.exists_by_user_id(id).await? {
            return Err(AppError::Conflict(format!(
                "user with id {id} still has trainings"
            )));
        }

        self.users.delete_by_id(id).await?;
        tracing::info!(user_id = id, "Deleted user");
        Ok(())
    }
}
