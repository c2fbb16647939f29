//! User entity and transfer objects.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// User record held by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Store-assigned identifier; absent until the record is first saved
    pub id: Option<u64>,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Date of birth
    pub birthdate: NaiveDate,
    /// Email address, unique across all users
    pub email: String,
}

impl User {
    /// Build an unsaved user; the store assigns the id.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birthdate: NaiveDate,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            birthdate,
            email: email.into(),
        }
    }
}

/// Canonical user shape at the API boundary.
///
/// Doubles as the create request: `id` must be absent there, and the
/// remaining fields are all required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct UserDto {
    pub id: Option<u64>,
    #[validate(length(min = 1, message = "first_name must not be empty"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "last_name must not be empty"))]
    pub last_name: String,
    /// Exchanged as `yyyy-MM-dd`
    pub birthdate: NaiveDate,
    #[validate(length(min = 1, message = "email must not be empty"))]
    pub email: String,
}

/// Partial user update; only present fields overwrite stored values.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserDto {
    #[validate(length(min = 1, message = "first_name must not be empty"))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, message = "last_name must not be empty"))]
    pub last_name: Option<String>,
    pub birthdate: Option<NaiveDate>,
    #[validate(length(min = 1, message = "email must not be empty"))]
    pub email: Option<String>,
}

/// Name-only projection of a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicUserInfoDto {
    pub id: Option<u64>,
    pub first_name: String,
    pub last_name: String,
}

/// Email-only projection of a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicUserEmailDto {
    pub id: Option<u64>,
    pub email: String,
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            birthdate: user.birthdate,
            email: user.email.clone(),
        }
    }
}

impl From<UserDto> for User {
    fn from(dto: UserDto) -> Self {
        Self {
            id: dto.id,
            first_name: dto.first_name,
            last_name: dto.last_name,
            birthdate: dto.birthdate,
            email: dto.email,
        }
    }
}

impl From<&User> for BasicUserInfoDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        }
    }
}

impl From<&User> for BasicUserEmailDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
        }
    }
}
