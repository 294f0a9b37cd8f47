use serde::{Deserialize, Serialize};
use time::Date;

use crate::users::repo_types::User;

/// Request body for user registration.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "crate::dates::deserialize_optional_date")]
    pub birth_date: Option<Date>,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Public profile of a user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserInfo {
    pub username: String,
    pub name: Option<String>,
    #[serde(with = "crate::dates::iso_date::option")]
    pub birth_date: Option<Date>,
    pub user_id: i64,
}

impl From<User> for UserInfo {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            name: user.name,
            birth_date: user.birth_date,
            user_id: user.id,
        }
    }
}

/// Profile plus a greeting, returned after a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    #[serde(flatten)]
    pub user: UserInfo,
    pub message: &'static str,
}
