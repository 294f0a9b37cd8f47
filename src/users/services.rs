use tracing::{info, warn};

use crate::{
    error::{ApiError, ApiResult},
    users::{
        dto::{LoginRequest, LoginResponse, RegisterRequest, UserInfo},
        password::{hash_password, password_matches},
        repo::UserRepo,
        repo_types::NewUser,
    },
};

pub async fn register(users: &dyn UserRepo, req: RegisterRequest) -> ApiResult<UserInfo> {
    if users.find_by_username(&req.username).await?.is_some() {
        warn!(username = %req.username, "username already exists");
        return Err(ApiError::UsernameTaken);
    }

    let new_user = NewUser {
        password_hash: hash_password(&req.password)?,
        username: req.username,
        name: req.name,
        birth_date: req.birth_date,
    };

    // The insert is conflict-safe, so a concurrent registration that slipped
    // past the lookup above still lands here.
    let Some(user) = users.create(&new_user).await? else {
        warn!(username = %new_user.username, "username taken during insert");
        return Err(ApiError::UsernameTaken);
    };

    info!(user_id = user.id, username = %user.username, "user registered");
    Ok(user.into())
}

pub async fn login(users: &dyn UserRepo, req: LoginRequest) -> ApiResult<LoginResponse> {
    let Some(user) = users.find_by_username(&req.username).await? else {
        warn!(username = %req.username, "login unknown username");
        return Err(ApiError::InvalidCredentials);
    };

    if !password_matches(&req.password, &user.password_hash) {
        warn!(username = %req.username, user_id = user.id, "login invalid password");
        return Err(ApiError::InvalidCredentials);
    }

    info!(user_id = user.id, "user logged in");
    Ok(LoginResponse {
        user: user.into(),
        message: "Login successful",
    })
}

/// Looks a user up by username. The public route names this parameter `email`.
pub async fn user_info(users: &dyn UserRepo, username: &str) -> ApiResult<UserInfo> {
    users
        .find_by_username(username)
        .await?
        .map(UserInfo::from)
        .ok_or(ApiError::UserNotFound)
}
