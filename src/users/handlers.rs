use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use tracing::instrument;

use crate::{
    error::ApiResult,
    response::MessageResponse,
    state::AppState,
    users::{
        dto::{LoginRequest, LoginResponse, RegisterRequest, UserInfo},
        services,
    },
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/user_info/:email", get(get_user_info))
}

#[instrument(skip(state, payload), fields(username = %payload.username))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> ApiResult<Json<MessageResponse>> {
    services::register(state.users.as_ref(), payload).await?;
    Ok(Json(MessageResponse::new("User registered successfully")))
}

#[instrument(skip(state, payload), fields(username = %payload.username))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let resp = services::login(state.users.as_ref(), payload).await?;
    Ok(Json(resp))
}

#[instrument(skip(state))]
pub async fn get_user_info(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> ApiResult<Json<UserInfo>> {
    let info = services::user_info(state.users.as_ref(), &email).await?;
    Ok(Json(info))
}
