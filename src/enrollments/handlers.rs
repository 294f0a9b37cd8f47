use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Json, Router,
};
use tracing::instrument;

use crate::{
    enrollments::{dto::EnrollmentItem, services},
    error::ApiResult,
    response::MessageResponse,
    state::AppState,
};

pub fn enrollment_routes() -> Router<AppState> {
    Router::new()
        .route("/enroll_course/:user_id/:course_id/:date", post(enroll_course))
        .route("/cancel_enrollment/:enrollment_id", put(cancel_enrollment))
        .route("/current_enrollments/:user_id", get(current_enrollments))
}

#[instrument(skip(state))]
pub async fn enroll_course(
    State(state): State<AppState>,
    Path((user_id, course_id, date)): Path<(i64, i64, String)>,
) -> ApiResult<Json<MessageResponse>> {
    services::enroll(state.enrollments.as_ref(), user_id, course_id, &date).await?;
    Ok(Json(MessageResponse::new("Course enrollment successful")))
}

#[instrument(skip(state))]
pub async fn cancel_enrollment(
    State(state): State<AppState>,
    Path(enrollment_id): Path<i64>,
) -> ApiResult<Json<MessageResponse>> {
    services::cancel(state.enrollments.as_ref(), enrollment_id).await?;
    Ok(Json(MessageResponse::new("Enrollment canceled successfully")))
}

#[instrument(skip(state))]
pub async fn current_enrollments(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<Json<Vec<EnrollmentItem>>> {
    let items = services::current(state.enrollments.as_ref(), user_id).await?;
    Ok(Json(items))
}
