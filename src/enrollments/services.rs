use tracing::{debug, info};

use crate::{
    dates::parse_enrollment_date,
    enrollments::{dto::EnrollmentItem, repo::EnrollmentRepo},
    error::{ApiError, ApiResult},
};

/// Enrolls a user in a course, or reschedules the active enrollment.
pub async fn enroll(
    enrollments: &dyn EnrollmentRepo,
    user_id: i64,
    course_id: i64,
    raw_date: &str,
) -> ApiResult<()> {
    let date = parse_enrollment_date(raw_date)
        .ok_or_else(|| ApiError::BadRequest(format!("Invalid date: {raw_date}")))?;

    let row = enrollments.upsert_active(user_id, course_id, date).await?;
    info!(
        enrollment_id = row.id,
        user_id = row.user_id,
        course_id = row.course_id,
        active = row.is_active,
        enrollment_date = %row.enrollment_date,
        "enrollment saved"
    );
    Ok(())
}

/// Soft-deletes an enrollment. Unknown or already cancelled ids are not an error.
pub async fn cancel(enrollments: &dyn EnrollmentRepo, enrollment_id: i64) -> ApiResult<()> {
    let touched = enrollments.deactivate(enrollment_id).await?;
    if touched == 0 {
        debug!(enrollment_id, "cancel matched no enrollment");
    } else {
        info!(enrollment_id, "enrollment canceled");
    }
    Ok(())
}

pub async fn current(
    enrollments: &dyn EnrollmentRepo,
    user_id: i64,
) -> ApiResult<Vec<EnrollmentItem>> {
    let rows = enrollments.list_active(user_id).await?;
    Ok(rows.into_iter().map(EnrollmentItem::from).collect())
}
