use sqlx::FromRow;
use time::OffsetDateTime;

/// Row of `course_enrollments`.
#[derive(Debug, Clone, FromRow)]
pub struct Enrollment {
    pub id: i64,
    pub user_id: i64,
    pub course_id: i64,
    pub enrollment_date: OffsetDateTime,
    pub is_active: bool,
}

/// Active enrollment joined with its course.
#[derive(Debug, Clone, FromRow)]
pub struct ActiveEnrollment {
    pub id: i64,
    pub course_name: String,
    pub enrollment_date: OffsetDateTime,
}
