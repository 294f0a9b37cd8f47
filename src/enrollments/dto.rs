use serde::Serialize;
use time::OffsetDateTime;

use crate::enrollments::repo_types::ActiveEnrollment;

#[derive(Debug, Serialize)]
pub struct EnrollmentItem {
    pub id: i64,
    pub course_name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub enrollment_date: OffsetDateTime,
}

impl From<ActiveEnrollment> for EnrollmentItem {
    fn from(row: ActiveEnrollment) -> Self {
        Self {
            id: row.id,
            course_name: row.course_name,
            enrollment_date: row.enrollment_date,
        }
    }
}
