use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;
use time::OffsetDateTime;

use crate::enrollments::repo_types::{ActiveEnrollment, Enrollment};

#[async_trait]
pub trait EnrollmentRepo: Send + Sync {
    /// Creates an active enrollment for the pair, or moves the date of the
    /// one that is already active.
    async fn upsert_active(
        &self,
        user_id: i64,
        course_id: i64,
        enrollment_date: OffsetDateTime,
    ) -> anyhow::Result<Enrollment>;

    /// Clears `is_active`. Returns the number of rows touched.
    async fn deactivate(&self, enrollment_id: i64) -> anyhow::Result<u64>;

    async fn list_active(&self, user_id: i64) -> anyhow::Result<Vec<ActiveEnrollment>>;
}

#[derive(Clone)]
pub struct PgEnrollmentRepo {
    db: PgPool,
}

impl PgEnrollmentRepo {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EnrollmentRepo for PgEnrollmentRepo {
    async fn upsert_active(
        &self,
        user_id: i64,
        course_id: i64,
        enrollment_date: OffsetDateTime,
    ) -> anyhow::Result<Enrollment> {
        // conflict target is the partial unique index on active pairs
        let row = sqlx::query_as::<_, Enrollment>(
            r#"
            INSERT INTO course_enrollments (user_id, course_id, enrollment_date)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, course_id) WHERE is_active
            DO UPDATE SET enrollment_date = EXCLUDED.enrollment_date
            RETURNING id, user_id, course_id, enrollment_date, is_active
            "#,
        )
        .bind(user_id)
        .bind(course_id)
        .bind(enrollment_date)
        .fetch_one(&self.db)
        .await
        .with_context(|| format!("upsert enrollment user={user_id} course={course_id}"))?;
        Ok(row)
    }

    async fn deactivate(&self, enrollment_id: i64) -> anyhow::Result<u64> {
        let res = sqlx::query(
            r#"
            UPDATE course_enrollments
               SET is_active = FALSE
             WHERE id = $1
            "#,
        )
        .bind(enrollment_id)
        .execute(&self.db)
        .await
        .context("deactivate enrollment")?;
        Ok(res.rows_affected())
    }

    async fn list_active(&self, user_id: i64) -> anyhow::Result<Vec<ActiveEnrollment>> {
        let rows = sqlx::query_as::<_, ActiveEnrollment>(
            r#"
            SELECT ce.id, c.course_name, ce.enrollment_date
              FROM course_enrollments ce
              JOIN courses c ON ce.course_id = c.id
             WHERE ce.user_id = $1 AND ce.is_active
             ORDER BY ce.id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await
        .context("list active enrollments")?;
        Ok(rows)
    }
}
