//! In-memory repositories used by tests in place of Postgres.

use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard},
};

use async_trait::async_trait;
use time::OffsetDateTime;

use crate::{
    enrollments::{
        repo::EnrollmentRepo,
        repo_types::{ActiveEnrollment, Enrollment},
    },
    users::{
        repo::UserRepo,
        repo_types::{NewUser, User},
    },
};

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    courses: HashMap<i64, String>,
    enrollments: Vec<Enrollment>,
    next_id: i64,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn add_course(&self, name: &str) -> i64 {
        let mut t = self.lock();
        let id = t.next_id();
        t.courses.insert(id, name.to_string());
        id
    }

    pub fn enrollment_rows(&self) -> Vec<Enrollment> {
        self.lock().enrollments.clone()
    }
}

#[async_trait]
impl UserRepo for MemoryStore {
    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<User>> {
        Ok(self.lock().users.iter().find(|u| u.username == username).cloned())
    }

    async fn create(&self, new_user: &NewUser) -> anyhow::Result<Option<User>> {
        let mut t = self.lock();
        if t.users.iter().any(|u| u.username == new_user.username) {
            return Ok(None);
        }
        let user = User {
            id: t.next_id(),
            username: new_user.username.clone(),
            password_hash: new_user.password_hash.clone(),
            name: new_user.name.clone(),
            birth_date: new_user.birth_date,
        };
        t.users.push(user.clone());
        Ok(Some(user))
    }
}

#[async_trait]
impl EnrollmentRepo for MemoryStore {
    async fn upsert_active(
        &self,
        user_id: i64,
        course_id: i64,
        enrollment_date: OffsetDateTime,
    ) -> anyhow::Result<Enrollment> {
        let mut t = self.lock();
        if let Some(row) = t
            .enrollments
            .iter_mut()
            .find(|e| e.user_id == user_id && e.course_id == course_id && e.is_active)
        {
            row.enrollment_date = enrollment_date;
            return Ok(row.clone());
        }
        let row = Enrollment {
            id: t.next_id(),
            user_id,
            course_id,
            enrollment_date,
            is_active: true,
        };
        t.enrollments.push(row.clone());
        Ok(row)
    }

    async fn deactivate(&self, enrollment_id: i64) -> anyhow::Result<u64> {
        let mut t = self.lock();
        let mut touched = 0;
        for row in t.enrollments.iter_mut().filter(|e| e.id == enrollment_id) {
            row.is_active = false;
            touched += 1;
        }
        Ok(touched)
    }

    async fn list_active(&self, user_id: i64) -> anyhow::Result<Vec<ActiveEnrollment>> {
        let t = self.lock();
        let mut rows: Vec<_> = t
            .enrollments
            .iter()
            .filter(|e| e.user_id == user_id && e.is_active)
            .filter_map(|e| {
                // inner join: enrollments without a course are dropped
                t.courses.get(&e.course_id).map(|name| ActiveEnrollment {
                    id: e.id,
                    course_name: name.clone(),
                    enrollment_date: e.enrollment_date,
                })
            })
            .collect();
        rows.sort_by_key(|r| r.id);
        Ok(rows)
    }
}
