use std::sync::Arc;

use sqlx::PgPool;

use crate::config::AppConfig;
use crate::enrollments::repo::{EnrollmentRepo, PgEnrollmentRepo};
use crate::users::repo::{PgUserRepo, UserRepo};

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepo>,
    pub enrollments: Arc<dyn EnrollmentRepo>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn from_pool(db: PgPool, config: AppConfig) -> Self {
        Self {
            users: Arc::new(PgUserRepo::new(db.clone())),
            enrollments: Arc::new(PgEnrollmentRepo::new(db)),
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
impl AppState {
    /// State backed by one shared in-memory store.
    pub fn fake() -> (Self, Arc<crate::memory::MemoryStore>) {
        let store = Arc::new(crate::memory::MemoryStore::default());
        let state = Self {
            users: store.clone(),
            enrollments: store.clone(),
            config: Arc::new(AppConfig::for_tests()),
        };
        (state, store)
    }
}
