use std::sync::Arc;

use typewriter_core::password::Argon2Hasher;
use typewriter_db::repositories::{PgActivityRepo, PgScoreRepo, PgTextRepo, PgUserRepo};

use crate::config::ServerConfig;
use crate::services::{ActivityService, ScoreService, TextService, UserService};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, used directly only by the health check.
    pub pool: typewriter_db::DbPool,
    pub config: Arc<ServerConfig>,
    pub users: Arc<UserService>,
    pub texts: Arc<TextService>,
    pub activities: Arc<ActivityService>,
    pub scores: Arc<ScoreService>,
}

impl AppState {
    /// Wire every service to its PostgreSQL repository.
    pub fn with_postgres(pool: typewriter_db::DbPool, config: ServerConfig) -> Self {
        let users = UserService::new(
            Arc::new(PgUserRepo::new(pool.clone())),
            Arc::new(Argon2Hasher),
        );
        let texts = TextService::new(Arc::new(PgTextRepo::new(pool.clone())));
        let activities = ActivityService::new(Arc::new(PgActivityRepo::new(pool.clone())));
        let scores = ScoreService::new(Arc::new(PgScoreRepo::new(pool.clone())));

        Self {
            pool,
            config: Arc::new(config),
            users: Arc::new(users),
            texts: Arc::new(texts),
            activities: Arc::new(activities),
            scores: Arc::new(scores),
        }
    }
}
