//! Common test utilities and fixtures for integration tests.
//!
//! Integration tests require a PostgreSQL database (set DATABASE_URL) and
//! assume exclusive access to it: each test resets the tables it touches.

pub mod fixtures;

use std::sync::Arc;

use axum::Router;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use vocab_core::SrsConfig;
use vocab_trainer_backend::db::Database;
use vocab_trainer_backend::{router, AppState};

/// Test context containing database connection and the app router.
pub struct TestContext {
    pub db: Arc<Database>,
    app: Router,
}

impl TestContext {
    /// Create a new test context.
    ///
    /// # Panics
    /// Panics if DATABASE_URL is not set or database connection fails.
    pub async fn new() -> Self {
        dotenvy::dotenv().ok();

        let database_url =
            std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");

        let db = Database::connect(&database_url)
            .await
            .expect("Failed to connect to test database");

        db.run_migrations()
            .await
            .expect("Failed to run migrations");

        let db = Arc::new(db);

        let state = AppState {
            db: db.clone(),
            config: SrsConfig::default(),
        };

        let app = router(state);

        Self { db, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Wipe all seeded data so a test starts from a clean slate.
    pub async fn reset(&self) {
        let _ = sqlx::query("DELETE FROM sentences")
            .execute(self.db.pool())
            .await;

        let _ = sqlx::query("DELETE FROM words")
            .execute(self.db.pool())
            .await;
    }

    /// Backdate a word into an overdue review state.
    pub async fn make_overdue(&self, word_id: Uuid, days_ago: i64) {
        sqlx::query(
            r#"
            UPDATE words
            SET is_new = FALSE,
                phase = 'review',
                learning_step = NULL,
                repetition = 1,
                interval_days = 6,
                due_date = NOW() - make_interval(days => $2)
            WHERE id = $1
            "#,
        )
        .bind(word_id)
        .bind(days_ago as i32)
        .execute(self.db.pool())
        .await
        .expect("Failed to backdate word");
    }

    /// Put a word mid-ladder with the given due date.
    pub async fn make_learning(&self, word_id: Uuid, step: i16, due: DateTime<Utc>) {
        sqlx::query(
            r#"
            UPDATE words
            SET is_new = FALSE,
                phase = 'learning',
                learning_step = $2,
                repetition = 0,
                interval_days = 10.0 / 1440.0,
                due_date = $3
            WHERE id = $1
            "#,
        )
        .bind(word_id)
        .bind(step)
        .bind(due)
        .execute(self.db.pool())
        .await
        .expect("Failed to move word onto the ladder");
    }
}
