//! PostgreSQL database operations

use sqlx::{postgres::PgPoolOptions, PgPool};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::{phase_to_columns, DbSentence, DbWord, Flashcard};

/// Database wrapper with connection pool
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to PostgreSQL and create connection pool
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Run database migrations
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| ApiError::Migration(e.to_string()))?;
        Ok(())
    }

    /// Get the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Word Repository ===

    /// Insert a word with its initial scheduling state
    pub async fn insert_word(&self, card: &Flashcard) -> Result<()> {
        let (phase, learning_step) = phase_to_columns(card.phase);
        sqlx::query(
            r#"
            INSERT INTO words (id, prompt_text, target_text, frequency_rank, is_new,
                               phase, learning_step, repetition, interval_days, ease_factor, due_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(card.id)
        .bind(&card.prompt_text)
        .bind(&card.target_text)
        .bind(card.frequency_rank)
        .bind(card.is_new)
        .bind(phase)
        .bind(learning_step)
        .bind(card.repetition as i32)
        .bind(card.interval_days)
        .bind(card.ease_factor)
        .bind(card.due_date)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Get word by ID
    pub async fn get_word(&self, word_id: Uuid) -> Result<Option<DbWord>> {
        let word = sqlx::query_as::<_, DbWord>(
            r#"
            SELECT id, prompt_text, target_text, frequency_rank, is_new,
                   phase, learning_step, repetition, interval_days, ease_factor,
                   due_date, created_at, updated_at
            FROM words
            WHERE id = $1
            "#,
        )
        .bind(word_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(word)
    }

    /// Full snapshot of all words, for the card selector
    pub async fn list_words(&self) -> Result<Vec<DbWord>> {
        let words = sqlx::query_as::<_, DbWord>(
            r#"
            SELECT id, prompt_text, target_text, frequency_rank, is_new,
                   phase, learning_step, repetition, interval_days, ease_factor,
                   due_date, created_at, updated_at
            FROM words
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(words)
    }

    /// Write back a replacement scheduling state.
    ///
    /// Single statement, so the per-card read-then-write cycle cannot
    /// interleave at the row level.
    pub async fn update_word_srs(&self, card: &Flashcard) -> Result<()> {
        let (phase, learning_step) = phase_to_columns(card.phase);
        let result = sqlx::query(
            r#"
            UPDATE words
            SET is_new = $2,
                phase = $3,
                learning_step = $4,
                repetition = $5,
                interval_days = $6,
                ease_factor = $7,
                due_date = $8,
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(card.id)
        .bind(card.is_new)
        .bind(phase)
        .bind(learning_step)
        .bind(card.repetition as i32)
        .bind(card.interval_days)
        .bind(card.ease_factor)
        .bind(card.due_date)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound(format!("Word {} not found", card.id)));
        }

        Ok(())
    }

    // === Sentence Repository ===

    /// All context sentences attached to a word
    pub async fn sentences_for_word(&self, word_id: Uuid) -> Result<Vec<DbSentence>> {
        let sentences = sqlx::query_as::<_, DbSentence>(
            r#"
            SELECT id, word_id, prompt_text, target_text
            FROM sentences
            WHERE word_id = $1
            "#,
        )
        .bind(word_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(sentences)
    }

    /// Attach a context sentence to a word
    pub async fn insert_sentence(
        &self,
        word_id: Uuid,
        prompt_text: &str,
        target_text: &str,
    ) -> Result<DbSentence> {
        let sentence = sqlx::query_as::<_, DbSentence>(
            r#"
            INSERT INTO sentences (id, word_id, prompt_text, target_text)
            VALUES ($1, $2, $3, $4)
            RETURNING id, word_id, prompt_text, target_text
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(word_id)
        .bind(prompt_text)
        .bind(target_text)
        .fetch_one(&self.pool)
        .await?;

        Ok(sentence)
    }
}
