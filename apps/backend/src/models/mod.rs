//! Database models and API types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

// Re-export shared types from vocab-core
pub use vocab_core::types::{ContextSentence, Flashcard, Phase, ReviewOutcome, SrsConfig};

// === Database Entity Types ===

/// Vocabulary word stored in PostgreSQL, one row per flashcard.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbWord {
    pub id: Uuid,
    pub prompt_text: String,
    pub target_text: String,
    pub frequency_rank: i32,
    pub is_new: bool,
    pub phase: String,
    pub learning_step: Option<i16>,
    pub repetition: i32,
    pub interval_days: f64,
    pub ease_factor: f64,
    pub due_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DbWord {
    /// Convert to the engine's card type.
    pub fn to_core_card(&self) -> Flashcard {
        Flashcard {
            id: self.id,
            prompt_text: self.prompt_text.clone(),
            target_text: self.target_text.clone(),
            frequency_rank: self.frequency_rank,
            is_new: self.is_new,
            phase: match self.phase.as_str() {
                "learning" => Phase::Learning(self.learning_step.unwrap_or(0) as usize),
                "review" => Phase::Review,
                _ => Phase::New,
            },
            repetition: self.repetition.max(0) as u32,
            interval_days: self.interval_days,
            ease_factor: self.ease_factor,
            due_date: self.due_date,
        }
    }
}

/// Encode the phase tag into its column pair.
pub fn phase_to_columns(phase: Phase) -> (&'static str, Option<i16>) {
    match phase {
        Phase::New => ("new", None),
        Phase::Learning(step) => ("learning", Some(step as i16)),
        Phase::Review => ("review", None),
    }
}

/// Context sentence stored in PostgreSQL.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSentence {
    pub id: Uuid,
    pub word_id: Uuid,
    pub prompt_text: String,
    pub target_text: String,
}

// === API Request/Response Types ===

/// What the learn endpoint is serving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NextCardKind {
    New,
    Review,
    Done,
}

impl From<vocab_core::NextKind> for NextCardKind {
    fn from(kind: vocab_core::NextKind) -> Self {
        match kind {
            vocab_core::NextKind::New => Self::New,
            vocab_core::NextKind::Review => Self::Review,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SentenceBody {
    pub prompt_text: String,
    pub target_text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiCard {
    pub id: Uuid,
    pub prompt_text: String,
    pub target_text: String,
    pub frequency_rank: i32,
    pub is_new: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<SentenceBody>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NextCardResponse {
    pub kind: NextCardKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<ApiCard>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitReviewRequest {
    pub card_id: Uuid,
    pub user_answer: String,
    pub revealed: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitReviewResponse {
    pub correct: bool,
    pub correct_answer: String,
    pub next_review_days: f64,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateWordRequest {
    pub prompt_text: String,
    pub target_text: String,
    pub frequency_rank: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateWordResponse {
    pub id: Uuid,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateSentenceRequest {
    pub word_id: Uuid,
    pub prompt_text: String,
    pub target_text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateSentenceResponse {
    pub id: Uuid,
}
