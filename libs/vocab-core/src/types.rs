//! Core types for the vocabulary trainer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle phase of a card.
///
/// `Learning` carries the index into [`SrsConfig::learning_steps`], so the
/// ladder position is never reconstructed from the float interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    New,
    Learning(usize),
    Review,
}

impl Default for Phase {
    fn default() -> Self {
        Self::New
    }
}

/// Binary review outcome.
///
/// The trainer collapses the SM-2 grade scale to pass/fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewOutcome {
    Pass,
    Fail,
}

/// A vocabulary card with its scheduling metadata.
///
/// Owned by the repository; the engine reads it by value and returns a
/// replacement instead of mutating in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flashcard {
    pub id: Uuid,
    /// Source-language prompt (English in the reference data).
    pub prompt_text: String,
    /// Target-language answer (Vietnamese in the reference data).
    pub target_text: String,
    /// Lower rank = higher priority among unseen words.
    pub frequency_rank: i32,
    /// True until the first review is submitted.
    pub is_new: bool,
    pub phase: Phase,
    /// Count of successful graduated reviews.
    pub repetition: u32,
    /// Days until the next review; values below 1.0 are ladder intervals.
    pub interval_days: f64,
    /// Difficulty multiplier, never below [`SrsConfig::minimum_ease`].
    pub ease_factor: f64,
    pub due_date: DateTime<Utc>,
}

/// Example sentence attached to a card. Display-only; the scheduler never
/// touches it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextSentence {
    pub id: Uuid,
    pub word_id: Uuid,
    pub prompt_text: String,
    pub target_text: String,
}

/// Scheduling constants shared by the scheduler and the card selector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SrsConfig {
    /// Sub-day ladder intervals in days. Strictly increasing, all below 1.0.
    pub learning_steps: Vec<f64>,
    /// Maximum cards allowed mid-ladder before the selector forces an early
    /// review instead of introducing new words.
    pub learning_queue_limit: usize,
    pub initial_ease: f64,
    pub minimum_ease: f64,
    /// Interval in days a card receives when it graduates from the ladder.
    pub graduating_interval: f64,
}

impl Default for SrsConfig {
    fn default() -> Self {
        Self {
            // 10 minutes, 30 minutes, 2 hours
            learning_steps: vec![10.0 / 1440.0, 30.0 / 1440.0, 120.0 / 1440.0],
            learning_queue_limit: 5,
            initial_ease: 2.5,
            minimum_ease: 1.3,
            graduating_interval: 1.0,
        }
    }
}
