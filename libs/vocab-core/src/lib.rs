//! Core spaced-repetition engine for the vocabulary trainer.
//!
//! Provides:
//! - SM-2 derived scheduling with a sub-day learning ladder
//! - Next-card selection with overwhelm protection
//! - Accent-insensitive answer normalization and pass/fail grading
//! - Typo detection (Levenshtein distance) for softer feedback
//!
//! Everything here is pure and synchronous; persistence and transport are
//! collaborators that feed snapshots in and write replacement states back.

pub mod grade;
pub mod normalize;
pub mod scheduler;
pub mod selector;
pub mod typo;
pub mod types;

pub use grade::classify;
pub use normalize::normalize;
pub use scheduler::{LearningLadder, Sm2};
pub use selector::{CardSelector, NextKind, Selection, OVERWHELM_HINT};
pub use typo::{is_near_miss, levenshtein_distance};
pub use types::{ContextSentence, Flashcard, Phase, ReviewOutcome, SrsConfig};
