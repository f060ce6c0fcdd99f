//! Test fixtures and factory functions for creating test data.

use serde_json::json;
use uuid::Uuid;

/// Create a word seeding request body.
pub fn create_word_request(prompt: &str, target: &str, rank: i32) -> serde_json::Value {
    json!({
        "prompt_text": prompt,
        "target_text": target,
        "frequency_rank": rank
    })
}

/// Create a sentence seeding request body.
pub fn create_sentence_request(word_id: Uuid, prompt: &str, target: &str) -> serde_json::Value {
    json!({
        "word_id": word_id,
        "prompt_text": prompt,
        "target_text": target
    })
}

/// Create a review submission body.
pub fn submit_review_request(card_id: Uuid, answer: &str, revealed: bool) -> serde_json::Value {
    json!({
        "card_id": card_id,
        "user_answer": answer,
        "revealed": revealed
    })
}
