//! Review endpoint: grade an answer and reschedule the card

use axum::{extract::State, Json};
use chrono::Utc;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;
use vocab_core::{classify, is_near_miss, normalize, Sm2};

/// POST /review
///
/// `correct` reports the accent-insensitive text match. Scheduling runs on
/// the classified outcome, so a revealed answer fails the recall even when
/// the text matches. The typo check only softens the message.
pub async fn submit(
    State(state): State<AppState>,
    Json(payload): Json<SubmitReviewRequest>,
) -> Result<Json<SubmitReviewResponse>> {
    let word = state
        .db
        .get_word(payload.card_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Card not found".to_string()))?;

    let card = word.to_core_card();

    let normalized_input = normalize(&payload.user_answer);
    let normalized_target = normalize(&card.target_text);
    let matched = normalized_input == normalized_target;
    let outcome = classify(&normalized_input, &normalized_target, payload.revealed);

    let scheduler = Sm2::new(state.config.clone());
    let next = scheduler.transition(&card, outcome, Utc::now());
    state.db.update_word_srs(&next).await?;

    tracing::debug!(
        card_id = %card.id,
        correct = matched,
        revealed = payload.revealed,
        next_interval_days = next.interval_days,
        "review submitted"
    );

    let message = if matched && !payload.revealed {
        "Great job!".to_string()
    } else if !matched && is_near_miss(&card.target_text, &payload.user_answer) {
        "So close! Watch the accents and try again soon.".to_string()
    } else {
        "Review this again soon.".to_string()
    };

    Ok(Json(SubmitReviewResponse {
        correct: matched,
        correct_answer: card.target_text,
        next_review_days: next.interval_days,
        message,
    }))
}
