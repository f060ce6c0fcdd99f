//! Seeding endpoints for words and context sentences

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;
use vocab_core::Sm2;

/// POST /words
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateWordRequest>,
) -> Result<(StatusCode, Json<CreateWordResponse>)> {
    if payload.frequency_rank <= 0 {
        return Err(ApiError::BadRequest(
            "frequency_rank must be positive".to_string(),
        ));
    }

    let scheduler = Sm2::new(state.config.clone());
    let card = scheduler.new_card(
        Uuid::new_v4(),
        payload.prompt_text,
        payload.target_text,
        payload.frequency_rank,
        Utc::now(),
    );
    state.db.insert_word(&card).await?;

    Ok((StatusCode::CREATED, Json(CreateWordResponse { id: card.id })))
}

/// POST /sentences
pub async fn add_sentence(
    State(state): State<AppState>,
    Json(payload): Json<CreateSentenceRequest>,
) -> Result<(StatusCode, Json<CreateSentenceResponse>)> {
    state
        .db
        .get_word(payload.word_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Card not found".to_string()))?;

    let sentence = state
        .db
        .insert_sentence(payload.word_id, &payload.prompt_text, &payload.target_text)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateSentenceResponse { id: sentence.id }),
    ))
}
