//! Learn endpoint: pick the next card to present

use axum::{extract::State, Json};
use chrono::Utc;
use rand::seq::SliceRandom;

use crate::error::Result;
use crate::models::*;
use crate::AppState;
use vocab_core::CardSelector;

/// GET /learn
///
/// Runs the selection policy against the full word snapshot. The chosen
/// card is served with one of its context sentences picked at random, when
/// any exist.
pub async fn next_card(State(state): State<AppState>) -> Result<Json<NextCardResponse>> {
    let words = state.db.list_words().await?;
    let cards: Vec<Flashcard> = words.iter().map(|w| w.to_core_card()).collect();

    let selector = CardSelector::new(state.config.clone());
    let Some(selection) = selector.select_next(&cards, Utc::now()) else {
        return Ok(Json(NextCardResponse {
            kind: NextCardKind::Done,
            hint: Some("All caught up! Come back later.".to_string()),
            card: None,
        }));
    };

    let sentences = state.db.sentences_for_word(selection.card.id).await?;
    let context = sentences.choose(&mut rand::thread_rng()).map(|s| SentenceBody {
        prompt_text: s.prompt_text.clone(),
        target_text: s.target_text.clone(),
    });

    let card = selection.card;
    Ok(Json(NextCardResponse {
        kind: selection.kind.into(),
        hint: selection.hint.map(|h| h.to_string()),
        card: Some(ApiCard {
            id: card.id,
            prompt_text: card.prompt_text.clone(),
            target_text: card.target_text.clone(),
            frequency_rank: card.frequency_rank,
            is_new: card.is_new,
            context,
        }),
    }))
}
