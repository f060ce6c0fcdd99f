//! Next-card selection policy.
//!
//! Greedy and stateless: every call re-derives the answer from the full
//! snapshot, so independent sessions can share it without a queue object.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Flashcard, Phase, SrsConfig};

/// Hint attached when the overwhelm tier forces an early review.
pub const OVERWHELM_HINT: &str = "Let's finish these before starting new ones.";

/// What kind of presentation the selected card is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NextKind {
    New,
    Review,
}

/// A selected card with presentation metadata.
#[derive(Debug, Clone)]
pub struct Selection<'a> {
    pub kind: NextKind,
    pub card: &'a Flashcard,
    pub hint: Option<&'static str>,
}

/// Chooses the next card to present from a repository snapshot.
#[derive(Debug, Clone)]
pub struct CardSelector {
    config: SrsConfig,
}

impl CardSelector {
    pub fn new(config: SrsConfig) -> Self {
        Self { config }
    }

    /// Pick the next card, or `None` when the user is caught up.
    ///
    /// Priority order, first non-empty tier wins:
    /// 1. overdue reviews, earliest due first;
    /// 2. forced early review of a mid-ladder card once the learning queue
    ///    reaches its limit, even though nothing is formally due;
    /// 3. unseen words by frequency rank.
    ///
    /// Ties break on card id so the choice is deterministic.
    pub fn select_next<'a>(
        &self,
        cards: &'a [Flashcard],
        now: DateTime<Utc>,
    ) -> Option<Selection<'a>> {
        if let Some(card) = cards
            .iter()
            .filter(|c| !c.is_new && c.due_date <= now)
            .min_by_key(|c| (c.due_date, c.id))
        {
            return Some(Selection {
                kind: NextKind::Review,
                card,
                hint: None,
            });
        }

        let learning: Vec<&Flashcard> = cards
            .iter()
            .filter(|c| !c.is_new && matches!(c.phase, Phase::Learning(_)))
            .collect();

        if learning.len() >= self.config.learning_queue_limit {
            if let Some(card) = learning.into_iter().min_by_key(|c| (c.due_date, c.id)) {
                return Some(Selection {
                    kind: NextKind::Review,
                    card,
                    hint: Some(OVERWHELM_HINT),
                });
            }
        }

        cards
            .iter()
            .filter(|c| c.is_new)
            .min_by_key(|c| (c.frequency_rank, c.id))
            .map(|card| Selection {
                kind: NextKind::New,
                card,
                hint: None,
            })
    }
}
