//! SM-2 derived scheduling with a sub-day learning ladder.
//!
//! Cards climb the ladder (minutes to hours) before graduating to
//! day-granularity review. A fail from any phase drops the card back to the
//! bottom of the ladder; ease only moves on a pass in review phase.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::types::{Flashcard, Phase, ReviewOutcome, SrsConfig};

/// Fixed SM-2 quality for a pass. The binary scale maps every pass to
/// "good", never "perfect", so the ease bonus stays conservative.
const PASS_QUALITY: f64 = 4.0;

/// The ordered sub-day intervals a card climbs before graduation.
#[derive(Debug, Clone, Copy)]
pub struct LearningLadder<'a> {
    steps: &'a [f64],
}

impl<'a> LearningLadder<'a> {
    pub fn new(steps: &'a [f64]) -> Self {
        Self { steps }
    }

    /// Interval at the bottom of the ladder, where failed cards land.
    pub fn entry_interval(&self) -> f64 {
        self.steps[0]
    }

    /// Next position after a pass at `step`, or `None` when the card has
    /// cleared the final rung and graduates.
    pub fn advance(&self, step: usize) -> Option<(usize, f64)> {
        let next = step + 1;
        self.steps.get(next).map(|interval| (next, *interval))
    }
}

/// The state-transition function: `(card, outcome) -> next card state`.
///
/// Pure over the card's scheduling fields; callers persist the returned
/// value, so the latest stored state must be the one passed in.
#[derive(Debug, Clone)]
pub struct Sm2 {
    config: SrsConfig,
}

impl Sm2 {
    pub fn new(config: SrsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SrsConfig {
        &self.config
    }

    /// Seed a freshly added word: unseen, off the ladder, due immediately.
    pub fn new_card(
        &self,
        id: Uuid,
        prompt_text: String,
        target_text: String,
        frequency_rank: i32,
        now: DateTime<Utc>,
    ) -> Flashcard {
        Flashcard {
            id,
            prompt_text,
            target_text,
            frequency_rank,
            is_new: true,
            phase: Phase::New,
            repetition: 0,
            interval_days: 0.0,
            ease_factor: self.config.initial_ease,
            due_date: now,
        }
    }

    /// Apply a review outcome and return the replacement state.
    ///
    /// A `New` card is not on the ladder: its first pass graduates straight
    /// to the day-granularity interval, matching the reference behavior.
    pub fn transition(
        &self,
        card: &Flashcard,
        outcome: ReviewOutcome,
        now: DateTime<Utc>,
    ) -> Flashcard {
        let ladder = LearningLadder::new(&self.config.learning_steps);

        let mut next = match (outcome, card.phase) {
            (ReviewOutcome::Fail, _) => self.drop_to_ladder(card, ladder, now),
            (ReviewOutcome::Pass, Phase::New) => self.graduate(card, now),
            (ReviewOutcome::Pass, Phase::Learning(step)) => match ladder.advance(step) {
                Some((next_step, interval)) => Flashcard {
                    phase: Phase::Learning(next_step),
                    repetition: 0,
                    interval_days: interval,
                    due_date: now + duration_from_days(interval),
                    ..card.clone()
                },
                None => self.graduate(card, now),
            },
            (ReviewOutcome::Pass, Phase::Review) => self.review_pass(card, now),
        };

        next.is_new = false;
        next
    }

    /// Fail from any phase: back to the bottom rung, ease untouched.
    fn drop_to_ladder(
        &self,
        card: &Flashcard,
        ladder: LearningLadder<'_>,
        now: DateTime<Utc>,
    ) -> Flashcard {
        let interval = ladder.entry_interval();
        Flashcard {
            phase: Phase::Learning(0),
            repetition: 0,
            interval_days: interval,
            due_date: now + duration_from_days(interval),
            ..card.clone()
        }
    }

    fn graduate(&self, card: &Flashcard, now: DateTime<Utc>) -> Flashcard {
        let interval = self.config.graduating_interval;
        Flashcard {
            phase: Phase::Review,
            repetition: 1,
            interval_days: interval,
            due_date: now + duration_from_days(interval),
            ..card.clone()
        }
    }

    /// Successful recall in review phase: SM-2 ease update at the fixed
    /// pass quality, then grow the interval.
    fn review_pass(&self, card: &Flashcard, now: DateTime<Utc>) -> Flashcard {
        let gap = 5.0 - PASS_QUALITY;
        let ease = (card.ease_factor + (0.1 - gap * (0.08 + gap * 0.02)))
            .max(self.config.minimum_ease);
        let interval = (card.interval_days * ease).round();

        Flashcard {
            phase: Phase::Review,
            repetition: card.repetition + 1,
            interval_days: interval,
            ease_factor: ease,
            due_date: now + duration_from_days(interval),
            ..card.clone()
        }
    }
}

fn duration_from_days(days: f64) -> Duration {
    Duration::seconds((days * 86_400.0).round() as i64)
}
