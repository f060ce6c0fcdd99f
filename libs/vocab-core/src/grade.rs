//! Pass/fail classification of a submitted answer.

use crate::types::ReviewOutcome;

/// Classify a review as pass or fail.
///
/// Revealing the answer counts as a failed recall even if the user then
/// types it correctly. Otherwise the normalized strings must match exactly;
/// there is no partial credit.
pub fn classify(normalized_input: &str, normalized_target: &str, revealed: bool) -> ReviewOutcome {
    if revealed {
        return ReviewOutcome::Fail;
    }

    if normalized_input == normalized_target {
        ReviewOutcome::Pass
    } else {
        ReviewOutcome::Fail
    }
}
