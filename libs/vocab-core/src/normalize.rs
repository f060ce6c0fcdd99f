//! Answer normalization for accent-insensitive comparison.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonicalize free-text input for comparison against the target word.
///
/// Lowercases, NFD-decomposes and strips combining marks, folds `đ`/`Đ` to
/// plain `d` (they are base letters, so decomposition leaves them alone),
/// and trims surrounding whitespace. Total and idempotent.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| match c {
            'đ' => 'd',
            'Đ' => 'D',
            other => other,
        })
        .collect::<String>()
        .trim()
        .to_string()
}
