//! Raw answer token normalization.
//!
//! The survey arrives as free text. The mapping below is the explicit,
//! enumerated replacement for the loose coercion the data historically went
//! through: matching is case- and whitespace-insensitive, and anything not
//! recognized as an affirmative degrades silently to "no". That leniency is
//! policy and must hold across locales and spellings.

/// Map one raw item token to 0 or 1.
pub fn normalize_token(raw: &str) -> u8 {
    match raw.trim().to_lowercase().as_str() {
        "sí" | "si" | "s" | "1" | "true" | "verdadero" | "x" => 1,
        // Explicit negatives and everything else (blank, typos, stray
        // punctuation) are both 0; the fallback is deliberate.
        "no" | "n" | "0" | "false" | "falso" => 0,
        _ => 0,
    }
}

/// Normalize a full answer vector to exactly `item_count` values in {0, 1}.
/// Missing trailing answers count as "no"; surplus answers are dropped.
pub fn normalize_answers(raw: &[String], item_count: usize) -> Vec<u8> {
    let mut normalized: Vec<u8> = raw
        .iter()
        .take(item_count)
        .map(|token| normalize_token(token))
        .collect();
    normalized.resize(item_count, 0);
    normalized
}
