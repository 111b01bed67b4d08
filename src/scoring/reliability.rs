//! Straight-line-responding detection.

/// Ratio of the dominant answer direction over the whole vector:
/// `max(pct_yes, 1 - pct_yes)`, in [0.5, 1.0] for non-empty input.
/// An empty item universe yields 0.0 rather than dividing by zero.
pub fn reliability_ratio(normalized: &[u8]) -> f64 {
    if normalized.is_empty() {
        return 0.0;
    }
    let yes: u32 = normalized.iter().map(|&v| v as u32).sum();
    let pct_yes = yes as f64 / normalized.len() as f64;
    pct_yes.max(1.0 - pct_yes)
}

/// A respondent answering almost uniformly in one direction is flagged
/// unreliable; the threshold comes from [`crate::config::ScoringConfig`].
pub fn is_unreliable(ratio: f64, threshold: f64) -> bool {
    ratio >= threshold
}
