//! Weighted score combination and dominant-area resolution.

use super::aggregate::AreaSums;
use crate::config::ScoringConfig;
use crate::core::{Area, AreaScores};
use std::collections::BTreeMap;

/// Combine interest/aptitude sums into the weighted score and total for
/// one area: `interest * w + aptitude * (1 - w)`.
pub fn combine(sums: AreaSums, config: &ScoringConfig) -> AreaScores {
    AreaScores {
        interest: sums.interest,
        aptitude: sums.aptitude,
        weighted: sums.interest as f64 * config.weight_interest
            + sums.aptitude as f64 * config.weight_aptitude(),
        total: sums.interest + sums.aptitude,
    }
}

/// Pick the single strongest area by weighted score.
///
/// Iterates [`Area::ALL`] in canonical order with a strict `>` comparison,
/// so on exact ties the earlier area wins. This tie-break is load-bearing
/// for reproducibility; it must never be replaced with map iteration.
pub fn dominant_area(scores: &BTreeMap<Area, AreaScores>) -> (Area, f64) {
    let mut best = Area::ALL[0];
    let mut best_score = scores[&best].weighted;
    for &area in &Area::ALL[1..] {
        let score = scores[&area].weighted;
        if score > best_score {
            best = area;
            best_score = score;
        }
    }
    (best, best_score)
}
