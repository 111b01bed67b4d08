//! Final semaphore category mapping.

use crate::core::{Category, Diagnosis, ProfileMatch};

/// Map (diagnosis, profile match) to one of the five semaphore categories.
/// Total: every combination lands on exactly one category.
///
/// The two inputs come from independent evaluation tracks (candidate-set
/// membership vs. declared-career strong/weak sets) and can diverge; e.g.
/// a Suggestion paired with NoProfileDefined maps to LightGray even though
/// candidates exist. That pairing is the observed instrument behavior and
/// is kept as-is.
pub fn map_category(diagnosis: &Diagnosis, profile_match: ProfileMatch) -> Category {
    match diagnosis {
        Diagnosis::Unreliable => Category::Gray,
        Diagnosis::NoClearSuggestion => Category::LightGray,
        Diagnosis::AdequateProfile | Diagnosis::Suggestion(_) => match profile_match {
            ProfileMatch::Coherent => Category::Green,
            ProfileMatch::Neutral => Category::Yellow,
            ProfileMatch::RequiresGuidance => Category::Red,
            ProfileMatch::NoProfileDefined => Category::LightGray,
        },
    }
}
