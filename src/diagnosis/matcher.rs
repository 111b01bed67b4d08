//! Profile match: the declared career evaluated against the dominant area.

use crate::config::CareerProfileTable;
use crate::core::{Area, ProfileMatch};

/// Look up the declared career (trimmed) and classify the dominant area
/// against its strong/weak sets.
pub fn match_profile(
    dominant: Area,
    declared_career: &str,
    careers: &CareerProfileTable,
) -> ProfileMatch {
    let Some(profile) = careers.get(declared_career) else {
        return ProfileMatch::NoProfileDefined;
    };
    if profile.strong.contains(&dominant) {
        ProfileMatch::Coherent
    } else if profile.weak.contains(&dominant) {
        ProfileMatch::RequiresGuidance
    } else {
        ProfileMatch::Neutral
    }
}
