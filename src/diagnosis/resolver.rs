//! Diagnosis state machine.
//!
//! Evaluated in strict order: the reliability override first, then
//! candidate-set membership for the declared career. Note this path is
//! evaluated against the dominant area's candidate set, while the profile
//! match in [`super::matcher`] is evaluated against the declared career's
//! own strong/weak sets. The two can disagree (a career missing from the
//! profile table still matches candidates by string equality elsewhere in
//! the table); both verdicts are carried side by side and only joined in
//! the category mapper.

use crate::config::CareerProfileTable;
use crate::core::Diagnosis;
use crate::scoring::is_unreliable;

/// Resolve the diagnosis for one respondent.
///
/// `candidates` must be the dominant area's candidate list, ascending by
/// career name (see [`CareerProfileTable::candidates_for`]).
pub fn resolve_diagnosis(
    reliability_ratio: f64,
    reliability_threshold: f64,
    declared_career: &str,
    candidates: &[String],
) -> Diagnosis {
    if is_unreliable(reliability_ratio, reliability_threshold) {
        return Diagnosis::Unreliable;
    }

    let declared = declared_career.trim();
    if candidates.iter().any(|c| c == declared) {
        Diagnosis::AdequateProfile
    } else if candidates.is_empty() {
        Diagnosis::NoClearSuggestion
    } else {
        Diagnosis::Suggestion(candidates.to_vec())
    }
}

/// Convenience wrapper that derives the candidate set from the table.
pub fn resolve_with_table(
    reliability_ratio: f64,
    reliability_threshold: f64,
    declared_career: &str,
    dominant: crate::core::Area,
    careers: &CareerProfileTable,
) -> (Diagnosis, Vec<String>) {
    let candidates = careers.candidates_for(dominant);
    let diagnosis = resolve_diagnosis(
        reliability_ratio,
        reliability_threshold,
        declared_career,
        &candidates,
    );
    (diagnosis, candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Area;

    #[test]
    fn unreliable_overrides_everything() {
        let candidates = vec!["Arquitectura".to_string()];
        let diagnosis = resolve_diagnosis(0.9, 0.75, "Arquitectura", &candidates);
        assert_eq!(diagnosis, Diagnosis::Unreliable);
    }

    #[test]
    fn declared_career_among_candidates_is_adequate() {
        let table = CareerProfileTable::institutional();
        let (diagnosis, candidates) =
            resolve_with_table(0.6, 0.75, " Arquitectura ", Area::A, &table);
        assert_eq!(diagnosis, Diagnosis::AdequateProfile);
        assert!(candidates.contains(&"Arquitectura".to_string()));
    }

    #[test]
    fn unknown_career_with_candidates_yields_suggestion() {
        let table = CareerProfileTable::institutional();
        let (diagnosis, _) = resolve_with_table(0.6, 0.75, "NotARealCareer", Area::I, &table);
        match diagnosis {
            Diagnosis::Suggestion(careers) => {
                assert!(careers.contains(&"Ingeniería Mecatrónica".to_string()));
                let mut sorted = careers.clone();
                sorted.sort();
                assert_eq!(careers, sorted);
            }
            other => panic!("expected Suggestion, got {:?}", other),
        }
    }

    #[test]
    fn empty_candidate_set_yields_no_clear_suggestion() {
        let diagnosis = resolve_diagnosis(0.6, 0.75, "Arquitectura", &[]);
        assert_eq!(diagnosis, Diagnosis::NoClearSuggestion);
    }

    #[test]
    fn candidates_are_returned_even_when_unreliable() {
        let table = CareerProfileTable::institutional();
        let (diagnosis, candidates) = resolve_with_table(1.0, 0.75, "Arquitectura", Area::A, &table);
        assert_eq!(diagnosis, Diagnosis::Unreliable);
        assert!(!candidates.is_empty());
    }
}
