//! The full per-respondent pipeline and dataset-level aggregation.
//!
//! Every respondent is evaluated independently from their own answer vector
//! plus shared read-only configuration, so bulk evaluation parallelizes
//! with no synchronization beyond the shared references. Output order
//! always mirrors input row order.

use crate::config::{CareerProfileTable, InventoryDefinition, ScoringConfig};
use crate::core::{
    Area, Category, Evaluation, Respondent, ScoredRespondent,
};
use crate::diagnosis::{map_category, match_profile, resolve_with_table};
use crate::scoring::{area_sums, combine, dominant_area, normalize_answers, reliability_ratio};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Shared read-only evaluation context. Build once, pass by reference.
#[derive(Debug, Clone, Copy)]
pub struct Engine<'a> {
    inventory: &'a InventoryDefinition,
    careers: &'a CareerProfileTable,
    config: &'a ScoringConfig,
}

impl<'a> Engine<'a> {
    pub fn new(
        inventory: &'a InventoryDefinition,
        careers: &'a CareerProfileTable,
        config: &'a ScoringConfig,
    ) -> Self {
        Self {
            inventory,
            careers,
            config,
        }
    }

    /// Numeric stages only: normalize, aggregate, weight, resolve dominant
    /// area, compute reliability.
    pub fn score(&self, respondent: &Respondent) -> ScoredRespondent {
        let normalized = normalize_answers(&respondent.answers, self.inventory.item_count());
        let ratio = reliability_ratio(&normalized);

        let scores: BTreeMap<_, _> = Area::ALL
            .iter()
            .map(|&area| {
                let sums = area_sums(&normalized, self.inventory, area);
                (area, combine(sums, self.config))
            })
            .collect();
        let (dominant, top_score) = dominant_area(&scores);

        ScoredRespondent {
            scores,
            dominant,
            top_score,
            reliability_ratio: ratio,
        }
    }

    /// Full pipeline for one respondent. Pure and atomic: two calls with
    /// the same row and configuration produce identical records.
    pub fn evaluate(&self, respondent: &Respondent) -> Evaluation {
        let scored = self.score(respondent);

        let profile_match = match_profile(
            scored.dominant,
            &respondent.declared_career,
            self.careers,
        );
        let (diagnosis, candidates) = resolve_with_table(
            scored.reliability_ratio,
            self.config.reliability_threshold,
            &respondent.declared_career,
            scored.dominant,
            self.careers,
        );
        let category = map_category(&diagnosis, profile_match);

        Evaluation {
            name: respondent.name.clone(),
            declared_career: respondent.declared_career.clone(),
            scored,
            diagnosis,
            profile_match,
            candidates,
            category,
        }
    }

    /// Evaluate a whole cohort in parallel, preserving input order.
    pub fn evaluate_all(&self, respondents: &[Respondent]) -> Vec<Evaluation> {
        respondents
            .par_iter()
            .map(|respondent| self.evaluate(respondent))
            .collect()
    }
}

/// Dataset-level aggregates consumed by reporting collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CohortSummary {
    pub respondents: usize,
    /// Count per category in fixed report order; all five present even
    /// when zero.
    pub by_category: BTreeMap<Category, usize>,
    /// Per declared career, count per category.
    pub by_career: BTreeMap<String, BTreeMap<Category, usize>>,
}

/// Aggregate a cohort's evaluations.
pub fn summarize(evaluations: &[Evaluation]) -> CohortSummary {
    let mut by_category: BTreeMap<Category, usize> =
        Category::ALL.iter().map(|&c| (c, 0)).collect();
    let mut by_career: BTreeMap<String, BTreeMap<Category, usize>> = BTreeMap::new();

    for eval in evaluations {
        *by_category.entry(eval.category).or_insert(0) += 1;
        let career_counts = by_career
            .entry(eval.declared_career.trim().to_string())
            .or_default();
        *career_counts.entry(eval.category).or_insert(0) += 1;
    }

    CohortSummary {
        respondents: evaluations.len(),
        by_category,
        by_career,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Diagnosis, ProfileMatch};

    fn respondent(name: &str, career: &str, answers: Vec<&str>) -> Respondent {
        Respondent {
            name: name.to_string(),
            declared_career: career.to_string(),
            answers: answers.into_iter().map(String::from).collect(),
        }
    }

    fn engine_parts() -> (
        &'static InventoryDefinition,
        CareerProfileTable,
        ScoringConfig,
    ) {
        (
            InventoryDefinition::chaside(),
            CareerProfileTable::institutional(),
            ScoringConfig::default(),
        )
    }

    /// Answers "sí" exactly at the given 1-based item numbers.
    fn answers_at(items: &[u16]) -> Vec<String> {
        let mut answers = vec!["no".to_string(); 98];
        for &idx in items {
            answers[idx as usize - 1] = "sí".to_string();
        }
        answers
    }

    #[test]
    fn all_yes_is_unreliable_and_gray() {
        let (inv, careers, config) = engine_parts();
        let engine = Engine::new(inv, &careers, &config);
        let r = respondent("a", "Arquitectura", vec!["sí"; 98]);
        let eval = engine.evaluate(&r);
        assert_eq!(eval.scored.reliability_ratio, 1.0);
        assert_eq!(eval.diagnosis, Diagnosis::Unreliable);
        assert_eq!(eval.category, Category::Gray);
    }

    #[test]
    fn architecture_profile_is_green() {
        let (inv, careers, config) = engine_parts();
        let engine = Engine::new(inv, &careers, &config);
        // All of A's interest and aptitude items plus enough scattered
        // "yes" answers elsewhere to stay under the reliability threshold.
        let mut items: Vec<u16> = Vec::new();
        items.extend_from_slice(inv.interest_items(Area::A));
        items.extend_from_slice(inv.aptitude_items(Area::A));
        items.extend_from_slice(inv.interest_items(Area::S));
        items.extend_from_slice(inv.aptitude_items(Area::I));
        let r = Respondent {
            name: "b".to_string(),
            declared_career: "Arquitectura".to_string(),
            answers: answers_at(&items),
        };
        let eval = engine.evaluate(&r);
        assert!(eval.scored.reliability_ratio < 0.75);
        assert_eq!(eval.scored.dominant, Area::A);
        assert_eq!(eval.diagnosis, Diagnosis::AdequateProfile);
        assert_eq!(eval.profile_match, ProfileMatch::Coherent);
        assert_eq!(eval.category, Category::Green);
    }

    #[test]
    fn bulk_evaluation_preserves_input_order() {
        let (inv, careers, config) = engine_parts();
        let engine = Engine::new(inv, &careers, &config);
        let cohort: Vec<Respondent> = (0..20)
            .map(|i| respondent(&format!("r{i}"), "Arquitectura", vec!["no"; 98]))
            .collect();
        let evals = engine.evaluate_all(&cohort);
        let names: Vec<&str> = evals.iter().map(|e| e.name.as_str()).collect();
        let expected: Vec<String> = (0..20).map(|i| format!("r{i}")).collect();
        assert_eq!(names, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn summary_zero_fills_all_categories() {
        let summary = summarize(&[]);
        assert_eq!(summary.respondents, 0);
        assert_eq!(summary.by_category.len(), 5);
        assert!(summary.by_category.values().all(|&n| n == 0));
    }

    #[test]
    fn summary_counts_by_career_and_category() {
        let (inv, careers, config) = engine_parts();
        let engine = Engine::new(inv, &careers, &config);
        let cohort = vec![
            respondent("a", "Arquitectura", vec!["sí"; 98]),
            respondent("b", "Arquitectura ", vec!["sí"; 98]),
        ];
        let summary = summarize(&engine.evaluate_all(&cohort));
        assert_eq!(summary.respondents, 2);
        assert_eq!(summary.by_category[&Category::Gray], 2);
        // trimmed career names collapse into one bucket
        assert_eq!(summary.by_career.len(), 1);
        assert_eq!(summary.by_career["Arquitectura"][&Category::Gray], 2);
    }
}
