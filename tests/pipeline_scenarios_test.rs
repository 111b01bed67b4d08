//! End-to-end scenarios over the full evaluation pipeline.

use chaside::*;
use pretty_assertions::assert_eq;

fn engine_parts() -> (&'static InventoryDefinition, CareerProfileTable, ScoringConfig) {
    (
        InventoryDefinition::chaside(),
        CareerProfileTable::institutional(),
        ScoringConfig::default(),
    )
}

fn respondent(name: &str, career: &str, answers: Vec<String>) -> Respondent {
    Respondent {
        name: name.to_string(),
        declared_career: career.to_string(),
        answers,
    }
}

/// Answers "sí" exactly at the given 1-based item numbers, "no" elsewhere.
fn answers_at(items: &[u16]) -> Vec<String> {
    let mut answers = vec!["no".to_string(); 98];
    for &idx in items {
        answers[idx as usize - 1] = "sí".to_string();
    }
    answers
}

/// Full pools for `main` plus filler pools from other areas, keeping the
/// yes-rate away from the reliability threshold while `main` dominates.
fn dominant_answers(
    inv: &InventoryDefinition,
    main: Area,
    filler_interest: Area,
    filler_aptitude: Area,
) -> Vec<String> {
    let mut items: Vec<u16> = Vec::new();
    items.extend_from_slice(inv.interest_items(main));
    items.extend_from_slice(inv.aptitude_items(main));
    items.extend_from_slice(inv.interest_items(filler_interest));
    items.extend_from_slice(inv.aptitude_items(filler_aptitude));
    answers_at(&items)
}

#[test]
fn scenario_a_all_yes_is_unreliable_gray() {
    let (inv, careers, config) = engine_parts();
    let engine = Engine::new(inv, &careers, &config);
    let eval = engine.evaluate(&respondent("a", "Arquitectura", vec!["sí".to_string(); 98]));
    assert_eq!(eval.scored.reliability_ratio, 1.0);
    assert_eq!(eval.diagnosis, Diagnosis::Unreliable);
    assert_eq!(eval.category, Category::Gray);
}

#[test]
fn scenario_b_all_no_is_unreliable_gray() {
    let (inv, careers, config) = engine_parts();
    let engine = Engine::new(inv, &careers, &config);
    let eval = engine.evaluate(&respondent("b", "Arquitectura", vec!["no".to_string(); 98]));
    assert_eq!(eval.scored.reliability_ratio, 1.0);
    assert_eq!(eval.category, Category::Gray);
}

#[test]
fn scenario_c_coherent_architecture_profile_is_green() {
    let (inv, careers, config) = engine_parts();
    let engine = Engine::new(inv, &careers, &config);
    let answers = dominant_answers(inv, Area::A, Area::S, Area::I);
    let eval = engine.evaluate(&respondent("c", "Arquitectura", answers));
    assert!(eval.scored.reliability_ratio < 0.75);
    assert_eq!(eval.scored.dominant, Area::A);
    assert_eq!(eval.diagnosis, Diagnosis::AdequateProfile);
    assert_eq!(eval.profile_match, ProfileMatch::Coherent);
    assert_eq!(eval.category, Category::Green);
}

#[test]
fn scenario_d_unknown_career_with_candidates_is_light_gray() {
    let (inv, careers, config) = engine_parts();
    let engine = Engine::new(inv, &careers, &config);
    let answers = dominant_answers(inv, Area::I, Area::A, Area::S);
    let eval = engine.evaluate(&respondent("d", "NotARealCareer", answers));
    assert_eq!(eval.scored.dominant, Area::I);
    assert_eq!(eval.profile_match, ProfileMatch::NoProfileDefined);
    match &eval.diagnosis {
        Diagnosis::Suggestion(candidates) => {
            assert!(candidates.contains(&"Ingeniería Mecatrónica".to_string()));
            let mut sorted = candidates.clone();
            sorted.sort();
            assert_eq!(candidates, &sorted);
        }
        other => panic!("expected Suggestion, got {:?}", other),
    }
    assert_eq!(eval.category, Category::LightGray);
}

#[test]
fn scenario_e_empty_candidate_set_is_no_clear_suggestion() {
    let (inv, careers, config) = engine_parts();
    let engine = Engine::new(inv, &careers, &config);
    // no institutional career lists S as strong
    let answers = dominant_answers(inv, Area::S, Area::H, Area::C);
    let eval = engine.evaluate(&respondent("e", "Arquitectura", answers));
    assert_eq!(eval.scored.dominant, Area::S);
    assert!(eval.candidates.is_empty());
    assert_eq!(eval.diagnosis, Diagnosis::NoClearSuggestion);
    assert_eq!(eval.category, Category::LightGray);
}

#[test]
fn conservation_law_over_mixed_answers() {
    let (inv, careers, config) = engine_parts();
    let engine = Engine::new(inv, &careers, &config);
    let answers: Vec<String> = (0..98)
        .map(|i| if i % 3 == 0 { "sí" } else { "no" }.to_string())
        .collect();
    let yes_count = answers.iter().filter(|a| *a == "sí").count() as u32;
    let scored = engine.score(&respondent("f", "Arquitectura", answers));
    let total: u32 = Area::ALL.iter().map(|a| scored.scores[a].total).sum();
    assert_eq!(total, yes_count);
}

#[test]
fn idempotence_byte_identical_output() {
    let (inv, careers, config) = engine_parts();
    let engine = Engine::new(inv, &careers, &config);
    let answers = dominant_answers(inv, Area::A, Area::S, Area::I);
    let r = respondent("g", "Arquitectura", answers);
    let first = serde_json::to_vec(&engine.evaluate(&r)).unwrap();
    let second = serde_json::to_vec(&engine.evaluate(&r)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn custom_threshold_changes_the_unreliable_cutoff() {
    let inv = InventoryDefinition::chaside();
    let careers = CareerProfileTable::institutional();
    let strict = ScoringConfig {
        reliability_threshold: 0.6,
        ..Default::default()
    };
    let engine = Engine::new(inv, &careers, &strict);
    // 28 yes answers: ratio ~0.714, reliable at 0.75 but not at 0.6
    let answers = dominant_answers(inv, Area::A, Area::S, Area::I);
    let eval = engine.evaluate(&respondent("h", "Arquitectura", answers));
    assert_eq!(eval.diagnosis, Diagnosis::Unreliable);
    assert_eq!(eval.category, Category::Gray);
}

#[test]
fn weight_zero_scores_by_aptitude_only() {
    let inv = InventoryDefinition::chaside();
    let careers = CareerProfileTable::institutional();
    let config = ScoringConfig {
        weight_interest: 0.0,
        ..Default::default()
    };
    let engine = Engine::new(inv, &careers, &config);
    // H aptitude full, A interest full: aptitude-only weighting makes H win
    let mut items: Vec<u16> = Vec::new();
    items.extend_from_slice(inv.aptitude_items(Area::H));
    items.extend_from_slice(inv.interest_items(Area::A));
    items.extend_from_slice(inv.interest_items(Area::S));
    items.extend_from_slice(inv.interest_items(Area::D));
    let scored = engine.score(&respondent("i", "", answers_at(&items)));
    assert_eq!(scored.dominant, Area::H);
    assert_eq!(scored.top_score, 4.0);
}
