//! Career profile table: which areas make a career a coherent choice.

use crate::core::Area;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Profile of a single career.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerProfile {
    /// Areas for which this career is a coherent match.
    pub strong: Vec<Area>,
    /// Areas signaling the career requires guidance. Optional; most
    /// institutional profiles define only strong areas.
    #[serde(default)]
    pub weak: Vec<Area>,
}

/// Career name → profile. Absence of a career is a valid, non-error state.
///
/// Built once at startup; lookups trim surrounding whitespace from the
/// declared-career string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CareerProfileTable {
    profiles: BTreeMap<String, CareerProfile>,
}

impl CareerProfileTable {
    pub fn new(profiles: BTreeMap<String, CareerProfile>) -> Self {
        Self { profiles }
    }

    /// The ten institutional careers the inventory was calibrated against.
    pub fn institutional() -> Self {
        use Area::*;
        let entries: [(&str, &[Area]); 10] = [
            ("Arquitectura", &[A, I, C]),
            ("Contador Público", &[C, D]),
            ("Licenciatura en Administración", &[C, D]),
            ("Ingeniería Ambiental", &[I, C, E]),
            ("Ingeniería Bioquímica", &[I, C, E]),
            ("Ingeniería en Gestión Empresarial", &[C, D, H]),
            ("Ingeniería Industrial", &[C, D, H]),
            ("Ingeniería en Inteligencia Artificial", &[I, E]),
            ("Ingeniería Mecatrónica", &[I, E]),
            ("Ingeniería en Sistemas Computacionales", &[I, E]),
        ];
        let profiles = entries
            .into_iter()
            .map(|(name, strong)| {
                (
                    name.to_string(),
                    CareerProfile {
                        strong: strong.to_vec(),
                        weak: Vec::new(),
                    },
                )
            })
            .collect();
        Self { profiles }
    }

    pub fn get(&self, career: &str) -> Option<&CareerProfile> {
        self.profiles.get(career.trim())
    }

    /// Careers whose strong set contains `area`, ascending by name.
    /// BTreeMap iteration gives the stable ordering; no re-sort needed.
    pub fn candidates_for(&self, area: Area) -> Vec<String> {
        self.profiles
            .iter()
            .filter(|(_, profile)| profile.strong.contains(&area))
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_trims_whitespace() {
        let table = CareerProfileTable::institutional();
        assert!(table.get("  Arquitectura ").is_some());
        assert!(table.get("arquitectura").is_none());
    }

    #[test]
    fn candidates_are_sorted_ascending() {
        let table = CareerProfileTable::institutional();
        let candidates = table.candidates_for(Area::I);
        let mut sorted = candidates.clone();
        sorted.sort();
        assert_eq!(candidates, sorted);
        assert!(candidates.contains(&"Ingeniería Mecatrónica".to_string()));
    }

    #[test]
    fn unknown_career_is_a_valid_state() {
        let table = CareerProfileTable::institutional();
        assert!(table.get("NotARealCareer").is_none());
    }

    #[test]
    fn h_has_candidates_via_management_profiles() {
        let table = CareerProfileTable::institutional();
        let candidates = table.candidates_for(Area::H);
        assert_eq!(
            candidates,
            vec![
                "Ingeniería Industrial".to_string(),
                "Ingeniería en Gestión Empresarial".to_string(),
            ]
        );
    }

    #[test]
    fn table_deserializes_from_toml() {
        let toml_src = indoc::indoc! {r#"
            [Arquitectura]
            strong = ["A", "I", "C"]

            ["Diseño Gráfico"]
            strong = ["A"]
            weak = ["C"]
        "#};
        let table: CareerProfileTable = toml::from_str(toml_src).unwrap();
        assert_eq!(table.len(), 2);
        let diseno = table.get("Diseño Gráfico").unwrap();
        assert_eq!(diseno.weak, vec![Area::C]);
    }
}
