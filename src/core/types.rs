//! Common type definitions used across the codebase

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One of the seven CHASIDE trait areas.
///
/// Variant order is the canonical area order (C, H, A, S, I, D, E). The
/// derived `Ord` and [`Area::ALL`] both follow it, and dominant-area
/// tie-breaking depends on it; treat the order as versioned and fixed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Area {
    C,
    H,
    A,
    S,
    I,
    D,
    E,
}

impl Area {
    /// Canonical evaluation order for all per-area iteration.
    pub const ALL: [Area; 7] = [
        Area::C,
        Area::H,
        Area::A,
        Area::S,
        Area::I,
        Area::D,
        Area::E,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Area::C => "C",
            Area::H => "H",
            Area::A => "A",
            Area::S => "S",
            Area::I => "I",
            Area::D => "D",
            Area::E => "E",
        }
    }

    /// Trait description shown in reports, as published for the instrument.
    pub fn description(&self) -> &'static str {
        match self {
            Area::C => "Organización, supervisión, orden, análisis y síntesis, colaboración, cálculo.",
            Area::H => "Precisión verbal, organización, relación de hechos, justicia, persuasión.",
            Area::A => "Estético y creativo; detallista, innovador, intuitivo; habilidades visuales, auditivas y manuales.",
            Area::S => "Asistir y ayudar; investigación, precisión, percepción, análisis; altruismo y paciencia.",
            Area::I => "Cálculo y pensamiento científico/crítico; exactitud, planificación; enfoque práctico.",
            Area::D => "Justicia y equidad; colaboración, liderazgo; valentía y toma de decisiones.",
            Area::E => "Investigación; orden, análisis y síntesis; cálculo numérico, observación, método y seguridad.",
        }
    }

    pub fn from_code(code: &str) -> Option<Area> {
        match code.trim() {
            "C" => Some(Area::C),
            "H" => Some(Area::H),
            "A" => Some(Area::A),
            "S" => Some(Area::S),
            "I" => Some(Area::I),
            "D" => Some(Area::D),
            "E" => Some(Area::E),
            _ => None,
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One dataset row: raw answer tokens plus the two named columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Respondent {
    pub name: String,
    pub declared_career: String,
    /// Raw item tokens in item order (1..=98). Free text; normalization
    /// happens in the pipeline, never at ingestion.
    pub answers: Vec<String>,
}

/// Per-area score block for one respondent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaScores {
    /// Yes-count over the area's interest items, 0..=10.
    pub interest: u32,
    /// Yes-count over the area's aptitude items, 0..=4.
    pub aptitude: u32,
    /// interest * w + aptitude * (1 - w).
    pub weighted: f64,
    /// interest + aptitude.
    pub total: u32,
}

/// All derived numeric results for one respondent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRespondent {
    /// Keyed by area; `Area`'s derived `Ord` keeps iteration in canonical
    /// order, but dominant-area selection never relies on map iteration.
    pub scores: BTreeMap<Area, AreaScores>,
    pub dominant: Area,
    /// The dominant area's weighted score.
    pub top_score: f64,
    /// Straight-line-responding ratio, in [0.5, 1.0] for a non-empty
    /// inventory (0.0 only in the degenerate zero-item case).
    pub reliability_ratio: f64,
}

impl ScoredRespondent {
    pub fn area(&self, area: Area) -> &AreaScores {
        &self.scores[&area]
    }
}

/// Coherence of the declared career against the dominant area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfileMatch {
    Coherent,
    Neutral,
    RequiresGuidance,
    NoProfileDefined,
}

impl ProfileMatch {
    pub fn label(&self) -> &'static str {
        match self {
            ProfileMatch::Coherent => "Coherente",
            ProfileMatch::Neutral => "Neutral",
            ProfileMatch::RequiresGuidance => "Requiere Orientación",
            ProfileMatch::NoProfileDefined => "Sin perfil definido",
        }
    }
}

/// Primary vocational diagnosis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Diagnosis {
    /// Reliability ratio at or above threshold; overrides everything else.
    Unreliable,
    /// Declared career is among the dominant area's candidates.
    AdequateProfile,
    /// No career lists the dominant area as strong.
    NoClearSuggestion,
    /// Candidate careers for the dominant area, ascending by name.
    Suggestion(Vec<String>),
}

impl Diagnosis {
    pub fn label(&self) -> String {
        match self {
            Diagnosis::Unreliable => "Información no aceptable".to_string(),
            Diagnosis::AdequateProfile => "Perfil adecuado".to_string(),
            Diagnosis::NoClearSuggestion => "Sin sugerencia clara".to_string(),
            Diagnosis::Suggestion(careers) => format!("Sugerencia: {}", careers.join(", ")),
        }
    }
}

/// Final five-valued semaphore category.
///
/// Variant order is the fixed report order; `Ord` follows it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Category {
    Green,
    Yellow,
    Red,
    Gray,
    LightGray,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Green,
        Category::Yellow,
        Category::Red,
        Category::Gray,
        Category::LightGray,
    ];

    /// Report label used by the institutional application.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Green => "Perfil Vocacional Alineado",
            Category::Yellow => "Perfil Incongruente al seleccionado",
            Category::Red => "Sin Perfil Definido",
            Category::Gray => "Respuestas No Confiables",
            Category::LightGray => "Sin sugerencia",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The per-respondent output record consumed by reporting collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub name: String,
    pub declared_career: String,
    pub scored: ScoredRespondent,
    pub diagnosis: Diagnosis,
    pub profile_match: ProfileMatch,
    /// Careers whose strong set contains the dominant area, ascending by
    /// name. Populated even for unreliable respondents so reports can show
    /// affinities; the diagnosis itself ignores them in that case.
    pub candidates: Vec<String>,
    pub category: Category,
}
