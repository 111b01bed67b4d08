//! Scoring configuration: interest weight and reliability threshold.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Weight given to interest sums when combining with aptitude sums.
    /// Aptitude weight is always `1.0 - weight_interest`.
    #[serde(default = "default_weight_interest")]
    pub weight_interest: f64,

    /// Straight-line-responding ratio at or above which a respondent is
    /// flagged unreliable.
    #[serde(default = "default_reliability_threshold")]
    pub reliability_threshold: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weight_interest: default_weight_interest(),
            reliability_threshold: default_reliability_threshold(),
        }
    }
}

impl ScoringConfig {
    pub fn weight_aptitude(&self) -> f64 {
        1.0 - self.weight_interest
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.weight_interest) {
            return Err(format!(
                "weight_interest must be in [0, 1], got {}",
                self.weight_interest
            ));
        }
        if !(0.0..=1.0).contains(&self.reliability_threshold) {
            return Err(format!(
                "reliability_threshold must be in [0, 1], got {}",
                self.reliability_threshold
            ));
        }
        Ok(())
    }
}

fn default_weight_interest() -> f64 {
    0.8
}

fn default_reliability_threshold() -> f64 {
    0.75
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_instrument_calibration() {
        let config = ScoringConfig::default();
        assert_eq!(config.weight_interest, 0.8);
        assert_eq!(config.reliability_threshold, 0.75);
        assert!((config.weight_aptitude() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn out_of_range_weight_is_rejected() {
        let config = ScoringConfig {
            weight_interest: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_toml_uses_field_defaults() {
        let config: ScoringConfig = toml::from_str("").unwrap();
        assert_eq!(config, ScoringConfig::default());
    }
}
