use serde::Deserialize;

use crate::error::AnalysisError;

/// Bonus rates for the tiered reference strategy, as fractions of profit.
///
/// Only the three rates are tunable; the last-place-zero rule is fixed
/// tiering semantics, not configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TierRates {
    /// Rank 0.
    #[serde(default = "default_leader")]
    pub leader: f64,
    /// Ranks 1 and 2.
    #[serde(default = "default_runner_up")]
    pub runner_up: f64,
    /// Every other non-last rank.
    #[serde(default = "default_standard")]
    pub standard: f64,
}

fn default_leader() -> f64 {
    0.15
}

fn default_runner_up() -> f64 {
    0.10
}

fn default_standard() -> f64 {
    0.05
}

impl Default for TierRates {
    fn default() -> Self {
        Self {
            leader: default_leader(),
            runner_up: default_runner_up(),
            standard: default_standard(),
        }
    }
}

// ---------------------------------------------------------------------------
// Parse + Validate
// ---------------------------------------------------------------------------

impl TierRates {
    pub fn from_toml(input: &str) -> Result<Self, AnalysisError> {
        let rates: TierRates =
            toml::from_str(input).map_err(|e| AnalysisError::ConfigParse(e.to_string()))?;
        rates.validate()?;
        Ok(rates)
    }

    pub fn validate(&self) -> Result<(), AnalysisError> {
        let rates = [
            ("leader", self.leader),
            ("runner_up", self.runner_up),
            ("standard", self.standard),
        ];
        for (name, rate) in rates {
            if !(0.0..=1.0).contains(&rate) {
                return Err(AnalysisError::ConfigValidation(format!(
                    "{name} rate must be within 0..=1, got {rate}"
                )));
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
