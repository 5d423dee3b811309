use crate::cohort::{AgeGroup, Parity};
use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Embedded JSON document of weekly delivery weights by cohort.
pub static WEIGHTS_JSON: &str = include_str!("../../fixtures/weights.json");

/// One cohort's weekly weights, positionally aligned with the dataset's
/// week identifiers. Always a private copy, never a view into the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightCurve(pub Vec<f64>);

impl WeightCurve {
    /// Sum of all weekly weights in the curve.
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }
}

/// Population-level weekly delivery weights, keyed by age group and parity.
///
/// Read-only after load. The week identifiers are gestational weeks and
/// every curve is positionally aligned with them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopulationDataset {
    pub weeks: Vec<i32>,
    pub curves_by_age_parity: HashMap<AgeGroup, HashMap<Parity, Vec<f64>>>,
}

/// Errors raised by cohort lookups against a dataset.
#[derive(Debug, PartialEq, Eq)]
pub enum CohortError {
    UnknownCohort { age_group: AgeGroup, parity: Parity },
}

impl fmt::Display for CohortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CohortError::UnknownCohort { age_group, parity } => {
                write!(f, "no curve for cohort {} / {}", age_group, parity)
            }
        }
    }
}

impl std::error::Error for CohortError {}

impl PopulationDataset {
    /// Get the bundled dataset embedded at build time.
    pub fn bundled() -> PopulationDataset {
        if let Ok(dataset) = PopulationDataset::from_json_str(WEIGHTS_JSON) {
            dataset
        } else {
            panic!("failed to parse bundled weights.json")
        }
    }

    /// Parse and validate a dataset document.
    ///
    /// Week identifiers must be consecutive integers (the daily table relies
    /// on gap-free dates), every curve must align with them, and every
    /// weight must be finite and non-negative.
    pub fn from_json_str(text: &str) -> anyhow::Result<PopulationDataset> {
        let dataset: PopulationDataset =
            serde_json::from_str(text).context("malformed weights document")?;
        dataset.validate()?;
        Ok(dataset)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.weeks.is_empty() {
            bail!("weights document has no week identifiers");
        }
        for pair in self.weeks.windows(2) {
            if pair[1] != pair[0] + 1 {
                bail!(
                    "week identifiers must be consecutive, found {} after {}",
                    pair[1],
                    pair[0]
                );
            }
        }
        for (age_group, by_parity) in &self.curves_by_age_parity {
            for (parity, curve) in by_parity {
                if curve.len() != self.weeks.len() {
                    bail!(
                        "curve for {} / {} has {} weights for {} weeks",
                        age_group,
                        parity,
                        curve.len(),
                        self.weeks.len()
                    );
                }
                for (week, weight) in self.weeks.iter().zip(curve.iter()) {
                    if !weight.is_finite() || *weight < 0.0 {
                        bail!(
                            "curve for {} / {} has invalid weight {} at week {}",
                            age_group,
                            parity,
                            weight,
                            week
                        );
                    }
                }
            }
        }
        Ok(())
    }

    /// Look up the weight curve for a cohort. Returns a copy of the weights.
    pub fn curve(&self, age_group: AgeGroup, parity: Parity) -> Result<WeightCurve, CohortError> {
        self.curves_by_age_parity
            .get(&age_group)
            .and_then(|by_parity| by_parity.get(&parity))
            .map(|weights| WeightCurve(weights.clone()))
            .ok_or(CohortError::UnknownCohort { age_group, parity })
    }
}
