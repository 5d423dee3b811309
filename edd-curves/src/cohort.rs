use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maternal age bucket keying the population weight curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "<20")]
    UnderTwenty,
    #[serde(rename = "20-29")]
    Twenties,
    #[serde(rename = "30-39")]
    Thirties,
    #[serde(rename = "40+")]
    FortiesPlus,
}

/// Whether this is a first or a subsequent birth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Parity {
    #[serde(rename = "primipara")]
    Primipara,
    #[serde(rename = "multipara")]
    Multipara,
}

/// Raised when a string does not name a known cohort value.
#[derive(Debug)]
pub struct ParseCohortError(pub String);

impl fmt::Display for ParseCohortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown cohort value: {}", self.0)
    }
}

impl std::error::Error for ParseCohortError {}

impl AgeGroup {
    /// All age groups, in dataset order.
    pub const ALL: [AgeGroup; 4] = [
        AgeGroup::UnderTwenty,
        AgeGroup::Twenties,
        AgeGroup::Thirties,
        AgeGroup::FortiesPlus,
    ];

    /// The wire string used in dataset documents and CLI arguments.
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeGroup::UnderTwenty => "<20",
            AgeGroup::Twenties => "20-29",
            AgeGroup::Thirties => "30-39",
            AgeGroup::FortiesPlus => "40+",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AgeGroup {
    type Err = ParseCohortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "<20" => Ok(AgeGroup::UnderTwenty),
            "20-29" => Ok(AgeGroup::Twenties),
            "30-39" => Ok(AgeGroup::Thirties),
            "40+" => Ok(AgeGroup::FortiesPlus),
            other => Err(ParseCohortError(other.to_string())),
        }
    }
}

impl Parity {
    /// Both parities, in dataset order.
    pub const ALL: [Parity; 2] = [Parity::Primipara, Parity::Multipara];

    /// The wire string used in dataset documents and CLI arguments.
    pub fn as_str(&self) -> &'static str {
        match self {
            Parity::Primipara => "primipara",
            Parity::Multipara => "multipara",
        }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Parity {
    type Err = ParseCohortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "primipara" => Ok(Parity::Primipara),
            "multipara" => Ok(Parity::Multipara),
            other => Err(ParseCohortError(other.to_string())),
        }
    }
}
