use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PairStatus {
    Active,
    Finished,
}

impl PairStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PairStatus::Active => "active",
            PairStatus::Finished => "finished",
        }
    }

    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "active" => Ok(PairStatus::Active),
            "finished" => Ok(PairStatus::Finished),
            _ => Err(format!("Invalid pair status: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum IncubationMethod {
    /// Brooded by the hen.
    Natural,
    /// Artificial incubator.
    Incubator,
}

impl IncubationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            IncubationMethod::Natural => "natural",
            IncubationMethod::Incubator => "incubator",
        }
    }

    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "natural" => Ok(IncubationMethod::Natural),
            "incubator" => Ok(IncubationMethod::Incubator),
            _ => Err(format!("Invalid incubation method: {}", s)),
        }
    }
}

/// A mated pair and its clutch. `male_id`/`female_id` are weak references to
/// birds.
///
/// Invariant: `expected_hatch_date` is `Some` exactly when `is_incubating`
/// is true and `incubation_start_date` is set. The hatch date is computed
/// once when incubation is declared and never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreedingPair {
    pub id: String,
    pub male_id: String,
    pub female_id: String,
    pub start_date: NaiveDate,
    pub eggs_laid: u32,
    pub hatched_count: u32,
    pub status: PairStatus,
    pub is_incubating: bool,
    pub incubation_method: Option<IncubationMethod>,
    pub incubation_start_date: Option<NaiveDate>,
    pub expected_hatch_date: Option<NaiveDate>,
    pub eggs_incubating: Option<u32>,
}

impl BreedingPair {
    pub fn generate_id() -> String {
        format!("pair::{}", Uuid::new_v4())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PairValidationError {
    #[error("Sire not found: {0}")]
    UnknownMale(String),
    #[error("Dam not found: {0}")]
    UnknownFemale(String),
    #[error("Sire must be male")]
    SireNotMale,
    #[error("Dam must be female")]
    DamNotFemale,
    #[error("Deceased birds cannot be paired")]
    DeceasedParent,
    #[error("Incubation start date is required when incubation is declared")]
    MissingIncubationStart,
}
