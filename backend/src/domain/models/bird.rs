use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::models::medical_record::MedicalRecord;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(format!("Invalid gender: {}", s)),
        }
    }
}

/// Lifecycle status of a bird. Any status may transition to any other via a
/// plain registry update; no transition table is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BirdStatus {
    Active,
    InTraining,
    Breeding,
    Molting,
    Sick,
    Retired,
    Sold,
    Deceased,
}

impl BirdStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BirdStatus::Active => "active",
            BirdStatus::InTraining => "in-training",
            BirdStatus::Breeding => "breeding",
            BirdStatus::Molting => "molting",
            BirdStatus::Sick => "sick",
            BirdStatus::Retired => "retired",
            BirdStatus::Sold => "sold",
            BirdStatus::Deceased => "deceased",
        }
    }

    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "active" => Ok(BirdStatus::Active),
            "in-training" => Ok(BirdStatus::InTraining),
            "breeding" => Ok(BirdStatus::Breeding),
            "molting" => Ok(BirdStatus::Molting),
            "sick" => Ok(BirdStatus::Sick),
            "retired" => Ok(BirdStatus::Retired),
            "sold" => Ok(BirdStatus::Sold),
            "deceased" => Ok(BirdStatus::Deceased),
            _ => Err(format!("Invalid bird status: {}", s)),
        }
    }

    /// Birds that are neither deceased nor sold count toward the active
    /// roster in flock statistics.
    pub fn counts_as_active(&self) -> bool {
        !matches!(self, BirdStatus::Deceased | BirdStatus::Sold)
    }
}

/// Domain model for a registered bird. Owns its medical history exclusively;
/// `father_id`/`mother_id` are weak references into the same collection and
/// may point at nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    pub id: String,
    pub plate: String,
    pub name: String,
    pub gender: Gender,
    pub breed: String,
    pub birth_date: NaiveDate,
    pub weight_kg: f64,
    pub status: BirdStatus,
    pub father_id: Option<String>,
    pub mother_id: Option<String>,
    /// Newest-first by convention.
    pub medical_history: Vec<MedicalRecord>,
    pub notes: String,
    /// Only changes through official combat results.
    pub wins: u32,
    pub losses: u32,
}

impl Bird {
    pub fn generate_id() -> String {
        format!("bird::{}", Uuid::new_v4())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BirdValidationError {
    #[error("Plate cannot be empty")]
    EmptyPlate,
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("Breed cannot be empty")]
    EmptyBreed,
    #[error("Weight must be positive")]
    NonPositiveWeight,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in [
            BirdStatus::Active,
            BirdStatus::InTraining,
            BirdStatus::Breeding,
            BirdStatus::Molting,
            BirdStatus::Sick,
            BirdStatus::Retired,
            BirdStatus::Sold,
            BirdStatus::Deceased,
        ] {
            assert_eq!(BirdStatus::parse(status.as_str()).unwrap(), status);
        }
        assert!(BirdStatus::parse("limbo").is_err());
    }

    #[test]
    fn test_counts_as_active() {
        assert!(BirdStatus::Active.counts_as_active());
        assert!(BirdStatus::Sick.counts_as_active());
        assert!(BirdStatus::Retired.counts_as_active());
        assert!(!BirdStatus::Sold.counts_as_active());
        assert!(!BirdStatus::Deceased.counts_as_active());
    }

    #[test]
    fn test_gender_parse() {
        assert_eq!(Gender::parse("Male").unwrap(), Gender::Male);
        assert_eq!(Gender::parse("female").unwrap(), Gender::Female);
        assert!(Gender::parse("unknown").is_err());
    }
}
