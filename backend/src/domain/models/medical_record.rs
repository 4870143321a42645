use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MedicalRecordType {
    Vaccine,
    Treatment,
    Deworming,
    Other,
}

impl MedicalRecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MedicalRecordType::Vaccine => "vaccine",
            MedicalRecordType::Treatment => "treatment",
            MedicalRecordType::Deworming => "deworming",
            MedicalRecordType::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "vaccine" => Ok(MedicalRecordType::Vaccine),
            "treatment" => Ok(MedicalRecordType::Treatment),
            "deworming" => Ok(MedicalRecordType::Deworming),
            "other" => Ok(MedicalRecordType::Other),
            _ => Err(format!("Invalid medical record type: {}", s)),
        }
    }
}

/// One entry in a bird's medical history. Immutable once created; never
/// deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalRecord {
    pub id: String,
    /// Application date.
    pub date: NaiveDate,
    pub record_type: MedicalRecordType,
    pub description: String,
    /// Future date acting as a reminder trigger.
    pub next_dose: Option<NaiveDate>,
}

impl MedicalRecord {
    pub fn generate_id() -> String {
        format!("medical::{}", Uuid::new_v4())
    }
}
