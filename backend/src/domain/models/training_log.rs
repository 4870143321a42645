use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Activity label that feeds the official win/loss record.
pub const OFFICIAL_COMBAT_ACTIVITY: &str = "Official combat";
/// Activity label for practice bouts; results are recorded but do not touch
/// the official record.
pub const SPARRING_ACTIVITY: &str = "Sparring";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Intensity {
    Low,
    Medium,
    High,
}

impl Intensity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intensity::Low => "low",
            Intensity::Medium => "medium",
            Intensity::High => "high",
        }
    }

    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Intensity::Low),
            "medium" => Ok(Intensity::Medium),
            "high" => Ok(Intensity::High),
            _ => Err(format!("Invalid intensity: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CombatResult {
    Win,
    Loss,
    Draw,
}

impl CombatResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            CombatResult::Win => "win",
            CombatResult::Loss => "loss",
            CombatResult::Draw => "draw",
        }
    }

    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "win" => Ok(CombatResult::Win),
            "loss" => Ok(CombatResult::Loss),
            "draw" => Ok(CombatResult::Draw),
            _ => Err(format!("Invalid combat result: {}", s)),
        }
    }
}

/// One training or combat session. `result` is only meaningful for official
/// combat and sparring activities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingLog {
    pub id: String,
    pub bird_id: String,
    pub date: NaiveDate,
    /// Free-form label; two distinguished values trigger result tracking.
    pub activity: String,
    pub duration_minutes: u32,
    pub intensity: Intensity,
    pub result: Option<CombatResult>,
}

impl TrainingLog {
    pub fn generate_id() -> String {
        format!("training::{}", Uuid::new_v4())
    }

    pub fn is_official_combat(&self) -> bool {
        self.activity == OFFICIAL_COMBAT_ACTIVITY
    }

    pub fn is_sparring(&self) -> bool {
        self.activity == SPARRING_ACTIVITY
    }
}
