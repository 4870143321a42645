use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Relative distance of a scheduled event from today, in whole calendar days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DaysAway {
    /// The due date has already passed.
    Overdue,
    /// Due today.
    Today,
    /// Due in the given number of days (always positive).
    Remaining(i64),
}

impl fmt::Display for DaysAway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DaysAway::Overdue => write!(f, "overdue"),
            DaysAway::Today => write!(f, "today"),
            DaysAway::Remaining(1) => write!(f, "1 day remaining"),
            DaysAway::Remaining(n) => write!(f, "{} days remaining", n),
        }
    }
}

/// Source of a consolidated farm calendar entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FarmEventType {
    /// Medical due date (vaccine, treatment, deworming).
    Health,
    /// Expected hatch of an incubating clutch.
    Breeding,
}

/// A single entry in the consolidated farm calendar. Produced fresh on each
/// query; never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmEvent {
    pub id: String,
    pub date: NaiveDate,
    pub event_type: FarmEventType,
    pub title: String,
    pub description: String,
    /// Bird name or "sire x dam" pair label, when known.
    pub subject: Option<String>,
    pub days_away: DaysAway,
}

/// Advisory band within the 21-day incubation window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum IncubationStage {
    /// Days 0-6: stable temperature and humidity, minimal handling.
    Early,
    /// Days 7-13: first candling, remove infertile eggs.
    FirstCandling,
    /// Days 14-17: second candling, embryo movement visible.
    LateDevelopment,
    /// Days 18-20: stop turning, raise humidity.
    Lockdown,
    /// Day 21 onward: hatch day.
    Hatching,
}

/// Status of one named checkpoint within the incubation window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilestoneStatus {
    /// Day offset within the window (1, 7, 14, 18 or 21).
    pub day: u32,
    pub label: String,
    pub reached: bool,
}

/// Derived incubation timeline for one breeding pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncubationSummary {
    pub pair_id: String,
    pub is_incubating: bool,
    pub days_elapsed: i64,
    /// Clamped to 0..=100.
    pub progress_percent: u8,
    /// Negative when the hatch date has passed; `None` when not incubating.
    pub days_remaining: Option<i64>,
    pub incubation_start_date: Option<NaiveDate>,
    pub expected_hatch_date: Option<NaiveDate>,
    pub stage: Option<IncubationStage>,
    pub guidance: Option<String>,
    pub milestones: Vec<MilestoneStatus>,
    pub eggs_incubating: u32,
}

/// A medical record whose next dose is scheduled, annotated with the bird it
/// belongs to. Used for both critical alerts and upcoming reminders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoseReminder {
    pub record_id: String,
    pub bird_id: String,
    pub bird_name: String,
    pub bird_plate: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub days_away: DaysAway,
}

/// One line of the recent medical activity feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalActivity {
    pub record_id: String,
    pub bird_name: String,
    pub bird_plate: String,
    pub record_type: String,
    pub description: String,
    pub date: NaiveDate,
}

/// Flock-wide health statistics for the dashboard cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthOverview {
    pub total_birds: usize,
    /// Birds with at least one medical record inside the trailing 30-day
    /// immunization window.
    pub immunized_count: usize,
    /// `round(100 * immunized / total)`; 0 when the flock is empty.
    pub immunization_percent: u8,
    pub sick_count: usize,
    /// Birds without a recent record.
    pub pending_count: usize,
}

/// Flock-wide registry and combat statistics for the dashboard cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlockOverview {
    pub total_birds: usize,
    /// Birds that are neither deceased nor sold.
    pub active_birds: usize,
    pub in_training: usize,
    pub sick: usize,
    pub deceased: usize,
    pub eggs_incubating_total: u32,
    /// Mean weight of active birds, in kilograms; 0 when there are none.
    pub average_active_weight_kg: f64,
    pub official_wins: u32,
    pub official_losses: u32,
    pub sparring_sessions: usize,
}

/// Small JSON-serializable summary handed to the generative-advice
/// collaborator alongside each question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmContext {
    pub bird_count: usize,
    pub breeds: Vec<String>,
    pub in_training_count: usize,
}
