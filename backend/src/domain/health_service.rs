//! Medical due-date and immunization engine.
//!
//! Derives the health views from the flock snapshot: critical alerts
//! (doses due today or overdue), upcoming reminders, the recent activity
//! feed, and the immunization coverage of the flock over its trailing
//! 30-day window. "Today" is evaluated once per query so every figure in a
//! single response agrees on the date.

use chrono::{Duration, Local, NaiveDate};
use log::debug;

use crate::domain::calendar;
use crate::domain::flock_service::FlockService;
use crate::domain::models::bird::{Bird, BirdStatus};
use shared::{DoseReminder, HealthOverview, MedicalActivity};

/// Trailing window used to decide whether a bird counts as currently
/// protected.
pub const IMMUNIZATION_WINDOW_DAYS: i64 = 30;

#[derive(Clone)]
pub struct HealthService {
    flock: FlockService,
}

impl HealthService {
    pub fn new(flock: FlockService) -> Self {
        Self { flock }
    }

    /// Doses due today or already overdue, most urgent first.
    pub fn critical_alerts(&self) -> Vec<DoseReminder> {
        self.critical_alerts_on(Local::now().date_naive())
    }

    pub fn critical_alerts_on(&self, today: NaiveDate) -> Vec<DoseReminder> {
        let mut alerts = collect_reminders(&self.flock.birds(), |due| due <= today, today);
        alerts.sort_by_key(|a| a.due_date);
        debug!("{} critical dose alert(s)", alerts.len());
        alerts
    }

    /// Doses scheduled strictly after today, soonest first.
    pub fn upcoming_reminders(&self) -> Vec<DoseReminder> {
        self.upcoming_reminders_on(Local::now().date_naive())
    }

    pub fn upcoming_reminders_on(&self, today: NaiveDate) -> Vec<DoseReminder> {
        let mut reminders = collect_reminders(&self.flock.birds(), |due| due > today, today);
        reminders.sort_by_key(|r| r.due_date);
        reminders
    }

    /// Percentage of the flock with at least one medical record inside the
    /// trailing 30-day window. 0 when the flock is empty.
    pub fn immunization_percent(&self) -> u8 {
        self.immunization_percent_on(Local::now().date_naive())
    }

    pub fn immunization_percent_on(&self, today: NaiveDate) -> u8 {
        let birds = self.flock.birds();
        immunization_percent(&birds, today)
    }

    /// Flock-wide health statistics for the dashboard cards.
    pub fn health_overview(&self) -> HealthOverview {
        self.health_overview_on(Local::now().date_naive())
    }

    pub fn health_overview_on(&self, today: NaiveDate) -> HealthOverview {
        let birds = self.flock.birds();
        let immunized_count = birds
            .iter()
            .filter(|b| is_recently_immunized(b, today))
            .count();

        HealthOverview {
            total_birds: birds.len(),
            immunized_count,
            immunization_percent: immunization_percent(&birds, today),
            sick_count: birds
                .iter()
                .filter(|b| b.status == BirdStatus::Sick)
                .count(),
            pending_count: birds.len() - immunized_count,
        }
    }

    /// Most recent medical records across the whole flock, newest first.
    pub fn recent_activity(&self, limit: usize) -> Vec<MedicalActivity> {
        let mut activity: Vec<MedicalActivity> = self
            .flock
            .birds()
            .iter()
            .flat_map(|bird| {
                bird.medical_history.iter().map(|record| MedicalActivity {
                    record_id: record.id.clone(),
                    bird_name: bird.name.clone(),
                    bird_plate: bird.plate.clone(),
                    record_type: record.record_type.as_str().to_string(),
                    description: record.description.clone(),
                    date: record.date,
                })
            })
            .collect();
        activity.sort_by(|a, b| b.date.cmp(&a.date));
        activity.truncate(limit);
        activity
    }
}

/// A bird counts as recently immunized when some record falls inside
/// `[today - 30 days, today]`, both bounds inclusive. Future-dated records
/// do not count.
pub fn is_recently_immunized(bird: &Bird, today: NaiveDate) -> bool {
    let window_start = today - Duration::days(IMMUNIZATION_WINDOW_DAYS);
    bird.medical_history
        .iter()
        .any(|record| record.date >= window_start && record.date <= today)
}

fn immunization_percent(birds: &[Bird], today: NaiveDate) -> u8 {
    if birds.is_empty() {
        return 0;
    }
    let immunized = birds
        .iter()
        .filter(|b| is_recently_immunized(b, today))
        .count();
    (100.0 * immunized as f64 / birds.len() as f64).round() as u8
}

fn collect_reminders<F>(birds: &[Bird], keep: F, today: NaiveDate) -> Vec<DoseReminder>
where
    F: Fn(NaiveDate) -> bool,
{
    birds
        .iter()
        .flat_map(|bird| {
            bird.medical_history
                .iter()
                .filter_map(|record| record.next_dose.map(|due| (record, due)))
                .filter(|&(_, due)| keep(due))
                .map(|(record, due)| DoseReminder {
                    record_id: record.id.clone(),
                    bird_id: bird.id.clone(),
                    bird_name: bird.name.clone(),
                    bird_plate: bird.plate.clone(),
                    description: record.description.clone(),
                    due_date: due,
                    days_away: calendar::days_away(due, today),
                })
                .collect::<Vec<_>>()
        })
        .collect()
}
