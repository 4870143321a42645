//! Farm event consolidator.
//!
//! Merges the two scheduled-event sources — medical due dates and expected
//! hatches — into one chronologically sorted agenda. The sort is stable, so
//! same-day events keep health-before-breeding source order and, within a
//! source, insertion order.

use chrono::{Local, NaiveDate};
use log::debug;

use crate::domain::calendar;
use crate::domain::flock_service::FlockService;
use shared::{FarmEvent, FarmEventType};

#[derive(Clone)]
pub struct FarmEventService {
    flock: FlockService,
}

impl FarmEventService {
    pub fn new(flock: FlockService) -> Self {
        Self { flock }
    }

    /// The full consolidated agenda, evaluated against today's date.
    pub fn farm_events(&self) -> Vec<FarmEvent> {
        self.farm_events_on(Local::now().date_naive())
    }

    /// The full consolidated agenda against an explicit date.
    pub fn farm_events_on(&self, today: NaiveDate) -> Vec<FarmEvent> {
        let birds = self.flock.birds();
        let pairs = self.flock.pairs();

        let mut events: Vec<FarmEvent> = birds
            .iter()
            .flat_map(|bird| {
                bird.medical_history
                    .iter()
                    .filter_map(|record| record.next_dose.map(|due| (record, due)))
                    .map(|(record, due)| FarmEvent {
                        id: record.id.clone(),
                        date: due,
                        event_type: FarmEventType::Health,
                        title: record.description.clone(),
                        description: "Scheduled treatment/vaccine".to_string(),
                        subject: Some(bird.name.clone()),
                        days_away: calendar::days_away(due, today),
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        events.extend(pairs.iter().filter_map(|pair| {
            pair.expected_hatch_date.map(|hatch| {
                let sire = birds
                    .iter()
                    .find(|b| b.id == pair.male_id)
                    .map(|b| b.name.clone())
                    .unwrap_or_else(|| "?".to_string());
                let dam = birds
                    .iter()
                    .find(|b| b.id == pair.female_id)
                    .map(|b| b.name.clone())
                    .unwrap_or_else(|| "?".to_string());
                FarmEvent {
                    id: pair.id.clone(),
                    date: hatch,
                    event_type: FarmEventType::Breeding,
                    title: "Expected hatch".to_string(),
                    description: format!(
                        "{} egg(s) in progress",
                        pair.eggs_incubating.unwrap_or(0)
                    ),
                    subject: Some(format!("{} x {}", sire, dam)),
                    days_away: calendar::days_away(hatch, today),
                }
            })
        }));

        // Stable: same-day events keep source-then-insertion order.
        events.sort_by_key(|e| e.date);

        debug!("Consolidated {} farm event(s)", events.len());
        events
    }

    /// The next few events for the dashboard alert strip.
    pub fn upcoming(&self, limit: usize) -> Vec<FarmEvent> {
        self.upcoming_on(Local::now().date_naive(), limit)
    }

    pub fn upcoming_on(&self, today: NaiveDate, limit: usize) -> Vec<FarmEvent> {
        let mut events = self.farm_events_on(today);
        events.truncate(limit);
        events
    }
}
