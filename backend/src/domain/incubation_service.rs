//! Incubation timeline engine.
//!
//! Computes the derived view of a clutch: progress through the fixed 21-day
//! gestation window, days remaining until the expected hatch, which
//! biological checkpoints have been reached, and the husbandry guidance for
//! the current stage. Everything here is recomputed per query from a store
//! snapshot; nothing is cached.

use anyhow::{anyhow, Result};
use chrono::{Duration, Local, NaiveDate};
use log::debug;

use crate::domain::calendar;
use crate::domain::flock_service::FlockService;
use crate::domain::models::breeding_pair::BreedingPair;
use shared::{IncubationStage, IncubationSummary, MilestoneStatus};

/// Fixed gestation length for fowl eggs.
pub const INCUBATION_PERIOD_DAYS: i64 = 21;

/// Ordered checkpoints within the incubation window.
pub const MILESTONES: [(u32, &str); 5] = [
    (1, "Lay / start"),
    (7, "First candling"),
    (14, "Second candling"),
    (18, "End of turning"),
    (21, "Hatch"),
];

/// Expected hatch date for a clutch whose incubation starts on `start`.
/// Computed once when incubation is declared, never recomputed.
pub fn expected_hatch_date(start: NaiveDate) -> NaiveDate {
    start + Duration::days(INCUBATION_PERIOD_DAYS)
}

/// Advisory band for a given (non-negative) day count. The five bands are
/// contiguous and exhaustive, so exactly one matches any input.
pub fn stage_for_day(days_elapsed: i64) -> IncubationStage {
    match days_elapsed {
        d if d < 7 => IncubationStage::Early,
        d if d < 14 => IncubationStage::FirstCandling,
        d if d < 18 => IncubationStage::LateDevelopment,
        d if d < 21 => IncubationStage::Lockdown,
        _ => IncubationStage::Hatching,
    }
}

/// Husbandry guidance for a stage band.
pub fn stage_guidance(stage: IncubationStage) -> &'static str {
    match stage {
        IncubationStage::Early => {
            "Initial stage. Hold temperature steady at 37.7C (99.9F) and humidity \
             at 50-55%. Avoid unnecessary openings."
        }
        IncubationStage::FirstCandling => {
            "Perform the first candling. Remove infertile eggs to avoid gas \
             contamination."
        }
        IncubationStage::LateDevelopment => {
            "Advanced development. Second candling; chick movement should be \
             visible."
        }
        IncubationStage::Lockdown => {
            "Critical: stop turning the eggs. Raise humidity to 70-75% to help \
             the chicks break the shell."
        }
        IncubationStage::Hatching => {
            "Hatch day. Keep the chicks in the incubator until fully dry \
             (around 24h)."
        }
    }
}

/// Service producing incubation timelines from the entity store.
#[derive(Clone)]
pub struct IncubationService {
    flock: FlockService,
}

impl IncubationService {
    pub fn new(flock: FlockService) -> Self {
        Self { flock }
    }

    /// Timeline summary for one pair, evaluated against today's date.
    pub fn clutch_summary(&self, pair_id: &str) -> Result<IncubationSummary> {
        self.clutch_summary_on(pair_id, Local::now().date_naive())
    }

    /// Timeline summary for one pair against an explicit date.
    pub fn clutch_summary_on(&self, pair_id: &str, today: NaiveDate) -> Result<IncubationSummary> {
        let pair = self
            .flock
            .get_pair(pair_id)
            .ok_or_else(|| anyhow!("Breeding pair not found: {}", pair_id))?;
        Ok(summarize_pair(&pair, today))
    }

    /// Timeline summaries for every pair, evaluated against today's date.
    pub fn clutch_summaries(&self) -> Vec<IncubationSummary> {
        self.clutch_summaries_on(Local::now().date_naive())
    }

    /// Timeline summaries for every pair against an explicit date.
    pub fn clutch_summaries_on(&self, today: NaiveDate) -> Vec<IncubationSummary> {
        let summaries: Vec<IncubationSummary> = self
            .flock
            .pairs()
            .iter()
            .map(|pair| summarize_pair(pair, today))
            .collect();
        debug!("Computed {} clutch summaries", summaries.len());
        summaries
    }
}

/// Derive the full timeline for one pair. A pair that is not incubating
/// yields the safe default: zero progress, no milestones reached, no stage.
pub fn summarize_pair(pair: &BreedingPair, today: NaiveDate) -> IncubationSummary {
    let start = match (pair.is_incubating, pair.incubation_start_date) {
        (true, Some(start)) => start,
        _ => {
            return IncubationSummary {
                pair_id: pair.id.clone(),
                is_incubating: false,
                days_elapsed: 0,
                progress_percent: 0,
                days_remaining: None,
                incubation_start_date: None,
                expected_hatch_date: None,
                stage: None,
                guidance: None,
                milestones: unreached_milestones(),
                eggs_incubating: pair.eggs_incubating.unwrap_or(0),
            };
        }
    };

    // The invariant guarantees a hatch date here, but a dangling record only
    // degrades to the recomputed value rather than panicking.
    let hatch = pair
        .expected_hatch_date
        .unwrap_or_else(|| expected_hatch_date(start));

    let days_elapsed = calendar::days_elapsed(start, today);
    let stage = stage_for_day(days_elapsed);

    IncubationSummary {
        pair_id: pair.id.clone(),
        is_incubating: true,
        days_elapsed,
        progress_percent: calendar::progress_percent(start, hatch, today),
        days_remaining: Some(calendar::days_remaining(hatch, today)),
        incubation_start_date: Some(start),
        expected_hatch_date: Some(hatch),
        stage: Some(stage),
        guidance: Some(stage_guidance(stage).to_string()),
        milestones: MILESTONES
            .iter()
            .map(|&(day, label)| MilestoneStatus {
                day,
                label: label.to_string(),
                reached: days_elapsed >= day as i64,
            })
            .collect(),
        eggs_incubating: pair.eggs_incubating.unwrap_or(0),
    }
}

fn unreached_milestones() -> Vec<MilestoneStatus> {
    MILESTONES
        .iter()
        .map(|&(day, label)| MilestoneStatus {
            day,
            label: label.to_string(),
            reached: false,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::breeding_pair::PairStatus;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn incubating_pair(start: NaiveDate) -> BreedingPair {
        BreedingPair {
            id: "pair::test".to_string(),
            male_id: "bird::m".to_string(),
            female_id: "bird::f".to_string(),
            start_date: start,
            eggs_laid: 6,
            hatched_count: 0,
            status: PairStatus::Active,
            is_incubating: true,
            incubation_method: None,
            incubation_start_date: Some(start),
            expected_hatch_date: Some(expected_hatch_date(start)),
            eggs_incubating: Some(5),
        }
    }

    #[test]
    fn test_expected_hatch_date_is_start_plus_21() {
        assert_eq!(
            expected_hatch_date(date(2024, 3, 12)),
            date(2024, 4, 2)
        );
    }

    #[test]
    fn test_stage_bands_partition_day_counts() {
        // Exactly one band per day count, contiguous over 0..=60
        for day in 0..=60 {
            let stage = stage_for_day(day);
            let expected = if day < 7 {
                IncubationStage::Early
            } else if day < 14 {
                IncubationStage::FirstCandling
            } else if day < 18 {
                IncubationStage::LateDevelopment
            } else if day < 21 {
                IncubationStage::Lockdown
            } else {
                IncubationStage::Hatching
            };
            assert_eq!(stage, expected, "day {}", day);
        }
    }

    #[test]
    fn test_stage_band_boundaries() {
        assert_eq!(stage_for_day(6), IncubationStage::Early);
        assert_eq!(stage_for_day(7), IncubationStage::FirstCandling);
        assert_eq!(stage_for_day(13), IncubationStage::FirstCandling);
        assert_eq!(stage_for_day(14), IncubationStage::LateDevelopment);
        assert_eq!(stage_for_day(17), IncubationStage::LateDevelopment);
        assert_eq!(stage_for_day(18), IncubationStage::Lockdown);
        assert_eq!(stage_for_day(20), IncubationStage::Lockdown);
        assert_eq!(stage_for_day(21), IncubationStage::Hatching);
        assert_eq!(stage_for_day(40), IncubationStage::Hatching);
    }

    #[test]
    fn test_summary_ten_days_in() {
        let start = date(2024, 6, 1);
        let pair = incubating_pair(start);
        let summary = summarize_pair(&pair, date(2024, 6, 11));

        assert_eq!(summary.days_elapsed, 10);
        assert_eq!(summary.progress_percent, 48);
        assert_eq!(summary.days_remaining, Some(11));
        assert_eq!(summary.stage, Some(IncubationStage::FirstCandling));

        let reached: Vec<u32> = summary
            .milestones
            .iter()
            .filter(|m| m.reached)
            .map(|m| m.day)
            .collect();
        assert_eq!(reached, vec![1, 7]);
    }

    #[test]
    fn test_summary_before_start_and_after_hatch() {
        let start = date(2024, 6, 10);
        let pair = incubating_pair(start);

        let before = summarize_pair(&pair, date(2024, 6, 5));
        assert_eq!(before.days_elapsed, 0);
        assert_eq!(before.progress_percent, 0);
        assert_eq!(before.days_remaining, Some(26));

        let after = summarize_pair(&pair, date(2024, 7, 5));
        assert_eq!(after.progress_percent, 100);
        assert_eq!(after.days_remaining, Some(-4)); // overdue
        assert!(after.milestones.iter().all(|m| m.reached));
        assert_eq!(after.stage, Some(IncubationStage::Hatching));
    }

    #[test]
    fn test_summary_not_incubating() {
        let start = date(2024, 6, 1);
        let mut pair = incubating_pair(start);
        pair.is_incubating = false;
        pair.incubation_start_date = None;
        pair.expected_hatch_date = None;

        let summary = summarize_pair(&pair, date(2024, 6, 11));
        assert!(!summary.is_incubating);
        assert_eq!(summary.progress_percent, 0);
        assert!(summary.days_remaining.is_none());
        assert!(summary.stage.is_none());
        assert!(summary.milestones.iter().all(|m| !m.reached));
    }

    #[test]
    fn test_clutch_summary_unknown_pair() {
        let service = IncubationService::new(FlockService::new());
        assert!(service
            .clutch_summary_on("pair::missing", date(2024, 6, 1))
            .is_err());
    }
}
