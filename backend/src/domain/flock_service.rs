//! In-memory entity store for the three domain collections: birds, breeding
//! pairs and training logs.
//!
//! All state lives in one [`FlockData`] behind a shared handle; services get
//! cloned handles from the composition root. Mutation happens one action at
//! a time on the single UI thread, and a reload discards everything — there
//! is no persistence layer behind this store.

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use log::{info, warn};
use std::sync::{Arc, Mutex};

use crate::domain::commands::birds::{
    AddBirdCommand, AddBirdResult, DeleteBirdCommand, DeleteBirdResult, UpdateBirdCommand,
    UpdateBirdResult,
};
use crate::domain::commands::breeding::{CreatePairCommand, CreatePairResult};
use crate::domain::commands::health::{RecordTreatmentCommand, RecordTreatmentResult};
use crate::domain::commands::training::{LogTrainingCommand, LogTrainingResult};
use crate::domain::incubation_service;
use crate::domain::models::bird::{Bird, BirdStatus, BirdValidationError, Gender};
use crate::domain::models::breeding_pair::{
    BreedingPair, IncubationMethod, PairStatus, PairValidationError,
};
use crate::domain::models::medical_record::{MedicalRecord, MedicalRecordType};
use crate::domain::models::training_log::{
    CombatResult, Intensity, TrainingLog, OFFICIAL_COMBAT_ACTIVITY, SPARRING_ACTIVITY,
};
use shared::FlockOverview;

/// The three owned collections. Training logs are kept newest-first.
#[derive(Debug, Default)]
pub struct FlockData {
    pub birds: Vec<Bird>,
    pub pairs: Vec<BreedingPair>,
    pub training_logs: Vec<TrainingLog>,
}

/// Entity store service. Cheap to clone; clones share the same data.
#[derive(Clone)]
pub struct FlockService {
    data: Arc<Mutex<FlockData>>,
}

impl FlockService {
    pub fn new() -> Self {
        Self {
            data: Arc::new(Mutex::new(FlockData::default())),
        }
    }

    /// Snapshot of all birds.
    pub fn birds(&self) -> Vec<Bird> {
        self.data.lock().unwrap().birds.clone()
    }

    /// Snapshot of all breeding pairs.
    pub fn pairs(&self) -> Vec<BreedingPair> {
        self.data.lock().unwrap().pairs.clone()
    }

    /// Snapshot of all training logs, newest first.
    pub fn training_logs(&self) -> Vec<TrainingLog> {
        self.data.lock().unwrap().training_logs.clone()
    }

    pub fn get_bird(&self, bird_id: &str) -> Option<Bird> {
        self.data
            .lock()
            .unwrap()
            .birds
            .iter()
            .find(|b| b.id == bird_id)
            .cloned()
    }

    pub fn get_pair(&self, pair_id: &str) -> Option<BreedingPair> {
        self.data
            .lock()
            .unwrap()
            .pairs
            .iter()
            .find(|p| p.id == pair_id)
            .cloned()
    }

    /// Register a new bird.
    pub fn add_bird(&self, command: AddBirdCommand) -> Result<AddBirdResult> {
        info!("Adding bird: plate={}, name={}", command.plate, command.name);

        self.validate_add_bird(&command)?;

        let gender = Gender::parse(&command.gender).map_err(|e| anyhow!(e))?;
        let birth_date = parse_date(&command.birth_date)
            .context("Invalid birth date in add_bird command")?;
        let status = match command.status.as_deref() {
            Some(s) => BirdStatus::parse(s).map_err(|e| anyhow!(e))?,
            None => BirdStatus::Active,
        };

        let bird = Bird {
            id: Bird::generate_id(),
            plate: command.plate.trim().to_string(),
            name: command.name.trim().to_string(),
            gender,
            breed: command.breed.trim().to_string(),
            birth_date,
            weight_kg: command.weight_kg,
            status,
            father_id: command.father_id,
            mother_id: command.mother_id,
            medical_history: Vec::new(),
            notes: command.notes.unwrap_or_default(),
            wins: 0,
            losses: 0,
        };

        self.data.lock().unwrap().birds.push(bird.clone());

        info!("Added bird: {} with ID: {}", bird.name, bird.id);

        Ok(AddBirdResult { bird })
    }

    /// Replace a bird's registry entry wholesale, matched by id.
    pub fn update_bird(&self, command: UpdateBirdCommand) -> Result<UpdateBirdResult> {
        info!("Updating bird: {}", command.bird.id);

        let mut data = self.data.lock().unwrap();
        let slot = data
            .birds
            .iter_mut()
            .find(|b| b.id == command.bird.id)
            .ok_or_else(|| anyhow!("Bird not found: {}", command.bird.id))?;

        *slot = command.bird.clone();

        Ok(UpdateBirdResult { bird: command.bird })
    }

    /// Remove a bird from the registry.
    pub fn delete_bird(&self, command: DeleteBirdCommand) -> Result<DeleteBirdResult> {
        info!("Deleting bird: {}", command.bird_id);

        let mut data = self.data.lock().unwrap();
        let position = data
            .birds
            .iter()
            .position(|b| b.id == command.bird_id)
            .ok_or_else(|| anyhow!("Bird not found: {}", command.bird_id))?;

        let removed = data.birds.remove(position);

        info!("Deleted bird: {} with ID: {}", removed.name, removed.id);

        Ok(DeleteBirdResult {
            success_message: format!("Bird '{}' deleted successfully", removed.name),
        })
    }

    /// Register a breeding pair. When incubation is declared, the expected
    /// hatch date is fixed here, once, at start + 21 days.
    pub fn add_pair(&self, command: CreatePairCommand) -> Result<CreatePairResult> {
        info!(
            "Creating breeding pair: male={}, female={}",
            command.male_id, command.female_id
        );

        let start_date = parse_date(&command.start_date)
            .context("Invalid start date in add_pair command")?;

        let mut data = self.data.lock().unwrap();

        let male = data
            .birds
            .iter()
            .find(|b| b.id == command.male_id)
            .ok_or_else(|| PairValidationError::UnknownMale(command.male_id.clone()))?;
        if male.gender != Gender::Male {
            return Err(PairValidationError::SireNotMale.into());
        }
        if male.status == BirdStatus::Deceased {
            return Err(PairValidationError::DeceasedParent.into());
        }
        let male_name = male.name.clone();

        let female = data
            .birds
            .iter()
            .find(|b| b.id == command.female_id)
            .ok_or_else(|| PairValidationError::UnknownFemale(command.female_id.clone()))?;
        if female.gender != Gender::Female {
            return Err(PairValidationError::DamNotFemale.into());
        }
        if female.status == BirdStatus::Deceased {
            return Err(PairValidationError::DeceasedParent.into());
        }
        let female_name = female.name.clone();

        let (incubation_method, incubation_start_date, expected_hatch_date, eggs_incubating) =
            if command.is_incubating {
                let start_str = command
                    .incubation_start_date
                    .as_deref()
                    .ok_or(PairValidationError::MissingIncubationStart)?;
                let start = parse_date(start_str)
                    .context("Invalid incubation start date in add_pair command")?;
                let method = match command.incubation_method.as_deref() {
                    Some(m) => IncubationMethod::parse(m).map_err(|e| anyhow!(e))?,
                    None => IncubationMethod::Natural,
                };
                (
                    Some(method),
                    Some(start),
                    Some(incubation_service::expected_hatch_date(start)),
                    Some(command.eggs_incubating.unwrap_or(0)),
                )
            } else {
                (None, None, None, None)
            };

        let pair = BreedingPair {
            id: BreedingPair::generate_id(),
            male_id: command.male_id,
            female_id: command.female_id,
            start_date,
            eggs_laid: command.eggs_laid,
            hatched_count: 0,
            status: PairStatus::Active,
            is_incubating: command.is_incubating,
            incubation_method,
            incubation_start_date,
            expected_hatch_date,
            eggs_incubating,
        };

        data.pairs.push(pair.clone());

        info!(
            "Created pair {} ({} x {}), incubating: {}",
            pair.id, male_name, female_name, pair.is_incubating
        );

        Ok(CreatePairResult { pair })
    }

    /// Log a training or combat session, newest first. An official combat
    /// result atomically updates the bird's win/loss record: a win bumps
    /// wins, a loss bumps losses, a draw touches neither. Sparring results
    /// are recorded on the log only.
    pub fn add_training_log(&self, command: LogTrainingCommand) -> Result<LogTrainingResult> {
        info!(
            "Logging training: bird={}, activity={}",
            command.bird_id, command.activity
        );

        let date = parse_date(&command.date)
            .context("Invalid date in add_training_log command")?;
        let intensity = Intensity::parse(&command.intensity).map_err(|e| anyhow!(e))?;
        let result = command
            .result
            .as_deref()
            .map(CombatResult::parse)
            .transpose()
            .map_err(|e| anyhow!(e))?;

        let mut data = self.data.lock().unwrap();

        if !data.birds.iter().any(|b| b.id == command.bird_id) {
            return Err(anyhow!("Bird not found: {}", command.bird_id));
        }

        // Only combat-style activities carry a result.
        let tracks_result = command.activity == OFFICIAL_COMBAT_ACTIVITY
            || command.activity == SPARRING_ACTIVITY;
        let log = TrainingLog {
            id: TrainingLog::generate_id(),
            bird_id: command.bird_id.clone(),
            date,
            activity: command.activity,
            duration_minutes: command.duration_minutes,
            intensity,
            result: if tracks_result { result } else { None },
        };

        data.training_logs.insert(0, log.clone());

        let mut updated_bird = None;
        if log.is_official_combat() {
            if let (Some(outcome), Some(bird)) = (
                log.result,
                data.birds.iter_mut().find(|b| b.id == command.bird_id),
            ) {
                let changed = match outcome {
                    CombatResult::Win => {
                        bird.wins += 1;
                        true
                    }
                    CombatResult::Loss => {
                        bird.losses += 1;
                        true
                    }
                    CombatResult::Draw => false,
                };
                if changed {
                    info!(
                        "Applied combat result {} to {}: record now {}-{}",
                        outcome.as_str(),
                        bird.name,
                        bird.wins,
                        bird.losses
                    );
                    updated_bird = Some(bird.clone());
                }
            }
        }

        Ok(LogTrainingResult { log, updated_bird })
    }

    /// Apply one medical record to a batch of birds ("medical session").
    /// Each bird gets its own record instance, prepended to its history.
    /// Unknown ids are skipped with a warning rather than failing the batch.
    pub fn add_medical_record(
        &self,
        command: RecordTreatmentCommand,
    ) -> Result<RecordTreatmentResult> {
        info!(
            "Recording medical session: {} bird(s), type={}",
            command.bird_ids.len(),
            command.record_type
        );

        if command.bird_ids.is_empty() {
            return Err(anyhow!("No birds selected for the medical session"));
        }
        if command.description.trim().is_empty() {
            return Err(anyhow!("Medical record description cannot be empty"));
        }

        let record_type = MedicalRecordType::parse(&command.record_type).map_err(|e| anyhow!(e))?;
        let date = parse_date(&command.date)
            .context("Invalid application date in add_medical_record command")?;
        let next_dose = command
            .next_dose
            .as_deref()
            .map(parse_date)
            .transpose()
            .context("Invalid next dose date in add_medical_record command")?;

        let mut data = self.data.lock().unwrap();
        let mut records_created = 0;
        let mut skipped_ids = Vec::new();

        for bird_id in &command.bird_ids {
            match data.birds.iter_mut().find(|b| &b.id == bird_id) {
                Some(bird) => {
                    let record = MedicalRecord {
                        id: MedicalRecord::generate_id(),
                        date,
                        record_type,
                        description: command.description.trim().to_string(),
                        next_dose,
                    };
                    bird.medical_history.insert(0, record);
                    records_created += 1;
                }
                None => {
                    warn!("Skipping unknown bird in medical session: {}", bird_id);
                    skipped_ids.push(bird_id.clone());
                }
            }
        }

        info!("Medical session recorded {} record(s)", records_created);

        Ok(RecordTreatmentResult {
            records_created,
            skipped_ids,
        })
    }

    /// Flock-wide registry and combat statistics for the dashboard.
    pub fn overview(&self) -> FlockOverview {
        let data = self.data.lock().unwrap();

        let active: Vec<&Bird> = data
            .birds
            .iter()
            .filter(|b| b.status.counts_as_active())
            .collect();
        let average_active_weight_kg = if active.is_empty() {
            0.0
        } else {
            active.iter().map(|b| b.weight_kg).sum::<f64>() / active.len() as f64
        };

        FlockOverview {
            total_birds: data.birds.len(),
            active_birds: active.len(),
            in_training: active
                .iter()
                .filter(|b| b.status == BirdStatus::InTraining)
                .count(),
            sick: data
                .birds
                .iter()
                .filter(|b| b.status == BirdStatus::Sick)
                .count(),
            deceased: data
                .birds
                .iter()
                .filter(|b| b.status == BirdStatus::Deceased)
                .count(),
            eggs_incubating_total: data
                .pairs
                .iter()
                .filter_map(|p| p.eggs_incubating)
                .sum(),
            average_active_weight_kg,
            official_wins: data.birds.iter().map(|b| b.wins).sum(),
            official_losses: data.birds.iter().map(|b| b.losses).sum(),
            sparring_sessions: data
                .training_logs
                .iter()
                .filter(|l| l.is_sparring())
                .count(),
        }
    }

    fn validate_add_bird(&self, command: &AddBirdCommand) -> Result<()> {
        if command.plate.trim().is_empty() {
            return Err(BirdValidationError::EmptyPlate.into());
        }
        if command.name.trim().is_empty() {
            return Err(BirdValidationError::EmptyName.into());
        }
        if command.breed.trim().is_empty() {
            return Err(BirdValidationError::EmptyBreed.into());
        }
        if command.weight_kg <= 0.0 {
            return Err(BirdValidationError::NonPositiveWeight.into());
        }
        Ok(())
    }
}

impl Default for FlockService {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a `YYYY-MM-DD` date string.
pub(crate) fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date: {}", s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::training_log::{OFFICIAL_COMBAT_ACTIVITY, SPARRING_ACTIVITY};

    fn add_test_bird(service: &FlockService, name: &str, gender: &str) -> Bird {
        let command = AddBirdCommand {
            plate: format!("GM-{}", name),
            name: name.to_string(),
            gender: gender.to_string(),
            breed: "Kelso".to_string(),
            birth_date: "2023-05-15".to_string(),
            weight_kg: 2.2,
            status: None,
            father_id: None,
            mother_id: None,
            notes: None,
        };
        service.add_bird(command).unwrap().bird
    }

    fn combat_command(bird_id: &str, activity: &str, result: Option<&str>) -> LogTrainingCommand {
        LogTrainingCommand {
            bird_id: bird_id.to_string(),
            date: "2024-06-01".to_string(),
            activity: activity.to_string(),
            duration_minutes: 20,
            intensity: "high".to_string(),
            result: result.map(|r| r.to_string()),
        }
    }

    #[test]
    fn test_add_bird() {
        let service = FlockService::new();
        let bird = add_test_bird(&service, "Relampago", "male");

        assert_eq!(bird.status, BirdStatus::Active);
        assert_eq!(bird.wins, 0);
        assert_eq!(bird.losses, 0);
        assert!(bird.medical_history.is_empty());
        assert_eq!(service.birds().len(), 1);
    }

    #[test]
    fn test_add_bird_validation() {
        let service = FlockService::new();

        let mut command = AddBirdCommand {
            plate: " ".to_string(),
            name: "Bird".to_string(),
            gender: "male".to_string(),
            breed: "Sweater".to_string(),
            birth_date: "2023-01-01".to_string(),
            weight_kg: 2.0,
            status: None,
            father_id: None,
            mother_id: None,
            notes: None,
        };
        assert!(service.add_bird(command.clone()).is_err());

        command.plate = "GM-1".to_string();
        command.weight_kg = 0.0;
        assert!(service.add_bird(command.clone()).is_err());

        command.weight_kg = 2.0;
        command.birth_date = "15/05/2023".to_string();
        assert!(service.add_bird(command.clone()).is_err());

        command.birth_date = "2023-05-15".to_string();
        assert!(service.add_bird(command).is_ok());
    }

    #[test]
    fn test_update_bird_replaces_by_id() {
        let service = FlockService::new();
        let mut bird = add_test_bird(&service, "Zafiro", "female");

        bird.status = BirdStatus::Sick;
        bird.notes = "Under observation".to_string();
        let updated = service
            .update_bird(UpdateBirdCommand { bird: bird.clone() })
            .unwrap();

        assert_eq!(updated.bird.status, BirdStatus::Sick);
        assert_eq!(service.get_bird(&bird.id).unwrap().notes, "Under observation");
    }

    #[test]
    fn test_update_nonexistent_bird() {
        let service = FlockService::new();
        let mut bird = add_test_bird(&service, "Zafiro", "female");
        bird.id = "bird::missing".to_string();
        assert!(service.update_bird(UpdateBirdCommand { bird }).is_err());
    }

    #[test]
    fn test_delete_bird() {
        let service = FlockService::new();
        let bird = add_test_bird(&service, "Relampago", "male");

        service
            .delete_bird(DeleteBirdCommand {
                bird_id: bird.id.clone(),
            })
            .unwrap();

        assert!(service.get_bird(&bird.id).is_none());
        assert!(service
            .delete_bird(DeleteBirdCommand { bird_id: bird.id })
            .is_err());
    }

    #[test]
    fn test_add_pair_fixes_hatch_date() {
        let service = FlockService::new();
        let male = add_test_bird(&service, "Relampago", "male");
        let female = add_test_bird(&service, "Zafiro", "female");

        let result = service
            .add_pair(CreatePairCommand {
                male_id: male.id,
                female_id: female.id,
                start_date: "2024-03-10".to_string(),
                eggs_laid: 6,
                is_incubating: true,
                incubation_method: Some("incubator".to_string()),
                incubation_start_date: Some("2024-03-12".to_string()),
                eggs_incubating: Some(5),
            })
            .unwrap();

        let pair = result.pair;
        assert!(pair.is_incubating);
        assert_eq!(
            pair.expected_hatch_date.unwrap().to_string(),
            "2024-04-02" // start + 21 days
        );
        assert_eq!(pair.eggs_incubating, Some(5));
        assert_eq!(pair.status, PairStatus::Active);
    }

    #[test]
    fn test_add_pair_without_incubation_has_no_hatch_date() {
        let service = FlockService::new();
        let male = add_test_bird(&service, "Relampago", "male");
        let female = add_test_bird(&service, "Zafiro", "female");

        let pair = service
            .add_pair(CreatePairCommand {
                male_id: male.id,
                female_id: female.id,
                start_date: "2024-03-10".to_string(),
                eggs_laid: 6,
                is_incubating: false,
                incubation_method: None,
                incubation_start_date: None,
                eggs_incubating: None,
            })
            .unwrap()
            .pair;

        assert!(pair.expected_hatch_date.is_none());
        assert!(pair.incubation_start_date.is_none());
    }

    #[test]
    fn test_add_pair_validation() {
        let service = FlockService::new();
        let male = add_test_bird(&service, "Relampago", "male");
        let female = add_test_bird(&service, "Zafiro", "female");

        // Swapped genders
        let swapped = CreatePairCommand {
            male_id: female.id.clone(),
            female_id: male.id.clone(),
            start_date: "2024-03-10".to_string(),
            eggs_laid: 0,
            is_incubating: false,
            incubation_method: None,
            incubation_start_date: None,
            eggs_incubating: None,
        };
        assert!(service.add_pair(swapped).is_err());

        // Unknown dam
        let unknown = CreatePairCommand {
            male_id: male.id.clone(),
            female_id: "bird::missing".to_string(),
            start_date: "2024-03-10".to_string(),
            eggs_laid: 0,
            is_incubating: false,
            incubation_method: None,
            incubation_start_date: None,
            eggs_incubating: None,
        };
        assert!(service.add_pair(unknown).is_err());

        // Incubating but no start date
        let no_start = CreatePairCommand {
            male_id: male.id,
            female_id: female.id,
            start_date: "2024-03-10".to_string(),
            eggs_laid: 0,
            is_incubating: true,
            incubation_method: None,
            incubation_start_date: None,
            eggs_incubating: Some(4),
        };
        assert!(service.add_pair(no_start).is_err());
    }

    #[test]
    fn test_official_combat_win_updates_record() {
        let service = FlockService::new();
        let bird = add_test_bird(&service, "Relampago", "male");

        let result = service
            .add_training_log(combat_command(&bird.id, OFFICIAL_COMBAT_ACTIVITY, Some("win")))
            .unwrap();

        let updated = result.updated_bird.unwrap();
        assert_eq!(updated.wins, 1);
        assert_eq!(updated.losses, 0);
        assert_eq!(service.get_bird(&bird.id).unwrap().wins, 1);
    }

    #[test]
    fn test_official_combat_loss_updates_record() {
        let service = FlockService::new();
        let bird = add_test_bird(&service, "Relampago", "male");

        service
            .add_training_log(combat_command(&bird.id, OFFICIAL_COMBAT_ACTIVITY, Some("loss")))
            .unwrap();

        let updated = service.get_bird(&bird.id).unwrap();
        assert_eq!(updated.wins, 0);
        assert_eq!(updated.losses, 1);
    }

    #[test]
    fn test_official_combat_draw_changes_neither() {
        let service = FlockService::new();
        let bird = add_test_bird(&service, "Relampago", "male");

        let result = service
            .add_training_log(combat_command(&bird.id, OFFICIAL_COMBAT_ACTIVITY, Some("draw")))
            .unwrap();

        assert!(result.updated_bird.is_none());
        let bird = service.get_bird(&bird.id).unwrap();
        assert_eq!((bird.wins, bird.losses), (0, 0));
    }

    #[test]
    fn test_sparring_result_does_not_touch_record() {
        let service = FlockService::new();
        let bird = add_test_bird(&service, "Relampago", "male");

        let result = service
            .add_training_log(combat_command(&bird.id, SPARRING_ACTIVITY, Some("win")))
            .unwrap();

        assert!(result.updated_bird.is_none());
        assert_eq!(result.log.result, Some(CombatResult::Win));
        assert_eq!(service.get_bird(&bird.id).unwrap().wins, 0);
    }

    #[test]
    fn test_result_dropped_for_plain_training() {
        let service = FlockService::new();
        let bird = add_test_bird(&service, "Relampago", "male");

        let result = service
            .add_training_log(combat_command(&bird.id, "Flight drills", Some("win")))
            .unwrap();

        assert!(result.log.result.is_none());
        assert!(result.updated_bird.is_none());
    }

    #[test]
    fn test_training_logs_newest_first() {
        let service = FlockService::new();
        let bird = add_test_bird(&service, "Relampago", "male");

        service
            .add_training_log(combat_command(&bird.id, "Flight drills", None))
            .unwrap();
        let second = service
            .add_training_log(combat_command(&bird.id, SPARRING_ACTIVITY, None))
            .unwrap();

        let logs = service.training_logs();
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].id, second.log.id);
    }

    #[test]
    fn test_medical_session_batch() {
        let service = FlockService::new();
        let a = add_test_bird(&service, "Relampago", "male");
        let b = add_test_bird(&service, "Zafiro", "female");

        let result = service
            .add_medical_record(RecordTreatmentCommand {
                bird_ids: vec![a.id.clone(), "bird::missing".to_string(), b.id.clone()],
                date: "2024-03-01".to_string(),
                record_type: "vaccine".to_string(),
                description: "Newcastle booster".to_string(),
                next_dose: Some("2024-06-01".to_string()),
            })
            .unwrap();

        assert_eq!(result.records_created, 2);
        assert_eq!(result.skipped_ids, vec!["bird::missing".to_string()]);

        let bird = service.get_bird(&a.id).unwrap();
        assert_eq!(bird.medical_history.len(), 1);
        assert_eq!(bird.medical_history[0].description, "Newcastle booster");
        assert_eq!(
            bird.medical_history[0].next_dose.unwrap().to_string(),
            "2024-06-01"
        );

        // Records for different birds get distinct ids
        let other = service.get_bird(&b.id).unwrap();
        assert_ne!(bird.medical_history[0].id, other.medical_history[0].id);
    }

    #[test]
    fn test_medical_history_newest_first() {
        let service = FlockService::new();
        let bird = add_test_bird(&service, "Relampago", "male");

        for (date, description) in [("2024-01-10", "Deworming"), ("2024-02-10", "Vitamins")] {
            service
                .add_medical_record(RecordTreatmentCommand {
                    bird_ids: vec![bird.id.clone()],
                    date: date.to_string(),
                    record_type: "other".to_string(),
                    description: description.to_string(),
                    next_dose: None,
                })
                .unwrap();
        }

        let history = service.get_bird(&bird.id).unwrap().medical_history;
        assert_eq!(history[0].description, "Vitamins");
        assert_eq!(history[1].description, "Deworming");
    }

    #[test]
    fn test_medical_session_rejects_empty_selection() {
        let service = FlockService::new();
        let result = service.add_medical_record(RecordTreatmentCommand {
            bird_ids: vec![],
            date: "2024-03-01".to_string(),
            record_type: "vaccine".to_string(),
            description: "Newcastle".to_string(),
            next_dose: None,
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_overview_stats() {
        let service = FlockService::new();
        let male = add_test_bird(&service, "Relampago", "male");
        let female = add_test_bird(&service, "Zafiro", "female");

        let mut sick = add_test_bird(&service, "Tormenta", "male");
        sick.status = BirdStatus::Sick;
        service.update_bird(UpdateBirdCommand { bird: sick }).unwrap();

        let mut sold = add_test_bird(&service, "Vendido", "male");
        sold.status = BirdStatus::Sold;
        service.update_bird(UpdateBirdCommand { bird: sold }).unwrap();

        service
            .add_pair(CreatePairCommand {
                male_id: male.id.clone(),
                female_id: female.id,
                start_date: "2024-03-10".to_string(),
                eggs_laid: 6,
                is_incubating: true,
                incubation_method: Some("natural".to_string()),
                incubation_start_date: Some("2024-03-12".to_string()),
                eggs_incubating: Some(5),
            })
            .unwrap();
        service
            .add_training_log(combat_command(&male.id, OFFICIAL_COMBAT_ACTIVITY, Some("win")))
            .unwrap();
        service
            .add_training_log(combat_command(&male.id, SPARRING_ACTIVITY, Some("draw")))
            .unwrap();

        let overview = service.overview();
        assert_eq!(overview.total_birds, 4);
        assert_eq!(overview.active_birds, 3);
        assert_eq!(overview.sick, 1);
        assert_eq!(overview.eggs_incubating_total, 5);
        assert_eq!(overview.official_wins, 1);
        assert_eq!(overview.official_losses, 0);
        assert_eq!(overview.sparring_sessions, 1);
        assert!((overview.average_active_weight_kg - 2.2).abs() < 1e-9);
    }

    #[test]
    fn test_overview_empty_flock() {
        let service = FlockService::new();
        let overview = service.overview();
        assert_eq!(overview.total_birds, 0);
        assert_eq!(overview.average_active_weight_kg, 0.0);
    }
}
