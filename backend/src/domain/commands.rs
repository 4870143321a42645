//! Domain-level command and query types.
//!
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The presentation layer is responsible for
//! mapping its form state onto these internal types. Dates travel as
//! `YYYY-MM-DD` strings and enum fields as their string form; services parse
//! and validate them.

pub mod birds {
    use crate::domain::models::bird::Bird;

    /// Input for registering a new bird.
    #[derive(Debug, Clone)]
    pub struct AddBirdCommand {
        pub plate: String,
        pub name: String,
        pub gender: String,
        pub breed: String,
        pub birth_date: String,
        pub weight_kg: f64,
        /// Defaults to "active" when absent.
        pub status: Option<String>,
        pub father_id: Option<String>,
        pub mother_id: Option<String>,
        pub notes: Option<String>,
    }

    /// Result of registering a bird.
    #[derive(Debug, Clone)]
    pub struct AddBirdResult {
        pub bird: Bird,
    }

    /// Replace-by-id update of a bird's registry entry.
    #[derive(Debug, Clone)]
    pub struct UpdateBirdCommand {
        pub bird: Bird,
    }

    /// Result of updating a bird.
    #[derive(Debug, Clone)]
    pub struct UpdateBirdResult {
        pub bird: Bird,
    }

    /// Command for removing a bird from the registry.
    #[derive(Debug, Clone)]
    pub struct DeleteBirdCommand {
        pub bird_id: String,
    }

    /// Result of deleting a bird.
    #[derive(Debug, Clone)]
    pub struct DeleteBirdResult {
        pub success_message: String,
    }
}

pub mod breeding {
    use crate::domain::models::breeding_pair::BreedingPair;

    /// Input for registering a new breeding pair and, optionally, declaring
    /// incubation of its clutch.
    #[derive(Debug, Clone)]
    pub struct CreatePairCommand {
        pub male_id: String,
        pub female_id: String,
        pub start_date: String,
        pub eggs_laid: u32,
        pub is_incubating: bool,
        pub incubation_method: Option<String>,
        pub incubation_start_date: Option<String>,
        pub eggs_incubating: Option<u32>,
    }

    /// Result of registering a pair.
    #[derive(Debug, Clone)]
    pub struct CreatePairResult {
        pub pair: BreedingPair,
    }
}

pub mod health {
    /// Input for a medical session: one record applied to a batch of birds.
    #[derive(Debug, Clone)]
    pub struct RecordTreatmentCommand {
        pub bird_ids: Vec<String>,
        pub date: String,
        pub record_type: String,
        pub description: String,
        pub next_dose: Option<String>,
    }

    /// Result of a medical session.
    #[derive(Debug, Clone)]
    pub struct RecordTreatmentResult {
        pub records_created: usize,
        /// Ids that matched no bird and were skipped.
        pub skipped_ids: Vec<String>,
    }
}

pub mod training {
    use crate::domain::models::bird::Bird;
    use crate::domain::models::training_log::TrainingLog;

    /// Input for logging a training or combat session.
    #[derive(Debug, Clone)]
    pub struct LogTrainingCommand {
        pub bird_id: String,
        pub date: String,
        pub activity: String,
        pub duration_minutes: u32,
        pub intensity: String,
        pub result: Option<String>,
    }

    /// Result of logging a session. `updated_bird` is set when an official
    /// combat result changed the bird's record.
    #[derive(Debug, Clone)]
    pub struct LogTrainingResult {
        pub log: TrainingLog,
        pub updated_bird: Option<Bird>,
    }
}
