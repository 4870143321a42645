//! # GalloMaster Backend
//!
//! Domain core for a single-user gamefowl record-keeping application. All
//! state is held in memory for the lifetime of the session; there is no
//! persistence layer, and mutation happens one UI action at a time.
//!
//! The presentation layer talks to the services through [`Backend`], the
//! composition root that owns the entity store and hands cloned handles to
//! every engine.

use std::sync::Arc;

pub mod domain;

pub use domain::advisor_service::{AdviceProvider, AdvisorConfig, FALLBACK_MESSAGE};

/// Main backend struct that orchestrates all services.
pub struct Backend {
    pub flock_service: domain::FlockService,
    pub incubation_service: domain::IncubationService,
    pub health_service: domain::HealthService,
    pub events_service: domain::FarmEventService,
    pub advisor_service: domain::AdvisorService,
}

impl Backend {
    /// Create a new backend instance with all services sharing one store.
    pub fn new(advice_provider: Arc<dyn AdviceProvider>) -> Self {
        Self::with_config(advice_provider, AdvisorConfig::default())
    }

    pub fn with_config(advice_provider: Arc<dyn AdviceProvider>, config: AdvisorConfig) -> Self {
        let flock_service = domain::FlockService::new();
        let incubation_service = domain::IncubationService::new(flock_service.clone());
        let health_service = domain::HealthService::new(flock_service.clone());
        let events_service = domain::FarmEventService::new(flock_service.clone());
        let advisor_service =
            domain::AdvisorService::new(advice_provider, config, flock_service.clone());

        Backend {
            flock_service,
            incubation_service,
            health_service,
            events_service,
            advisor_service,
        }
    }
}
