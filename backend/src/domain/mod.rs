//! # Domain Module
//!
//! Business logic for the gamefowl registry: the entity store and the four
//! derived-metrics engines built on top of it.
//!
//! ## Module Organization
//!
//! - **flock_service**: in-memory entity store for birds, breeding pairs and
//!   training logs, with all mutation operations
//! - **calendar**: pure date/interval arithmetic shared by the engines
//! - **incubation_service**: 21-day incubation timelines, milestones and
//!   stage guidance
//! - **health_service**: medical due dates, critical alerts and immunization
//!   coverage
//! - **events_service**: consolidated farm calendar merging health and
//!   breeding events
//! - **advisor_service**: chat-style expert advice via an injected
//!   generative-language provider
//! - **commands**: internal command/query/result types used by the services
//! - **models**: the domain entities themselves
//!
//! ## Design Principles
//!
//! - Derived lists are pure functions over a store snapshot, recomputed per
//!   query — the dataset is small and mutation is single-threaded
//! - "Today" is evaluated once per query; every service exposes `_on(date)`
//!   variants so tests never depend on the wall clock
//! - Failures degrade to safe defaults (0%, empty list, fallback text)
//!   instead of surfacing to the caller

pub mod advisor_service;
pub mod calendar;
pub mod commands;
pub mod events_service;
pub mod flock_service;
pub mod health_service;
pub mod incubation_service;
pub mod models;

pub use advisor_service::{AdviceProvider, AdvisorConfig, AdvisorService};
pub use events_service::FarmEventService;
pub use flock_service::FlockService;
pub use health_service::HealthService;
pub use incubation_service::IncubationService;
