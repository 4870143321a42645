//! Chat-style expert advisor backed by an external generative-language
//! service.
//!
//! The outbound call is a single request/response behind the
//! [`AdviceProvider`] seam: no retries, no streaming, no partial results.
//! Any provider failure is logged and converted to a fixed apology message,
//! never propagated to the caller.

use anyhow::Result;
use log::{info, warn};
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::domain::flock_service::FlockService;
use crate::domain::models::bird::BirdStatus;
use shared::FarmContext;

/// Fixed user-visible fallback when the provider fails.
pub const FALLBACK_MESSAGE: &str =
    "Sorry, there was a problem consulting the digital expert. Please try again.";

const SYSTEM_PREAMBLE: &str = "You are a world-class gamefowl breeder with decades of \
experience in genetics, nutrition, health and conditioning. Analyze the following \
question and give detailed, professional and ethical advice on raising \
high-performance birds.";

/// Configuration for the generative-language collaborator.
#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    pub model: String,
    pub temperature: f32,
    pub top_p: f32,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            model: "gemini-3-flash-preview".to_string(),
            temperature: 0.7,
            top_p: 0.95,
        }
    }
}

/// Opaque text-completion collaborator: `(config, prompt) -> text`.
pub trait AdviceProvider: Send + Sync {
    fn generate(&self, config: &AdvisorConfig, prompt: &str) -> Result<String>;
}

#[derive(Clone)]
pub struct AdvisorService {
    provider: Arc<dyn AdviceProvider>,
    config: AdvisorConfig,
    flock: FlockService,
}

impl AdvisorService {
    pub fn new(provider: Arc<dyn AdviceProvider>, config: AdvisorConfig, flock: FlockService) -> Self {
        Self {
            provider,
            config,
            flock,
        }
    }

    /// Small flock summary handed to the provider alongside each question.
    pub fn farm_context(&self) -> FarmContext {
        let birds = self.flock.birds();
        let breeds: BTreeSet<String> = birds.iter().map(|b| b.breed.clone()).collect();
        FarmContext {
            bird_count: birds.len(),
            breeds: breeds.into_iter().collect(),
            in_training_count: birds
                .iter()
                .filter(|b| b.status == BirdStatus::InTraining)
                .count(),
        }
    }

    /// Ask the digital expert a free-form question. Always returns text:
    /// either the provider's answer or the fixed fallback message.
    pub fn get_expert_advice(&self, question: &str) -> String {
        info!("Consulting advisor (model: {})", self.config.model);

        let context = serde_json::to_string(&self.farm_context())
            .unwrap_or_else(|_| "{}".to_string());
        let prompt = format!(
            "{}\n\nQuestion: {}\n\nCurrent farm context (if applicable): {}",
            SYSTEM_PREAMBLE, question, context
        );

        match self.provider.generate(&self.config, &prompt) {
            Ok(text) => text,
            Err(e) => {
                warn!("Advice provider failed: {:#}", e);
                FALLBACK_MESSAGE.to_string()
            }
        }
    }
}
