pub mod config;
pub mod database;
pub mod docs;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod telemetry;

use crate::config::Config;
use crate::error::Result;
use crate::services::{
    ai_service::{build_http_client, AIService, TextGenerator, LLM_REQUEST_TIMEOUT},
    example_selector::ExampleSelector,
    feedback_service::FeedbackService,
    generation_service::GenerationService,
    question_service::QuestionService,
    session_service::SessionService,
};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub session_service: SessionService,
    pub question_service: QuestionService,
    pub feedback_service: FeedbackService,
    pub example_selector: ExampleSelector,
    pub generation_service: GenerationService,
}

impl AppState {
    pub fn new(pool: PgPool, config: &Config) -> Result<Self> {
        let http_client = build_http_client(LLM_REQUEST_TIMEOUT)?;

        let ai_service = AIService::new(
            config.anthropic_api_key.clone(),
            config.anthropic_model.clone(),
            config.anthropic_base_url.clone(),
            config.anthropic_max_tokens,
            http_client,
        );

        Ok(Self::with_generator(pool, Arc::new(ai_service)))
    }

    /// Builds the state around any text generator.
    pub fn with_generator(pool: PgPool, generator: Arc<dyn TextGenerator>) -> Self {
        let session_service = SessionService::new(pool.clone());
        let question_service = QuestionService::new(pool.clone());
        let feedback_service = FeedbackService::new(pool.clone());
        let example_selector = ExampleSelector::new(question_service.clone());
        let generation_service = GenerationService::new(
            session_service.clone(),
            question_service.clone(),
            example_selector.clone(),
            generator,
        );

        Self {
            session_service,
            question_service,
            feedback_service,
            example_selector,
            generation_service,
        }
    }
}
