use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::question::Question;
use crate::services::example_selector::{
    ScoredExample, DEFAULT_EXAMPLE_LIMIT, DEFAULT_TEMPERATURE,
};

pub const MAX_EXAMPLE_LIMIT: i64 = 1000;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct GenerateQuestionPayload {
    pub session_id: i32,
    #[validate(range(min = 0, max = 1000))]
    pub limit: Option<i64>,
    #[validate(range(min = 0.0, max = 1.0))]
    pub temperature: Option<f64>,
}

impl GenerateQuestionPayload {
    pub fn limit(&self) -> usize {
        resolve_limit(self.limit)
    }

    pub fn temperature(&self) -> f64 {
        self.temperature.unwrap_or(DEFAULT_TEMPERATURE)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(default)]
pub struct ExampleListQuery {
    #[validate(range(min = 0, max = 1000))]
    pub limit: Option<i64>,
    #[validate(range(min = 0.0, max = 1.0))]
    pub temperature: Option<f64>,
}

impl ExampleListQuery {
    pub fn limit(&self) -> usize {
        resolve_limit(self.limit)
    }

    pub fn temperature(&self) -> f64 {
        self.temperature.unwrap_or(DEFAULT_TEMPERATURE)
    }
}

fn resolve_limit(limit: Option<i64>) -> usize {
    match limit {
        Some(l) => l.clamp(0, MAX_EXAMPLE_LIMIT) as usize,
        None => DEFAULT_EXAMPLE_LIMIT,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionResponse {
    pub id: i32,
    pub session_id: i32,
    pub question: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Question> for QuestionResponse {
    fn from(value: Question) -> Self {
        Self {
            id: value.id,
            session_id: value.session_id,
            question: value.question,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ExampleListResponse {
    pub items: Vec<ScoredExample>,
}
