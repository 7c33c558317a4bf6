use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::question::HistoryEntry;
use crate::models::session::{CreateSession, Session};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct CreateSessionPayload {
    #[validate(length(max = 500))]
    pub theme: Option<String>,
    #[validate(length(max = 4000))]
    pub custom_instructions: Option<String>,
}

impl From<CreateSessionPayload> for CreateSession {
    fn from(value: CreateSessionPayload) -> Self {
        Self {
            theme: value.theme,
            custom_instructions: value.custom_instructions,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionResponse {
    pub id: i32,
    pub theme: Option<String>,
    pub custom_instructions: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Session> for SessionResponse {
    fn from(value: Session) -> Self {
        Self {
            id: value.id,
            theme: value.theme,
            custom_instructions: value.custom_instructions,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HistoryEntryResponse {
    pub question_id: i32,
    pub question: String,
    pub rating: Option<i32>,
    pub feedback: Option<String>,
}

impl From<HistoryEntry> for HistoryEntryResponse {
    fn from(value: HistoryEntry) -> Self {
        Self {
            question_id: value.question_id,
            question: value.question,
            rating: value.rating,
            feedback: value.feedback_text,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionHistoryResponse {
    pub session_id: i32,
    pub items: Vec<HistoryEntryResponse>,
}
