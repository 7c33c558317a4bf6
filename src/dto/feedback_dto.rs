use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::feedback::{CreateFeedback, Feedback};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateFeedbackPayload {
    pub question_id: i32,
    #[validate(range(min = -1, max = 1))]
    pub rating: Option<i32>,
    #[validate(length(max = 4000))]
    pub feedback: Option<String>,
}

impl From<CreateFeedbackPayload> for CreateFeedback {
    fn from(value: CreateFeedbackPayload) -> Self {
        Self {
            question_id: value.question_id,
            feedback: value.feedback,
            rating: value.rating,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FeedbackResponse {
    pub id: i32,
    pub question_id: i32,
    pub session_id: i32,
    pub feedback: Option<String>,
    pub rating: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl From<Feedback> for FeedbackResponse {
    fn from(value: Feedback) -> Self {
        Self {
            id: value.id,
            question_id: value.question_id,
            session_id: value.session_id,
            feedback: value.feedback,
            rating: value.rating,
            created_at: value.created_at,
        }
    }
}
