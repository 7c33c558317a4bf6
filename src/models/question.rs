use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: i32,
    pub session_id: i32,
    pub question: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// One row of a session's question/feedback left join.
///
/// A question rated several times yields one row per feedback entry; an
/// unrated question yields a single row with no rating and no text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct HistoryEntry {
    pub question_id: i32,
    pub question: String,
    pub rating: Option<i32>,
    pub feedback_text: Option<String>,
}

/// A stored question with the mean of its feedback ratings (0 when unrated).
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct RatedQuestion {
    pub id: i32,
    pub text: String,
    pub avg_ranking: f64,
}
