use crate::error::{is_foreign_key_violation, Error, Result};
use crate::models::question::{HistoryEntry, Question, RatedQuestion};
use sqlx::PgPool;

#[derive(Clone)]
pub struct QuestionService {
    pool: PgPool,
}

impl QuestionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, session_id: i32, text: &str) -> Result<Question> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (session_id, question)
            VALUES ($1, $2)
            RETURNING id, session_id, question, created_at, updated_at
            "#,
        )
        .bind(session_id)
        .bind(text)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                Error::NotFound(format!("Session {} not found", session_id))
            } else {
                e.into()
            }
        })?;

        Ok(question)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Question> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, session_id, question, created_at, updated_at
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        question.ok_or_else(|| Error::NotFound(format!("Question {} not found", id)))
    }

    /// Questions of a session joined with their feedback, oldest question first.
    pub async fn session_history(&self, session_id: i32) -> Result<Vec<HistoryEntry>> {
        let rows = sqlx::query_as::<_, HistoryEntry>(
            r#"
            SELECT
                q.id AS question_id,
                q.question AS question,
                f.rating AS rating,
                f.feedback AS feedback_text
            FROM questions q
            LEFT JOIN feedback f ON f.question_id = q.id
            WHERE q.session_id = $1
            ORDER BY q.created_at ASC, q.id ASC, f.id ASC
            "#,
        )
        .bind(session_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Every stored question with the mean of its ratings; NULL ratings are
    /// ignored and unrated questions score 0.
    pub async fn rated_questions(&self) -> Result<Vec<RatedQuestion>> {
        let rows = sqlx::query_as::<_, RatedQuestion>(
            r#"
            SELECT
                q.id AS id,
                q.question AS text,
                COALESCE(AVG(f.rating), 0)::DOUBLE PRECISION AS avg_ranking
            FROM questions q
            LEFT JOIN feedback f ON f.question_id = q.id
            GROUP BY q.id, q.question
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
