use crate::error::Result;
use crate::models::feedback::{CreateFeedback, Feedback};
use crate::services::question_service::QuestionService;
use crate::services::session_service::normalize_text;
use sqlx::PgPool;

#[derive(Clone)]
pub struct FeedbackService {
    pool: PgPool,
    questions: QuestionService,
}

impl FeedbackService {
    pub fn new(pool: PgPool) -> Self {
        let questions = QuestionService::new(pool.clone());
        Self { pool, questions }
    }

    /// Records a rating/comment. The session reference is copied from the
    /// rated question.
    pub async fn create(&self, input: CreateFeedback) -> Result<Feedback> {
        let question = self.questions.get_by_id(input.question_id).await?;
        let text = normalize_text(input.feedback);

        let feedback = sqlx::query_as::<_, Feedback>(
            r#"
            INSERT INTO feedback (question_id, session_id, feedback, rating)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question_id, session_id, feedback, rating, created_at
            "#,
        )
        .bind(question.id)
        .bind(question.session_id)
        .bind(&text)
        .bind(input.rating)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(
            feedback_id = feedback.id,
            question_id = feedback.question_id,
            rating = ?feedback.rating,
            "Feedback recorded"
        );

        Ok(feedback)
    }
}
