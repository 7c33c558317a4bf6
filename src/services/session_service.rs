use crate::error::Result;
use crate::models::session::{CreateSession, Session};
use sqlx::PgPool;

#[derive(Clone)]
pub struct SessionService {
    pool: PgPool,
}

impl SessionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a session. Blank theme or instructions are stored as NULL, so
    /// an empty payload is the "skip" path and still succeeds.
    pub async fn create(&self, input: CreateSession) -> Result<Session> {
        let theme = normalize_text(input.theme);
        let custom_instructions = normalize_text(input.custom_instructions);

        let session = sqlx::query_as::<_, Session>(
            r#"
            INSERT INTO sessions (theme, custom_instructions)
            VALUES ($1, $2)
            RETURNING id, theme, custom_instructions, created_at, updated_at
            "#,
        )
        .bind(&theme)
        .bind(&custom_instructions)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(
            session_id = session.id,
            has_theme = session.theme.is_some(),
            has_instructions = session.custom_instructions.is_some(),
            "Session created"
        );

        Ok(session)
    }

    pub async fn find(&self, id: i32) -> Result<Option<Session>> {
        let session = sqlx::query_as::<_, Session>(
            r#"
            SELECT id, theme, custom_instructions, created_at, updated_at
            FROM sessions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(session)
    }
}

pub(crate) fn normalize_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
