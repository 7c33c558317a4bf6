use crate::error::Result;
use crate::models::question::Question;
use crate::services::ai_service::TextGenerator;
use crate::services::example_selector::{clamp_temperature, ExampleSelector};
use crate::services::prompt_service::{build_prompts, SessionContext};
use crate::services::question_service::QuestionService;
use crate::services::session_service::SessionService;
use std::sync::Arc;

#[derive(Clone)]
pub struct GenerationService {
    sessions: SessionService,
    questions: QuestionService,
    selector: ExampleSelector,
    generator: Arc<dyn TextGenerator>,
}

impl GenerationService {
    pub fn new(
        sessions: SessionService,
        questions: QuestionService,
        selector: ExampleSelector,
        generator: Arc<dyn TextGenerator>,
    ) -> Self {
        Self {
            sessions,
            questions,
            selector,
            generator,
        }
    }

    /// Generates and stores the next question for a session.
    ///
    /// A missing session is not rejected up front: the prompt is built without
    /// theme or instructions and the insert fails on the session reference.
    /// There is no transaction around the LLM call and the insert.
    pub async fn generate_next_question(
        &self,
        session_id: i32,
        limit: usize,
        temperature: f64,
    ) -> Result<Question> {
        let temperature = clamp_temperature(temperature);

        let session = self.sessions.find(session_id).await?;
        if session.is_none() {
            tracing::warn!(session_id, "Generating for unknown session");
        }

        let history = self.questions.session_history(session_id).await?;
        let examples = self.selector.select(limit, temperature).await?;

        let context = SessionContext {
            theme: session.as_ref().and_then(|s| s.theme.as_deref()),
            custom_instructions: session
                .as_ref()
                .and_then(|s| s.custom_instructions.as_deref()),
        };
        let example_texts: Vec<&str> = examples.iter().map(|e| e.text.as_str()).collect();
        let prompts = build_prompts(context, &example_texts, &history);

        tracing::info!(
            session_id,
            examples = examples.len(),
            history = history.len(),
            temperature,
            "Requesting next question"
        );

        let text = self.generator.generate(prompts).await.map_err(|e| {
            tracing::error!(session_id, error = %e, "Question generation failed");
            e
        })?;

        let question = self.questions.create(session_id, &text).await.map_err(|e| {
            tracing::error!(
                session_id,
                generated_len = text.len(),
                error = %e,
                "Generated question could not be stored"
            );
            e
        })?;

        tracing::info!(session_id, question_id = question.id, "Question stored");
        Ok(question)
    }
}
