use utoipa::OpenApi;

use crate::dto::{
    feedback_dto::{CreateFeedbackPayload, FeedbackResponse},
    generate_dto::{ExampleListResponse, GenerateQuestionPayload, QuestionResponse},
    session_dto::{
        CreateSessionPayload, HistoryEntryResponse, SessionHistoryResponse, SessionResponse,
    },
};
use crate::routes;
use crate::services::example_selector::ScoredExample;

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::health::health,
        routes::session::create_session,
        routes::session::get_session,
        routes::session::get_session_history,
        routes::generate::generate_next_question,
        routes::generate::list_examples,
        routes::feedback::submit_feedback,
    ),
    components(schemas(
        CreateSessionPayload,
        SessionResponse,
        HistoryEntryResponse,
        SessionHistoryResponse,
        GenerateQuestionPayload,
        QuestionResponse,
        ScoredExample,
        ExampleListResponse,
        CreateFeedbackPayload,
        FeedbackResponse,
    )),
    tags((name = "conversation-prompter", description = "Discussion question generation API"))
)]
pub struct ApiDoc;
