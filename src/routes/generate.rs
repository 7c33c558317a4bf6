use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::generate_dto::{
        ExampleListQuery, ExampleListResponse, GenerateQuestionPayload, QuestionResponse,
    },
    error::Result,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/generate",
    request_body = GenerateQuestionPayload,
    responses(
        (status = 201, description = "Question generated and stored", body = QuestionResponse),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Session not found"),
        (status = 502, description = "LLM provider failure")
    )
)]
#[axum::debug_handler]
pub async fn generate_next_question(
    State(state): State<AppState>,
    Json(payload): Json<GenerateQuestionPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let question = state
        .generation_service
        .generate_next_question(payload.session_id, payload.limit(), payload.temperature())
        .await?;
    Ok((StatusCode::CREATED, Json(QuestionResponse::from(question))))
}

#[utoipa::path(
    get,
    path = "/api/examples",
    params(ExampleListQuery),
    responses(
        (status = 200, description = "Ranked example questions", body = ExampleListResponse),
        (status = 400, description = "Invalid query")
    )
)]
#[axum::debug_handler]
pub async fn list_examples(
    State(state): State<AppState>,
    Query(query): Query<ExampleListQuery>,
) -> Result<impl IntoResponse> {
    query.validate()?;
    let items = state
        .example_selector
        .select(query.limit(), query.temperature())
        .await?;
    Ok(Json(ExampleListResponse { items }))
}
