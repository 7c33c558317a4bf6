use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::feedback_dto::{CreateFeedbackPayload, FeedbackResponse},
    error::Result,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/feedback",
    request_body = CreateFeedbackPayload,
    responses(
        (status = 201, description = "Feedback recorded", body = FeedbackResponse),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Question not found")
    )
)]
#[axum::debug_handler]
pub async fn submit_feedback(
    State(state): State<AppState>,
    Json(payload): Json<CreateFeedbackPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let feedback = state.feedback_service.create(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(FeedbackResponse::from(feedback))))
}
