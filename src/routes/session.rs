use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::session_dto::{
        CreateSessionPayload, HistoryEntryResponse, SessionHistoryResponse, SessionResponse,
    },
    error::{Error, Result},
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/sessions",
    request_body = CreateSessionPayload,
    responses(
        (status = 201, description = "Session created", body = SessionResponse),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_session(
    State(state): State<AppState>,
    Json(payload): Json<CreateSessionPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let session = state.session_service.create(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(SessionResponse::from(session))))
}

#[utoipa::path(
    get,
    path = "/api/sessions/{id}",
    params(
        ("id" = i32, Path, description = "Session ID")
    ),
    responses(
        (status = 200, description = "Session found", body = SessionResponse),
        (status = 404, description = "Session not found")
    )
)]
#[axum::debug_handler]
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let session = state
        .session_service
        .find(id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Session {} not found", id)))?;
    Ok(Json(SessionResponse::from(session)))
}

#[utoipa::path(
    get,
    path = "/api/sessions/{id}/history",
    params(
        ("id" = i32, Path, description = "Session ID")
    ),
    responses(
        (status = 200, description = "Questions and feedback of the session, oldest first", body = SessionHistoryResponse)
    )
)]
#[axum::debug_handler]
pub async fn get_session_history(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let rows = state.question_service.session_history(id).await?;
    let items: Vec<HistoryEntryResponse> = rows.into_iter().map(Into::into).collect();
    Ok(Json(SessionHistoryResponse {
        session_id: id,
        items,
    }))
}
