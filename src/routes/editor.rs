use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{
    AppState,
    editor::SaveOutcome,
    error::{AppError, Result},
    models::{EditorCommand, EditorSaveResponse, EditorSessionView, OpenEditorRequest},
};

pub async fn open_session(
    State(state): State<AppState>,
    Json(payload): Json<OpenEditorRequest>,
) -> Result<(StatusCode, Json<EditorSessionView>)> {
    let view = state.editor.open(&state.catalog, payload.product_id).await?;

    Ok((StatusCode::CREATED, Json(view)))
}

pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<EditorSessionView>> {
    Ok(Json(state.editor.view(id)?))
}

pub async fn apply_command(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(command): Json<EditorCommand>,
) -> Result<Json<EditorSessionView>> {
    let view = state.editor.apply(&state.catalog, id, command).await?;

    Ok(Json(view))
}

pub async fn save_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<EditorSaveResponse>> {
    match state.editor.save(&state.catalog, id).await? {
        SaveOutcome::Saved(product) => Ok(Json(EditorSaveResponse {
            message: "Images updated successfully!".to_string(),
            product,
        })),
        SaveOutcome::Rejected(message) | SaveOutcome::Failed(message) => {
            Err(AppError::UnprocessableEntity(message))
        }
    }
}

pub async fn cancel_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    state.editor.cancel(id)?;

    Ok(StatusCode::NO_CONTENT)
}
