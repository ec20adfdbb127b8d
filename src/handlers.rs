use crate::errors::{AppError, StoreError};
use crate::models::{CreateEntryRequest, Entry, MessageResponse, UpdateEntryRequest};
use crate::state::AppState;
use crate::ui::render_index;
use crate::validation::{coerce_create, coerce_update, validate_create};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Html,
    Json,
};
use chrono::Utc;
use tracing::{error, info, warn};

const CREATE_FAILED: &str = "Error creating entry";
const UPDATE_FAILED: &str = "Error updating";
const DELETE_FAILED: &str = "Error deleting entry";

pub async fn index() -> Html<&'static str> {
    Html(render_index())
}

pub async fn list_entries(State(state): State<AppState>) -> Result<Json<Vec<Entry>>, AppError> {
    let entries = state.store.find_all().await.map_err(|err| {
        error!("failed to list entries: {err}");
        AppError::internal("Error listing entries")
    })?;
    Ok(Json(entries))
}

pub async fn get_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Entry>, AppError> {
    let not_found = || AppError::internal(format!("Error finding entry with id {id}"));

    match state.store.find_by_id(&id).await {
        Ok(Some(entry)) => Ok(Json(entry)),
        Ok(None) => {
            warn!(%id, "entry not found");
            Err(not_found())
        }
        Err(err) => {
            error!(%id, "failed to read entry: {err}");
            Err(not_found())
        }
    }
}

pub async fn create_entry(
    State(state): State<AppState>,
    payload: Result<Json<CreateEntryRequest>, JsonRejection>,
) -> Result<Json<Entry>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("rejected create payload: {rejection}");
        AppError::internal(CREATE_FAILED)
    })?;

    let new_entry = coerce_create(request, Utc::now())
        .and_then(validate_create)
        .map_err(|err| {
            warn!("invalid entry: {err}");
            AppError::internal(CREATE_FAILED)
        })?;

    let entry = state.store.create(new_entry).await.map_err(|err| {
        log_store_error("create", &err);
        AppError::internal(CREATE_FAILED)
    })?;

    info!(id = %entry.id, "entry created");
    Ok(Json(entry))
}

pub async fn update_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateEntryRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(%id, "rejected update payload: {rejection}");
        AppError::internal(UPDATE_FAILED)
    })?;

    let changes = coerce_update(request, Utc::now()).map_err(|err| {
        warn!(%id, "invalid update: {err}");
        AppError::internal(UPDATE_FAILED)
    })?;

    state.store.update(&id, changes).await.map_err(|err| {
        log_store_error("update", &err);
        AppError::internal(UPDATE_FAILED)
    })?;

    info!(%id, "entry updated");
    Ok(Json(MessageResponse::new("Updated successfully")))
}

pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    state.store.delete(&id).await.map_err(|err| {
        log_store_error("delete", &err);
        AppError::internal(DELETE_FAILED)
    })?;

    info!(%id, "entry deleted");
    Ok(Json(MessageResponse::new("Deleted successfully")))
}

fn log_store_error(operation: &str, err: &StoreError) {
    match err {
        StoreError::NotFound(_) | StoreError::Duplicate(_) => warn!("{operation} rejected: {err}"),
        _ => error!("{operation} failed: {err}"),
    }
}
