//! Member handlers
//!
//! A lookup miss is not an error here: `GET /member/{id}` answers 200 with a
//! JSON `null` body, and `DELETE /member/{id}` answers `null` whether or not
//! a record was removed. Only store faults become 5xx responses.

use crate::AppState;
use axum::{
    extract::{Form, Path, State},
    http::StatusCode,
    Json,
};
use member_types::Member;

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Option<Member>>, StatusCode> {
    match state.store.find_by_id(id).await {
        Ok(member) => Ok(Json(member)),
        Err(e) => {
            tracing::error!("Failed to look up member {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Member>>, StatusCode> {
    match state.store.find_all().await {
        Ok(members) => Ok(Json(members)),
        Err(e) => {
            tracing::error!("Failed to list members: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn create(
    State(state): State<AppState>,
    Form(member): Form<Member>,
) -> Result<Json<Member>, StatusCode> {
    match state.store.save(member).await {
        Ok(saved) => Ok(Json(saved)),
        Err(e) => {
            tracing::error!("Failed to save member: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Option<Member>>, StatusCode> {
    let found = match state.store.find_by_id(id).await {
        Ok(found) => found,
        Err(e) => {
            tracing::error!("Failed to look up member {}: {}", id, e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    if let Some(member) = found {
        if let Err(e) = state.store.delete(&member).await {
            tracing::error!("Failed to delete member {}: {}", id, e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    Ok(Json(None))
}
