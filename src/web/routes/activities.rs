use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

use crate::services::activities_service;
use crate::store::{ActivityDirectory, DirectoryError};

#[derive(Debug, Deserialize)]
pub struct RosterQuery {
    email: String,
}

pub async fn activities_handler(State(directory): State<Arc<ActivityDirectory>>) -> Json<Value> {
    Json(activities_service::list_activities(&directory))
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<RosterQuery>,
    State(directory): State<Arc<ActivityDirectory>>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    activities_service::signup(&directory, &activity_name, &query.email)
        .map(|message| Json(json!({ "message": message })))
        .map_err(|e| {
            warn!(activity = %activity_name, email = %query.email, "signup_rejected: {}", e);
            reject(e)
        })
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<RosterQuery>,
    State(directory): State<Arc<ActivityDirectory>>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    activities_service::unregister(&directory, &activity_name, &query.email)
        .map(|message| Json(json!({ "message": message })))
        .map_err(|e| {
            warn!(activity = %activity_name, email = %query.email, "unregister_rejected: {}", e);
            reject(e)
        })
}

fn reject(err: DirectoryError) -> (StatusCode, Json<Value>) {
    let status = match err {
        DirectoryError::ActivityNotFound | DirectoryError::ParticipantNotFound => {
            StatusCode::NOT_FOUND
        }
        DirectoryError::AlreadySignedUp | DirectoryError::ActivityFull => StatusCode::BAD_REQUEST,
    };
    (status, Json(json!({ "detail": err.to_string() })))
}
