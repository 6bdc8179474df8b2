use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::Serialize;
use tracing::warn;

use crate::database::{ActivityMap, ActivityStore};
use crate::services::activities_service;
use crate::web::error::ApiError;

/// Raw query pairs; a repeated `email` resolves to its last value.
type QueryPairs = Vec<(String, String)>;

fn activity_name(path: Result<Path<String>, PathRejection>) -> Result<String, ApiError> {
    path.map(|Path(name)| name)
        .map_err(|rejection| ApiError::new(rejection.status(), rejection.body_text()))
}

fn email_param(query: Result<Query<QueryPairs>, QueryRejection>) -> Result<String, ApiError> {
    let Query(pairs) =
        query.map_err(|rejection| ApiError::new(rejection.status(), rejection.body_text()))?;
    pairs
        .into_iter()
        .rev()
        .find_map(|(key, value)| (key == "email").then_some(value))
        .ok_or_else(|| ApiError::unprocessable("Field required: email"))
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn list_activities_handler(State(store): State<ActivityStore>) -> Json<ActivityMap> {
    Json(activities_service::list_activities(&store).await)
}

pub async fn signup_handler(
    State(store): State<ActivityStore>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let activity_name = activity_name(path)?;
    let email = email_param(query)?;
    match activities_service::signup(&store, &activity_name, &email).await {
        Ok(outcome) => Ok(Json(MessageResponse {
            message: outcome.message,
        })),
        Err(e) => {
            warn!(activity = %activity_name, email = %email, "signup rejected: {}", e);
            Err(e.into())
        }
    }
}

pub async fn unregister_handler(
    State(store): State<ActivityStore>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let activity_name = activity_name(path)?;
    let email = email_param(query)?;
    match activities_service::unregister(&store, &activity_name, &email).await {
        Ok(outcome) => Ok(Json(MessageResponse {
            message: outcome.message,
        })),
        Err(e) => {
            warn!(activity = %activity_name, email = %email, "unregister rejected: {}", e);
            Err(e.into())
        }
    }
}
