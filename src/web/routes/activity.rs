use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::services::activity_directory::{DirectoryError, SharedDirectory};

#[derive(Debug, Deserialize)]
pub struct SignupQuery {
    /// Required; no format validation beyond presence.
    pub email: String,
}

/// POST /activities/:activity_name/signup?email=...
pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<SignupQuery>,
    State(directory): State<SharedDirectory>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let mut directory = directory.write().await;
    match directory.signup(&activity_name, &query.email) {
        Ok(message) => Ok(Json(serde_json::json!({ "message": message }))),
        Err(e) => {
            warn!(activity = %activity_name, email = %query.email, "Signup rejected: {}", e);
            Err(reject(e))
        }
    }
}

/// DELETE /activities/:activity_name/signup?email=...
pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<SignupQuery>,
    State(directory): State<SharedDirectory>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let mut directory = directory.write().await;
    match directory.unregister(&activity_name, &query.email) {
        Ok(message) => Ok(Json(serde_json::json!({ "message": message }))),
        Err(e) => {
            warn!(activity = %activity_name, email = %query.email, "Unregister rejected: {}", e);
            Err(reject(e))
        }
    }
}

fn reject(err: DirectoryError) -> (StatusCode, Json<Value>) {
    (err.status(), Json(serde_json::json!({ "detail": err.to_string() })))
}
