use axum::{extract::State, Json};
use indexmap::IndexMap;

use crate::models::Activity;
use crate::services::activity_directory::SharedDirectory;

/// GET /activities — the full catalog, keyed by activity name in seed order.
pub async fn list_activities_handler(
    State(directory): State<SharedDirectory>,
) -> Json<IndexMap<String, Activity>> {
    let snapshot = directory.read().await.activities().clone();
    Json(snapshot)
}
