pub mod routes;

use axum::{
    routing::{get, post},
    Router,
};

use crate::services::activity_directory::SharedDirectory;

/// API routes over an injected directory, so main and the tests assemble the
/// exact same router.
pub fn router(directory: SharedDirectory) -> Router {
    Router::new()
        .route("/activities", get(routes::activities::list_activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(routes::activity::signup_handler).delete(routes::activity::unregister_handler),
        )
        .with_state(directory)
}
