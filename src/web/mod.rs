use std::path::Path;

use axum::{
    response::Redirect,
    routing::{delete, get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::database::ActivityStore;

pub mod error;
pub mod routes;

use routes::activities;

pub const INDEX_PATH: &str = "/static/index.html";

pub fn router(store: ActivityStore, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::temporary(INDEX_PATH) }))
        .route("/activities", get(activities::list_activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(activities::signup_handler),
        )
        .route(
            "/activities/:activity_name/unregister",
            delete(activities::unregister_handler),
        )
        // Frontend
        .nest_service(
            "/static",
            get_service(ServeDir::new(static_dir.as_ref())),
        )
        // Layers
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(store)
}
