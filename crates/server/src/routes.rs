pub mod auth;
pub mod recipes;
pub mod telemetry;

use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use service::recipes::StepKind;

use crate::state::AppState;
use recipes::Repo;

pub const MASH_PATH: &str = "/api/recipes";
pub const BOIL_PATH: &str = "/api/chmelovarRecipes";
pub const IMPORT_MASH_PATH: &str = "/api/importRecipe";
pub const IMPORT_BOIL_PATH: &str = "/api/importChmelovar";

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Import route for one collection, behind the bearer-token layer.
fn import_router<S: StepKind>(path: &str, repo: Repo<S>, state: &AppState) -> Router {
    Router::new()
        .route(path, post(recipes::import_recipe::<S>))
        .route_layer(middleware::from_fn_with_state(
            state.guard.clone(),
            auth::require_bearer_token,
        ))
        .with_state(repo)
}

/// Build the full application router.
/// The plain collection routes are not guarded; only the import routes are.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/api/temperatures", get(telemetry::temperatures))
        .route("/api/waterLevel", get(telemetry::water_level))
        .route("/api/status", get(telemetry::system_status))
        .route("/api/login", post(auth::login))
        .with_state(state.guard.clone());

    let collections = Router::new()
        .merge(recipes::collection_router(MASH_PATH, state.mash.clone()))
        .merge(recipes::collection_router(BOIL_PATH, state.boil.clone()));

    let imports = Router::new()
        .merge(import_router(IMPORT_MASH_PATH, state.mash.clone(), &state))
        .merge(import_router(IMPORT_BOIL_PATH, state.boil.clone(), &state));

    public
        .merge(collections)
        .merge(imports)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
