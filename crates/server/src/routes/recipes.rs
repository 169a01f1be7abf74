use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use common::types::Ack;
use service::errors::ServiceError;
use service::payload::{read_json, require_non_empty, require_present};
use service::recipes::{Recipe, RecipeRepository, StepKind};
use tracing::info;

use crate::errors::ApiError;

pub type Repo<S> = Arc<dyn RecipeRepository<S>>;

/// CRUD routes for one collection: `{base}` and `{base}/:idx`.
pub fn collection_router<S: StepKind>(base: &str, repo: Repo<S>) -> Router {
    Router::new()
        .route(base, get(list_recipes::<S>).post(create_recipe::<S>))
        .route(
            &format!("{base}/:idx"),
            put(update_recipe::<S>).delete(delete_recipe::<S>),
        )
        .with_state(repo)
}

/// Positional index from the path. Anything that is not a non-negative
/// integer cannot address a record and is reported like any other miss.
async fn parse_index<S: StepKind>(raw: &str, repo: &Repo<S>) -> Result<usize, ApiError> {
    match raw.parse::<usize>() {
        Ok(idx) => Ok(idx),
        Err(_) => Err(ServiceError::out_of_range(usize::MAX, repo.len().await).into()),
    }
}

pub async fn list_recipes<S: StepKind>(State(repo): State<Repo<S>>) -> Json<Vec<Recipe<S>>> {
    Json(repo.list().await)
}

pub async fn create_recipe<S: StepKind>(
    State(repo): State<Repo<S>>,
    body: Bytes,
) -> Result<(StatusCode, Json<Ack>), ApiError> {
    let recipe = Recipe::<S>::from_value(require_present(read_json(&body)?)?);
    let name = recipe.name().to_owned();
    let steps = recipe.step_count();
    let len = repo.append(recipe).await;
    info!(kind = S::LABEL, %name, ?steps, len, "recipe created");
    Ok((StatusCode::CREATED, Json(Ack::new(format!("{} recipe added", S::LABEL)))))
}

pub async fn update_recipe<S: StepKind>(
    State(repo): State<Repo<S>>,
    Path(raw): Path<String>,
    body: Bytes,
) -> Result<Json<Ack>, ApiError> {
    let idx = parse_index(&raw, &repo).await?;
    // stored as sent, including an absent body
    let recipe = match read_json(&body) {
        Ok(value) => Recipe::<S>::from_value(value),
        // a bad index wins over a bad body
        Err(e) => {
            let len = repo.len().await;
            if idx >= len {
                return Err(ServiceError::out_of_range(idx, len).into());
            }
            return Err(e.into());
        }
    };
    repo.replace_at(idx, recipe).await?;
    info!(kind = S::LABEL, index = idx, "recipe updated");
    Ok(Json(Ack::new(format!("{} recipe {idx} updated", S::LABEL))))
}

pub async fn delete_recipe<S: StepKind>(
    State(repo): State<Repo<S>>,
    Path(raw): Path<String>,
) -> Result<Json<Ack>, ApiError> {
    let idx = parse_index(&raw, &repo).await?;
    let removed = repo.remove_at(idx).await?;
    info!(kind = S::LABEL, index = idx, name = removed.name(), "recipe deleted");
    Ok(Json(Ack::new(format!("{} recipe {idx} deleted", S::LABEL))))
}

/// Guarded import: appends like the create route but also turns away empty
/// documents. The bearer check runs as a route layer before this handler
/// reads the body.
pub async fn import_recipe<S: StepKind>(
    State(repo): State<Repo<S>>,
    body: Bytes,
) -> Result<(StatusCode, Json<Ack>), ApiError> {
    let recipe = Recipe::<S>::from_value(require_non_empty(read_json(&body)?)?);
    let name = recipe.name().to_owned();
    let len = repo.append(recipe).await;
    info!(kind = S::LABEL, %name, len, "recipe imported");
    Ok((StatusCode::CREATED, Json(Ack::new("Recipe imported"))))
}
