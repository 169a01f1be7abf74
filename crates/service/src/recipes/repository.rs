use async_trait::async_trait;

use super::domain::{Recipe, StepKind};
use crate::errors::ServiceError;

/// Trait abstraction over one ordered recipe collection.
/// Handlers hold `Arc<dyn RecipeRepository<S>>` so the in-memory store can be swapped out.
#[async_trait]
pub trait RecipeRepository<S: StepKind>: Send + Sync {
    async fn list(&self) -> Vec<Recipe<S>>;
    async fn len(&self) -> usize;
    async fn append(&self, recipe: Recipe<S>) -> usize;
    async fn replace_at(&self, index: usize, recipe: Recipe<S>) -> Result<(), ServiceError>;
    async fn remove_at(&self, index: usize) -> Result<Recipe<S>, ServiceError>;
}
