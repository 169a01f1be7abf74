use std::sync::Arc;

use tracing::debug;

use super::domain::{BoilStep, MashStep, Recipe, StepKind};
use super::repository::RecipeRepository;
use super::seed;
use crate::errors::ServiceError;
use crate::storage::vec_store::VecStore;

/// In-memory recipe collection for one step kind.
/// Payloads are stored verbatim; nothing here looks inside a recipe.
#[derive(Clone)]
pub struct RecipeStore<S> {
    store: VecStore<Recipe<S>>,
}

pub type MashRecipeStore = RecipeStore<MashStep>;
pub type BoilRecipeStore = RecipeStore<BoilStep>;

impl<S: StepKind> RecipeStore<S> {
    pub fn new(recipes: Vec<Recipe<S>>) -> Arc<Self> {
        Arc::new(Self { store: VecStore::new(recipes) })
    }

    /// Full sequence in storage order.
    pub async fn list(&self) -> Vec<Recipe<S>> {
        self.store.list().await
    }

    pub async fn len(&self) -> usize {
        self.store.len().await
    }

    /// Append at the end; returns the new length. No identifier is generated.
    pub async fn append(&self, recipe: Recipe<S>) -> usize {
        let len = self.store.push(recipe).await;
        debug!(kind = S::LABEL, len, "recipe appended");
        len
    }

    pub async fn replace_at(&self, index: usize, recipe: Recipe<S>) -> Result<(), ServiceError> {
        self.store.replace(index, recipe).await?;
        debug!(kind = S::LABEL, index, "recipe replaced");
        Ok(())
    }

    pub async fn remove_at(&self, index: usize) -> Result<Recipe<S>, ServiceError> {
        let removed = self.store.remove(index).await?;
        debug!(kind = S::LABEL, index, name = removed.name(), "recipe removed");
        Ok(removed)
    }
}

impl MashRecipeStore {
    /// Store seeded with the built-in mash schedules.
    pub fn seeded() -> Arc<Self> {
        Self::new(seed::mash_recipes())
    }
}

impl BoilRecipeStore {
    /// Store seeded with the built-in boil schedules.
    pub fn seeded() -> Arc<Self> {
        Self::new(seed::boil_recipes())
    }
}

#[async_trait::async_trait]
impl<S: StepKind> RecipeRepository<S> for RecipeStore<S> {
    async fn list(&self) -> Vec<Recipe<S>> {
        self.list().await
    }

    async fn len(&self) -> usize {
        self.len().await
    }

    async fn append(&self, recipe: Recipe<S>) -> usize {
        self.append(recipe).await
    }

    async fn replace_at(&self, index: usize, recipe: Recipe<S>) -> Result<(), ServiceError> {
        self.replace_at(index, recipe).await
    }

    async fn remove_at(&self, index: usize) -> Result<Recipe<S>, ServiceError> {
        self.remove_at(index).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn test_recipe(name: &str) -> Recipe<MashStep> {
        Recipe::from_steps(name, vec![MashStep::new(65.0, 1.0, 60.0, false), MashStep::end()])
    }

    #[tokio::test]
    async fn append_then_list_puts_recipe_last() {
        let store = MashRecipeStore::seeded();
        let before = store.list().await;

        let len = store.append(Recipe::from_steps("Test", vec![])).await;
        assert_eq!(len, before.len() + 1);

        let after = store.list().await;
        assert_eq!(&after[..before.len()], &before[..]);
        assert_eq!(after.last().unwrap(), &Recipe::from_steps("Test", vec![]));
    }

    #[tokio::test]
    async fn replace_at_each_valid_index() -> Result<(), anyhow::Error> {
        for i in 0..5 {
            let store = MashRecipeStore::seeded();
            let before = store.list().await;
            store.replace_at(i, test_recipe("Replaced")).await?;
            let after = store.list().await;
            assert_eq!(after.len(), before.len());
            for (j, r) in after.iter().enumerate() {
                if j == i {
                    assert_eq!(r, &test_recipe("Replaced"));
                } else {
                    assert_eq!(r, &before[j]);
                }
            }
        }
        Ok(())
    }

    #[tokio::test]
    async fn remove_at_shifts_later_records_down() -> Result<(), anyhow::Error> {
        let store = BoilRecipeStore::seeded();
        let before = store.list().await;
        let removed = store.remove_at(1).await?;
        assert_eq!(removed, before[1]);

        let after = store.list().await;
        assert_eq!(after.len(), 4);
        assert_eq!(after[0], before[0]);
        assert_eq!(&after[1..], &before[2..]);
        Ok(())
    }

    #[tokio::test]
    async fn out_of_range_indices_fail_without_change() {
        let store = MashRecipeStore::seeded();
        let before = store.list().await;
        for i in [5usize, 6, 99, usize::MAX] {
            assert_eq!(
                store.replace_at(i, test_recipe("x")).await,
                Err(ServiceError::out_of_range(i, 5))
            );
            assert_eq!(store.remove_at(i).await, Err(ServiceError::out_of_range(i, 5)));
        }
        assert_eq!(store.list().await, before);
    }

    #[tokio::test]
    async fn usable_through_trait_object() {
        let repo: Arc<dyn RecipeRepository<BoilStep>> = BoilRecipeStore::seeded();
        assert_eq!(repo.len().await, 5);
        repo.append(Recipe::from_steps("Extra", vec![BoilStep::new(30.0, 5.0, true)])).await;
        assert_eq!(repo.list().await[5].name(), "Extra");
    }

    #[tokio::test]
    async fn arbitrary_documents_are_kept_as_given() {
        let store = MashRecipeStore::new(Vec::new());
        let odd = json!({"name": 12, "steps": "not-a-list", "notes": {"a": 1}});
        store.append(Recipe::from_value(odd.clone())).await;
        store.append(Recipe::from_value(json!({"name": "Only"}))).await;

        let listed = serde_json::to_value(store.list().await).unwrap();
        assert_eq!(listed, json!([odd, {"name": "Only"}]));
    }

    #[tokio::test]
    async fn concurrent_appends_are_not_lost() {
        let store = MashRecipeStore::new(Vec::new());
        let mut handles = Vec::new();
        for i in 0..32 {
            let s = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                s.append(Recipe::from_steps(format!("r{i}"), vec![])).await;
            }));
        }
        for h in handles {
            h.await.unwrap();
        }
        assert_eq!(store.len().await, 32);
    }
}
